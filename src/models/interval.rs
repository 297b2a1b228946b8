//! Execution interval model.
//!
//! An interval is one contiguous, uninterrupted slice of CPU time given
//! to a single process. Preemptive disciplines emit several intervals per
//! process; non-preemptive ones emit exactly one.

use serde::{Deserialize, Serialize};

use super::Process;

/// Display color assigned to every interval.
pub const DEFAULT_INTERVAL_COLOR: &str = "#017BFE";

/// A CPU slice assigned to one process.
///
/// `turnaround_time` and `waiting_time` are local to this slice: they are
/// measured from the process's arrival to this slice's finish and start.
/// For a process split across several slices, only the last slice's
/// `finish_time` is its completion; see
/// [`ProcessSummary`](crate::scheduler::ProcessSummary) for the
/// per-process view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionInterval {
    /// Process name.
    pub process: String,
    /// Slice start time.
    pub start_time: i64,
    /// Slice end time (exclusive, always > `start_time`).
    pub finish_time: i64,
    /// Arrival time of the process.
    pub arrival_time: i64,
    /// Total burst time of the process.
    pub burst_time: i64,
    /// `finish_time - arrival_time`.
    pub turnaround_time: i64,
    /// `start_time - arrival_time`.
    pub waiting_time: i64,
    /// Rendering hint for chart consumers.
    pub color: String,
}

impl ExecutionInterval {
    /// Creates a slice for `process` covering `[start_time, finish_time)`.
    pub fn new(process: &Process, start_time: i64, finish_time: i64) -> Self {
        Self {
            process: process.name.clone(),
            start_time,
            finish_time,
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            turnaround_time: finish_time - process.arrival_time,
            waiting_time: start_time - process.arrival_time,
            color: DEFAULT_INTERVAL_COLOR.to_string(),
        }
    }

    /// Slice length.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.finish_time - self.start_time
    }

    /// Whether the two slices share any instant of CPU time.
    pub fn overlaps(&self, other: &ExecutionInterval) -> bool {
        self.start_time < other.finish_time && other.start_time < self.finish_time
    }
}
