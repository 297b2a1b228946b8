//! Schedule timeline (simulation output).
//!
//! A timeline is the chronological list of CPU slices produced by one
//! simulation run. On a single CPU no two slices overlap, and slices are
//! emitted in start-time order.

use serde::{Deserialize, Serialize};

use super::{Discipline, ExecutionInterval};

/// The ordered output of one simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleTimeline {
    /// Discipline that produced this timeline.
    pub discipline: Discipline,
    /// CPU slices in start-time order.
    pub intervals: Vec<ExecutionInterval>,
}

impl ScheduleTimeline {
    /// Creates an empty timeline.
    pub fn new(discipline: Discipline) -> Self {
        Self {
            discipline,
            intervals: Vec::new(),
        }
    }

    /// Appends a slice.
    pub fn push(&mut self, interval: ExecutionInterval) {
        self.intervals.push(interval);
    }

    /// Iterates slices in start-time order.
    pub fn iter(&self) -> std::slice::Iter<'_, ExecutionInterval> {
        self.intervals.iter()
    }

    /// Latest finish time across all slices (0 if empty).
    pub fn makespan(&self) -> i64 {
        self.intervals.iter().map(|iv| iv.finish_time).max().unwrap_or(0)
    }

    /// Total CPU time handed out, saturating at `i64::MAX`.
    pub fn busy_time(&self) -> i64 {
        self.intervals
            .iter()
            .fold(0i64, |acc, iv| acc.saturating_add(iv.duration()))
    }

    /// Time the CPU sat idle between t=0 and the makespan.
    pub fn idle_time(&self) -> i64 {
        self.makespan() - self.busy_time()
    }

    /// All slices of one process, in order.
    pub fn intervals_for(&self, process: &str) -> Vec<&ExecutionInterval> {
        self.intervals
            .iter()
            .filter(|iv| iv.process == process)
            .collect()
    }

    /// Completion time of a process (finish of its last slice).
    pub fn completion_time(&self, process: &str) -> Option<i64> {
        self.intervals_for(process)
            .iter()
            .map(|iv| iv.finish_time)
            .max()
    }

    /// First time a process got the CPU.
    pub fn first_start(&self, process: &str) -> Option<i64> {
        self.intervals_for(process)
            .iter()
            .map(|iv| iv.start_time)
            .min()
    }

    /// Process names in order of first appearance.
    pub fn process_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for iv in &self.intervals {
            if !names.contains(&iv.process.as_str()) {
                names.push(&iv.process);
            }
        }
        names
    }

    /// Sequence of process names, one entry per slice.
    pub fn execution_order(&self) -> Vec<&str> {
        self.intervals.iter().map(|iv| iv.process.as_str()).collect()
    }

    /// Whether slices are sorted by start, non-empty, and pairwise disjoint.
    ///
    /// Sorted and adjacent-disjoint implies globally disjoint.
    pub fn is_well_formed(&self) -> bool {
        self.intervals.iter().all(|iv| iv.duration() > 0)
            && self
                .intervals
                .windows(2)
                .all(|w| w[0].start_time <= w[1].start_time && w[0].finish_time <= w[1].start_time)
    }

    /// Number of slices.
    pub fn interval_count(&self) -> usize {
        self.intervals.len()
    }

    /// Whether the timeline has no slices.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
}

impl<'a> IntoIterator for &'a ScheduleTimeline {
    type Item = &'a ExecutionInterval;
    type IntoIter = std::slice::Iter<'a, ExecutionInterval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}
