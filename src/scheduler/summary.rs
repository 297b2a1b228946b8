//! Per-process view of a timeline.
//!
//! Interval metrics are slice-local: under Round-Robin or STRF a process
//! appears several times, each with its own turnaround and waiting time.
//! This view folds a process's slices into one row, so waiting time is
//! the total time it was ready but not running. The timeline itself is
//! not modified.

use serde::{Deserialize, Serialize};

use crate::models::ScheduleTimeline;

/// End-to-end figures for one process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSummary {
    /// Process name.
    pub process: String,
    /// Arrival time.
    pub arrival_time: i64,
    /// Total burst time.
    pub burst_time: i64,
    /// First time the process got the CPU.
    pub first_start: i64,
    /// Finish time of the last slice.
    pub completion_time: i64,
    /// `completion_time - arrival_time`.
    pub turnaround_time: i64,
    /// `turnaround_time - burst_time`.
    pub waiting_time: i64,
    /// `first_start - arrival_time`.
    pub response_time: i64,
    /// Number of slices the process was split into.
    pub slices: usize,
}

impl ProcessSummary {
    /// Summarizes every process in the timeline, in order of first appearance.
    pub fn from_timeline(timeline: &ScheduleTimeline) -> Vec<Self> {
        let mut rows: Vec<Self> = Vec::new();

        for iv in timeline {
            match rows.iter_mut().find(|r| r.process == iv.process) {
                Some(row) => {
                    row.first_start = row.first_start.min(iv.start_time);
                    row.completion_time = row.completion_time.max(iv.finish_time);
                    row.slices += 1;
                }
                None => rows.push(Self {
                    process: iv.process.clone(),
                    arrival_time: iv.arrival_time,
                    burst_time: iv.burst_time,
                    first_start: iv.start_time,
                    completion_time: iv.finish_time,
                    turnaround_time: 0,
                    waiting_time: 0,
                    response_time: 0,
                    slices: 1,
                }),
            }
        }

        for row in &mut rows {
            row.turnaround_time = row.completion_time - row.arrival_time;
            row.waiting_time = row.turnaround_time - row.burst_time;
            row.response_time = row.first_start - row.arrival_time;
        }

        rows
    }
}

/// Averages over per-process summaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Number of processes.
    pub process_count: usize,
    /// Mean completion − arrival.
    pub average_turnaround: f64,
    /// Mean total time spent ready but not running.
    pub average_waiting: f64,
    /// Mean first start − arrival.
    pub average_response: f64,
}

impl ProcessMetrics {
    /// Computes per-process averages for a timeline.
    pub fn calculate(timeline: &ScheduleTimeline) -> Self {
        Self::from_summaries(&ProcessSummary::from_timeline(timeline))
    }

    /// Averages precomputed summaries. Empty input yields zeros.
    pub fn from_summaries(rows: &[ProcessSummary]) -> Self {
        let n = rows.len();
        let mean = |f: fn(&ProcessSummary) -> i64| {
            if n == 0 {
                0.0
            } else {
                rows.iter().map(|r| i128::from(f(r))).sum::<i128>() as f64 / n as f64
            }
        };

        Self {
            process_count: n,
            average_turnaround: mean(|r| r.turnaround_time),
            average_waiting: mean(|r| r.waiting_time),
            average_response: mean(|r| r.response_time),
        }
    }
}
