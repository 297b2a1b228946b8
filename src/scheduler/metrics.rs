//! Timeline quality metrics.
//!
//! Computes averages over the intervals of a completed timeline, exactly
//! as they are emitted. For preemptive disciplines each slice contributes
//! its own slice-local turnaround and waiting time; use
//! [`ProcessMetrics`](super::ProcessMetrics) for per-process figures.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Average turnaround | Σ(finish − arrival) / interval count |
//! | Average waiting | Σ(start − arrival) / interval count |
//! | Makespan | Latest finish time |
//! | Busy time | Σ interval durations |
//! | CPU utilization | busy time / makespan |

use serde::{Deserialize, Serialize};

use crate::models::ScheduleTimeline;

/// Interval-level performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineMetrics {
    /// Number of intervals averaged over.
    pub interval_count: usize,
    /// Mean slice-local turnaround time.
    pub average_turnaround: f64,
    /// Mean slice-local waiting time.
    pub average_waiting: f64,
    /// Latest finish time.
    pub makespan: i64,
    /// Total CPU time handed out.
    pub busy_time: i64,
    /// Fraction of `[0, makespan)` the CPU was busy (0.0..1.0).
    pub cpu_utilization: f64,
}

impl TimelineMetrics {
    /// Computes metrics for a timeline. An empty timeline yields zeros.
    pub fn calculate(timeline: &ScheduleTimeline) -> Self {
        let interval_count = timeline.interval_count();
        let makespan = timeline.makespan();
        let busy_time = timeline.busy_time();

        // Per-slice figures are bounded by the clock, but their sums are
        // not; accumulate wide.
        let (total_turnaround, total_waiting) = timeline
            .iter()
            .fold((0i128, 0i128), |(ta, wt), iv| {
                (
                    ta + i128::from(iv.turnaround_time),
                    wt + i128::from(iv.waiting_time),
                )
            });

        let average = |total: i128| {
            if interval_count == 0 {
                0.0
            } else {
                total as f64 / interval_count as f64
            }
        };

        let cpu_utilization = if makespan <= 0 {
            0.0
        } else {
            busy_time as f64 / makespan as f64
        };

        Self {
            interval_count,
            average_turnaround: average(total_turnaround),
            average_waiting: average(total_waiting),
            makespan,
            busy_time,
            cpu_utilization,
        }
    }

    /// Average turnaround formatted with two decimals.
    pub fn turnaround_display(&self) -> String {
        format_average(self.average_turnaround)
    }

    /// Average waiting time formatted with two decimals.
    pub fn waiting_display(&self) -> String {
        format_average(self.average_waiting)
    }
}

/// Rounds to two decimal places.
pub fn round_for_display(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Formats with exactly two decimals (e.g. `5.50`).
pub fn format_average(value: f64) -> String {
    format!("{:.2}", round_for_display(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Discipline, ExecutionInterval, Process};

    fn timeline(slices: &[(&str, i64, i64, i64, i64)]) -> ScheduleTimeline {
        let mut t = ScheduleTimeline::new(Discipline::Fcfs);
        for &(name, arrival, burst, start, finish) in slices {
            let p = Process::new(name, arrival, burst);
            t.push(ExecutionInterval::new(&p, start, finish));
        }
        t
    }

    #[test]
    fn test_metrics_basic() {
        let t = timeline(&[("P1", 0, 5, 0, 5), ("P2", 1, 3, 5, 8)]);
        let m = TimelineMetrics::calculate(&t);
        assert_eq!(m.interval_count, 2);
        assert!((m.average_turnaround - 6.0).abs() < 1e-10); // (5 + 7) / 2
        assert!((m.average_waiting - 2.0).abs() < 1e-10); // (0 + 4) / 2
        assert_eq!(m.makespan, 8);
        assert_eq!(m.busy_time, 8);
        assert!((m.cpu_utilization - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_idle_lowers_utilization() {
        let t = timeline(&[("P1", 0, 2, 0, 2), ("P2", 6, 2, 6, 8)]);
        let m = TimelineMetrics::calculate(&t);
        assert!((m.cpu_utilization - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_empty() {
        let m = TimelineMetrics::calculate(&ScheduleTimeline::new(Discipline::Sjf));
        assert_eq!(m.interval_count, 0);
        assert!((m.average_turnaround - 0.0).abs() < 1e-10);
        assert!((m.average_waiting - 0.0).abs() < 1e-10);
        assert!((m.cpu_utilization - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_sums_do_not_overflow() {
        // Each turnaround fits in i64; their sum does not
        let near_max = i64::MAX - 1;
        let t = timeline(&[
            ("P1", 0, near_max, 0, near_max),
            ("P2", 0, 1, near_max, i64::MAX),
        ]);
        let m = TimelineMetrics::calculate(&t);
        let expected = (near_max as f64 + i64::MAX as f64) / 2.0;
        assert!((m.average_turnaround - expected).abs() / expected < 1e-12);
        assert_eq!(m.busy_time, i64::MAX);
    }

    #[test]
    fn test_display_rounding() {
        let t = timeline(&[
            ("P1", 0, 1, 0, 1),
            ("P2", 0, 1, 1, 2),
            ("P3", 0, 2, 2, 4),
        ]);
        let m = TimelineMetrics::calculate(&t);
        // turnaround (1 + 2 + 4) / 3 = 2.333..., waiting (0 + 1 + 2) / 3 = 1.0
        assert_eq!(m.turnaround_display(), "2.33");
        assert_eq!(m.waiting_display(), "1.00");
    }

    #[test]
    fn test_round_for_display() {
        assert!((round_for_display(5.4999) - 5.5).abs() < 1e-10);
        assert!((round_for_display(2.0 / 3.0) - 0.67).abs() < 1e-10);
        assert_eq!(format_average(7.0), "7.00");
        assert_eq!(format_average(5.5), "5.50");
    }
}
