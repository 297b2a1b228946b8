//! Simulation driver and timeline metrics.
//!
//! # Algorithm
//!
//! [`Simulator`] runs a single loop for every discipline: ask the
//! [`DispatchPolicy`](crate::dispatching::DispatchPolicy) for a decision,
//! charge the chosen process for one slice, record the interval, advance
//! the clock. Disciplines differ only in the policy plugged in.
//!
//! # Metrics
//!
//! - [`TimelineMetrics`]: averages over emitted intervals, as displayed
//!   under the process table.
//! - [`ProcessSummary`] / [`ProcessMetrics`]: one row per process, with
//!   waiting time aggregated across all of its slices.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

mod engine;
mod metrics;
mod summary;

pub use engine::{simulate, Simulator};
pub use metrics::{format_average, round_for_display, TimelineMetrics};
pub use summary::{ProcessMetrics, ProcessSummary};
