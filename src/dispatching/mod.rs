//! Dispatch policies for CPU scheduling.
//!
//! A policy decides *which* process gets the CPU next and *for how long*.
//! The simulation driver in [`crate::scheduler`] owns the clock, charges
//! CPU time, and records intervals; policies never touch the timeline.
//!
//! | Policy | Selection | Slice length |
//! |--------|-----------|--------------|
//! | `Fcfs` | next unfinished in input order | whole burst |
//! | `Sjf` | smallest burst among arrived | whole burst |
//! | `RoundRobin` | head of FIFO queue | `min(remaining, quantum)` |
//! | `Strf` | smallest remaining among arrived | 1 |
//!
//! # Usage
//!
//! ```
//! use cpu_schedule::dispatching::{policy_for, DispatchPolicy};
//! use cpu_schedule::models::Discipline;
//!
//! let policy = policy_for(Discipline::RoundRobin, 4);
//! assert_eq!(policy.name(), "RR");
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

pub mod rules;

pub use rules::{Fcfs, RoundRobin, Sjf, Strf};

use crate::models::{Discipline, Process};
use std::fmt::Debug;

/// Default Round-Robin time quantum.
pub const DEFAULT_QUANTUM: i64 = 2;

/// Decision returned by a policy at a dispatch point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Give the CPU to the process at this index in the run table.
    Run(usize),
    /// Nothing is eligible; advance the clock to this time.
    IdleUntil(i64),
}

/// A CPU scheduling policy.
///
/// The driver calls [`reset`](Self::reset) once per run, then repeatedly
/// asks [`dispatch`](Self::dispatch) for a decision until it returns
/// `None`. After each slice it calls [`after_slice`](Self::after_slice)
/// with the process's updated state.
///
/// Policies see the run table read-only. Indices are positions in that
/// table, which is always in input order.
pub trait DispatchPolicy: Send + Sync + Debug {
    /// Short policy label (e.g. "FCFS").
    fn name(&self) -> &'static str;

    /// Clears per-run state before a new run over `table`.
    fn reset(&mut self, _table: &[Process]) {}

    /// Decides what happens at time `now`. `None` once all work is done.
    fn dispatch(&mut self, table: &[Process], now: i64) -> Option<Dispatch>;

    /// CPU time granted to `process` for the slice about to start.
    ///
    /// Must be positive and no larger than `process.remaining_time`.
    fn slice_length(&self, process: &Process) -> i64;

    /// Called after `process` (at `index`) has been charged for a slice.
    fn after_slice(&mut self, _index: usize, _process: &Process) {}
}

/// Builds the policy for a discipline. `quantum` is read only by Round-Robin.
pub fn policy_for(discipline: Discipline, quantum: i64) -> Box<dyn DispatchPolicy> {
    match discipline {
        Discipline::Fcfs => Box::new(Fcfs::new()),
        Discipline::Sjf => Box::new(Sjf),
        Discipline::RoundRobin => Box::new(RoundRobin::new(quantum)),
        Discipline::Strf => Box::new(Strf),
    }
}
