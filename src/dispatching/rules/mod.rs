//! Built-in dispatch policies.
//!
//! # Categories
//!
//! - **Non-preemptive**: FCFS, SJF — the chosen process runs its whole burst
//! - **Preemptive**: RR (fixed quantum), STRF (one time unit)
//!
//! # Tie-breaking
//! SJF and STRF break ties on the earliest position in input order.

use std::collections::VecDeque;

use super::{Dispatch, DispatchPolicy};
use crate::models::Process;

// ======================== Shared selection helpers ========================

/// Index of the arrived, unfinished process with the smallest key.
///
/// Ties go to the lowest index, so equal keys keep input order.
fn shortest_arrived<K, F>(table: &[Process], now: i64, key: F) -> Option<usize>
where
    K: Ord,
    F: Fn(&Process) -> K,
{
    table
        .iter()
        .enumerate()
        .filter(|(_, p)| !p.is_complete() && p.has_arrived(now))
        .min_by_key(|&(i, p)| (key(p), i))
        .map(|(i, _)| i)
}

/// Earliest arrival among unfinished processes.
fn next_arrival(table: &[Process]) -> Option<i64> {
    table
        .iter()
        .filter(|p| !p.is_complete())
        .map(|p| p.arrival_time)
        .min()
}

/// Shortest-first dispatch with idle skip when nothing has arrived yet.
fn dispatch_shortest<K, F>(table: &[Process], now: i64, key: F) -> Option<Dispatch>
where
    K: Ord,
    F: Fn(&Process) -> K,
{
    match shortest_arrived(table, now, key) {
        Some(index) => Some(Dispatch::Run(index)),
        None => next_arrival(table).map(Dispatch::IdleUntil),
    }
}

// ======================== Non-preemptive ========================

/// First-Come-First-Served.
///
/// Runs processes in input order, not arrival order: a later entry with
/// an earlier arrival does not jump the queue. Arrival only forces idle
/// gaps, which the driver handles by starting at `max(now, arrival)`.
#[derive(Debug, Clone, Default)]
pub struct Fcfs {
    cursor: usize,
}

impl Fcfs {
    /// Creates the policy.
    pub fn new() -> Self {
        Self::default()
    }
}

impl DispatchPolicy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn reset(&mut self, _table: &[Process]) {
        self.cursor = 0;
    }

    fn dispatch(&mut self, table: &[Process], _now: i64) -> Option<Dispatch> {
        while self.cursor < table.len() && table[self.cursor].is_complete() {
            self.cursor += 1;
        }
        (self.cursor < table.len()).then_some(Dispatch::Run(self.cursor))
    }

    fn slice_length(&self, process: &Process) -> i64 {
        process.remaining_time
    }
}

/// Shortest-Job-First (non-preemptive).
///
/// Picks the arrived process with the smallest total burst and runs it to
/// completion. A shorter job arriving mid-burst waits.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl DispatchPolicy for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn dispatch(&mut self, table: &[Process], now: i64) -> Option<Dispatch> {
        dispatch_shortest(table, now, |p| p.burst_time)
    }

    fn slice_length(&self, process: &Process) -> i64 {
        process.remaining_time
    }
}

// ======================== Preemptive ========================

/// Round-Robin with a fixed quantum.
///
/// The ready queue is seeded with every process in input order at the
/// start of the run, whether or not it has arrived. A not-yet-arrived
/// process at the head therefore forces an idle gap (the driver starts
/// it at its arrival) rather than being skipped.
#[derive(Debug, Clone)]
pub struct RoundRobin {
    quantum: i64,
    queue: VecDeque<usize>,
}

impl RoundRobin {
    /// Creates the policy. `quantum` must be positive.
    pub fn new(quantum: i64) -> Self {
        Self {
            quantum,
            queue: VecDeque::new(),
        }
    }

    /// Configured time quantum.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

impl DispatchPolicy for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn reset(&mut self, table: &[Process]) {
        self.queue = table
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_complete())
            .map(|(i, _)| i)
            .collect();
    }

    fn dispatch(&mut self, _table: &[Process], _now: i64) -> Option<Dispatch> {
        self.queue.pop_front().map(Dispatch::Run)
    }

    fn slice_length(&self, process: &Process) -> i64 {
        process.remaining_time.min(self.quantum)
    }

    fn after_slice(&mut self, index: usize, process: &Process) {
        if !process.is_complete() {
            self.queue.push_back(index);
        }
    }
}

/// Shortest-Time-Remaining-First (fully preemptive).
///
/// Re-selects every time unit: the arrived process with the least
/// remaining time runs for exactly one unit.
#[derive(Debug, Clone, Copy, Default)]
pub struct Strf;

impl DispatchPolicy for Strf {
    fn name(&self) -> &'static str {
        "STRF"
    }

    fn dispatch(&mut self, table: &[Process], now: i64) -> Option<Dispatch> {
        dispatch_shortest(table, now, |p| p.remaining_time)
    }

    fn slice_length(&self, _process: &Process) -> i64 {
        1
    }
}
