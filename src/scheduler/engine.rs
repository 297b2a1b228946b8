//! Discipline-agnostic simulation driver.
//!
//! # Algorithm
//!
//! 1. Validate input; reject before any work if anything is malformed.
//! 2. Copy the registry into a per-run table (caller input is untouched).
//! 3. Loop until the policy reports no remaining work:
//!    - `IdleUntil(t)`: jump the clock to `t`, emit nothing.
//!    - `Run(i)`: start at `max(now, arrival)`, run for the policy's slice
//!      length, emit one interval, advance the clock to its finish.
//!
//! # Complexity
//! O(W * n) where W = total burst time and n = process count (STRF
//! re-scans the table every unit); O(n^2) for FCFS, SJF and RR.

use log::{debug, trace, warn};

use crate::config::SimulationConfig;
use crate::dispatching::{policy_for, Dispatch, DispatchPolicy};
use crate::error::SimulationError;
use crate::models::{
    Discipline, ExecutionInterval, Process, ProcessRegistry, ProcessSpec, ScheduleTimeline,
};
use crate::validation::validate_input;

/// Runs one simulation over caller records.
///
/// `quantum` is read only when `discipline` is Round-Robin.
///
/// # Errors
/// [`SimulationError::InvalidInput`] if `processes` is empty, any burst is
/// non-positive, any arrival is negative, or Round-Robin gets a
/// non-positive quantum.
///
/// # Example
/// ```
/// use cpu_schedule::models::{Discipline, ProcessSpec};
/// use cpu_schedule::scheduler::simulate;
///
/// let procs = [ProcessSpec::new(0, 5), ProcessSpec::new(0, 3)];
/// let timeline = simulate(&procs, Discipline::RoundRobin, 2).unwrap();
/// assert_eq!(timeline.execution_order(), vec!["P1", "P2", "P1", "P2", "P1"]);
/// ```
pub fn simulate(
    processes: &[ProcessSpec],
    discipline: Discipline,
    quantum: i64,
) -> Result<ScheduleTimeline, SimulationError> {
    Simulator::new(SimulationConfig::new(discipline).with_quantum(quantum)).run_specs(processes)
}

/// Configured simulation engine.
///
/// Holds no state between runs; the same simulator can be reused for any
/// number of independent runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    /// Creates a simulator for the given configuration.
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Simulates a registry. The registry itself is never modified.
    pub fn run(&self, registry: &ProcessRegistry) -> Result<ScheduleTimeline, SimulationError> {
        self.check(&registry.specs())?;
        Ok(self.drive(registry.working_copy()))
    }

    /// Simulates caller records, naming them "P1", "P2", ... in order.
    pub fn run_specs(&self, specs: &[ProcessSpec]) -> Result<ScheduleTimeline, SimulationError> {
        self.check(specs)?;
        Ok(self.drive(ProcessRegistry::from_valid_specs(specs).working_copy()))
    }

    fn check(&self, specs: &[ProcessSpec]) -> Result<(), SimulationError> {
        validate_input(specs, self.config.discipline, self.config.quantum).map_err(|errors| {
            warn!(
                "rejecting {} run: {} validation error(s)",
                self.config.discipline,
                errors.len()
            );
            SimulationError::InvalidInput(errors)
        })
    }

    fn drive(&self, table: Vec<Process>) -> ScheduleTimeline {
        let mut policy = policy_for(self.config.discipline, self.config.quantum);
        debug!(
            "simulating {} processes under {} (quantum {})",
            table.len(),
            self.config.discipline,
            self.config.quantum
        );
        let timeline = run_policy(table, policy.as_mut(), self.config.discipline);
        debug!(
            "{} finished: {} intervals, makespan {}",
            self.config.discipline,
            timeline.interval_count(),
            timeline.makespan()
        );
        timeline
    }
}

/// The shared loop. `table` is consumed; it is this run's working copy.
fn run_policy(
    mut table: Vec<Process>,
    policy: &mut dyn DispatchPolicy,
    discipline: Discipline,
) -> ScheduleTimeline {
    let mut timeline = ScheduleTimeline::new(discipline);
    let mut now: i64 = 0;

    policy.reset(&table);

    while let Some(decision) = policy.dispatch(&table, now) {
        match decision {
            Dispatch::IdleUntil(t) => {
                debug_assert!(t > now, "idle skip must move the clock forward");
                trace!("idle {now}..{t}");
                now = now.max(t);
            }
            Dispatch::Run(index) => {
                let process = &mut table[index];
                let start = now.max(process.arrival_time);
                let length = policy.slice_length(process);
                process.run_for(length);

                let interval = ExecutionInterval::new(process, start, start + length);
                trace!("{} runs {}..{}", interval.process, start, interval.finish_time);
                now = interval.finish_time;
                timeline.push(interval);

                policy.after_slice(index, &table[index]);
            }
        }
    }

    timeline
}
