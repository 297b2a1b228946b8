//! Process model.
//!
//! A process is a unit of CPU demand: it becomes eligible at its arrival
//! time and needs `burst_time` units of CPU before it completes.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.1

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::validation::{validate_process, validate_processes};

/// A caller-supplied process record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Time at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU time the process requires.
    pub burst_time: i64,
}

impl ProcessSpec {
    /// Creates a new process record.
    pub fn new(arrival_time: i64, burst_time: i64) -> Self {
        Self {
            arrival_time,
            burst_time,
        }
    }
}

/// A named process as seen by the engine.
///
/// `remaining_time` starts at `burst_time` and is only ever decremented,
/// so it never exceeds `burst_time`. A process with no remaining time is
/// complete and is never dispatched again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Sequential label ("P1", "P2", ...), unique within a run.
    pub name: String,
    /// Time at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU time the process requires.
    pub burst_time: i64,
    /// CPU time still owed to the process.
    pub remaining_time: i64,
}

impl Process {
    /// Creates a process with its full burst outstanding.
    pub fn new(name: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            name: name.into(),
            arrival_time,
            burst_time,
            remaining_time: burst_time,
        }
    }

    /// Label for the process at `index` (0-based) in input order.
    pub fn label_for(index: usize) -> String {
        format!("P{}", index + 1)
    }

    /// Whether the process has received all of its CPU time.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.remaining_time == 0
    }

    /// Whether the process is eligible to run at `now`.
    #[inline]
    pub fn has_arrived(&self, now: i64) -> bool {
        self.arrival_time <= now
    }

    /// CPU time consumed so far.
    pub fn executed_time(&self) -> i64 {
        self.burst_time - self.remaining_time
    }

    /// Charges `units` of CPU time to the process.
    pub(crate) fn run_for(&mut self, units: i64) {
        debug_assert!(units > 0 && units <= self.remaining_time);
        self.remaining_time = (self.remaining_time - units).max(0);
    }
}

/// An ordered set of processes supplied before a simulation run.
///
/// Names are assigned in insertion order and never change. The engine
/// never mutates a registry; every run works on its own copy.
///
/// Serializes as a plain list of [`ProcessSpec`]s and deserializes through
/// the same validation as [`from_specs`](Self::from_specs), so names are
/// always sequential and unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ProcessSpec>", into = "Vec<ProcessSpec>")]
pub struct ProcessRegistry {
    processes: Vec<Process>,
}

impl ProcessRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from caller records.
    ///
    /// Fails with [`SimulationError::InvalidInput`] if the list is empty
    /// or any record has a negative arrival or non-positive burst.
    pub fn from_specs(specs: &[ProcessSpec]) -> Result<Self, SimulationError> {
        validate_processes(specs).map_err(SimulationError::InvalidInput)?;
        Ok(Self::from_valid_specs(specs))
    }

    /// Builds a registry from records the caller has already validated.
    pub(crate) fn from_valid_specs(specs: &[ProcessSpec]) -> Self {
        let processes = specs
            .iter()
            .enumerate()
            .map(|(i, s)| Process::new(Process::label_for(i), s.arrival_time, s.burst_time))
            .collect();
        Self { processes }
    }

    /// Appends one process under the next sequential name.
    ///
    /// Invalid values are rejected and leave the registry unchanged.
    pub fn add(&mut self, arrival_time: i64, burst_time: i64) -> Result<&Process, SimulationError> {
        let index = self.processes.len();
        validate_process(index, &ProcessSpec::new(arrival_time, burst_time))
            .map_err(SimulationError::InvalidInput)?;
        self.processes.push(Process::new(
            Process::label_for(index),
            arrival_time,
            burst_time,
        ));
        Ok(&self.processes[index])
    }

    /// Registered processes in input order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Finds a process by name.
    pub fn get(&self, name: &str) -> Option<&Process> {
        self.processes.iter().find(|p| p.name == name)
    }

    /// The registry as plain caller records.
    pub fn specs(&self) -> Vec<ProcessSpec> {
        self.processes
            .iter()
            .map(|p| ProcessSpec::new(p.arrival_time, p.burst_time))
            .collect()
    }

    /// A fresh per-run table with every burst fully outstanding.
    pub fn working_copy(&self) -> Vec<Process> {
        self.processes
            .iter()
            .map(|p| Process::new(p.name.clone(), p.arrival_time, p.burst_time))
            .collect()
    }

    /// Sum of all burst times, saturating at `i64::MAX`.
    pub fn total_burst(&self) -> i64 {
        self.processes
            .iter()
            .fold(0i64, |acc, p| acc.saturating_add(p.burst_time))
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether no process has been registered.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }
}

impl TryFrom<Vec<ProcessSpec>> for ProcessRegistry {
    type Error = SimulationError;

    /// An empty list yields an empty registry; anything else must pass
    /// [`ProcessRegistry::from_specs`].
    fn try_from(specs: Vec<ProcessSpec>) -> Result<Self, Self::Error> {
        if specs.is_empty() {
            return Ok(Self::new());
        }
        Self::from_specs(&specs)
    }
}

impl From<ProcessRegistry> for Vec<ProcessSpec> {
    fn from(registry: ProcessRegistry) -> Self {
        registry.specs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_process_new() {
        let p = Process::new("P1", 3, 5);
        assert_eq!(p.name, "P1");
        assert_eq!(p.remaining_time, 5);
        assert!(!p.is_complete());
        assert!(p.has_arrived(3));
        assert!(!p.has_arrived(2));
        assert_eq!(p.executed_time(), 0);
    }

    #[test]
    fn test_run_for() {
        let mut p = Process::new("P1", 0, 4);
        p.run_for(3);
        assert_eq!(p.remaining_time, 1);
        assert_eq!(p.executed_time(), 3);
        p.run_for(1);
        assert!(p.is_complete());
    }

    #[test]
    fn test_registry_sequential_names() {
        let reg = ProcessRegistry::from_specs(&[
            ProcessSpec::new(0, 5),
            ProcessSpec::new(1, 3),
            ProcessSpec::new(1, 2),
        ])
        .unwrap();

        let names: Vec<&str> = reg.processes().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["P1", "P2", "P3"]);
        assert_eq!(reg.total_burst(), 10);
        assert_eq!(reg.get("P2").unwrap().arrival_time, 1);
        assert!(reg.get("P9").is_none());
    }

    #[test]
    fn test_registry_rejects_invalid() {
        let err = ProcessRegistry::from_specs(&[ProcessSpec::new(-1, 5), ProcessSpec::new(0, 0)])
            .unwrap_err();
        let SimulationError::InvalidInput(errors) = err else {
            panic!("expected InvalidInput");
        };
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidArrival);
        assert_eq!(errors[1].kind, ValidationErrorKind::InvalidBurst);
    }

    #[test]
    fn test_registry_rejects_empty() {
        assert!(ProcessRegistry::from_specs(&[]).is_err());
        // An empty registry can still be built incrementally.
        assert!(ProcessRegistry::new().is_empty());
    }

    #[test]
    fn test_registry_add() {
        let mut reg = ProcessRegistry::new();
        assert_eq!(reg.add(0, 4).unwrap().name, "P1");
        assert_eq!(reg.add(2, 1).unwrap().name, "P2");

        assert!(reg.add(0, -3).is_err());
        assert!(reg.add(-2, 3).is_err());
        assert_eq!(reg.len(), 2);

        assert_eq!(reg.add(5, 2).unwrap().name, "P3");
        assert_eq!(
            reg.specs(),
            vec![
                ProcessSpec::new(0, 4),
                ProcessSpec::new(2, 1),
                ProcessSpec::new(5, 2)
            ]
        );
    }

    #[test]
    fn test_registry_deserialize_assigns_sequential_names() {
        let json = r#"[{"arrival_time":0,"burst_time":2},{"arrival_time":0,"burst_time":3}]"#;
        let reg: ProcessRegistry = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = reg.processes().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["P1", "P2"]);
        assert!(reg.processes().iter().all(|p| p.remaining_time == p.burst_time));
    }

    #[test]
    fn test_registry_deserialize_rejects_named_records() {
        // Caller-chosen names (and duplicates) are not part of the format
        let json = r#"{"processes":[
            {"name":"P1","arrival_time":0,"burst_time":2,"remaining_time":2},
            {"name":"P1","arrival_time":0,"burst_time":3,"remaining_time":3}
        ]}"#;
        assert!(serde_json::from_str::<ProcessRegistry>(json).is_err());
    }

    #[test]
    fn test_registry_deserialize_validates() {
        let json = r#"[{"arrival_time":-1,"burst_time":2}]"#;
        assert!(serde_json::from_str::<ProcessRegistry>(json).is_err());
    }

    #[test]
    fn test_registry_serde_round_trip() {
        let reg = ProcessRegistry::from_specs(&[ProcessSpec::new(0, 4), ProcessSpec::new(3, 1)])
            .unwrap();
        let json = serde_json::to_string(&reg).unwrap();
        assert_eq!(
            json,
            r#"[{"arrival_time":0,"burst_time":4},{"arrival_time":3,"burst_time":1}]"#
        );
        let back: ProcessRegistry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, reg);

        let empty: ProcessRegistry = serde_json::from_str("[]").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_total_burst_saturates() {
        let mut reg = ProcessRegistry::new();
        reg.add(0, i64::MAX).unwrap();
        reg.add(0, 1).unwrap();
        assert_eq!(reg.total_burst(), i64::MAX);
    }

    #[test]
    fn test_working_copy_is_independent() {
        let reg = ProcessRegistry::from_specs(&[ProcessSpec::new(0, 3)]).unwrap();
        let mut table = reg.working_copy();
        table[0].run_for(3);
        assert!(table[0].is_complete());
        assert_eq!(reg.processes()[0].remaining_time, 3);
        assert_eq!(reg.working_copy()[0].remaining_time, 3);
    }
}
