//! Run configuration.
//!
//! A [`SimulationConfig`] captures everything besides the process list
//! that determines a run: the discipline and, for Round-Robin, the
//! quantum. It is serde-serializable so front ends can persist or ship it
//! as JSON; a missing `quantum` falls back to [`DEFAULT_QUANTUM`].

use serde::{Deserialize, Serialize};

pub use crate::dispatching::DEFAULT_QUANTUM;
use crate::models::Discipline;
use crate::validation::{validate_quantum, ValidationResult};

/// Configuration for a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Scheduling discipline.
    pub discipline: Discipline,
    /// Round-Robin time quantum. Ignored by other disciplines.
    #[serde(default = "default_quantum")]
    pub quantum: i64,
}

fn default_quantum() -> i64 {
    DEFAULT_QUANTUM
}

impl SimulationConfig {
    /// Creates a configuration with the default quantum.
    pub fn new(discipline: Discipline) -> Self {
        Self {
            discipline,
            quantum: DEFAULT_QUANTUM,
        }
    }

    /// Sets the Round-Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Checks the quantum against the discipline.
    pub fn validate(&self) -> ValidationResult {
        validate_quantum(self.discipline, self.quantum)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new(Discipline::Fcfs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = SimulationConfig::new(Discipline::RoundRobin).with_quantum(4);
        assert_eq!(config.discipline, Discipline::RoundRobin);
        assert_eq!(config.quantum, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_quantum() {
        assert_eq!(SimulationConfig::new(Discipline::Sjf).quantum, 2);
        assert_eq!(SimulationConfig::default().discipline, Discipline::Fcfs);
    }

    #[test]
    fn test_validate_quantum() {
        assert!(SimulationConfig::new(Discipline::RoundRobin)
            .with_quantum(0)
            .validate()
            .is_err());
        assert!(SimulationConfig::new(Discipline::Fcfs)
            .with_quantum(0)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_deserialize_without_quantum() {
        let config: SimulationConfig = serde_json::from_str(r#"{"discipline":"Strf"}"#).unwrap();
        assert_eq!(config.discipline, Discipline::Strf);
        assert_eq!(config.quantum, DEFAULT_QUANTUM);
    }

    #[test]
    fn test_serde_round_trip() {
        let config = SimulationConfig::new(Discipline::RoundRobin).with_quantum(3);
        let json = serde_json::to_string(&config).unwrap();
        let back: SimulationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
