//! Scheduling discipline selector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;

/// The CPU scheduling discipline used for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Discipline {
    /// First-Come-First-Served: input order, non-preemptive.
    Fcfs,
    /// Shortest-Job-First: smallest burst among arrived, non-preemptive.
    Sjf,
    /// Round-Robin: FIFO queue with a fixed time quantum.
    RoundRobin,
    /// Shortest-Time-Remaining-First: re-evaluated every time unit.
    Strf,
}

impl Discipline {
    /// All disciplines, in presentation order.
    pub const ALL: [Discipline; 4] = [
        Discipline::Fcfs,
        Discipline::Sjf,
        Discipline::RoundRobin,
        Discipline::Strf,
    ];

    /// Short label ("FCFS", "SJF", "RR", "STRF").
    pub fn label(&self) -> &'static str {
        match self {
            Discipline::Fcfs => "FCFS",
            Discipline::Sjf => "SJF",
            Discipline::RoundRobin => "RR",
            Discipline::Strf => "STRF",
        }
    }

    /// Full name.
    pub fn description(&self) -> &'static str {
        match self {
            Discipline::Fcfs => "First Come First Serve",
            Discipline::Sjf => "Shortest Job First",
            Discipline::RoundRobin => "Round Robin",
            Discipline::Strf => "Shortest Time Remaining First",
        }
    }

    /// Whether a running process can be interrupted before its burst ends.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Discipline::RoundRobin | Discipline::Strf)
    }

    /// Whether the discipline reads the time quantum.
    pub fn uses_quantum(&self) -> bool {
        matches!(self, Discipline::RoundRobin)
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Discipline {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FCFS" => Ok(Discipline::Fcfs),
            "SJF" => Ok(Discipline::Sjf),
            "RR" | "ROUNDROBIN" | "ROUND-ROBIN" => Ok(Discipline::RoundRobin),
            "STRF" | "SRTF" => Ok(Discipline::Strf),
            _ => Err(SimulationError::UnknownDiscipline(s.to_string())),
        }
    }
}
