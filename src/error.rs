//! Crate error type.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors returned by the simulation entry points.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// Malformed arrival, burst, or quantum values. Reported before any
    /// simulation work; carries every problem found.
    #[error("invalid input: {}", summarize(.0))]
    InvalidInput(Vec<ValidationError>),
    /// A discipline label that does not name a supported discipline.
    #[error("unknown scheduling discipline '{0}'")]
    UnknownDiscipline(String),
}

impl SimulationError {
    /// Validation problems, if this is an input error.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            SimulationError::InvalidInput(errors) => errors,
            SimulationError::UnknownDiscipline(_) => &[],
        }
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
