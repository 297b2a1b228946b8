//! Input validation for simulation runs.
//!
//! Checks caller input before any simulation work begins. Detects:
//! - Empty process lists
//! - Negative arrival times
//! - Non-positive burst times
//! - Non-positive Round-Robin quanta
//! - Workloads whose last finish time would not fit in an `i64`
//!
//! All problems are collected so the caller can report them at once.

use crate::models::{Discipline, Process, ProcessSpec};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No processes were supplied.
    EmptyInput,
    /// A process arrives before t=0.
    InvalidArrival,
    /// A process demands zero or negative CPU time.
    InvalidBurst,
    /// Round-Robin quantum is zero or negative.
    InvalidQuantum,
    /// Latest arrival plus total burst exceeds `i64::MAX`.
    HorizonOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a single process record at position `index` (0-based).
pub fn validate_process(index: usize, spec: &ProcessSpec) -> ValidationResult {
    let mut errors = Vec::new();
    check_process(index, spec, &mut errors);
    into_result(errors)
}

/// Validates a process list.
///
/// Checks:
/// 1. At least one process
/// 2. Every `arrival_time >= 0`
/// 3. Every `burst_time > 0`
/// 4. `max(arrival_time) + Σ burst_time` fits in an `i64`
pub fn validate_processes(specs: &[ProcessSpec]) -> ValidationResult {
    let mut errors = Vec::new();

    if specs.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "At least one process is required",
        ));
    }

    for (i, spec) in specs.iter().enumerate() {
        check_process(i, spec, &mut errors);
    }

    if errors.is_empty() && time_horizon(specs).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::HorizonOverflow,
            "Latest arrival plus total burst time overflows the simulation clock",
        ));
    }

    into_result(errors)
}

/// Upper bound on every finish time a run can produce: the clock never
/// passes the latest arrival plus all CPU work. `None` on overflow.
pub fn time_horizon(specs: &[ProcessSpec]) -> Option<i64> {
    let latest_arrival = specs.iter().map(|s| s.arrival_time).max().unwrap_or(0);
    specs
        .iter()
        .try_fold(latest_arrival, |acc, s| acc.checked_add(s.burst_time))
}

/// Validates the quantum for a discipline. Only Round-Robin reads it.
pub fn validate_quantum(discipline: Discipline, quantum: i64) -> ValidationResult {
    if discipline.uses_quantum() && quantum <= 0 {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::InvalidQuantum,
            format!("Time quantum must be positive, got {quantum}"),
        )]);
    }
    Ok(())
}

/// Validates everything `simulate` needs.
pub fn validate_input(specs: &[ProcessSpec], discipline: Discipline, quantum: i64) -> ValidationResult {
    let mut errors = validate_processes(specs).err().unwrap_or_default();
    if let Err(mut quantum_errors) = validate_quantum(discipline, quantum) {
        errors.append(&mut quantum_errors);
    }
    into_result(errors)
}

fn check_process(index: usize, spec: &ProcessSpec, errors: &mut Vec<ValidationError>) {
    let label = Process::label_for(index);
    if spec.arrival_time < 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidArrival,
            format!(
                "Process '{label}' has negative arrival time {}",
                spec.arrival_time
            ),
        ));
    }
    if spec.burst_time <= 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidBurst,
            format!(
                "Process '{label}' has non-positive burst time {}",
                spec.burst_time
            ),
        ));
    }
}

fn into_result(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
