//! Simulation domain models.
//!
//! Provides the input records a caller supplies and the timeline the
//! engine produces. All times are integer time units relative to the
//! start of the simulation (t=0).
//!
//! # Lifecycle
//!
//! | Type | Created by | Mutated by |
//! |------|-----------|------------|
//! | ProcessSpec | caller | never |
//! | ProcessRegistry | caller | `add` only |
//! | Process (working copy) | engine, per run | engine, per run |
//! | ScheduleTimeline | engine | never after return |

mod discipline;
mod interval;
mod process;
mod timeline;

pub use discipline::Discipline;
pub use interval::{ExecutionInterval, DEFAULT_INTERVAL_COLOR};
pub use process::{Process, ProcessRegistry, ProcessSpec};
pub use timeline::ScheduleTimeline;
