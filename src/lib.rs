//! Offline CPU scheduling simulator.
//!
//! Replays a fixed set of processes through one of four classic
//! uniprocessor disciplines and reports the resulting execution timeline
//! together with turnaround and waiting metrics.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ProcessSpec`, `Process`, `ProcessRegistry`,
//!   `ExecutionInterval`, `ScheduleTimeline`, `Discipline`
//! - **`dispatching`**: Selection policies (FCFS, SJF, Round-Robin, SRTF)
//!   behind the `DispatchPolicy` trait
//! - **`scheduler`**: The simulation driver (`simulate`, `Simulator`) and
//!   timeline metrics
//! - **`validation`**: Input checks run before any simulation work
//! - **`config`**: Serializable run configuration
//! - **`workload`**: Seeded random process sets
//!
//! # Example
//!
//! ```
//! use cpu_schedule::models::{Discipline, ProcessSpec};
//! use cpu_schedule::scheduler::{simulate, TimelineMetrics};
//!
//! let processes = [ProcessSpec::new(0, 5), ProcessSpec::new(1, 3)];
//! let timeline = simulate(&processes, Discipline::Fcfs, 2).unwrap();
//! assert_eq!(timeline.makespan(), 8);
//!
//! let metrics = TimelineMetrics::calculate(&timeline);
//! assert_eq!(metrics.average_waiting, 2.0);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod config;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::SimulationError;
