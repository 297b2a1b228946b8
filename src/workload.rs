//! Random workload generation.
//!
//! Produces process sets for experiments and comparisons between
//! disciplines. Pass a seeded RNG (e.g. `SmallRng::seed_from_u64`) for
//! reproducible workloads.
//!
//! # Usage
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use cpu_schedule::workload::WorkloadGenerator;
//!
//! let mut rng = SmallRng::seed_from_u64(7);
//! let specs = WorkloadGenerator::new(5).with_max_burst(8).generate(&mut rng);
//! assert_eq!(specs.len(), 5);
//! ```

use rand::Rng;

use crate::models::ProcessSpec;

/// Parameters for random process sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkloadGenerator {
    /// Number of processes to generate.
    pub count: usize,
    /// Largest arrival time (inclusive); arrivals start at 0.
    pub max_arrival: i64,
    /// Largest burst time (inclusive); bursts start at 1.
    pub max_burst: i64,
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes (arrivals ≤ 10, bursts ≤ 10).
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_arrival: 10,
            max_burst: 10,
        }
    }

    /// Sets the largest arrival time.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival.max(0);
        self
    }

    /// Sets the largest burst time.
    pub fn with_max_burst(mut self, max_burst: i64) -> Self {
        self.max_burst = max_burst.max(1);
        self
    }

    /// Draws `count` valid process records.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<ProcessSpec> {
        (0..self.count)
            .map(|_| {
                ProcessSpec::new(
                    rng.random_range(0..=self.max_arrival.max(0)),
                    rng.random_range(1..=self.max_burst.max(1)),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_processes;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_within_bounds() {
        let mut rng = SmallRng::seed_from_u64(42);
        let generator = WorkloadGenerator::new(50)
            .with_max_arrival(20)
            .with_max_burst(6);
        let specs = generator.generate(&mut rng);

        assert_eq!(specs.len(), 50);
        assert!(specs
            .iter()
            .all(|s| (0..=20).contains(&s.arrival_time) && (1..=6).contains(&s.burst_time)));
        assert!(validate_processes(&specs).is_ok());
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let generator = WorkloadGenerator::new(10);
        let a = generator.generate(&mut SmallRng::seed_from_u64(3));
        let b = generator.generate(&mut SmallRng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_bounds_are_clamped() {
        let generator = WorkloadGenerator::new(3)
            .with_max_arrival(-5)
            .with_max_burst(0);
        assert_eq!(generator.max_arrival, 0);
        assert_eq!(generator.max_burst, 1);

        let specs = generator.generate(&mut SmallRng::seed_from_u64(1));
        assert!(specs.iter().all(|s| *s == ProcessSpec::new(0, 1)));
    }
}
