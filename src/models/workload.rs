//! Random workload generation.
//!
//! Produces process sets with uniformly distributed arrival and burst
//! times. Useful for comparing disciplines on the same input and for
//! randomized invariant checks.

use rand::Rng;

use super::Process;

/// Parameters for generating a random process set.
///
/// Names are assigned sequentially as `P1..Pn` in generation order.
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    /// Number of processes to generate.
    pub count: usize,
    /// Latest possible arrival (inclusive). Arrivals start at 0.
    pub max_arrival: i64,
    /// Shortest possible burst (inclusive, clamped to at least 1).
    pub min_burst: i64,
    /// Longest possible burst (inclusive).
    pub max_burst: i64,
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self {
            count: 8,
            max_arrival: 20,
            min_burst: 1,
            max_burst: 10,
        }
    }
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes with default ranges.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Default::default()
        }
    }

    /// Sets the latest possible arrival.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the burst range (inclusive on both ends).
    pub fn with_burst_range(mut self, min_burst: i64, max_burst: i64) -> Self {
        self.min_burst = min_burst;
        self.max_burst = max_burst;
        self
    }

    /// Generates a process set.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Process> {
        let max_arrival = self.max_arrival.max(0);
        let min_burst = self.min_burst.max(1);
        let max_burst = self.max_burst.max(min_burst);

        (1..=self.count)
            .map(|i| {
                Process::new(
                    format!("P{i}"),
                    rng.random_range(0..=max_arrival),
                    rng.random_range(min_burst..=max_burst),
                )
            })
            .collect()
    }
}
