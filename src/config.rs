//! Simulation configuration.
//!
//! A [`SimulationConfig`] picks the discipline and its parameters. It is
//! serde-friendly so front-ends can load it from whatever format they use;
//! every field has a default.
//!
//! ```
//! use u_cpu_schedule::config::{Algorithm, SimulationConfig};
//!
//! let config = SimulationConfig::new(Algorithm::RoundRobin).with_quantum(4);
//! assert!(config.check().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::disciplines::{Discipline, Fcfs, RoundRobin, RoundRobinMode, Sjf, Srtf};
use crate::error::ScheduleError;

/// Round Robin quantum used when none is configured.
pub const DEFAULT_QUANTUM: i64 = 2;

/// Simulated instant at which SRTF gives up when none is configured.
pub const DEFAULT_HORIZON: i64 = 10_000;

/// Scheduling discipline selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// First-Come-First-Served.
    #[default]
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    Sjf,
    /// Shortest-Remaining-Time-First, preemptive.
    Srtf,
    /// Round Robin with a fixed quantum.
    RoundRobin,
}

/// Parameters for one simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Discipline to run.
    pub algorithm: Algorithm,
    /// Round Robin time slice.
    pub quantum: i64,
    /// SRTF simulation horizon.
    pub horizon: i64,
    /// Round Robin ready-set strategy.
    pub round_robin_mode: RoundRobinMode,
    /// Reject malformed process sets before running.
    pub validate_input: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            quantum: DEFAULT_QUANTUM,
            horizon: DEFAULT_HORIZON,
            round_robin_mode: RoundRobinMode::default(),
            validate_input: false,
        }
    }
}

impl SimulationConfig {
    /// Creates a default configuration for the given algorithm.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            ..Default::default()
        }
    }

    /// Sets the Round Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Sets the SRTF horizon.
    pub fn with_horizon(mut self, horizon: i64) -> Self {
        self.horizon = horizon;
        self
    }

    /// Sets the Round Robin mode.
    pub fn with_round_robin_mode(mut self, mode: RoundRobinMode) -> Self {
        self.round_robin_mode = mode;
        self
    }

    /// Enables or disables input validation.
    pub fn with_validation(mut self, enabled: bool) -> Self {
        self.validate_input = enabled;
        self
    }

    /// Checks the parameters the selected algorithm depends on.
    pub fn check(&self) -> Result<(), ScheduleError> {
        match self.algorithm {
            Algorithm::RoundRobin if self.quantum <= 0 => {
                Err(ScheduleError::InvalidQuantum(self.quantum))
            }
            Algorithm::Srtf if self.horizon <= 0 => Err(ScheduleError::InvalidHorizon(self.horizon)),
            _ => Ok(()),
        }
    }

    /// Builds the configured discipline.
    pub fn discipline(&self) -> Box<dyn Discipline> {
        match self.algorithm {
            Algorithm::Fcfs => Box::new(Fcfs),
            Algorithm::Sjf => Box::new(Sjf),
            Algorithm::Srtf => Box::new(Srtf::with_horizon(self.horizon)),
            Algorithm::RoundRobin => {
                Box::new(RoundRobin::new(self.quantum).with_mode(self.round_robin_mode))
            }
        }
    }
}
