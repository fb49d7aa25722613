//! Config-driven simulation entry point.
//!
//! # Steps
//!
//! 1. Check the configuration for the selected algorithm.
//! 2. Optionally validate the process set.
//! 3. Run the configured discipline.
//! 4. Summarize the populated records as KPIs.

use log::debug;

use super::ScheduleKpi;
use crate::config::SimulationConfig;
use crate::disciplines::RunReport;
use crate::error::ScheduleError;
use crate::models::Process;
use crate::validation::validate_processes;

/// Result of one simulation.
#[derive(Debug, Clone)]
pub struct SimulationOutcome {
    /// Run summary from the discipline.
    pub report: RunReport,
    /// Summary metrics over finished processes.
    pub kpi: ScheduleKpi,
}

/// Runs the discipline selected by a [`SimulationConfig`].
///
/// # Example
/// ```
/// use u_cpu_schedule::config::{Algorithm, SimulationConfig};
/// use u_cpu_schedule::models::Process;
/// use u_cpu_schedule::scheduler::Simulator;
///
/// let mut procs = vec![Process::new("A", 0, 5), Process::new("B", 1, 3)];
/// let sim = Simulator::new(SimulationConfig::new(Algorithm::Fcfs));
/// let outcome = sim.run(&mut procs).unwrap();
/// assert!((outcome.kpi.avg_waiting_time - 2.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    /// Creates a simulator.
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Runs the configured discipline over `processes`.
    ///
    /// Configuration and validation errors are returned before any record
    /// is mutated.
    pub fn run(&self, processes: &mut [Process]) -> Result<SimulationOutcome, ScheduleError> {
        self.config.check()?;
        if self.config.validate_input {
            validate_processes(processes).map_err(ScheduleError::InvalidInput)?;
        }

        let discipline = self.config.discipline();
        debug!(
            "Simulating {} process(es) with {}",
            processes.len(),
            discipline.description()
        );

        let report = discipline.run(processes)?;
        let kpi = ScheduleKpi::calculate(processes);
        Ok(SimulationOutcome { report, kpi })
    }
}
