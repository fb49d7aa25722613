//! Config-driven simulation and KPI evaluation.
//!
//! # Simulator
//!
//! `Simulator` turns a `SimulationConfig` into a discipline, runs it, and
//! summarizes the result.
//!
//! # KPI
//!
//! `ScheduleKpi` computes average waiting and turnaround time, makespan,
//! CPU utilization and throughput.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 1.2

mod kpi;
mod simulator;

pub use kpi::ScheduleKpi;
pub use simulator::{SimulationOutcome, Simulator};
