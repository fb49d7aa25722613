//! CPU scheduling disciplines.
//!
//! Each discipline takes a process set, simulates one CPU serving it, and
//! fills in the completion, turnaround and waiting time of every process
//! it finishes.
//!
//! | Discipline | Preemptive | Selection |
//! |------------|-----------|-----------|
//! | FCFS | no | earliest arrival |
//! | SJF | no | shortest burst among ready |
//! | SRTF | every tick | shortest remaining among ready |
//! | Round Robin | every quantum | array scan or FIFO ready queue |
//!
//! Scratch state (remaining time, per-run finished flags) lives inside each
//! run; records only carry inputs and outputs. Every run clears the outputs
//! of all records first, so the same slice can be fed to several
//! disciplines in turn.
//!
//! # Usage
//!
//! ```
//! use u_cpu_schedule::disciplines::{run_fcfs, run_round_robin};
//! use u_cpu_schedule::models::Process;
//!
//! let mut procs = vec![Process::new("A", 0, 5), Process::new("B", 1, 3)];
//! run_fcfs(&mut procs);
//! assert_eq!(procs[1].waiting_time, 4);
//!
//! run_round_robin(&mut procs, 2).unwrap();
//! assert_eq!(procs[0].completion_time, 8);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod ordering;
mod round_robin;
mod selection;
mod sjf;
mod srtf;

pub use fcfs::{run_fcfs, Fcfs};
pub use ordering::sort_by_arrival;
pub use round_robin::{run_round_robin, RoundRobin, RoundRobinMode};
pub use sjf::{run_sjf, Sjf};
pub use srtf::{run_srtf, run_srtf_with_horizon, Srtf};

pub(crate) use ordering::first_start_time;

use crate::error::ScheduleError;
use crate::models::Process;
use std::fmt::Debug;

/// A single-CPU scheduling discipline.
///
/// Implementations mutate the output fields of `processes` in place and
/// may reorder the slice (FCFS and Round Robin sort it by arrival).
pub trait Discipline: Send + Sync + Debug {
    /// Discipline name (e.g., "FCFS", "RR").
    fn name(&self) -> &'static str;

    /// Runs the simulation over `processes`.
    ///
    /// Errors are raised before any record is touched.
    fn run(&self, processes: &mut [Process]) -> Result<RunReport, ScheduleError>;

    /// Discipline description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Summary of one simulation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Name of the discipline that produced this run.
    pub algorithm: &'static str,
    /// Number of processes in the input.
    pub total: usize,
    /// Number of processes that finished.
    pub completed: usize,
    /// Simulated clock when the run stopped.
    pub end_time: i64,
    /// Whether the run stopped at its time horizon with work left.
    pub horizon_reached: bool,
}

impl RunReport {
    pub(crate) fn new(
        algorithm: &'static str,
        processes: &[Process],
        end_time: i64,
        horizon_reached: bool,
    ) -> Self {
        Self {
            algorithm,
            total: processes.len(),
            completed: processes.iter().filter(|p| p.is_completed).count(),
            end_time,
            horizon_reached,
        }
    }

    /// Whether every process finished.
    pub fn is_complete(&self) -> bool {
        self.completed == self.total
    }
}

/// Clears the outputs of every record ahead of a run.
pub(crate) fn reset_outputs(processes: &mut [Process]) {
    for p in processes.iter_mut() {
        p.reset_outputs();
    }
}
