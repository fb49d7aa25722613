//! First-Come-First-Served.

use log::{debug, trace};

use super::{reset_outputs, sort_by_arrival, Discipline, RunReport};
use crate::error::ScheduleError;
use crate::models::Process;

/// First-Come-First-Served.
///
/// Serves processes strictly in arrival order, each to completion. The CPU
/// idles only while waiting for the next arrival.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl Discipline for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn run(&self, processes: &mut [Process]) -> Result<RunReport, ScheduleError> {
        Ok(run_fcfs(processes))
    }

    fn description(&self) -> &'static str {
        "First-Come-First-Served"
    }
}

/// Runs FCFS over `processes`, sorting the slice by arrival first.
pub fn run_fcfs(processes: &mut [Process]) -> RunReport {
    reset_outputs(processes);
    sort_by_arrival(processes);
    debug!("FCFS: scheduling {} process(es)", processes.len());

    let mut current_time = 0;
    for p in processes.iter_mut() {
        if current_time < p.arrival_time {
            current_time = p.arrival_time;
        }
        trace!("FCFS: t={current_time} run '{}' for {}", p.name, p.burst_time);
        p.finish(current_time + p.burst_time);
        current_time += p.burst_time;
    }

    debug!("FCFS: finished at t={current_time}");
    RunReport::new(Fcfs.name(), processes, current_time, false)
}
