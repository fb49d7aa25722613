//! Shortest-Job-First (non-preemptive).
//!
//! # Algorithm
//!
//! 1. Start the clock at the earliest arrival.
//! 2. Among unfinished processes that have arrived, pick the shortest
//!    burst. Ties go to the earlier arrival, then the lower index.
//! 3. Run it to completion; if nothing is ready, advance one tick.
//!
//! # Reference
//! Smith (1956): SPT ordering minimizes mean flow time on one machine.

use log::{debug, trace};

use super::selection::select_shortest;
use super::{first_start_time, reset_outputs, Discipline, RunReport};
use crate::error::ScheduleError;
use crate::models::Process;

/// Shortest-Job-First, non-preemptive.
///
/// Does not reorder the slice.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl Discipline for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn run(&self, processes: &mut [Process]) -> Result<RunReport, ScheduleError> {
        Ok(run_sjf(processes))
    }

    fn description(&self) -> &'static str {
        "Shortest-Job-First (non-preemptive)"
    }
}

/// Runs non-preemptive SJF over `processes`.
pub fn run_sjf(processes: &mut [Process]) -> RunReport {
    reset_outputs(processes);
    let n = processes.len();
    debug!("SJF: scheduling {n} process(es)");

    let mut finished = vec![false; n];
    let mut completed = 0;
    let mut current_time = first_start_time(processes);

    while completed < n {
        let picked = select_shortest(processes, |i, p| {
            (!finished[i] && p.has_arrived(current_time)).then_some(p.burst_time)
        });

        match picked {
            Some(i) => {
                let p = &mut processes[i];
                trace!("SJF: t={current_time} run '{}' for {}", p.name, p.burst_time);
                current_time += p.burst_time;
                p.finish(current_time);
                finished[i] = true;
                completed += 1;
            }
            None => current_time += 1,
        }
    }

    debug!("SJF: finished at t={current_time}");
    RunReport::new(Sjf.name(), processes, current_time, false)
}
