//! Round Robin with a fixed time quantum.
//!
//! # Modes
//!
//! - [`RoundRobinMode::Scan`]: repeated passes over the arrival-sorted
//!   slice. Each arrived, unfinished process gets up to one quantum per
//!   pass, in slice position order. A process that arrives mid-pass is
//!   served in its slot during that same pass.
//! - [`RoundRobinMode::Queue`]: FIFO ready queue. Arrivals join the tail;
//!   a preempted process re-joins the tail behind everything that arrived
//!   up to the preemption instant.
//!
//! The two agree whenever no process is preempted (quantum at least the
//! longest burst), where both reduce to FCFS. They can differ when a
//! process arrives while earlier slots are still cycling.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.3

use std::collections::VecDeque;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::{reset_outputs, sort_by_arrival, Discipline, RunReport};
use crate::config::DEFAULT_QUANTUM;
use crate::error::ScheduleError;
use crate::models::Process;

/// How the ready set is cycled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundRobinMode {
    /// Linear passes over the arrival-sorted slice (default).
    #[default]
    Scan,
    /// Circular FIFO ready queue.
    Queue,
}

/// Round Robin.
///
/// Sorts the slice by arrival before running.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    /// Time slice granted per turn.
    pub quantum: i64,
    /// Ready-set cycling strategy.
    pub mode: RoundRobinMode,
}

impl Default for RoundRobin {
    fn default() -> Self {
        Self::new(DEFAULT_QUANTUM)
    }
}

impl RoundRobin {
    /// Creates a scan-mode Round Robin with the given quantum.
    pub fn new(quantum: i64) -> Self {
        Self {
            quantum,
            mode: RoundRobinMode::Scan,
        }
    }

    /// Sets the cycling strategy.
    pub fn with_mode(mut self, mode: RoundRobinMode) -> Self {
        self.mode = mode;
        self
    }

    /// Rejects input the pass loop could never finish.
    fn check(&self, processes: &[Process]) -> Result<(), ScheduleError> {
        if self.quantum <= 0 {
            return Err(ScheduleError::InvalidQuantum(self.quantum));
        }
        if let Some(p) = processes.iter().find(|p| p.burst_time <= 0) {
            return Err(ScheduleError::NonPositiveBurst {
                name: p.name.clone(),
                burst: p.burst_time,
            });
        }
        Ok(())
    }

    fn run_scan(&self, processes: &mut [Process]) -> i64 {
        let n = processes.len();
        let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst_time).collect();
        let mut completed = 0;
        let mut current_time = processes.first().map_or(0, |p| p.arrival_time.max(0));

        while completed < n {
            let mut progress = false;

            for (i, p) in processes.iter_mut().enumerate() {
                if !p.has_arrived(current_time) || remaining[i] == 0 {
                    continue;
                }
                progress = true;

                let slice = remaining[i].min(self.quantum);
                trace!("RR: t={current_time} run '{}' for {slice}", p.name);
                current_time += slice;
                remaining[i] -= slice;

                if remaining[i] == 0 {
                    p.finish(current_time);
                    completed += 1;
                }
            }

            if !progress {
                current_time += 1;
            }
        }

        current_time
    }

    fn run_queue(&self, processes: &mut [Process]) -> i64 {
        let n = processes.len();
        let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst_time).collect();
        let mut completed = 0;
        let mut current_time = processes.first().map_or(0, |p| p.arrival_time.max(0));
        let mut queue: VecDeque<usize> = VecDeque::with_capacity(n);
        let mut next_arrival = 0;

        while completed < n {
            while next_arrival < n && processes[next_arrival].has_arrived(current_time) {
                queue.push_back(next_arrival);
                next_arrival += 1;
            }

            let Some(i) = queue.pop_front() else {
                // Idle: nothing ready, jump to the next arrival.
                match processes.get(next_arrival) {
                    Some(p) => current_time = current_time.max(p.arrival_time),
                    None => break,
                }
                continue;
            };

            let slice = remaining[i].min(self.quantum);
            trace!(
                "RR: t={current_time} run '{}' for {slice}",
                processes[i].name
            );
            current_time += slice;
            remaining[i] -= slice;

            if remaining[i] == 0 {
                processes[i].finish(current_time);
                completed += 1;
            } else {
                while next_arrival < n && processes[next_arrival].has_arrived(current_time) {
                    queue.push_back(next_arrival);
                    next_arrival += 1;
                }
                queue.push_back(i);
            }
        }

        current_time
    }
}

impl Discipline for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn run(&self, processes: &mut [Process]) -> Result<RunReport, ScheduleError> {
        self.check(processes)?;

        reset_outputs(processes);
        sort_by_arrival(processes);
        debug!(
            "RR: scheduling {} process(es), quantum {}, {:?} mode",
            processes.len(),
            self.quantum,
            self.mode
        );

        let end_time = match self.mode {
            RoundRobinMode::Scan => self.run_scan(processes),
            RoundRobinMode::Queue => self.run_queue(processes),
        };

        debug!("RR: finished at t={end_time}");
        Ok(RunReport::new(self.name(), processes, end_time, false))
    }

    fn description(&self) -> &'static str {
        "Round Robin"
    }
}

/// Runs scan-mode Round Robin over `processes`.
///
/// Fails with [`ScheduleError::InvalidQuantum`] for `quantum <= 0`, leaving
/// the slice untouched.
pub fn run_round_robin(
    processes: &mut [Process],
    quantum: i64,
) -> Result<RunReport, ScheduleError> {
    RoundRobin::new(quantum).run(processes)
}
