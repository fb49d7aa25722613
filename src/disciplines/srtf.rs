//! Shortest-Remaining-Time-First (preemptive SJF).
//!
//! # Algorithm
//!
//! Unit-time simulation. On every tick, the arrived process with the least
//! remaining work runs for one unit (same tie-break as SJF). A newly
//! arrived process with strictly less remaining work takes over at the
//! next tick boundary.
//!
//! # Horizon
//!
//! The loop stops once the clock reaches the horizon, even with work left.
//! Unfinished processes keep `is_completed == false` and zeroed outputs,
//! and the report has `horizon_reached` set.

use log::{debug, trace, warn};

use super::selection::select_shortest;
use super::{first_start_time, reset_outputs, Discipline, RunReport};
use crate::config::DEFAULT_HORIZON;
use crate::error::ScheduleError;
use crate::models::Process;

/// Shortest-Remaining-Time-First, preemptive.
///
/// Does not reorder the slice.
#[derive(Debug, Clone, Copy)]
pub struct Srtf {
    /// Simulated instant at which the run gives up.
    pub horizon: i64,
}

impl Default for Srtf {
    fn default() -> Self {
        Self {
            horizon: DEFAULT_HORIZON,
        }
    }
}

impl Srtf {
    /// Creates an SRTF discipline with a custom horizon.
    pub fn with_horizon(horizon: i64) -> Self {
        Self { horizon }
    }
}

impl Discipline for Srtf {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn run(&self, processes: &mut [Process]) -> Result<RunReport, ScheduleError> {
        Ok(run_srtf_with_horizon(processes, self.horizon))
    }

    fn description(&self) -> &'static str {
        "Shortest-Remaining-Time-First (preemptive)"
    }
}

/// Runs SRTF over `processes` with [`DEFAULT_HORIZON`].
pub fn run_srtf(processes: &mut [Process]) -> RunReport {
    run_srtf_with_horizon(processes, DEFAULT_HORIZON)
}

/// Runs SRTF over `processes`, stopping once the clock reaches `horizon`.
pub fn run_srtf_with_horizon(processes: &mut [Process], horizon: i64) -> RunReport {
    reset_outputs(processes);
    let n = processes.len();
    debug!("SRTF: scheduling {n} process(es), horizon {horizon}");

    let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst_time).collect();
    let mut completed = 0;
    let mut current_time = first_start_time(processes);
    let mut running: Option<usize> = None;

    while completed < n && current_time < horizon {
        let picked = select_shortest(processes, |i, p| {
            (p.has_arrived(current_time) && remaining[i] > 0).then_some(remaining[i])
        });

        let Some(i) = picked else {
            current_time += 1;
            continue;
        };

        if running != Some(i) {
            trace!(
                "SRTF: t={current_time} switch to '{}' ({} left)",
                processes[i].name,
                remaining[i]
            );
            running = Some(i);
        }

        remaining[i] -= 1;
        current_time += 1;
        if remaining[i] == 0 {
            processes[i].finish(current_time);
            completed += 1;
        }
    }

    let horizon_reached = completed < n;
    if horizon_reached {
        warn!(
            "SRTF: horizon {horizon} reached with {} of {n} process(es) unfinished",
            n - completed
        );
    } else {
        debug!("SRTF: finished at t={current_time}");
    }
    RunReport::new(Srtf::default().name(), processes, current_time, horizon_reached)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disciplines::run_sjf;

    fn find<'a>(procs: &'a [Process], name: &str) -> &'a Process {
        procs.iter().find(|p| p.name == name).unwrap()
    }

    #[test]
    fn test_srtf_preempts_on_shorter_arrival() {
        let mut procs = vec![
            Process::new("A", 0, 8),
            Process::new("B", 1, 4),
            Process::new("C", 2, 9),
            Process::new("D", 3, 5),
        ];
        let report = run_srtf(&mut procs);

        // A 0-1, B 1-5, D 5-10, A 10-17, C 17-26
        assert_eq!(find(&procs, "B").completion_time, 5);
        assert_eq!(find(&procs, "D").completion_time, 10);
        assert_eq!(find(&procs, "A").completion_time, 17);
        assert_eq!(find(&procs, "C").completion_time, 26);
        assert_eq!(find(&procs, "A").waiting_time, 9);
        assert_eq!(report.end_time, 26);
        assert!(!report.horizon_reached);
    }

    #[test]
    fn test_srtf_no_preemption_on_equal_remaining() {
        // At t=2, A has 2 left and B arrives with 2; A arrived earlier and keeps the CPU
        let mut procs = vec![Process::new("A", 0, 4), Process::new("B", 2, 2)];
        run_srtf(&mut procs);
        assert_eq!(procs[0].completion_time, 4);
        assert_eq!(procs[1].completion_time, 6);
    }

    #[test]
    fn test_srtf_matches_sjf_without_preemption() {
        // No later arrival ever has strictly less remaining work than the runner
        let input = vec![
            Process::new("A", 0, 3),
            Process::new("B", 1, 5),
            Process::new("C", 2, 4),
            Process::new("D", 9, 6),
        ];
        let mut srtf = input.clone();
        let mut sjf = input;
        run_srtf(&mut srtf);
        run_sjf(&mut sjf);
        assert_eq!(srtf, sjf);
    }

    #[test]
    fn test_srtf_idle_start() {
        let mut procs = vec![Process::new("A", 4, 2)];
        run_srtf(&mut procs);
        assert_eq!(procs[0].completion_time, 6);
        assert_eq!(procs[0].waiting_time, 0);
    }

    #[test]
    fn test_srtf_horizon_partial_result() {
        let mut procs = vec![Process::new("A", 0, 3), Process::new("B", 0, 20)];
        let report = run_srtf_with_horizon(&mut procs, 10);

        assert!(report.horizon_reached);
        assert_eq!(report.completed, 1);
        assert_eq!(report.end_time, 10);
        assert!(procs[0].is_completed);
        assert_eq!(procs[0].completion_time, 3);
        assert!(!procs[1].is_completed);
        assert_eq!(procs[1].completion_time, 0);
    }

    #[test]
    fn test_srtf_never_arriving_process() {
        let mut procs = vec![Process::new("A", 0, 1), Process::new("far", 50_000, 1)];
        let report = run_srtf(&mut procs);
        assert!(report.horizon_reached);
        assert!(procs[0].is_completed);
        assert!(!procs[1].is_completed);
        assert_eq!(report.end_time, DEFAULT_HORIZON);
    }

    #[test]
    fn test_srtf_zero_burst_stays_incomplete() {
        let mut procs = vec![Process::new("zero", 0, 0), Process::new("A", 0, 2)];
        let report = run_srtf_with_horizon(&mut procs, 100);
        assert!(!procs[0].is_completed);
        assert!(procs[1].is_completed);
        assert!(report.horizon_reached);
    }

    #[test]
    fn test_srtf_non_positive_horizon_runs_nothing() {
        let mut procs = vec![Process::new("A", 0, 1)];
        let report = run_srtf_with_horizon(&mut procs, 0);
        assert_eq!(report.completed, 0);
        assert!(report.horizon_reached);
    }

    #[test]
    fn test_srtf_trait_uses_horizon() {
        let mut procs = vec![Process::new("A", 0, 5)];
        let report = Srtf::with_horizon(3).run(&mut procs).unwrap();
        assert!(report.horizon_reached);
        assert_eq!(report.algorithm, "SRTF");
    }
}
