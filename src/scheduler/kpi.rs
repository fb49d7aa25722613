//! Schedule quality metrics (KPIs).
//!
//! Computes summary statistics over the finished processes of a run.
//! Processes left unfinished by a bounded run are counted in `total` but
//! excluded from every average.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting Time | Mean of `waiting_time` |
//! | Avg Turnaround Time | Mean of `turnaround_time` |
//! | Makespan | Latest completion time |
//! | CPU Utilization | Busy time / (makespan - first arrival) |
//! | Throughput | Completed processes per time unit over the same span |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use crate::models::Process;

/// Run performance indicators.
#[derive(Debug, Clone)]
pub struct ScheduleKpi {
    /// Number of processes in the run.
    pub total: usize,
    /// Number of finished processes.
    pub completed: usize,
    /// Mean waiting time of finished processes.
    pub avg_waiting_time: f64,
    /// Mean turnaround time of finished processes.
    pub avg_turnaround_time: f64,
    /// Latest completion time.
    pub makespan: i64,
    /// Sum of burst times of finished processes.
    pub total_burst: i64,
    /// Fraction of the busy span the CPU spent working (0.0..1.0).
    pub cpu_utilization: f64,
    /// Finished processes per time unit.
    pub throughput: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from processes populated by a discipline.
    pub fn calculate(processes: &[Process]) -> Self {
        let finished: Vec<&Process> = processes.iter().filter(|p| p.is_completed).collect();
        let completed = finished.len();

        let total_waiting: i64 = finished.iter().map(|p| p.waiting_time).sum();
        let total_turnaround: i64 = finished.iter().map(|p| p.turnaround_time).sum();
        let total_burst: i64 = finished.iter().map(|p| p.burst_time).sum();
        let makespan = finished.iter().map(|p| p.completion_time).max().unwrap_or(0);
        let first_arrival = finished
            .iter()
            .map(|p| p.arrival_time.max(0))
            .min()
            .unwrap_or(0);

        let (avg_waiting_time, avg_turnaround_time) = if completed == 0 {
            (0.0, 0.0)
        } else {
            (
                total_waiting as f64 / completed as f64,
                total_turnaround as f64 / completed as f64,
            )
        };

        let span = makespan - first_arrival;
        let (cpu_utilization, throughput) = if span <= 0 {
            (0.0, 0.0)
        } else {
            (
                total_burst as f64 / span as f64,
                completed as f64 / span as f64,
            )
        };

        Self {
            total: processes.len(),
            completed,
            avg_waiting_time,
            avg_turnaround_time,
            makespan,
            total_burst,
            cpu_utilization,
            throughput,
        }
    }

    /// Whether the run meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_avg_waiting: f64, min_utilization: f64) -> bool {
        self.avg_waiting_time <= max_avg_waiting && self.cpu_utilization >= min_utilization
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finished(name: &str, arrival: i64, burst: i64, completion: i64) -> Process {
        let mut p = Process::new(name, arrival, burst);
        p.finish(completion);
        p
    }

    #[test]
    fn test_kpi_basic() {
        let procs = vec![finished("A", 0, 5, 5), finished("B", 1, 3, 8)];
        let kpi = ScheduleKpi::calculate(&procs);

        assert_eq!(kpi.total, 2);
        assert_eq!(kpi.completed, 2);
        assert!((kpi.avg_waiting_time - 2.0).abs() < 1e-10); // (0+4)/2
        assert!((kpi.avg_turnaround_time - 6.0).abs() < 1e-10); // (5+7)/2
        assert_eq!(kpi.makespan, 8);
        assert_eq!(kpi.total_burst, 8);
        assert!((kpi.cpu_utilization - 1.0).abs() < 1e-10);
        assert!((kpi.throughput - 0.25).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_idle_lowers_utilization() {
        let procs = vec![finished("A", 0, 2, 2), finished("B", 6, 2, 8)];
        let kpi = ScheduleKpi::calculate(&procs);
        assert!((kpi.cpu_utilization - 0.5).abs() < 1e-10); // 4 busy / 8 span
    }

    #[test]
    fn test_kpi_span_starts_at_first_arrival() {
        let procs = vec![finished("A", 10, 4, 14)];
        let kpi = ScheduleKpi::calculate(&procs);
        assert!((kpi.cpu_utilization - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_ignores_unfinished() {
        let procs = vec![finished("A", 0, 3, 3), Process::new("B", 0, 20)];
        let kpi = ScheduleKpi::calculate(&procs);
        assert_eq!(kpi.total, 2);
        assert_eq!(kpi.completed, 1);
        assert!((kpi.avg_turnaround_time - 3.0).abs() < 1e-10);
        assert_eq!(kpi.total_burst, 3);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = ScheduleKpi::calculate(&[]);
        assert_eq!(kpi.total, 0);
        assert_eq!(kpi.makespan, 0);
        assert!((kpi.avg_waiting_time - 0.0).abs() < 1e-10);
        assert!((kpi.cpu_utilization - 0.0).abs() < 1e-10);
        assert!((kpi.throughput - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_meets_thresholds() {
        let procs = vec![finished("A", 0, 5, 5), finished("B", 1, 3, 8)];
        let kpi = ScheduleKpi::calculate(&procs);
        assert!(kpi.meets_thresholds(2.0, 0.9));
        assert!(!kpi.meets_thresholds(1.9, 0.0));
        assert!(!kpi.meets_thresholds(10.0, 1.5));
    }
}
