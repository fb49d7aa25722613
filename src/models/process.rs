//! Process record model.
//!
//! A process is the unit of work dispatched to the single simulated CPU.
//! It carries two immutable inputs (arrival, burst) and the timing outputs
//! a discipline fills in once the process finishes.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

/// A process to be scheduled on one CPU.
///
/// # Time Representation
/// All times are integer ticks relative to the simulation epoch (t=0).
///
/// # Outputs
/// `completion_time`, `turnaround_time` and `waiting_time` are `0` until the
/// process finishes; `is_completed` distinguishes a finished process from one
/// left behind by a bounded simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Process identifier.
    pub name: String,
    /// Instant the process becomes ready to run.
    pub arrival_time: i64,
    /// Total CPU time the process needs.
    pub burst_time: i64,
    /// Instant the process finished.
    #[serde(default)]
    pub completion_time: i64,
    /// `completion_time - arrival_time`.
    #[serde(default)]
    pub turnaround_time: i64,
    /// `turnaround_time - burst_time`.
    #[serde(default)]
    pub waiting_time: i64,
    /// Whether the outputs above are populated.
    #[serde(default)]
    pub is_completed: bool,
}

impl Process {
    /// Creates a process with inputs only.
    pub fn new(name: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            name: name.into(),
            arrival_time,
            burst_time,
            completion_time: 0,
            turnaround_time: 0,
            waiting_time: 0,
            is_completed: false,
        }
    }

    /// Marks the process finished at `completion_time` and derives
    /// turnaround and waiting time from it.
    pub fn finish(&mut self, completion_time: i64) {
        self.completion_time = completion_time;
        self.turnaround_time = completion_time - self.arrival_time;
        self.waiting_time = self.turnaround_time - self.burst_time;
        self.is_completed = true;
    }

    /// Clears every output field back to its unfinished sentinel.
    pub fn reset_outputs(&mut self) {
        self.completion_time = 0;
        self.turnaround_time = 0;
        self.waiting_time = 0;
        self.is_completed = false;
    }

    /// Whether the process has arrived by `time`.
    pub fn has_arrived(&self, time: i64) -> bool {
        self.arrival_time <= time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_new() {
        let p = Process::new("P1", 3, 7);
        assert_eq!(p.name, "P1");
        assert_eq!(p.arrival_time, 3);
        assert_eq!(p.burst_time, 7);
        assert_eq!(p.completion_time, 0);
        assert!(!p.is_completed);
    }

    #[test]
    fn test_finish_derives_metrics() {
        let mut p = Process::new("B", 1, 3);
        p.finish(8);
        assert!(p.is_completed);
        assert_eq!(p.completion_time, 8);
        assert_eq!(p.turnaround_time, 7);
        assert_eq!(p.waiting_time, 4);
    }

    #[test]
    fn test_reset_outputs() {
        let mut p = Process::new("A", 0, 5);
        p.finish(5);
        p.reset_outputs();
        assert_eq!(p, Process::new("A", 0, 5));
    }

    #[test]
    fn test_has_arrived() {
        let p = Process::new("A", 4, 1);
        assert!(!p.has_arrived(3));
        assert!(p.has_arrived(4));
        assert!(p.has_arrived(10));
    }

    #[test]
    fn test_deserialize_inputs_only() {
        let p: Process =
            serde_json::from_str(r#"{"name":"P1","arrival_time":2,"burst_time":4}"#).unwrap();
        assert_eq!(p, Process::new("P1", 2, 4));
    }

    #[test]
    fn test_serde_roundtrip_finished() {
        let mut p = Process::new("P9", 0, 2);
        p.finish(6);
        let json = serde_json::to_string(&p).unwrap();
        let back: Process = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
