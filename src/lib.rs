//! Single-CPU process scheduling disciplines.
//!
//! Computes completion, turnaround and waiting time for a fixed set of
//! processes under four classical disciplines: FCFS, non-preemptive SJF,
//! preemptive SRTF, and Round Robin.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `WorkloadGenerator`
//! - **`disciplines`**: `Fcfs`, `Sjf`, `Srtf`, `RoundRobin` behind the
//!   `Discipline` trait, plus `run_*` free functions
//! - **`scheduler`**: `Simulator` (config-driven runs) and `ScheduleKpi`
//! - **`config`**: `SimulationConfig`, `Algorithm`, default quantum and horizon
//! - **`validation`**: Opt-in input checks (names, arrival, burst)
//! - **`error`**: `ScheduleError`
//!
//! # Example
//!
//! ```
//! use u_cpu_schedule::disciplines::run_sjf;
//! use u_cpu_schedule::models::Process;
//!
//! let mut procs = vec![
//!     Process::new("A", 0, 7),
//!     Process::new("B", 2, 4),
//!     Process::new("C", 4, 1),
//!     Process::new("D", 5, 4),
//! ];
//! run_sjf(&mut procs);
//! let completions: Vec<i64> = procs.iter().map(|p| p.completion_time).collect();
//! assert_eq!(completions, vec![7, 12, 8, 16]);
//! ```
//!
//! # Logging
//!
//! Runs emit `debug`/`trace` records through the `log` facade. The crate
//! never installs a logger.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod config;
pub mod disciplines;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::ScheduleError;
