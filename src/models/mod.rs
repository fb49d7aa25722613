//! Scheduling domain models.
//!
//! Provides the process record every discipline consumes and a random
//! workload generator for producing process sets.
//!
//! # Domain Mappings
//!
//! | u-cpu-schedule | Operating System | Batch Queue |
//! |----------------|------------------|-------------|
//! | Process | Process / Thread | Job |
//! | Arrival time | Admission to ready queue | Submission |
//! | Burst time | CPU burst | Run time |

mod process;
mod workload;

pub use process::Process;
pub use workload::WorkloadGenerator;
