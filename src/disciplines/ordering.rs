//! Arrival ordering.

use crate::models::Process;

/// Sorts processes in place by ascending arrival time.
///
/// The sort is stable: processes with equal arrival keep their current
/// relative order, so repeated calls never shuffle ties.
pub fn sort_by_arrival(processes: &mut [Process]) {
    processes.sort_by_key(|p| p.arrival_time);
}

/// Earliest instant the CPU may start working: the smallest arrival,
/// never before t=0. Returns 0 for an empty set.
pub(crate) fn first_start_time(processes: &[Process]) -> i64 {
    processes
        .iter()
        .map(|p| p.arrival_time)
        .min()
        .unwrap_or(0)
        .max(0)
}
