//! Shortest-first candidate selection shared by SJF and SRTF.
//!
//! # Tie-break
//!
//! Candidates are scanned in slice order. The first candidate is taken;
//! a later one replaces the pick only when its key is strictly smaller,
//! or when its key is equal and it arrived strictly earlier. Two
//! candidates with equal key and equal arrival therefore resolve to the
//! one with the lower index.

use crate::models::Process;

/// Picks the index of the ready process with the smallest key.
///
/// `key` returns `None` for processes that are not eligible (not arrived,
/// already finished) and `Some(key)` otherwise.
pub(crate) fn select_shortest<F>(processes: &[Process], mut key: F) -> Option<usize>
where
    F: FnMut(usize, &Process) -> Option<i64>,
{
    let mut best: Option<(usize, i64)> = None;

    for (i, p) in processes.iter().enumerate() {
        let Some(k) = key(i, p) else {
            continue;
        };

        match best {
            None => best = Some((i, k)),
            Some((_, min)) if k < min => best = Some((i, k)),
            Some((j, min)) if k == min && p.arrival_time < processes[j].arrival_time => {
                best = Some((i, k))
            }
            _ => {}
        }
    }

    best.map(|(i, _)| i)
}
