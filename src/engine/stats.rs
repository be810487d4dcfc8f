//! Per-run statistics.

use std::fmt;

use serde::Serialize;

use crate::engine::StepSnapshot;

/// Counters describing one simulation run.
///
/// Derived from the step history once the run has finished, so they always
/// agree with it: `hits + faults == references` and `evictions <= faults`.
///
/// # Example
/// ```
/// use pagesim::{simulate, PageId, Policy};
///
/// let refs = PageId::sequence([1, 2, 1, 3]);
/// let result = simulate(&refs, 2, Policy::Lru).unwrap();
/// let stats = result.stats();
///
/// assert_eq!(stats.faults, 3);
/// assert_eq!(stats.hits, 1);
/// assert_eq!(stats.evictions, 1);
/// println!("{}", stats);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// Length of the reference string.
    pub references: u64,

    /// References that found their page resident.
    pub hits: u64,

    /// References that had to bring their page in.
    pub faults: u64,

    /// Faults that pushed another page out.
    pub evictions: u64,
}

impl RunStats {
    /// Tally counters from a step history.
    pub fn from_history(history: &[StepSnapshot]) -> Self {
        history.iter().fold(RunStats::default(), |mut stats, step| {
            stats.references += 1;
            if step.fault {
                stats.faults += 1;
            } else {
                stats.hits += 1;
            }
            if step.evicted.is_some() {
                stats.evictions += 1;
            }
            stats
        })
    }

    /// Calculate hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.hits as f64 / self.references as f64
        }
    }

    /// Calculate fault rate (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.faults as f64 / self.references as f64
        }
    }
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ references: {}, hits: {}, faults: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.references,
            self.hits,
            self.faults,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}
