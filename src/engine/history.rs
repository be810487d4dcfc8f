//! Step history and simulation results.

use serde::Serialize;

use crate::common::{Capacity, PageId};
use crate::engine::{Policy, RunStats};

/// The state of the frame set right after one reference was processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepSnapshot {
    /// 0-based index into the reference string.
    pub step: usize,

    /// The page referenced at this step.
    pub page: PageId,

    /// Whether `page` had to be brought in.
    pub fault: bool,

    /// Page pushed out to make room, if any.
    pub evicted: Option<PageId>,

    /// Resident pages in slot order (see [`FrameSet`]).
    ///
    /// [`FrameSet`]: crate::engine::FrameSet
    pub frames: Vec<PageId>,
}

/// Outcome of running one policy over a reference string.
///
/// Immutable once returned: the history has exactly one snapshot per
/// reference, and `fault_count()` equals the number of faulting snapshots.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResult {
    policy: Policy,
    capacity: Capacity,
    fault_count: usize,
    stats: RunStats,
    history: Vec<StepSnapshot>,
}

impl SimulationResult {
    pub(crate) fn new(policy: Policy, capacity: Capacity, history: Vec<StepSnapshot>) -> Self {
        let stats = RunStats::from_history(&history);
        let fault_count = history.iter().filter(|s| s.fault).count();
        Self {
            policy,
            capacity,
            fault_count,
            stats,
            history,
        }
    }

    /// Policy that produced this result.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Frame capacity the run used.
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// Total number of page faults.
    pub fn fault_count(&self) -> usize {
        self.fault_count
    }

    /// One snapshot per reference, in reference order.
    pub fn history(&self) -> &[StepSnapshot] {
        &self.history
    }

    /// Resident pages after each step, without the step metadata.
    pub fn frames(&self) -> impl Iterator<Item = &[PageId]> + '_ {
        self.history.iter().map(|s| s.frames.as_slice())
    }

    pub fn stats(&self) -> RunStats {
        self.stats
    }

    /// Consume the result, keeping only the history.
    pub fn into_history(self) -> Vec<StepSnapshot> {
        self.history
    }

    /// CRC-32 over the fault count and every snapshot.
    ///
    /// Two results with equal fingerprints recorded the same faults, victims
    /// and frame contents step for step. Policy and capacity are not part of
    /// the fingerprint, so different policies that happen to behave
    /// identically on an input also fingerprint identically.
    pub fn fingerprint(&self) -> u32 {
        let mut hasher = crc32fast::Hasher::new();
        hasher.update(&(self.fault_count as u64).to_le_bytes());
        for snapshot in &self.history {
            hasher.update(&(snapshot.step as u64).to_le_bytes());
            hasher.update(&snapshot.page.0.to_le_bytes());
            hasher.update(&[snapshot.fault as u8]);
            match snapshot.evicted {
                Some(victim) => {
                    hasher.update(&[1]);
                    hasher.update(&victim.0.to_le_bytes());
                }
                None => hasher.update(&[0]),
            }
            hasher.update(&(snapshot.frames.len() as u64).to_le_bytes());
            for page in &snapshot.frames {
                hasher.update(&page.0.to_le_bytes());
            }
        }
        hasher.finalize()
    }
}
