//! Optimal (Belady) replacement policy.
//!
//! On a fault with no free frame, evict the resident page that will not be
//! needed for the longest time. Requires the full reference string up
//! front.
//!
//! # Victim selection
//! Resident pages are examined in slot order:
//! 1. the first page that is never referenced again is evicted at once;
//! 2. otherwise the page whose next reference is farthest away is evicted,
//!    the earliest slot winning ties.
//!
//! Two lookahead strategies implement the same rule (see
//! [`OptimalStrategy`]). `Scan` searches the unprocessed suffix for every
//! resident page on each fault. `NextUseTable` precomputes where each
//! reference recurs and keeps the next use of every resident page current,
//! so a fault costs O(capacity) instead of O(capacity × remaining).

use std::collections::HashMap;
use std::fmt;

use log::trace;

use crate::common::{Capacity, PageId};
use crate::engine::replacer::{Access, Replacer};
use crate::engine::{FrameSet, OptimalStrategy};

/// When a resident page is next referenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextUse {
    /// At this absolute index of the reference string.
    At(usize),
    /// Not referenced again.
    Never,
}

impl fmt::Display for NextUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NextUse::At(step) => write!(f, "step {}", step),
            NextUse::Never => write!(f, "never"),
        }
    }
}

/// Lookahead state for [`OptimalStrategy::NextUseTable`].
struct NextUseTable {
    /// `next[i]` is the next index after `i` referencing `refs[i]`.
    next: Vec<Option<usize>>,

    /// Next use of every resident page.
    resident: HashMap<PageId, Option<usize>>,
}

impl NextUseTable {
    fn build(refs: &[PageId]) -> Self {
        let mut next = vec![None; refs.len()];
        let mut seen: HashMap<PageId, usize> = HashMap::new();
        for (i, &page) in refs.iter().enumerate().rev() {
            next[i] = seen.insert(page, i);
        }
        Self {
            next,
            resident: HashMap::new(),
        }
    }

    fn next_use(&self, page: PageId) -> NextUse {
        match self.resident.get(&page) {
            Some(Some(step)) => NextUse::At(*step),
            _ => NextUse::Never,
        }
    }
}

/// Belady's algorithm.
///
/// # Example
/// ```
/// use pagesim::engine::replacer::{OptimalReplacer, Replacer};
/// use pagesim::{Capacity, PageId};
///
/// let refs = PageId::sequence([1, 2, 3, 1]);
/// let mut replacer = OptimalReplacer::new(Capacity::new(2).unwrap());
/// for step in 0..refs.len() {
///     replacer.access(&refs, step);
/// }
/// // 2 was never used again, so 3 took its slot
/// assert_eq!(replacer.frames().to_vec(), PageId::sequence([1, 3]));
/// ```
pub struct OptimalReplacer {
    frames: FrameSet,

    /// `None` means scan the suffix on every fault.
    table: Option<NextUseTable>,
}

impl OptimalReplacer {
    /// Create a replacer using [`OptimalStrategy::Scan`].
    pub fn new(capacity: Capacity) -> Self {
        Self {
            frames: FrameSet::new(capacity),
            table: None,
        }
    }

    /// Create a replacer using `strategy` for the reference string `refs`.
    ///
    /// With [`OptimalStrategy::NextUseTable`] the table is built from
    /// `refs` here, so the same slice must later be passed to `access`.
    pub fn with_strategy(
        capacity: Capacity,
        strategy: OptimalStrategy,
        refs: &[PageId],
    ) -> Self {
        let table = match strategy {
            OptimalStrategy::Scan => None,
            OptimalStrategy::NextUseTable => Some(NextUseTable::build(refs)),
        };
        Self {
            frames: FrameSet::new(capacity),
            table,
        }
    }

    /// Pick the slot to evict at `step`, and when its page is next used.
    fn select_victim(&self, refs: &[PageId], step: usize) -> (usize, NextUse) {
        let mut victim = 0;
        let mut farthest: Option<usize> = None;

        for (slot, page) in self.frames.iter().enumerate() {
            let next_use = match &self.table {
                Some(table) => table.next_use(page),
                None => scan_next_use(refs, step, page),
            };
            match next_use {
                NextUse::Never => return (slot, NextUse::Never),
                NextUse::At(at) => {
                    // Strictly farther only, so the earliest slot keeps ties
                    if farthest.map_or(true, |f| at > f) {
                        farthest = Some(at);
                        victim = slot;
                    }
                }
            }
        }

        let next_use = farthest.map_or(NextUse::Never, NextUse::At);
        (victim, next_use)
    }

    /// Record that `page` was referenced at `step`, advancing its next use.
    fn note_reference(&mut self, page: PageId, step: usize) {
        if let Some(table) = &mut self.table {
            let next = table.next[step];
            table.resident.insert(page, next);
        }
    }
}

/// First index after `step` referencing `page`.
fn scan_next_use(refs: &[PageId], step: usize, page: PageId) -> NextUse {
    refs[step + 1..]
        .iter()
        .position(|&p| p == page)
        .map_or(NextUse::Never, |offset| NextUse::At(step + 1 + offset))
}

impl Replacer for OptimalReplacer {
    fn access(&mut self, refs: &[PageId], step: usize) -> Access {
        if let Some(table) = &self.table {
            debug_assert_eq!(
                table.next.len(),
                refs.len(),
                "next-use table built for a different reference string"
            );
        }
        let page = refs[step];

        let access = if self.frames.contains(page) {
            Access::Hit
        } else if !self.frames.is_full() {
            self.frames.push_back(page);
            Access::Fault { evicted: None }
        } else {
            let (slot, next_use) = self.select_victim(refs, step);
            let evicted = self.frames.replace(slot, page);
            if let Some(victim) = evicted {
                trace!(
                    "optimal: step {} evicts {} from slot {} (next use {}) for {}",
                    step,
                    victim,
                    slot,
                    next_use,
                    page
                );
                if let Some(table) = &mut self.table {
                    table.resident.remove(&victim);
                }
            }
            Access::Fault { evicted }
        };

        self.note_reference(page, step);
        access
    }

    fn frames(&self) -> &FrameSet {
        &self.frames
    }
}
