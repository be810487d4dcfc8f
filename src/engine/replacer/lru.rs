//! LRU (Least Recently Used) replacement policy.

use log::trace;

use crate::common::{Capacity, PageId};
use crate::engine::replacer::{Access, Replacer};
use crate::engine::FrameSet;

/// Evicts the page whose last reference is oldest.
///
/// Recency is kept by reordering on access: slot 0 is the least recently
/// used page, the last slot the most recently used one. A hit moves its page
/// to the back; a fault evicts slot 0 when the set is full.
///
/// There is no separate timestamp table, so two pages can never tie on
/// staleness and the victim is always unique.
pub struct LruReplacer {
    frames: FrameSet,
}

impl LruReplacer {
    /// Create an LRU replacer with empty frames.
    pub fn new(capacity: Capacity) -> Self {
        Self {
            frames: FrameSet::new(capacity),
        }
    }

    /// Least recently used resident page, the next victim.
    pub fn peek_victim(&self) -> Option<PageId> {
        self.frames.get(0)
    }
}

impl Replacer for LruReplacer {
    fn access(&mut self, refs: &[PageId], step: usize) -> Access {
        let page = refs[step];

        if let Some(slot) = self.frames.position(page) {
            // Most recent goes to the back
            self.frames.remove(slot);
            self.frames.push_back(page);
            return Access::Hit;
        }

        let evicted = if self.frames.is_full() {
            self.frames.pop_front()
        } else {
            None
        };
        if let Some(victim) = evicted {
            trace!("lru: step {} evicts {} for {}", step, victim, page);
        }
        self.frames.push_back(page);

        Access::Fault { evicted }
    }

    fn frames(&self) -> &FrameSet {
        &self.frames
    }
}
