//! FIFO (First-In-First-Out) replacement policy.

use log::trace;

use crate::common::{Capacity, PageId};
use crate::engine::replacer::{Access, Replacer};
use crate::engine::FrameSet;

/// Evicts pages in the order they were brought in.
///
/// The frame set doubles as the queue: slot 0 is the oldest arrival.
/// Re-referencing a resident page does not move it.
pub struct FifoReplacer {
    frames: FrameSet,
}

impl FifoReplacer {
    /// Create a FIFO replacer with empty frames.
    pub fn new(capacity: Capacity) -> Self {
        Self {
            frames: FrameSet::new(capacity),
        }
    }
}

impl Replacer for FifoReplacer {
    fn access(&mut self, refs: &[PageId], step: usize) -> Access {
        let page = refs[step];
        if self.frames.contains(page) {
            return Access::Hit;
        }

        let evicted = if self.frames.is_full() {
            self.frames.pop_front()
        } else {
            None
        };
        if let Some(victim) = evicted {
            trace!("fifo: step {} evicts {} for {}", step, victim, page);
        }
        self.frames.push_back(page);

        Access::Fault { evicted }
    }

    fn frames(&self) -> &FrameSet {
        &self.frames
    }
}
