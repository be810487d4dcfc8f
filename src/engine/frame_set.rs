//! The resident set of pages shared by every policy.

use std::collections::VecDeque;

use crate::common::{Capacity, PageId};

/// The pages currently resident in a fixed number of frames.
///
/// Slot order is meaningful and belongs to the policy driving the set:
/// FIFO keeps arrival order, LRU keeps recency order (least recent first),
/// Optimal replaces pages in place and never reorders.
///
/// # Invariants
/// - `len() <= capacity()`
/// - no page is resident twice
///
/// Both are checked with `debug_assert!` on every mutation; policies are
/// responsible for upholding them.
#[derive(Debug, Clone)]
pub struct FrameSet {
    /// Resident pages, front = slot 0.
    slots: VecDeque<PageId>,

    /// Maximum number of resident pages.
    capacity: Capacity,
}

impl FrameSet {
    /// Create an empty frame set.
    pub fn new(capacity: Capacity) -> Self {
        Self {
            slots: VecDeque::with_capacity(capacity.get()),
            capacity,
        }
    }

    #[inline]
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// True when no free frame is left.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity.get()
    }

    /// Check if `page` is resident.
    pub fn contains(&self, page: PageId) -> bool {
        self.slots.contains(&page)
    }

    /// Slot currently holding `page`, if resident.
    pub fn position(&self, page: PageId) -> Option<usize> {
        self.slots.iter().position(|&p| p == page)
    }

    /// Page in `slot`, if that slot is occupied.
    pub fn get(&self, slot: usize) -> Option<PageId> {
        self.slots.get(slot).copied()
    }

    /// Iterate resident pages in slot order.
    pub fn iter(&self) -> impl Iterator<Item = PageId> + '_ {
        self.slots.iter().copied()
    }

    /// Place `page` in the last slot.
    pub fn push_back(&mut self, page: PageId) {
        debug_assert!(!self.is_full(), "push into full frame set");
        debug_assert!(!self.contains(page), "{} already resident", page);
        self.slots.push_back(page);
    }

    /// Remove and return the page in slot 0.
    pub fn pop_front(&mut self) -> Option<PageId> {
        self.slots.pop_front()
    }

    /// Remove the page in `slot`, shifting later slots down by one.
    pub fn remove(&mut self, slot: usize) -> Option<PageId> {
        self.slots.remove(slot)
    }

    /// Overwrite `slot` with `page`, returning the page it held.
    ///
    /// Returns `None` (and leaves the set unchanged) if `slot` is empty.
    pub fn replace(&mut self, slot: usize, page: PageId) -> Option<PageId> {
        debug_assert!(!self.contains(page), "{} already resident", page);
        self.slots
            .get_mut(slot)
            .map(|resident| std::mem::replace(resident, page))
    }

    /// Copy of the resident pages in slot order.
    pub fn to_vec(&self) -> Vec<PageId> {
        self.slots.iter().copied().collect()
    }
}
