//! Replacement policy implementations (replacers).
//!
//! - [`FifoReplacer`] - evicts in arrival order
//! - [`LruReplacer`] - evicts the least recently referenced page
//! - [`OptimalReplacer`] - Belady's offline algorithm
//!
//! Every replacer owns a [`FrameSet`] and is driven one reference at a time
//! through the [`Replacer`] trait; recording history is the driver's job.

mod fifo;
mod lru;
mod optimal;

pub use fifo::FifoReplacer;
pub use lru::LruReplacer;
pub use optimal::{NextUse, OptimalReplacer};

use crate::common::PageId;
use crate::engine::FrameSet;

/// What happened to the frame set on one reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// The page was already resident.
    Hit,
    /// The page was brought in, pushing out `evicted` if the set was full.
    Fault { evicted: Option<PageId> },
}

impl Access {
    #[inline]
    pub fn is_fault(&self) -> bool {
        matches!(self, Access::Fault { .. })
    }

    /// Page pushed out by this access, if any.
    #[inline]
    pub fn evicted(&self) -> Option<PageId> {
        match *self {
            Access::Fault { evicted } => evicted,
            Access::Hit => None,
        }
    }
}

/// A page replacement policy.
pub trait Replacer {
    /// Process `refs[step]`.
    ///
    /// The whole reference string is passed so offline policies can look
    /// ahead; online policies only read `refs[step]`. Steps must be fed in
    /// order, starting at 0, against the same `refs` every time.
    fn access(&mut self, refs: &[PageId], step: usize) -> Access;

    /// Current resident set.
    fn frames(&self) -> &FrameSet;
}
