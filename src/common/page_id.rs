//! Page identifier type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifies a page in a reference string.
///
/// Page ids are opaque: the engine only ever compares them for equality.
/// `i64` covers every integer a user can type into a reference string,
/// negative ids included.
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page_id = PageId::new(42);
/// assert_eq!(page_id.0, 42);
/// assert_eq!(page_id.to_string(), "42");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PageId(pub i64);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: i64) -> Self {
        PageId(id)
    }

    /// Build a reference string from raw integers.
    ///
    /// # Example
    /// ```
    /// use pagesim::PageId;
    ///
    /// let refs = PageId::sequence([7, 0, 1]);
    /// assert_eq!(refs, vec![PageId(7), PageId(0), PageId(1)]);
    /// ```
    pub fn sequence<I: IntoIterator<Item = i64>>(ids: I) -> Vec<PageId> {
        ids.into_iter().map(PageId).collect()
    }
}

impl From<i64> for PageId {
    fn from(id: i64) -> Self {
        PageId(id)
    }
}

impl FromStr for PageId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.parse::<i64>().map(PageId)
    }
}

impl fmt::Display for PageId {
    /// Formats as the bare integer, honoring width and alignment.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
