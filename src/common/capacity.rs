//! Frame capacity type.

use std::fmt;
use std::num::NonZeroUsize;

use serde::Serialize;

use crate::common::{Error, Result};

/// Number of frames available to a simulation run.
///
/// A `Capacity` always holds at least one frame, so every policy can assume
/// there is a slot to fault a page into. Construction is the only place the
/// "capacity ≥ 1" precondition is checked.
///
/// # Example
/// ```
/// use pagesim::Capacity;
///
/// let capacity = Capacity::new(3).unwrap();
/// assert_eq!(capacity.get(), 3);
/// assert!(Capacity::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Capacity(NonZeroUsize);

impl Capacity {
    /// Create a capacity of `frames` frames.
    ///
    /// # Errors
    /// `Error::InvalidCapacity` if `frames` is 0.
    pub fn new(frames: usize) -> Result<Self> {
        NonZeroUsize::new(frames)
            .map(Capacity)
            .ok_or(Error::InvalidCapacity(0))
    }

    /// Number of frames.
    #[inline]
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl TryFrom<i64> for Capacity {
    type Error = Error;

    fn try_from(frames: i64) -> Result<Self> {
        if frames < 1 {
            return Err(Error::InvalidCapacity(frames));
        }
        let frames = usize::try_from(frames).map_err(|_| Error::InvalidCapacity(frames))?;
        Capacity::new(frames)
    }
}

impl TryFrom<usize> for Capacity {
    type Error = Error;

    fn try_from(frames: usize) -> Result<Self> {
        Capacity::new(frames)
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} frames", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_new() {
        assert_eq!(Capacity::new(10).unwrap().get(), 10);
    }

    #[test]
    fn test_capacity_zero_rejected() {
        assert!(matches!(Capacity::new(0), Err(Error::InvalidCapacity(0))));
    }

    #[test]
    fn test_capacity_negative_rejected() {
        assert!(matches!(
            Capacity::try_from(-4i64),
            Err(Error::InvalidCapacity(-4))
        ));
        assert_eq!(Capacity::try_from(2i64).unwrap().get(), 2);
    }

    #[test]
    fn test_capacity_display() {
        assert_eq!(format!("{}", Capacity::new(3).unwrap()), "3 frames");
    }
}
