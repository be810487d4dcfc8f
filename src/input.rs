//! Reference string parsing.
//!
//! Turns user text such as `"7 0 1 2"` or `"7, 0, 1, 2"` into page ids.
//! Commas and any whitespace separate tokens; empty tokens are skipped, so
//! `"1,,2"` and `"1, 2\n"` both read as two references.
//!
//! When the user supplies no references at all, [`random_references`]
//! draws a seeded one instead.

use std::fs;
use std::num::NonZeroU32;
use std::path::Path;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::common::{Error, PageId, Result};

/// Parse a reference string.
///
/// # Errors
/// - `Error::EmptyReferenceString` if `text` contains no tokens
/// - `Error::MalformedInput` for the first token that is not an integer
///
/// # Example
/// ```
/// use pagesim::input::parse_references;
/// use pagesim::PageId;
///
/// let refs = parse_references("7, 0 1,2").unwrap();
/// assert_eq!(refs, PageId::sequence([7, 0, 1, 2]));
/// assert!(parse_references("7 zero").is_err());
/// ```
pub fn parse_references(text: &str) -> Result<Vec<PageId>> {
    let refs = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(i, token)| {
            token.parse::<PageId>().map_err(|_| Error::MalformedInput {
                token: token.to_string(),
                position: i + 1,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if refs.is_empty() {
        return Err(Error::EmptyReferenceString);
    }
    Ok(refs)
}

/// Read and parse a reference string from a file.
///
/// # Errors
/// - `Error::Io` if the file cannot be read
/// - anything [`parse_references`] rejects
pub fn read_references<P: AsRef<Path>>(path: P) -> Result<Vec<PageId>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let refs = parse_references(&text)?;
    debug!("read {} references from {}", refs.len(), path.display());
    Ok(refs)
}

/// Length of the reference string drawn when none is given.
pub const DEFAULT_RANDOM_LENGTH: usize = 10;

/// Largest page id drawn when none is given.
pub const DEFAULT_MAX_PAGE: NonZeroU32 = match NonZeroU32::new(5) {
    Some(n) => n,
    None => unreachable!(),
};

/// Draw `len` page ids uniformly from `1..=max_page`.
///
/// The same seed always yields the same reference string.
///
/// # Example
/// ```
/// use std::num::NonZeroU32;
/// use pagesim::input::random_references;
///
/// let max_page = NonZeroU32::new(5).unwrap();
/// let refs = random_references(10, max_page, 42);
/// assert_eq!(refs.len(), 10);
/// assert_eq!(refs, random_references(10, max_page, 42));
/// ```
pub fn random_references(len: usize, max_page: NonZeroU32, seed: u64) -> Vec<PageId> {
    let mut rng = StdRng::seed_from_u64(seed);
    let max_page = i64::from(max_page.get());
    let refs: Vec<PageId> = (0..len).map(|_| PageId(rng.gen_range(1..=max_page))).collect();
    debug!(
        "drew {} references in 1..={} with seed {}",
        refs.len(),
        max_page,
        seed
    );
    refs
}
