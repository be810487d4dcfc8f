//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// The engine itself only ever produces [`Error::InvalidCapacity`]. The
/// remaining variants belong to the collaborators around it (selector
/// parsing, reference parsing, configuration files).
#[derive(Debug, Error)]
pub enum Error {
    /// Frame capacity below one.
    ///
    /// Stored as `i64` so that negative values coming from user input can be
    /// reported as given.
    #[error("Invalid capacity {0}: at least one frame is required")]
    InvalidCapacity(i64),

    /// Policy selector that names none of FIFO, LRU or Optimal.
    #[error("Unknown replacement policy: {0:?}")]
    InvalidPolicy(String),

    /// A token in the reference string is not an integer page id.
    ///
    /// `position` is 1-based, counted in tokens.
    #[error("Malformed reference {token:?} at position {position}")]
    MalformedInput { token: String, position: usize },

    /// The reference string contains no page ids at all.
    #[error("Reference string is empty")]
    EmptyReferenceString,

    /// I/O error while reading an input or configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failed, usually a malformed
    /// [`SimulationConfig`] file.
    ///
    /// [`SimulationConfig`]: crate::common::config::SimulationConfig
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidCapacity(0);
        assert_eq!(
            format!("{}", err),
            "Invalid capacity 0: at least one frame is required"
        );

        let err = Error::InvalidPolicy("mru".to_string());
        assert_eq!(format!("{}", err), "Unknown replacement policy: \"mru\"");

        let err = Error::MalformedInput {
            token: "x".to_string(),
            position: 3,
        };
        assert_eq!(format!("{}", err), "Malformed reference \"x\" at position 3");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();

        match err {
            Error::Io(_) => {} // Success
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_io_error_source() {
        use std::error::Error as _;

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(err.source().is_some());
        assert!(Error::EmptyReferenceString.source().is_none());
    }

    #[test]
    fn test_result_type_alias() {
        fn might_fail() -> Result<u32> {
            Err(Error::InvalidCapacity(-1))
        }

        assert!(matches!(might_fail(), Err(Error::InvalidCapacity(-1))));
    }
}
