//! Error types for trazar operations.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trazar operations.
///
/// The taxonomy is narrow because the core is pure computation: every
/// failure is an immediate caller contract violation, never a transient
/// condition worth retrying.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Circle radius must be strictly positive.
    #[error("Invalid radius: {radius} (must be > 0)")]
    InvalidRadius {
        /// The rejected radius value.
        radius: i32,
    },

    /// Unrecognized line algorithm identifier.
    #[error("Unknown line algorithm: {0:?}")]
    UnknownAlgorithm(String),
}
