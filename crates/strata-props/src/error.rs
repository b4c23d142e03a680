//! Error types for registry operations.

use std::fmt;

/// Errors raised by [`PropertyRegistry`](crate::PropertyRegistry)
/// operations.
///
/// All three kinds are unrecoverable at this layer and propagate to the
/// caller; the registry performs no retries and no clamping. The only
/// automatic recovery is the lazy-defaulting read path, which is not an
/// error at all.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PropertyError {
    /// The keyword is not in the catalog of supported keywords.
    UnsupportedKeyword {
        /// The unrecognised keyword.
        keyword: String,
    },
    /// The keyword is supported but no explicit property exists for it.
    NotInitialized {
        /// The keyword that has not been explicitly specified.
        keyword: String,
    },
    /// Positional access beyond the number of materialized properties.
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// Number of materialized properties.
        len: usize,
    },
}

impl fmt::Display for PropertyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedKeyword { keyword } => {
                write!(f, "keyword {keyword} is not supported in this container")
            }
            Self::NotInitialized { keyword } => {
                write!(f, "keyword {keyword} is supported but not initialized")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "property index {index} out of range ({len} materialized)")
            }
        }
    }
}

impl std::error::Error for PropertyError {}
