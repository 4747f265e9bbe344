//! Error types for the linkmatch library.
//!
//! Pattern compilation and match construction report through
//! [`LinkError`]; searching a compiled pattern cannot fail. Unknown
//! country codes are deliberately not an error; see
//! [`crate::domain::combinator`].

use crate::domain::MatchKind;
use thiserror::Error;

/// Result type alias for linkmatch operations.
pub type LinkResult<T> = Result<T, LinkError>;

/// Error type for all pattern and match operations.
#[derive(Debug, Error)]
pub enum LinkError {
    /// A pattern failed to compile
    #[error("Pattern error for '{pattern}': {reason}")]
    PatternError { pattern: String, reason: String },

    /// A match configuration lacked the raw payload field its kind needs
    #[error("Missing '{field}' field for {kind} match")]
    MissingField { kind: MatchKind, field: &'static str },

    /// A match configuration for one kind was handed to another kind's factory
    #[error("Expected {expected} match configuration, found {found}")]
    KindMismatch { expected: MatchKind, found: MatchKind },
}

impl LinkError {
    /// Builds a [`LinkError::PatternError`] that keeps the offending source.
    pub fn pattern(pattern: impl Into<String>, err: &regex::Error) -> Self {
        Self::PatternError {
            pattern: pattern.into(),
            reason: err.to_string(),
        }
    }
}
