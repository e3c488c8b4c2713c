//! Error types for the uniq-forest crate.

use thiserror::Error;

/// Errors that can occur while deduplicating a forest stream.
#[derive(Error, Debug)]
pub enum UniqForestError {
    /// A record line did not contain the field separator.
    #[error("malformed record (no `|||` separator): {0}")]
    MissingSeparator(String),

    /// The trailing score field could not be parsed as a number.
    #[error("invalid score `{score}`: {source}")]
    InvalidScore {
        score: String,
        source: std::num::ParseFloatError,
    },

    /// The stream ended immediately after a `sentence :` marker line.
    #[error("unexpected end of stream after `sentence :` marker")]
    UnexpectedEndOfStream,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for uniq-forest operations.
pub type UniqForestResult<T> = Result<T, UniqForestError>;
