//! Error types for journal storage and draft validation.

use crate::draft::{MAX_DESCRIPTION_CHARS, MIN_DESCRIPTION_CHARS};

/// Errors returned by the journal store and validation helpers.
#[derive(Debug, thiserror::Error)]
pub enum JournalError {
    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization error.
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    /// Description below the minimum length.
    #[error("description too short: {chars} chars (minimum {min})", min = MIN_DESCRIPTION_CHARS)]
    DescriptionTooShort { chars: usize },
    /// Description above the maximum length.
    #[error("description too long: {chars} chars (maximum {max})", max = MAX_DESCRIPTION_CHARS)]
    DescriptionTooLong { chars: usize },
}
