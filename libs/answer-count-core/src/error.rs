//! Error types for answer-count-core.

use thiserror::Error;

/// Result type alias using CountError.
pub type Result<T> = std::result::Result<T, CountError>;

/// Errors from configuration validation and the save-time hook.
#[derive(Debug, Error)]
pub enum CountError {
    #[error("question field \"{field}\" not present in note fields")]
    MissingQuestionField { field: String },

    #[error("answer count tag prefix must not be empty")]
    EmptyTagPrefix,

    #[error("default split character must not be empty")]
    EmptyDefaultSplitChar,
}
