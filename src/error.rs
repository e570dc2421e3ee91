//! Crate-level error type

use thiserror::Error;

/// Errors that abort a whole run.
///
/// Everything entry-scoped — missing attachments, missing fields, declined
/// prompts, failed moves — is reported through the [`Reporter`] seam and the
/// affected entry passes through unchanged. Only failures at the document
/// boundary (reading or writing the bibliography file) and a broken
/// confirmation channel are fatal.
///
/// [`Reporter`]: crate::report::Reporter
#[derive(Debug, Error)]
pub enum AttachError {
    /// Reading or writing the bibliography file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The confirmation channel failed before an answer arrived
    #[error("confirmation prompt failed: {0}")]
    Prompt(String),
}

/// Result type for attachment operations
pub type AttachResult<T> = Result<T, AttachError>;
