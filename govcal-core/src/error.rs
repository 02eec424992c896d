//! Error types for govcal.

use thiserror::Error;

/// Errors that can occur when loading or querying calendar documents.
#[derive(Error, Debug)]
pub enum CalendarError {
    /// The named document, division, or year does not exist.
    #[error("Calendar not found: {0}")]
    CalendarNotFound(String),

    /// The document exists but its content cannot be used: malformed
    /// JSON, a bad date string, or the wrong shape under a year key.
    /// Always propagated to the caller, never papered over.
    #[error("Invalid calendar document: {0}")]
    InvalidDocument(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for govcal operations.
pub type CalendarResult<T> = Result<T, CalendarError>;
