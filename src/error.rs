//! Error types for anonboard.

use thiserror::Error;

/// Common error type for anonboard.
#[derive(Error, Debug)]
pub enum BoardError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Referenced thread or reply does not exist.
    ///
    /// The payload names the missing entity ("thread" or "reply").
    #[error("{0} not found")]
    NotFound(String),

    /// Broken store invariant (e.g. identifier collision on insert).
    #[error("internal error: {0}")]
    Internal(String),
}

impl BoardError {
    /// Shorthand for a missing thread.
    pub fn thread_not_found() -> Self {
        BoardError::NotFound("thread".to_string())
    }

    /// Shorthand for a missing reply.
    pub fn reply_not_found() -> Self {
        BoardError::NotFound("reply".to_string())
    }
}

/// Result type alias for anonboard operations.
pub type Result<T> = std::result::Result<T, BoardError>;
