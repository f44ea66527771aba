//! Error types for deadline operations.

use thiserror::Error;

/// Errors that can occur during deadline operations.
#[derive(Debug, Error)]
pub enum DeadlineError {
    /// The requested duration is not usable as a timeout window.
    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    /// The timer thread could not be spawned.
    #[error("Failed to spawn timer thread: {0}")]
    SpawnFailed(#[from] std::io::Error),
}

impl DeadlineError {
    /// Create an invalid duration error.
    #[must_use]
    pub fn invalid_duration(reason: impl Into<String>) -> Self {
        Self::InvalidDuration(reason.into())
    }
}

/// A specialized `Result` type for deadline operations.
pub type DeadlineResult<T> = std::result::Result<T, DeadlineError>;
