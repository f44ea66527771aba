//! Error types for the safety monitor.

use motorguard_deadline::DeadlineError;
use thiserror::Error;

/// Errors that can occur during safety monitor operations.
#[derive(Debug, Error)]
pub enum SafetyError {
    /// The requested expiration window is not usable (zero, negative, or
    /// non-finite). State is left unchanged.
    #[error("Invalid expiration: {0}")]
    InvalidExpiration(String),

    /// The actuator's stop path failed. Raised by `MotorSafety`
    /// implementors; the timeout handler reports it and keeps the timer
    /// thread alive.
    #[error("Stop failed: {0}")]
    StopFailed(String),

    /// The underlying deadline timer could not be set up.
    #[error("Deadline timer failure: {0}")]
    Timer(String),
}

impl SafetyError {
    /// Create an invalid expiration error.
    #[must_use]
    pub fn invalid_expiration(reason: impl Into<String>) -> Self {
        Self::InvalidExpiration(reason.into())
    }

    /// Create a stop-failed error.
    #[must_use]
    pub fn stop_failed(reason: impl Into<String>) -> Self {
        Self::StopFailed(reason.into())
    }
}

impl From<DeadlineError> for SafetyError {
    fn from(err: DeadlineError) -> Self {
        match err {
            DeadlineError::InvalidDuration(reason) => Self::InvalidExpiration(reason),
            DeadlineError::SpawnFailed(io) => Self::Timer(io.to_string()),
        }
    }
}

/// A specialized `Result` type for safety monitor operations.
pub type SafetyResult<T> = std::result::Result<T, SafetyError>;
