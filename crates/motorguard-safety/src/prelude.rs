//! Prelude for motorguard-safety.
//!
//! Re-exports the most commonly used types for convenient importing.

pub use crate::capability::{MotorSafety, SessionGate, description};
pub use crate::config::{DEFAULT_EXPIRATION, SafetyConfig, SafetyConfigBuilder};
pub use crate::error::{SafetyError, SafetyResult};
pub use crate::monitor::SafetyMonitor;
