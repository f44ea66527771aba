//! Configuration for the safety monitor.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{SafetyError, SafetyResult};

/// Inactivity window tolerated before the actuator is stopped, applied when
/// no expiration is configured explicitly.
pub const DEFAULT_EXPIRATION: Duration = Duration::from_millis(100);

/// Safety monitor configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyConfig {
    /// Inactivity window tolerated before the actuator is stopped.
    pub expiration: Duration,
    /// Whether safety enforcement starts enabled.
    pub enabled: bool,
}

impl Default for SafetyConfig {
    fn default() -> Self {
        Self {
            expiration: DEFAULT_EXPIRATION,
            enabled: false,
        }
    }
}

impl SafetyConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the expiration window is zero.
    pub fn validate(&self) -> SafetyResult<()> {
        if self.expiration.is_zero() {
            return Err(SafetyError::invalid_expiration(
                "expiration must be non-zero",
            ));
        }
        Ok(())
    }

    /// Create a configuration builder.
    #[must_use]
    pub fn builder() -> SafetyConfigBuilder {
        SafetyConfigBuilder::default()
    }
}

/// Builder for `SafetyConfig`.
#[derive(Debug, Default)]
pub struct SafetyConfigBuilder {
    config: SafetyConfig,
}

impl SafetyConfigBuilder {
    /// Set the inactivity window.
    #[must_use]
    pub fn expiration(mut self, expiration: Duration) -> Self {
        self.config.expiration = expiration;
        self
    }

    /// Set whether safety enforcement starts enabled.
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.config.enabled = enabled;
        self
    }

    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> SafetyResult<SafetyConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
