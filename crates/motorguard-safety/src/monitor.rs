//! The safety monitor: a dead-man's switch for one actuator.
//!
//! `SafetyMonitor` composes a [`Deadline`] with an actuator's
//! [`MotorSafety`] capability. The control loop feeds the monitor every
//! cycle; if feeding stops for longer than the configured expiration while
//! safety is enabled, the deadline's timer thread stops the actuator.

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

use motorguard_deadline::Deadline;

use crate::capability::{MotorSafety, SessionGate, description};
use crate::config::SafetyConfig;
use crate::error::{SafetyError, SafetyResult};

/// State shared with the deadline's timer thread.
///
/// Lives behind an `Arc`, so the timer callback keeps a stable heap
/// identity no matter how the owning `SafetyMonitor` value is moved.
struct MonitorShared {
    /// Gates whether an expired deadline triggers a stop.
    enabled: Mutex<bool>,
    motor: Arc<dyn MotorSafety>,
    gate: Option<Arc<dyn SessionGate>>,
}

impl MonitorShared {
    /// Timeout handler, invoked on the deadline's timer thread.
    ///
    /// The `enabled` lock is released before any call back out into the
    /// actuator or gate, so a stop implementation may re-enter the monitor
    /// (e.g. call `feed()`) without deadlocking.
    fn on_timeout(&self) {
        let enabled = *self.enabled.lock();
        if !enabled {
            tracing::debug!("safety timeout fired while disabled; ignoring");
            return;
        }

        if let Some(gate) = &self.gate {
            if !gate.stop_permitted() {
                tracing::debug!(
                    motor = %description(self.motor.as_ref()),
                    "safety timeout fired but the session gate withheld the stop"
                );
                return;
            }
        }

        match self.motor.stop_motor() {
            Ok(()) => tracing::warn!(
                motor = %description(self.motor.as_ref()),
                "safety timeout expired, motor stopped: output not updated often enough"
            ),
            Err(err) => tracing::error!(
                motor = %description(self.motor.as_ref()),
                error = %err,
                "safety timeout expired but stopping the motor failed"
            ),
        }
    }
}

/// Dead-man's-switch monitor for a single actuator.
///
/// One monitor per actuator instance, composed at construction and not
/// shared across actuators. Two threads touch it: the control loop (feeds
/// and configures) and the deadline's timer thread (runs the timeout
/// handler). All methods take `&self`.
///
/// # State Machine
///
/// ```text
/// Disarmed ──set_safety_enabled(true)──► Armed-Alive ◄─┐
///     ▲                                      │         │ feed()
///     │                                feed()│ expiry  │ or re-enable
///     │                                      ▼         │
///     └──set_safety_enabled(false)──── Armed-Expired ──┘
/// ```
///
/// Enabling re-arms a fresh full window, so a stale, already-elapsed
/// countdown never trips the instant safety is switched on.
pub struct SafetyMonitor {
    shared: Arc<MonitorShared>,
    deadline: Deadline,
}

impl SafetyMonitor {
    /// Create a monitor with the default configuration (100 ms window,
    /// safety disabled).
    ///
    /// # Errors
    ///
    /// Returns an error if the deadline's timer thread cannot be spawned.
    pub fn new(motor: Arc<dyn MotorSafety>) -> SafetyResult<Self> {
        Self::build(motor, SafetyConfig::default(), None)
    }

    /// Create a monitor with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the timer
    /// thread cannot be spawned.
    pub fn with_config(motor: Arc<dyn MotorSafety>, config: SafetyConfig) -> SafetyResult<Self> {
        Self::build(motor, config, None)
    }

    /// Create a monitor whose timeout handler consults a session gate
    /// before stopping.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the timer
    /// thread cannot be spawned.
    pub fn with_session_gate(
        motor: Arc<dyn MotorSafety>,
        config: SafetyConfig,
        gate: Arc<dyn SessionGate>,
    ) -> SafetyResult<Self> {
        Self::build(motor, config, Some(gate))
    }

    fn build(
        motor: Arc<dyn MotorSafety>,
        config: SafetyConfig,
        gate: Option<Arc<dyn SessionGate>>,
    ) -> SafetyResult<Self> {
        config.validate()?;

        let shared = Arc::new(MonitorShared {
            enabled: Mutex::new(false),
            motor,
            gate,
        });
        let handler = Arc::clone(&shared);
        let deadline = Deadline::new(config.expiration, move || handler.on_timeout())?;

        let monitor = Self { shared, deadline };
        if config.enabled {
            monitor.set_safety_enabled(true);
        }
        Ok(monitor)
    }

    /// Feed the monitor, resetting the countdown to a full window.
    ///
    /// Called by the control loop every cycle the actuator's output is
    /// updated. Works regardless of whether safety is enabled.
    pub fn feed(&self) {
        self.deadline.reset();
    }

    /// Set the inactivity window tolerated before the actuator is stopped.
    ///
    /// The new window applies from the next feed/re-enable; a countdown
    /// already in progress keeps its original expiry instant.
    ///
    /// # Errors
    ///
    /// Returns an error if `expiration` is zero; state is unchanged.
    pub fn set_expiration(&self, expiration: Duration) -> SafetyResult<()> {
        self.deadline.set_duration(expiration)?;
        Ok(())
    }

    /// Set the inactivity window in seconds.
    ///
    /// # Errors
    ///
    /// Returns an error if `seconds` is non-positive, NaN, infinite, or too
    /// large to represent as a [`Duration`]; state is unchanged.
    pub fn set_expiration_secs(&self, seconds: f64) -> SafetyResult<()> {
        if !seconds.is_finite() || seconds <= 0.0 {
            return Err(SafetyError::invalid_expiration(
                "expiration seconds must be positive and finite",
            ));
        }
        let expiration = Duration::try_from_secs_f64(seconds).map_err(|_| {
            SafetyError::invalid_expiration("expiration seconds exceed the representable range")
        })?;
        self.set_expiration(expiration)
    }

    /// Get the configured inactivity window.
    #[must_use]
    pub fn expiration(&self) -> Duration {
        self.deadline.duration()
    }

    /// Get the configured inactivity window in seconds.
    #[must_use]
    pub fn expiration_secs(&self) -> f64 {
        self.deadline.duration().as_secs_f64()
    }

    /// Check whether the actuator is still considered operating normally.
    ///
    /// Always `true` while safety is disabled; otherwise `true` iff the
    /// deadline has not fired since the last feed/enable.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        let enabled = *self.shared.enabled.lock();
        !enabled || !self.deadline.has_expired()
    }

    /// Enable or disable safety enforcement.
    ///
    /// Enabling re-arms a fresh full window, so a stale countdown that
    /// elapsed while disabled does not trip immediately. Disabling only
    /// flips the gate; the timer thread keeps running and the handler
    /// suppresses the stop.
    pub fn set_safety_enabled(&self, enabled: bool) {
        // Re-arm before publishing the flag: an expiry decided in between
        // still sees the gate closed and suppresses the stop.
        if enabled {
            self.deadline.reset();
        }
        let mut guard = self.shared.enabled.lock();
        *guard = enabled;
    }

    /// Check whether safety enforcement is enabled.
    #[must_use]
    pub fn is_safety_enabled(&self) -> bool {
        *self.shared.enabled.lock()
    }
}

impl std::fmt::Debug for SafetyMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SafetyMonitor")
            .field("motor", &description(self.shared.motor.as_ref()))
            .field("enabled", &*self.shared.enabled.lock())
            .field("expiration", &self.deadline.duration())
            .finish()
    }
}
