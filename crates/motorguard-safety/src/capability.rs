//! Actuator and session capabilities consumed by the safety monitor.
//!
//! The monitor does not know how to stop any particular piece of hardware;
//! the actuator supplies that through [`MotorSafety`]. An optional
//! [`SessionGate`] lets a global enable/session authority veto the stop.

use std::fmt;

use crate::error::SafetyResult;

/// Capability an actuator supplies so the safety monitor can stop it.
///
/// Implementations are invoked from the deadline's timer thread, so both
/// methods must be callable off the control thread and `stop_motor` must be
/// idempotent. Neither method is called with any monitor lock held, so an
/// implementation may re-enter the monitor (e.g. call
/// [`SafetyMonitor::feed`](crate::SafetyMonitor::feed)).
pub trait MotorSafety: Send + Sync {
    /// Cut or zero the actuator's output.
    ///
    /// # Errors
    ///
    /// Returns an error if the stop path itself fails; the timeout handler
    /// reports the failure and keeps the timer thread alive.
    fn stop_motor(&self) -> SafetyResult<()>;

    /// Append a human-readable identity of the actuator to `sink`, used
    /// when reporting a timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the sink fails.
    fn describe(&self, sink: &mut dyn fmt::Write) -> fmt::Result;
}

/// Session/global-enable authority consulted before stopping.
///
/// When a gate is injected at construction, the timeout handler asks it
/// whether a stop is currently meaningful (e.g. the session is live and the
/// actuator is under program control). A refusal suppresses the stop for
/// that expiry; the deadline re-arms on the next feed as usual.
pub trait SessionGate: Send + Sync {
    /// Whether stopping the actuator is currently permitted.
    fn stop_permitted(&self) -> bool;
}

/// Render an actuator's identity into an owned string.
///
/// Falls back to a placeholder if the actuator's `describe` fails; the
/// diagnostic path must never error out over a formatting problem.
#[must_use]
pub fn description(motor: &dyn MotorSafety) -> String {
    let mut desc = String::new();
    if motor.describe(&mut desc).is_err() {
        desc.clear();
        desc.push_str("<description unavailable>");
    }
    desc
}
