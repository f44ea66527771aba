//! # motorguard-safety
//!
//! Dead-man's-switch safety monitor for controllable actuators.
//!
//! A [`SafetyMonitor`] guarantees that an actuator is forcibly stopped if
//! its control loop stops feeding the monitor within the configured window,
//! protecting against runaway or stalled control code moving hardware
//! unattended. The monitor owns a deadline timer with its own thread; the
//! actuator supplies its stop behavior and diagnostic identity through the
//! [`MotorSafety`] capability trait.
//!
//! ## Guarantees
//!
//! - **Disabled means inert**: with safety disabled, an expired deadline
//!   never stops the motor.
//! - **Enable never trips stale state**: enabling re-arms a fresh full
//!   window, even if the monitor sat unfed for longer than the window.
//! - **One stop per un-fed interval**: the deadline fires at most once per
//!   arm cycle, regardless of how feeds race the timer thread.
//! - **No lock held across actuator calls**, so a stop implementation may
//!   re-enter the monitor without deadlocking.
//!
//! ## Example
//!
//! ```rust
//! use motorguard_safety::prelude::*;
//! use std::fmt;
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicBool, Ordering};
//!
//! struct DriveMotor {
//!     stopped: AtomicBool,
//! }
//!
//! impl MotorSafety for DriveMotor {
//!     fn stop_motor(&self) -> SafetyResult<()> {
//!         self.stopped.store(true, Ordering::SeqCst);
//!         Ok(())
//!     }
//!
//!     fn describe(&self, sink: &mut dyn fmt::Write) -> fmt::Result {
//!         write!(sink, "Drive motor [PWM 0]")
//!     }
//! }
//!
//! let motor = Arc::new(DriveMotor { stopped: AtomicBool::new(false) });
//! let monitor = SafetyMonitor::new(Arc::clone(&motor) as Arc<dyn MotorSafety>)
//!     .expect("monitor construction");
//!
//! monitor.set_safety_enabled(true);
//! monitor.feed(); // call every control cycle
//! assert!(monitor.is_alive());
//! ```

#![deny(
    unsafe_op_in_unsafe_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::panic,
    missing_docs,
    missing_debug_implementations
)]
#![warn(clippy::pedantic)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod capability;
pub mod config;
pub mod error;
pub mod monitor;

pub mod prelude;

pub use capability::{MotorSafety, SessionGate, description};
pub use config::{DEFAULT_EXPIRATION, SafetyConfig, SafetyConfigBuilder};
pub use error::{SafetyError, SafetyResult};
pub use monitor::SafetyMonitor;

// Re-export the deadline primitive for callers that need raw timer access.
pub use motorguard_deadline::{Deadline, DeadlineError};
