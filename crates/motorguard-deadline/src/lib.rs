//! # motorguard-deadline
//!
//! Scheduled-deadline timer primitive backing the `MotorGuard` safety monitor.
//!
//! A [`Deadline`] owns a dedicated timer thread and a callback. Once armed via
//! [`Deadline::reset`], the callback is invoked exactly once if no further
//! `reset()` lands before the configured duration elapses. After firing, the
//! deadline stays disarmed until the next `reset()`.
//!
//! ## Guarantees
//!
//! - **At most one callback invocation** per arm cycle: a fired deadline is
//!   disarmed until re-armed.
//! - **No lock held across the callback**, so the callback may re-enter the
//!   `Deadline` (e.g. call `reset()`) without deadlocking.
//! - **Feed/expiry races are atomic**: a `reset()` that lands before the
//!   expiry decision cancels it; one that lands after starts a fresh window
//!   but does not affect the in-flight invocation.
//! - **Clean shutdown**: dropping the `Deadline` wakes and joins the timer
//!   thread.
//!
//! ## Example
//!
//! ```rust
//! use motorguard_deadline::Deadline;
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicU32, Ordering};
//! use std::time::Duration;
//!
//! let fired = Arc::new(AtomicU32::new(0));
//! let observer = Arc::clone(&fired);
//! let deadline = Deadline::new(Duration::from_millis(20), move || {
//!     observer.fetch_add(1, Ordering::SeqCst);
//! })
//! .expect("valid duration");
//!
//! deadline.reset(); // arm
//! std::thread::sleep(Duration::from_millis(100));
//! assert_eq!(fired.load(Ordering::SeqCst), 1);
//! assert!(deadline.has_expired());
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

pub mod deadline;
pub mod error;

pub mod prelude;

pub use deadline::Deadline;
pub use error::{DeadlineError, DeadlineResult};
