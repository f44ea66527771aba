//! Prelude for motorguard-deadline.
//!
//! Re-exports the most commonly used types for convenient importing.
//!
//! # Example
//!
//! ```rust
//! use motorguard_deadline::prelude::*;
//! use std::time::Duration;
//!
//! let deadline = Deadline::new(Duration::from_millis(100), || {}).expect("valid duration");
//! deadline.reset();
//! ```

pub use crate::deadline::Deadline;
pub use crate::error::{DeadlineError, DeadlineResult};
