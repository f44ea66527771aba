//! Shared actuator and gate doubles for integration tests.
#![allow(dead_code)]

use motorguard_safety::prelude::*;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

/// Actuator double that counts stop invocations.
#[derive(Default)]
pub struct CountingMotor {
    stops: AtomicU32,
}

impl CountingMotor {
    pub fn stop_count(&self) -> u32 {
        self.stops.load(Ordering::SeqCst)
    }
}

impl MotorSafety for CountingMotor {
    fn stop_motor(&self) -> SafetyResult<()> {
        self.stops.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn describe(&self, sink: &mut dyn fmt::Write) -> fmt::Result {
        write!(sink, "Counting motor [slot 1]")
    }
}

/// Actuator double whose stop path always fails.
#[derive(Default)]
pub struct FailingMotor {
    attempts: AtomicU32,
}

impl FailingMotor {
    pub fn attempt_count(&self) -> u32 {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl MotorSafety for FailingMotor {
    fn stop_motor(&self) -> SafetyResult<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(SafetyError::stop_failed("drive bus unreachable"))
    }

    fn describe(&self, sink: &mut dyn fmt::Write) -> fmt::Result {
        write!(sink, "Failing motor [slot 2]")
    }
}

/// Session gate whose verdict can be flipped at runtime.
pub struct ToggleGate {
    permitted: AtomicBool,
}

impl ToggleGate {
    pub fn new(permitted: bool) -> Self {
        Self {
            permitted: AtomicBool::new(permitted),
        }
    }

    pub fn set_permitted(&self, permitted: bool) {
        self.permitted.store(permitted, Ordering::SeqCst);
    }
}

impl SessionGate for ToggleGate {
    fn stop_permitted(&self) -> bool {
        self.permitted.load(Ordering::SeqCst)
    }
}
