//! Deadline timer with a dedicated expiry thread.
//!
//! This module provides [`Deadline`], the scheduled-callback primitive used
//! by the safety monitor: arm a window, re-arm it on every feed, and invoke
//! the bound callback once if the window elapses without a re-arm.

use parking_lot::{Condvar, Mutex};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use crate::error::{DeadlineError, DeadlineResult};

/// Callback invoked by the timer thread when an armed window elapses.
pub type ExpiryCallback = Box<dyn Fn() + Send + 'static>;

/// Mutable timer state, shared between the owner and the timer thread.
struct DeadlineState {
    /// Window applied on the next re-arm.
    duration: Duration,
    /// Absolute expiry instant of the current arm cycle, if armed.
    armed_until: Option<Instant>,
    /// True once the deadline fired, until the next `reset()`.
    expired: bool,
    /// Signals the timer thread to exit.
    shutdown: bool,
}

struct Shared {
    state: Mutex<DeadlineState>,
    cond: Condvar,
}

/// A one-shot-per-arm deadline timer bound to a callback.
///
/// The callback runs on a dedicated timer thread owned by this value. A
/// freshly constructed `Deadline` is *disarmed*: nothing fires until the
/// first [`reset()`](Self::reset).
///
/// # Thread Safety
///
/// All methods take `&self` and are safe to call from any thread, including
/// from within the callback itself. The internal lock is never held while
/// the callback runs.
pub struct Deadline {
    shared: Arc<Shared>,
    timer: Option<JoinHandle<()>>,
}

impl Deadline {
    /// Create a disarmed deadline with the given window and callback.
    ///
    /// The timer thread is spawned immediately but parks until the first
    /// [`reset()`](Self::reset).
    ///
    /// # Errors
    ///
    /// Returns an error if `duration` is zero or the timer thread cannot be
    /// spawned.
    pub fn new<F>(duration: Duration, callback: F) -> DeadlineResult<Self>
    where
        F: Fn() + Send + 'static,
    {
        if duration.is_zero() {
            return Err(DeadlineError::invalid_duration(
                "duration must be non-zero",
            ));
        }

        let shared = Arc::new(Shared {
            state: Mutex::new(DeadlineState {
                duration,
                armed_until: None,
                expired: false,
                shutdown: false,
            }),
            cond: Condvar::new(),
        });

        let timer_shared = Arc::clone(&shared);
        let timer = std::thread::Builder::new()
            .name("motorguard-deadline".into())
            .spawn(move || Self::run(&timer_shared, &callback))?;

        Ok(Self {
            shared,
            timer: Some(timer),
        })
    }

    /// Timer thread body: wait for the armed window to elapse, fire the
    /// callback with the lock released, repeat.
    fn run(shared: &Shared, callback: &(dyn Fn() + Send)) {
        loop {
            {
                let mut state = shared.state.lock();
                loop {
                    if state.shutdown {
                        return;
                    }
                    match state.armed_until {
                        None => shared.cond.wait(&mut state),
                        Some(at) => {
                            if Instant::now() >= at {
                                break;
                            }
                            let _ = shared.cond.wait_until(&mut state, at);
                        }
                    }
                }
                // Expiry decision is made here, under the lock. A reset()
                // arriving after this point starts a fresh window but cannot
                // suppress the invocation below.
                state.armed_until = None;
                state.expired = true;
            }

            tracing::debug!("deadline expired without a feed");
            callback();
        }
    }

    /// Arm (or re-arm) a fresh full window starting now.
    ///
    /// This is the feed: any countdown in progress is discarded and the
    /// expired flag is cleared.
    pub fn reset(&self) {
        let mut state = self.shared.state.lock();
        state.armed_until = Some(Instant::now() + state.duration);
        state.expired = false;
        self.shared.cond.notify_one();
    }

    /// Disarm without destroying the timer thread.
    ///
    /// No callback fires until the next [`reset()`](Self::reset). The
    /// expired flag is left as-is.
    pub fn cancel(&self) {
        let mut state = self.shared.state.lock();
        state.armed_until = None;
        self.shared.cond.notify_one();
    }

    /// Reconfigure the window applied on the *next* re-arm.
    ///
    /// A countdown already in progress keeps its original expiry instant;
    /// the new duration takes effect on the next [`reset()`](Self::reset).
    ///
    /// # Errors
    ///
    /// Returns an error if `duration` is zero; the configured window is left
    /// unchanged.
    pub fn set_duration(&self, duration: Duration) -> DeadlineResult<()> {
        if duration.is_zero() {
            return Err(DeadlineError::invalid_duration(
                "duration must be non-zero",
            ));
        }
        let mut state = self.shared.state.lock();
        state.duration = duration;
        Ok(())
    }

    /// Get the configured window.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.shared.state.lock().duration
    }

    /// Check whether the deadline is currently armed.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.shared.state.lock().armed_until.is_some()
    }

    /// Check whether the deadline fired since the last [`reset()`](Self::reset).
    #[must_use]
    pub fn has_expired(&self) -> bool {
        self.shared.state.lock().expired
    }
}

impl Drop for Deadline {
    fn drop(&mut self) {
        {
            let mut state = self.shared.state.lock();
            state.shutdown = true;
            self.shared.cond.notify_one();
        }
        if let Some(timer) = self.timer.take() {
            if timer.join().is_err() {
                tracing::error!("deadline timer thread panicked");
            }
        }
    }
}

impl std::fmt::Debug for Deadline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.shared.state.lock();
        f.debug_struct("Deadline")
            .field("duration", &state.duration)
            .field("armed", &state.armed_until.is_some())
            .field("expired", &state.expired)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn counting_deadline(duration: Duration) -> (Deadline, Arc<AtomicU32>) {
        let fired = Arc::new(AtomicU32::new(0));
        let observer = Arc::clone(&fired);
        let deadline = Deadline::new(duration, move || {
            observer.fetch_add(1, Ordering::SeqCst);
        })
        .expect("valid duration");
        (deadline, fired)
    }

    #[test]
    fn test_zero_duration_rejected() {
        let result = Deadline::new(Duration::ZERO, || {});
        assert!(matches!(result, Err(DeadlineError::InvalidDuration(_))));
    }

    #[test]
    fn test_disarmed_until_first_reset() {
        let (deadline, fired) = counting_deadline(Duration::from_millis(10));
        assert!(!deadline.is_armed());

        std::thread::sleep(Duration::from_millis(80));
        assert_eq!(fired.load(Ordering::SeqCst), 0);
        assert!(!deadline.has_expired());
    }

    #[test]
    fn test_fires_once_per_arm_cycle() {
        let (deadline, fired) = counting_deadline(Duration::from_millis(20));

        deadline.reset();
        std::thread::sleep(Duration::from_millis(150));
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!(deadline.has_expired());
        assert!(!deadline.is_armed());

        // Re-arming starts a fresh cycle.
        deadline.reset();
        assert!(!deadline.has_expired());
        std::thread::sleep(Duration::from_millis(150));
        assert_eq!(fired.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_reset_prevents_expiry() {
        let (deadline, fired) = counting_deadline(Duration::from_millis(60));

        deadline.reset();
        for _ in 0..10 {
            std::thread::sleep(Duration::from_millis(15));
            deadline.reset();
        }
        assert_eq!(fired.load(Ordering::SeqCst), 0);
        assert!(!deadline.has_expired());
    }

    #[test]
    fn test_cancel_prevents_expiry() {
        let (deadline, fired) = counting_deadline(Duration::from_millis(30));

        deadline.reset();
        deadline.cancel();
        assert!(!deadline.is_armed());

        std::thread::sleep(Duration::from_millis(120));
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_set_duration_applies_on_next_reset() {
        let (deadline, fired) = counting_deadline(Duration::from_millis(50));

        // Countdown in progress keeps its original expiry.
        deadline.reset();
        deadline
            .set_duration(Duration::from_secs(10))
            .expect("valid duration");
        assert_eq!(deadline.duration(), Duration::from_secs(10));
        std::thread::sleep(Duration::from_millis(200));
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        // The next arm cycle uses the new, much longer window.
        deadline.reset();
        std::thread::sleep(Duration::from_millis(100));
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_set_duration_zero_rejected() {
        let (deadline, _fired) = counting_deadline(Duration::from_millis(50));
        let result = deadline.set_duration(Duration::ZERO);
        assert!(matches!(result, Err(DeadlineError::InvalidDuration(_))));
        assert_eq!(deadline.duration(), Duration::from_millis(50));
    }

    #[test]
    fn test_drop_joins_timer_thread() {
        let (deadline, _fired) = counting_deadline(Duration::from_millis(10));
        deadline.reset();
        drop(deadline);
    }

    #[test]
    fn test_debug_does_not_deadlock() {
        let (deadline, _fired) = counting_deadline(Duration::from_millis(50));
        let rendered = format!("{deadline:?}");
        assert!(rendered.contains("Deadline"));
    }
}
