//! Request pacing against an injectable clock.
//!
//! The upstream API rate-limits aggressively, so consecutive requests are
//! spaced by [`RequestPacer`]. All waiting goes through the [`Clock`] trait,
//! which lets tests run the full retry/pacing logic on a `VirtualClock`
//! without real delays.

use std::time::{Duration, Instant};

use tracing::debug;

/// Source of time and sleeping.
#[allow(async_fn_in_trait)]
pub trait Clock {
    fn now(&self) -> Instant;
    async fn sleep(&self, duration: Duration);
}

/// Wall-clock time backed by `tokio::time`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioClock;

impl Clock for TokioClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub use virtual_clock::VirtualClock;

#[cfg(any(test, feature = "test-utils"))]
mod virtual_clock {
    use std::sync::Mutex;

    use super::*;

    /// Clock whose time only moves when someone sleeps on it.
    ///
    /// Every requested sleep is recorded so callers can assert on the exact
    /// delays a run would have taken.
    #[derive(Debug)]
    pub struct VirtualClock {
        origin: Instant,
        state: Mutex<VirtualState>,
    }

    #[derive(Debug, Default)]
    struct VirtualState {
        elapsed: Duration,
        sleeps: Vec<Duration>,
    }

    impl VirtualClock {
        pub fn new() -> Self {
            Self {
                origin: Instant::now(),
                state: Mutex::new(VirtualState::default()),
            }
        }

        /// Move time forward without recording a sleep (simulates work).
        pub fn advance(&self, duration: Duration) {
            self.lock().elapsed += duration;
        }

        /// All sleeps requested so far, in order.
        pub fn sleeps(&self) -> Vec<Duration> {
            self.lock().sleeps.clone()
        }

        /// Total virtual time elapsed.
        pub fn elapsed(&self) -> Duration {
            self.lock().elapsed
        }

        fn lock(&self) -> std::sync::MutexGuard<'_, VirtualState> {
            // A poisoned lock only means a test panicked mid-update; the data is still usable.
            self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
        }
    }

    impl Default for VirtualClock {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Clock for VirtualClock {
        fn now(&self) -> Instant {
            self.origin + self.lock().elapsed
        }

        async fn sleep(&self, duration: Duration) {
            let mut state = self.lock();
            state.elapsed += duration;
            state.sleeps.push(duration);
        }
    }
}

/// Puts a fixed pause between consecutive units.
///
/// The pause is measured from the end of the previous unit, so time spent
/// inside a unit (including rate-limit waits) never counts toward it.
#[derive(Debug, Clone)]
pub struct RequestPacer {
    interval: Duration,
    last_end: Option<Instant>,
}

impl RequestPacer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_end: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Wait until the next unit may start. The first unit never waits.
    pub async fn wait_turn<C: Clock>(&mut self, clock: &C) {
        if let Some(last) = self.last_end {
            let idle = clock.now().saturating_duration_since(last);
            if let Some(remaining) = self.interval.checked_sub(idle) {
                if !remaining.is_zero() {
                    debug!(wait_ms = remaining.as_millis() as u64, "Pacing next request");
                    clock.sleep(remaining).await;
                }
            }
        }
    }

    /// Mark the current unit as done; the next pause counts from now.
    pub fn unit_finished<C: Clock>(&mut self, clock: &C) {
        self.last_end = Some(clock.now());
    }
}
