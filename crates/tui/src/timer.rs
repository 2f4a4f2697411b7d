//! One-shot cancellable timers driven by the app loop.
//!
//! A [`Timer`] does not run anything by itself. The owner schedules it with a
//! deadline and polls [`Timer::fire`] on every tick; dropping or cancelling
//! the timer discards the pending deadline.

use std::time::{Duration, Instant};

/// A one-shot deadline.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, Instant};
/// use taskflow_tui::timer::Timer;
///
/// let start = Instant::now();
/// let mut timer = Timer::new();
/// timer.schedule(start, Duration::from_millis(200));
///
/// assert!(!timer.fire(start + Duration::from_millis(100)));
/// assert!(timer.fire(start + Duration::from_millis(200)));
/// // Fires only once
/// assert!(!timer.fire(start + Duration::from_millis(300)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timer {
    deadline: Option<Instant>,
}

impl Timer {
    /// Creates an idle timer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules the timer to fire `delay` after `now`, replacing any pending
    /// deadline.
    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    /// Discards the pending deadline, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns `true` if a deadline is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns the pending deadline.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns `true` and clears the timer if the deadline has passed.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
