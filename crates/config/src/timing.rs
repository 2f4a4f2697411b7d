//! UI timing configuration.
//!
//! This module provides the [`TimingConfig`] type which holds the delays the
//! interface waits on:
//!
//! - the search debounce window, after which typed search text is applied
//!   to the task list (default 200 ms)
//! - the notice delay, how long the confirmation after a successful save is
//!   shown before returning to the list (default 1000 ms)

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default search debounce window in milliseconds.
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 200;

/// Default post-save notice delay in milliseconds.
pub const DEFAULT_NOTICE_DELAY_MS: u64 = 1000;

/// Maximum allowed search debounce window (5 seconds).
pub const MAX_SEARCH_DEBOUNCE_MS: u64 = 5_000;

/// Maximum allowed notice delay (10 seconds).
pub const MAX_NOTICE_DELAY_MS: u64 = 10_000;

/// Configuration for UI delays.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use taskflow_config::TimingConfig;
///
/// let timing = TimingConfig::default();
/// assert_eq!(timing.search_debounce(), Duration::from_millis(200));
/// assert_eq!(timing.notice_delay(), Duration::from_millis(1000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// How long the search text must stay unchanged before it is applied.
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,

    /// How long the save confirmation is shown before returning to the list.
    #[serde(default = "default_notice_delay_ms")]
    pub notice_delay_ms: u64,
}

fn default_search_debounce_ms() -> u64 {
    DEFAULT_SEARCH_DEBOUNCE_MS
}

fn default_notice_delay_ms() -> u64 {
    DEFAULT_NOTICE_DELAY_MS
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            notice_delay_ms: DEFAULT_NOTICE_DELAY_MS,
        }
    }
}

impl TimingConfig {
    /// Creates a timing configuration with the given delays in milliseconds.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskflow_config::TimingConfig;
    ///
    /// let timing = TimingConfig::new(50, 0);
    /// assert_eq!(timing.search_debounce_ms, 50);
    /// assert_eq!(timing.notice_delay_ms, 0);
    /// ```
    #[must_use]
    pub fn new(search_debounce_ms: u64, notice_delay_ms: u64) -> Self {
        Self {
            search_debounce_ms,
            notice_delay_ms,
        }
    }

    /// Returns the search debounce window.
    #[must_use]
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    /// Returns the post-save notice delay.
    #[must_use]
    pub fn notice_delay(&self) -> Duration {
        Duration::from_millis(self.notice_delay_ms)
    }

    /// Validates the timing configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if either delay exceeds its maximum.
    pub fn validate(&self) -> crate::Result<()> {
        if self.search_debounce_ms > MAX_SEARCH_DEBOUNCE_MS {
            return Err(crate::ConfigError::InvalidTiming {
                reason: format!(
                    "search debounce {} ms exceeds maximum of {} ms",
                    self.search_debounce_ms, MAX_SEARCH_DEBOUNCE_MS
                ),
            });
        }

        if self.notice_delay_ms > MAX_NOTICE_DELAY_MS {
            return Err(crate::ConfigError::InvalidTiming {
                reason: format!(
                    "notice delay {} ms exceeds maximum of {} ms",
                    self.notice_delay_ms, MAX_NOTICE_DELAY_MS
                ),
            });
        }

        Ok(())
    }
}
