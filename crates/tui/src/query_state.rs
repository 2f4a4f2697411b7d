//! Search and filter state for the task list.
//!
//! The search box is debounced: each edit restarts a quiescence window and
//! the typed text only reaches the applied [`FilterCriteria`] once the window
//! elapses without further edits. Status and priority filters apply at once.

use std::time::{Duration, Instant};

use taskflow_protocol::{FilterCriteria, Priority, Status, Task, filter_tasks};
use tracing::debug;

use crate::timer::Timer;

/// Debounced query state.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, Instant};
/// use taskflow_tui::QueryEngine;
///
/// let start = Instant::now();
/// let mut query = QueryEngine::new(Duration::from_millis(200));
///
/// query.push_char('f', start);
/// assert_eq!(query.input(), "f");
/// assert_eq!(query.criteria().search, "");
///
/// query.tick(start + Duration::from_millis(200));
/// assert_eq!(query.criteria().search, "f");
/// ```
#[derive(Debug, Clone)]
pub struct QueryEngine {
    input: String,
    applied: FilterCriteria,
    debounce: Duration,
    timer: Timer,
}

impl QueryEngine {
    /// Creates an engine with empty criteria and the given debounce window.
    #[must_use]
    pub fn new(debounce: Duration) -> Self {
        Self {
            input: String::new(),
            applied: FilterCriteria::default(),
            debounce,
            timer: Timer::new(),
        }
    }

    /// Returns the raw search text as typed.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Returns the criteria currently applied to the list.
    #[must_use]
    pub fn criteria(&self) -> &FilterCriteria {
        &self.applied
    }

    /// Returns `true` while typed text is waiting to be applied.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.timer.is_pending()
    }

    /// Appends a character to the search text.
    pub fn push_char(&mut self, ch: char, now: Instant) {
        self.input.push(ch);
        self.input_changed(now);
    }

    /// Removes the last character of the search text.
    pub fn backspace(&mut self, now: Instant) {
        if self.input.pop().is_some() {
            self.input_changed(now);
        }
    }

    /// Replaces the search text.
    pub fn set_input(&mut self, text: impl Into<String>, now: Instant) {
        self.input = text.into();
        self.input_changed(now);
    }

    /// Sets the status filter.
    pub fn set_status(&mut self, status: Option<Status>) {
        self.applied.status = status;
    }

    /// Sets the priority filter.
    pub fn set_priority(&mut self, priority: Option<Priority>) {
        self.applied.priority = priority;
    }

    /// Advances the status filter: all, then each status in order, then all.
    pub fn cycle_status(&mut self) {
        let next = match self.applied.status {
            None => Some(Status::Todo),
            Some(Status::Done) => None,
            Some(status) => Some(status.next()),
        };
        self.set_status(next);
    }

    /// Advances the priority filter: all, then each priority in order, then
    /// all.
    pub fn cycle_priority(&mut self) {
        let next = match self.applied.priority {
            None => Some(Priority::Low),
            Some(Priority::Critical) => None,
            Some(priority) => Some(priority.next()),
        };
        self.set_priority(next);
    }

    /// Resets the search text and both filters immediately.
    pub fn clear(&mut self) {
        self.timer.cancel();
        self.input.clear();
        self.applied = FilterCriteria::default();
    }

    /// Applies the typed text if the debounce window has elapsed.
    ///
    /// Returns `true` if the applied criteria changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.timer.fire(now) {
            return false;
        }
        self.apply_input()
    }

    /// Returns the tasks matching the applied criteria, in order.
    #[must_use]
    pub fn results<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        filter_tasks(tasks, &self.applied)
    }

    fn input_changed(&mut self, now: Instant) {
        if self.debounce.is_zero() {
            self.timer.cancel();
            self.apply_input();
        } else {
            self.timer.schedule(now, self.debounce);
        }
    }

    fn apply_input(&mut self) -> bool {
        if self.applied.search == self.input {
            return false;
        }
        debug!(search = %self.input, "applying search");
        self.applied.search.clone_from(&self.input);
        true
    }
}
