//! Application state management.
//!
//! This module defines the view state of the TUI: current route, list
//! selection, pending delete confirmation, help overlay and the transient
//! toast.

use std::time::{Duration, Instant};

use taskflow_protocol::TaskId;

use crate::route::Route;
use crate::timer::Timer;

/// A transient message shown at the bottom of the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Text to show.
    pub message: String,
    expiry: Timer,
}

impl Toast {
    /// Creates a toast that expires `duration` after `now`.
    #[must_use]
    pub fn new(message: impl Into<String>, now: Instant, duration: Duration) -> Self {
        let mut expiry = Timer::new();
        expiry.schedule(now, duration);
        Self {
            message: message.into(),
            expiry,
        }
    }

    /// Returns `true` once the toast should disappear.
    pub fn expired(&mut self, now: Instant) -> bool {
        self.expiry.fire(now)
    }
}

/// The application view state.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The screen being displayed.
    pub route: Route,
    /// Index of the selected task within the filtered list, if any.
    pub selected: Option<usize>,
    /// Whether keystrokes go to the search box.
    pub search_focused: bool,
    /// Task awaiting delete confirmation.
    pub pending_delete: Option<TaskId>,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
    /// Transient message, if any.
    pub toast: Option<Toast>,
}

impl AppState {
    /// Toggles the help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Dismisses the help overlay if it is visible.
    ///
    /// Returns `true` if help was visible and has been dismissed.
    #[must_use]
    pub fn dismiss_help(&mut self) -> bool {
        std::mem::take(&mut self.help_visible)
    }

    /// Moves the selection up in a list of `len` items, wrapping around.
    pub fn navigate_up(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = match self.selected {
            Some(idx) if idx > 0 => Some(idx - 1),
            Some(_) => Some(len - 1),
            None => Some(0),
        };
    }

    /// Moves the selection down in a list of `len` items, wrapping around.
    pub fn navigate_down(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = match self.selected {
            Some(idx) if idx + 1 < len => Some(idx + 1),
            Some(_) => Some(0),
            None => Some(0),
        };
    }

    /// Keeps the selection inside a list of `len` items.
    pub fn clamp_selection(&mut self, len: usize) {
        self.selected = match self.selected {
            _ if len == 0 => None,
            Some(idx) => Some(idx.min(len - 1)),
            None => None,
        };
    }

    /// Shows a toast, replacing any current one.
    pub fn show_toast(&mut self, message: impl Into<String>, now: Instant, duration: Duration) {
        self.toast = Some(Toast::new(message, now, duration));
    }

    /// Removes the toast once expired. Returns `true` if it was removed.
    pub fn expire_toast(&mut self, now: Instant) -> bool {
        if self.toast.as_mut().is_some_and(|t| t.expired(now)) {
            self.toast = None;
            return true;
        }
        false
    }
}
