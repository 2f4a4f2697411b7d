//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the TUI input handler and the application state.

use serde::{Deserialize, Serialize};

/// Messages that represent user actions in the TUI.
///
/// These messages are produced by the input handler and consumed by
/// the application to update state.
///
/// # Examples
///
/// ```
/// use taskflow_protocol::Message;
///
/// let msg = Message::Quit;
/// assert!(msg.is_terminating());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Move selection up in the task list.
    NavigateUp,
    /// Move selection down in the task list.
    NavigateDown,
    /// Escape: leave the current view, dialog or overlay (contextual).
    Escape,
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,
    /// Return to the task list.
    GoHome,

    // --- List messages ---
    /// Open the create form.
    NewTask,
    /// Open the edit form for the selected task.
    EditSelected,
    /// Ask for confirmation before deleting the selected task.
    RequestDelete,
    /// Confirm the pending delete.
    ConfirmDelete,
    /// Dismiss the pending delete.
    CancelDelete,
    /// Start typing into the search box.
    FocusSearch,
    /// Stop typing into the search box.
    BlurSearch,
    /// Input a character into the search box.
    SearchInput {
        /// The character that was input.
        ch: char,
    },
    /// Delete the last character of the search box.
    SearchBackspace,
    /// Cycle the status filter (all, then each status).
    CycleStatusFilter,
    /// Cycle the priority filter (all, then each priority).
    CyclePriorityFilter,
    /// Reset search text and both filters.
    ClearFilters,

    // --- Form messages ---
    /// Move focus to the next form field.
    FormNextField,
    /// Move focus to the previous form field.
    FormPrevField,
    /// Input a character into the focused text field.
    FormInput {
        /// The character that was input.
        ch: char,
    },
    /// Delete the character before the cursor in the focused text field.
    FormBackspace,
    /// Move the cursor or cycle the focused selector.
    FormCycle {
        /// Direction (positive = forward/right, negative = back/left).
        delta: i32,
    },
    /// Submit the form.
    FormSubmit,
}

impl Message {
    /// Returns `true` if this message should terminate the application.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskflow_protocol::Message;
    ///
    /// assert!(Message::Quit.is_terminating());
    /// assert!(!Message::Escape.is_terminating());
    /// ```
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Quit)
    }
}
