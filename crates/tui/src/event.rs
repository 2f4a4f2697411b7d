//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal key
//! events to application messages. Each screen has its own mapping.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use taskflow_protocol::Message;

/// Default poll timeout for events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Which key mapping applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// The task list; `search_focused` routes typing into the search box.
    List {
        /// Whether the search box has focus.
        search_focused: bool,
    },
    /// The create/edit form.
    Form,
    /// The delete confirmation dialog.
    Confirm,
    /// The not-found screen.
    NotFound,
}

/// Converts a terminal event to a message for the given context.
///
/// Only key presses are handled; releases, repeats and other events are
/// ignored.
#[must_use]
pub fn event_to_message(event: &Event, context: InputContext) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => key_to_message(*key, context),
        _ => None,
    }
}

/// Dispatches a key to the mapping for `context`.
#[must_use]
pub fn key_to_message(key: KeyEvent, context: InputContext) -> Option<Message> {
    match context {
        InputContext::List { search_focused } => key_to_list_message(key, search_focused),
        InputContext::Form => key_to_form_message(key),
        InputContext::Confirm => key_to_confirm_message(key),
        InputContext::NotFound => key_to_not_found_message(key),
    }
}

fn is_ctrl(key: &KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(ch)
}

/// Converts a key event on the task list to a message.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` or `q` | Quit |
/// | `Up` / `Down` | Move selection |
/// | `n` | New task |
/// | `e` or `Enter` | Edit selected task |
/// | `d` | Delete selected task (asks first) |
/// | `/` | Focus search |
/// | `s` | Cycle status filter |
/// | `p` | Cycle priority filter |
/// | `c` | Clear search and filters |
/// | `?` | Toggle help |
/// | `Esc` | Escape (close help) |
///
/// While the search box is focused, characters are typed into it and
/// `Enter`/`Esc` leave it.
#[must_use]
pub fn key_to_list_message(key: KeyEvent, search_focused: bool) -> Option<Message> {
    if is_ctrl(&key, 'c') {
        return Some(Message::Quit);
    }

    if search_focused {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc => Some(Message::BlurSearch),
            KeyCode::Backspace => Some(Message::SearchBackspace),
            KeyCode::Up => Some(Message::NavigateUp),
            KeyCode::Down => Some(Message::NavigateDown),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Message::SearchInput { ch })
            }
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Some(Message::Quit),
        KeyCode::Esc => Some(Message::Escape),
        KeyCode::Up => Some(Message::NavigateUp),
        KeyCode::Down => Some(Message::NavigateDown),
        KeyCode::Char('n') => Some(Message::NewTask),
        KeyCode::Char('e') | KeyCode::Enter => Some(Message::EditSelected),
        KeyCode::Char('d') | KeyCode::Delete => Some(Message::RequestDelete),
        KeyCode::Char('/') => Some(Message::FocusSearch),
        KeyCode::Char('s') => Some(Message::CycleStatusFilter),
        KeyCode::Char('p') => Some(Message::CyclePriorityFilter),
        KeyCode::Char('c') => Some(Message::ClearFilters),
        KeyCode::Char('?') => Some(Message::ToggleHelp),
        _ => None,
    }
}

/// Converts a key event on the form to a message.
///
/// # Key Bindings (Form)
///
/// | Key | Action |
/// |-----|--------|
/// | `Tab` / `Shift+Tab` | Next / previous field |
/// | `Left` / `Right` | Move cursor or cycle selector |
/// | `Enter` or `Ctrl+S` | Submit |
/// | `Esc` | Back to the list |
/// | `Backspace` | Delete before cursor |
/// | Any char | Input |
#[must_use]
pub fn key_to_form_message(key: KeyEvent) -> Option<Message> {
    if is_ctrl(&key, 'c') {
        return Some(Message::Quit);
    }
    if is_ctrl(&key, 's') {
        return Some(Message::FormSubmit);
    }

    match key.code {
        KeyCode::Esc => Some(Message::Escape),
        KeyCode::Tab => Some(Message::FormNextField),
        KeyCode::BackTab => Some(Message::FormPrevField),
        KeyCode::Left => Some(Message::FormCycle { delta: -1 }),
        KeyCode::Right => Some(Message::FormCycle { delta: 1 }),
        KeyCode::Enter => Some(Message::FormSubmit),
        KeyCode::Backspace => Some(Message::FormBackspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Message::FormInput { ch })
        }
        _ => None,
    }
}

/// Converts a key event in the delete confirmation dialog to a message.
///
/// `y` or `Enter` confirms; `n` or `Esc` cancels.
#[must_use]
pub fn key_to_confirm_message(key: KeyEvent) -> Option<Message> {
    if is_ctrl(&key, 'c') {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Char('y' | 'Y') | KeyCode::Enter => Some(Message::ConfirmDelete),
        KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(Message::CancelDelete),
        _ => None,
    }
}

/// Converts a key event on the not-found screen. Any key goes home.
#[must_use]
pub fn key_to_not_found_message(key: KeyEvent) -> Option<Message> {
    if is_ctrl(&key, 'c') {
        return Some(Message::Quit);
    }
    Some(Message::GoHome)
}
