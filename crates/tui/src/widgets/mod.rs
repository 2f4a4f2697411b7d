//! Widget components for the taskflow TUI.
//!
//! Each widget is a function that renders borrowed state into a buffer, so
//! views can be tested against a plain [`Buffer`](ratatui::buffer::Buffer).
//!
//! # Modules
//!
//! - [`task_list`]: The filtered task list with selection
//! - [`filter_bar`]: Search box plus status and priority filters
//! - [`task_form`]: The create/edit form
//! - [`confirm`]: Delete confirmation dialog
//! - [`toast`]: Transient notices
//! - [`help`]: Keybinding overlay
//! - [`not_found`]: Unknown route screen
//! - [`status_bar`]: Key hints
//!
//! # Color Coding
//!
//! | Status | Color |
//! |--------|-------|
//! | `Todo` | Yellow |
//! | `InProgress` | Blue |
//! | `Done` | Green |
//!
//! # Example
//!
//! ```
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//! use taskflow_tui::widgets;
//!
//! let area = Rect::new(0, 0, 80, 24);
//! let mut buf = Buffer::empty(area);
//!
//! widgets::render_task_list(&[], None, "No tasks yet", area, &mut buf);
//! ```

use ratatui::layout::Rect;

pub mod confirm;
pub mod filter_bar;
pub mod help;
pub mod not_found;
pub mod status_bar;
pub mod task_form;
pub mod task_list;
pub mod toast;

// Re-export primary rendering functions for convenience
pub use confirm::render_confirm_dialog;
pub use filter_bar::render_filter_bar;
pub use help::render_help_overlay;
pub use not_found::render_not_found;
pub use status_bar::render_status_bar;
pub use task_form::render_task_form;
pub use task_list::{priority_color, render_task_list, status_color};
pub use toast::render_toast;

/// Creates a centered rectangle within a given area.
///
/// If the requested dimensions exceed the available area, the rectangle
/// will be clamped to fit.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;

    Rect::new(x, y, popup_width, popup_height)
}
