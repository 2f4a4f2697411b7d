//! Centralized layout measurements for the TUI.
//!
//! This module defines shared constants for layout dimensions used across
//! multiple rendering components.

/// Height of the header bar in rows.
///
/// The header displays the application title, the current screen and the
/// help cue.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the search and filter bar above the task list.
pub const FILTER_BAR_HEIGHT: u16 = 3;

/// Height of the key hint line at the bottom of the screen.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Rows taken by each entry of the task list (title, description, metadata).
pub const TASK_ITEM_HEIGHT: u16 = 3;

/// Minimum terminal height for useful rendering.
///
/// The form needs the most vertical space: borders, five fields with
/// labels, the error line and the submit hint.
pub const MIN_HEIGHT: u16 = 16;

/// Minimum terminal width for useful rendering.
///
/// Wide enough for the filter bar to show the search box and both filters.
pub const MIN_WIDTH: u16 = 50;

/// Width of the task form panel.
pub const FORM_WIDTH: u16 = 60;
