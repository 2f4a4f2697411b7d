//! Help overlay widget.
//!
//! Lists the keybindings of the task list, the form and the delete dialog.
//! Opened with `?` from the list.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use super::centered_rect;

const HELP_WIDTH: u16 = 40;
const HELP_HEIGHT: u16 = 25;

/// Renders a centered help overlay displaying all keybindings.
///
/// # Layout
///
/// ```text
/// ╭ Help ────────────────────────────────╮
/// │                                      │
/// │  Task List                           │
/// │  ↑ / ↓        Select task            │
/// │  n            New task               │
/// │  e / Enter    Edit selected          │
/// │  ...                                 │
/// │  Press any key to close              │
/// ╰──────────────────────────────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use taskflow_tui::widgets::render_help_overlay;
///
/// let area = Rect::new(0, 0, 80, 30);
/// let mut buf = Buffer::empty(area);
///
/// render_help_overlay(area, &mut buf);
/// ```
pub fn render_help_overlay(area: Rect, buf: &mut Buffer) {
    let popup_area = centered_rect(HELP_WIDTH, HELP_HEIGHT, area);
    Clear.render(popup_area, buf);

    let help_block = Block::default()
        .title(Span::styled(
            " Help ",
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightYellow));

    Paragraph::new(build_help_lines())
        .block(help_block)
        .alignment(Alignment::Left)
        .render(popup_area, buf);
}

const LIST_KEYS: &[(&str, &str)] = &[
    ("↑ / ↓", "Select task"),
    ("n", "New task"),
    ("e / Enter", "Edit selected"),
    ("d", "Delete selected"),
    ("/", "Search titles"),
    ("s", "Cycle status filter"),
    ("p", "Cycle priority filter"),
    ("c", "Clear filters"),
    ("q / Ctrl+C", "Quit"),
];

const FORM_KEYS: &[(&str, &str)] = &[
    ("Tab", "Next field"),
    ("Shift+Tab", "Previous field"),
    ("← / →", "Change value"),
    ("Enter", "Save task"),
    ("Esc", "Back to list"),
];

fn section(
    title: &'static str,
    keys: &[(&'static str, &'static str)],
    lines: &mut Vec<Line<'static>>,
) {
    let header_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Green);
    let text_style = Style::default().fg(Color::White);

    lines.push(Line::from(Span::styled(format!("  {title}"), header_style)));
    for (key, action) in keys {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key:<13}"), key_style),
            Span::styled(*action, text_style),
        ]));
    }
    lines.push(Line::from(""));
}

fn build_help_lines() -> Vec<Line<'static>> {
    let hint_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);

    let mut lines = vec![Line::from("")];
    section("Task List", LIST_KEYS, &mut lines);
    section("Form", FORM_KEYS, &mut lines);
    lines.push(Line::from(Span::styled("  Press any key to close", hint_style)));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn render_help_overlay_creates_output() {
        let area = Rect::new(0, 0, 80, 30);
        let mut buf = Buffer::empty(area);

        render_help_overlay(area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Help"));
        assert!(content.contains("Task List"));
        assert!(content.contains("Form"));
        assert!(content.contains("Press any key to close"));
    }

    #[test]
    fn render_help_overlay_handles_small_area() {
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);

        // Should not panic with small area
        render_help_overlay(area, &mut buf);
    }

    #[test]
    fn build_help_lines_contains_all_keybindings() {
        let content: String = build_help_lines()
            .iter()
            .map(|l| {
                l.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");

        for (key, action) in LIST_KEYS.iter().chain(FORM_KEYS) {
            assert!(content.contains(key), "missing key {key}");
            assert!(content.contains(action), "missing action {action}");
        }
    }
}
