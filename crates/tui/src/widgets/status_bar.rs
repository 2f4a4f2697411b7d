//! One-line key hints at the bottom of the screen.
//!
//! The hints follow the [`InputContext`] so they always describe the keys
//! that currently do something.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::event::InputContext;

fn hints(context: InputContext) -> &'static [(&'static str, &'static str)] {
    match context {
        InputContext::List {
            search_focused: true,
        } => &[("Enter/Esc", "Done"), ("↑↓", "Select")],
        InputContext::List {
            search_focused: false,
        } => &[
            ("q", "Quit"),
            ("↑↓", "Select"),
            ("n", "New"),
            ("e", "Edit"),
            ("d", "Delete"),
            ("/", "Search"),
            ("?", "Help"),
        ],
        InputContext::Form => &[
            ("Tab", "Next field"),
            ("←→", "Change"),
            ("Enter", "Save"),
            ("Esc", "Cancel"),
        ],
        InputContext::Confirm => &[("y", "Delete"), ("n", "Cancel")],
        InputContext::NotFound => &[("any key", "Home")],
    }
}

/// Renders the key hints for `context`.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use taskflow_tui::event::InputContext;
/// use taskflow_tui::widgets::render_status_bar;
///
/// let area = Rect::new(0, 0, 80, 1);
/// let mut buf = Buffer::empty(area);
///
/// render_status_bar(InputContext::Form, area, &mut buf);
/// ```
pub fn render_status_bar(context: InputContext, area: Rect, buf: &mut Buffer) {
    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::White);

    let spans: Vec<Span> = hints(context)
        .iter()
        .flat_map(|(key, action)| {
            [
                Span::styled(*key, key_style),
                Span::styled(format!(" {action}  "), text_style),
            ]
        })
        .collect();

    Paragraph::new(Line::from(spans)).render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    fn render(context: InputContext) -> String {
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        render_status_bar(context, area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn list_hints() {
        let content = render(InputContext::List {
            search_focused: false,
        });
        assert!(content.contains("q Quit"));
        assert!(content.contains("n New"));
        assert!(content.contains("? Help"));
    }

    #[test]
    fn hints_follow_context() {
        assert!(render(InputContext::Form).contains("Enter Save"));
        assert!(render(InputContext::Confirm).contains("y Delete"));
        assert!(render(InputContext::NotFound).contains("any key Home"));
        assert!(
            render(InputContext::List {
                search_focused: true
            })
            .contains("Enter/Esc Done")
        );
    }
}
