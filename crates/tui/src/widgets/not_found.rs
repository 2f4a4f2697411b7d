//! Screen shown for unknown routes.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::centered_rect;

/// Renders the not-found page for `path`.
pub fn render_not_found(path: &str, area: Rect, buf: &mut Buffer) {
    let lines = vec![
        Line::from(Span::styled(
            "404 Not Found",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(path, Style::default().fg(Color::Gray))),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to go home",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
    ];

    let popup = centered_rect(area.width, lines.len() as u16, area);
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .render(popup, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn shows_path_and_hint() {
        let area = Rect::new(0, 0, 50, 10);
        let mut buf = Buffer::empty(area);

        render_not_found("/unknown/place", area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("404 Not Found"));
        assert!(content.contains("/unknown/place"));
        assert!(content.contains("Press any key to go home"));
    }
}
