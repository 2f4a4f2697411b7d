//! Transient notice drawn above the status bar.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

/// Renders `message` in a small box at the bottom-right of `area`.
pub fn render_toast(message: &str, area: Rect, buf: &mut Buffer) {
    let width = (message.chars().count() as u16)
        .saturating_add(4)
        .min(area.width);
    let height = 3_u16.min(area.height);
    let popup = Rect::new(
        area.x + area.width - width,
        area.y + area.height - height,
        width,
        height,
    );
    Clear.render(popup, buf);

    Paragraph::new(Span::styled(
        message,
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    ))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Green)),
    )
    .render(popup, buf);
}
