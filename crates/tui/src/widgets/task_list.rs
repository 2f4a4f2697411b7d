//! Task list rendering widget.
//!
//! Each task takes three rows: the title, the description and a metadata
//! line with status, priority and due date.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{
        Block, BorderType, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget,
        Wrap,
    },
};
use taskflow_protocol::{Priority, Status, Task};

/// Returns the color associated with a task status.
///
/// # Examples
///
/// ```
/// use ratatui::style::Color;
/// use taskflow_protocol::Status;
/// use taskflow_tui::widgets::status_color;
///
/// assert_eq!(status_color(Status::Done), Color::Green);
/// ```
#[must_use]
pub const fn status_color(status: Status) -> Color {
    match status {
        Status::Todo => Color::Yellow,
        Status::InProgress => Color::Blue,
        Status::Done => Color::Green,
    }
}

/// Returns the color associated with a priority.
#[must_use]
pub const fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::Low => Color::DarkGray,
        Priority::Medium => Color::White,
        Priority::High => Color::LightRed,
        Priority::Critical => Color::Red,
    }
}

fn task_item(task: &Task) -> ListItem<'_> {
    let label_style = Style::default().fg(Color::DarkGray);

    let title = Line::from(Span::styled(
        task.title.as_str(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ));
    let description = Line::from(Span::styled(
        task.description.as_str(),
        Style::default().fg(Color::Gray),
    ));
    let meta = Line::from(vec![
        Span::styled("Status: ", label_style),
        Span::styled(
            task.status.label(),
            Style::default().fg(status_color(task.status)),
        ),
        Span::styled("  Priority: ", label_style),
        Span::styled(
            task.priority.label(),
            Style::default().fg(priority_color(task.priority)),
        ),
        Span::styled("  Due: ", label_style),
        Span::styled(task.due_date.to_string(), Style::default().fg(Color::Gray)),
    ]);

    ListItem::new(Text::from(vec![title, description, meta]))
}

/// Renders the task list.
///
/// `selected` indexes into `tasks`. When `tasks` is empty, `empty_message`
/// is shown instead.
///
/// # Layout
///
/// ```text
/// ╭ Tasks (3) ──────────────────────────────────────────╮
/// │▶ Design landing page                                │
/// │  Create hero section, CTA, and responsive grid.     │
/// │  Status: In Progress  Priority: High  Due: 2025-... │
/// │  Write API documentation                            │
/// ```
pub fn render_task_list(
    tasks: &[&Task],
    selected: Option<usize>,
    empty_message: &str,
    area: Rect,
    buf: &mut Buffer,
) {
    let block = Block::default()
        .title(format!(" Tasks ({}) ", tasks.len()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Gray));

    if tasks.is_empty() {
        Paragraph::new(empty_message)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
        return;
    }

    let items: Vec<ListItem> = tasks.iter().map(|t| task_item(t)).collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::Rgb(40, 40, 60)))
        .highlight_symbol("▶ ");

    let mut state = ListState::default().with_selected(selected);
    StatefulWidget::render(list, area, buf, &mut state);
}
