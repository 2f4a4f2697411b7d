//! Search box and filter selectors shown above the task list.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::query_state::QueryEngine;

const SELECTOR_WIDTH: u16 = 18;

fn boxed(title: &'static str, active: bool) -> Block<'static> {
    let color = if active { Color::Cyan } else { Color::Gray };
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

/// Renders the filter bar: the raw search input followed by the status and
/// priority selectors.
///
/// An empty, unfocused search box shows a `Search...` placeholder. A focused
/// one shows a block cursor after the text.
pub fn render_filter_bar(query: &QueryEngine, search_focused: bool, area: Rect, buf: &mut Buffer) {
    let [search_area, status_area, priority_area] = Layout::horizontal([
        Constraint::Min(10),
        Constraint::Length(SELECTOR_WIDTH),
        Constraint::Length(SELECTOR_WIDTH),
    ])
    .areas(area);

    let search_line = if query.input().is_empty() && !search_focused {
        Line::from(Span::styled("Search...", Style::default().fg(Color::DarkGray)))
    } else {
        let mut spans = vec![Span::styled(query.input(), Style::default().fg(Color::White))];
        if search_focused {
            spans.push(Span::styled(
                " ",
                Style::default().add_modifier(Modifier::REVERSED),
            ));
        }
        Line::from(spans)
    };
    Paragraph::new(search_line)
        .block(boxed("/ Search", search_focused))
        .render(search_area, buf);

    let criteria = query.criteria();
    let status = criteria.status.map_or("All Status", |s| s.label());
    let priority = criteria.priority.map_or("All Priority", |p| p.label());

    Paragraph::new(status)
        .block(boxed("s Status", criteria.status.is_some()))
        .render(status_area, buf);
    Paragraph::new(priority)
        .block(boxed("p Priority", criteria.priority.is_some()))
        .render(priority_area, buf);
}
