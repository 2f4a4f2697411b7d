//! Create/edit form widget.
//!
//! The form is a centered panel, one row per field. The focused field is
//! highlighted and text fields draw a reversed cell at the cursor.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use super::centered_rect;
use crate::form::{FormController, FormField, TextInput};
use crate::layout::FORM_WIDTH;
use crate::widgets::task_list::{priority_color, status_color};

const LABEL_WIDTH: usize = 14;

fn text_spans(input: &TextInput, focused: bool, style: Style) -> Vec<Span<'static>> {
    if !focused {
        return vec![Span::styled(input.value().to_string(), style)];
    }

    let cursor_style = Style::default().add_modifier(Modifier::REVERSED);
    let before: String = input.value().chars().take(input.cursor()).collect();
    let mut rest = input.value().chars().skip(input.cursor());
    let at = rest.next().map_or_else(|| " ".to_string(), String::from);
    let after: String = rest.collect();

    vec![
        Span::styled(before, style),
        Span::styled(at, cursor_style),
        Span::styled(after, style),
    ]
}

fn selector_spans(label: &'static str, color: Color, focused: bool) -> Vec<Span<'static>> {
    let value = Span::styled(label, Style::default().fg(color));
    if focused {
        let arrow = Style::default().fg(Color::Cyan);
        vec![Span::styled("‹ ", arrow), value, Span::styled(" ›", arrow)]
    } else {
        vec![Span::raw("  "), value]
    }
}

fn field_line(form: &FormController, field: FormField) -> Line<'static> {
    let focused = form.focus() == field && !form.is_submitted();
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let text_style = Style::default().fg(Color::White);

    let mut spans = vec![Span::styled(
        format!("{:<width$}", field.label(), width = LABEL_WIDTH),
        label_style,
    )];
    spans.extend(match field {
        FormField::Title => text_spans(form.title(), focused, text_style),
        FormField::Description => text_spans(form.description(), focused, text_style),
        FormField::DueDate => text_spans(form.due_date(), focused, text_style),
        FormField::Status => selector_spans(
            form.status().label(),
            status_color(form.status()),
            focused,
        ),
        FormField::Priority => selector_spans(
            form.priority().label(),
            priority_color(form.priority()),
            focused,
        ),
    });
    Line::from(spans)
}

/// Renders the form centered in `area`.
///
/// # Layout
///
/// ```text
/// ╭ Create Task ─────────────────────────────────────────────╮
/// │                                                          │
/// │ Title         Write tests                                │
/// │ Description                                              │
/// │ Status        ‹ To Do ›                                  │
/// │ Priority        Medium                                   │
/// │ Due Date      2025-06-01                                 │
/// │                                                          │
/// │ Title required                                           │
/// │ [Enter] Save Task  [Esc] Cancel                          │
/// ╰──────────────────────────────────────────────────────────╯
/// ```
pub fn render_task_form(form: &FormController, area: Rect, buf: &mut Buffer) {
    let height = FormField::all().len() as u16 + 7;
    let popup = centered_rect(FORM_WIDTH, height, area);
    Clear.render(popup, buf);

    let mut lines = vec![Line::from("")];
    lines.extend(FormField::all().iter().map(|f| field_line(form, *f)));
    lines.push(Line::from(""));

    if let Some(notice) = form.notice() {
        lines.push(Line::from(Span::styled(
            notice,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
    } else if let Some(error) = form.error() {
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red),
        )));
    } else {
        lines.push(Line::from(""));
    }

    let key = Style::default().fg(Color::Green);
    let hint = Style::default().fg(Color::DarkGray);
    lines.push(Line::from(vec![
        Span::styled("[Enter]", key),
        Span::styled(" Save Task  ", hint),
        Span::styled("[Esc]", key),
        Span::styled(" Cancel", hint),
    ]));

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", form.heading()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    Paragraph::new(lines).block(block).render(popup, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormMode;
    use crate::test_utils::buffer_to_string;
    use chrono::NaiveDate;
    use std::time::Duration;
    use taskflow_protocol::{TaskFields, TaskId};

    fn form(mode: FormMode, title: &str) -> FormController {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        FormController::with_fields(mode, TaskFields::new(title, today), Duration::ZERO)
    }

    fn render(form: &FormController) -> String {
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);
        render_task_form(form, area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn renders_create_form() {
        let content = render(&form(FormMode::Create, "Write tests"));

        assert!(content.contains("Create Task"));
        assert!(content.contains("Write tests"));
        assert!(content.contains("To Do"));
        assert!(content.contains("Medium"));
        assert!(content.contains("2025-06-01"));
        assert!(content.contains("[Enter] Save Task  [Esc] Cancel"));
    }

    #[test]
    fn renders_edit_heading() {
        let content = render(&form(FormMode::Edit(TaskId::from("a")), "x"));
        assert!(content.contains("Edit Task"));
    }

    #[test]
    fn focused_selector_shows_arrows() {
        let mut f = form(FormMode::Create, "x");
        f.focus_next();
        f.focus_next();
        assert_eq!(f.focus(), FormField::Status);

        let content = render(&f);
        assert!(content.contains("‹ To Do ›"));
    }

    #[test]
    fn text_spans_split_at_cursor() {
        let mut input = TextInput::new("abc");
        input.move_left();

        let spans = text_spans(&input, true, Style::default());
        let parts: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(parts, ["ab", "c", ""]);

        let spans = text_spans(&TextInput::new("abc"), true, Style::default());
        let parts: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(parts, ["abc", " ", ""]);
    }

    #[test]
    fn small_area_does_not_panic() {
        let f = form(FormMode::Create, "x");
        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);
        render_task_form(&f, area, &mut buf);
    }
}
