//! Rendering helpers shared by the widget and app tests.

use ratatui::buffer::{Buffer, Cell};
use ratatui::layout::Rect;

/// Returns the buffer as text, one line per row with trailing blanks
/// removed. Styles are ignored, so snapshots only capture layout and text.
#[must_use]
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
    let width = usize::from(buf.area.width).max(1);
    buf.content
        .chunks(width)
        .map(|row| {
            let line: String = row.iter().map(Cell::symbol).collect();
            format!("{}\n", line.trim_end_matches(' '))
        })
        .collect()
}

/// Renders into a blank `width` x `height` buffer and returns its text.
pub(crate) fn render_widget(
    width: u16,
    height: u16,
    render: impl FnOnce(Rect, &mut Buffer),
) -> String {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    render(area, &mut buf);
    buffer_to_string(&buf)
}
