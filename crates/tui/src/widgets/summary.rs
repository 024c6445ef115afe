//! Summary line widget.

use checklist_protocol::Summary;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Renders the task counts on a single line.
///
/// Nothing is rendered while the list is empty.
///
/// ```text
///  Total: 3 | Completed: 1 | Remaining: 2
/// ```
pub fn render_summary(summary: Summary, area: Rect, buf: &mut Buffer) {
    if summary.total == 0 {
        return;
    }

    let label_style = Style::default().fg(Color::DarkGray);
    let separator = Span::styled(" | ", label_style);
    let line = Line::from(vec![
        Span::styled(" Total: ", label_style),
        Span::styled(summary.total.to_string(), Style::default().fg(Color::White)),
        separator.clone(),
        Span::styled("Completed: ", label_style),
        Span::styled(
            summary.completed.to_string(),
            Style::default().fg(Color::Green),
        ),
        separator,
        Span::styled("Remaining: ", label_style),
        Span::styled(
            summary.remaining.to_string(),
            Style::default().fg(Color::Yellow),
        ),
    ]);

    Paragraph::new(line).render(area, buf);
}
