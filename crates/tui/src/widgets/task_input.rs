//! New-task input box widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget},
};

use crate::input::TextInput;

/// Renders the bordered input field for new tasks.
///
/// An empty field shows the placeholder in dim italics. The border is
/// highlighted while the field has focus.
///
/// Returns the screen position of the text cursor, or `None` if the area has
/// no room inside its border.
///
/// # Layout
///
/// ```text
/// ╭ New task ──────────────────────────╮
/// │Add a new task...                   │
/// ╰────────────────────────────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use checklist_tui::input::TextInput;
/// use checklist_tui::widgets::render_task_input;
///
/// let input = TextInput::with_value("Buy milk");
/// let area = Rect::new(0, 0, 40, 3);
/// let mut buf = Buffer::empty(area);
///
/// let cursor = render_task_input(&input, "Add a new task...", true, area, &mut buf);
/// assert_eq!(cursor, Some((9, 1)));
/// ```
pub fn render_task_input(
    input: &TextInput,
    placeholder: &str,
    is_focused: bool,
    area: Rect,
    buf: &mut Buffer,
) -> Option<(u16, u16)> {
    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let title_style = if is_focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(Span::styled(" New task ", title_style));
    let inner = block.inner(area);
    block.render(area, buf);

    if inner.width == 0 || inner.height == 0 {
        return None;
    }

    let (line, column) = if input.is_empty() {
        let line = Line::from(Span::styled(
            placeholder,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ));
        (line, 0)
    } else {
        let (visible, column) = input.visible_window(inner.width);
        (Line::from(Span::raw(visible)), column)
    };
    Paragraph::new(line).render(inner, buf);

    Some((inner.x + column, inner.y))
}
