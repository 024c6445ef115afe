//! Task list rendering widget.
//!
//! Renders the bordered list of tasks, one row per task, or a placeholder
//! message when there are no tasks.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget},
};

use super::task_row::{render_editing_row, render_task_row};
use crate::state::{ChecklistState, Focus};

/// Renders the task list to the buffer.
///
/// The row being edited is rendered as an inline edit field; all other rows
/// are rendered in display mode. Rows start at the state's scroll offset,
/// which [`ChecklistState::scroll_to_selection`] keeps in step with the
/// selection.
///
/// Returns the screen position of the edit cursor if a visible row is being
/// edited.
///
/// # Layout
///
/// ```text
/// ╭ Tasks (2) ─────────────────────────╮
/// │> [x] Buy milk               [e] [d]│
/// │  [ ] Send report            [e] [d]│
/// ╰────────────────────────────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use checklist_tui::ChecklistState;
/// use checklist_tui::widgets::render_task_list;
///
/// let state = ChecklistState::new();
/// let area = Rect::new(0, 0, 40, 6);
/// let mut buf = Buffer::empty(area);
///
/// render_task_list(&state, "Nothing to do", area, &mut buf);
/// ```
pub fn render_task_list(
    state: &ChecklistState,
    empty_message: &str,
    area: Rect,
    buf: &mut Buffer,
) -> Option<(u16, u16)> {
    let is_focused = state.focus == Focus::List;
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

    let tasks = state.tasks();
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(Span::styled(format!(" Tasks ({}) ", tasks.len()), title_style));
    let inner = block.inner(area);
    block.render(area, buf);

    if tasks.is_empty() {
        render_empty_placeholder(empty_message, inner, buf);
        return None;
    }
    if inner.height == 0 {
        return None;
    }

    let visible_rows = usize::from(inner.height);
    let scroll_offset = first_visible(state, visible_rows);

    let mut cursor = None;
    for (row, task) in tasks
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(visible_rows)
        .map(|(idx, task)| (idx - scroll_offset, task))
    {
        let row_area = Rect {
            y: inner.y + row as u16,
            height: 1,
            ..inner
        };
        match state.editing().filter(|e| e.id() == task.id) {
            Some(editing) => {
                cursor = Some(render_editing_row(task, editing.text(), row_area, buf));
            }
            None => {
                let is_selected = is_focused && state.selected == Some(row + scroll_offset);
                render_task_row(task, is_selected, row_area, buf);
            }
        }
    }

    cursor
}

/// Returns the index of the task shown at the given screen row, if any.
///
/// `inner` is the list area inside its border. Used for mouse hit-testing;
/// it applies the same scroll offset as [`render_task_list`].
#[must_use]
pub fn task_index_at(state: &ChecklistState, inner: Rect, row: u16) -> Option<usize> {
    if row < inner.y || row >= inner.y + inner.height {
        return None;
    }
    let idx = first_visible(state, usize::from(inner.height)) + usize::from(row - inner.y);
    (idx < state.tasks().len()).then_some(idx)
}

/// Index of the first task shown when `visible_rows` rows fit the list.
///
/// The stored offset is clamped so a list that shrank never scrolls past
/// its last task.
fn first_visible(state: &ChecklistState, visible_rows: usize) -> usize {
    let max_offset = state.tasks().len().saturating_sub(visible_rows);
    state.scroll_offset().min(max_offset)
}

/// Renders a placeholder message for an empty list.
fn render_empty_placeholder(message: &str, area: Rect, buf: &mut Buffer) {
    let placeholder = Paragraph::new(Line::from(Span::styled(
        message,
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )));

    placeholder.render(area, buf);
}
