//! Task row rendering widget.
//!
//! Each task occupies a single row: a selection marker, a checkbox bound to
//! the completion flag, and either the task text with edit/delete buttons or
//! an inline edit field with save/cancel buttons. Every control is clickable;
//! [`row_control_at`] maps a column back to the control drawn there.

use checklist_protocol::Task;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::input::TextInput;

/// Marker drawn before the selected row.
const SELECTED_MARKER: &str = "> ";

/// Column of the checkbox relative to the row start.
const CHECKBOX_OFFSET: u16 = 2;

/// Width of the checkbox (`[ ]` or `[x]`).
const CHECKBOX_WIDTH: u16 = 3;

/// Column where the task text starts relative to the row start.
const TEXT_OFFSET: u16 = CHECKBOX_OFFSET + CHECKBOX_WIDTH + 1;

/// Buttons at the end of a row in display mode.
const EDIT_BUTTON: &str = "[e]";
const DELETE_BUTTON: &str = "[d]";

/// Width of `" [e] [d]"`.
const ACTIONS_WIDTH: u16 = 8;

/// Buttons at the end of a row being edited, as key and action.
const SAVE_BUTTON: (&str, &str) = ("Enter", " save");
const CANCEL_BUTTON: (&str, &str) = ("Esc", " cancel");

/// Width of `"Enter save"` and `"Esc cancel"`.
const SAVE_WIDTH: u16 = 10;
const CANCEL_WIDTH: u16 = 10;

/// Width of `" Enter save  Esc cancel"`.
const EDIT_HINT_WIDTH: u16 = 1 + SAVE_WIDTH + 2 + CANCEL_WIDTH;

/// Minimum width kept for the text before row buttons are dropped.
const MIN_TEXT_WIDTH: u16 = 8;

/// A clickable part of a task row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowControl {
    /// The completion checkbox.
    Checkbox,
    /// The edit button of a row in display mode.
    Edit,
    /// The delete button of a row in display mode.
    Delete,
    /// The save button of the row being edited.
    Save,
    /// The cancel button of the row being edited.
    Cancel,
}

/// Returns the control drawn at column `x` of a row `width` cells wide.
///
/// `editing` selects the edit-mode layout. Columns over the task text or
/// between buttons return `None`.
///
/// # Examples
///
/// ```
/// use checklist_tui::widgets::{RowControl, row_control_at};
///
/// assert_eq!(row_control_at(3, 40, false), Some(RowControl::Checkbox));
/// assert_eq!(row_control_at(34, 40, false), Some(RowControl::Edit));
/// assert_eq!(row_control_at(38, 40, false), Some(RowControl::Delete));
/// assert_eq!(row_control_at(10, 40, false), None);
/// ```
#[must_use]
pub fn row_control_at(x: u16, width: u16, editing: bool) -> Option<RowControl> {
    if (CHECKBOX_OFFSET..CHECKBOX_OFFSET + CHECKBOX_WIDTH).contains(&x) {
        return Some(RowControl::Checkbox);
    }

    if editing {
        if !fits_buttons(width, EDIT_HINT_WIDTH) {
            return None;
        }
        let save_x = width - EDIT_HINT_WIDTH + 1;
        let cancel_x = save_x + SAVE_WIDTH + 2;
        if (save_x..save_x + SAVE_WIDTH).contains(&x) {
            Some(RowControl::Save)
        } else if (cancel_x..cancel_x + CANCEL_WIDTH).contains(&x) {
            Some(RowControl::Cancel)
        } else {
            None
        }
    } else {
        if !fits_buttons(width, ACTIONS_WIDTH) {
            return None;
        }
        let edit_x = width - ACTIONS_WIDTH + 1;
        let delete_x = edit_x + 4;
        if (edit_x..edit_x + 3).contains(&x) {
            Some(RowControl::Edit)
        } else if (delete_x..delete_x + 3).contains(&x) {
            Some(RowControl::Delete)
        } else {
            None
        }
    }
}

/// Returns `true` if a row `width` cells wide has room for buttons
/// `buttons_width` wide after the minimum text width.
fn fits_buttons(width: u16, buttons_width: u16) -> bool {
    width >= TEXT_OFFSET + MIN_TEXT_WIDTH + buttons_width
}

/// Returns the checkbox glyph for a completion flag.
///
/// # Examples
///
/// ```
/// use checklist_tui::widgets::checkbox;
///
/// assert_eq!(checkbox(true), "[x]");
/// assert_eq!(checkbox(false), "[ ]");
/// ```
#[must_use]
pub const fn checkbox(completed: bool) -> &'static str {
    if completed { "[x]" } else { "[ ]" }
}

/// Returns the style used for a task's text.
///
/// Completed tasks are crossed out and dimmed; the selected row is bold.
#[must_use]
pub fn task_text_style(completed: bool, is_selected: bool) -> Style {
    let style = if completed {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(Color::White)
    };
    if is_selected {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

/// Renders a task in display mode, with edit and delete buttons at the end
/// of the row when there is room.
///
/// # Layout
///
/// ```text
/// > [x] Buy milk                 [e] [d]
///   [ ] Send report              [e] [d]
/// ```
pub fn render_task_row(task: &Task, is_selected: bool, area: Rect, buf: &mut Buffer) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let show_actions = fits_buttons(area.width, ACTIONS_WIDTH);
    let text_area = if show_actions {
        Rect {
            width: area.width - ACTIONS_WIDTH,
            ..area
        }
    } else {
        area
    };

    let mut spans = row_prefix(task, is_selected);
    spans.push(Span::styled(
        task.text.as_str(),
        task_text_style(task.completed, is_selected),
    ));
    Paragraph::new(Line::from(spans)).render(text_area, buf);

    if show_actions {
        let (edit_style, delete_style) = if is_selected {
            (
                Style::default().fg(Color::Yellow),
                Style::default().fg(Color::Red),
            )
        } else {
            let dim = Style::default().fg(Color::DarkGray);
            (dim, dim)
        };
        let actions = Line::from(vec![
            Span::raw(" "),
            Span::styled(EDIT_BUTTON, edit_style),
            Span::raw(" "),
            Span::styled(DELETE_BUTTON, delete_style),
        ]);
        let actions_area = Rect {
            x: area.x + area.width - ACTIONS_WIDTH,
            width: ACTIONS_WIDTH,
            ..area
        };
        Paragraph::new(actions).render(actions_area, buf);
    }
}

/// Renders a task in edit mode, with the scratch text in place of the task
/// text and save/cancel buttons at the end of the row when there is room.
///
/// Returns the screen position of the text cursor.
///
/// # Layout
///
/// ```text
/// > [ ] Buy oat milk             Enter save  Esc cancel
/// ```
pub fn render_editing_row(
    task: &Task,
    scratch: &TextInput,
    area: Rect,
    buf: &mut Buffer,
) -> (u16, u16) {
    let available = area.width.saturating_sub(TEXT_OFFSET);
    let show_buttons = fits_buttons(area.width, EDIT_HINT_WIDTH);
    let text_width = if show_buttons {
        available - EDIT_HINT_WIDTH
    } else {
        available
    };

    let (visible, column) = scratch.visible_window(text_width);

    let mut spans = row_prefix(task, true);
    spans.push(Span::styled(
        visible,
        Style::default()
            .fg(Color::White)
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    ));
    Paragraph::new(Line::from(spans)).render(area, buf);

    if show_buttons {
        let key_style = Style::default().fg(Color::Yellow);
        let text_style = Style::default().fg(Color::DarkGray);
        let buttons = Line::from(vec![
            Span::raw(" "),
            Span::styled(SAVE_BUTTON.0, key_style),
            Span::styled(SAVE_BUTTON.1, text_style),
            Span::raw("  "),
            Span::styled(CANCEL_BUTTON.0, key_style),
            Span::styled(CANCEL_BUTTON.1, text_style),
        ]);
        let buttons_area = Rect {
            x: area.x + area.width - EDIT_HINT_WIDTH,
            width: EDIT_HINT_WIDTH,
            ..area
        };
        Paragraph::new(buttons).render(buttons_area, buf);
    }

    (area.x + TEXT_OFFSET + column, area.y)
}

/// Builds the selection marker and checkbox spans.
fn row_prefix<'a>(task: &Task, is_selected: bool) -> Vec<Span<'a>> {
    let marker = if is_selected { SELECTED_MARKER } else { "  " };
    let checkbox_style = if task.completed {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Gray)
    };

    vec![
        Span::styled(marker, Style::default().fg(Color::Cyan)),
        Span::styled(checkbox(task.completed), checkbox_style),
        Span::raw(" "),
    ]
}
