//! Status bar rendering widget.
//!
//! This module provides the footer line of keybinding hints. The hints
//! change with the current input mode.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::event::InputMode;

/// Returns the `(key, action)` hints for an input mode.
#[must_use]
pub fn hints_for(mode: InputMode) -> &'static [(&'static str, &'static str)] {
    match mode {
        InputMode::Typing => &[
            ("Enter", "Add"),
            ("Tab", "Tasks"),
            ("Esc", "Clear"),
            ("Ctrl+C", "Quit"),
        ],
        InputMode::Browsing => &[
            ("↑↓", "Move"),
            ("Space", "Toggle"),
            ("Enter", "Edit"),
            ("d", "Delete"),
            ("Tab", "New task"),
            ("?", "Help"),
        ],
        InputMode::Editing => &[("Enter", "Save"), ("Esc", "Cancel"), ("Ctrl+C", "Quit")],
        InputMode::Help => &[("Any key", "Close help")],
    }
}

/// Renders the status bar with keybinding hints for the given mode.
///
/// # Layout
///
/// ```text
///  Enter Add  Tab Tasks  Esc Clear  Ctrl+C Quit
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use checklist_tui::event::InputMode;
/// use checklist_tui::widgets::render_status_bar;
///
/// let area = Rect::new(0, 0, 80, 1);
/// let mut buf = Buffer::empty(area);
///
/// render_status_bar(InputMode::Typing, area, &mut buf);
/// ```
pub fn render_status_bar(mode: InputMode, area: Rect, buf: &mut Buffer) {
    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::White);

    let mut spans = vec![Span::raw(" ")];
    for (key, action) in hints_for(mode) {
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(" {action}  "), text_style));
    }

    Paragraph::new(Line::from(spans)).render(area, buf);
}
