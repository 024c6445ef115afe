//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to application messages. Key bindings depend on the current
//! [`InputMode`], which the application derives from its state before each
//! event.

use std::time::Duration;

use checklist_protocol::Message;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

/// Default poll timeout for events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// How keyboard input is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Typing into the new-task input field.
    Typing,
    /// Moving through the task list.
    Browsing,
    /// Editing a task inline.
    Editing,
    /// The help overlay is open.
    Help,
}

impl InputMode {
    /// Returns `true` if keystrokes in this mode edit a text field.
    #[must_use]
    pub fn is_text_entry(self) -> bool {
        matches!(self, Self::Typing | Self::Editing)
    }
}

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts an event (keyboard or mouse) to an application message.
///
/// Returns `Some(Message)` if the event maps to an action,
/// or `None` if the event is not handled.
#[must_use]
pub fn event_to_message(event: &Event, mode: InputMode) -> Option<Message> {
    match event {
        Event::Key(key) => key_to_message(*key, mode),
        Event::Mouse(mouse) => mouse_to_message(mouse),
        _ => None,
    }
}

/// Converts a mouse event to an application message.
///
/// Only left-click press events are handled, producing a `ClickAt` message
/// with the click coordinates.
#[must_use]
fn mouse_to_message(mouse: &MouseEvent) -> Option<Message> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Message::ClickAt {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}

/// Converts a terminal key event to an application message.
///
/// Only key presses are mapped; repeats and releases return `None`.
/// `Ctrl+C` quits in every mode.
///
/// # Key Bindings
///
/// Text entry ([`InputMode::Typing`] and [`InputMode::Editing`]):
///
/// | Key | Action |
/// |-----|--------|
/// | Any char | Insert character |
/// | `Backspace` / `Delete` | Delete before / under cursor |
/// | `Left` `Right` `Home` `End` | Move cursor |
/// | `Enter` | Submit (add task or save edit) |
/// | `Esc` | Escape (clear input or cancel edit) |
/// | `Tab` | Switch focus (typing only) |
/// | `Down` | Move into the list (typing only) |
///
/// List ([`InputMode::Browsing`]):
///
/// | Key | Action |
/// |-----|--------|
/// | `Up` / `Down` | Navigate |
/// | `Space` | Toggle completion |
/// | `Enter` / `e` | Edit task |
/// | `d` / `Delete` | Delete task |
/// | `Tab` / `a` | Back to the input field |
/// | `?` | Toggle help |
/// | `Esc` | Back to the input field |
///
/// With [`InputMode::Help`] open, `?` closes the overlay and any other key
/// dismisses it.
#[must_use]
pub fn key_to_message(key: KeyEvent, mode: InputMode) -> Option<Message> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Check for Ctrl+C first
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }

    if mode.is_text_entry() {
        return text_key_to_message(key, mode);
    }
    match mode {
        InputMode::Help => match key.code {
            KeyCode::Char('?') => Some(Message::ToggleHelp),
            _ => Some(Message::Escape),
        },
        _ => browse_key_to_message(key),
    }
}

fn text_key_to_message(key: KeyEvent, mode: InputMode) -> Option<Message> {
    // Other control chords must not be inserted as text
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    match key.code {
        KeyCode::Char(ch) => Some(Message::InputChar { ch }),
        KeyCode::Backspace => Some(Message::InputBackspace),
        KeyCode::Delete => Some(Message::InputDelete),
        KeyCode::Left => Some(Message::CursorLeft),
        KeyCode::Right => Some(Message::CursorRight),
        KeyCode::Home => Some(Message::CursorHome),
        KeyCode::End => Some(Message::CursorEnd),
        KeyCode::Enter => Some(Message::Submit),
        KeyCode::Esc => Some(Message::Escape),
        KeyCode::Tab if mode == InputMode::Typing => Some(Message::SwitchFocus),
        KeyCode::Down if mode == InputMode::Typing => Some(Message::NavigateDown),
        _ => None,
    }
}

fn browse_key_to_message(key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Esc => Some(Message::Escape),

        // Navigation (arrow keys only)
        KeyCode::Up => Some(Message::NavigateUp),
        KeyCode::Down => Some(Message::NavigateDown),
        KeyCode::Tab | KeyCode::Char('a') => Some(Message::SwitchFocus),

        // Task actions
        KeyCode::Char(' ') => Some(Message::ToggleComplete),
        KeyCode::Enter | KeyCode::Char('e') => Some(Message::StartEditing),
        KeyCode::Char('d') | KeyCode::Delete => Some(Message::DeleteTask),

        KeyCode::Char('?') => Some(Message::ToggleHelp),

        _ => None,
    }
}
