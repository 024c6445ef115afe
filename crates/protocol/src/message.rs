//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the TUI input handler and the application state.

use serde::{Deserialize, Serialize};

/// Messages that represent user actions in the TUI.
///
/// These messages are produced by the input handler and consumed by
/// the application to update the checklist. Task-level actions address the
/// currently selected (or edited) task; the application resolves it to a
/// task id.
///
/// # Examples
///
/// ```
/// use checklist_protocol::Message;
///
/// let msg = Message::InputChar { ch: 'a' };
/// assert!(!msg.is_navigation());
/// assert!(Message::Quit.is_terminating());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,
    /// Escape: cancel the edit, return to the input, or clear it (contextual).
    Escape,
    /// Move focus between the new-task input and the task list.
    SwitchFocus,
    /// Move the selection up in the task list.
    NavigateUp,
    /// Move the selection down in the task list.
    NavigateDown,

    // --- Text input messages ---
    /// Insert a character at the cursor of the active text field.
    InputChar {
        /// The character that was typed.
        ch: char,
    },
    /// Delete the character before the cursor.
    InputBackspace,
    /// Delete the character under the cursor.
    InputDelete,
    /// Move the cursor one character left.
    CursorLeft,
    /// Move the cursor one character right.
    CursorRight,
    /// Move the cursor to the start of the field.
    CursorHome,
    /// Move the cursor to the end of the field.
    CursorEnd,
    /// Confirm the active text field (add a task or save an edit).
    Submit,

    // --- Task messages ---
    /// Flip the completion flag of the selected task.
    ToggleComplete,
    /// Start editing the selected task.
    StartEditing,
    /// Delete the selected task.
    DeleteTask,

    /// Mouse click at coordinates (column, row).
    ClickAt {
        /// Column (x coordinate) of the click.
        column: u16,
        /// Row (y coordinate) of the click.
        row: u16,
    },
}

impl Message {
    /// Returns `true` if this message is a navigation action.
    ///
    /// # Examples
    ///
    /// ```
    /// use checklist_protocol::Message;
    ///
    /// assert!(Message::NavigateUp.is_navigation());
    /// assert!(Message::SwitchFocus.is_navigation());
    /// assert!(!Message::Submit.is_navigation());
    /// ```
    #[must_use]
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::NavigateUp | Self::NavigateDown | Self::SwitchFocus
        )
    }

    /// Returns `true` if this message should terminate the application.
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Quit)
    }
}
