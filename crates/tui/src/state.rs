//! Checklist state management.
//!
//! This module defines [`ChecklistState`], the single state struct behind the
//! checklist widget. All task operations go through its transition methods so
//! that the "at most one task is being edited" and "the edited task exists"
//! invariants are maintained in one place.

use checklist_protocol::{Summary, Task, TaskId, TaskList};
use tracing::debug;

use crate::input::TextInput;

/// The current focus area in the UI.
///
/// Determines which UI component receives keyboard input when no task is
/// being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Focus is on the new-task input field.
    #[default]
    Input,
    /// Focus is on the task list.
    List,
}

/// The in-progress edit of a single task.
///
/// The scratch text is a copy of the task text taken when editing started;
/// changes to it do not touch the stored task until they are saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditingState {
    id: TaskId,
    text: TextInput,
}

impl EditingState {
    /// Returns the id of the task being edited.
    #[must_use]
    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the scratch text buffer.
    #[must_use]
    pub fn text(&self) -> &TextInput {
        &self.text
    }
}

/// The checklist state.
///
/// Owns the task list, the new-task input buffer, the optional edit in
/// progress, and the UI selection. Operations addressing a task by id are
/// silent no-ops when the id is unknown, and blank text is never stored.
///
/// # Examples
///
/// ```
/// use checklist_tui::ChecklistState;
///
/// let mut state = ChecklistState::new();
/// for ch in "Buy milk".chars() {
///     state.new_task_input_mut().insert_char(ch);
/// }
/// state.add_task();
///
/// let id = state.tasks().tasks()[0].id;
/// state.toggle_complete(id);
/// assert_eq!(state.summary().completed, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChecklistState {
    tasks: TaskList,
    new_task: TextInput,
    editing: Option<EditingState>,
    /// Current focus area.
    pub focus: Focus,
    /// Index of the selected task in the list, if any.
    pub selected: Option<usize>,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
    /// Index of the first task shown in the list viewport.
    scroll_offset: usize,
}

impl ChecklistState {
    /// Creates an empty checklist with focus on the input field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the task list.
    #[must_use]
    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// Returns the new-task input buffer.
    #[must_use]
    pub fn new_task_input(&self) -> &TextInput {
        &self.new_task
    }

    /// Returns the new-task input buffer for editing.
    pub fn new_task_input_mut(&mut self) -> &mut TextInput {
        &mut self.new_task
    }

    /// Returns the edit in progress, if any.
    #[must_use]
    pub fn editing(&self) -> Option<&EditingState> {
        self.editing.as_ref()
    }

    /// Returns the id of the task being edited, if any.
    #[must_use]
    pub fn editing_id(&self) -> Option<TaskId> {
        self.editing.as_ref().map(EditingState::id)
    }

    /// Returns `true` if the given task is the one being edited.
    #[must_use]
    pub fn is_editing(&self, id: TaskId) -> bool {
        self.editing_id() == Some(id)
    }

    /// Returns the scratch buffer of the edit in progress for editing.
    pub fn editing_text_mut(&mut self) -> Option<&mut TextInput> {
        self.editing.as_mut().map(|e| &mut e.text)
    }

    /// Returns the text buffer that currently receives typed characters.
    ///
    /// The edit buffer takes precedence; otherwise the new-task buffer is
    /// active while the input field has focus.
    pub fn active_input_mut(&mut self) -> Option<&mut TextInput> {
        if let Some(editing) = self.editing.as_mut() {
            return Some(&mut editing.text);
        }
        match self.focus {
            Focus::Input => Some(&mut self.new_task),
            Focus::List => None,
        }
    }

    /// Computes the summary counts.
    #[must_use]
    pub fn summary(&self) -> Summary {
        self.tasks.summary()
    }

    /// Adds a task from the new-task buffer.
    ///
    /// The text is trimmed; if it is blank this is a silent no-op and the
    /// buffer is left as typed. On success the buffer is cleared.
    pub fn add_task(&mut self) {
        if self.tasks.add(self.new_task.value()).is_some() {
            self.new_task.clear();
        }
    }

    /// Deletes a task by id.
    ///
    /// Unknown ids are ignored. Deleting the task being edited also ends the
    /// edit, so the edit state never refers to a missing task.
    pub fn delete_task(&mut self, id: TaskId) {
        if self.tasks.remove(id).is_none() {
            return;
        }
        if self.is_editing(id) {
            debug!(task_id = %id, "edited task deleted, discarding edit");
            self.editing = None;
        }
        self.clamp_selection();
    }

    /// Flips the completion flag of a task. Unknown ids are ignored.
    pub fn toggle_complete(&mut self, id: TaskId) {
        self.tasks.toggle(id);
    }

    /// Starts editing a task, copying its text into the scratch buffer.
    ///
    /// Any other edit in progress is discarded without saving. The task
    /// becomes the selected one. Unknown ids are ignored.
    pub fn start_editing(&mut self, id: TaskId) {
        let Some(index) = self.tasks.position(id) else {
            return;
        };
        let Some(task) = self.tasks.get_index(index) else {
            return;
        };

        if let Some(previous) = self.editing.as_ref().filter(|e| e.id != id) {
            debug!(task_id = %previous.id, "discarding unsaved edit");
        }
        self.editing = Some(EditingState {
            id,
            text: TextInput::with_value(task.text.clone()),
        });
        self.focus = Focus::List;
        self.selected = Some(index);
        debug!(task_id = %id, "editing started");
    }

    /// Saves the scratch text into the given task and ends editing.
    ///
    /// If the trimmed scratch text is blank or the task no longer exists the
    /// stored text is left unchanged. Editing ends either way.
    pub fn save_editing(&mut self, id: TaskId) {
        let editing = self.editing.take();
        let scratch = editing.as_ref().map_or("", |e| e.text.value());
        if !self.tasks.rename(id, scratch) {
            debug!(task_id = %id, "edit not applied");
        }
    }

    /// Ends editing without changing any task.
    pub fn cancel_editing(&mut self) {
        self.editing = None;
    }

    /// Returns a reference to the currently selected task, if any.
    #[must_use]
    pub fn selected_task(&self) -> Option<&Task> {
        self.tasks.get_index(self.selected?)
    }

    /// Returns the id of the currently selected task, if any.
    #[must_use]
    pub fn selected_id(&self) -> Option<TaskId> {
        self.selected_task().map(|t| t.id)
    }

    /// Moves focus to the new-task input field.
    pub fn focus_input(&mut self) {
        self.focus = Focus::Input;
    }

    /// Moves focus to the task list, selecting the first task if nothing is
    /// selected. Does nothing when the list is empty.
    pub fn focus_list(&mut self) {
        if self.tasks.is_empty() {
            return;
        }
        self.focus = Focus::List;
        if self.selected.is_none() {
            self.selected = Some(0);
        }
        self.clamp_selection();
    }

    /// Switches focus between the input field and the task list.
    pub fn toggle_focus(&mut self) {
        match self.focus {
            Focus::Input => self.focus_list(),
            Focus::List => self.focus_input(),
        }
    }

    /// Moves the task selection up, wrapping to the bottom.
    pub fn navigate_up(&mut self) {
        let len = self.tasks.len();
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(idx) if idx > 0 => idx - 1,
            Some(_) => len - 1,
            None => 0,
        });
    }

    /// Moves the task selection down, wrapping to the top.
    pub fn navigate_down(&mut self) {
        let len = self.tasks.len();
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(idx) if idx + 1 < len => idx + 1,
            Some(_) => 0,
            None => 0,
        });
    }

    /// Toggles the help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Dismisses the help overlay if it is visible.
    ///
    /// Returns `true` if help was visible and has been dismissed.
    pub fn dismiss_help(&mut self) -> bool {
        std::mem::replace(&mut self.help_visible, false)
    }

    /// Returns the index of the first task shown in the list viewport.
    #[must_use]
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Scrolls the list viewport just far enough to show the selected task.
    ///
    /// The offset only moves when the selection lies outside the
    /// `visible_rows` rows currently shown, so a row keeps its screen
    /// position between frames while it stays in view.
    pub fn scroll_to_selection(&mut self, visible_rows: usize) {
        self.scroll_offset = scroll_offset_for(
            self.scroll_offset,
            self.selected,
            self.tasks.len(),
            visible_rows,
        );
    }

    /// Keeps the selection within the list bounds and returns focus to the
    /// input once the list is empty.
    fn clamp_selection(&mut self) {
        let len = self.tasks.len();
        if len == 0 {
            self.selected = None;
            self.focus = Focus::Input;
        } else if self.selected.is_some_and(|idx| idx >= len) {
            self.selected = Some(len - 1);
        }
    }
}

/// Returns the smallest change to `current` that keeps `selected` within a
/// viewport of `visible` rows over `total` tasks.
fn scroll_offset_for(
    current: usize,
    selected: Option<usize>,
    total: usize,
    visible: usize,
) -> usize {
    if visible == 0 || total <= visible {
        return 0;
    }
    let offset = current.min(total - visible);
    match selected {
        Some(idx) if idx < offset => idx,
        Some(idx) if idx >= offset + visible => idx + 1 - visible,
        _ => offset,
    }
}
