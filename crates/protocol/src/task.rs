//! Task-related types for the checklist.
//!
//! This module defines the task record and its identifier.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a task.
///
/// Uses UUID v4 so that tasks created in rapid succession never collide.
pub type TaskId = uuid::Uuid;

/// A single checklist entry.
///
/// Tasks are normally created through [`TaskList::add`](crate::TaskList::add),
/// which trims the text and rejects blank input. Constructing a `Task`
/// directly performs no validation.
///
/// # Examples
///
/// ```
/// use checklist_protocol::Task;
///
/// let task = Task::new("Water the plants");
/// assert_eq!(task.text, "Water the plants");
/// assert!(!task.completed);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier for this task.
    pub id: TaskId,
    /// The display text of the task.
    pub text: String,
    /// Whether the task has been checked off.
    #[serde(default)]
    pub completed: bool,
    /// When this task was created.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new, not yet completed task with a fresh identifier.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_id(TaskId::new_v4(), text)
    }

    /// Creates a new task with a specific ID.
    ///
    /// Useful for testing or when the identifier must be known up front.
    ///
    /// # Examples
    ///
    /// ```
    /// use checklist_protocol::{Task, TaskId};
    ///
    /// let id = TaskId::new_v4();
    /// let task = Task::with_id(id, "Call the plumber");
    /// assert_eq!(task.id, id);
    /// ```
    #[must_use]
    pub fn with_id(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            created_at: Utc::now(),
        }
    }

    /// Flips the completion flag and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }
}
