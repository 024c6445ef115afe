//! The ordered task collection and its derived counts.
//!
//! [`TaskList`] owns the tasks of a checklist in insertion order. It is the
//! only place where tasks are created, so the "trimmed, non-blank text" and
//! "pairwise distinct ids" invariants are enforced here.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::task::{Task, TaskId};

/// Counts derived from a task list.
///
/// Always satisfies `total == completed + remaining`.
///
/// # Examples
///
/// ```
/// use checklist_protocol::TaskList;
///
/// let mut list = TaskList::new();
/// let id = list.add("Write report").unwrap();
/// list.add("Send report");
/// list.toggle(id);
///
/// let summary = list.summary();
/// assert_eq!(summary.total, 2);
/// assert_eq!(summary.completed, 1);
/// assert_eq!(summary.remaining, 1);
/// assert_eq!(summary.to_string(), "Total: 2 | Completed: 1 | Remaining: 1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Summary {
    /// Number of tasks in the list.
    pub total: usize,
    /// Number of checked-off tasks.
    pub completed: usize,
    /// Number of tasks still open.
    pub remaining: usize,
}

impl Summary {
    /// Computes the summary for a slice of tasks.
    #[must_use]
    pub fn of(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.completed).count();
        Self {
            total,
            completed,
            remaining: total - completed,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total: {} | Completed: {} | Remaining: {}",
            self.total, self.completed, self.remaining
        )
    }
}

/// An ordered collection of tasks.
///
/// Tasks keep the order in which they were added; there is no reordering
/// operation. Operations addressing a task by id are no-ops when the id is
/// unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    /// Creates a new empty task list.
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if the list has no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns an iterator over the tasks in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Appends a new task built from `text`.
    ///
    /// The text is trimmed first. Returns the id of the new task, or `None`
    /// if the trimmed text is empty (in which case the list is unchanged).
    ///
    /// # Examples
    ///
    /// ```
    /// use checklist_protocol::TaskList;
    ///
    /// let mut list = TaskList::new();
    /// assert!(list.add("\t \n").is_none());
    /// assert!(list.is_empty());
    ///
    /// let id = list.add(" A ").unwrap();
    /// assert_eq!(list.tasks()[0].id, id);
    /// assert_eq!(list.tasks()[0].text, "A");
    /// ```
    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let task = Task::new(text);
        let id = task.id;
        self.tasks.push(task);
        debug!(task_id = %id, len = self.tasks.len(), "task added");
        Some(id)
    }

    /// Removes and returns a task by ID, if found.
    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        let pos = self.position(id)?;
        let task = self.tasks.remove(pos);
        debug!(task_id = %id, len = self.tasks.len(), "task removed");
        Some(task)
    }

    /// Flips the completion flag of a task.
    ///
    /// Returns the new flag value, or `None` if no task has this id.
    pub fn toggle(&mut self, id: TaskId) -> Option<bool> {
        let completed = self.get_mut(id)?.toggle();
        debug!(task_id = %id, completed, "task toggled");
        Some(completed)
    }

    /// Replaces the text of a task with the trimmed `text`.
    ///
    /// Returns `true` if the task was found and the trimmed text was
    /// non-empty. Otherwise the list is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use checklist_protocol::TaskList;
    ///
    /// let mut list = TaskList::new();
    /// let id = list.add("Draft").unwrap();
    ///
    /// assert!(!list.rename(id, "   "));
    /// assert!(list.rename(id, " Final "));
    /// assert_eq!(list.get(id).unwrap().text, "Final");
    /// ```
    pub fn rename(&mut self, id: TaskId, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        let Some(task) = self.get_mut(id) else {
            return false;
        };
        task.text = text.to_string();
        debug!(task_id = %id, "task renamed");
        true
    }

    /// Returns a reference to a task by ID, if found.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Returns a reference to the task at `index`, if any.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    /// Returns the position of a task by ID, if found.
    #[must_use]
    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    /// Computes the current summary counts.
    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary::of(&self.tasks)
    }

    fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
