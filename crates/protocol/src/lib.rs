//! Shared protocol types for the checklist application.
//!
//! This crate defines the core types used across all checklist components:
//! the task record, the ordered task collection with its summary counts, and
//! the messages the TUI produces from user input.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`task`]: Task identifiers and the `Task` struct
//! - [`list`]: The ordered `TaskList` collection and its `Summary`
//! - [`message`]: TUI event messages
//!
//! # Examples
//!
//! Managing tasks in a list:
//!
//! ```
//! use checklist_protocol::TaskList;
//!
//! let mut list = TaskList::new();
//!
//! // Blank text is rejected silently
//! assert!(list.add("   ").is_none());
//!
//! // Text is trimmed before it is stored
//! let id = list.add("  Buy milk ").expect("non-blank text is accepted");
//! assert_eq!(list.get(id).map(|t| t.text.as_str()), Some("Buy milk"));
//!
//! list.toggle(id);
//! let summary = list.summary();
//! assert_eq!((summary.total, summary.completed, summary.remaining), (1, 1, 0));
//! ```

pub mod list;
pub mod message;
pub mod task;

// Re-export primary types at crate root for convenience
pub use list::{Summary, TaskList};
pub use message::Message;
pub use task::{Task, TaskId};
