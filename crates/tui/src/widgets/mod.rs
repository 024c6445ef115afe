//! Widget components for the checklist TUI.
//!
//! This module provides the rendering functions for each part of the
//! checklist screen, organized into focused submodules.
//!
//! # Overview
//!
//! The widget system follows a functional rendering approach where each widget
//! is a pure function that renders state to a buffer. This enables easy testing
//! and composition.
//!
//! # Modules
//!
//! - [`task_input`]: Renders the new-task input box
//! - [`task_list`]: Renders the list of tasks or the empty placeholder
//! - [`task_row`]: Renders a single task in display or edit mode and maps
//!   clicks to its controls
//! - [`summary`]: Renders the total/completed/remaining counts
//! - [`status_bar`]: Renders the footer with keybinding hints
//! - [`help`]: Renders the keybinding help overlay
//!
//! # Example
//!
//! ```
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//! use checklist_tui::ChecklistState;
//! use checklist_tui::widgets;
//!
//! let mut state = ChecklistState::new();
//! state.new_task_input_mut().insert_char('A');
//! state.add_task();
//!
//! let area = Rect::new(0, 0, 40, 6);
//! let mut buf = Buffer::empty(area);
//!
//! widgets::render_task_list(&state, "No tasks", area, &mut buf);
//! widgets::render_summary(state.summary(), Rect::new(0, 5, 40, 1), &mut buf);
//! ```

pub mod help;
pub mod status_bar;
pub mod summary;
pub mod task_input;
pub mod task_list;
pub mod task_row;

// Re-export primary rendering functions for convenience
pub use help::render_help_overlay;
pub use status_bar::render_status_bar;
pub use summary::render_summary;
pub use task_input::render_task_input;
pub use task_list::{render_task_list, task_index_at};
pub use task_row::{
    RowControl, checkbox, render_editing_row, render_task_row, row_control_at, task_text_style,
};
