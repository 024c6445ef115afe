//! Centralized layout measurements for the TUI.
//!
//! This module defines shared constants for layout dimensions and the
//! [`ScreenLayout`] split used by both rendering and mouse hit-testing, so the
//! two always agree on where each component sits.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    widgets::Block,
};

/// Height of the header bar in rows.
///
/// The header displays the application title and help cue.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the new-task input box in rows (border plus one line of text).
pub const INPUT_HEIGHT: u16 = 3;

/// Height of the summary line in rows.
pub const SUMMARY_HEIGHT: u16 = 1;

/// Height of the status bar in rows.
pub const STATUS_HEIGHT: u16 = 1;

/// Minimum height of the task list box: borders plus a single row.
pub const MIN_LIST_HEIGHT: u16 = 3;

/// Minimum terminal height for useful rendering (content area).
///
/// Below this height, we display a "terminal too small" message.
pub const MIN_HEIGHT: u16 = INPUT_HEIGHT + MIN_LIST_HEIGHT + SUMMARY_HEIGHT + STATUS_HEIGHT;

/// Minimum terminal height for rendering with header.
///
/// When terminal height is between `MIN_HEIGHT` and `MIN_HEIGHT_WITH_HEADER`,
/// we hide the header to reclaim 3 rows of content space.
pub const MIN_HEIGHT_WITH_HEADER: u16 = MIN_HEIGHT + HEADER_HEIGHT;

/// Minimum terminal width for useful rendering.
///
/// A task row needs room for the selection marker, the checkbox, and a
/// readable stretch of text.
pub const MIN_WIDTH: u16 = 30;

/// The areas of each screen component for a given terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Header bar, hidden on short terminals.
    pub header: Option<Rect>,
    /// New-task input box.
    pub input: Rect,
    /// Task list box, including its border.
    pub list: Rect,
    /// Summary line.
    pub summary: Rect,
    /// Status bar with key hints.
    pub status: Rect,
}

impl ScreenLayout {
    /// Splits the terminal area into screen components.
    ///
    /// Returns `None` if the area is below the minimum usable size.
    ///
    /// # Examples
    ///
    /// ```
    /// use ratatui::layout::Rect;
    /// use checklist_tui::layout::ScreenLayout;
    ///
    /// let layout = ScreenLayout::compute(Rect::new(0, 0, 80, 24)).unwrap();
    /// assert!(layout.header.is_some());
    /// assert_eq!(layout.status.y, 23);
    ///
    /// assert!(ScreenLayout::compute(Rect::new(0, 0, 20, 24)).is_none());
    /// ```
    #[must_use]
    pub fn compute(area: Rect) -> Option<Self> {
        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
            return None;
        }

        let (header, body) = if area.height >= MIN_HEIGHT_WITH_HEADER {
            let [header, body] =
                Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)])
                    .areas(area);
            (Some(header), body)
        } else {
            (None, area)
        };

        let [input, list, summary, status] = Layout::vertical([
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Min(MIN_LIST_HEIGHT),
            Constraint::Length(SUMMARY_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .areas(body);

        Some(Self {
            header,
            input,
            list,
            summary,
            status,
        })
    }

    /// Returns the area inside the input box border.
    #[must_use]
    pub fn input_inner(&self) -> Rect {
        Block::bordered().inner(self.input)
    }

    /// Returns the area inside the task list border, one task per row.
    #[must_use]
    pub fn list_inner(&self) -> Rect {
        Block::bordered().inner(self.list)
    }
}
