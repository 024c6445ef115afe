//! Main application struct and run loop.
//!
//! This module provides the `App` struct which orchestrates the TUI
//! application lifecycle including event handling, state updates, and rendering.

use std::time::Instant;

use checklist_config::Config;
use checklist_protocol::{Message, TaskId};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use tracing::{debug, info};

use crate::{
    ChecklistState, Focus,
    event::{InputMode, event_to_message, poll_event},
    input::TextInput,
    layout::{MIN_HEIGHT, MIN_WIDTH, ScreenLayout},
    terminal::AppTerminal,
    widgets::{
        RowControl, render_help_overlay, render_status_bar, render_summary, render_task_input,
        render_task_list, row_control_at, task_index_at,
    },
};

/// The main application struct.
///
/// Manages the checklist state and provides the main event loop.
#[derive(Debug)]
pub struct App {
    state: ChecklistState,
    should_quit: bool,
    /// Last known terminal area, used for click hit-testing.
    last_area: Rect,
    /// Time and target of the previous click on a task row.
    last_click: Option<(Instant, TaskId)>,
    /// The application configuration.
    config: Config,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Creates a new application with an empty checklist and default
    /// configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use checklist_tui::App;
    ///
    /// let app = App::new();
    /// assert!(app.state().tasks().is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates a new application with the given configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use checklist_config::Config;
    /// use checklist_tui::App;
    ///
    /// let mut config = Config::default();
    /// config.ui.title = "Groceries".to_string();
    /// let app = App::with_config(config);
    /// assert_eq!(app.config().ui.title, "Groceries");
    /// ```
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self {
            state: ChecklistState::new(),
            should_quit: false,
            last_area: Rect::default(),
            last_click: None,
            config,
        }
    }

    /// Returns a reference to the checklist state.
    #[must_use]
    pub fn state(&self) -> &ChecklistState {
        &self.state
    }

    /// Returns a reference to the application configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns `true` once the user has asked to quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns how keyboard input is currently interpreted.
    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        if self.state.help_visible {
            InputMode::Help
        } else if self.state.editing().is_some() {
            InputMode::Editing
        } else {
            match self.state.focus {
                Focus::Input => InputMode::Typing,
                Focus::List => InputMode::Browsing,
            }
        }
    }

    /// Updates the application state based on a message.
    ///
    /// When the help overlay is visible, every message other than `Quit`
    /// dismisses the help instead of performing its normal action.
    ///
    /// Task actions (`ToggleComplete`, `StartEditing`, `DeleteTask`) address
    /// the selected task and only apply while the list has focus.
    pub fn update(&mut self, msg: Message) {
        if self.state.help_visible {
            if msg.is_terminating() {
                self.should_quit = true;
            } else {
                self.state.dismiss_help();
            }
            return;
        }

        let editing = self.state.editing().is_some();

        // The edited row keeps the selection and focus until the edit ends
        if editing && msg.is_navigation() {
            return;
        }

        match msg {
            Message::Quit => {
                self.should_quit = true;
            }
            Message::ToggleHelp => {
                if !editing {
                    self.state.toggle_help();
                }
            }
            Message::Escape => {
                // Contextual: cancel the edit, then leave the list, then clear input
                if editing {
                    self.state.cancel_editing();
                } else if self.state.focus == Focus::List {
                    self.state.focus_input();
                } else {
                    self.state.new_task_input_mut().clear();
                }
            }
            Message::SwitchFocus => self.state.toggle_focus(),
            Message::NavigateUp => {
                if self.state.focus == Focus::List {
                    self.state.navigate_up();
                }
            }
            Message::NavigateDown => match self.state.focus {
                Focus::Input => self.state.focus_list(),
                Focus::List => self.state.navigate_down(),
            },
            Message::InputChar { .. }
            | Message::InputBackspace
            | Message::InputDelete
            | Message::CursorLeft
            | Message::CursorRight
            | Message::CursorHome
            | Message::CursorEnd => {
                if let Some(input) = self.state.active_input_mut() {
                    apply_text_input(input, &msg);
                }
            }
            Message::Submit => {
                if let Some(id) = self.state.editing_id() {
                    self.state.save_editing(id);
                } else if self.state.focus == Focus::Input {
                    self.state.add_task();
                }
            }
            Message::ToggleComplete => {
                if let Some(id) = self.selected_in_list() {
                    self.state.toggle_complete(id);
                }
            }
            Message::StartEditing => {
                if let Some(id) = self.selected_in_list() {
                    self.state.start_editing(id);
                }
            }
            Message::DeleteTask => {
                if let Some(id) = self.selected_in_list() {
                    self.state.delete_task(id);
                }
            }
            Message::ClickAt { column, row } => {
                self.handle_click(column, row, Instant::now());
            }
        }
    }

    /// Returns the selected task's id while the list has focus.
    fn selected_in_list(&self) -> Option<TaskId> {
        if self.state.focus == Focus::List {
            self.state.selected_id()
        } else {
            None
        }
    }

    /// Handles a mouse click at the given coordinates.
    ///
    /// A click on a row control acts on that row: the checkbox toggles it,
    /// `[e]` starts editing it and `[d]` deletes it, while the save and cancel
    /// buttons end the edit in progress. Clicking elsewhere on a row selects
    /// it, and a second click on the same row within the configured
    /// double-click window starts editing it. Clicking the input box focuses
    /// it unless a task is being edited.
    fn handle_click(&mut self, column: u16, row: u16, now: Instant) {
        let Some(layout) = ScreenLayout::compute(self.last_area) else {
            return;
        };
        let position = Position::new(column, row);
        let editing = self.state.editing().is_some();

        if layout.input.contains(position) {
            if !editing {
                self.state.focus_input();
            }
            self.last_click = None;
            return;
        }

        let inner = layout.list_inner();
        if !inner.contains(position) {
            return;
        }
        let Some(index) = task_index_at(&self.state, inner, row) else {
            return;
        };
        let Some(id) = self.state.tasks().get_index(index).map(|t| t.id) else {
            return;
        };

        let is_edited_row = self.state.is_editing(id);
        if let Some(control) = row_control_at(column - inner.x, inner.width, is_edited_row) {
            debug!(task_id = %id, ?control, "row control clicked");
            match control {
                RowControl::Checkbox => self.state.toggle_complete(id),
                RowControl::Edit => self.state.start_editing(id),
                RowControl::Delete => self.state.delete_task(id),
                RowControl::Save => self.state.save_editing(id),
                RowControl::Cancel => self.state.cancel_editing(),
            }
            self.last_click = None;
            return;
        }

        // Clicks on the edit text belong to the edit field
        if is_edited_row {
            return;
        }

        let window = self.config.input.double_click_window();
        let is_double_click = self
            .last_click
            .is_some_and(|(at, prev)| prev == id && now.saturating_duration_since(at) <= window);

        if is_double_click {
            debug!(task_id = %id, "double click on task");
            self.state.start_editing(id);
            self.last_click = None;
        } else {
            if !editing {
                self.state.focus = Focus::List;
                self.state.selected = Some(index);
            }
            self.last_click = Some((now, id));
        }
    }

    /// Renders the application UI to the given frame.
    ///
    /// Implements graceful degradation for small terminal sizes:
    /// - If terminal is below minimum dimensions, shows a "terminal too small" message.
    /// - If terminal is tight, hides the header to reclaim space.
    /// - Otherwise, renders normally with header.
    ///
    /// The terminal cursor is placed in the active text field, if any.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.last_area = area;

        let Some(layout) = ScreenLayout::compute(area) else {
            self.render_terminal_too_small(frame, area);
            return;
        };

        if let Some(header) = layout.header {
            self.render_header(frame, header);
        }

        self.state
            .scroll_to_selection(usize::from(layout.list_inner().height));

        let mode = self.input_mode();
        let buf = frame.buffer_mut();

        let input_cursor = render_task_input(
            self.state.new_task_input(),
            &self.config.ui.input_placeholder,
            mode == InputMode::Typing,
            layout.input,
            buf,
        );
        let edit_cursor =
            render_task_list(&self.state, &self.config.ui.empty_message, layout.list, buf);
        render_summary(self.state.summary(), layout.summary, buf);
        render_status_bar(mode, layout.status, buf);

        // Render help overlay on top if visible
        if self.state.help_visible {
            render_help_overlay(area, buf);
        }

        let cursor = match mode {
            InputMode::Typing => input_cursor,
            InputMode::Editing => edit_cursor,
            InputMode::Browsing | InputMode::Help => None,
        };
        if let Some((x, y)) = cursor {
            frame.set_cursor_position(Position::new(x, y));
        }
    }

    /// Renders a message indicating the terminal is too small.
    fn render_terminal_too_small(&self, frame: &mut Frame, area: Rect) {
        let message = format!(
            "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );

        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .wrap(ratatui::widgets::Wrap { trim: false });

        // Center the message vertically
        let vertical_offset = area.height.saturating_sub(2) / 2;
        let centered_area = Rect {
            x: area.x,
            y: area.y + vertical_offset,
            width: area.width,
            height: area.height.saturating_sub(vertical_offset),
        };

        frame.render_widget(paragraph, centered_area);
    }

    /// Runs the main application loop.
    ///
    /// This function blocks until the user quits the application.
    /// It polls for events, updates state, and renders the UI.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use checklist_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let mut app = App::new();
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        info!("checklist started");

        loop {
            // Render
            terminal.draw(|frame| self.view(frame))?;

            // Poll for events (keyboard and mouse)
            if let Some(event) = poll_event()? {
                if let Some(msg) = event_to_message(&event, self.input_mode()) {
                    self.update(msg);
                }
            }

            // Check for quit
            if self.should_quit {
                break;
            }
        }

        let summary = self.state.summary();
        info!(
            total = summary.total,
            completed = summary.completed,
            "checklist closed"
        );
        Ok(())
    }

    /// Renders the header bar with title and help cue.
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        // Create the block first to get inner area (with rounded borders)
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Split inner area: title left, help cue right
        let [title_area, help_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(17), // "Press ? for help" = 16 chars + padding
        ])
        .areas(inner);

        let title = Paragraph::new(Line::from(Span::styled(
            self.config.ui.title.as_str(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(title, title_area);

        let help_cue = Paragraph::new(Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" for help", Style::default().fg(Color::DarkGray)),
        ]))
        .alignment(Alignment::Right);
        frame.render_widget(help_cue, help_area);
    }
}

/// Applies a text-editing message to an input buffer.
fn apply_text_input(input: &mut TextInput, msg: &Message) {
    match msg {
        Message::InputChar { ch } => input.insert_char(*ch),
        Message::InputBackspace => input.backspace(),
        Message::InputDelete => input.delete(),
        Message::CursorLeft => input.move_left(),
        Message::CursorRight => input.move_right(),
        Message::CursorHome => input.move_home(),
        Message::CursorEnd => input.move_end(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::test_utils::buffer_to_string;

    /// Terminal area used for click tests; the first task row is at y = 7.
    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };
    const FIRST_ROW: u16 = 7;
    const CHECKBOX_X: u16 = 4;
    const TEXT_X: u16 = 10;
    /// Row buttons, right-aligned in the 78-column list interior.
    const EDIT_X: u16 = 73;
    const DELETE_X: u16 = 77;
    const SAVE_X: u16 = 60;
    const CANCEL_X: u16 = 72;

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.update(Message::InputChar { ch });
        }
    }

    fn app_with(texts: &[&str]) -> App {
        let mut app = App::new();
        for text in texts {
            type_text(&mut app, text);
            app.update(Message::Submit);
        }
        app.last_area = AREA;
        app
    }

    fn task_texts(app: &App) -> Vec<&str> {
        app.state.tasks().iter().map(|t| t.text.as_str()).collect()
    }

    fn render(app: &mut App, width: u16, height: u16) -> Terminal<TestBackend> {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| app.view(frame)).unwrap();
        terminal
    }

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn app_new_starts_empty_in_typing_mode() {
        let app = App::new();
        assert!(app.state().tasks().is_empty());
        assert!(!app.should_quit());
        assert_eq!(app.input_mode(), InputMode::Typing);
        assert_eq!(app.config(), &Config::default());
    }

    #[test]
    fn app_quit_message_sets_should_quit() {
        let mut app = App::new();
        app.update(Message::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn app_typing_and_submit_adds_task() {
        let app = app_with(&["Buy milk"]);

        assert_eq!(task_texts(&app), ["Buy milk"]);
        assert!(app.state.new_task_input().is_empty());
    }

    #[test]
    fn app_submit_blank_input_is_noop() {
        let mut app = App::new();
        type_text(&mut app, "   ");
        app.update(Message::Submit);

        assert!(app.state.tasks().is_empty());
        assert_eq!(app.state.new_task_input().value(), "   ");
    }

    #[test]
    fn app_cursor_messages_edit_input() {
        let mut app = App::new();
        type_text(&mut app, "ac");
        app.update(Message::CursorLeft);
        type_text(&mut app, "b");
        app.update(Message::CursorHome);
        app.update(Message::InputDelete);
        app.update(Message::CursorEnd);
        app.update(Message::InputBackspace);

        assert_eq!(app.state.new_task_input().value(), "b");
    }

    #[test]
    fn app_escape_clears_input() {
        let mut app = App::new();
        type_text(&mut app, "draft");
        app.update(Message::Escape);
        assert!(app.state.new_task_input().is_empty());
    }

    #[test]
    fn app_navigate_down_moves_into_list() {
        let mut app = app_with(&["A", "B"]);

        app.update(Message::NavigateDown);
        assert_eq!(app.input_mode(), InputMode::Browsing);
        assert_eq!(app.state.selected, Some(0));

        app.update(Message::NavigateDown);
        assert_eq!(app.state.selected, Some(1));
        app.update(Message::NavigateUp);
        assert_eq!(app.state.selected, Some(0));

        app.update(Message::Escape);
        assert_eq!(app.input_mode(), InputMode::Typing);
    }

    #[test]
    fn app_task_actions_require_list_focus() {
        let mut app = app_with(&["A"]);

        app.update(Message::ToggleComplete);
        app.update(Message::DeleteTask);
        assert_eq!(app.state.summary().completed, 0);
        assert_eq!(app.state.tasks().len(), 1);
    }

    #[test]
    fn app_toggle_and_delete_selected_task() {
        let mut app = app_with(&["Buy milk"]);
        app.update(Message::SwitchFocus);

        app.update(Message::ToggleComplete);
        let summary = app.state.summary();
        assert_eq!(
            (summary.total, summary.completed, summary.remaining),
            (1, 1, 0)
        );

        app.update(Message::DeleteTask);
        assert!(app.state.tasks().is_empty());
        assert_eq!(app.input_mode(), InputMode::Typing);
    }

    #[test]
    fn app_delete_first_of_two() {
        let mut app = app_with(&["A", "B"]);
        assert_eq!(task_texts(&app), ["A", "B"]);

        app.update(Message::SwitchFocus);
        app.update(Message::DeleteTask);
        assert_eq!(task_texts(&app), ["B"]);
    }

    #[test]
    fn app_edit_and_save() {
        let mut app = app_with(&["Buy milk"]);
        app.update(Message::SwitchFocus);
        app.update(Message::StartEditing);
        assert_eq!(app.input_mode(), InputMode::Editing);

        type_text(&mut app, " today");
        app.update(Message::Submit);

        assert_eq!(task_texts(&app), ["Buy milk today"]);
        assert_eq!(app.input_mode(), InputMode::Browsing);
    }

    #[test]
    fn app_edit_escape_cancels() {
        let mut app = app_with(&["Buy milk"]);
        app.update(Message::SwitchFocus);
        app.update(Message::StartEditing);
        app.update(Message::InputBackspace);
        app.update(Message::Escape);

        assert_eq!(task_texts(&app), ["Buy milk"]);
        assert!(app.state.editing().is_none());
        // The first Escape only cancels the edit
        assert_eq!(app.input_mode(), InputMode::Browsing);
    }

    #[test]
    fn app_edit_does_not_touch_new_task_input() {
        let mut app = app_with(&["A"]);
        type_text(&mut app, "pending");
        app.update(Message::SwitchFocus);
        app.update(Message::StartEditing);
        type_text(&mut app, "!");

        assert_eq!(app.state.new_task_input().value(), "pending");
        assert_eq!(
            app.state.editing().map(|e| e.text().value()),
            Some("A!")
        );
    }

    #[test]
    fn app_navigation_ignored_while_editing() {
        let mut app = app_with(&["A", "B"]);
        app.update(Message::SwitchFocus);
        app.update(Message::StartEditing);

        app.update(Message::NavigateDown);
        app.update(Message::SwitchFocus);
        assert_eq!(app.state.selected, Some(0));
        assert_eq!(app.input_mode(), InputMode::Editing);
    }

    #[test]
    fn app_toggle_help_shows_and_hides() {
        let mut app = app_with(&["A"]);
        app.update(Message::SwitchFocus);

        app.update(Message::ToggleHelp);
        assert_eq!(app.input_mode(), InputMode::Help);
        app.update(Message::ToggleHelp);
        assert!(!app.state.help_visible);
    }

    #[test]
    fn app_help_blocks_other_messages() {
        let mut app = app_with(&["A"]);
        app.update(Message::SwitchFocus);
        app.update(Message::ToggleHelp);

        app.update(Message::DeleteTask);
        assert!(!app.state.help_visible);
        assert_eq!(app.state.tasks().len(), 1);
    }

    #[test]
    fn app_quit_works_with_help_visible() {
        let mut app = App::new();
        app.state.toggle_help();
        app.update(Message::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn app_click_checkbox_toggles() {
        let mut app = app_with(&["A"]);
        let now = Instant::now();

        app.handle_click(CHECKBOX_X, FIRST_ROW, now);
        assert_eq!(app.state.summary().completed, 1);
        // Toggling does not change focus
        assert_eq!(app.state.focus, Focus::Input);

        app.handle_click(CHECKBOX_X, FIRST_ROW, now);
        assert_eq!(app.state.summary().completed, 0);
        assert!(app.state.editing().is_none());
    }

    #[test]
    fn app_click_row_selects_task() {
        let mut app = app_with(&["A", "B"]);

        app.handle_click(TEXT_X, FIRST_ROW + 1, Instant::now());

        assert_eq!(app.state.focus, Focus::List);
        assert_eq!(app.state.selected, Some(1));
        assert!(app.state.editing().is_none());
    }

    #[test]
    fn app_double_click_starts_editing() {
        let mut app = app_with(&["A", "B"]);
        let now = Instant::now();

        app.handle_click(TEXT_X, FIRST_ROW + 1, now);
        app.handle_click(TEXT_X, FIRST_ROW + 1, now + Duration::from_millis(150));

        let id = app.state.tasks().tasks()[1].id;
        assert_eq!(app.state.editing_id(), Some(id));
    }

    #[test]
    fn app_slow_double_click_only_selects() {
        let mut app = app_with(&["A"]);
        let now = Instant::now();

        app.handle_click(TEXT_X, FIRST_ROW, now);
        app.handle_click(TEXT_X, FIRST_ROW, now + Duration::from_millis(900));

        assert!(app.state.editing().is_none());
        assert_eq!(app.state.selected, Some(0));
    }

    #[test]
    fn app_double_click_on_different_rows_does_not_edit() {
        let mut app = app_with(&["A", "B"]);
        let now = Instant::now();

        app.handle_click(TEXT_X, FIRST_ROW, now);
        app.handle_click(TEXT_X, FIRST_ROW + 1, now + Duration::from_millis(100));

        assert!(app.state.editing().is_none());
        assert_eq!(app.state.selected, Some(1));
    }

    #[test]
    fn app_double_click_window_follows_config() {
        let mut config = Config::default();
        config.input.double_click_ms = 1000;
        let mut app = App::with_config(config);
        type_text(&mut app, "A");
        app.update(Message::Submit);
        app.last_area = AREA;
        let now = Instant::now();

        app.handle_click(TEXT_X, FIRST_ROW, now);
        app.handle_click(TEXT_X, FIRST_ROW, now + Duration::from_millis(900));

        assert!(app.state.editing().is_some());
    }

    fn numbered_app(count: usize) -> App {
        let texts: Vec<String> = (0..count).map(|i| format!("Task {i}")).collect();
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        app_with(&refs)
    }

    #[test]
    fn app_double_click_in_overflowing_list_edits_clicked_task() {
        let mut app = numbered_app(20);
        let now = Instant::now();

        render(&mut app, 80, 24);
        app.handle_click(TEXT_X, FIRST_ROW + 10, now);
        assert_eq!(app.state.selected, Some(10));

        // The run loop redraws between the two clicks
        render(&mut app, 80, 24);
        app.handle_click(TEXT_X, FIRST_ROW + 10, now + Duration::from_millis(100));

        let id = app.state.tasks().tasks()[10].id;
        assert_eq!(app.state.editing_id(), Some(id));
        assert_eq!(app.state.selected, Some(10));
    }

    #[test]
    fn app_click_maps_rows_through_scroll_offset() {
        let mut app = numbered_app(20);
        app.update(Message::SwitchFocus);
        app.update(Message::NavigateUp);
        assert_eq!(app.state.selected, Some(19));

        let content = screen(&render(&mut app, 80, 24));
        assert!(content.contains("> [ ] Task 19"));
        assert!(!content.contains("Task 5 "));

        // Fourteen rows fit, so the first visible task is Task 6
        app.handle_click(TEXT_X, FIRST_ROW, Instant::now());
        assert_eq!(app.state.selected, Some(6));
        render(&mut app, 80, 24);
        assert_eq!(app.state.scroll_offset(), 6);
    }

    #[test]
    fn app_click_edit_button_starts_editing() {
        let mut app = app_with(&["A", "B"]);

        app.handle_click(EDIT_X, FIRST_ROW + 1, Instant::now());

        let id = app.state.tasks().tasks()[1].id;
        assert_eq!(app.state.editing_id(), Some(id));
        assert_eq!(app.input_mode(), InputMode::Editing);
    }

    #[test]
    fn app_click_delete_button_removes_task() {
        let mut app = app_with(&["A", "B"]);

        app.handle_click(DELETE_X, FIRST_ROW, Instant::now());

        assert_eq!(task_texts(&app), ["B"]);
    }

    #[test]
    fn app_click_save_button_commits_edit() {
        let mut app = app_with(&["Buy milk"]);
        app.handle_click(EDIT_X, FIRST_ROW, Instant::now());
        type_text(&mut app, " today");

        app.handle_click(SAVE_X, FIRST_ROW, Instant::now());

        assert_eq!(task_texts(&app), ["Buy milk today"]);
        assert!(app.state.editing().is_none());
    }

    #[test]
    fn app_click_cancel_button_discards_edit() {
        let mut app = app_with(&["Buy milk"]);
        app.handle_click(EDIT_X, FIRST_ROW, Instant::now());
        type_text(&mut app, " today");

        app.handle_click(CANCEL_X, FIRST_ROW, Instant::now());

        assert_eq!(task_texts(&app), ["Buy milk"]);
        assert!(app.state.editing().is_none());
    }

    #[test]
    fn app_click_on_edit_text_keeps_editing() {
        let mut app = app_with(&["Buy milk"]);
        app.handle_click(EDIT_X, FIRST_ROW, Instant::now());

        let now = Instant::now();
        app.handle_click(TEXT_X, FIRST_ROW, now);
        app.handle_click(TEXT_X, FIRST_ROW, now + Duration::from_millis(50));

        assert_eq!(task_texts(&app), ["Buy milk"]);
        assert!(app.state.editing().is_some());
    }

    #[test]
    fn app_row_buttons_line_up_with_rendered_rows() {
        let mut app = app_with(&["Buy milk"]);
        let terminal = render(&mut app, 80, 24);
        let buffer = terminal.backend().buffer();

        assert_eq!(buffer[(EDIT_X - 1, FIRST_ROW)].symbol(), "[");
        assert_eq!(buffer[(EDIT_X, FIRST_ROW)].symbol(), "e");
        assert_eq!(buffer[(DELETE_X, FIRST_ROW)].symbol(), "d");

        app.handle_click(EDIT_X, FIRST_ROW, Instant::now());
        let terminal = render(&mut app, 80, 24);
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(SAVE_X - 3, FIRST_ROW)].symbol(), "E");
        assert_eq!(buffer[(CANCEL_X - 3, FIRST_ROW)].symbol(), "E");
    }

    #[test]
    fn app_click_below_tasks_does_nothing() {
        let mut app = app_with(&["A"]);
        app.handle_click(TEXT_X, FIRST_ROW + 3, Instant::now());

        assert_eq!(app.state.focus, Focus::Input);
        assert_eq!(app.state.selected, None);
    }

    #[test]
    fn app_click_input_returns_focus() {
        let mut app = app_with(&["A"]);
        app.update(Message::SwitchFocus);

        app.handle_click(10, 4, Instant::now());
        assert_eq!(app.state.focus, Focus::Input);
    }

    #[test]
    fn app_click_ignored_when_too_small() {
        let mut app = app_with(&["A"]);
        app.last_area = Rect::new(0, 0, 20, 5);

        app.handle_click(4, 1, Instant::now());
        assert_eq!(app.state.summary().completed, 0);
    }

    #[test]
    fn app_click_message_dismisses_help() {
        let mut app = app_with(&["A"]);
        app.state.toggle_help();

        app.update(Message::ClickAt {
            column: CHECKBOX_X,
            row: FIRST_ROW,
        });
        assert!(!app.state.help_visible);
        assert_eq!(app.state.summary().completed, 0);
    }

    // --- Rendering tests ---

    #[test]
    fn app_view_shows_too_small_message_when_height_below_minimum() {
        let mut app = App::new();
        let terminal = render(&mut app, 80, MIN_HEIGHT - 1);

        assert!(screen(&terminal).contains("Terminal too small"));
    }

    #[test]
    fn app_view_shows_too_small_message_when_width_below_minimum() {
        let mut app = App::new();
        let terminal = render(&mut app, MIN_WIDTH - 1, 24);

        // The message wraps in narrow terminals
        assert!(screen(&terminal).contains("Terminal too"));
    }

    #[test]
    fn app_view_shows_header_when_terminal_large_enough() {
        let mut app = App::new();
        let terminal = render(&mut app, 80, 24);

        let content = screen(&terminal);
        assert!(content.contains("Checklist"));
        assert!(content.contains("Press ? for help"));
    }

    #[test]
    fn app_view_hides_header_in_compact_mode() {
        let mut app = App::new();
        let terminal = render(&mut app, 80, MIN_HEIGHT);

        let content = screen(&terminal);
        assert!(!content.contains("Press ? for help"));
        assert!(content.contains("New task"));
    }

    #[test]
    fn app_view_uses_configured_strings() {
        let mut config = Config::default();
        config.ui.title = "Errands".to_string();
        config.ui.empty_message = "Nothing to do".to_string();
        config.ui.input_placeholder = "What next?".to_string();
        let mut app = App::with_config(config);

        let content = screen(&render(&mut app, 80, 24));
        assert!(content.contains("Errands"));
        assert!(content.contains("Nothing to do"));
        assert!(content.contains("What next?"));
    }

    #[test]
    fn app_view_empty_list_has_placeholder_and_no_summary() {
        let mut app = App::new();
        let content = screen(&render(&mut app, 80, 24));

        assert!(content.contains("No tasks yet. Add the first one!"));
        assert!(!content.contains("Total:"));
    }

    #[test]
    fn app_view_shows_summary_with_tasks() {
        let mut app = app_with(&["Buy milk", "Send report"]);
        app.update(Message::SwitchFocus);
        app.update(Message::ToggleComplete);

        let content = screen(&render(&mut app, 80, 24));
        assert!(content.contains("> [x] Buy milk"));
        assert!(content.contains("Total: 2 | Completed: 1 | Remaining: 1"));
        assert!(!content.contains("No tasks yet"));
    }

    #[test]
    fn app_view_places_cursor_in_input() {
        let mut app = App::new();
        type_text(&mut app, "abc");

        let mut terminal = render(&mut app, 80, 24);
        let cursor = terminal.get_cursor_position().unwrap();
        assert_eq!(cursor, Position::new(4, 4));
    }

    #[test]
    fn app_view_places_cursor_in_edit_row() {
        let mut app = app_with(&["Buy milk"]);
        app.update(Message::SwitchFocus);
        app.update(Message::StartEditing);

        let mut terminal = render(&mut app, 80, 24);
        let cursor = terminal.get_cursor_position().unwrap();
        assert_eq!(cursor, Position::new(1 + 6 + 8, FIRST_ROW));
    }

    #[test]
    fn app_view_renders_help_overlay() {
        let mut app = app_with(&["A"]);
        app.update(Message::SwitchFocus);
        app.update(Message::ToggleHelp);

        let content = screen(&render(&mut app, 80, 24));
        assert!(content.contains("Press any key to close"));
    }
}
