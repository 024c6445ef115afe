//! Single-line text input buffer.
//!
//! [`TextInput`] backs both the new-task field and the inline edit field.
//! The cursor is a byte offset into the value and always sits on a char
//! boundary.

use unicode_width::UnicodeWidthChar;

/// A single-line editable text buffer with a cursor.
///
/// # Examples
///
/// ```
/// use checklist_tui::input::TextInput;
///
/// let mut input = TextInput::new();
/// input.insert_char('h');
/// input.insert_char('i');
/// input.move_left();
/// input.insert_char('!');
/// assert_eq!(input.value(), "h!i");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    /// Creates an empty input.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an input holding `value`, with the cursor at the end.
    #[must_use]
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.len();
        Self { value, cursor }
    }

    /// Returns the current text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the cursor position as a byte offset.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns `true` if the input holds no text at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Inserts a character at the cursor position.
    pub fn insert_char(&mut self, ch: char) {
        self.value.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    /// Deletes the character before the cursor (backspace).
    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.value.remove(prev);
            self.cursor = prev;
        }
    }

    /// Deletes the character under the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.value.len() {
            self.value.remove(self.cursor);
        }
    }

    /// Moves the cursor one character to the left.
    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    /// Moves the cursor one character to the right.
    pub fn move_right(&mut self) {
        if let Some(ch) = self.value[self.cursor..].chars().next() {
            self.cursor += ch.len_utf8();
        }
    }

    /// Moves the cursor to the start of the text.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Moves the cursor to the end of the text.
    pub fn move_end(&mut self) {
        self.cursor = self.value.len();
    }

    /// Clears the text.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Returns the slice of text visible in a field `width` cells wide,
    /// together with the cursor column within that slice.
    ///
    /// Widths are terminal cells, so double-width characters count twice.
    /// The view scrolls horizontally so the cursor cell is always visible.
    ///
    /// # Examples
    ///
    /// ```
    /// use checklist_tui::input::TextInput;
    ///
    /// let input = TextInput::with_value("abcdefgh");
    /// assert_eq!(input.visible_window(4), ("fgh", 3));
    ///
    /// let input = TextInput::with_value("日本語");
    /// assert_eq!(input.visible_window(5), ("本語", 4));
    /// ```
    #[must_use]
    pub fn visible_window(&self, width: u16) -> (&str, u16) {
        let width = usize::from(width);
        if width == 0 {
            return ("", 0);
        }

        // Walk back from the cursor, keeping one cell free for the cursor
        let mut start = self.cursor;
        let mut column = 0;
        for (idx, ch) in self.value[..self.cursor].char_indices().rev() {
            let ch_width = ch.width().unwrap_or(0);
            if column + ch_width + 1 > width {
                break;
            }
            column += ch_width;
            start = idx;
        }

        let mut end = start;
        let mut used = 0;
        for (idx, ch) in self.value[start..].char_indices() {
            let ch_width = ch.width().unwrap_or(0);
            if used + ch_width > width {
                break;
            }
            used += ch_width;
            end = start + idx + ch.len_utf8();
        }

        let column = u16::try_from(column).unwrap_or(u16::MAX);
        (&self.value[start..end], column)
    }

    /// Returns the byte offset of the character before the cursor.
    fn prev_boundary(&self) -> Option<usize> {
        self.value[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }
}
