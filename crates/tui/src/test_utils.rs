//! Test utilities for the TUI crate.

use ratatui::buffer::Buffer;

/// Converts a ratatui [`Buffer`] to a string, one line per row.
///
/// Trailing spaces are trimmed from each line so that snapshots and
/// `contains` assertions do not depend on the buffer width.
#[must_use]
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buf.area.height {
        let line_start = result.len();
        for x in 0..buf.area.width {
            if let Some(cell) = buf.cell((buf.area.x + x, buf.area.y + y)) {
                result.push_str(cell.symbol());
            }
        }
        let trimmed = result[line_start..].trim_end_matches(' ').len();
        result.truncate(line_start + trimmed);
        result.push('\n');
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{layout::Rect, style::Style};

    #[test]
    fn trims_trailing_spaces_per_line() {
        let area = Rect::new(0, 0, 10, 2);
        let mut buf = Buffer::empty(area);
        buf.set_string(0, 0, "Hello", Style::default());

        assert_eq!(buffer_to_string(&buf), "Hello\n\n");
    }

    #[test]
    fn honours_buffer_offset() {
        let area = Rect::new(3, 2, 6, 1);
        let mut buf = Buffer::empty(area);
        buf.set_string(3, 2, "ok", Style::default());

        assert_eq!(buffer_to_string(&buf), "ok\n");
    }
}
