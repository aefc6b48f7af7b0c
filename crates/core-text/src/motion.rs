//! Navigation primitives.
//!
//! Pure functions of buffer content and a cursor. None of them move the
//! buffer's point; callers assign the result. Every input cursor must satisfy
//! `cursor <= buffer.len()`.

use crate::{Cursor, GapBuffer};

fn check(buffer: &GapBuffer, cursor: Cursor) {
    assert!(
        cursor <= buffer.len(),
        "cursor {cursor} out of range (len {})",
        buffer.len()
    );
}

/// One byte forward, clamped at the buffer end.
pub fn next_char(buffer: &GapBuffer, cursor: Cursor) -> Cursor {
    check(buffer, cursor);
    if cursor < buffer.len() { cursor + 1 } else { cursor }
}

/// One byte back, clamped at 0.
pub fn prev_char(buffer: &GapBuffer, cursor: Cursor) -> Cursor {
    check(buffer, cursor);
    cursor.saturating_sub(1)
}

/// Start of the line containing `cursor` (the offset after the previous `\n`, or 0).
pub fn line_start(buffer: &GapBuffer, cursor: Cursor) -> Cursor {
    check(buffer, cursor);
    let mut c = cursor;
    while c > 0 && buffer.char_at(c - 1) != b'\n' {
        c -= 1;
    }
    c
}

/// Offset of the `\n` ending the line containing `cursor`, or `len()` on the last line.
pub fn line_end(buffer: &GapBuffer, cursor: Cursor) -> Cursor {
    check(buffer, cursor);
    let len = buffer.len();
    let mut c = cursor;
    while c < len && buffer.char_at(c) != b'\n' {
        c += 1;
    }
    c
}

pub fn next_line_start(buffer: &GapBuffer, cursor: Cursor) -> Cursor {
    next_char(buffer, line_end(buffer, cursor))
}

pub fn prev_line_end(buffer: &GapBuffer, cursor: Cursor) -> Cursor {
    prev_char(buffer, line_start(buffer, cursor))
}

/// Start of the line above; the first line maps to 0.
pub fn prev_line_start(buffer: &GapBuffer, cursor: Cursor) -> Cursor {
    line_start(buffer, prev_line_end(buffer, cursor))
}

pub fn buffer_start(_buffer: &GapBuffer) -> Cursor {
    0
}

pub fn buffer_end(buffer: &GapBuffer) -> Cursor {
    buffer.len()
}

/// Length of the line containing `cursor`, excluding its `\n`.
pub fn line_length(buffer: &GapBuffer, cursor: Cursor) -> usize {
    line_end(buffer, cursor) - line_start(buffer, cursor)
}

pub fn column(buffer: &GapBuffer, cursor: Cursor) -> usize {
    cursor - line_start(buffer, cursor)
}

/// Zero-based line index of `cursor` (count of `\n` before it).
pub fn line_index(buffer: &GapBuffer, cursor: Cursor) -> usize {
    check(buffer, cursor);
    let (before, after) = buffer.segments();
    let split = before.len().min(cursor);
    let head = before[..split].iter().filter(|b| **b == b'\n').count();
    let tail = after[..cursor - split]
        .iter()
        .filter(|b| **b == b'\n')
        .count();
    head + tail
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buf(s: &str) -> GapBuffer {
        GapBuffer::from_bytes(s.as_bytes())
    }

    #[test]
    fn next_char_five_times_lands_on_newline() {
        let mut b = buf("Hello\nworld!");
        for _ in 0..5 {
            let p = next_char(&b, b.point());
            b.set_point(p);
        }
        assert_eq!(b.point(), 5);
        assert_eq!(line_end(&b, b.point()), 5);
    }

    #[test]
    fn char_motion_clamps_at_edges() {
        let b = buf("ab");
        assert_eq!(prev_char(&b, 0), 0);
        assert_eq!(next_char(&b, 2), 2);
    }

    #[test]
    fn line_start_handles_leading_newline() {
        let b = buf("\nabc");
        assert_eq!(line_start(&b, 0), 0);
        assert_eq!(line_start(&b, 1), 1);
        assert_eq!(line_start(&b, 3), 1);
    }

    #[test]
    fn line_bounds_without_newline_clamp_to_buffer() {
        let b = buf("single");
        assert_eq!(line_start(&b, 4), 0);
        assert_eq!(line_end(&b, 4), 6);
        assert_eq!(line_length(&b, 2), 6);
    }

    #[test]
    fn derived_line_motions() {
        let b = buf("ab\ncde\nf");
        assert_eq!(next_line_start(&b, 1), 3);
        assert_eq!(next_line_start(&b, 4), 7);
        assert_eq!(next_line_start(&b, 7), 8);
        assert_eq!(prev_line_end(&b, 5), 2);
        assert_eq!(prev_line_start(&b, 5), 0);
        assert_eq!(prev_line_start(&b, 1), 0);
        assert_eq!(column(&b, 5), 2);
        assert_eq!(line_length(&b, 7), 1);
    }

    #[test]
    fn line_index_counts_newlines_across_gap() {
        let mut b = buf("a\nb\nc");
        b.insert(2, b'x'); // gap now sits inside the text
        assert_eq!(line_index(&b, 0), 0);
        assert_eq!(line_index(&b, 2), 1);
        assert_eq!(line_index(&b, b.len()), 2);
    }

    #[test]
    fn buffer_bounds() {
        let b = buf("xyz");
        assert_eq!(buffer_start(&b), 0);
        assert_eq!(buffer_end(&b), 3);
    }
}
