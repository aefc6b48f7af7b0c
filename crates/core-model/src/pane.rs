//! Panes: scrolled viewports onto buffers.
//!
//! A pane tracks a visible range `[start, end)` of cursors into its buffer.
//! `start` is always the start of a line; `end` is the start of the first line
//! not shown (or the buffer length), or unbounded until the pane is first laid
//! out. Several panes may show the same buffer with independent ranges.
//!
//! Invariant after [`Pane::recompute`] and [`Pane::frame`]:
//! `start <= point <= end`.

use crate::layout::LayoutRegion;
use core_state::BufferId;
use core_text::motion::{line_end, line_index, line_start, next_line_start};
use core_text::{Cursor, GapBuffer};
use std::borrow::Cow;

#[derive(Debug, Clone)]
pub struct Pane {
    pub buffer: BufferId,
    pub region: LayoutRegion,
    start: Cursor,
    /// `None` while unbounded.
    end: Option<Cursor>,
}

/// Lines to draw for one pane plus the caret position when the pane is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneFrame<'a> {
    /// Raw line bytes without the trailing `\n`, truncated to the pane width.
    pub lines: Vec<Cow<'a, [u8]>>,
    /// (row, column) of the point, relative to the pane origin.
    pub caret: Option<(usize, usize)>,
}

impl Pane {
    pub fn new(buffer: BufferId, region: LayoutRegion, point: Cursor) -> Self {
        Self {
            buffer,
            region,
            start: point,
            end: None,
        }
    }

    pub fn start(&self) -> Cursor {
        self.start
    }

    pub fn end(&self) -> Option<Cursor> {
        self.end
    }

    /// Whether `cursor` lies in the visible range.
    pub fn contains(&self, cursor: Cursor) -> bool {
        self.start <= cursor && self.end.is_none_or(|end| cursor <= end)
    }

    /// Bring the range back around the buffer's point, scrolling one line at a time.
    pub fn recompute(&mut self, text: &GapBuffer) {
        let len = text.len();
        let point = text.point();
        let mut start = line_start(text, self.start.min(len));
        if point < start {
            start = line_start(text, point);
        }
        let Some(end) = self.end else {
            self.start = start;
            return;
        };
        let mut end = end.min(len);
        if end < len {
            end = line_start(text, end);
        }
        end = end.max(start);
        while end < point {
            end = next_line_start(text, end);
            if end != len {
                start = next_line_start(text, start);
            }
        }
        self.start = start.min(line_start(text, point));
        self.end = Some(end);
        tracing::trace!(target: "model.pane", start = self.start, end, point, "recompute");
    }

    /// Lay out at most `rows` lines from `start`, scrolling so the point's line is among them.
    pub fn frame<'a>(
        &mut self,
        text: &'a GapBuffer,
        rows: usize,
        columns: usize,
        active: bool,
    ) -> PaneFrame<'a> {
        self.recompute(text);
        if rows == 0 {
            return PaneFrame {
                lines: Vec::new(),
                caret: None,
            };
        }
        let len = text.len();
        let point = text.point();
        let point_line = line_start(text, point);
        let above = line_index(text, point_line) - line_index(text, self.start);
        for _ in rows..=above {
            self.start = next_line_start(text, self.start);
        }

        let mut lines = Vec::with_capacity(rows);
        let mut caret = None;
        let mut cursor = self.start;
        let first_undrawn = loop {
            if lines.len() == rows {
                break cursor;
            }
            let eol = line_end(text, cursor);
            lines.push(text.slice(cursor..eol.min(cursor + columns)));
            if active && cursor == point_line {
                // Point past the visible columns parks on the last one.
                let column = (point - cursor).min(columns.saturating_sub(1));
                caret = Some((lines.len() - 1, column));
            }
            if eol == len {
                break len;
            }
            cursor = eol + 1;
        };
        self.end = Some(first_undrawn);
        PaneFrame { lines, caret }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn region() -> LayoutRegion {
        LayoutRegion::new(0, 0, 80, 24)
    }

    fn text(s: &str, point: usize) -> GapBuffer {
        let mut b = GapBuffer::from_bytes(s.as_bytes());
        b.set_point(point);
        b
    }

    fn lines(frame: &PaneFrame<'_>) -> Vec<String> {
        frame
            .lines
            .iter()
            .map(|l| String::from_utf8_lossy(l).into_owned())
            .collect()
    }

    #[test]
    fn new_pane_starts_at_point_unbounded() {
        let p = Pane::new(BufferId(0), region(), 7);
        assert_eq!(p.start(), 7);
        assert_eq!(p.end(), None);
    }

    #[test]
    fn recompute_snaps_start_to_line_start() {
        let b = text("abc\ndef\nghi", 5);
        let mut p = Pane::new(BufferId(0), region(), 5);
        p.recompute(&b);
        assert_eq!(p.start(), 4);
        assert!(p.contains(5));
    }

    #[test]
    fn recompute_scrolls_up_when_point_above_start() {
        let b = text("a\nb\nc\nd", 2);
        let mut p = Pane::new(BufferId(0), region(), 6);
        p.recompute(&b);
        assert_eq!(p.start(), 2);
    }

    #[test]
    fn recompute_scrolls_forward_one_line_at_a_time() {
        // lines start at 0, 2, 4, 6, 8
        let mut b = text("a\nb\nc\nd\ne", 0);
        let mut p = Pane::new(BufferId(0), region(), 0);
        p.frame(&b, 2, 80, true);
        assert_eq!((p.start(), p.end()), (0, Some(4)));
        b.set_point(5);
        p.recompute(&b);
        assert_eq!((p.start(), p.end()), (2, Some(6)));
        b.set_point(9);
        p.recompute(&b);
        // end reached the buffer end, so start stops advancing
        assert_eq!((p.start(), p.end()), (4, Some(9)));
    }

    #[test]
    fn recompute_clamps_after_content_shrinks() {
        let mut b = text("line one\nline two\nline three", 27);
        let mut p = Pane::new(BufferId(0), region(), 0);
        p.frame(&b, 24, 80, true);
        b.clear();
        p.recompute(&b);
        assert_eq!((p.start(), p.end()), (0, Some(0)));
    }

    #[test]
    fn frame_truncates_and_reports_caret() {
        let b = text("hello world\nsecond\n", 14);
        let mut p = Pane::new(BufferId(0), region(), 0);
        let f = p.frame(&b, 10, 5, true);
        assert_eq!(lines(&f), vec!["hello", "secon", ""]);
        assert_eq!(f.caret, Some((1, 2)));
        assert_eq!(p.end(), Some(b.len()));
    }

    #[test]
    fn caret_past_visible_columns_stays_on_last_column() {
        let b = text("abcdefgh", 8);
        let mut p = Pane::new(BufferId(0), region(), 0);
        let f = p.frame(&b, 2, 3, true);
        assert_eq!(lines(&f), vec!["abc"]);
        assert_eq!(f.caret, Some((0, 2)));
    }

    #[test]
    fn frame_scrolls_point_line_into_view() {
        let b = text("0\n1\n2\n3\n4\n5", 10);
        let mut p = Pane::new(BufferId(0), region(), 0);
        let f = p.frame(&b, 3, 80, true);
        assert_eq!(lines(&f), vec!["3", "4", "5"]);
        assert_eq!(f.caret, Some((2, 0)));
        assert_eq!(p.start(), 6);
        assert_eq!(p.end(), Some(11));
    }

    #[test]
    fn frame_end_is_first_undrawn_line() {
        let b = text("0\n1\n2\n3", 0);
        let mut p = Pane::new(BufferId(0), region(), 0);
        let f = p.frame(&b, 2, 80, false);
        assert_eq!(lines(&f), vec!["0", "1"]);
        assert_eq!(f.caret, None);
        assert_eq!(p.end(), Some(4));
    }

    #[test]
    fn frame_with_no_rows_keeps_range() {
        let b = text("abc", 1);
        let mut p = Pane::new(BufferId(0), region(), 0);
        let f = p.frame(&b, 0, 80, true);
        assert!(f.lines.is_empty());
        assert!(p.contains(1));
    }
}
