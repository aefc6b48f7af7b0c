//! Gap buffer text storage.
//!
//! The buffer owns one byte array split into three regions:
//!
//! ```text
//! [0, gap_start)        text before the edit gap
//! [gap_start, gap_end)  free capacity (the gap)
//! [gap_end, end)        text after the gap
//! ```
//!
//! Every public operation works with a logical [`Cursor`] (an offset into the
//! content, `0 ..= len()`); translation to a physical index adds the gap size
//! once the cursor reaches `gap_start`. Content is raw single-byte units: no
//! encoding is assumed and none is enforced.
//!
//! Invariants (checked after each mutation):
//! * `gap_start <= gap_end <= end`.
//! * `point <= len()`.
//!
//! A cursor past `len()` handed to any operation is a caller defect and panics.
//! Boundary no-ops (deleting before offset 0, replacing at `len()`) are not
//! defects and report `false` instead.

use std::borrow::Cow;
use std::ops::Range;

pub mod io;
pub mod motion;

pub use io::PersistError;

/// Logical offset into a buffer's content.
pub type Cursor = usize;

#[derive(Clone)]
pub struct GapBuffer {
    data: Vec<u8>,
    gap_start: usize,
    gap_end: usize,
    point: Cursor,
}

impl GapBuffer {
    /// Create an empty buffer whose gap covers `initial_capacity` bytes.
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            data: vec![0; initial_capacity],
            gap_start: 0,
            gap_end: initial_capacity,
            point: 0,
        }
    }

    /// Build a buffer holding `bytes` with the gap parked at the end and the point at 0.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut buffer = Self::new(bytes.len().max(1));
        buffer.data[..bytes.len()].copy_from_slice(bytes);
        buffer.gap_start = bytes.len();
        buffer
    }

    /// Total allocated capacity (`end`).
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    pub fn gap_len(&self) -> usize {
        self.gap_end - self.gap_start
    }

    /// Logical content length: `end - (gap_end - gap_start)`.
    pub fn len(&self) -> usize {
        self.data.len() - self.gap_len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn point(&self) -> Cursor {
        self.point
    }

    pub fn set_point(&mut self, point: Cursor) {
        self.assert_cursor(point);
        self.point = point;
    }

    /// Physical array index for a logical cursor.
    fn index_of(&self, cursor: Cursor) -> usize {
        physical_index(cursor, self.gap_start, self.gap_end)
    }

    /// Byte at `cursor`. Panics when `cursor >= len()`.
    pub fn char_at(&self, cursor: Cursor) -> u8 {
        assert!(
            cursor < self.len(),
            "char_at cursor {cursor} out of range (len {})",
            self.len()
        );
        self.data[self.index_of(cursor)]
    }

    /// Overwrite the byte at `cursor` in place. Returns false (and changes nothing)
    /// when `cursor == len()`.
    pub fn replace(&mut self, cursor: Cursor, byte: u8) -> bool {
        self.assert_cursor(cursor);
        if cursor < self.len() {
            let idx = self.index_of(cursor);
            self.data[idx] = byte;
            true
        } else {
            false
        }
    }

    /// Insert one byte before `cursor`. The point shifts forward when it sits at or
    /// after the insertion site.
    pub fn insert(&mut self, cursor: Cursor, byte: u8) {
        self.assert_cursor(cursor);
        self.ensure_gap(1);
        self.shift_gap_to(cursor);
        self.data[self.gap_start] = byte;
        self.gap_start += 1;
        if self.point >= cursor {
            self.point += 1;
        }
        self.debug_check();
    }

    /// Insert `bytes` in order starting at `cursor`.
    pub fn insert_bytes(&mut self, cursor: Cursor, bytes: &[u8]) {
        self.assert_cursor(cursor);
        self.ensure_gap(bytes.len());
        for (offset, byte) in bytes.iter().enumerate() {
            self.insert(cursor + offset, *byte);
        }
    }

    /// Remove the byte before `cursor`. Returns false at offset 0.
    pub fn delete_backward(&mut self, cursor: Cursor) -> bool {
        self.assert_cursor(cursor);
        if cursor == 0 {
            return false;
        }
        self.shift_gap_to(cursor);
        self.gap_start -= 1;
        if self.point >= cursor {
            self.point -= 1;
        }
        self.debug_check();
        true
    }

    /// Remove the byte at `cursor`. Returns false at `len()`.
    pub fn delete_forward(&mut self, cursor: Cursor) -> bool {
        self.assert_cursor(cursor);
        if cursor >= self.len() {
            return false;
        }
        self.shift_gap_to(cursor);
        self.gap_end += 1;
        if self.point > cursor {
            self.point -= 1;
        }
        self.debug_check();
        true
    }

    /// Drop all content, keeping capacity. The point returns to 0.
    pub fn clear(&mut self) {
        self.gap_start = 0;
        self.gap_end = self.data.len();
        self.point = 0;
    }

    /// The two content segments (pre-gap, post-gap) without copying.
    pub fn segments(&self) -> (&[u8], &[u8]) {
        (&self.data[..self.gap_start], &self.data[self.gap_end..])
    }

    /// Logical content as one contiguous vector.
    pub fn contents(&self) -> Vec<u8> {
        let (before, after) = self.segments();
        let mut out = Vec::with_capacity(before.len() + after.len());
        out.extend_from_slice(before);
        out.extend_from_slice(after);
        out
    }

    /// Bytes in the logical range `[start, end)`. Borrowed when the range lies on one
    /// side of the gap, copied when it straddles it.
    pub fn slice(&self, range: Range<Cursor>) -> Cow<'_, [u8]> {
        assert!(
            range.start <= range.end && range.end <= self.len(),
            "slice {range:?} out of range (len {})",
            self.len()
        );
        let (before, after) = self.segments();
        if range.end <= self.gap_start {
            Cow::Borrowed(&before[range])
        } else if range.start >= self.gap_start {
            let shift = self.gap_start;
            Cow::Borrowed(&after[range.start - shift..range.end - shift])
        } else {
            let mut out = Vec::with_capacity(range.len());
            out.extend_from_slice(&before[range.start..]);
            out.extend_from_slice(&after[..range.end - self.gap_start]);
            Cow::Owned(out)
        }
    }

    /// Move the gap so it starts at `cursor`. Costs O(distance moved).
    fn shift_gap_to(&mut self, cursor: Cursor) {
        let gap = self.gap_len();
        if cursor < self.gap_start {
            let delta = self.gap_start - cursor;
            self.data
                .copy_within(cursor..self.gap_start, self.gap_end - delta);
            self.gap_start -= delta;
            self.gap_end -= delta;
        } else if cursor > self.gap_start {
            let delta = cursor - self.gap_start;
            self.data
                .copy_within(self.gap_end..self.gap_end + delta, self.gap_start);
            self.gap_start += delta;
            self.gap_end += delta;
        }
        debug_assert_eq!(self.gap_len(), gap, "gap shift must preserve gap size");
        self.debug_check();
    }

    /// Grow so the gap holds at least `minimum` bytes. New capacity is
    /// `max(2 * end, end + missing)` and the gap is parked at the end of the content.
    fn ensure_gap(&mut self, minimum: usize) {
        if self.gap_len() >= minimum {
            return;
        }
        let old_end = self.data.len();
        self.shift_gap_to(self.len());
        let missing = minimum - self.gap_len();
        let new_end = (2 * old_end).max(old_end + missing);
        self.data.resize(new_end, 0);
        self.gap_end = new_end;
        tracing::trace!(target: "text.gap", old_end, new_end, minimum, "grow");
        debug_assert!(self.gap_len() >= minimum);
    }

    fn assert_cursor(&self, cursor: Cursor) {
        assert!(
            cursor <= self.len(),
            "cursor {cursor} out of range (len {})",
            self.len()
        );
    }

    fn debug_check(&self) {
        debug_assert!(self.gap_start <= self.gap_end, "gap_start <= gap_end");
        debug_assert!(self.gap_end <= self.data.len(), "gap_end <= end");
        debug_assert!(self.point <= self.len(), "point within content");
    }
}

impl std::fmt::Debug for GapBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GapBuffer")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field("gap_start", &self.gap_start)
            .field("gap_end", &self.gap_end)
            .field("point", &self.point)
            .finish()
    }
}

/// Translate a logical cursor into a physical index for a gap spanning
/// `[gap_start, gap_end)`.
pub fn physical_index(cursor: Cursor, gap_start: usize, gap_end: usize) -> usize {
    if cursor < gap_start {
        cursor
    } else {
        cursor + (gap_end - gap_start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(b: &GapBuffer) -> String {
        String::from_utf8(b.contents()).unwrap()
    }

    #[test]
    fn new_buffer_is_all_gap() {
        let b = GapBuffer::new(8);
        assert_eq!(b.capacity(), 8);
        assert_eq!(b.gap_len(), 8);
        assert_eq!(b.len(), 0);
        assert!(b.is_empty());
        assert_eq!(b.point(), 0);
    }

    #[test]
    fn physical_index_skips_gap() {
        assert_eq!(physical_index(2, 3, 7), 2);
        assert_eq!(physical_index(3, 3, 7), 7);
        assert_eq!(physical_index(5, 3, 7), 9);
    }

    #[test]
    fn insert_two_then_delete_backward() {
        let mut b = GapBuffer::new(1);
        b.insert(0, b'a');
        b.insert(1, b'b');
        assert_eq!(text(&b), "ab");
        assert_eq!(b.point(), 2);
        assert!(b.delete_backward(b.point()));
        assert_eq!(text(&b), "a");
        assert_eq!(b.point(), 1);
    }

    #[test]
    fn growth_is_geometric() {
        let mut b = GapBuffer::new(1);
        b.insert(0, b'x');
        assert_eq!(b.capacity(), 1);
        b.insert(1, b'y');
        assert_eq!(b.capacity(), 2);
        b.insert(2, b'z');
        assert_eq!(b.capacity(), 4);
        b.insert_bytes(3, b"0123456789");
        assert!(b.capacity() >= 13);
        assert_eq!(text(&b), "xyz0123456789");
    }

    #[test]
    fn zero_capacity_buffer_grows() {
        let mut b = GapBuffer::new(0);
        b.insert(0, b'q');
        assert_eq!(text(&b), "q");
    }

    #[test]
    fn insert_far_from_gap_moves_it() {
        let mut b = GapBuffer::from_bytes(b"hello world");
        b.insert(0, b'>');
        b.insert(12, b'!');
        b.insert(6, b'_');
        assert_eq!(text(&b), ">hello_ world!");
    }

    #[test]
    fn point_tracks_text_around_it() {
        let mut b = GapBuffer::from_bytes(b"abcd");
        b.set_point(2);
        b.insert(3, b'x'); // after point: unchanged
        assert_eq!(b.point(), 2);
        b.insert(2, b'y'); // at point: shifts
        assert_eq!(b.point(), 3);
        b.insert(0, b'z'); // before point: shifts
        assert_eq!(b.point(), 4);
        assert_eq!(text(&b), "zabycxd");
    }

    #[test]
    fn delete_forward_point_rules() {
        let mut b = GapBuffer::from_bytes(b"abcd");
        b.set_point(2);
        assert!(b.delete_forward(2)); // at point: point stays
        assert_eq!(b.point(), 2);
        assert!(b.delete_forward(0)); // strictly before point: shifts
        assert_eq!(b.point(), 1);
        assert_eq!(text(&b), "bd");
    }

    #[test]
    fn delete_backward_point_rules() {
        let mut b = GapBuffer::from_bytes(b"abcd");
        b.set_point(2);
        assert!(b.delete_backward(4)); // after point: unchanged
        assert_eq!(b.point(), 2);
        assert!(b.delete_backward(2)); // at point: shifts
        assert_eq!(b.point(), 1);
        assert_eq!(text(&b), "ac");
    }

    #[test]
    fn boundary_deletes_are_noops() {
        let mut b = GapBuffer::from_bytes(b"ab");
        assert!(!b.delete_backward(0));
        assert!(!b.delete_forward(2));
        assert_eq!(text(&b), "ab");
    }

    #[test]
    fn replace_in_place_and_at_end() {
        let mut b = GapBuffer::from_bytes(b"cat");
        assert!(b.replace(0, b'b'));
        assert!(!b.replace(3, b's'));
        assert_eq!(text(&b), "bat");
        assert_eq!(b.len(), 3);
    }

    #[test]
    #[should_panic(expected = "char_at cursor")]
    fn char_at_end_panics() {
        let b = GapBuffer::from_bytes(b"ab");
        b.char_at(2);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn insert_past_len_panics() {
        let mut b = GapBuffer::from_bytes(b"ab");
        b.insert(3, b'x');
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut b = GapBuffer::from_bytes(b"some text");
        b.set_point(4);
        let cap = b.capacity();
        b.clear();
        assert!(b.is_empty());
        assert_eq!(b.point(), 0);
        assert_eq!(b.capacity(), cap);
    }

    #[test]
    fn slice_borrows_or_copies_across_gap() {
        let mut b = GapBuffer::from_bytes(b"abcdef");
        b.insert(3, b'-'); // gap now after "abc-"
        b.delete_backward(4); // "abcdef", gap at 3
        assert!(matches!(b.slice(0..3), Cow::Borrowed(_)));
        assert!(matches!(b.slice(3..6), Cow::Borrowed(_)));
        let straddle = b.slice(1..5);
        assert!(matches!(straddle, Cow::Owned(_)));
        assert_eq!(&*straddle, b"bcde");
    }

    #[test]
    fn segments_reflect_gap_position() {
        let mut b = GapBuffer::from_bytes(b"xyz");
        b.insert(1, b'_');
        let (before, after) = b.segments();
        assert_eq!(before, b"x_");
        assert_eq!(after, b"yz");
    }
}
