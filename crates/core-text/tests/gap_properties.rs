//! Property tests for gap buffer mutation against a plain `Vec<u8>` model.

use core_text::{GapBuffer, motion};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Insert(usize, u8),
    DeleteBackward(usize),
    DeleteForward(usize),
    Replace(usize, u8),
    MovePoint(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (any::<usize>(), any::<u8>()).prop_map(|(c, b)| Op::Insert(c, b)),
        any::<usize>().prop_map(Op::DeleteBackward),
        any::<usize>().prop_map(Op::DeleteForward),
        (any::<usize>(), any::<u8>()).prop_map(|(c, b)| Op::Replace(c, b)),
        any::<usize>().prop_map(Op::MovePoint),
    ]
}

/// Reference semantics for the point adjustments.
struct Model {
    bytes: Vec<u8>,
    point: usize,
}

impl Model {
    fn apply(&mut self, buffer: &mut GapBuffer, op: &Op) {
        // Cursors are reduced into `0..=len` so every generated op is a valid call.
        let len = self.bytes.len();
        match *op {
            Op::Insert(c, b) => {
                let c = c % (len + 1);
                buffer.insert(c, b);
                self.bytes.insert(c, b);
                if self.point >= c {
                    self.point += 1;
                }
            }
            Op::DeleteBackward(c) => {
                let c = c % (len + 1);
                let changed = buffer.delete_backward(c);
                assert_eq!(changed, c > 0);
                if c > 0 {
                    self.bytes.remove(c - 1);
                    if self.point >= c {
                        self.point -= 1;
                    }
                }
            }
            Op::DeleteForward(c) => {
                let c = c % (len + 1);
                let changed = buffer.delete_forward(c);
                assert_eq!(changed, c < len);
                if c < len {
                    self.bytes.remove(c);
                    if self.point > c {
                        self.point -= 1;
                    }
                }
            }
            Op::Replace(c, b) => {
                let c = c % (len + 1);
                let changed = buffer.replace(c, b);
                assert_eq!(changed, c < len);
                if c < len {
                    self.bytes[c] = b;
                }
            }
            Op::MovePoint(c) => {
                let c = c % (len + 1);
                buffer.set_point(c);
                self.point = c;
            }
        }
    }
}

proptest! {
    #[test]
    fn arbitrary_edit_sequences_match_model(ops in prop::collection::vec(op(), 0..200), cap in 0usize..8) {
        let mut buffer = GapBuffer::new(cap);
        let mut model = Model { bytes: Vec::new(), point: 0 };
        for op in &ops {
            model.apply(&mut buffer, op);
            prop_assert_eq!(buffer.len(), model.bytes.len());
            prop_assert_eq!(buffer.point(), model.point);
            prop_assert!(buffer.gap_len() <= buffer.capacity());
        }
        prop_assert_eq!(buffer.contents(), model.bytes);
    }

    #[test]
    fn char_at_after_insert(seed in prop::collection::vec(any::<u8>(), 0..64), c in any::<usize>(), ch in any::<u8>()) {
        let mut buffer = GapBuffer::from_bytes(&seed);
        let c = c % (seed.len() + 1);
        let before = buffer.len();
        buffer.insert(c, ch);
        prop_assert_eq!(buffer.char_at(c), ch);
        prop_assert_eq!(buffer.len(), before + 1);
    }

    #[test]
    fn insert_then_delete_backward_is_identity(seed in prop::collection::vec(any::<u8>(), 0..64), c in any::<usize>(), ch in any::<u8>()) {
        let mut buffer = GapBuffer::from_bytes(&seed);
        let c = c % (seed.len() + 1);
        buffer.insert(c, ch);
        prop_assert!(buffer.delete_backward(c + 1));
        prop_assert_eq!(buffer.contents(), seed.clone());
        prop_assert_eq!(buffer.len(), seed.len());
    }

    #[test]
    fn save_load_save_is_stable(seed in prop::collection::vec(any::<u8>(), 0..256), cuts in prop::collection::vec(any::<usize>(), 0..8)) {
        let mut buffer = GapBuffer::from_bytes(&seed);
        // Park the gap at assorted offsets so both segments are non-trivial.
        for cut in cuts {
            let c = cut % (buffer.len() + 1);
            buffer.insert(c, b'#');
            buffer.delete_backward(c + 1);
        }
        let mut first = Vec::new();
        buffer.save_to_writer(&mut first).unwrap();
        let mut reloaded = GapBuffer::new(1);
        reloaded.load_from_reader(&mut first.as_slice()).unwrap();
        let mut second = Vec::new();
        reloaded.save_to_writer(&mut second).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn line_bounds_bracket_cursor(seed in "[a-c\n]{0,40}", c in any::<usize>()) {
        let buffer = GapBuffer::from_bytes(seed.as_bytes());
        let c = c % (buffer.len() + 1);
        let start = motion::line_start(&buffer, c);
        let end = motion::line_end(&buffer, c);
        prop_assert!(start <= c && c <= end);
        prop_assert!(start == 0 || buffer.char_at(start - 1) == b'\n');
        prop_assert!(end == buffer.len() || buffer.char_at(end) == b'\n');
        prop_assert_eq!(motion::column(&buffer, c), c - start);
    }
}
