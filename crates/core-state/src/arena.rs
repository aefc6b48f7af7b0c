//! Buffer arena with stable identifiers and reference counts.
//!
//! Panes hold [`BufferId`]s rather than references. A buffer is inserted with
//! no owners; each owner `retain`s it and `release`s it when done. The last
//! release frees the slot. Freed slots are reused by later insertions, so a
//! stale id must never be used after its buffer is freed.

use crate::Buffer;
use std::ops::{Index, IndexMut};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BufferId(pub usize);

#[derive(Debug)]
struct Slot {
    buffer: Buffer,
    refs: usize,
}

#[derive(Debug, Default)]
pub struct BufferArena {
    slots: Vec<Option<Slot>>,
    free: Vec<usize>,
}

impl BufferArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, buffer: Buffer) -> BufferId {
        let slot = Some(Slot { buffer, refs: 0 });
        let id = match self.free.pop() {
            Some(i) => {
                self.slots[i] = slot;
                BufferId(i)
            }
            None => {
                self.slots.push(slot);
                BufferId(self.slots.len() - 1)
            }
        };
        tracing::debug!(target: "state.buffers", id = id.0, "buffer_created");
        id
    }

    pub fn retain(&mut self, id: BufferId) {
        self.slot_mut(id).refs += 1;
    }

    /// Drop one reference. Returns true when this freed the buffer.
    pub fn release(&mut self, id: BufferId) -> bool {
        let slot = self.slot_mut(id);
        assert!(slot.refs > 0, "buffer {} released without owner", id.0);
        slot.refs -= 1;
        if slot.refs > 0 {
            return false;
        }
        self.slots[id.0] = None;
        self.free.push(id.0);
        tracing::debug!(target: "state.buffers", id = id.0, "buffer_freed");
        true
    }

    pub fn refs(&self, id: BufferId) -> usize {
        self.slot(id).map_or(0, |s| s.refs)
    }

    pub fn contains(&self, id: BufferId) -> bool {
        self.slot(id).is_some()
    }

    pub fn get(&self, id: BufferId) -> Option<&Buffer> {
        self.slot(id).map(|s| &s.buffer)
    }

    pub fn get_mut(&mut self, id: BufferId) -> Option<&mut Buffer> {
        self.slots
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .map(|s| &mut s.buffer)
    }

    /// Live buffer count.
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn ids(&self) -> impl Iterator<Item = BufferId> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_some())
            .map(|(i, _)| BufferId(i))
    }

    fn slot(&self, id: BufferId) -> Option<&Slot> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    fn slot_mut(&mut self, id: BufferId) -> &mut Slot {
        match self.slots.get_mut(id.0).and_then(Option::as_mut) {
            Some(slot) => slot,
            None => panic!("buffer {} is not live", id.0),
        }
    }
}

impl Index<BufferId> for BufferArena {
    type Output = Buffer;

    fn index(&self, id: BufferId) -> &Buffer {
        match self.get(id) {
            Some(buffer) => buffer,
            None => panic!("buffer {} is not live", id.0),
        }
    }
}

impl IndexMut<BufferId> for BufferArena {
    fn index_mut(&mut self, id: BufferId) -> &mut Buffer {
        &mut self.slot_mut(id).buffer
    }
}
