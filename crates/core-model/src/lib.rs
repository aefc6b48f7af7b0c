//! High-level editor model: the session object threaded through dispatch.
//!
//! `EditorModel` owns the [`EditorState`] (buffers, modes, current buffer,
//! goal column, last event) and the [`PaneSet`] presenting those buffers.
//! Nothing here is global; every command receives the model explicitly.
//!
//! Core invariants (must hold after every public call):
//! * The pane set is never empty once the model is constructed.
//! * `active < panes.len()`.
//! * Every pane's buffer is live in the arena and counts the pane among its owners.
//! * `state.current` is the active pane's buffer.
//! * After `recompute_all`, each pane satisfies `start <= point <= end`
//!   for its buffer's point.

use core_state::{BufferArena, BufferId, EditorState};
mod layout;
mod pane;
pub use layout::{Layout, LayoutRegion, Orientation};
pub use pane::{Pane, PaneFrame};

/// Maximum number of live panes.
pub const MAX_PANES: usize = 16;

/// Rows reserved at the bottom of each pane for its status line.
pub const STATUS_ROWS: u16 = 1;

/// Live panes plus the active index. Release swaps the last pane into the
/// freed slot, so order among the remaining panes is not preserved.
#[derive(Debug, Default)]
pub struct PaneSet {
    panes: Vec<Pane>,
    active: usize,
}

impl PaneSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a new pane to `buffer`, taking a reference on it. Returns the pane index.
    pub fn create(
        &mut self,
        buffers: &mut BufferArena,
        buffer: BufferId,
        region: LayoutRegion,
    ) -> usize {
        assert!(
            self.panes.len() < MAX_PANES,
            "pane capacity {MAX_PANES} exhausted"
        );
        let point = buffers[buffer].text.point();
        buffers.retain(buffer);
        self.panes.push(Pane::new(buffer, region, point));
        let index = self.panes.len() - 1;
        tracing::debug!(target: "model.pane", index, buffer = buffer.0, "pane_created");
        index
    }

    /// Remove pane `index`, dropping its buffer reference.
    pub fn release(&mut self, buffers: &mut BufferArena, index: usize) {
        assert!(index < self.panes.len(), "pane {index} out of range");
        let pane = self.panes.swap_remove(index);
        let freed = buffers.release(pane.buffer);
        if self.active >= self.panes.len() {
            self.active = self.panes.len().saturating_sub(1);
        }
        tracing::debug!(target: "model.pane", index, buffer = pane.buffer.0, freed, "pane_released");
    }

    /// Advance the active index with wraparound. Returns the new index.
    pub fn next(&mut self) -> usize {
        if !self.panes.is_empty() {
            self.active = (self.active + 1) % self.panes.len();
        }
        self.active
    }

    /// Retreat the active index with wraparound. Returns the new index.
    pub fn prev(&mut self) -> usize {
        if !self.panes.is_empty() {
            self.active = (self.active + self.panes.len() - 1) % self.panes.len();
        }
        self.active
    }

    pub fn set_active(&mut self, index: usize) {
        assert!(index < self.panes.len(), "pane {index} out of range");
        self.active = index;
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> &Pane {
        &self.panes[self.active]
    }

    pub fn active_mut(&mut self) -> &mut Pane {
        &mut self.panes[self.active]
    }

    pub fn get(&self, index: usize) -> Option<&Pane> {
        self.panes.get(index)
    }

    pub fn len(&self) -> usize {
        self.panes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pane> {
        self.panes.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Pane> {
        self.panes.iter_mut()
    }
}

/// What the renderer needs for one pane.
#[derive(Debug)]
pub struct PaneView<'a> {
    pub region: LayoutRegion,
    pub frame: PaneFrame<'a>,
    pub active: bool,
    pub title: String,
    pub mode_name: &'a str,
}

pub struct EditorModel {
    state: EditorState,
    panes: PaneSet,
    orientation: Orientation,
    size: (u16, u16),
}

impl EditorModel {
    /// Wrap `state`, showing its current buffer in a single pane.
    pub fn new(mut state: EditorState, orientation: Orientation) -> Self {
        let mut panes = PaneSet::new();
        panes.create(
            &mut state.buffers,
            state.current,
            LayoutRegion::new(0, 0, 0, 0),
        );
        Self {
            state,
            panes,
            orientation,
            size: (0, 0),
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut EditorState {
        &mut self.state
    }

    pub fn panes(&self) -> &PaneSet {
        &self.panes
    }

    pub fn active_pane(&self) -> &Pane {
        self.panes.active()
    }

    /// Open a new pane on `buffer` (without activating it) and re-tile.
    pub fn open_pane(&mut self, buffer: BufferId) -> usize {
        let index = self
            .panes
            .create(&mut self.state.buffers, buffer, LayoutRegion::new(0, 0, 0, 0));
        self.relayout();
        index
    }

    /// Make pane `index` active; the current buffer follows.
    pub fn focus_pane(&mut self, index: usize) {
        self.panes.set_active(index);
        self.sync_current();
    }

    pub fn next_pane(&mut self) -> usize {
        let index = self.panes.next();
        self.sync_current();
        index
    }

    pub fn prev_pane(&mut self) -> usize {
        let index = self.panes.prev();
        self.sync_current();
        index
    }

    /// Release the active pane unless it is the last one. Returns whether a pane closed.
    pub fn close_active_pane(&mut self) -> bool {
        if self.panes.len() <= 1 {
            return false;
        }
        let index = self.panes.active_index();
        self.panes.release(&mut self.state.buffers, index);
        self.sync_current();
        self.relayout();
        true
    }

    /// Record a new screen size and re-tile the panes.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.size = (width, height);
        self.relayout();
    }

    pub fn size(&self) -> (u16, u16) {
        self.size
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Recompute every pane's visible range against its buffer.
    pub fn recompute_all(&mut self) {
        let buffers = &self.state.buffers;
        for pane in self.panes.iter_mut() {
            pane.recompute(&buffers[pane.buffer].text);
        }
    }

    /// Lay out every pane for drawing. Each pane keeps `STATUS_ROWS` for its status line.
    pub fn frames(&mut self) -> Vec<PaneView<'_>> {
        let active = self.panes.active_index();
        let buffers = &self.state.buffers;
        self.panes
            .iter_mut()
            .enumerate()
            .map(|(i, pane)| {
                let buffer = &buffers[pane.buffer];
                let region = pane.region;
                let rows = region.height.saturating_sub(STATUS_ROWS) as usize;
                let frame = pane.frame(&buffer.text, rows, region.width as usize, i == active);
                PaneView {
                    region,
                    frame,
                    active: i == active,
                    title: buffer.display_name(),
                    mode_name: buffer.mode().name(),
                }
            })
            .collect()
    }

    fn sync_current(&mut self) {
        if !self.panes.is_empty() {
            self.state.current = self.panes.active().buffer;
        }
    }

    fn relayout(&mut self) {
        let (width, height) = self.size;
        let layout = Layout::split(width, height, self.panes.len(), self.orientation);
        for (pane, region) in self.panes.iter_mut().zip(layout.regions()) {
            pane.region = *region;
        }
    }
}
