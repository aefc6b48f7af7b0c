//! Editor state: buffers, their modes and the per-session dispatch state.
//!
//! - Buffers live in a [`BufferArena`] and are addressed by [`BufferId`].
//!   Panes (in `core-model`) own references through the arena's counts.
//! - The "current buffer", goal column and last input event are fields of
//!   [`EditorState`], passed explicitly to every command.
//! - Calculator stacks belong to the buffer they were built in.

use core_events::InputEvent;
use core_keymap::{Mode, ModeCache, ModeKind};
use core_text::GapBuffer;
use std::path::PathBuf;
use std::sync::Arc;

pub mod arena;
pub mod calc;

pub use arena::{BufferArena, BufferId};
pub use calc::{DEFAULT_STACK_LIMIT, RpnStack};

/// An editable buffer: text, optional backing file and the mode governing its keys.
#[derive(Debug)]
pub struct Buffer {
    pub text: GapBuffer,
    pub file_name: Option<PathBuf>,
    pub calc: RpnStack,
    mode: Arc<Mode>,
}

impl Buffer {
    pub fn new(initial_capacity: usize, mode: Arc<Mode>, stack_limit: usize) -> Self {
        Self {
            text: GapBuffer::new(initial_capacity.max(1)),
            file_name: None,
            calc: RpnStack::new(stack_limit),
            mode,
        }
    }

    pub fn mode(&self) -> &Arc<Mode> {
        &self.mode
    }

    pub fn set_mode(&mut self, mode: Arc<Mode>) {
        self.mode = mode;
    }

    /// Display name: the file name, or a placeholder for scratch buffers.
    pub fn display_name(&self) -> String {
        match &self.file_name {
            Some(path) => path.display().to_string(),
            None => "[scratch]".to_string(),
        }
    }
}

/// Sizes used when the session creates buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferSettings {
    pub initial_capacity: usize,
    pub stack_limit: usize,
}

impl Default for BufferSettings {
    fn default() -> Self {
        Self {
            initial_capacity: 1,
            stack_limit: DEFAULT_STACK_LIMIT,
        }
    }
}

/// Top-level editor state container.
#[derive(Debug)]
pub struct EditorState {
    pub buffers: BufferArena,
    /// Buffer commands operate on; follows the active pane.
    pub current: BufferId,
    /// Column remembered across consecutive vertical motions.
    pub goal_column: Option<usize>,
    pub last_event: Option<InputEvent>,
    pub quit: bool,
    modes: ModeCache,
    settings: BufferSettings,
}

impl EditorState {
    /// Create a session holding one empty buffer in `initial` mode, made current.
    pub fn new(modes: ModeCache, settings: BufferSettings, initial: ModeKind) -> Self {
        let mut buffers = BufferArena::new();
        let first = Buffer::new(
            settings.initial_capacity,
            modes.get(initial),
            settings.stack_limit,
        );
        let current = buffers.insert(first);
        Self {
            buffers,
            current,
            goal_column: None,
            last_event: None,
            quit: false,
            modes,
            settings,
        }
    }

    pub fn modes(&self) -> &ModeCache {
        &self.modes
    }

    pub fn settings(&self) -> BufferSettings {
        self.settings
    }

    /// Allocate a fresh empty buffer in `kind` mode. It has no owners yet.
    pub fn create_buffer(&mut self, kind: ModeKind) -> BufferId {
        let buffer = Buffer::new(
            self.settings.initial_capacity,
            self.modes.get(kind),
            self.settings.stack_limit,
        );
        self.buffers.insert(buffer)
    }

    pub fn current_buffer(&self) -> &Buffer {
        &self.buffers[self.current]
    }

    pub fn current_buffer_mut(&mut self) -> &mut Buffer {
        &mut self.buffers[self.current]
    }

    /// Switch the current buffer's mode.
    pub fn set_current_mode(&mut self, kind: ModeKind) {
        let mode = self.modes.get(kind);
        tracing::debug!(target: "state.buffers", id = self.current.0, mode = mode.name(), "mode_switch");
        self.current_buffer_mut().set_mode(mode);
    }
}
