//! core-keymap: key combination to command resolution.
//!
//! Design principles:
//! - Dense tables: every keymap holds one slot per representable combination,
//!   so a lookup is a single index.
//! - Chain of responsibility: an unbound slot defers to the parent keymap; the
//!   root answers [`Command::Nothing`].
//! - Reserved combinations: whatever the system keymap binds cannot be shadowed
//!   by [`Keymap::bind`] further down the chain. [`Keymap::rebind`] is the
//!   explicit override.
//! - No side effects: resolution is pure, logging only at TRACE.

use core_events::{KeyCombination, MAX_KEY_COMBINATIONS};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::trace;

pub mod builders;
pub mod mode;

pub use builders::{default_text, derived, empty, rpn_calculator, system};
pub use mode::{Mode, ModeCache, ModeKind};

// -------------------------------------------------------------------------------------------------
// Command set
// -------------------------------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Canonical no-op answered for unbound combinations.
    Nothing,
    SelfInsert,
    InsertNewline,
    DeleteBackward,
    DeleteForward,
    NextChar,
    PrevChar,
    NextLine,
    PrevLine,
    LineStart,
    LineEnd,
    BufferStart,
    BufferEnd,
    Load,
    Save,
    Quit,
    NextPane,
    PrevPane,
    ClosePane,
    TextMode,
    RpnMode,
    RpnPush,
    RpnPop,
    RpnAdd,
    RpnMultiply,
}

impl Command {
    pub const fn name(self) -> &'static str {
        match self {
            Command::Nothing => "nothing",
            Command::SelfInsert => "self-insert",
            Command::InsertNewline => "insert-newline",
            Command::DeleteBackward => "delete-backward",
            Command::DeleteForward => "delete-forward",
            Command::NextChar => "next-char",
            Command::PrevChar => "prev-char",
            Command::NextLine => "next-line",
            Command::PrevLine => "prev-line",
            Command::LineStart => "line-start",
            Command::LineEnd => "line-end",
            Command::BufferStart => "buffer-start",
            Command::BufferEnd => "buffer-end",
            Command::Load => "load",
            Command::Save => "save",
            Command::Quit => "quit",
            Command::NextPane => "next-pane",
            Command::PrevPane => "prev-pane",
            Command::ClosePane => "close-pane",
            Command::TextMode => "text-mode",
            Command::RpnMode => "rpn-mode",
            Command::RpnPush => "rpn-push",
            Command::RpnPop => "rpn-pop",
            Command::RpnAdd => "rpn-add",
            Command::RpnMultiply => "rpn-multiply",
        }
    }

    /// Line motions that keep the goal column alive.
    pub const fn is_vertical_motion(self) -> bool {
        matches!(self, Command::NextLine | Command::PrevLine)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeymapError {
    #[error("`{combination}` is reserved for `{command}`")]
    Reserved {
        combination: KeyCombination,
        command: Command,
    },
}

// -------------------------------------------------------------------------------------------------
// Keymap
// -------------------------------------------------------------------------------------------------
pub struct Keymap {
    bindings: Box<[Option<Command>]>,
    parent: Option<Arc<Keymap>>,
    /// Bindings of a reserving keymap cannot be shadowed through `bind`.
    reserves: bool,
}

impl Keymap {
    pub fn new(parent: Option<Arc<Keymap>>) -> Self {
        Self {
            bindings: vec![None; MAX_KEY_COMBINATIONS].into_boxed_slice(),
            parent,
            reserves: false,
        }
    }

    /// A root keymap whose bindings form the reserved range.
    pub(crate) fn reserving() -> Self {
        Self {
            reserves: true,
            ..Self::new(None)
        }
    }

    pub fn parent(&self) -> Option<&Arc<Keymap>> {
        self.parent.as_ref()
    }

    /// Local binding only, without consulting the parent chain.
    pub fn lookup(&self, combination: KeyCombination) -> Option<Command> {
        self.bindings[combination.index()]
    }

    /// Walk self, parent, grandparent... returning the first bound command.
    pub fn resolve(&self, combination: KeyCombination) -> Command {
        let mut depth = 0usize;
        let mut current = Some(self);
        while let Some(map) = current {
            if let Some(command) = map.lookup(combination) {
                trace!(target: "keymap", %combination, %command, depth, "resolved");
                return command;
            }
            depth += 1;
            current = map.parent.as_deref();
        }
        trace!(target: "keymap", %combination, depth, "unbound");
        Command::Nothing
    }

    /// The reserved binding for `combination` in this chain, if any.
    pub fn reserved(&self, combination: KeyCombination) -> Option<Command> {
        let mut current = Some(self);
        while let Some(map) = current {
            if map.reserves
                && let Some(command) = map.lookup(combination)
            {
                return Some(command);
            }
            current = map.parent.as_deref();
        }
        None
    }

    /// Bind unless the combination belongs to the reserved range.
    pub fn bind(
        &mut self,
        combination: KeyCombination,
        command: Command,
    ) -> Result<(), KeymapError> {
        if !self.reserves
            && let Some(reserved) = self.reserved(combination)
        {
            return Err(KeymapError::Reserved {
                combination,
                command: reserved,
            });
        }
        self.bindings[combination.index()] = Some(command);
        Ok(())
    }

    /// Bind unconditionally, overriding a reserved combination if need be.
    pub fn rebind(&mut self, combination: KeyCombination, command: Command) {
        if let Some(reserved) = self.reserved(combination) {
            tracing::debug!(target: "keymap", %combination, %reserved, %command, "reserved_override");
        }
        self.bindings[combination.index()] = Some(command);
    }

    /// Remove a local binding so the combination falls through to the parent again.
    pub fn unbind(&mut self, combination: KeyCombination) {
        self.bindings[combination.index()] = None;
    }

    /// Number of locally bound combinations.
    pub fn bound_count(&self) -> usize {
        self.bindings.iter().filter(|b| b.is_some()).count()
    }
}

impl fmt::Debug for Keymap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keymap")
            .field("bound", &self.bound_count())
            .field("reserves", &self.reserves)
            .field("parent", &self.parent)
            .finish()
    }
}
