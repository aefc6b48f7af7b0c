//! Modes: a display name paired with a keymap.

use crate::{Keymap, KeymapError, builders};
use core_events::KeyboardLayout;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeKind {
    Text,
    RpnCalculator,
}

#[derive(Debug)]
pub struct Mode {
    kind: ModeKind,
    name: String,
    keymap: Arc<Keymap>,
}

impl Mode {
    pub fn new(kind: ModeKind, name: impl Into<String>, keymap: Arc<Keymap>) -> Self {
        Self {
            kind,
            name: name.into(),
            keymap,
        }
    }

    pub fn kind(&self) -> ModeKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn keymap(&self) -> &Arc<Keymap> {
        &self.keymap
    }
}

/// Per-session mode registry. The system keymap is shared by every mode.
#[derive(Debug)]
pub struct ModeCache {
    system: Arc<Keymap>,
    text: Arc<Mode>,
    rpn: Arc<Mode>,
}

impl ModeCache {
    pub fn new(layout: &dyn KeyboardLayout) -> Result<Self, KeymapError> {
        let system = Arc::new(builders::system());
        let text = Mode::new(
            ModeKind::Text,
            "text",
            Arc::new(builders::default_text(system.clone(), layout)?),
        );
        let rpn = Mode::new(
            ModeKind::RpnCalculator,
            "RPN Calculator",
            Arc::new(builders::rpn_calculator(system.clone())?),
        );
        Ok(Self {
            system,
            text: Arc::new(text),
            rpn: Arc::new(rpn),
        })
    }

    pub fn system(&self) -> &Arc<Keymap> {
        &self.system
    }

    pub fn get(&self, kind: ModeKind) -> Arc<Mode> {
        match kind {
            ModeKind::Text => self.text.clone(),
            ModeKind::RpnCalculator => self.rpn.clone(),
        }
    }
}
