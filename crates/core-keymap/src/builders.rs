//! Keymap construction.
//!
//! Every mode keymap chains to one shared system keymap, so the global
//! bindings are attached once and reached from everywhere.

use crate::{Command, Keymap, KeymapError};
use core_events::{KEY_COUNT, KeyCombination, KeyboardLayout, Modifiers, is_printable, keys};
use std::sync::Arc;

/// Global bindings. These combinations form the reserved range.
pub fn system() -> Keymap {
    let mut map = Keymap::reserving();
    let bindings = [
        (KeyCombination::alt(keys::F4), Command::Quit),
        (KeyCombination::ctrl(keys::TAB), Command::NextPane),
        (
            KeyCombination::new(keys::TAB, Modifiers::CTRL | Modifiers::SHIFT),
            Command::PrevPane,
        ),
        (KeyCombination::ctrl(keys::F4), Command::ClosePane),
        (KeyCombination::alt(b'T'), Command::TextMode),
        (KeyCombination::alt(b'R'), Command::RpnMode),
    ];
    for (combination, command) in bindings {
        map.rebind(combination, command);
    }
    map
}

/// A keymap with no local bindings on top of `parent`.
pub fn derived(parent: Arc<Keymap>) -> Keymap {
    Keymap::new(Some(parent))
}

/// A keymap with no local bindings chained straight to the system keymap.
pub fn empty(system: Arc<Keymap>) -> Keymap {
    derived(system)
}

/// Text editing: every printable key self-inserts, then navigation, editing and
/// persistence keys are overridden.
pub fn default_text(
    system: Arc<Keymap>,
    layout: &dyn KeyboardLayout,
) -> Result<Keymap, KeymapError> {
    let mut map = empty(system);
    for code in 0..KEY_COUNT {
        let key = code as u8;
        if layout.char_for(key, false).is_some_and(is_printable) {
            let plain = KeyCombination::plain(key);
            map.bind(plain, Command::SelfInsert)?;
            map.bind(plain.with(Modifiers::SHIFT), Command::SelfInsert)?;
        }
    }
    let overrides = [
        (KeyCombination::plain(keys::RETURN), Command::InsertNewline),
        (KeyCombination::plain(keys::BACKSPACE), Command::DeleteBackward),
        (KeyCombination::plain(keys::DELETE), Command::DeleteForward),
        (KeyCombination::plain(keys::LEFT), Command::PrevChar),
        (KeyCombination::plain(keys::RIGHT), Command::NextChar),
        (KeyCombination::plain(keys::UP), Command::PrevLine),
        (KeyCombination::plain(keys::DOWN), Command::NextLine),
        (KeyCombination::plain(keys::HOME), Command::LineStart),
        (KeyCombination::plain(keys::END), Command::LineEnd),
        (KeyCombination::ctrl(b'A'), Command::LineStart),
        (KeyCombination::ctrl(b'E'), Command::LineEnd),
        (KeyCombination::ctrl(keys::HOME), Command::BufferStart),
        (KeyCombination::ctrl(keys::END), Command::BufferEnd),
        (KeyCombination::ctrl(b'O'), Command::Load),
        (KeyCombination::ctrl(b'S'), Command::Save),
    ];
    for (combination, command) in overrides {
        map.bind(combination, command)?;
    }
    tracing::debug!(target: "keymap", bound = map.bound_count(), "default_text_built");
    Ok(map)
}

/// Numeric stack calculator: digits push, `+` adds, `*` multiplies, backspace pops.
/// Anything else falls through to the system keymap or to nothing.
pub fn rpn_calculator(system: Arc<Keymap>) -> Result<Keymap, KeymapError> {
    let mut map = empty(system);
    for digit in b'0'..=b'9' {
        map.bind(KeyCombination::plain(digit), Command::RpnPush)?;
    }
    map.bind(KeyCombination::shift(keys::OEM_PLUS), Command::RpnAdd)?;
    map.bind(KeyCombination::shift(b'8'), Command::RpnMultiply)?;
    map.bind(KeyCombination::plain(keys::BACKSPACE), Command::RpnPop)?;
    Ok(map)
}
