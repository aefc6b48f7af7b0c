//! Core event types for qed.
//!
//! Input arrives already normalized by the host: a key combination (base key
//! code plus modifier bits), the character the host layout resolved for it (0
//! when none) and a timestamp. The core never performs layout translation on
//! its own; [`layout::KeyboardLayout`] is the seam where a host supplies it.

use std::fmt;
use std::time::Instant;

pub mod keys;
pub mod layout;

pub use layout::{KeyboardLayout, UsLayout, is_printable};

// -------------------------------------------------------------------------------------------------
// Channel policy
// -------------------------------------------------------------------------------------------------
// One producer (the input task) and one consumer (the dispatch loop). A bounded channel gives
// natural backpressure: the input task awaits `send` instead of dropping keys.
// -------------------------------------------------------------------------------------------------
pub const EVENT_CHANNEL_CAP: usize = 8192;

/// Number of distinct base key codes.
pub const KEY_COUNT: usize = 256;

/// Size of the dense combination space: every base key under each of the 8 modifier sets.
pub const MAX_KEY_COMBINATIONS: usize = KEY_COUNT << 3;

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        const CTRL  = 0b0000_0001;
        const ALT   = 0b0000_0010;
        const SHIFT = 0b0000_0100;
    }
}

/// A base key with a modifier set, packed as `key | mods << 8`.
///
/// Every value is below [`MAX_KEY_COMBINATIONS`], so it indexes a dense table directly.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyCombination(u16);

impl KeyCombination {
    pub const fn new(key: u8, mods: Modifiers) -> Self {
        Self(key as u16 | (mods.bits() as u16) << 8)
    }

    pub const fn plain(key: u8) -> Self {
        Self::new(key, Modifiers::empty())
    }

    pub const fn ctrl(key: u8) -> Self {
        Self::new(key, Modifiers::CTRL)
    }

    pub const fn alt(key: u8) -> Self {
        Self::new(key, Modifiers::ALT)
    }

    pub const fn shift(key: u8) -> Self {
        Self::new(key, Modifiers::SHIFT)
    }

    /// Rebuild from a raw code. Panics when the code lies outside the combination space.
    pub fn from_code(code: u16) -> Self {
        assert!(
            (code as usize) < MAX_KEY_COMBINATIONS,
            "key combination {code:#x} out of range"
        );
        Self(code)
    }

    pub const fn code(self) -> u16 {
        self.0
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn key(self) -> u8 {
        (self.0 & 0xff) as u8
    }

    pub fn mods(self) -> Modifiers {
        Modifiers::from_bits_truncate((self.0 >> 8) as u8)
    }

    /// Same base key with `extra` modifiers added.
    pub fn with(self, extra: Modifiers) -> Self {
        Self::new(self.key(), self.mods() | extra)
    }
}

impl fmt::Debug for KeyCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyCombination({self})")
    }
}

impl fmt::Display for KeyCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mods = self.mods();
        if mods.contains(Modifiers::CTRL) {
            f.write_str("Ctrl+")?;
        }
        if mods.contains(Modifiers::ALT) {
            f.write_str("Alt+")?;
        }
        if mods.contains(Modifiers::SHIFT) {
            f.write_str("Shift+")?;
        }
        match keys::name(self.key()) {
            Some(name) => f.write_str(name),
            None => write!(f, "{:#04x}", self.key()),
        }
    }
}

/// A normalized key press as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub combination: KeyCombination,
    /// Character resolved by the host layout, 0 when the key produces none.
    pub character: u8,
    pub timestamp: Instant,
}

impl InputEvent {
    pub fn new(combination: KeyCombination, character: u8) -> Self {
        Self::at(combination, character, Instant::now())
    }

    pub fn at(combination: KeyCombination, character: u8, timestamp: Instant) -> Self {
        Self {
            combination,
            character,
            timestamp,
        }
    }

    /// Build the event a US layout would deliver for typing `ch`.
    pub fn typed(ch: u8) -> Option<Self> {
        let (key, shifted) = UsLayout.key_for(ch)?;
        let mods = if shifted {
            Modifiers::SHIFT
        } else {
            Modifiers::empty()
        };
        Some(Self::new(KeyCombination::new(key, mods), ch))
    }
}

/// Top-level event consumed by the dispatch loop.
#[derive(Debug, Clone)]
pub enum Event {
    Input(InputEvent),
    /// Terminal resize (columns, rows).
    Resize(u16, u16),
    Shutdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoding_packs_key_and_modifiers() {
        let c = KeyCombination::new(keys::TAB, Modifiers::CTRL | Modifiers::SHIFT);
        assert_eq!(c.code(), 0x09 | 0x100 | 0x400);
        assert_eq!(c.key(), keys::TAB);
        assert_eq!(c.mods(), Modifiers::CTRL | Modifiers::SHIFT);
    }

    #[test]
    fn all_combinations_are_distinct_and_in_range() {
        let mut seen = std::collections::HashSet::new();
        for key in 0..=255u8 {
            for bits in 0..8u8 {
                let c = KeyCombination::new(key, Modifiers::from_bits_truncate(bits));
                assert!(c.index() < MAX_KEY_COMBINATIONS);
                assert!(seen.insert(c));
            }
        }
        assert_eq!(seen.len(), MAX_KEY_COMBINATIONS);
        assert_eq!(seen.len(), KEY_COUNT * 8);
    }

    #[test]
    fn with_adds_modifiers_to_same_key() {
        let c = KeyCombination::ctrl(keys::TAB).with(Modifiers::SHIFT);
        assert_eq!(c, KeyCombination::new(keys::TAB, Modifiers::CTRL | Modifiers::SHIFT));
        assert_eq!(c.with(Modifiers::CTRL), c);
        assert_eq!(
            KeyCombination::plain(b'A').with(Modifiers::SHIFT),
            KeyCombination::shift(b'A')
        );
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn from_code_rejects_overflow() {
        KeyCombination::from_code(MAX_KEY_COMBINATIONS as u16);
    }

    #[test]
    fn display_names_modifiers_and_key() {
        assert_eq!(KeyCombination::alt(keys::F4).to_string(), "Alt+F4");
        assert_eq!(
            KeyCombination::new(keys::TAB, Modifiers::CTRL | Modifiers::SHIFT).to_string(),
            "Ctrl+Shift+Tab"
        );
        assert_eq!(KeyCombination::ctrl(b'S').to_string(), "Ctrl+S");
    }

    #[test]
    fn typed_events_carry_shift_for_upper_symbols() {
        let plus = InputEvent::typed(b'+').unwrap();
        assert_eq!(plus.combination, KeyCombination::shift(keys::OEM_PLUS));
        assert_eq!(plus.character, b'+');
        let a = InputEvent::typed(b'a').unwrap();
        assert_eq!(a.combination, KeyCombination::plain(b'A'));
        assert!(InputEvent::typed(0x07).is_none());
    }
}
