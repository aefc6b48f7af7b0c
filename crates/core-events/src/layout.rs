//! Host keyboard layout seam.
//!
//! The editor core only needs to know which base keys produce printable
//! characters (to build the self-insert bindings). Hosts translate their native
//! events with the same layout so bindings and resolved characters agree.

use crate::keys;

/// Printable ASCII range (`' '..='~'`).
pub fn is_printable(byte: u8) -> bool {
    (b' '..=b'~').contains(&byte)
}

pub trait KeyboardLayout {
    /// Character produced by `key`, with or without shift. `None` for non-character keys.
    fn char_for(&self, key: u8, shifted: bool) -> Option<u8>;
}

/// US ASCII layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct UsLayout;

/// (key, unshifted, shifted) for every non-alphanumeric character key.
const SYMBOL_KEYS: [(u8, u8, u8); 12] = [
    (keys::SPACE, b' ', b' '),
    (keys::OEM_1, b';', b':'),
    (keys::OEM_PLUS, b'=', b'+'),
    (keys::OEM_COMMA, b',', b'<'),
    (keys::OEM_MINUS, b'-', b'_'),
    (keys::OEM_PERIOD, b'.', b'>'),
    (keys::OEM_2, b'/', b'?'),
    (keys::OEM_3, b'`', b'~'),
    (keys::OEM_4, b'[', b'{'),
    (keys::OEM_5, b'\\', b'|'),
    (keys::OEM_6, b']', b'}'),
    (keys::OEM_7, b'\'', b'"'),
];

const SHIFTED_DIGITS: [u8; 10] = *b")!@#$%^&*(";

impl KeyboardLayout for UsLayout {
    fn char_for(&self, key: u8, shifted: bool) -> Option<u8> {
        match key {
            b'A'..=b'Z' => Some(if shifted { key } else { key.to_ascii_lowercase() }),
            b'0'..=b'9' => Some(if shifted {
                SHIFTED_DIGITS[(key - b'0') as usize]
            } else {
                key
            }),
            _ => SYMBOL_KEYS
                .iter()
                .find(|(k, _, _)| *k == key)
                .map(|(_, plain, shift)| if shifted { *shift } else { *plain }),
        }
    }
}

impl UsLayout {
    /// Reverse lookup: the key (and whether shift is held) that types `ch`.
    pub fn key_for(&self, ch: u8) -> Option<(u8, bool)> {
        match ch {
            b'a'..=b'z' => Some((ch.to_ascii_uppercase(), false)),
            b'A'..=b'Z' => Some((ch, true)),
            b'0'..=b'9' => Some((ch, false)),
            _ => {
                if let Some(i) = SHIFTED_DIGITS.iter().position(|c| *c == ch) {
                    return Some((b'0' + i as u8, true));
                }
                SYMBOL_KEYS.iter().find_map(|(k, plain, shift)| {
                    if *plain == ch {
                        Some((*k, false))
                    } else if *shift == ch {
                        Some((*k, true))
                    } else {
                        None
                    }
                })
            }
        }
    }
}
