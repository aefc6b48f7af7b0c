//! Base key codes.
//!
//! Codes follow the common PC virtual-key numbering: letters and digits use
//! their uppercase ASCII value, punctuation keys use the OEM block.

pub const BACKSPACE: u8 = 0x08;
pub const TAB: u8 = 0x09;
pub const RETURN: u8 = 0x0D;
pub const ESCAPE: u8 = 0x1B;
pub const SPACE: u8 = 0x20;
pub const PAGE_UP: u8 = 0x21;
pub const PAGE_DOWN: u8 = 0x22;
pub const END: u8 = 0x23;
pub const HOME: u8 = 0x24;
pub const LEFT: u8 = 0x25;
pub const UP: u8 = 0x26;
pub const RIGHT: u8 = 0x27;
pub const DOWN: u8 = 0x28;
pub const INSERT: u8 = 0x2D;
pub const DELETE: u8 = 0x2E;
pub const F1: u8 = 0x70;
pub const F2: u8 = 0x71;
pub const F3: u8 = 0x72;
pub const F4: u8 = 0x73;
pub const F5: u8 = 0x74;
pub const F6: u8 = 0x75;
pub const F7: u8 = 0x76;
pub const F8: u8 = 0x77;
pub const F9: u8 = 0x78;
pub const F10: u8 = 0x79;
pub const F11: u8 = 0x7A;
pub const F12: u8 = 0x7B;
/// `;` / `:`
pub const OEM_1: u8 = 0xBA;
/// `=` / `+`
pub const OEM_PLUS: u8 = 0xBB;
/// `,` / `<`
pub const OEM_COMMA: u8 = 0xBC;
/// `-` / `_`
pub const OEM_MINUS: u8 = 0xBD;
/// `.` / `>`
pub const OEM_PERIOD: u8 = 0xBE;
/// `/` / `?`
pub const OEM_2: u8 = 0xBF;
/// `` ` `` / `~`
pub const OEM_3: u8 = 0xC0;
/// `[` / `{`
pub const OEM_4: u8 = 0xDB;
/// `\` / `|`
pub const OEM_5: u8 = 0xDC;
/// `]` / `}`
pub const OEM_6: u8 = 0xDD;
/// `'` / `"`
pub const OEM_7: u8 = 0xDE;

const F_NAMES: [&str; 12] = [
    "F1", "F2", "F3", "F4", "F5", "F6", "F7", "F8", "F9", "F10", "F11", "F12",
];

const LETTERS: [&str; 26] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R",
    "S", "T", "U", "V", "W", "X", "Y", "Z",
];

const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// Human readable key name used in logs.
pub fn name(key: u8) -> Option<&'static str> {
    Some(match key {
        BACKSPACE => "Backspace",
        TAB => "Tab",
        RETURN => "Return",
        ESCAPE => "Escape",
        SPACE => "Space",
        PAGE_UP => "PageUp",
        PAGE_DOWN => "PageDown",
        END => "End",
        HOME => "Home",
        LEFT => "Left",
        UP => "Up",
        RIGHT => "Right",
        DOWN => "Down",
        INSERT => "Insert",
        DELETE => "Delete",
        b'0'..=b'9' => DIGITS[(key - b'0') as usize],
        b'A'..=b'Z' => LETTERS[(key - b'A') as usize],
        F1..=F12 => F_NAMES[(key - F1) as usize],
        OEM_1 => ";",
        OEM_PLUS => "=",
        OEM_COMMA => ",",
        OEM_MINUS => "-",
        OEM_PERIOD => ".",
        OEM_2 => "/",
        OEM_3 => "`",
        OEM_4 => "[",
        OEM_5 => "\\",
        OEM_6 => "]",
        OEM_7 => "'",
        _ => return None,
    })
}
