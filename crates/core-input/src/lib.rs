//! Terminal input service.
//!
//! Crossterm key events are normalized into [`InputEvent`]s: a base key code
//! plus modifier set, and the character the US layout resolves for it.
//! Keys with no base code (non-ASCII characters, media keys) are dropped.

mod async_service;
pub use async_service::AsyncInputShutdown;

use async_service::spawn_async_event_task;

use core_events::{Event, InputEvent, KeyCombination, Modifiers, UsLayout, keys};
use crossterm::event::{KeyCode as CKeyCode, KeyEvent as CKeyEvent, KeyModifiers as CMods};
use tokio::task::JoinHandle;

/// Spawn the async input service backed by `crossterm::EventStream`.
///
/// Returns the `JoinHandle` for the background task alongside a shutdown handle
/// that can be used to request immediate termination.
pub fn spawn_async_input(
    sender: tokio::sync::mpsc::Sender<Event>,
) -> (JoinHandle<()>, AsyncInputShutdown) {
    spawn_async_event_task(sender)
}

pub(crate) fn map_mods(m: CMods) -> Modifiers {
    let mut out = Modifiers::empty();
    if m.contains(CMods::CONTROL) {
        out |= Modifiers::CTRL;
    }
    if m.contains(CMods::ALT) {
        out |= Modifiers::ALT;
    }
    if m.contains(CMods::SHIFT) {
        out |= Modifiers::SHIFT;
    }
    out
}

/// Translate a crossterm key press into the editor's key model.
pub fn translate(event: CKeyEvent) -> Option<InputEvent> {
    let mods = map_mods(event.modifiers);
    let (key, mods, character) = match event.code {
        CKeyCode::Char(ch) => {
            if !ch.is_ascii() {
                log_dropped_key("non_ascii");
                return None;
            }
            let byte = ch as u8;
            let Some((key, shifted)) = UsLayout.key_for(byte) else {
                log_dropped_key("no_key_for_char");
                return None;
            };
            // Terminals report Ctrl+S as a lowercase 's'; shift comes from the layout
            // or an explicit modifier.
            let mods = if shifted { mods | Modifiers::SHIFT } else { mods };
            (key, mods, byte)
        }
        CKeyCode::BackTab => (keys::TAB, mods | Modifiers::SHIFT, 0),
        CKeyCode::F(n @ 1..=12) => (keys::F1 + (n - 1), mods, 0),
        code => {
            let Some(key) = named_key(code) else {
                log_dropped_key("unmapped");
                return None;
            };
            (key, mods, 0)
        }
    };
    Some(InputEvent::new(KeyCombination::new(key, mods), character))
}

fn named_key(code: CKeyCode) -> Option<u8> {
    Some(match code {
        CKeyCode::Enter => keys::RETURN,
        CKeyCode::Backspace => keys::BACKSPACE,
        CKeyCode::Tab => keys::TAB,
        CKeyCode::Esc => keys::ESCAPE,
        CKeyCode::Left => keys::LEFT,
        CKeyCode::Right => keys::RIGHT,
        CKeyCode::Up => keys::UP,
        CKeyCode::Down => keys::DOWN,
        CKeyCode::Home => keys::HOME,
        CKeyCode::End => keys::END,
        CKeyCode::PageUp => keys::PAGE_UP,
        CKeyCode::PageDown => keys::PAGE_DOWN,
        CKeyCode::Insert => keys::INSERT,
        CKeyCode::Delete => keys::DELETE,
        _ => return None,
    })
}

/// Dropped keys are logged by reason only; typed content never reaches the log.
#[inline]
pub(crate) fn log_dropped_key(reason: &'static str) {
    tracing::trace!(target: "input.key", reason, "dropped");
}
