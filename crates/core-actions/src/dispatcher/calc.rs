//! Calculator commands over the current buffer's stack.
//!
//! After every calculator command the stack is printed into the buffer at
//! the point, so the buffer doubles as the calculator's tape.

use super::DispatchResult;
use core_keymap::Command;
use core_state::EditorState;

pub(crate) fn handle(command: Command, state: &mut EditorState) -> DispatchResult {
    let digit = state
        .last_event
        .map(|e| e.character)
        .filter(u8::is_ascii_digit)
        .map(|c| u32::from(c - b'0'));
    let buffer = state.current_buffer_mut();
    let stack = &mut buffer.calc;
    match command {
        Command::RpnPush => match digit {
            Some(value) => {
                if !stack.push(value) {
                    tracing::warn!(target: "actions.calc", limit = stack.limit(), "stack_full");
                }
            }
            None => tracing::trace!(target: "actions.calc", "push_without_digit"),
        },
        Command::RpnPop => {
            stack.pop();
        }
        Command::RpnAdd => {
            stack.add();
        }
        Command::RpnMultiply => {
            stack.multiply();
        }
        _ => return DispatchResult::clean(),
    }
    tracing::trace!(target: "actions.calc", op = %command, depth = stack.len(), "calc");
    let printed = stack.render();
    let at = buffer.text.point();
    buffer.text.insert_bytes(at, &printed);
    DispatchResult::dirty()
}
