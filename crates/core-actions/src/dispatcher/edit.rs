//! Text mutation at the current buffer's point.
//!
//! The point follows its text through the gap buffer's shift rules, so an
//! insert at the point leaves the point after the new byte and a backward
//! delete pulls it back by one.

use super::DispatchResult;
use core_state::EditorState;

/// Insert the character the host resolved for the last event.
pub(crate) fn self_insert(state: &mut EditorState) -> DispatchResult {
    let Some(ch) = state.last_event.map(|e| e.character).filter(|c| *c != 0) else {
        return DispatchResult::clean();
    };
    insert(state, ch, "self_insert")
}

pub(crate) fn insert_newline(state: &mut EditorState) -> DispatchResult {
    insert(state, b'\n', "insert_newline")
}

pub(crate) fn delete_backward(state: &mut EditorState) -> DispatchResult {
    let text = &mut state.current_buffer_mut().text;
    let at = text.point();
    let changed = text.delete_backward(at);
    tracing::trace!(target: "actions.dispatch", op = "delete_backward", at, changed, "edit");
    DispatchResult::changed(changed)
}

pub(crate) fn delete_forward(state: &mut EditorState) -> DispatchResult {
    let text = &mut state.current_buffer_mut().text;
    let at = text.point();
    let changed = text.delete_forward(at);
    tracing::trace!(target: "actions.dispatch", op = "delete_forward", at, changed, "edit");
    DispatchResult::changed(changed)
}

fn insert(state: &mut EditorState, ch: u8, op: &'static str) -> DispatchResult {
    let text = &mut state.current_buffer_mut().text;
    let at = text.point();
    text.insert(at, ch);
    tracing::trace!(target: "actions.dispatch", op, at, to = text.point(), "edit");
    DispatchResult::dirty()
}
