//! Mode switching for the current buffer.
//!
//! Only the current buffer changes mode; other buffers and panes on other
//! buffers keep theirs.

use super::DispatchResult;
use core_keymap::{Command, ModeKind};
use core_state::EditorState;

pub(crate) fn handle(command: Command, state: &mut EditorState) -> DispatchResult {
    let kind = match command {
        Command::RpnMode => ModeKind::RpnCalculator,
        _ => ModeKind::Text,
    };
    if state.current_buffer().mode().kind() == kind {
        return DispatchResult::clean();
    }
    state.set_current_mode(kind);
    DispatchResult::dirty()
}
