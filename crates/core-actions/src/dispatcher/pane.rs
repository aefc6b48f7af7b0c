//! Pane cycling and closing. The current buffer follows the active pane.

use super::DispatchResult;
use core_keymap::Command;
use core_model::EditorModel;

pub(crate) fn handle(command: Command, model: &mut EditorModel) -> DispatchResult {
    let before = model.panes().active_index();
    match command {
        Command::NextPane => {
            model.next_pane();
        }
        Command::PrevPane => {
            model.prev_pane();
        }
        Command::ClosePane => {
            if !model.close_active_pane() {
                tracing::debug!(target: "actions.dispatch", "close_last_pane_refused");
                return DispatchResult::clean();
            }
            return DispatchResult::dirty();
        }
        _ => {}
    }
    let after = model.panes().active_index();
    tracing::trace!(target: "actions.dispatch", op = %command, from = before, to = after, "pane");
    DispatchResult::changed(after != before)
}
