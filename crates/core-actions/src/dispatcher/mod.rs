//! Dispatcher: resolve, record, run, recompute.
//!
//! Sub-modules by concern:
//! * `motion` - point movement, including goal-column line motion
//! * `edit`   - text mutation (self-insert/newline/delete)
//! * `mode`   - switching the current buffer's mode
//! * `pane`   - pane cycling and closing
//! * `calc`   - calculator stack commands
//!
//! Every dispatched event is processed to completion, then all panes are
//! recomputed so each keeps `start <= point <= end`.

use core_events::InputEvent;
use core_keymap::Command;
use core_model::EditorModel;

mod calc;
mod edit;
mod mode;
mod motion;
mod pane;

/// Result of dispatching a single event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    pub dirty: bool,
    pub quit: bool,
    /// The buffer content was replaced wholesale (load); cached layout is stale.
    pub buffer_replaced: bool,
}

impl DispatchResult {
    pub fn dirty() -> Self {
        Self {
            dirty: true,
            quit: false,
            buffer_replaced: false,
        }
    }
    pub fn clean() -> Self {
        Self {
            dirty: false,
            quit: false,
            buffer_replaced: false,
        }
    }
    pub fn quit() -> Self {
        Self {
            dirty: true,
            quit: true,
            buffer_replaced: false,
        }
    }
    pub fn buffer_replaced() -> Self {
        Self {
            dirty: true,
            quit: false,
            buffer_replaced: true,
        }
    }

    /// `dirty()` when `changed`, else `clean()`.
    pub fn changed(changed: bool) -> Self {
        if changed { Self::dirty() } else { Self::clean() }
    }
}

/// Resolve `event` against the current buffer's mode, record it as the last
/// event, run the command and recompute every pane.
pub fn execute(event: InputEvent, model: &mut EditorModel) -> DispatchResult {
    let command = model
        .state()
        .current_buffer()
        .mode()
        .keymap()
        .resolve(event.combination);
    tracing::trace!(
        target: "actions.dispatch",
        combination = %event.combination,
        character = event.character,
        %command,
        "execute"
    );
    model.state_mut().last_event = Some(event);
    run(command, model)
}

/// Run `command` against the session, then recompute the panes.
pub fn run(command: Command, model: &mut EditorModel) -> DispatchResult {
    let result = match command {
        Command::Nothing => DispatchResult::clean(),
        Command::SelfInsert => edit::self_insert(model.state_mut()),
        Command::InsertNewline => edit::insert_newline(model.state_mut()),
        Command::DeleteBackward => edit::delete_backward(model.state_mut()),
        Command::DeleteForward => edit::delete_forward(model.state_mut()),
        Command::NextChar
        | Command::PrevChar
        | Command::LineStart
        | Command::LineEnd
        | Command::BufferStart
        | Command::BufferEnd => motion::horizontal(command, model.state_mut()),
        Command::NextLine | Command::PrevLine => motion::vertical(command, model.state_mut()),
        Command::Load => crate::io_ops::load_current(model.state_mut()),
        Command::Save => crate::io_ops::save_current(model.state()),
        Command::Quit => {
            model.state_mut().quit = true;
            tracing::info!(target: "actions.dispatch", "quit_requested");
            DispatchResult::quit()
        }
        Command::NextPane | Command::PrevPane | Command::ClosePane => pane::handle(command, model),
        Command::TextMode | Command::RpnMode => mode::handle(command, model.state_mut()),
        Command::RpnPush | Command::RpnPop | Command::RpnAdd | Command::RpnMultiply => {
            calc::handle(command, model.state_mut())
        }
    };
    if !command.is_vertical_motion() {
        model.state_mut().goal_column = None;
    }
    model.recompute_all();
    result
}
