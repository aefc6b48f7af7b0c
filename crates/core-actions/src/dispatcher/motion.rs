//! Point movement.
//!
//! Horizontal motions assign a navigation primitive's result to the point.
//! Vertical motions keep a goal column in the session: the first line motion
//! records the point's column, later ones aim for it and clamp to each
//! line's length. The dispatcher clears the goal after any other command.

use super::DispatchResult;
use core_keymap::Command;
use core_state::EditorState;
use core_text::motion;

pub(crate) fn horizontal(command: Command, state: &mut EditorState) -> DispatchResult {
    let text = &mut state.current_buffer_mut().text;
    let before = text.point();
    let target = match command {
        Command::NextChar => motion::next_char(text, before),
        Command::PrevChar => motion::prev_char(text, before),
        Command::LineStart => motion::line_start(text, before),
        Command::LineEnd => motion::line_end(text, before),
        Command::BufferStart => motion::buffer_start(text),
        Command::BufferEnd => motion::buffer_end(text),
        _ => before,
    };
    text.set_point(target);
    tracing::trace!(target: "actions.dispatch", motion = %command, from = before, to = target, "motion");
    DispatchResult::changed(target != before)
}

pub(crate) fn vertical(command: Command, state: &mut EditorState) -> DispatchResult {
    let before = state.current_buffer().text.point();
    let goal = *state
        .goal_column
        .get_or_insert_with(|| motion::column(&state.buffers[state.current].text, before));
    let text = &mut state.current_buffer_mut().text;
    let line = match command {
        Command::NextLine if motion::line_end(text, before) < text.len() => {
            motion::next_line_start(text, before)
        }
        Command::PrevLine if motion::line_start(text, before) > 0 => {
            motion::prev_line_start(text, before)
        }
        _ => return DispatchResult::clean(),
    };
    let target = line + motion::line_length(text, line).min(goal);
    text.set_point(target);
    tracing::trace!(target: "actions.dispatch", motion = %command, from = before, to = target, goal, "motion");
    DispatchResult::changed(target != before)
}
