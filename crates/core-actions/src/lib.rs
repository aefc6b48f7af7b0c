//! Command execution for qed.
//!
//! An [`InputEvent`](core_events::InputEvent) is resolved through the current
//! buffer's mode keymap to a [`Command`](core_keymap::Command), which runs
//! against the [`EditorModel`](core_model::EditorModel) session. Commands never
//! fail outward: environmental failures are logged and reported as a clean
//! [`DispatchResult`].

pub mod dispatcher;
pub mod io_ops;

pub use dispatcher::{DispatchResult, execute, run};
