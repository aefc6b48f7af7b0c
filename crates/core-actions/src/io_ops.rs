//! Load/save commands for the current buffer.
//!
//! Both act on the buffer's own file name; a scratch buffer has none and the
//! command is a no-op. Failures are logged and leave buffer and file as they
//! were; nothing propagates past the command.

use crate::DispatchResult;
use core_state::EditorState;
use std::path::Path;

/// Replace the current buffer's content with its file.
pub fn load_current(state: &mut EditorState) -> DispatchResult {
    let buffer = state.current_buffer_mut();
    let Some(path) = buffer.file_name.clone() else {
        tracing::debug!(target: "actions.io", "load_without_file_name");
        return DispatchResult::clean();
    };
    match buffer.text.load(&path) {
        Ok(size_bytes) => {
            tracing::info!(target: "actions.io", file = %path.display(), size_bytes, "loaded");
            DispatchResult::buffer_replaced()
        }
        Err(error) => {
            tracing::error!(target: "actions.io", error = ?error, "load_failed");
            DispatchResult::clean()
        }
    }
}

/// Write the current buffer to its file.
pub fn save_current(state: &EditorState) -> DispatchResult {
    let buffer = state.current_buffer();
    let Some(path) = buffer.file_name.as_deref() else {
        tracing::debug!(target: "actions.io", "save_without_file_name");
        return DispatchResult::clean();
    };
    match buffer.text.save(path) {
        Ok(()) => {
            tracing::info!(target: "actions.io", file = %path.display(), size_bytes = buffer.text.len(), "saved");
        }
        Err(error) => {
            tracing::error!(target: "actions.io", error = ?error, "save_failed");
        }
    }
    DispatchResult::clean()
}

/// Open `path` into the current buffer and remember it as the buffer's file.
///
/// A missing file is not an error: the buffer stays empty and saving creates it.
pub fn open_into_current(state: &mut EditorState, path: &Path) -> DispatchResult {
    let buffer = state.current_buffer_mut();
    buffer.file_name = Some(path.to_path_buf());
    if !path.exists() {
        tracing::info!(target: "actions.io", file = %path.display(), "new_file");
        return DispatchResult::dirty();
    }
    load_current(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_events::UsLayout;
    use core_keymap::{ModeCache, ModeKind};
    use core_state::BufferSettings;

    fn state() -> EditorState {
        EditorState::new(
            ModeCache::new(&UsLayout).unwrap(),
            BufferSettings::default(),
            ModeKind::Text,
        )
    }

    #[test]
    fn save_then_load_round_trips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        let mut st = state();
        st.current_buffer_mut().file_name = Some(path.clone());
        st.current_buffer_mut().text.insert_bytes(0, b"one\ntwo");
        save_current(&st);
        assert_eq!(std::fs::read(&path).unwrap(), b"one\ntwo");
        st.current_buffer_mut().text.clear();
        let r = load_current(&mut st);
        assert!(r.buffer_replaced);
        assert_eq!(st.current_buffer().text.contents(), b"one\ntwo");
        assert_eq!(st.current_buffer().text.point(), 0);
    }

    #[test]
    fn scratch_buffer_load_and_save_are_no_ops() {
        let mut st = state();
        st.current_buffer_mut().text.insert(0, b'z');
        assert_eq!(load_current(&mut st), DispatchResult::clean());
        assert_eq!(save_current(&st), DispatchResult::clean());
        assert_eq!(st.current_buffer().text.contents(), b"z");
    }

    #[test]
    fn failed_load_leaves_buffer_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let mut st = state();
        st.current_buffer_mut().file_name = Some(dir.path().join("missing.txt"));
        st.current_buffer_mut().text.insert_bytes(0, b"keep");
        let r = load_current(&mut st);
        assert_eq!(r, DispatchResult::clean());
        assert_eq!(st.current_buffer().text.contents(), b"keep");
    }

    #[test]
    fn failed_save_leaves_existing_target_alone() {
        let dir = tempfile::tempdir().unwrap();
        let mut st = state();
        // a directory cannot be opened for writing
        st.current_buffer_mut().file_name = Some(dir.path().to_path_buf());
        st.current_buffer_mut().text.insert_bytes(0, b"data");
        assert_eq!(save_current(&st), DispatchResult::clean());
        assert!(dir.path().is_dir());
    }

    #[test]
    fn open_missing_file_names_buffer() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fresh.txt");
        let mut st = state();
        open_into_current(&mut st, &path);
        assert_eq!(st.current_buffer().file_name.as_deref(), Some(path.as_path()));
        assert!(st.current_buffer().text.is_empty());
    }
}
