#![allow(dead_code)] // Shared across integration tests; each test binary uses a subset of helpers.

use core_actions::{DispatchResult, execute};
use core_events::{InputEvent, KeyCombination, Modifiers, UsLayout, keys};
use core_keymap::{ModeCache, ModeKind};
use core_model::{EditorModel, Orientation};
use core_state::{BufferSettings, EditorState};

pub fn model() -> EditorModel {
    model_with(BufferSettings::default())
}

pub fn model_with(settings: BufferSettings) -> EditorModel {
    let state = EditorState::new(
        ModeCache::new(&UsLayout).unwrap(),
        settings,
        ModeKind::Text,
    );
    let mut model = EditorModel::new(state, Orientation::Vertical);
    model.resize(80, 24);
    model
}

pub fn press(model: &mut EditorModel, combination: KeyCombination) -> DispatchResult {
    execute(InputEvent::new(combination, 0), model)
}

pub fn type_str(model: &mut EditorModel, s: &str) {
    for b in s.bytes() {
        let event = if b == b'\n' {
            InputEvent::new(KeyCombination::plain(keys::RETURN), 0)
        } else {
            InputEvent::typed(b).unwrap()
        };
        execute(event, model);
    }
}

pub fn contents(model: &EditorModel) -> String {
    String::from_utf8(model.state().current_buffer().text.contents()).unwrap()
}

pub fn point(model: &EditorModel) -> usize {
    model.state().current_buffer().text.point()
}

pub fn next_pane() -> KeyCombination {
    KeyCombination::ctrl(keys::TAB)
}

pub fn prev_pane() -> KeyCombination {
    KeyCombination::new(keys::TAB, Modifiers::CTRL | Modifiers::SHIFT)
}
