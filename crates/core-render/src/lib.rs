//! Frame composition for the pane set.
//!
//! Every pane region is repainted in full: each text row is padded to the
//! region width so neighbouring panes never need a line clear, the bottom row
//! carries the reverse-video status line, and the terminal cursor is parked at
//! the active pane's caret.
//!
//! Bytes outside printable ASCII are shown as `.`; a tab shows as a space.

use anyhow::Result;
use core_events::is_printable;
use core_model::{PaneView, STATUS_ROWS};

pub mod status;
pub mod writer;

pub use status::{StatusContext, format_status};
pub use writer::Writer;

/// Display form of one line of buffer bytes.
pub fn sanitize(line: &[u8]) -> String {
    line.iter()
        .map(|&b| match b {
            b'\t' => ' ',
            b if is_printable(b) => b as char,
            _ => '.',
        })
        .collect()
}

/// Queue the commands drawing `views` onto `writer`.
pub fn compose(views: &[PaneView<'_>], writer: &mut Writer) {
    writer.hide_cursor();
    let mut caret = None;
    for view in views {
        let region = view.region;
        let width = region.width as usize;
        if width == 0 || region.height == 0 {
            continue;
        }
        let text_rows = region.height.saturating_sub(STATUS_ROWS);
        for row in 0..text_rows {
            let line = view
                .frame
                .lines
                .get(row as usize)
                .map(|l| sanitize(l))
                .unwrap_or_default();
            writer.move_to(region.x, region.y + row);
            writer.print(status::fit(&line, width));
        }
        let ctx = StatusContext {
            title: &view.title,
            mode_name: view.mode_name,
            active: view.active,
        };
        writer.move_to(region.x, region.y + text_rows);
        writer.reverse(true);
        writer.print(format_status(&ctx, width));
        writer.reverse(false);

        if let Some((row, col)) = view.frame.caret {
            let col = (col as u16).min(region.width - 1);
            caret = Some((region.x + col, region.y + row as u16));
        }
    }
    if let Some((x, y)) = caret {
        writer.move_to(x, y);
        writer.show_cursor();
    }
}

/// Compose and flush one frame to stdout.
pub fn render(views: &[PaneView<'_>]) -> Result<()> {
    let mut writer = Writer::new();
    compose(views, &mut writer);
    tracing::trace!(target: "render", panes = views.len(), commands = writer.commands().len(), "frame");
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_events::UsLayout;
    use core_keymap::{ModeCache, ModeKind};
    use core_model::{EditorModel, Orientation};
    use core_state::{BufferSettings, EditorState};
    use pretty_assertions::assert_eq;
    use writer::Command;

    fn state(text: &[u8]) -> EditorState {
        let mut state = EditorState::new(
            ModeCache::new(&UsLayout).unwrap(),
            BufferSettings::default(),
            ModeKind::Text,
        );
        state.current_buffer_mut().text.insert_bytes(0, text);
        state
    }

    /// Pane created on an empty buffer, text typed afterwards.
    fn model(text: &[u8]) -> EditorModel {
        let mut m = EditorModel::new(state(b""), Orientation::Vertical);
        m.state_mut().current_buffer_mut().text.insert_bytes(0, text);
        m
    }

    fn prints(writer: &Writer) -> Vec<String> {
        writer
            .commands()
            .iter()
            .filter_map(|c| match c {
                Command::Print(s) => Some(s.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn sanitize_masks_control_bytes() {
        assert_eq!(sanitize(b"a\tb\x01c\xff"), "a b.c.");
    }

    #[test]
    fn single_pane_rows_status_and_caret() {
        let mut m = model(b"ab\ncd");
        m.resize(6, 3);
        let views = m.frames();
        let mut w = Writer::new();
        compose(&views, &mut w);
        assert_eq!(prints(&w), vec!["ab    ", "cd    ", "*[scra"]);
        assert_eq!(
            &w.commands()[w.commands().len() - 2..],
            &[Command::MoveTo(2, 1), Command::ShowCursor]
        );
    }

    #[test]
    fn pane_opened_on_existing_text_starts_at_point_line() {
        let mut m = EditorModel::new(state(b"ab\ncd"), Orientation::Vertical);
        m.resize(6, 3);
        let views = m.frames();
        let mut w = Writer::new();
        compose(&views, &mut w);
        assert_eq!(prints(&w), vec!["cd    ", "      ", "*[scra"]);
        assert_eq!(
            &w.commands()[w.commands().len() - 2..],
            &[Command::MoveTo(2, 0), Command::ShowCursor]
        );
    }

    #[test]
    fn status_row_is_reverse_video() {
        let mut m = model(b"");
        m.resize(10, 2);
        let views = m.frames();
        let mut w = Writer::new();
        compose(&views, &mut w);
        let cmds = w.commands();
        let status = cmds
            .iter()
            .position(|c| matches!(c, Command::Print(s) if s.starts_with('*')))
            .unwrap();
        assert_eq!(cmds[status - 1], Command::Reverse(true));
        assert_eq!(cmds[status + 1], Command::Reverse(false));
        assert_eq!(cmds[status - 2], Command::MoveTo(0, 1));
    }

    #[test]
    fn split_panes_draw_side_by_side() {
        let mut m = model(b"xy");
        let id = m.state().current;
        m.open_pane(id);
        m.resize(8, 2);
        let views = m.frames();
        let mut w = Writer::new();
        compose(&views, &mut w);
        let moves: Vec<_> = w
            .commands()
            .iter()
            .filter(|c| matches!(c, Command::MoveTo(_, 0)))
            .cloned()
            .collect();
        // rows of each pane, then the caret in the active one
        assert_eq!(
            moves,
            vec![
                Command::MoveTo(0, 0),
                Command::MoveTo(4, 0),
                Command::MoveTo(2, 0)
            ]
        );
        assert_eq!(prints(&w), vec!["xy  ", "*[sc", "xy  ", " [sc"]);
    }

    #[test]
    fn zero_sized_model_draws_nothing_but_hide() {
        let mut m = model(b"abc");
        let views = m.frames();
        let mut w = Writer::new();
        compose(&views, &mut w);
        assert_eq!(w.commands(), &[Command::HideCursor]);
    }
}
