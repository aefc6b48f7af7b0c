//! Status line composition.
//!
//! Format: `<marker><title> (<mode>)`, padded or truncated to the pane width.
//! The marker is `*` for the active pane and a space otherwise.

pub struct StatusContext<'a> {
    pub title: &'a str,
    pub mode_name: &'a str,
    pub active: bool,
}

pub fn format_status(ctx: &StatusContext<'_>, width: usize) -> String {
    let marker = if ctx.active { '*' } else { ' ' };
    let text = format!("{marker}{} ({})", ctx.title, ctx.mode_name);
    fit(&text, width)
}

/// Truncate or space-pad `text` to exactly `width` characters.
pub(crate) fn fit(text: &str, width: usize) -> String {
    let mut out: String = text.chars().take(width).collect();
    let used = out.chars().count();
    out.extend(std::iter::repeat_n(' ', width - used));
    out
}
