//! Menu rendering.
//!
//! Options are drawn inside a heavy box:
//!
//! ```text
//! ┏━━━━━━━━━━━━━━━━━━━━━━━━━┓
//! ┃ Choose a script to run: ┃
//! ┃ 1. Hello - Says hi      ┃
//! ┗━━━━━━━━━━━━━━━━━━━━━━━━━┛
//! ```

use crate::script::ScriptEntry;

const TOP_LEFT: char = '┏';
const TOP_RIGHT: char = '┓';
const BOTTOM_LEFT: char = '┗';
const BOTTOM_RIGHT: char = '┛';
const HORIZONTAL: char = '━';
const VERTICAL: char = '┃';

/// Format one menu option as `"<number>. <name> - <description>"`.
pub fn format_option(number: usize, entry: &ScriptEntry) -> String {
    format!("{}. {} - {}", number, entry.name(), entry.description())
}

/// Format every entry, numbered from 1.
pub fn menu_lines(entries: &[ScriptEntry]) -> Vec<String> {
    entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| format_option(idx + 1, entry))
        .collect()
}

/// Draw a box around the given lines.
///
/// Borders are two characters wider than the longest line; every line is
/// padded to that width. Width is counted in characters.
pub fn draw_box<S: AsRef<str>>(lines: &[S]) -> String {
    let width = lines
        .iter()
        .map(|l| l.as_ref().chars().count())
        .max()
        .unwrap_or(0);
    let border: String = std::iter::repeat(HORIZONTAL).take(width + 2).collect();

    let mut out = String::new();
    out.push(TOP_LEFT);
    out.push_str(&border);
    out.push(TOP_RIGHT);
    out.push('\n');

    for line in lines {
        let line = line.as_ref();
        let pad = width - line.chars().count();
        out.push(VERTICAL);
        out.push(' ');
        out.push_str(line);
        out.extend(std::iter::repeat(' ').take(pad));
        out.push(' ');
        out.push(VERTICAL);
        out.push('\n');
    }

    out.push(BOTTOM_LEFT);
    out.push_str(&border);
    out.push(BOTTOM_RIGHT);
    out.push('\n');
    out
}

/// Render the full boxed menu: title line followed by numbered options.
pub fn render_menu(title: &str, entries: &[ScriptEntry]) -> String {
    let mut lines = Vec::with_capacity(entries.len() + 1);
    if !title.is_empty() {
        lines.push(title.to_string());
    }
    lines.extend(menu_lines(entries));
    draw_box(&lines)
}
