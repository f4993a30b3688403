//! Menu module for smenu.
//!
//! Rendering of the numbered script box, selection prompt, and the session
//! that ties discovery, prompt and launch together.

mod prompt;
mod render;
mod session;

pub use prompt::{parse_selection, read_selection, PROMPT};
pub use render::{draw_box, format_option, menu_lines, render_menu};
pub use session::Session;
