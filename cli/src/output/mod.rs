//! CLI-specific output implementations
//!
//! Page layout shared with the terminal UI, plus ANSI formatting for
//! line-oriented commands.

pub mod formatter;
pub mod terminal;

pub use formatter::{page_lines, LineStyle, StyledLine};
pub use terminal::{format_notice, write_page, Console, OutputHandle};
