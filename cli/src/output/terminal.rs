//! Terminal output abstraction and formatting utilities
//!
//! Writes laid-out pages to a line-oriented output with ANSI styling.

use super::formatter::{page_lines, LineStyle};
use suraksha_core::RenderedPage;

/// Trait to abstract over different output handles (stdout, test buffers)
pub trait OutputHandle {
    fn println<S: ToString>(&self, msg: S);
}

/// Process stdout
pub struct Console;

impl OutputHandle for Console {
    fn println<S: ToString>(&self, msg: S) {
        println!("{}", msg.to_string());
    }
}

/// Apply ANSI color formatting to text
pub fn apply_color(text: &str, color: AnsiColor) -> String {
    match color {
        AnsiColor::Gray => format!("\x1b[90m{}\x1b[0m", text),
        AnsiColor::Green => format!("\x1b[32m{}\x1b[0m", text),
        AnsiColor::Yellow => format!("\x1b[33m{}\x1b[0m", text),
        AnsiColor::Blue => format!("\x1b[34m{}\x1b[0m", text),
        AnsiColor::Red => format!("\x1b[31m{}\x1b[0m", text),
        AnsiColor::Cyan => format!("\x1b[36m{}\x1b[0m", text),
    }
}

/// Apply bold formatting to text
pub fn apply_bold(text: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", text)
}

/// ANSI color codes for terminal output
#[derive(Debug, Clone, Copy)]
pub enum AnsiColor {
    Gray,
    Green,
    Yellow,
    Blue,
    Red,
    Cyan,
}

/// Style one line of page text
pub fn style_line(text: &str, style: LineStyle) -> String {
    match style {
        LineStyle::Title => apply_bold(&apply_color(text, AnsiColor::Cyan)),
        LineStyle::Subheader => apply_color(text, AnsiColor::Yellow),
        LineStyle::Heading => apply_bold(&apply_color(text, AnsiColor::Green)),
        LineStyle::Code | LineStyle::Divider | LineStyle::Caption => {
            apply_color(text, AnsiColor::Gray)
        }
        LineStyle::Link => apply_color(text, AnsiColor::Blue),
        LineStyle::Placeholder => apply_color(text, AnsiColor::Red),
        LineStyle::Body | LineStyle::Blank => text.to_string(),
    }
}

/// Write a rendered page, returning the number of lines written
pub fn write_page<T: OutputHandle>(
    out: &T,
    page: &RenderedPage,
    terminal_width: usize,
    colors: bool,
) -> usize {
    let lines = page_lines(page, terminal_width);
    for line in &lines {
        if colors {
            out.println(style_line(&line.text, line.style));
        } else {
            out.println(&line.text);
        }
    }
    lines.len()
}

/// Format a notice line
pub fn format_notice(message: &str, colors: bool) -> String {
    let text = format!("⚠ {}", message);
    if colors {
        apply_color(&text, AnsiColor::Yellow)
    } else {
        text
    }
}
