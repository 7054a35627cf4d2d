//! Text layout utilities shared by the terminal UI and plain output
//!
//! Page text contains emoji and other wide characters, so all widths here
//! are display widths, not byte or char counts.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Columns kept free on the right of plain page output
const PAGE_MARGIN: usize = 2;
const MIN_PAGE_WIDTH: usize = 30;
/// Used when stdout is not a terminal, e.g. `suraksha show faqs > faqs.txt`
const DEFAULT_PAGE_WIDTH: usize = 80;

/// Wrap each line of `text` at word boundaries so no line is wider than
/// `max_width` columns. Blank lines are kept, words wider than a line are
/// split between characters.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for line in text.lines() {
        if UnicodeWidthStr::width(line) <= max_width {
            lines.push(line.to_string());
            continue;
        }

        let mut current = String::new();
        let mut current_width = 0;
        for word in line.split_whitespace() {
            let word_width = UnicodeWidthStr::width(word);
            let needed = if current.is_empty() { word_width } else { word_width + 1 };

            if current_width + needed <= max_width {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
                current_width += needed;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if word_width <= max_width {
                current = word.to_string();
                current_width = word_width;
            } else {
                // URLs and long identifiers: hard break, the tail starts the next line
                let mut pieces = break_word(word, max_width);
                let tail = pieces.pop().unwrap_or_default();
                lines.extend(pieces);
                current_width = UnicodeWidthStr::width(tail.as_str());
                current = tail;
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Split one word into pieces of at most `max_width` columns
fn break_word(word: &str, max_width: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut width = 0;
    for ch in word.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + ch_width > max_width && !piece.is_empty() {
            pieces.push(std::mem::take(&mut piece));
            width = 0;
        }
        piece.push(ch);
        width += ch_width;
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

/// Wrap width for `suraksha show` when `--width` is not given
pub fn get_terminal_width() -> usize {
    crossterm::terminal::size()
        .map(|(cols, _)| (cols as usize).saturating_sub(PAGE_MARGIN).max(MIN_PAGE_WIDTH))
        .unwrap_or(DEFAULT_PAGE_WIDTH)
}

/// Pad `text` with spaces to exactly `width` columns, truncating if longer
pub fn fit_to_width(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + ch_width > width {
            break;
        }
        out.push(ch);
        used += ch_width;
    }
    out.extend(std::iter::repeat(' ').take(width - used));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_simple() {
        let text = "Hello world";
        let wrapped = wrap_text(text, 20);
        assert_eq!(wrapped, vec!["Hello world"]);
    }

    #[test]
    fn test_wrap_text_long_line() {
        let text = "This is a very long line that should be wrapped";
        let wrapped = wrap_text(text, 20);
        assert!(wrapped.len() > 1);
        for line in &wrapped {
            assert!(UnicodeWidthStr::width(line.as_str()) <= 20);
        }
    }

    #[test]
    fn test_wrap_text_unicode() {
        let text = "🏠 Suraksha 是一个灾害报告平台的测试文本";
        let wrapped = wrap_text(text, 10);
        for line in &wrapped {
            assert!(UnicodeWidthStr::width(line.as_str()) <= 10);
        }
    }

    #[test]
    fn test_wrap_text_keeps_empty_lines() {
        let wrapped = wrap_text("Suraksha\n\nReports", 40);
        assert_eq!(wrapped, vec!["Suraksha", "", "Reports"]);
    }

    #[test]
    fn test_wrap_text_breaks_long_urls() {
        let wrapped = wrap_text("see https://github.com/Vibgitcode27/Suraksha now", 12);
        assert_eq!(
            wrapped,
            vec!["see", "https://gith", "ub.com/Vibgi", "tcode27/Sura", "ksha now"]
        );
    }

    #[test]
    fn test_fit_to_width() {
        assert_eq!(fit_to_width("FAQs", 6), "FAQs  ");
        assert_eq!(fit_to_width("Machine Learning", 7), "Machine");
        assert_eq!(UnicodeWidthStr::width(fit_to_width("🤖 ML", 4).as_str()), 4);
    }

    #[test]
    fn test_terminal_width() {
        let width = get_terminal_width();
        assert!(width >= MIN_PAGE_WIDTH);
    }
}
