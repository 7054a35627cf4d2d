//! Rendered page to styled text lines
//!
//! Both the terminal UI and `suraksha show` display pages as a list of
//! lines tagged with a style; each front end maps styles to its own colors.

use crate::interactive::text_utils::wrap_text;
use suraksha_core::export::html::inline_plain;
use suraksha_core::render::AssetStatus;
use suraksha_core::{RenderedBlock, RenderedPage};

/// How a line should be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Title,
    Subheader,
    Heading,
    Body,
    Code,
    Link,
    Caption,
    Placeholder,
    Divider,
    Blank,
}

/// One display line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledLine {
    pub text: String,
    pub style: LineStyle,
}

impl StyledLine {
    pub fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    fn blank() -> Self {
        Self::new("", LineStyle::Blank)
    }
}

/// Lay out a page for a terminal `width` columns wide
pub fn page_lines(page: &RenderedPage, width: usize) -> Vec<StyledLine> {
    let width = width.max(20);
    let mut lines = Vec::new();

    for block in &page.blocks {
        block_lines(block, width, &mut lines);
        lines.push(StyledLine::blank());
    }

    while lines.last().is_some_and(|line| line.style == LineStyle::Blank) {
        lines.pop();
    }
    lines
}

fn push_wrapped(lines: &mut Vec<StyledLine>, text: &str, width: usize, style: LineStyle) {
    lines.extend(
        wrap_text(text, width)
            .into_iter()
            .map(|line| StyledLine::new(line, style)),
    );
}

fn block_lines(block: &RenderedBlock, width: usize, lines: &mut Vec<StyledLine>) {
    match block {
        RenderedBlock::Title { text } => {
            push_wrapped(lines, &inline_plain(text), width, LineStyle::Title)
        }
        RenderedBlock::Subheader { text } => {
            push_wrapped(lines, &inline_plain(text), width, LineStyle::Subheader)
        }
        RenderedBlock::Heading { text } => {
            push_wrapped(lines, &inline_plain(text), width, LineStyle::Heading)
        }
        RenderedBlock::Paragraph { text } => {
            for line in text.lines() {
                paragraph_line(line, width, lines);
            }
        }
        RenderedBlock::Code { source, .. } => {
            lines.extend(
                source
                    .lines()
                    .map(|line| StyledLine::new(format!("  {}", line), LineStyle::Code)),
            );
        }
        RenderedBlock::Button { label, url } => {
            lines.push(StyledLine::new(format!("[ {} ] → {}", label, url), LineStyle::Link));
        }
        RenderedBlock::Divider => {
            lines.push(StyledLine::new("─".repeat(width), LineStyle::Divider));
        }
        RenderedBlock::Image { asset, caption, .. } => {
            media_lines("🖼", "Image", asset, caption, width, lines)
        }
        RenderedBlock::Animation { asset, caption } => {
            media_lines("🎞", "Animation", asset, caption, width, lines)
        }
    }
}

/// List markers become bullets; wrapped continuation lines keep the item's indent
fn paragraph_line(line: &str, width: usize, lines: &mut Vec<StyledLine>) {
    let indent = line.len() - line.trim_start().len();
    let trimmed = inline_plain(line.trim_start());

    let (marker, rest) = match trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("* "))
    {
        Some(rest) => ("• ".to_string(), rest.to_string()),
        None => (String::new(), trimmed.clone()),
    };

    let lead = " ".repeat(indent);
    let hang = " ".repeat(indent + marker.chars().count());
    let available = width.saturating_sub(hang.len()).max(10);

    for (i, wrapped) in wrap_text(&rest, available).into_iter().enumerate() {
        let text = if i == 0 {
            format!("{}{}{}", lead, marker, wrapped)
        } else {
            format!("{}{}", hang, wrapped)
        };
        lines.push(StyledLine::new(text, LineStyle::Body));
    }
}

fn media_lines(
    glyph: &str,
    kind: &str,
    asset: &AssetStatus,
    caption: &str,
    width: usize,
    lines: &mut Vec<StyledLine>,
) {
    match asset {
        AssetStatus::Resolved { path, .. } => push_wrapped(
            lines,
            &format!("{} {} ({})", glyph, caption, path),
            width,
            LineStyle::Caption,
        ),
        AssetStatus::Missing { path, .. } => {
            push_wrapped(
                lines,
                &format!("[{} unavailable: {}]", kind, path),
                width,
                LineStyle::Placeholder,
            );
            push_wrapped(lines, caption, width, LineStyle::Caption);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use suraksha_core::RouteId;

    fn page(blocks: Vec<RenderedBlock>) -> RenderedPage {
        RenderedPage {
            route: RouteId::from("backend"),
            name: "Backend".to_string(),
            blocks,
            notices: vec![],
        }
    }

    #[test]
    fn test_headings_and_paragraphs() {
        let lines = page_lines(
            &page(vec![
                RenderedBlock::Title {
                    text: "Backend".to_string(),
                },
                RenderedBlock::Paragraph {
                    text: "Uses **Redis** queues\n- one\n    - nested".to_string(),
                },
            ]),
            80,
        );

        assert_eq!(
            lines,
            vec![
                StyledLine::new("Backend", LineStyle::Title),
                StyledLine::blank(),
                StyledLine::new("Uses Redis queues", LineStyle::Body),
                StyledLine::new("• one", LineStyle::Body),
                StyledLine::new("    • nested", LineStyle::Body),
            ]
        );
    }

    #[test]
    fn test_list_items_hang_when_wrapped() {
        let lines = page_lines(
            &page(vec![RenderedBlock::Paragraph {
                text: "- reports are verified before they reach the public feed".to_string(),
            }]),
            24,
        );
        assert!(lines.len() > 1);
        assert!(lines[0].text.starts_with("• "));
        assert!(lines[1..].iter().all(|line| line.text.starts_with("  ")));
    }

    #[test]
    fn test_code_is_not_wrapped() {
        let source = "model = YOLO('yolov9c.pt')  # a fairly long line of python code here";
        let lines = page_lines(
            &page(vec![RenderedBlock::Code {
                language: Some("python".to_string()),
                source: source.to_string(),
            }]),
            20,
        );
        assert_eq!(lines, vec![StyledLine::new(format!("  {}", source), LineStyle::Code)]);
    }

    #[test]
    fn test_media_placeholders() {
        let lines = page_lines(
            &page(vec![
                RenderedBlock::Image {
                    asset: AssetStatus::Missing {
                        path: "Arch.jpg".to_string(),
                        reason: "Asset not found: Arch.jpg".to_string(),
                    },
                    caption: "Backend Architecture".to_string(),
                    width: None,
                },
                RenderedBlock::Image {
                    asset: AssetStatus::Resolved {
                        path: "Upload.jpg".to_string(),
                        file: PathBuf::from("Assets/Upload.jpg"),
                    },
                    caption: "Upload".to_string(),
                    width: None,
                },
            ]),
            80,
        );

        assert_eq!(lines[0], StyledLine::new("[Image unavailable: Arch.jpg]", LineStyle::Placeholder));
        assert_eq!(lines[1], StyledLine::new("Backend Architecture", LineStyle::Caption));
        assert_eq!(lines[3], StyledLine::new("🖼 Upload (Upload.jpg)", LineStyle::Caption));
    }

    #[test]
    fn test_button_and_divider() {
        let lines = page_lines(
            &page(vec![
                RenderedBlock::Divider,
                RenderedBlock::Button {
                    label: "Visit GitHub Repository".to_string(),
                    url: "https://github.com/Vibgitcode27/Suraksha".to_string(),
                },
            ]),
            30,
        );
        assert_eq!(lines[0].text.chars().count(), 30);
        assert_eq!(lines[0].style, LineStyle::Divider);
        assert_eq!(
            lines[2].text,
            "[ Visit GitHub Repository ] → https://github.com/Vibgitcode27/Suraksha"
        );
    }
}
