//! Page template parser
//!
//! Turns the markdown-like page format into [`Block`]s. Only the
//! block structure is interpreted; inline markdown inside paragraphs is
//! left untouched for the output layer.
//!
//! Recognised lines:
//! - `# `, `## `, `### ` headings
//! - `![caption](path)` and `![caption](path){width=300}` images
//! - fenced code blocks with an optional language
//! - `::button[label](url)` and `::animation[caption](file.json)`
//! - `---` dividers

use super::block::{Block, Document};
use crate::error::{ContentError, Result};
use regex::Regex;
use std::sync::OnceLock;

pub(crate) const FENCE: &str = "```";

fn image_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^!\[(?P<caption>[^\]]*)\]\((?P<path>[^)\s]+)\)(?:\{width=(?P<width>\d+)\})?$")
            .expect("Invalid regex pattern")
    })
}

fn directive_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^::(?P<kind>[a-z]+)\[(?P<label>[^\]]*)\]\((?P<target>[^)\s]+)\)$")
            .expect("Invalid regex pattern")
    })
}

/// Parse a page template into a document
pub fn parse_document(text: &str) -> Result<Document> {
    let mut blocks = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();
    let mut lines = text.lines().enumerate();

    while let Some((index, line)) = lines.next() {
        let trimmed = line.trim();

        if let Some(info) = trimmed.strip_prefix(FENCE) {
            flush_paragraph(&mut paragraph, &mut blocks);
            let language = Some(info.trim())
                .filter(|lang| !lang.is_empty())
                .map(str::to_string);
            let indent = indent_width(line);

            let mut source = Vec::new();
            let mut closed = false;
            for (_, code_line) in lines.by_ref() {
                if code_line.trim() == FENCE {
                    closed = true;
                    break;
                }
                source.push(strip_indent(code_line, indent));
            }
            if !closed {
                return Err(ContentError::UnterminatedFence { line: index + 1 }.into());
            }

            blocks.push(Block::Code {
                language,
                source: source.join("\n"),
            });
            continue;
        }

        if trimmed.is_empty() {
            flush_paragraph(&mut paragraph, &mut blocks);
            continue;
        }

        if let Some(block) = parse_heading(trimmed) {
            flush_paragraph(&mut paragraph, &mut blocks);
            blocks.push(block);
            continue;
        }

        if trimmed == "---" {
            flush_paragraph(&mut paragraph, &mut blocks);
            blocks.push(Block::Divider);
            continue;
        }

        if trimmed.starts_with("::") {
            flush_paragraph(&mut paragraph, &mut blocks);
            blocks.push(parse_directive(trimmed, index + 1)?);
            continue;
        }

        if let Some(captures) = image_regex().captures(trimmed) {
            flush_paragraph(&mut paragraph, &mut blocks);
            blocks.push(Block::Image {
                path: captures["path"].to_string(),
                caption: captures["caption"].trim().to_string(),
                width: captures
                    .name("width")
                    .and_then(|width| width.as_str().parse().ok()),
            });
            continue;
        }

        paragraph.push(line.trim_end());
    }

    flush_paragraph(&mut paragraph, &mut blocks);
    Ok(Document::new(blocks))
}

fn parse_heading(line: &str) -> Option<Block> {
    if let Some(text) = line.strip_prefix("### ") {
        Some(Block::Heading(text.trim().to_string()))
    } else if let Some(text) = line.strip_prefix("## ") {
        Some(Block::Subheader(text.trim().to_string()))
    } else {
        line.strip_prefix("# ")
            .map(|text| Block::Title(text.trim().to_string()))
    }
}

fn parse_directive(line: &str, line_number: usize) -> Result<Block> {
    let malformed = || ContentError::MalformedDirective {
        line: line_number,
        text: line.to_string(),
    };

    let captures = directive_regex().captures(line).ok_or_else(malformed)?;
    let label = captures["label"].trim().to_string();
    let target = captures["target"].to_string();

    match &captures["kind"] {
        "button" => Ok(Block::Button { label, url: target }),
        "animation" => Ok(Block::Animation {
            path: target,
            caption: label,
        }),
        _ => Err(malformed().into()),
    }
}

/// Paragraph lines keep their relative indentation so nested lists survive.
fn flush_paragraph(paragraph: &mut Vec<&str>, blocks: &mut Vec<Block>) {
    if paragraph.is_empty() {
        return;
    }

    let indent = paragraph
        .iter()
        .map(|line| indent_width(line))
        .min()
        .unwrap_or(0);
    let text = paragraph
        .iter()
        .map(|line| strip_indent(line, indent))
        .collect::<Vec<_>>()
        .join("\n");

    blocks.push(Block::Paragraph(text));
    paragraph.clear();
}

/// Leading ASCII spaces and tabs, in bytes. Other whitespace is content.
fn indent_width(line: &str) -> usize {
    line.len() - line.trim_start_matches([' ', '\t']).len()
}

fn strip_indent(line: &str, indent: usize) -> &str {
    &line[indent_width(line).min(indent)..]
}
