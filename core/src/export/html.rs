//! HTML conversion of rendered blocks

use crate::render::{AssetStatus, RenderedBlock};
use handlebars::html_escape;
use regex::Regex;
use std::sync::OnceLock;

struct InlinePatterns {
    code: Regex,
    bold: Regex,
    link: Regex,
}

fn inline_patterns() -> &'static InlinePatterns {
    static PATTERNS: OnceLock<InlinePatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| InlinePatterns {
        code: Regex::new(r"`([^`]+)`").expect("Invalid regex pattern"),
        bold: Regex::new(r"\*\*([^*]+)\*\*").expect("Invalid regex pattern"),
        link: Regex::new(r"\[([^\]]+)\]\(([^)\s]+)\)").expect("Invalid regex pattern"),
    })
}

/// Convert the inline markdown subset (code, bold, links) to HTML.
/// Everything is escaped, so markup in the source stays literal.
pub fn inline_markdown(text: &str) -> String {
    let patterns = inline_patterns();
    let mut html = String::with_capacity(text.len());
    let mut last = 0;

    for captures in patterns.code.captures_iter(text) {
        let (Some(span), Some(code)) = (captures.get(0), captures.get(1)) else {
            continue;
        };
        html.push_str(&inline_prose(&text[last..span.start()]));
        html.push_str("<code>");
        html.push_str(&html_escape(code.as_str()));
        html.push_str("</code>");
        last = span.end();
    }
    html.push_str(&inline_prose(&text[last..]));
    html
}

/// Bold and links outside code spans
fn inline_prose(text: &str) -> String {
    let patterns = inline_patterns();
    let escaped = html_escape(text);
    let with_bold = patterns.bold.replace_all(&escaped, "<strong>$1</strong>");
    patterns
        .link
        .replace_all(&with_bold, r#"<a href="$2" target="_blank" rel="noopener">$1</a>"#)
        .into_owned()
}

/// Strip the inline markdown subset, leaving readable text
pub fn inline_plain(text: &str) -> String {
    let patterns = inline_patterns();
    let without_code = patterns.code.replace_all(text, "$1");
    let without_bold = patterns.bold.replace_all(&without_code, "$1");
    patterns.link.replace_all(&without_bold, "$1").into_owned()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Unordered,
    /// Number of the item that opened the list
    Ordered(u32),
}

impl ListKind {
    fn same_list(self, other: ListKind) -> bool {
        matches!(
            (self, other),
            (ListKind::Unordered, ListKind::Unordered) | (ListKind::Ordered(_), ListKind::Ordered(_))
        )
    }

    fn open_tag(self) -> String {
        match self {
            ListKind::Unordered => "<ul>\n".to_string(),
            ListKind::Ordered(1) => "<ol>\n".to_string(),
            ListKind::Ordered(start) => format!("<ol start=\"{}\">\n", start),
        }
    }

    fn close_tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "</ul>\n",
            ListKind::Ordered(_) => "</ol>\n",
        }
    }
}

/// Split a list item marker off a line: `- item`, `* item` or `3. item`
fn list_item(line: &str) -> Option<(ListKind, usize, &str)> {
    let indent = line.len() - line.trim_start().len();
    let trimmed = line.trim_start();

    if let Some(rest) = trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("* "))
    {
        return Some((ListKind::Unordered, indent, rest));
    }

    let digits = trimmed.chars().take_while(char::is_ascii_digit).count();
    if digits > 0 {
        if let (Some(rest), Ok(number)) = (
            trimmed[digits..].strip_prefix(". "),
            trimmed[..digits].parse::<u32>(),
        ) {
            return Some((ListKind::Ordered(number), indent, rest));
        }
    }
    None
}

/// Convert a paragraph block: runs of list items become lists (nested by
/// indentation), other lines become a `<p>` with line breaks.
pub fn paragraph_to_html(text: &str) -> String {
    let mut html = String::new();
    let mut open: Vec<(ListKind, usize)> = Vec::new();
    let mut prose: Vec<String> = Vec::new();

    let flush_prose = |prose: &mut Vec<String>, html: &mut String| {
        if !prose.is_empty() {
            html.push_str("<p>");
            html.push_str(&prose.join("<br>\n"));
            html.push_str("</p>\n");
            prose.clear();
        }
    };

    for line in text.lines() {
        match list_item(line) {
            Some((kind, indent, item)) => {
                flush_prose(&mut prose, &mut html);

                while let Some(&(open_kind, open_indent)) = open.last() {
                    if indent < open_indent || (indent == open_indent && !kind.same_list(open_kind)) {
                        html.push_str(open_kind.close_tag());
                        open.pop();
                    } else {
                        break;
                    }
                }

                let deeper = open.last().map_or(true, |&(_, open_indent)| indent > open_indent);
                if deeper {
                    html.push_str(&kind.open_tag());
                    open.push((kind, indent));
                }

                html.push_str("<li>");
                html.push_str(&inline_markdown(item));
                html.push_str("</li>\n");
            }
            None => {
                while let Some((kind, _)) = open.pop() {
                    html.push_str(kind.close_tag());
                }
                prose.push(inline_markdown(line.trim()));
            }
        }
    }

    flush_prose(&mut prose, &mut html);
    while let Some((kind, _)) = open.pop() {
        html.push_str(kind.close_tag());
    }
    html
}

/// Convert one block. `asset_href` maps a resolved asset reference to its
/// URL in the exported site.
pub fn block_to_html(block: &RenderedBlock, asset_href: &dyn Fn(&str) -> String) -> String {
    match block {
        RenderedBlock::Title { text } => format!("<h1>{}</h1>\n", inline_markdown(text)),
        RenderedBlock::Subheader { text } => format!("<h2>{}</h2>\n", inline_markdown(text)),
        RenderedBlock::Heading { text } => format!("<h3>{}</h3>\n", inline_markdown(text)),
        RenderedBlock::Paragraph { text } => paragraph_to_html(text),
        RenderedBlock::Code { language, source } => {
            let class = language
                .as_deref()
                .map(|lang| format!(" class=\"language-{}\"", html_escape(lang)))
                .unwrap_or_default();
            format!("<pre><code{}>{}</code></pre>\n", class, html_escape(source))
        }
        RenderedBlock::Button { label, url } => format!(
            "<p><a class=\"button\" href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a></p>\n",
            html_escape(url),
            html_escape(label)
        ),
        RenderedBlock::Divider => "<hr>\n".to_string(),
        RenderedBlock::Image {
            asset,
            caption,
            width,
        } => figure("Image", asset, caption, asset_href, |src| {
            let width = width
                .map(|w| format!(" width=\"{}\"", w))
                .unwrap_or_default();
            format!(
                "<img src=\"{}\" alt=\"{}\"{}>",
                html_escape(src),
                html_escape(caption),
                width
            )
        }),
        RenderedBlock::Animation { asset, caption } => {
            figure("Animation", asset, caption, asset_href, |src| {
                format!(
                    "<div class=\"lottie\" data-animation-path=\"{}\"></div>",
                    html_escape(src)
                )
            })
        }
    }
}

fn figure(
    kind: &str,
    asset: &AssetStatus,
    caption: &str,
    asset_href: &dyn Fn(&str) -> String,
    media: impl FnOnce(&str) -> String,
) -> String {
    let body = match asset {
        AssetStatus::Resolved { .. } => media(&asset_href(asset_reference(asset))),
        AssetStatus::Missing { path, .. } => format!(
            "<div class=\"missing-asset\">{} unavailable: {}</div>",
            kind,
            html_escape(path)
        ),
    };
    format!(
        "<figure>\n{}\n<figcaption>{}</figcaption>\n</figure>\n",
        body,
        html_escape(caption)
    )
}

fn asset_reference(asset: &AssetStatus) -> &str {
    match asset {
        AssetStatus::Resolved { path, .. } | AssetStatus::Missing { path, .. } => path,
    }
}
