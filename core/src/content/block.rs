//! Content blocks that make up a documentation page

use serde::{Deserialize, Serialize};

/// One unit of page content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Page title (`# `)
    Title(String),
    /// Section header (`## `)
    Subheader(String),
    /// Minor heading (`### `)
    Heading(String),
    /// Prose with inline markdown kept verbatim
    Paragraph(String),
    /// Image reference with caption and optional width hint
    Image {
        path: String,
        caption: String,
        width: Option<u32>,
    },
    /// Illustrative code sample, never executed
    Code {
        language: Option<String>,
        source: String,
    },
    /// Link rendered as a button
    Button { label: String, url: String },
    /// Lottie animation reference
    Animation { path: String, caption: String },
    /// Horizontal rule
    Divider,
}

/// A parsed page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }
}
