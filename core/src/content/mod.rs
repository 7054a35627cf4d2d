//! Page content: templates, parsing and the block model
//!
//! Pages are data. Each one is a markdown-like template that is expanded
//! with handlebars and then parsed into [`Block`]s.

pub mod block;
pub mod parser;
pub mod source;
pub mod template;

pub use block::{Block, Document};
pub use parser::parse_document;
pub use source::{BundledContent, ContentSource, DirectoryContent};
pub use template::TemplateEngine;
