//! Minimal configuration module for Suraksha Docs core
//!
//! Only exports pure data types. All loading logic is in CLI layer.

pub mod types;

pub use types::{default_pages, icon_glyph, MissingAssetPolicy, PageEntry, SiteConfig};
