//! Where page templates come from
//!
//! The default pages are compiled into the binary. A content directory
//! on disk can override any of them by file name.

use crate::error::{ContentError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Provides raw page templates by file name
pub trait ContentSource: Send + Sync {
    /// Load the raw template text
    fn load(&self, template: &str) -> Result<String>;

    /// Human-readable description for logs
    fn describe(&self) -> String;
}

/// Templates bundled at compile time
pub const BUNDLED_TEMPLATES: &[(&str, &str)] = &[
    ("home.md", include_str!("../../content/home.md")),
    ("frontend.md", include_str!("../../content/frontend.md")),
    ("backend.md", include_str!("../../content/backend.md")),
    (
        "machine-learning.md",
        include_str!("../../content/machine-learning.md"),
    ),
    ("revenue-model.md", include_str!("../../content/revenue-model.md")),
    ("faqs.md", include_str!("../../content/faqs.md")),
    (
        "competition-and-roadmap.md",
        include_str!("../../content/competition-and-roadmap.md"),
    ),
    ("get-involved.md", include_str!("../../content/get-involved.md")),
];

/// Serves the templates compiled into the binary
#[derive(Debug, Default, Clone, Copy)]
pub struct BundledContent;

impl ContentSource for BundledContent {
    fn load(&self, template: &str) -> Result<String> {
        BUNDLED_TEMPLATES
            .iter()
            .find(|(name, _)| *name == template)
            .map(|(_, text)| text.to_string())
            .ok_or_else(|| {
                ContentError::TemplateNotFound {
                    name: template.to_string(),
                }
                .into()
            })
    }

    fn describe(&self) -> String {
        "bundled".to_string()
    }
}

/// Reads templates from a directory, falling back to the bundled copy
#[derive(Debug, Clone)]
pub struct DirectoryContent {
    root: PathBuf,
    fallback: Option<BundledContent>,
}

impl DirectoryContent {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            fallback: Some(BundledContent),
        }
    }

    /// Only serve files that exist on disk
    pub fn without_fallback(mut self) -> Self {
        self.fallback = None;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ContentSource for DirectoryContent {
    fn load(&self, template: &str) -> Result<String> {
        let path = self.root.join(template);
        if path.is_file() {
            debug!("Loading template from {}", path.display());
            return Ok(std::fs::read_to_string(&path)?);
        }

        match &self.fallback {
            Some(bundled) => bundled.load(template),
            None => Err(ContentError::TemplateNotFound {
                name: path.display().to_string(),
            }
            .into()),
        }
    }

    fn describe(&self) -> String {
        format!("directory {}", self.root.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_pages;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_every_default_page_is_bundled() {
        for page in default_pages() {
            let text = BundledContent.load(&page.template).unwrap();
            assert!(!text.trim().is_empty(), "{} is empty", page.template);
        }
    }

    #[test]
    fn test_bundled_missing_template() {
        assert!(BundledContent.load("nope.md").is_err());
    }

    #[test]
    fn test_directory_overrides_bundled() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("home.md"), "# Local Home").unwrap();

        let source = DirectoryContent::new(temp_dir.path());
        assert_eq!(source.load("home.md").unwrap(), "# Local Home");
        assert!(source.load("faqs.md").unwrap().contains("FAQs"));
    }

    #[test]
    fn test_directory_without_fallback() {
        let temp_dir = TempDir::new().unwrap();
        let source = DirectoryContent::new(temp_dir.path()).without_fallback();
        assert!(source.load("faqs.md").is_err());
    }
}
