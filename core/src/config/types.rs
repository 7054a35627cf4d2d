//! Site configuration types for Suraksha Docs core
//!
//! Core only accepts fully resolved, validated configuration.
//! All discovery, loading, and merging happens in CLI layer.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Default product name used in page templates
pub const DEFAULT_PRODUCT: &str = "Suraksha";

/// Default site title shown in the UI header and HTML export
pub const DEFAULT_TITLE: &str = "Suraksha Docs";

/// Default public repository link
pub const DEFAULT_REPOSITORY_URL: &str = "https://github.com/Vibgitcode27/Suraksha";

/// What to do with an image or animation whose file cannot be found
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingAssetPolicy {
    /// Show a visible placeholder in place of the asset
    #[default]
    Placeholder,
    /// Leave the asset out of the rendered page
    Skip,
}

impl MissingAssetPolicy {
    /// Get the policy name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            MissingAssetPolicy::Placeholder => "placeholder",
            MissingAssetPolicy::Skip => "skip",
        }
    }

    /// Parse a policy name
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "placeholder" => Some(MissingAssetPolicy::Placeholder),
            "skip" => Some(MissingAssetPolicy::Skip),
            _ => None,
        }
    }
}

/// One entry of the navigation list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEntry {
    /// Display name shown in the sidebar
    pub name: String,
    /// Template file name, relative to the content directory
    pub template: String,
    /// Optional icon name (e.g. "house", "robot")
    #[serde(default)]
    pub icon: Option<String>,
}

impl PageEntry {
    pub fn new(name: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            template: template.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// The built-in navigation, in display order
pub fn default_pages() -> Vec<PageEntry> {
    vec![
        PageEntry::new("Home", "home.md").with_icon("house"),
        PageEntry::new("Frontend", "frontend.md").with_icon("laptop"),
        PageEntry::new("Backend", "backend.md").with_icon("server"),
        PageEntry::new("Machine Learning", "machine-learning.md").with_icon("robot"),
        PageEntry::new("Revenue Model", "revenue-model.md").with_icon("cash"),
        PageEntry::new("FAQs", "faqs.md").with_icon("question"),
        PageEntry::new("Competition and Roadmap", "competition-and-roadmap.md")
            .with_icon("trophy"),
        PageEntry::new("Get Involved", "get-involved.md").with_icon("people"),
    ]
}

/// Glyph shown for a navigation icon name; unknown names get a bullet
pub fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "house" => "🏠",
        "laptop" => "💻",
        "server" => "🖥",
        "robot" => "🤖",
        "cash" => "💰",
        "question" => "❓",
        "trophy" => "🏆",
        "people" => "👥",
        _ => "•",
    }
}

/// A fully resolved site configuration ready for use by core
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title
    pub title: String,
    /// Product name exposed to templates as `{{product}}`
    pub product: String,
    /// Repository link exposed to templates as `{{repository_url}}`
    pub repository_url: String,
    /// Directory holding page templates; `None` uses the bundled pages only
    pub content_dir: Option<PathBuf>,
    /// Directory holding images and animations
    pub assets_dir: PathBuf,
    /// Missing asset handling
    pub missing_assets: MissingAssetPolicy,
    /// Extra template variables
    pub variables: BTreeMap<String, String>,
    /// Navigation entries in display order
    pub pages: Vec<PageEntry>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            product: DEFAULT_PRODUCT.to_string(),
            repository_url: DEFAULT_REPOSITORY_URL.to_string(),
            content_dir: None,
            assets_dir: PathBuf::from("Assets"),
            missing_assets: MissingAssetPolicy::default(),
            variables: BTreeMap::new(),
            pages: default_pages(),
        }
    }
}

impl SiteConfig {
    /// Set the content directory
    pub fn with_content_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.content_dir = Some(dir.into());
        self
    }

    /// Set the assets directory
    pub fn with_assets_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.assets_dir = dir.into();
        self
    }

    /// Set the missing asset policy
    pub fn with_missing_assets(mut self, policy: MissingAssetPolicy) -> Self {
        self.missing_assets = policy;
        self
    }

    /// Add a template variable
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// All variables visible to page templates, built-ins included.
    /// User variables cannot shadow the built-in names.
    pub fn template_variables(&self) -> BTreeMap<String, String> {
        let mut vars = self.variables.clone();
        vars.insert("product".to_string(), self.product.clone());
        vars.insert("title".to_string(), self.title.clone());
        vars.insert("repository_url".to_string(), self.repository_url.clone());
        vars
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "title".to_string(),
            }
            .into());
        }

        if self.pages.is_empty() {
            return Err(ConfigError::MissingField {
                field: "pages".to_string(),
            }
            .into());
        }

        for (index, page) in self.pages.iter().enumerate() {
            if page.name.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: format!("pages[{}].name", index),
                    value: page.name.clone(),
                }
                .into());
            }
            if page.template.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: format!("pages[{}].template", index),
                    value: page.template.clone(),
                }
                .into());
            }
        }

        if let Some(dir) = &self.content_dir {
            if !dir.is_dir() {
                return Err(ConfigError::FileNotFound {
                    path: dir.display().to_string(),
                }
                .into());
            }
        }

        Ok(())
    }
}
