//! Page rendering
//!
//! A render pass turns a page's [`Document`] into a [`RenderedPage`]:
//! every asset reference is resolved and every recoverable failure is
//! recorded as a [`Notice`] instead of being returned as an error.

use crate::assets::{AssetResolver, FsAssetResolver};
use crate::config::{MissingAssetPolicy, SiteConfig};
use crate::content::{
    Block, BundledContent, ContentSource, DirectoryContent, Document, TemplateEngine,
};
use crate::registry::Page;
use crate::router::RouteId;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, warn};

/// Everything a renderer may read while producing a page
#[derive(Clone)]
pub struct RenderContext {
    pub templates: Arc<TemplateEngine>,
    pub content: Arc<dyn ContentSource>,
    pub assets: Arc<dyn AssetResolver>,
    pub missing_assets: MissingAssetPolicy,
}

impl RenderContext {
    pub fn new(
        templates: TemplateEngine,
        content: Arc<dyn ContentSource>,
        assets: Arc<dyn AssetResolver>,
    ) -> Self {
        Self {
            templates: Arc::new(templates),
            content,
            assets,
            missing_assets: MissingAssetPolicy::default(),
        }
    }

    /// Build the context described by a resolved site configuration
    pub fn from_config(config: &SiteConfig) -> Self {
        let content: Arc<dyn ContentSource> = match &config.content_dir {
            Some(dir) => Arc::new(DirectoryContent::new(dir)),
            None => Arc::new(BundledContent),
        };
        debug!("Page content source: {}", content.describe());

        Self::new(
            TemplateEngine::new(config.template_variables()),
            content,
            Arc::new(FsAssetResolver::new(&config.assets_dir)),
        )
        .with_missing_assets(config.missing_assets)
    }

    pub fn with_missing_assets(mut self, policy: MissingAssetPolicy) -> Self {
        self.missing_assets = policy;
        self
    }
}

impl fmt::Debug for RenderContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderContext")
            .field("content", &self.content.describe())
            .field("missing_assets", &self.missing_assets)
            .finish()
    }
}

/// Outcome of resolving an asset reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AssetStatus {
    Resolved { path: String, file: PathBuf },
    Missing { path: String, reason: String },
}

impl AssetStatus {
    pub fn is_missing(&self) -> bool {
        matches!(self, AssetStatus::Missing { .. })
    }
}

/// A content block after asset resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RenderedBlock {
    Title { text: String },
    Subheader { text: String },
    Heading { text: String },
    Paragraph { text: String },
    Image {
        asset: AssetStatus,
        caption: String,
        width: Option<u32>,
    },
    Code {
        language: Option<String>,
        source: String,
    },
    Button { label: String, url: String },
    Animation { asset: AssetStatus, caption: String },
    Divider,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    MissingAsset,
    RenderFailed,
    InvalidSelection,
}

/// A non-fatal problem surfaced next to the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// One page, ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedPage {
    /// Route of the page that produced this output
    pub route: RouteId,
    /// Display name of the page
    pub name: String,
    pub blocks: Vec<RenderedBlock>,
    pub notices: Vec<Notice>,
}

impl RenderedPage {
    /// The page's own title, or its navigation name
    pub fn title(&self) -> &str {
        self.blocks
            .iter()
            .find_map(|block| match block {
                RenderedBlock::Title { text } => Some(text.as_str()),
                _ => None,
            })
            .unwrap_or(&self.name)
    }

    pub fn has_notices(&self) -> bool {
        !self.notices.is_empty()
    }

    pub fn push_notice(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

/// Run one page's renderer and resolve its assets.
///
/// Renderer errors become a `RenderFailed` notice on a page that only
/// carries the page name as title.
pub fn render_page(page: &Page, ctx: &RenderContext) -> RenderedPage {
    let route = page.route();
    debug!("Rendering page '{}' ({})", route.name, route.id);

    match page.renderer().render(ctx) {
        Ok(document) => resolve_document(route.id.clone(), route.name.clone(), document, ctx),
        Err(e) => {
            warn!("Failed to render page '{}': {}", route.name, e);
            RenderedPage {
                route: route.id.clone(),
                name: route.name.clone(),
                blocks: vec![RenderedBlock::Title {
                    text: route.name.clone(),
                }],
                notices: vec![Notice::new(
                    NoticeKind::RenderFailed,
                    format!("Could not render page '{}': {}", route.name, e),
                )],
            }
        }
    }
}

fn resolve_document(
    route: RouteId,
    name: String,
    document: Document,
    ctx: &RenderContext,
) -> RenderedPage {
    let mut blocks = Vec::with_capacity(document.blocks.len());
    let mut notices = Vec::new();

    for block in document.blocks {
        let rendered = match block {
            Block::Title(text) => RenderedBlock::Title { text },
            Block::Subheader(text) => RenderedBlock::Subheader { text },
            Block::Heading(text) => RenderedBlock::Heading { text },
            Block::Paragraph(text) => RenderedBlock::Paragraph { text },
            Block::Code { language, source } => RenderedBlock::Code { language, source },
            Block::Button { label, url } => RenderedBlock::Button { label, url },
            Block::Divider => RenderedBlock::Divider,
            Block::Image {
                path,
                caption,
                width,
            } => {
                let asset = check_asset(ctx.assets.resolve(&path), &path, "Image", &mut notices);
                if asset.is_missing() && ctx.missing_assets == MissingAssetPolicy::Skip {
                    continue;
                }
                RenderedBlock::Image {
                    asset,
                    caption,
                    width,
                }
            }
            Block::Animation { path, caption } => {
                let asset = check_asset(
                    ctx.assets.resolve_animation(&path),
                    &path,
                    "Animation",
                    &mut notices,
                );
                if asset.is_missing() && ctx.missing_assets == MissingAssetPolicy::Skip {
                    continue;
                }
                RenderedBlock::Animation { asset, caption }
            }
        };
        blocks.push(rendered);
    }

    RenderedPage {
        route,
        name,
        blocks,
        notices,
    }
}

fn check_asset(
    resolved: Result<PathBuf, crate::error::AssetError>,
    path: &str,
    what: &str,
    notices: &mut Vec<Notice>,
) -> AssetStatus {
    match resolved {
        Ok(file) => AssetStatus::Resolved {
            path: path.to_string(),
            file,
        },
        Err(e) => {
            warn!("{} '{}' unavailable: {}", what, path, e);
            notices.push(Notice::new(
                NoticeKind::MissingAsset,
                format!("{} '{}' unavailable: {}", what, path, e),
            ));
            AssetStatus::Missing {
                path: path.to_string(),
                reason: e.to_string(),
            }
        }
    }
}
