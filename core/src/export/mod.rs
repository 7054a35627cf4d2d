//! Static HTML export
//!
//! Writes every registered page as a standalone HTML file sharing one
//! navigation layout, and copies the assets directory next to them.

pub mod html;

use crate::config::{icon_glyph, SiteConfig};
use crate::error::Result;
use crate::registry::PageRegistry;
use crate::render::{render_page, Notice, RenderContext, RenderedPage};
use handlebars::Handlebars;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Directory name for copied assets inside the export
pub const ASSETS_SUBDIR: &str = "assets";

const LAYOUT: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{{page_title}} - {{site_title}}</title>
<style>
body { margin: 0; font-family: sans-serif; display: flex; min-height: 100vh; }
nav { width: 16rem; padding: 1rem; background: #f0f2f6; }
nav h2 { margin-top: 0; }
nav a { display: block; padding: 0.4rem 0.6rem; color: #262730; text-decoration: none; border-radius: 0.4rem; }
nav a.active { background: #ff4b4b; color: #fff; }
main { flex: 1; padding: 2rem 3rem; max-width: 60rem; }
figure img { max-width: 100%; }
pre { background: #f6f8fa; padding: 1rem; overflow-x: auto; }
.missing-asset { padding: 2rem; border: 2px dashed #c00; color: #c00; }
.notices { background: #fff4e5; padding: 0.5rem 1rem; border-left: 4px solid #f0a000; }
a.button { display: inline-block; padding: 0.5rem 1rem; background: #ff4b4b; color: #fff; border-radius: 0.4rem; text-decoration: none; }
</style>
</head>
<body>
<nav>
<h2>Navigation</h2>
{{#each nav}}
<a href="{{href}}"{{#if active}} class="active"{{/if}}>{{icon}} {{name}}</a>
{{/each}}
</nav>
<main>
{{#if notices}}
<aside class="notices">
{{#each notices}}
<p>{{this}}</p>
{{/each}}
</aside>
{{/if}}
{{{body}}}
</main>
</body>
</html>
"#;

/// What an export run produced
#[derive(Debug, Clone, Default)]
pub struct ExportSummary {
    pub pages_written: usize,
    pub assets_copied: usize,
    pub notices: Vec<Notice>,
}

/// Writes the site described by a registry to a directory
pub struct SiteExporter {
    registry: Arc<PageRegistry>,
    ctx: RenderContext,
    site_title: String,
    assets_dir: PathBuf,
    layout: Handlebars<'static>,
}

impl SiteExporter {
    pub fn new(config: &SiteConfig, registry: Arc<PageRegistry>, ctx: RenderContext) -> Self {
        Self {
            registry,
            ctx,
            site_title: config.title.clone(),
            assets_dir: config.assets_dir.clone(),
            layout: Handlebars::new(),
        }
    }

    /// File name of a page inside the export
    pub fn page_file(slug: &str) -> String {
        format!("{}.html", slug)
    }

    /// Write all pages and assets under `out_dir`
    pub fn export(&self, out_dir: &Path) -> Result<ExportSummary> {
        fs::create_dir_all(out_dir)?;
        let mut summary = ExportSummary::default();

        for (position, page) in self.registry.pages().enumerate() {
            let rendered = render_page(page, &self.ctx);
            let html = self.render_layout(&rendered)?;

            let file = out_dir.join(Self::page_file(page.id().as_str()));
            fs::write(&file, &html)?;
            debug!("Wrote {}", file.display());
            if position == 0 {
                fs::write(out_dir.join("index.html"), &html)?;
            }

            summary.pages_written += 1;
            summary.notices.extend(rendered.notices);
        }

        summary.assets_copied = self.copy_assets(&out_dir.join(ASSETS_SUBDIR))?;

        info!(
            "Exported {} pages and {} assets to {} ({} notices)",
            summary.pages_written,
            summary.assets_copied,
            out_dir.display(),
            summary.notices.len()
        );
        Ok(summary)
    }

    fn render_layout(&self, page: &RenderedPage) -> Result<String> {
        let asset_href = |path: &str| format!("{}/{}", ASSETS_SUBDIR, path);
        let body: String = page
            .blocks
            .iter()
            .map(|block| html::block_to_html(block, &asset_href))
            .collect();

        let nav: Vec<_> = self
            .registry
            .pages()
            .map(|entry| {
                json!({
                    "name": entry.name(),
                    "href": Self::page_file(entry.id().as_str()),
                    "icon": entry.icon().map(icon_glyph).unwrap_or_default(),
                    "active": entry.id() == &page.route,
                })
            })
            .collect();

        let notices: Vec<String> = page.notices.iter().map(ToString::to_string).collect();

        let data = json!({
            "site_title": self.site_title,
            "page_title": html::inline_plain(page.title()),
            "nav": nav,
            "notices": notices,
            "body": body,
        });
        Ok(self.layout.render_template(LAYOUT, &data)?)
    }

    fn copy_assets(&self, target: &Path) -> Result<usize> {
        if !self.assets_dir.is_dir() {
            warn!(
                "Assets directory {} not found, exporting without assets",
                self.assets_dir.display()
            );
            return Ok(0);
        }

        let mut copied = 0;
        for entry in WalkDir::new(&self.assets_dir).follow_links(true) {
            let entry = entry.map_err(std::io::Error::from)?;
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = entry
                .path()
                .strip_prefix(&self.assets_dir)
                .unwrap_or(entry.path());
            let destination = target.join(relative);
            if let Some(parent) = destination.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &destination)?;
            copied += 1;
        }
        Ok(copied)
    }
}
