//! Static HTML export command

use super::Site;
use crate::config::CliConfigLoader;
use crate::output::format_notice;
use anyhow::{Context, Result};
use std::path::PathBuf;
use suraksha_core::SiteExporter;

/// Write the static site to `out_dir`
pub async fn export_command(config_loader: CliConfigLoader, out_dir: PathBuf) -> Result<()> {
    let site = Site::load(&config_loader).await?;
    let exporter = SiteExporter::new(&site.config, site.registry.clone(), site.render_ctx);

    let summary = exporter
        .export(&out_dir)
        .with_context(|| format!("Failed to export site to {}", out_dir.display()))?;

    for notice in &summary.notices {
        eprintln!("{}", format_notice(&notice.message, false));
    }
    println!(
        "Exported {} pages and {} assets to {}",
        summary.pages_written,
        summary.assets_copied,
        out_dir.display()
    );
    Ok(())
}
