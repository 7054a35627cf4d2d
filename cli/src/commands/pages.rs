//! Page listing command

use super::Site;
use crate::config::CliConfigLoader;
use anyhow::Result;
use suraksha_core::config::icon_glyph;

/// List registered pages in navigation order
pub async fn pages_command(config_loader: CliConfigLoader) -> Result<()> {
    let site = Site::load(&config_loader).await?;

    for (i, page) in site.registry.pages().enumerate() {
        let glyph = page.icon().map(icon_glyph).unwrap_or("•");
        println!("{:>2}. {} {:<28} {}", i + 1, glyph, page.name(), page.id());
    }
    Ok(())
}
