//! Content check command

use super::Site;
use crate::config::CliConfigLoader;
use crate::output::format_notice;
use anyhow::{bail, Result};
use suraksha_core::Router;
use tracing::info;

/// Render every page and report notices. Fails when any page has one.
pub async fn check_command(config_loader: CliConfigLoader) -> Result<()> {
    let site = Site::load(&config_loader).await?;
    let mut router = Router::new(site.registry.clone());
    let mut total = 0;

    for index in 0..site.registry.len() {
        router.select_index(index)?;
        let page = router.render(&site.render_ctx);

        if page.has_notices() {
            println!("✗ {} ({} notices)", page.name, page.notices.len());
            for notice in &page.notices {
                println!("    {}", format_notice(&notice.message, false));
            }
            total += page.notices.len();
        } else {
            println!("✓ {}", page.name);
        }
    }

    info!("Checked {} pages", site.registry.len());
    if total > 0 {
        bail!("{} notices across {} pages", total, site.registry.len());
    }
    Ok(())
}
