//! Interactive mode command

use super::Site;
use crate::config::CliConfigLoader;
use crate::interactive::{run_docs_app, DocsContext, RouterHandle};
use anyhow::Result;
use suraksha_core::Router;
use tracing::debug;

/// Start the full-screen viewer, optionally on a given page
pub async fn interactive_command(
    config_loader: CliConfigLoader,
    initial_page: Option<String>,
) -> Result<()> {
    let site = Site::load(&config_loader).await?;
    let handle = RouterHandle::new(Router::new(site.registry.clone()));

    let initial_notice = initial_page
        .as_deref()
        .and_then(|name| handle.select_or_first(name));
    debug!("Starting viewer on page #{}", handle.current_index() + 1);

    run_docs_app(DocsContext {
        handle,
        render_ctx: site.render_ctx,
        title: site.config.title,
        initial_notice,
    })
    .await
}
