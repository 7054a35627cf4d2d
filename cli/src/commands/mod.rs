//! CLI command implementations

pub mod check;
pub mod export;
pub mod interactive;
pub mod pages;
pub mod show;

pub use check::check_command;
pub use export::export_command;
pub use interactive::interactive_command;
pub use pages::pages_command;
pub use show::show_command;

use crate::config::CliConfigLoader;
use anyhow::{Context, Result};
use std::sync::Arc;
use suraksha_core::{PageRegistry, RenderContext, SiteConfig};
use tracing::debug;

/// A loaded site: configuration, page registry and render context
pub struct Site {
    pub config: SiteConfig,
    pub registry: Arc<PageRegistry>,
    pub render_ctx: RenderContext,
}

impl Site {
    /// Load configuration and register every configured page
    pub async fn load(loader: &CliConfigLoader) -> Result<Self> {
        let config = loader.load().await?;
        let registry =
            PageRegistry::from_config(&config).context("Failed to register pages")?;
        debug!("Registered {} pages", registry.len());
        let render_ctx = RenderContext::from_config(&config);

        Ok(Self {
            config,
            registry: Arc::new(registry),
            render_ctx,
        })
    }
}
