//! # suraksha CLI
//!
//! Terminal viewer for the Suraksha documentation site.
//!
//! ## Usage
//!
//! - `suraksha` - Browse the pages interactively
//! - `suraksha pages` - List pages in navigation order
//! - `suraksha show <PAGE>` - Print one page
//! - `suraksha check` - Render every page and report missing assets
//! - `suraksha export --out <DIR>` - Write the site as static HTML

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod interactive;
mod output;

use commands::{check_command, export_command, interactive_command, pages_command, show_command};
use config::CliConfigLoader;

/// suraksha - Browse the Suraksha documentation from the terminal
#[derive(Parser)]
#[command(name = "suraksha")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse the Suraksha documentation from the terminal")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file or directory path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Page templates directory override
    #[arg(long, env = "SURAKSHA_CONTENT_DIR")]
    content_dir: Option<PathBuf>,

    /// Images and animations directory override
    #[arg(long, env = "SURAKSHA_ASSETS_DIR")]
    assets_dir: Option<PathBuf>,

    /// Page to open first in interactive mode (falls back to the first page)
    #[arg(short, long)]
    page: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List pages in navigation order
    Pages,

    /// Render one page to stdout
    Show {
        /// Page name or slug
        page: String,

        /// Disable colors
        #[arg(long)]
        plain: bool,

        /// Wrap width (defaults to the terminal width)
        #[arg(long)]
        width: Option<usize>,
    },

    /// Render every page and report notices; fails if any page has one
    Check,

    /// Write the site as static HTML
    Export {
        /// Output directory
        #[arg(short, long)]
        out: PathBuf,
    },
}

/// Build a configuration loader from CLI arguments
fn build_config_loader(cli: &Cli) -> CliConfigLoader {
    let mut loader = CliConfigLoader::new();

    if let Some(config_path) = &cli.config {
        loader = loader.with_config_override(config_path.clone());
    }

    if let Some(content_dir) = &cli.content_dir {
        loader = loader.with_content_dir_override(content_dir.clone());
    }

    if let Some(assets_dir) = &cli.assets_dir {
        loader = loader.with_assets_dir_override(assets_dir.clone());
    }

    loader
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // The full-screen UI owns the terminal, so it stays quiet unless asked
    let filter = match (&cli.command, cli.verbose) {
        (_, true) => "debug",
        (None, false) => "off",
        (Some(_), false) => "info",
    };
    suraksha_core::init_tracing_with_filter(filter);

    let config_loader = build_config_loader(&cli);

    match cli.command {
        Some(Commands::Pages) => pages_command(config_loader).await,
        Some(Commands::Show { page, plain, width }) => {
            show_command(config_loader, page, plain, width).await
        }
        Some(Commands::Check) => check_command(config_loader).await,
        Some(Commands::Export { out }) => export_command(config_loader, out).await,
        // Default to interactive mode
        None => interactive_command(config_loader, cli.page).await,
    }
}
