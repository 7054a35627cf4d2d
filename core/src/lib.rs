//! # Suraksha Docs Core
//!
//! Core library for the Suraksha documentation viewer.
//!
//! This library provides the page registry, per-session routing, content
//! parsing and rendering, and static HTML export. Front ends (the terminal
//! UI and the CLI) only select pages and display [`RenderedPage`]s.

// Core modules
pub mod assets;
pub mod config;
pub mod content;
pub mod error;
pub mod export;
pub mod registry;
pub mod render;
pub mod router;
pub mod session;

// Re-export commonly used types
pub use config::{MissingAssetPolicy, PageEntry, SiteConfig};
pub use error::{Error, Result};
pub use export::{ExportSummary, SiteExporter};
pub use registry::{Page, PageRegistry, PageRenderer, TemplatePage};
pub use render::{Notice, NoticeKind, RenderContext, RenderedBlock, RenderedPage};
pub use router::{RouteId, Router};
pub use session::{SessionId, SessionManager};

/// Current version of the suraksha-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing with an explicit filter (e.g. "info", "debug", "off"),
/// writing to stderr
pub fn init_tracing_with_filter(filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();
}
