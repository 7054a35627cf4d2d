//! Interactive terminal viewer
//!
//! A full-screen iocraft app: sidebar navigation on the left, the selected
//! page on the right and a status line for notices.

pub mod app;
pub mod components;
pub mod router;
pub mod text_utils;

pub use app::{run_docs_app, DocsContext};
pub use router::RouterHandle;
