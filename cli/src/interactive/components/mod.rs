//! UI components for interactive mode
//!
//! This module contains reusable UI components for the interactive interface.

pub mod logo;
pub mod page_view;
pub mod sidebar;
pub mod status_line;

pub use logo::SurakshaLogo;
pub use page_view::PageView;
pub use sidebar::Sidebar;
pub use status_line::StatusLine;
