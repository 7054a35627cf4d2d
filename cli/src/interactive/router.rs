//! UI framework integration for the page router
//!
//! The terminal UI runs event handlers as `'static` closures, so the
//! session's [`Router`] lives behind a shareable handle.

use std::sync::{Arc, Mutex, MutexGuard};
use suraksha_core::router::RouterResult;
use suraksha_core::{Notice, RenderContext, RenderedPage, Router};

/// One sidebar entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub name: String,
    pub icon: Option<String>,
}

/// A shareable, UI-friendly handle to control the router
#[derive(Clone)]
pub struct RouterHandle(Arc<Mutex<Router>>);

impl RouterHandle {
    /// Create a new router handle
    pub fn new(router: Router) -> Self {
        Self(Arc::new(Mutex::new(router)))
    }

    fn lock(&self) -> MutexGuard<'_, Router> {
        self.0.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Select a page by name, falling back to the first page
    pub fn select_or_first(&self, name: &str) -> Option<Notice> {
        self.lock().select_or_first(name)
    }

    /// Select the page at a sidebar position
    pub fn select_index(&self, index: usize) -> RouterResult<()> {
        self.lock().select_index(index)
    }

    /// Go back to the previous page
    pub fn go_back(&self) -> bool {
        self.lock().go_back()
    }

    /// Position of the selected page in the sidebar
    pub fn current_index(&self) -> usize {
        self.lock().current_index()
    }

    /// Render the selected page
    pub fn render(&self, ctx: &RenderContext) -> RenderedPage {
        self.lock().render(ctx)
    }

    /// Sidebar entries in display order
    pub fn entries(&self) -> Vec<NavEntry> {
        self.lock()
            .registry()
            .pages()
            .map(|page| NavEntry {
                name: page.name().to_string(),
                icon: page.icon().map(str::to_string),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use suraksha_core::{PageRegistry, SiteConfig};

    fn handle() -> RouterHandle {
        let registry = PageRegistry::from_config(&SiteConfig::default()).unwrap();
        RouterHandle::new(Router::new(Arc::new(registry)))
    }

    #[test]
    fn test_router_handle() {
        let handle = handle();
        assert_eq!(handle.current_index(), 0);

        handle.select_index(3).unwrap();
        assert_eq!(handle.current_index(), 3);

        let shared = handle.clone();
        assert!(shared.go_back());
        assert_eq!(handle.current_index(), 0);
        assert!(!handle.go_back());
    }

    #[test]
    fn test_select_or_first_through_handle() {
        let handle = handle();
        assert!(handle.select_or_first("Get Involved").is_none());
        assert_eq!(handle.current_index(), 7);

        assert!(handle.select_or_first("Pricing").is_some());
        assert_eq!(handle.current_index(), 0);
    }

    #[test]
    fn test_entries() {
        let entries = handle().entries();
        assert_eq!(entries.len(), 8);
        assert_eq!(entries[5].name, "FAQs");
        assert_eq!(entries[5].icon.as_deref(), Some("question"));
    }
}
