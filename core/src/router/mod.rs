//! Router for page navigation
//!
//! A [`Router`] is one session's view of the shared [`PageRegistry`]:
//! which page is selected, how it got there, and how to render it.

pub mod route;

pub use route::{slugify, Route, RouteId};

use crate::error::RouterError;
use crate::registry::{Page, PageRegistry};
use crate::render::{render_page, Notice, NoticeKind, RenderContext, RenderedPage};
use std::sync::Arc;
use tracing::{debug, warn};

/// Type alias for router operation results
pub type RouterResult<T> = Result<T, RouterError>;

/// Default number of history entries kept per session
pub const DEFAULT_MAX_HISTORY: usize = 50;

/// Current state of the router
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterState {
    /// Currently active route ID
    pub current_route: RouteId,
    /// Navigation history (most recent first)
    pub history: Vec<RouteId>,
    /// Maximum number of history entries to keep
    pub max_history: usize,
}

impl RouterState {
    /// Create a new router state with the given initial route
    pub fn new(initial_route: RouteId) -> Self {
        Self {
            current_route: initial_route,
            history: Vec::new(),
            max_history: DEFAULT_MAX_HISTORY,
        }
    }

    /// Navigate to a new route
    pub fn navigate_to(&mut self, route_id: RouteId) {
        // Add current route to history if it's different
        if self.current_route != route_id {
            self.history.insert(0, self.current_route.clone());

            // Trim history if it exceeds max size
            if self.history.len() > self.max_history {
                self.history.truncate(self.max_history);
            }
        }

        self.current_route = route_id;
    }

    /// Go back to the previous route in history
    pub fn go_back(&mut self) -> bool {
        if self.history.is_empty() {
            return false;
        }
        self.current_route = self.history.remove(0);
        true
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Get the current route ID
    pub fn current_route(&self) -> &RouteId {
        &self.current_route
    }
}

/// Per-session router over a shared registry
#[derive(Debug, Clone)]
pub struct Router {
    registry: Arc<PageRegistry>,
    state: RouterState,
}

impl Router {
    /// Create a router positioned on the first registered page
    pub fn new(registry: Arc<PageRegistry>) -> Self {
        let state = RouterState::new(registry.first().id().clone());
        Self { registry, state }
    }

    /// Set maximum history size; zero disables history
    pub fn with_max_history(mut self, max_history: usize) -> Self {
        self.state.max_history = max_history;
        self.state.history.truncate(max_history);
        self
    }

    pub fn registry(&self) -> &Arc<PageRegistry> {
        &self.registry
    }

    pub fn state(&self) -> &RouterState {
        &self.state
    }

    /// Select a page by display name or slug
    pub fn select(&mut self, name: &str) -> RouterResult<()> {
        let id = self
            .registry
            .find(name)
            .map(|page| page.id().clone())
            .ok_or_else(|| RouterError::PageNotFound(name.to_string()))?;

        debug!("Selecting page {}", id);
        self.state.navigate_to(id);
        Ok(())
    }

    /// Select a page by its position in display order
    pub fn select_index(&mut self, index: usize) -> RouterResult<()> {
        let id = self
            .registry
            .get_index(index)
            .map(|page| page.id().clone())
            .ok_or_else(|| RouterError::PageNotFound(format!("#{}", index + 1)))?;

        self.state.navigate_to(id);
        Ok(())
    }

    /// Select a page, falling back to the first page for unknown names.
    ///
    /// Returns the notice to show when the fallback was taken.
    pub fn select_or_first(&mut self, name: &str) -> Option<Notice> {
        match self.select(name) {
            Ok(()) => None,
            Err(e) => {
                let first = self.registry.first();
                warn!("{}; showing '{}' instead", e, first.name());
                let notice = Notice::new(
                    NoticeKind::InvalidSelection,
                    format!("Unknown page '{}', showing '{}'", name, first.name()),
                );
                self.state.navigate_to(first.id().clone());
                Some(notice)
            }
        }
    }

    /// Go back to the previous page
    pub fn go_back(&mut self) -> bool {
        self.state.go_back()
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.state.can_go_back()
    }

    /// Get the current page
    pub fn current_page(&self) -> &Page {
        self.registry
            .get(self.state.current_route())
            .unwrap_or_else(|| self.registry.first())
    }

    /// Get the current route ID
    pub fn current_route_id(&self) -> &RouteId {
        self.state.current_route()
    }

    /// Position of the current page in display order
    pub fn current_index(&self) -> usize {
        self.registry
            .position(self.state.current_route())
            .unwrap_or(0)
    }

    /// Render the selected page. Exactly one renderer runs.
    pub fn render(&self, ctx: &RenderContext) -> RenderedPage {
        render_page(self.current_page(), ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Block, Document};
    use crate::error::Result;
    use crate::registry::PageRegistry;
    use crate::render::RenderedBlock;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn registry() -> Arc<PageRegistry> {
        let mut builder = PageRegistry::builder();
        for name in ["Home", "Frontend", "Backend"] {
            builder = builder.page(name, move |_ctx: &RenderContext| -> Result<Document> {
                Ok(Document::new(vec![Block::Title(format!("{} page", name))]))
            });
        }
        Arc::new(builder.build().unwrap())
    }

    fn ctx() -> RenderContext {
        RenderContext::from_config(&crate::config::SiteConfig::default())
    }

    #[test]
    fn test_initial_page_is_first() {
        let router = Router::new(registry());
        assert_eq!(router.current_route_id().as_str(), "home");
        assert_eq!(router.current_index(), 0);
        assert!(!router.can_go_back());
    }

    #[test]
    fn test_select_and_render() {
        let mut router = Router::new(registry());
        router.select("Backend").unwrap();

        let page = router.render(&ctx());
        assert_eq!(page.route.as_str(), "backend");
        assert_eq!(
            page.blocks,
            vec![RenderedBlock::Title {
                text: "Backend page".to_string()
            }]
        );
    }

    #[test]
    fn test_select_unknown_page() {
        let mut router = Router::new(registry());
        router.select("Frontend").unwrap();
        assert_eq!(
            router.select("Blog"),
            Err(RouterError::PageNotFound("Blog".to_string()))
        );
        assert_eq!(router.current_page().name(), "Frontend");
    }

    #[test]
    fn test_select_or_first_falls_back() {
        let mut router = Router::new(registry());
        router.select("Backend").unwrap();

        let notice = router.select_or_first("no such page").unwrap();
        assert_eq!(notice.kind, NoticeKind::InvalidSelection);
        assert_eq!(router.current_page().name(), "Home");

        assert!(router.select_or_first("frontend").is_none());
        assert_eq!(router.current_page().name(), "Frontend");
    }

    #[test]
    fn test_history_navigation() {
        let mut router = Router::new(registry());
        router.select("Frontend").unwrap();
        router.select("Backend").unwrap();
        router.select("Backend").unwrap();

        assert_eq!(router.state().history.len(), 2);
        assert!(router.go_back());
        assert_eq!(router.current_page().name(), "Frontend");
        assert!(router.go_back());
        assert_eq!(router.current_page().name(), "Home");
        assert!(!router.go_back());
    }

    #[test]
    fn test_history_disabled() {
        let mut router = Router::new(registry()).with_max_history(0);
        router.select("Frontend").unwrap();
        assert!(!router.can_go_back());
    }

    #[test]
    fn test_select_index() {
        let mut router = Router::new(registry());
        router.select_index(2).unwrap();
        assert_eq!(router.current_page().name(), "Backend");
        assert!(router.select_index(3).is_err());
    }

    #[test]
    fn test_revisiting_pages_renders_identically() {
        let config = crate::config::SiteConfig::default();
        let ctx = RenderContext::from_config(&config);
        let mut router = Router::new(Arc::new(PageRegistry::from_config(&config).unwrap()));

        let names: Vec<String> = router
            .registry()
            .names()
            .into_iter()
            .map(str::to_string)
            .collect();
        let mut first_pass = Vec::new();
        for name in &names {
            router.select(name).unwrap();
            first_pass.push(router.render(&ctx));
        }
        for (name, expected) in names.iter().zip(&first_pass).rev() {
            router.select(name).unwrap();
            let page = router.render(&ctx);
            assert_eq!(&page, expected);
            assert_eq!(page.name, *name);
        }
    }

    #[test]
    fn test_only_selected_renderer_runs() {
        static CALLS: [AtomicUsize; 2] = [AtomicUsize::new(0), AtomicUsize::new(0)];
        let registry = PageRegistry::builder()
            .page("One", |_ctx: &RenderContext| -> Result<Document> {
                CALLS[0].fetch_add(1, Ordering::SeqCst);
                Ok(Document::default())
            })
            .page("Two", |_ctx: &RenderContext| -> Result<Document> {
                CALLS[1].fetch_add(1, Ordering::SeqCst);
                Ok(Document::default())
            })
            .build()
            .unwrap();

        let mut router = Router::new(Arc::new(registry));
        router.select("Two").unwrap();
        router.render(&ctx());

        assert_eq!(CALLS[0].load(Ordering::SeqCst), 0);
        assert_eq!(CALLS[1].load(Ordering::SeqCst), 1);
    }
}
