//! Page registry
//!
//! The ordered, immutable mapping from page name to renderer. Built once at
//! startup and shared by every session.

use crate::config::{PageEntry, SiteConfig};
use crate::content::{parse_document, Document};
use crate::error::{RegistryError, Result};
use crate::render::RenderContext;
use crate::router::{Route, RouteId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Produces the content of one page
pub trait PageRenderer: Send + Sync {
    fn render(&self, ctx: &RenderContext) -> Result<Document>;
}

impl<F> PageRenderer for F
where
    F: Fn(&RenderContext) -> Result<Document> + Send + Sync,
{
    fn render(&self, ctx: &RenderContext) -> Result<Document> {
        self(ctx)
    }
}

/// Renders a template file: load, expand variables, parse
#[derive(Debug, Clone)]
pub struct TemplatePage {
    template: String,
}

impl TemplatePage {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    pub fn template(&self) -> &str {
        &self.template
    }
}

impl PageRenderer for TemplatePage {
    fn render(&self, ctx: &RenderContext) -> Result<Document> {
        let raw = ctx.content.load(&self.template)?;
        let expanded = ctx.templates.expand(&raw)?;
        parse_document(&expanded)
    }
}

/// A registered page
#[derive(Clone)]
pub struct Page {
    route: Route,
    renderer: Arc<dyn PageRenderer>,
}

impl Page {
    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn id(&self) -> &RouteId {
        &self.route.id
    }

    pub fn name(&self) -> &str {
        &self.route.name
    }

    pub fn icon(&self) -> Option<&str> {
        self.route.icon.as_deref()
    }

    pub fn renderer(&self) -> &dyn PageRenderer {
        self.renderer.as_ref()
    }
}

impl fmt::Debug for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page").field("route", &self.route).finish()
    }
}

/// Ordered page registry with unique names
#[derive(Debug)]
pub struct PageRegistry {
    pages: Vec<Page>,
    index: HashMap<RouteId, usize>,
}

impl PageRegistry {
    pub fn builder() -> PageRegistryBuilder {
        PageRegistryBuilder::new()
    }

    /// One template page per configured navigation entry
    pub fn from_config(config: &SiteConfig) -> std::result::Result<Self, RegistryError> {
        config
            .pages
            .iter()
            .fold(Self::builder(), |builder, entry| builder.entry(entry))
            .build()
    }

    /// The first registered page, the initial selection of every session
    pub fn first(&self) -> &Page {
        // Construction guarantees at least one page
        &self.pages[0]
    }

    pub fn get(&self, id: &RouteId) -> Option<&Page> {
        self.index.get(id).map(|&i| &self.pages[i])
    }

    pub fn get_index(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    /// Position of a page in display order
    pub fn position(&self, id: &RouteId) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Look a page up by display name or slug
    pub fn find(&self, query: &str) -> Option<&Page> {
        self.pages.iter().find(|page| page.route.matches(query))
    }

    pub fn pages(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.pages.iter().map(Page::name).collect()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Always false for a built registry
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// Builder for [`PageRegistry`]. Problems are reported by [`build`](Self::build).
#[derive(Default)]
pub struct PageRegistryBuilder {
    pages: Vec<Page>,
}

impl PageRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a page with its renderer
    pub fn page<R>(self, name: impl Into<String>, renderer: R) -> Self
    where
        R: PageRenderer + 'static,
    {
        self.route(Route::new(name), renderer)
    }

    /// Register a page with an icon
    pub fn page_with_icon<R>(self, name: impl Into<String>, icon: impl Into<String>, renderer: R) -> Self
    where
        R: PageRenderer + 'static,
    {
        self.route(Route::new(name).with_icon(icon), renderer)
    }

    /// Register a template page from a navigation entry
    pub fn entry(self, entry: &PageEntry) -> Self {
        let mut route = Route::new(entry.name.clone());
        route.icon = entry.icon.clone();
        self.route(route, TemplatePage::new(entry.template.clone()))
    }

    fn route<R>(mut self, route: Route, renderer: R) -> Self
    where
        R: PageRenderer + 'static,
    {
        self.pages.push(Page {
            route,
            renderer: Arc::new(renderer),
        });
        self
    }

    /// Build the registry. Empty registries, blank names and duplicate names
    /// (including names that only differ by case or punctuation) are rejected.
    pub fn build(self) -> std::result::Result<PageRegistry, RegistryError> {
        if self.pages.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut index = HashMap::with_capacity(self.pages.len());
        for (position, page) in self.pages.iter().enumerate() {
            if page.route.id.0.is_empty() {
                return Err(RegistryError::EmptyName);
            }
            if index.insert(page.route.id.clone(), position).is_some() {
                return Err(RegistryError::DuplicatePage {
                    name: page.route.name.clone(),
                });
            }
        }

        Ok(PageRegistry {
            pages: self.pages,
            index,
        })
    }
}
