//! Per-session navigation state
//!
//! Every session owns its own [`Router`]; only the immutable registry is
//! shared. Sessions never see each other's selection.

use crate::error::{Result, SessionError};
use crate::registry::PageRegistry;
use crate::render::{Notice, RenderContext, RenderedPage};
use crate::router::{RouteId, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;
use uuid::Uuid;

/// Unique identifier for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One user's interaction context
#[derive(Debug, Clone)]
pub struct Session {
    pub id: SessionId,
    pub router: Router,
    pub created_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
}

impl Session {
    pub fn new(registry: Arc<PageRegistry>) -> Self {
        let now = Utc::now();
        Self {
            id: SessionId::new(),
            router: Router::new(registry),
            created_at: now,
            last_active: now,
        }
    }

    fn touch(&mut self) {
        self.last_active = Utc::now();
    }
}

/// Owns all live sessions over one shared registry
#[derive(Debug)]
pub struct SessionManager {
    registry: Arc<PageRegistry>,
    sessions: Mutex<HashMap<SessionId, Session>>,
}

impl SessionManager {
    pub fn new(registry: Arc<PageRegistry>) -> Self {
        Self {
            registry,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    pub fn registry(&self) -> &Arc<PageRegistry> {
        &self.registry
    }

    fn sessions(&self) -> MutexGuard<'_, HashMap<SessionId, Session>> {
        // Session data stays consistent even if a holder panicked
        self.sessions.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn with_session<T>(&self, id: SessionId, f: impl FnOnce(&mut Session) -> T) -> Result<T> {
        let mut sessions = self.sessions();
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| SessionError::UnknownSession { id: id.to_string() })?;
        session.touch();
        Ok(f(session))
    }

    /// Start a session on the first page
    pub fn create_session(&self) -> SessionId {
        let session = Session::new(self.registry.clone());
        let id = session.id;
        debug!("Created session {}", id);
        self.sessions().insert(id, session);
        id
    }

    /// Start a session on a requested page, falling back to the first page
    pub fn create_session_at(&self, name: &str) -> (SessionId, Option<Notice>) {
        let mut session = Session::new(self.registry.clone());
        let notice = session.router.select_or_first(name);
        let id = session.id;
        self.sessions().insert(id, session);
        (id, notice)
    }

    /// Change a session's selected page
    pub fn select(&self, id: SessionId, name: &str) -> Result<()> {
        self.with_session(id, |session| session.router.select(name))?
            .map_err(Into::into)
    }

    /// Go back in a session's history
    pub fn go_back(&self, id: SessionId) -> Result<bool> {
        self.with_session(id, |session| session.router.go_back())
    }

    pub fn current_page(&self, id: SessionId) -> Result<RouteId> {
        self.with_session(id, |session| session.router.current_route_id().clone())
    }

    /// Render a session's selected page. The render runs outside the lock
    /// on a snapshot of the session's router.
    pub fn render(&self, id: SessionId, ctx: &RenderContext) -> Result<RenderedPage> {
        let router = self.with_session(id, |session| session.router.clone())?;
        Ok(router.render(ctx))
    }

    pub fn remove(&self, id: SessionId) -> bool {
        self.sessions().remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.sessions().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::error::Error;
    use std::thread;

    fn manager() -> Arc<SessionManager> {
        let registry = PageRegistry::from_config(&SiteConfig::default()).unwrap();
        Arc::new(SessionManager::new(Arc::new(registry)))
    }

    #[test]
    fn test_sessions_are_isolated() {
        let manager = manager();
        let a = manager.create_session();
        let b = manager.create_session();

        manager.select(a, "Backend").unwrap();
        manager.select(b, "FAQs").unwrap();

        assert_eq!(manager.current_page(a).unwrap().as_str(), "backend");
        assert_eq!(manager.current_page(b).unwrap().as_str(), "faqs");
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn test_concurrent_sessions_do_not_interfere() {
        let manager = manager();
        let names: Vec<String> = manager
            .registry()
            .names()
            .into_iter()
            .map(str::to_string)
            .collect();

        let handles: Vec<_> = names
            .into_iter()
            .map(|name| {
                let manager = Arc::clone(&manager);
                thread::spawn(move || {
                    let id = manager.create_session();
                    for _ in 0..50 {
                        manager.select(id, &name).unwrap();
                        manager.select(id, "Home").unwrap();
                        manager.select(id, &name).unwrap();
                    }
                    (id, name)
                })
            })
            .collect();

        for handle in handles {
            let (id, name) = handle.join().unwrap();
            let expected = manager.registry().find(&name).unwrap().id().clone();
            assert_eq!(manager.current_page(id).unwrap(), expected);
        }
        assert_eq!(manager.len(), 8);
    }

    #[test]
    fn test_create_session_at_with_fallback() {
        let manager = manager();

        let (id, notice) = manager.create_session_at("Revenue Model");
        assert!(notice.is_none());
        assert_eq!(manager.current_page(id).unwrap().as_str(), "revenue-model");

        let (id, notice) = manager.create_session_at("corrupted\u{0}value");
        assert!(notice.is_some());
        assert_eq!(manager.current_page(id).unwrap().as_str(), "home");
    }

    #[test]
    fn test_unknown_session() {
        let manager = manager();
        let err = manager.select(SessionId::new(), "Home").unwrap_err();
        assert!(matches!(
            err,
            Error::Session(SessionError::UnknownSession { .. })
        ));
    }

    #[test]
    fn test_render_and_remove() {
        let manager = manager();
        let id = manager.create_session();
        manager.select(id, "FAQs").unwrap();

        let ctx = RenderContext::from_config(&SiteConfig::default());
        let page = manager.render(id, &ctx).unwrap();
        assert_eq!(page.route.as_str(), "faqs");
        assert_eq!(page.title(), "❓ FAQs");

        assert!(manager.go_back(id).unwrap());
        assert_eq!(manager.current_page(id).unwrap().as_str(), "home");

        assert!(manager.remove(id));
        assert!(!manager.remove(id));
        assert!(manager.is_empty());
    }
}
