//! Hash-based routing for the dashboard pages

use crate::config::DEFAULT_ROUTE;

/// Current page, identified by its URL hash (e.g. `#/crypto`).
///
/// Navigation entries are active when their route string equals
/// [`Route::as_str`] exactly, so every hash is normalized to `#/segment`
/// form without a trailing slash.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route(String);

impl Route {
    /// Parse URL hash into Route
    pub fn from_hash(hash: &str) -> Self {
        let path = hash
            .trim()
            .trim_start_matches('#')
            .trim_start_matches('/')
            .trim_end_matches('/');

        if path.is_empty() {
            return Self(DEFAULT_ROUTE.to_string());
        }

        Self(format!("#/{}", path))
    }

    /// Get current route from browser URL
    pub fn current() -> Self {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        Self::from_hash(&hash)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when `route` names this page.
    pub fn matches(&self, route: &str) -> bool {
        self.0 == route
    }
}

impl Default for Route {
    fn default() -> Self {
        Self(DEFAULT_ROUTE.to_string())
    }
}
