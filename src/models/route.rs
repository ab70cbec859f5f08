//! Hash-based routing.
//!
//! The route is the path portion of the URL hash, so the app works from any
//! static host without server-side rewrites.

use neon_shell_core::config::{HOME_ROUTE, LOGIN_ROUTE};

use crate::utils::dom;

/// Path the app is showing, always starting with `/`.
/// URL format: `#/items`, with an empty hash meaning `/`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route(String);

impl Route {
    /// Parse a URL hash into a route.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_start_matches('/');
        if path.is_empty() {
            return Self(HOME_ROUTE.to_string());
        }
        Self(format!("/{}", path))
    }

    /// Route for an in-app path such as `/items`.
    pub fn from_path(path: &str) -> Self {
        Self::from_hash(path)
    }

    /// Convert the route to a URL hash.
    pub fn to_hash(&self) -> String {
        format!("#{}", self.0)
    }

    pub fn path(&self) -> &str {
        &self.0
    }

    /// The login page renders outside the shell.
    pub fn is_login(&self) -> bool {
        self.0 == LOGIN_ROUTE
    }

    /// Get the current route from the browser URL.
    pub fn current() -> Self {
        Self::from_hash(&dom::get_hash())
    }

    /// Navigate to this route. Adds a history entry and fires `hashchange`.
    pub fn push(&self) {
        dom::set_hash(&self.to_hash());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(Route::from_hash("").path(), "/");
        assert_eq!(Route::from_hash("#").path(), "/");
        assert_eq!(Route::from_hash("#/").path(), "/");
        assert_eq!(Route::from_hash("#/items").path(), "/items");
        assert_eq!(Route::from_hash("#items").path(), "/items");
        assert_eq!(Route::from_hash("#/items/42").path(), "/items/42");
    }

    #[test]
    fn test_route_to_hash() {
        assert_eq!(Route::from_path("/").to_hash(), "#/");
        assert_eq!(Route::from_path("/customers").to_hash(), "#/customers");
        assert_eq!(Route::from_hash("#/bills").to_hash(), "#/bills");
    }

    #[test]
    fn test_login_route() {
        assert!(Route::from_path(LOGIN_ROUTE).is_login());
        assert!(!Route::from_path("/login/help").is_login());
        assert!(!Route::from_path(HOME_ROUTE).is_login());
    }
}
