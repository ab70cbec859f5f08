//! Static, ordered list of navigable sections.
//!
//! Insertion order is render order: the sidebar shows entries exactly as they
//! appear in the registry.

use std::collections::HashSet;
use std::fmt;

use crate::config::HOME_ROUTE;
use crate::error::RegistryError;

/// Identifier of a top-level navigation destination.
///
/// Compared against the shell's active section; not necessarily equal to the
/// route of the entry that carries it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl PartialEq<&str> for SectionId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Visual token for a menu entry. The renderer maps it to an icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavIcon {
    Home,
    Bills,
    Items,
    Customers,
}

/// One navigable section of the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationEntry {
    /// Path this entry navigates to. Unique within a registry.
    pub route: String,
    /// Section highlighted while `route` is current. Unique within a registry.
    pub section: SectionId,
    /// Display label.
    pub label: String,
    pub icon: NavIcon,
}

impl NavigationEntry {
    pub fn new(
        route: impl Into<String>,
        section: impl Into<SectionId>,
        label: impl Into<String>,
        icon: NavIcon,
    ) -> Self {
        Self {
            route: route.into(),
            section: section.into(),
            label: label.into(),
            icon,
        }
    }
}

/// Immutable, ordered collection of [`NavigationEntry`] values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRegistry {
    entries: Vec<NavigationEntry>,
}

impl NavigationRegistry {
    /// Builds a registry, rejecting empty routes and duplicate routes or sections.
    pub fn new(entries: Vec<NavigationEntry>) -> Result<Self, RegistryError> {
        let mut routes = HashSet::new();
        let mut sections = HashSet::new();

        for entry in &entries {
            if entry.route.is_empty() {
                return Err(RegistryError::EmptyRoute(entry.label.clone()));
            }
            if !routes.insert(entry.route.as_str()) {
                return Err(RegistryError::DuplicateRoute(entry.route.clone()));
            }
            if !sections.insert(&entry.section) {
                return Err(RegistryError::DuplicateSection(entry.section.to_string()));
            }
        }

        Ok(Self { entries })
    }

    /// The shell's built-in menu: Home, Bills, Items, Customers.
    ///
    /// Panics if the built-in entries ever stop being unique.
    pub fn standard() -> Self {
        Self::new(vec![
            NavigationEntry::new(HOME_ROUTE, "HOME", "Home", NavIcon::Home),
            NavigationEntry::new("/bills", "BILLS", "Bills", NavIcon::Bills),
            NavigationEntry::new("/items", "ITEMS", "Items", NavIcon::Items),
            NavigationEntry::new("/customers", "CUSTOMERS", "Customers", NavIcon::Customers),
        ])
        .expect("built-in menu entries must have unique, non-empty routes and sections")
    }

    /// Entries in render order.
    pub fn entries(&self) -> &[NavigationEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry whose route equals `route` exactly.
    pub fn find_by_route(&self, route: &str) -> Option<&NavigationEntry> {
        self.entries.iter().find(|entry| entry.route == route)
    }
}

impl Default for NavigationRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_registry_is_valid() {
        let standard = NavigationRegistry::standard();
        assert_eq!(standard.len(), 4);
        let rebuilt = NavigationRegistry::new(standard.entries().to_vec());
        assert_eq!(rebuilt, Ok(standard));
    }

    #[test]
    fn test_standard_registry_order() {
        let registry = NavigationRegistry::standard();
        let routes: Vec<_> = registry
            .entries()
            .iter()
            .map(|e| e.route.as_str())
            .collect();
        assert_eq!(routes, ["/", "/bills", "/items", "/customers"]);
    }

    #[test]
    fn test_duplicate_route_rejected() {
        let result = NavigationRegistry::new(vec![
            NavigationEntry::new("/items", "ITEMS", "Items", NavIcon::Items),
            NavigationEntry::new("/items", "STOCK", "Stock", NavIcon::Items),
        ]);
        assert_eq!(result, Err(RegistryError::DuplicateRoute("/items".into())));
    }

    #[test]
    fn test_duplicate_section_rejected() {
        let result = NavigationRegistry::new(vec![
            NavigationEntry::new("/items", "ITEMS", "Items", NavIcon::Items),
            NavigationEntry::new("/stock", "ITEMS", "Stock", NavIcon::Items),
        ]);
        assert_eq!(result, Err(RegistryError::DuplicateSection("ITEMS".into())));
    }

    #[test]
    fn test_empty_route_rejected() {
        let result = NavigationRegistry::new(vec![NavigationEntry::new(
            "",
            "NONE",
            "Nowhere",
            NavIcon::Home,
        )]);
        assert_eq!(result, Err(RegistryError::EmptyRoute("Nowhere".into())));
    }

    #[test]
    fn test_find_by_route_is_exact() {
        let registry = NavigationRegistry::standard();
        assert_eq!(
            registry.find_by_route("/bills").map(|e| e.section.as_str()),
            Some("BILLS")
        );
        assert!(registry.find_by_route("/bills/").is_none());
        assert!(registry.find_by_route("/Bills").is_none());
    }
}
