use crate::registry::{NavigationRegistry, SectionId};

/// Section of the first registry entry whose route equals `route`.
///
/// Matching is exact string equality; prefixes, trailing slashes and case
/// variants do not match. `None` means no entry is highlighted.
pub fn resolve_active_section(registry: &NavigationRegistry, route: &str) -> Option<SectionId> {
    registry
        .find_by_route(route)
        .map(|entry| entry.section.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_every_registered_route() {
        let registry = NavigationRegistry::standard();
        for entry in registry.entries() {
            assert_eq!(
                resolve_active_section(&registry, &entry.route),
                Some(entry.section.clone())
            );
        }
    }

    #[test]
    fn test_unmatched_routes_resolve_to_none() {
        let registry = NavigationRegistry::standard();
        for route in ["", "/cart", "/login", "/items/42", "/item", "items", "/ITEMS"] {
            assert_eq!(resolve_active_section(&registry, route), None, "{route}");
        }
    }

    #[test]
    fn test_section_differs_from_route() {
        let registry = NavigationRegistry::standard();
        assert_eq!(
            resolve_active_section(&registry, "/"),
            Some(SectionId::from("HOME"))
        );
    }
}
