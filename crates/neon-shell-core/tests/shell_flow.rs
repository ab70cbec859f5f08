//! End-to-end flows through the shell controller and cart mirror.

use neon_shell_core::config::{AUTH_KEY, CART_ITEMS_KEY, LOGIN_ROUTE};
use neon_shell_core::mock::{MockViewport, RecordingNavigator, RecordingStorage, StorageOp};
use neon_shell_core::{
    CartMirror, CartSnapshot, NavSlot, NavigationRegistry, SectionId, ShellController,
    badge_label, resolve_active_section,
};
use serde::Serialize;

type TestShell = ShellController<RecordingStorage, MockViewport, RecordingNavigator>;

struct Harness {
    shell: TestShell,
    storage: RecordingStorage,
    navigator: RecordingNavigator,
}

fn mount(width: f64) -> Harness {
    let storage = RecordingStorage::new();
    let navigator = RecordingNavigator::new();
    let shell = ShellController::new(
        NavigationRegistry::standard(),
        storage.clone(),
        MockViewport::new(width),
        navigator.clone(),
    );
    Harness {
        shell,
        storage,
        navigator,
    }
}

#[derive(Debug, Clone, Serialize)]
struct Item {
    name: &'static str,
    quantity: u32,
}

fn item(name: &'static str) -> Item {
    Item { name, quantity: 1 }
}

#[test]
fn test_resolution_is_exact_match_only() {
    let registry = NavigationRegistry::standard();
    for entry in registry.entries() {
        assert_eq!(
            resolve_active_section(&registry, &entry.route),
            Some(entry.section.clone())
        );
        let extended = format!("{}/detail", entry.route.trim_end_matches('/'));
        assert_eq!(resolve_active_section(&registry, &extended), None);
    }
}

#[test]
fn test_hover_is_idempotent() {
    let mut h = mount(1200.0);
    h.shell.hover_enter();
    h.shell.hover_enter();
    assert!(h.shell.is_open());
    h.shell.hover_leave();
    h.shell.hover_leave();
    assert!(!h.shell.is_open());
}

#[test]
fn test_narrow_selection_collapses() {
    let mut h = mount(500.0);
    h.shell.toggle();
    assert!(h.shell.is_open());

    h.shell.select("/items");

    assert!(!h.shell.is_open());
    assert_eq!(h.shell.active_section(), Some(&SectionId::from("ITEMS")));
    assert_eq!(h.navigator.routes(), ["/items"]);
}

#[test]
fn test_wide_selection_keeps_openness() {
    let mut h = mount(1200.0);
    h.shell.hover_enter();

    h.shell.select("/items");

    assert!(h.shell.is_open());
    assert_eq!(h.shell.active_section(), Some(&SectionId::from("ITEMS")));
    assert_eq!(h.navigator.routes(), ["/items"]);
}

#[test]
fn test_wide_hover_leave_and_selection_end_closed() {
    let mut h = mount(1200.0);
    h.shell.hover_enter();
    h.shell.select("/bills");
    h.shell.hover_leave();
    assert!(!h.shell.is_open());
}

#[test]
fn test_toggle_twice_and_close() {
    let mut h = mount(1200.0);
    h.shell.toggle();
    h.shell.toggle();
    assert!(!h.shell.is_open());

    h.shell.close();
    assert!(!h.shell.is_open());
    h.shell.toggle();
    h.shell.close();
    assert!(!h.shell.is_open());
}

#[test]
fn test_external_route_changes_move_indicator() {
    let mut h = mount(1200.0);
    h.shell.select("/items");
    // Echo of the shell's own navigation.
    h.shell.observe_route("/items");
    assert_eq!(h.shell.active_section(), Some(&SectionId::from("ITEMS")));

    // Browser back to a page with no menu entry.
    h.shell.observe_route("/cart");
    assert_eq!(h.shell.active_section(), None);
    assert!(h.shell.nav_slots().all(|slot| !matches!(
        slot,
        NavSlot::Entry { active: true, .. }
    )));

    // Deep link.
    h.shell.observe_route("/customers");
    assert_eq!(h.shell.active_section(), Some(&SectionId::from("CUSTOMERS")));
    assert_eq!(h.navigator.routes(), ["/items"]);
}

#[test]
fn test_cart_badge_and_persisted_value() {
    let storage = RecordingStorage::new();
    let mut mirror = CartMirror::new(storage.clone());
    let cart = CartSnapshot::from_items(vec![item("A"), item("B"), item("C")]);

    mirror.observe(&cart).unwrap();

    assert_eq!(badge_label(cart.len()).as_deref(), Some("3"));
    let written: serde_json::Value =
        serde_json::from_str(&storage.value(CART_ITEMS_KEY).unwrap()).unwrap();
    let names: Vec<_> = written
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["A", "B", "C"]);
}

#[test]
fn test_empty_cart_hides_badge_but_persists() {
    let storage = RecordingStorage::new();
    let mut mirror = CartMirror::new(storage.clone());
    let cart = CartSnapshot::<Item>::new();

    mirror.observe(&cart).unwrap();

    assert_eq!(badge_label(cart.len()), None);
    assert_eq!(storage.writes_to(CART_ITEMS_KEY), ["[]"]);
}

#[test]
fn test_sequential_mutations_written_in_order() {
    let storage = RecordingStorage::new();
    let mut mirror = CartMirror::new(storage.clone());
    let mut cart = CartSnapshot::new();

    mirror.observe(&cart).unwrap();
    cart.update(|items| items.push("A"));
    mirror.observe(&cart).unwrap();
    // Re-render without a cart change.
    mirror.observe(&cart).unwrap();
    cart.update(|items| items.push("B"));
    mirror.observe(&cart).unwrap();

    assert_eq!(
        storage.writes_to(CART_ITEMS_KEY),
        ["[]", r#"["A"]"#, r#"["A","B"]"#]
    );
    assert_eq!(
        storage.value(CART_ITEMS_KEY).as_deref(),
        Some(r#"["A","B"]"#)
    );
}

#[test]
fn test_logout_regardless_of_state() {
    for (width, open, route) in [
        (1200.0, false, "/"),
        (1200.0, true, "/cart"),
        (400.0, true, "/bills"),
    ] {
        let mut h = mount(width);
        h.storage.seed(AUTH_KEY, "session");
        h.shell.observe_route(route);
        if open {
            h.shell.hover_enter();
        }

        h.shell.logout();

        assert_eq!(h.storage.value(AUTH_KEY), None);
        assert_eq!(h.storage.ops(), [StorageOp::Remove(AUTH_KEY.into())]);
        assert_eq!(h.navigator.routes(), [LOGIN_ROUTE]);
    }
}
