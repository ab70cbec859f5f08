//! Shell composition: state record, navigation capability and controller.
//!
//! [`ShellController`] owns the [`ShellState`] for the lifetime of one mounted
//! shell and applies every transition synchronously. Two paths feed the
//! active section:
//!
//! - selections made in the shell resolve the target route immediately
//! - every route change observed from outside (back/forward, deep links, and
//!   the echo of the shell's own navigation) goes through
//!   [`ShellController::observe_route`]
//!
//! Both resolve against the same registry, so the echo is a no-op and the
//! indicator never trails the route by more than one reaction.

use crate::config::{AUTH_KEY, LOGIN_ROUTE};
use crate::panel::{self, PanelEvent, Viewport};
use crate::registry::{NavigationEntry, NavigationRegistry, SectionId};
use crate::resolver::resolve_active_section;
use crate::storage::KeyValueStorage;

/// Route change requests issued by the shell.
pub trait Navigator {
    fn navigate(&self, route: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str),
{
    fn navigate(&self, route: &str) {
        self(route)
    }
}

/// Mutable view state of one shell instance. Not persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellState {
    /// Sidebar is in its expanded form.
    pub is_open: bool,
    /// Highlighted section, `None` when the route matches no entry.
    pub active_section: Option<SectionId>,
}

/// One position in the rendered navigation list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavSlot<'a> {
    Entry {
        entry: &'a NavigationEntry,
        active: bool,
    },
    /// Always the final slot.
    Logout,
}

/// Owns [`ShellState`] and the capabilities its transitions need.
#[derive(Debug)]
pub struct ShellController<S, V, N> {
    registry: NavigationRegistry,
    state: ShellState,
    storage: S,
    viewport: V,
    navigator: N,
}

impl<S, V, N> ShellController<S, V, N>
where
    S: KeyValueStorage,
    V: Viewport,
    N: Navigator,
{
    /// Mounts a shell: closed, nothing active.
    pub fn new(registry: NavigationRegistry, storage: S, viewport: V, navigator: N) -> Self {
        Self {
            registry,
            state: ShellState::default(),
            storage,
            viewport,
            navigator,
        }
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    pub fn registry(&self) -> &NavigationRegistry {
        &self.registry
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn active_section(&self) -> Option<&SectionId> {
        self.state.active_section.as_ref()
    }

    pub fn is_active(&self, section: &SectionId) -> bool {
        self.state.active_section.as_ref() == Some(section)
    }

    /// Re-resolves the active section for the route now current.
    pub fn observe_route(&mut self, route: &str) {
        let resolved = resolve_active_section(&self.registry, route);
        if resolved != self.state.active_section {
            tracing::debug!(route, section = ?resolved, "active section changed");
            self.state.active_section = resolved;
        }
    }

    pub fn hover_enter(&mut self) {
        self.apply(PanelEvent::HoverEnter);
    }

    pub fn hover_leave(&mut self) {
        self.apply(PanelEvent::HoverLeave);
    }

    pub fn toggle(&mut self) {
        self.apply(PanelEvent::Toggle);
    }

    pub fn close(&mut self) {
        self.apply(PanelEvent::Close);
    }

    /// Applies a single openness trigger.
    pub fn apply(&mut self, event: PanelEvent) {
        let next = panel::next_open_state(self.state.is_open, event);
        if next != self.state.is_open {
            tracing::debug!(?event, is_open = next, "sidebar openness changed");
        }
        self.state.is_open = next;
    }

    /// A menu entry was chosen: navigate, highlight, and collapse when narrow.
    pub fn select(&mut self, route: &str) {
        self.navigate(route);
        self.apply(PanelEvent::Selected {
            viewport_width: self.viewport.width(),
        });
    }

    /// Navigation that is not a menu choice (logo, cart). Never collapses.
    pub fn navigate(&mut self, route: &str) {
        tracing::debug!(route, "navigating");
        self.navigator.navigate(route);
        self.observe_route(route);
    }

    /// Clears the credential marker and selects the login route.
    pub fn logout(&mut self) {
        if let Err(err) = self.storage.remove(AUTH_KEY) {
            tracing::warn!(error = %err, "could not clear auth marker");
        }
        tracing::debug!("logged out");
        self.select(LOGIN_ROUTE);
    }

    /// Registry entries in order with their active flag, then logout.
    pub fn nav_slots(&self) -> impl Iterator<Item = NavSlot<'_>> {
        self.registry
            .entries()
            .iter()
            .map(|entry| NavSlot::Entry {
                entry,
                active: self.is_active(&entry.section),
            })
            .chain(std::iter::once(NavSlot::Logout))
    }
}
