//! Sidebar openness rules.
//!
//! Wide, pointer-driven layouts expand on hover and collapse on leave. Narrow
//! layouts rely on the explicit trigger and collapse after a menu choice.
//! Hover stays wired on every width; the post-selection collapse only applies
//! at or below [`RESPONSIVE_BREAKPOINT`].

use crate::config::RESPONSIVE_BREAKPOINT;

/// Width query, read once at the moment a menu item is selected.
pub trait Viewport {
    fn width(&self) -> f64;
}

impl<F> Viewport for F
where
    F: Fn() -> f64,
{
    fn width(&self) -> f64 {
        self()
    }
}

/// Triggers that change the sidebar's openness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelEvent {
    HoverEnter,
    HoverLeave,
    /// Menu-trigger button in the content header.
    Toggle,
    /// Close button, rendered only while open.
    Close,
    /// A menu entry or the logout action was chosen.
    Selected { viewport_width: f64 },
}

/// Whether `width` falls in the narrow layout range.
#[inline]
pub fn is_narrow(width: f64) -> bool {
    width <= RESPONSIVE_BREAKPOINT
}

/// Openness after `event`, given the current openness.
pub fn next_open_state(is_open: bool, event: PanelEvent) -> bool {
    match event {
        PanelEvent::HoverEnter => true,
        PanelEvent::HoverLeave | PanelEvent::Close => false,
        PanelEvent::Toggle => !is_open,
        PanelEvent::Selected { viewport_width } if is_narrow(viewport_width) => false,
        PanelEvent::Selected { .. } => is_open,
    }
}
