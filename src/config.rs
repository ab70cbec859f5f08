//! Application configuration.
//!
//! Centralizes the constants used by the browser shell. Storage keys, routes
//! and the responsive breakpoint live in the core crate and are re-exported.

pub use neon_shell_core::config::*;

// =============================================================================
// Application Metadata
// =============================================================================

/// Brand text shown as the sidebar logo.
pub const APP_NAME: &str = "NEON Sports";

/// Text of the blocking overlay shown while the store reports loading.
pub const LOADING_TEXT: &str = "Loading...";

/// Most verbose level the console subscriber emits.
pub const LOG_LEVEL: tracing::Level = if cfg!(debug_assertions) {
    tracing::Level::DEBUG
} else {
    tracing::Level::INFO
};

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
