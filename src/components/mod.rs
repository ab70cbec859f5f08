//! UI components built with Leptos.
//!
//! - [`router`] - Hash routing (main entry point)
//! - [`layout`] - Persistent navigation shell
//! - [`pages`] - Page content shown inside the shell
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod icons;
pub mod layout;
pub mod pages;
pub mod router;

pub use router::AppRouter;
