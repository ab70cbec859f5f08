//! Browser utilities.
//!
//! - [`dom`] - Window, storage and location access
//! - [`logging`] - `tracing` subscriber writing to the browser console
//! - [`BrowserStorage`], [`WindowViewport`], [`HashNavigator`] - Shell capabilities backed by the browser

mod browser;
pub mod dom;
pub mod logging;

pub use browser::{BrowserShell, BrowserStorage, HashNavigator, WindowViewport};
