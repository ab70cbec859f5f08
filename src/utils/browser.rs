//! Browser-backed implementations of the shell capabilities.

use neon_shell_core::{KeyValueStorage, Navigator, ShellController, StorageError, Viewport};

use super::dom;
use crate::models::Route;

/// The shell as mounted in the browser.
pub type BrowserShell = ShellController<BrowserStorage, WindowViewport, HashNavigator>;

/// `window.localStorage`, looked up on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
        storage.get_item(key).map_err(|_| StorageError::ReadFailed {
            key: key.to_string(),
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::WriteFailed {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .remove_item(key)
            .map_err(|_| StorageError::RemoveFailed {
                key: key.to_string(),
            })
    }
}

/// `window.innerWidth`. Without a window the layout counts as wide.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowViewport;

impl Viewport for WindowViewport {
    fn width(&self) -> f64 {
        dom::viewport_width().unwrap_or(f64::INFINITY)
    }
}

/// Navigates by rewriting `location.hash`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashNavigator;

impl Navigator for HashNavigator {
    fn navigate(&self, route: &str) {
        Route::from_path(route).push();
    }
}
