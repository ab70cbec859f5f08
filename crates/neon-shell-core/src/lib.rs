//! View-state core for the NEON navigation shell.
//!
//! Keeps three independently changing signals consistent with what the shell
//! renders and persists:
//!
//! - the current route, mapped to an active section by [`resolve_active_section`]
//! - the sidebar openness, owned by the [`panel`] transition rules
//! - the cart contents, mirrored to storage by [`CartMirror`]
//!
//! Platform access (storage, viewport width, navigation) is injected through
//! the [`KeyValueStorage`], [`Viewport`] and [`Navigator`] traits so the whole
//! core runs without a browser.

pub mod cart;
pub mod config;
pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod panel;
pub mod registry;
mod resolver;
pub mod shell;
pub mod storage;

pub use cart::{CartMirror, CartSnapshot, badge_label};
pub use error::{RegistryError, StorageError};
pub use panel::{PanelEvent, Viewport};
pub use registry::{NavIcon, NavigationEntry, NavigationRegistry, SectionId};
pub use resolver::resolve_active_section;
pub use shell::{NavSlot, Navigator, ShellController, ShellState};
pub use storage::{KeyValueStorage, MemoryStorage};
