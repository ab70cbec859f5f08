//! Error types for the shell core.
//!
//! - [`StorageError`] - failures reported by a [`KeyValueStorage`](crate::KeyValueStorage) backend
//! - [`RegistryError`] - rejected navigation registry definitions

use thiserror::Error;

/// Failures of the durable key-value store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The backing store does not exist (no window, storage disabled).
    #[error("storage not available")]
    Unavailable,
    /// Reading a key failed.
    #[error("failed to read `{key}`")]
    ReadFailed { key: String },
    /// Writing a key failed, typically because the quota is exhausted.
    #[error("failed to write `{key}`: {reason}")]
    WriteFailed { key: String, reason: String },
    /// Removing a key failed.
    #[error("failed to remove `{key}`")]
    RemoveFailed { key: String },
    /// The value could not be serialized before writing.
    #[error("failed to serialize `{key}`: {reason}")]
    Serialization { key: String, reason: String },
}

/// Reasons a navigation registry definition is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("route `{0}` is registered more than once")]
    DuplicateRoute(String),
    #[error("section `{0}` is registered more than once")]
    DuplicateSection(String),
    #[error("entry `{0}` has an empty route")]
    EmptyRoute(String),
}
