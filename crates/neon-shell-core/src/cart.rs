//! Cart observation: persistence mirror and badge.
//!
//! The cart itself belongs to an external store. The store hands out
//! [`CartSnapshot`] values whose revision changes on every mutation; the
//! [`CartMirror`] writes the full item list once per revision it sees.
//! Revisions come from one process-wide counter, so a freshly built snapshot
//! never reuses the revision of one the mirror has already seen.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::config::CART_ITEMS_KEY;
use crate::error::StorageError;
use crate::storage::KeyValueStorage;

static NEXT_REVISION: AtomicU64 = AtomicU64::new(1);

fn next_revision() -> u64 {
    NEXT_REVISION.fetch_add(1, Ordering::Relaxed)
}

/// Read-only view of the store's cart at one revision.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSnapshot<T> {
    revision: u64,
    items: Vec<T>,
}

impl<T> CartSnapshot<T> {
    /// Empty cart at a fresh revision.
    pub fn new() -> Self {
        Self::from_items(Vec::new())
    }

    /// Cart holding `items` at a fresh revision.
    pub fn from_items(items: Vec<T>) -> Self {
        Self {
            revision: next_revision(),
            items,
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Store-side mutation. Always starts a new revision, even when the
    /// resulting items equal the previous ones.
    pub fn update(&mut self, f: impl FnOnce(&mut Vec<T>)) {
        f(&mut self.items);
        self.revision = next_revision();
    }

    /// Store-side replacement of the whole item list.
    pub fn replace(&mut self, items: Vec<T>) {
        self.update(|current| *current = items);
    }
}

impl<T> Default for CartSnapshot<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Badge text for a cart of `count` items; `None` hides the badge.
///
/// The raw count is shown, without truncation.
pub fn badge_label(count: usize) -> Option<String> {
    (count > 0).then(|| count.to_string())
}

/// Persists every observed cart revision under [`CART_ITEMS_KEY`].
#[derive(Debug)]
pub struct CartMirror<S> {
    storage: S,
    last_revision: Option<u64>,
}

impl<S: KeyValueStorage> CartMirror<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            last_revision: None,
        }
    }

    /// Writes `snapshot` unless its revision was already observed.
    ///
    /// Returns `Ok(true)` when a write happened. A failed write is reported
    /// once and not retried for the same revision.
    pub fn observe<T: Serialize>(&mut self, snapshot: &CartSnapshot<T>) -> Result<bool, StorageError> {
        if self.last_revision == Some(snapshot.revision) {
            return Ok(false);
        }
        self.last_revision = Some(snapshot.revision);
        self.persist(snapshot.items())?;
        tracing::debug!(
            revision = snapshot.revision,
            count = snapshot.len(),
            "cart persisted"
        );
        Ok(true)
    }

    /// Serializes `items` and overwrites the stored cart.
    pub fn persist<T: Serialize>(&self, items: &[T]) -> Result<(), StorageError> {
        let json = serde_json::to_string(items).map_err(|e| StorageError::Serialization {
            key: CART_ITEMS_KEY.to_string(),
            reason: e.to_string(),
        })?;
        self.storage.set(CART_ITEMS_KEY, &json)
    }
}
