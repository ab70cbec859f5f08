//! Recording test doubles for the injected capabilities.
//!
//! Enabled for unit tests and, through the `mock` feature, for integration
//! tests and downstream crates.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::error::StorageError;
use crate::panel::Viewport;
use crate::shell::Navigator;
use crate::storage::KeyValueStorage;

/// A mutating call received by [`RecordingStorage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageOp {
    Set(String, String),
    Remove(String),
}

#[derive(Debug, Default)]
struct RecordingInner {
    entries: BTreeMap<String, String>,
    ops: Vec<StorageOp>,
    fail_writes: bool,
}

/// Storage that keeps every `set`/`remove` call in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingStorage {
    inner: Rc<RefCell<RecordingInner>>,
}

impl RecordingStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates a key without recording an operation.
    pub fn seed(&self, key: &str, value: &str) {
        self.inner
            .borrow_mut()
            .entries
            .insert(key.to_string(), value.to_string());
    }

    /// Makes subsequent `set` calls fail as if the quota were exhausted.
    pub fn fail_writes(&self, fail: bool) {
        self.inner.borrow_mut().fail_writes = fail;
    }

    pub fn ops(&self) -> Vec<StorageOp> {
        self.inner.borrow().ops.clone()
    }

    /// Values passed to `set` for `key`, oldest first.
    pub fn writes_to(&self, key: &str) -> Vec<String> {
        self.inner
            .borrow()
            .ops
            .iter()
            .filter_map(|op| match op {
                StorageOp::Set(k, v) if k == key => Some(v.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.inner.borrow().entries.get(key).cloned()
    }
}

impl KeyValueStorage for RecordingStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.value(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut inner = self.inner.borrow_mut();
        inner
            .ops
            .push(StorageOp::Set(key.to_string(), value.to_string()));
        if inner.fail_writes {
            return Err(StorageError::WriteFailed {
                key: key.to_string(),
                reason: "quota exceeded".to_string(),
            });
        }
        inner.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut inner = self.inner.borrow_mut();
        inner.ops.push(StorageOp::Remove(key.to_string()));
        inner.entries.remove(key);
        Ok(())
    }
}

/// Navigator that records requested routes.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    routes: Rc<RefCell<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> Vec<String> {
        self.routes.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &str) {
        self.routes.borrow_mut().push(route.to_string());
    }
}

/// Viewport whose width the test controls. Clones share the width.
#[derive(Debug, Clone)]
pub struct MockViewport {
    width: Rc<Cell<f64>>,
}

impl MockViewport {
    pub fn new(width: f64) -> Self {
        Self {
            width: Rc::new(Cell::new(width)),
        }
    }

    pub fn resize(&self, width: f64) {
        self.width.set(width);
    }
}

impl Viewport for MockViewport {
    fn width(&self) -> f64 {
        self.width.get()
    }
}
