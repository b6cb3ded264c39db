//! In-memory registry of indexes pending initialization.
//!
//! Hosts use this to track indexes whose start-up initialization was skipped
//! or failed (typically because the backend was unreachable), and compose it
//! with their own liveness probe to implement `SearchBackendStatus`.

use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

use crate::interfaces::SearchIndex;

/// Ordered, name-deduplicated set of indexes awaiting initialization.
///
/// Registration order is preserved and is the order handed back by
/// [`PendingIndexRegistry::pending`].
#[derive(Default)]
pub struct PendingIndexRegistry {
    indexes: Mutex<Vec<Arc<dyn SearchIndex>>>,
}

impl PendingIndexRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    // The list has no invariant a panicking holder could break, so a poisoned
    // lock is still usable.
    fn lock(&self) -> MutexGuard<'_, Vec<Arc<dyn SearchIndex>>> {
        self.indexes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Mark an index as pending initialization.
    ///
    /// # Returns
    ///
    /// `true` if the index was added, `false` if an index with the same name
    /// was already pending.
    pub fn register(&self, index: Arc<dyn SearchIndex>) -> bool {
        let mut indexes = self.lock();
        if indexes.iter().any(|i| i.name() == index.name()) {
            return false;
        }

        debug!(index = %index.name(), "Registered index for initialization");
        indexes.push(index);
        true
    }

    /// Remove the index with the given name from the pending set.
    ///
    /// # Returns
    ///
    /// `true` if an index was removed, `false` if none was pending under that name.
    pub fn unregister(&self, name: &str) -> bool {
        let mut indexes = self.lock();
        let before = indexes.len();
        indexes.retain(|i| i.name() != name);
        let removed = indexes.len() != before;

        if removed {
            debug!(index = %name, "Unregistered index from initialization");
        }
        removed
    }

    /// Snapshot of the pending indexes, in registration order.
    pub fn pending(&self) -> Vec<Arc<dyn SearchIndex>> {
        self.lock().clone()
    }

    /// Whether an index with the given name is pending.
    pub fn contains(&self, name: &str) -> bool {
        self.lock().iter().any(|i| i.name() == name)
    }

    /// Number of pending indexes.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no index is pending.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
