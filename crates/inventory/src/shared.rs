//! Process-wide handle to the inventory store.

use std::sync::{Arc, PoisonError, RwLock};

use crate::store::InventoryStore;

/// Cloneable handle that serializes access to one [`InventoryStore`].
///
/// Read-only computations share the read lock. A mutating computation holds the
/// write lock for its whole run, so two simulations never interleave day-steps.
#[derive(Debug, Clone)]
pub struct SharedInventory {
    inner: Arc<RwLock<InventoryStore>>,
}

impl SharedInventory {
    pub fn new(store: InventoryStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    pub fn read<R>(&self, f: impl FnOnce(&InventoryStore) -> R) -> R {
        // Each stock update is a single assignment, so a poisoned store is still consistent.
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    pub fn write<R>(&self, f: impl FnOnce(&mut InventoryStore) -> R) -> R {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}
