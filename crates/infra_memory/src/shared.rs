//! Registry shared between several actors
//!
//! One mutex guards the whole registry and each operation holds it for its
//! full duration, so no caller ever observes a half-applied change.

use std::sync::{Arc, Mutex, PoisonError};

use crate::registry::Registry;

/// Cloneable handle to a lock-protected registry
#[derive(Debug, Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<Mutex<Registry>>,
}

impl SharedRegistry {
    pub fn new(registry: Registry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    /// Runs one operation against the registry under the lock
    ///
    /// Registry operations never leave partial state, so a lock poisoned by
    /// a panicking caller is recovered rather than propagated.
    pub fn with_registry<R>(&self, op: impl FnOnce(&mut Registry) -> R) -> R {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        op(&mut guard)
    }
}
