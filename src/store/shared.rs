//! Thread-safe handle around a [`ConfigStore`].
//!
//! # Design Decisions
//! - Writers serialize on a mutex around the store
//! - After every write the new configuration is published through an
//!   `ArcSwap`, so readers never take the lock
//! - A poisoned lock is recovered and its poison flag cleared: update and
//!   reset never leave the store half-applied

use arc_swap::ArcSwap;
use serde_json::Value;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::store::config_store::ConfigStore;
use crate::store::value::ConfigMap;

struct Inner {
    store: Mutex<ConfigStore>,
    published: ArcSwap<ConfigMap>,
}

/// Cloneable, shareable configuration store.
#[derive(Clone)]
pub struct SharedConfigStore {
    inner: Arc<Inner>,
}

impl SharedConfigStore {
    pub fn new(store: ConfigStore) -> Self {
        let published = ArcSwap::from_pointee(store.snapshot());
        Self {
            inner: Arc::new(Inner {
                store: Mutex::new(store),
                published,
            }),
        }
    }

    /// Apply an update and return the published result.
    pub fn update_config(&self, new_config: &ConfigMap) -> Arc<ConfigMap> {
        let mut store = self.lock();
        let next = Arc::new(store.update_config(new_config).clone());
        self.inner.published.store(next.clone());
        next
    }

    /// Reset to the default configuration and return the published result.
    pub fn reset_to_default(&self) -> Arc<ConfigMap> {
        let mut store = self.lock();
        let next = Arc::new(store.reset_to_default().clone());
        self.inner.published.store(next.clone());
        next
    }

    /// Latest published configuration. Lock-free.
    pub fn load(&self) -> Arc<ConfigMap> {
        self.inner.published.load_full()
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.inner.published.load().get(key).cloned()
    }

    pub fn get_or(&self, key: &str, default: Value) -> Value {
        self.get(key).unwrap_or(default)
    }

    pub fn history_len(&self) -> usize {
        self.lock().history().len()
    }

    /// Run `f` against the underlying store while holding the lock.
    pub fn with_store<R>(&self, f: impl FnOnce(&ConfigStore) -> R) -> R {
        f(&self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, ConfigStore> {
        self.inner.store.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("Config store lock poisoned, recovering");
            self.inner.store.clear_poison();
            poisoned.into_inner()
        })
    }
}

impl From<ConfigStore> for SharedConfigStore {
    fn from(store: ConfigStore) -> Self {
        Self::new(store)
    }
}
