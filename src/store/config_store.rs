//! The configuration store.
//!
//! # State
//! - `default_config`: fixed at construction, never mutated afterwards
//! - `current_config`: cumulative shallow merge of every update since the
//!   last reset (or since construction)
//! - `history`: append-only, chronological; one entry per update or reset,
//!   holding the configuration as it was *before* the operation
//!
//! # Design Decisions
//! - Snapshots are owned clones, so later changes never reach stored entries
//! - Update and reset hand back a shared borrow of the live mapping; the
//!   borrow checker rules out mutation through it

use serde::Serialize;
use serde_json::Value;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::observability::metrics;
use crate::store::errors::StoreResult;
use crate::store::history::HistoryEntry;
use crate::store::value::{into_config_map, shallow_merge, ConfigMap};

/// In-memory configuration holder with a default, a current state and a history log.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    name: String,
    created_at: SystemTime,
    default_config: ConfigMap,
    current_config: ConfigMap,
    history: Vec<HistoryEntry>,
}

/// Serializable overview of a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreSummary {
    pub name: String,
    /// Milliseconds since the Unix epoch.
    pub created_at_ms: u64,
    /// Keys of the current configuration, sorted.
    pub keys: Vec<String>,
    pub history_len: usize,
    pub resets: usize,
}

impl ConfigStore {
    /// Create a store whose default and current configuration are `default_config`.
    pub fn new(name: impl Into<String>, default_config: ConfigMap) -> Self {
        let name = name.into();
        tracing::info!(store = %name, keys = default_config.len(), "Config store created");

        Self {
            current_config: default_config.clone(),
            default_config,
            name,
            created_at: SystemTime::now(),
            history: Vec::new(),
        }
    }

    /// Create a store with an empty default configuration.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, ConfigMap::new())
    }

    /// Shallow-merge `new_config` into the current configuration.
    ///
    /// The pre-update configuration is logged first. Returns the live
    /// configuration after the merge.
    pub fn update_config(&mut self, new_config: &ConfigMap) -> &ConfigMap {
        self.history
            .push(HistoryEntry::update(self.current_config.clone()));
        self.current_config = shallow_merge(&self.current_config, new_config);

        tracing::debug!(
            store = %self.name,
            changed_keys = new_config.len(),
            history_len = self.history.len(),
            "Configuration updated"
        );
        metrics::record_update(&self.name, self.history.len());

        &self.current_config
    }

    /// Like [`update_config`](Self::update_config), but accepts any JSON value.
    ///
    /// Non-object values are rejected with `InvalidArgument` and leave the
    /// store untouched (no history entry is written).
    pub fn update_from_value(&mut self, value: Value) -> StoreResult<&ConfigMap> {
        let new_config = into_config_map(value)?;
        Ok(self.update_config(&new_config))
    }

    /// Restore the construction-time default configuration.
    pub fn reset_to_default(&mut self) -> &ConfigMap {
        self.history
            .push(HistoryEntry::reset(self.current_config.clone()));
        self.current_config = self.default_config.clone();

        tracing::info!(
            store = %self.name,
            history_len = self.history.len(),
            "Configuration reset to default"
        );
        metrics::record_reset(&self.name, self.history.len());

        &self.current_config
    }

    /// Look up `key` in the current configuration.
    ///
    /// Presence decides: a stored `null` comes back as `Some(&Value::Null)`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.current_config.get(key)
    }

    /// Stored value for `key`, or `default` when the key is absent.
    pub fn get_or(&self, key: &str, default: Value) -> Value {
        match self.current_config.get(key) {
            Some(value) => value.clone(),
            None => default,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created_at(&self) -> SystemTime {
        self.created_at
    }

    pub fn default_config(&self) -> &ConfigMap {
        &self.default_config
    }

    pub fn current_config(&self) -> &ConfigMap {
        &self.current_config
    }

    /// History entries, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Owned copy of the current configuration.
    pub fn snapshot(&self) -> ConfigMap {
        self.current_config.clone()
    }

    pub fn summary(&self) -> StoreSummary {
        let created_at_ms = self
            .created_at
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64;

        StoreSummary {
            name: self.name.clone(),
            created_at_ms,
            keys: self.current_config.keys().cloned().collect(),
            history_len: self.history.len(),
            resets: self.history.iter().filter(|e| e.is_reset()).count(),
        }
    }
}
