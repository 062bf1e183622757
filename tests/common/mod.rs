//! Shared fixtures for integration tests.

use config_store::store::{into_config_map, ConfigMap, ConfigStore};
use serde_json::{json, Value};

/// Build a mapping from a `json!` object literal.
pub fn map(value: Value) -> ConfigMap {
    into_config_map(value).expect("fixture must be a JSON object")
}

/// The application defaults used across scenarios.
pub fn app_defaults() -> ConfigMap {
    map(json!({"theme": "light", "autoSave": true}))
}

/// A fresh store seeded with [`app_defaults`].
#[allow(dead_code)]
pub fn app_store() -> ConfigStore {
    ConfigStore::new("app", app_defaults())
}
