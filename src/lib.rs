//! In-memory configuration store with defaults, shallow-merge updates and history.

pub mod config;
pub mod observability;
pub mod store;

pub use store::{ConfigMap, ConfigStore, HistoryAction, HistoryEntry, SharedConfigStore, StoreError};
