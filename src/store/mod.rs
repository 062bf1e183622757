//! Configuration store subsystem.
//!
//! # Data Flow
//! ```text
//! default mapping (caller or config::loader)
//!     → ConfigStore::new (default + current copies)
//!
//! update_config / reset_to_default:
//!     → history.rs entry with the pre-operation snapshot
//!     → value.rs shallow merge (update) or default clone (reset)
//!     → current configuration replaced
//!
//! Shared use:
//!     shared.rs serializes writers, publishes snapshots to readers
//! ```

pub mod config_store;
pub mod errors;
pub mod history;
pub mod shared;
pub mod value;

pub use config_store::{ConfigStore, StoreSummary};
pub use errors::{StoreError, StoreResult};
pub use history::{HistoryAction, HistoryEntry};
pub use shared::SharedConfigStore;
pub use value::{into_config_map, shallow_merge, ConfigMap};
