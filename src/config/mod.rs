//! Default configuration seeding.
//!
//! # Data Flow
//! ```text
//! defaults file (TOML/JSON)
//!     → loader.rs (read, parse, require a top-level table)
//!     → ConfigMap handed to ConfigStore::new
//!
//! --set key=value
//!     → loader.rs parse_assignment (JSON value, or plain string)
//!
//! --fallback VALUE
//!     → loader.rs parse_value (same rule)
//! ```

pub mod loader;

pub use loader::{load_defaults, parse_assignment, parse_toml, parse_value};
