//! Error definitions for the configuration store.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised at the edges of the store.
///
/// The store operations themselves are total; only argument checking and
/// seeding defaults from disk can fail.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A caller handed over something that is not a key/value mapping.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The defaults file could not be read.
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The defaults file is not valid TOML.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The defaults file is not valid JSON, or the report failed to encode.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The defaults file extension is neither `.toml` nor `.json`.
    #[error("Unsupported defaults format: {} (expected .toml or .json)", .0.display())]
    UnsupportedFormat(PathBuf),
}

/// Result type for store operations that can fail.
pub type StoreResult<T> = Result<T, StoreError>;
