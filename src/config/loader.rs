//! Loading default configurations from disk.
//!
//! Files are only ever read: a loaded mapping becomes the construction-time
//! default of a [`ConfigStore`](crate::store::ConfigStore) and nothing is
//! written back.

use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::store::errors::{StoreError, StoreResult};
use crate::store::value::{into_config_map, ConfigMap};

/// Load a default configuration from a `.toml` or `.json` file.
pub fn load_defaults(path: &Path) -> StoreResult<ConfigMap> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    if extension != "toml" && extension != "json" {
        return Err(StoreError::UnsupportedFormat(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let defaults = if extension == "toml" {
        parse_toml(&content)?
    } else {
        into_config_map(serde_json::from_str(&content)?)?
    };

    tracing::info!(path = ?path, keys = defaults.len(), "Default configuration loaded");
    Ok(defaults)
}

/// Parse a TOML document into a configuration mapping.
pub fn parse_toml(content: &str) -> StoreResult<ConfigMap> {
    let table: toml::Table = toml::from_str(content)?;
    Ok(table
        .into_iter()
        .map(|(key, value)| (key, toml_to_json(value)))
        .collect())
}

/// Parse a `key=value` assignment.
///
/// Both sides are trimmed. The value goes through [`parse_value`], so
/// `retries=3` yields a number and `theme = dark` the string `"dark"`.
pub fn parse_assignment(raw: &str) -> StoreResult<(String, Value)> {
    let (key, value) = raw.split_once('=').ok_or_else(|| {
        StoreError::InvalidArgument(format!("expected key=value, got '{}'", raw))
    })?;

    let key = key.trim();
    if key.is_empty() {
        return Err(StoreError::InvalidArgument(format!(
            "empty key in assignment '{}'",
            raw
        )));
    }

    Ok((key.to_string(), parse_value(value)))
}

/// Interpret a command-line value: JSON when it parses as JSON, otherwise
/// the trimmed text as a string.
pub fn parse_value(raw: &str) -> Value {
    let raw = raw.trim();
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

// Datetimes become strings; non-finite floats have no JSON form and become null.
fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::from(i),
        toml::Value::Float(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(key, value)| (key, toml_to_json(value)))
                .collect(),
        ),
    }
}
