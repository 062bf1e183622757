//! Configuration values and the shallow merge.

use serde_json::{Map, Value};

use crate::store::errors::{StoreError, StoreResult};

/// A configuration mapping: string keys to arbitrary JSON-shaped values.
pub type ConfigMap = Map<String, Value>;

/// Merge `overlay` over `base` one level deep.
///
/// Keys from `overlay` win. Nested objects are replaced wholesale, never
/// merged recursively. Neither input is touched.
pub fn shallow_merge(base: &ConfigMap, overlay: &ConfigMap) -> ConfigMap {
    let mut merged = base.clone();
    for (key, value) in overlay {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// Unwrap an object value into a [`ConfigMap`], rejecting every other shape.
pub fn into_config_map(value: Value) -> StoreResult<ConfigMap> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(StoreError::InvalidArgument(format!(
            "expected a mapping, got {}",
            json_type_name(&other)
        ))),
    }
}

/// Human-readable name of a JSON value's type, for error messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
