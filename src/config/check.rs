//! Detect and fill configuration keys missing from an older config file.

use super::{default_database, default_separator_char, default_utc_offset};
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys every config file is expected to carry, with their default values.
fn expected_keys() -> Vec<(&'static str, Value)> {
    vec![
        ("database", Value::String(default_database())),
        ("utc_offset", Value::String(default_utc_offset())),
        ("advance_check_on_insert", Value::Bool(true)),
        ("advance_check_on_update", Value::Bool(false)),
        ("separator_char", Value::String(default_separator_char())),
    ]
}

/// Return the keys absent from `map`.
pub fn missing_keys(map: &Mapping) -> Vec<&'static str> {
    expected_keys()
        .into_iter()
        .filter(|(k, _)| !map.contains_key(*k))
        .map(|(k, _)| k)
        .collect()
}

/// Add any missing key (with its default) to the config file at `path`.
///
/// Returns the keys that were added; an empty list means the file was
/// already complete and has not been rewritten.
pub fn fill_missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let mut yaml: Value =
        serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))?;

    let map = yaml
        .as_mapping_mut()
        .ok_or_else(|| AppError::Config("configuration root is not a mapping".into()))?;

    let missing = missing_keys(map);
    if missing.is_empty() {
        return Ok(missing);
    }

    for (key, default) in expected_keys() {
        if missing.contains(&key) {
            map.insert(Value::String(key.to_string()), default);
        }
    }

    let serialized = serde_yaml::to_string(&yaml).map_err(|_| AppError::ConfigSave)?;
    fs::write(path, serialized).map_err(|_| AppError::ConfigSave)?;

    Ok(missing)
}
