//! JSON list columns: the five bank fields of a company and the
//! `work_ids` / `costs` / `quantities` columns of a salary entry.
//!
//! Decoding is lenient so rows written by older clients still load: a bare
//! scalar becomes a one-element list, NULL or blank text an empty one.

use serde::Serialize;
use serde_json::Value;

pub fn encode_list<T: Serialize>(items: &[T]) -> serde_json::Result<String> {
    serde_json::to_string(items)
}

fn blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

pub fn decode_strings(raw: Option<&str>) -> Vec<String> {
    let Some(text) = blank(raw) else {
        return Vec::new();
    };

    match serde_json::from_str::<Value>(text) {
        Ok(Value::Array(items)) => items.into_iter().filter_map(value_to_string).collect(),
        Ok(Value::Null) => Vec::new(),
        Ok(other) => value_to_string(other).into_iter().collect(),
        // plain text that never went through the JSON encoder
        Err(_) => vec![text.to_string()],
    }
}

fn value_to_string(v: Value) -> Option<String> {
    match v {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

pub fn decode_ints(raw: Option<&str>) -> Result<Vec<i64>, String> {
    let Some(text) = blank(raw) else {
        return Ok(Vec::new());
    };

    let value: Value =
        serde_json::from_str(text).map_err(|e| format!("'{}' is not a JSON list: {}", text, e))?;

    match value {
        Value::Array(items) => items.iter().map(value_to_int).collect(),
        Value::Null => Ok(Vec::new()),
        scalar => value_to_int(&scalar).map(|n| vec![n]),
    }
}

fn value_to_int(v: &Value) -> Result<i64, String> {
    if let Some(n) = v.as_i64() {
        return Ok(n);
    }
    match v.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(f as i64),
        _ => Err(format!("'{}' is not an integer", v)),
    }
}
