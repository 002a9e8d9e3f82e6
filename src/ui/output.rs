//! Result rendering for both output modes.
//!
//! In JSON mode every command prints exactly one object on stdout:
//! the payload under a named key plus `"has_error": false`, or
//! `{"error", "kind", "has_error": true}` on failure.

use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use serde::Serialize;
use serde_json::{Map, Value, json};

#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    pub json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    /// Print `value` under `key` in JSON mode, or run `human` otherwise.
    pub fn emit<T, F>(&self, key: &str, value: &T, human: F) -> AppResult<()>
    where
        T: Serialize + ?Sized,
        F: FnOnce(),
    {
        if self.json {
            let mut obj = Map::new();
            obj.insert(key.to_string(), serde_json::to_value(value)?);
            print_object(obj)
        } else {
            human();
            Ok(())
        }
    }

    /// Mutation without a payload.
    pub fn done(&self, msg: &str) -> AppResult<()> {
        self.emit("message", msg, || messages::success(msg))
    }

    /// Mutation that reports a value (a new id, a row count).
    pub fn done_with<T: Serialize + ?Sized>(&self, key: &str, value: &T, msg: &str) -> AppResult<()> {
        if self.json {
            let mut obj = Map::new();
            obj.insert(key.to_string(), serde_json::to_value(value)?);
            obj.insert("message".to_string(), Value::String(msg.to_string()));
            print_object(obj)
        } else {
            messages::success(msg);
            Ok(())
        }
    }

    /// Report a failed command. Never fails itself.
    pub fn failure(&self, err: &AppError) {
        if self.json {
            let body = json!({
                "error": err.to_string(),
                "kind": err.kind().as_str(),
                "has_error": true,
            });
            println!("{}", body);
        } else {
            messages::error(format!("Error: {}", err));
        }
    }
}

fn print_object(mut obj: Map<String, Value>) -> AppResult<()> {
    obj.insert("has_error".to_string(), Value::Bool(false));
    println!("{}", serde_json::to_string_pretty(&Value::Object(obj))?);
    Ok(())
}
