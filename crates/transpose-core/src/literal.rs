//! Helpers for turning JSON values into text
//!
//! Copyright (c) 2025 Schema Transpose Team
//! Licensed under the Apache-2.0 license

use serde_json::Value;

/// Whether a value counts as "set" for defaults and description restoring.
///
/// `null`, `false`, zero, and empty strings or containers are all unset.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Natural text form of a value: strings without quotes, everything else as JSON
pub fn plain_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Quote text as an HCL string literal
pub fn quote(text: &str) -> String {
    format!("\"{}\"", escape(text))
}

/// Escape text for embedding between double quotes in HCL
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(ch),
        }
    }
    // Template sequences are doubled so they stay literal
    escaped.replace("${", "$${").replace("%{", "%%{")
}

/// Render a list of values as an HCL tuple literal, e.g. `["UP", "DOWN"]`
pub fn list_literal(values: &[Value]) -> String {
    let items: Vec<String> = values.iter().map(Value::to_string).collect();
    format!("[{}]", items.join(", "))
}
