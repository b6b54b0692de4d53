//! Default value literals
//!
//! Copyright (c) 2025 Schema Transpose Team
//! Licensed under the Apache-2.0 license

use crate::literal::{is_truthy, plain_text, quote};
use crate::types::TargetType;
use serde_json::Value;

/// Serializes schema defaults into HCL literals for a given target type
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSerializer;

impl DefaultSerializer {
    pub fn new() -> Self {
        Self
    }

    /// Produce the literal for `value` (absent or `null` included) as `target`.
    ///
    /// Containers are written as indented JSON, which HCL accepts as-is for
    /// tuple and object values.
    pub fn serialize(&self, target: &TargetType, value: Option<&Value>) -> String {
        let value = value.unwrap_or(&Value::Null);

        match target {
            TargetType::List(_) | TargetType::Map(_) => {
                if is_truthy(value) {
                    container_literal(value)
                } else if matches!(target, TargetType::List(_)) {
                    "[]".to_string()
                } else {
                    "{}".to_string()
                }
            }
            _ if value.is_null() => "null".to_string(),
            numeric if numeric.is_numeric() => plain_text(value),
            TargetType::String => quote(&plain_text(value)),
            TargetType::Bool => is_truthy(value).to_string(),
            _ if is_truthy(value) => plain_text(value),
            _ => "null".to_string(),
        }
    }
}

/// Pretty JSON with every line after the first shifted right by two spaces
fn container_literal(value: &Value) -> String {
    let pretty = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());

    let indented: Vec<String> = pretty
        .lines()
        .map(|line| {
            if line.trim().is_empty() {
                line.to_string()
            } else {
                format!("  {}", line)
            }
        })
        .collect();

    indented.join("\n").trim().to_string()
}
