//! Schema document wrapper
//!
//! A [`Schema`] pairs the full document (the space `$ref` pointers resolve in)
//! with the object whose `properties` are being converted. Usually both are the
//! same; selecting a named model lets one exported document hold many models.
//!
//! Copyright (c) 2025 Schema Transpose Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use crate::parser::SchemaParser;
use serde_json::{Map, Value};
use std::path::Path;

/// Sections of a document that may hold named models, in lookup order
const MODEL_SECTIONS: &[&[&str]] = &[&["definitions"], &["$defs"], &["components", "schemas"]];

/// A loaded, read-only schema document
#[derive(Debug, Clone)]
pub struct Schema {
    document: Value,
    root: Map<String, Value>,
    properties: Map<String, Value>,
    model: Option<String>,
}

impl Schema {
    /// Wrap a document whose top level is the model to convert
    pub fn new(document: Value) -> Result<Self> {
        let (root, properties) = Self::object_schema(&document, "document root")?;
        Ok(Self {
            root,
            properties,
            document,
            model: None,
        })
    }

    /// Wrap a document, converting the named model found under `definitions`,
    /// `$defs` or `components/schemas`
    pub fn with_model(document: Value, model: &str) -> Result<Self> {
        let candidate = MODEL_SECTIONS
            .iter()
            .filter_map(|section| {
                section
                    .iter()
                    .try_fold(&document, |node, key| node.get(*key))
                    .and_then(|models| models.get(model))
            })
            .next()
            .ok_or_else(|| Error::invalid_schema(format!("model '{}' not found in document", model)))?;

        let (root, properties) = Self::object_schema(candidate, model)?;
        Ok(Self {
            root,
            properties,
            document,
            model: Some(model.to_string()),
        })
    }

    /// Load a schema file (JSON or YAML), optionally selecting a named model
    pub fn from_file(path: &Path, model: Option<&str>) -> Result<Self> {
        let document = SchemaParser::new().parse_file(path)?;
        match model {
            Some(name) => Self::with_model(document, name),
            None => Self::new(document),
        }
    }

    /// The whole document, used for reference resolution
    pub fn document(&self) -> &Value {
        &self.document
    }

    /// The selected model's schema object
    pub fn root(&self) -> &Map<String, Value> {
        &self.root
    }

    /// Name of the selected model, if one was chosen
    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    /// The model's title, falling back to the selected model name
    pub fn title(&self) -> Option<&str> {
        self.root
            .get("title")
            .and_then(Value::as_str)
            .or(self.model.as_deref())
    }

    /// Field definitions in declared order
    pub fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }

    /// Whether `field` is listed in the model's `required` set
    pub fn is_required(&self, field: &str) -> bool {
        self.root
            .get("required")
            .and_then(Value::as_array)
            .map(|required| required.iter().any(|name| name.as_str() == Some(field)))
            .unwrap_or(false)
    }

    fn object_schema(
        value: &Value,
        what: &str,
    ) -> Result<(Map<String, Value>, Map<String, Value>)> {
        let obj = value
            .as_object()
            .ok_or_else(|| Error::invalid_schema(format!("{} is not an object", what)))?;

        match obj.get("properties") {
            Some(Value::Object(properties)) => Ok((obj.clone(), properties.clone())),
            Some(_) => Err(Error::invalid_schema(format!(
                "'properties' of {} is not an object",
                what
            ))),
            None => Err(Error::invalid_schema(format!("{} has no 'properties'", what))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document() -> Value {
        json!({
            "title": "Root",
            "properties": {
                "zeta": {"type": "string"},
                "alpha": {"type": "integer"}
            },
            "required": ["zeta"],
            "definitions": {
                "Database": {
                    "title": "Database",
                    "properties": {"host": {"type": "string"}},
                    "required": ["host"]
                },
                "Status": {"type": "string", "enum": ["UP", "DOWN"]}
            }
        })
    }

    #[test]
    fn test_root_schema() {
        let schema = Schema::new(document()).unwrap();
        assert_eq!(schema.title(), Some("Root"));
        assert!(schema.is_required("zeta"));
        assert!(!schema.is_required("alpha"));
        assert!(!schema.is_required("missing"));
    }

    #[test]
    fn test_properties_keep_declared_order() {
        let schema = Schema::new(document()).unwrap();
        let names: Vec<_> = schema.properties().keys().cloned().collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_model_selection() {
        let schema = Schema::with_model(document(), "Database").unwrap();
        assert_eq!(schema.model(), Some("Database"));
        assert!(schema.is_required("host"));
        assert!(schema.document().get("definitions").is_some());

        let defs = json!({
            "$defs": {"Cache": {"properties": {"ttl": {"type": "integer"}}}}
        });
        let schema = Schema::with_model(defs, "Cache").unwrap();
        assert_eq!(schema.title(), Some("Cache"));
    }

    #[test]
    fn test_invalid_documents() {
        assert!(matches!(
            Schema::new(json!(["not", "an", "object"])),
            Err(Error::InvalidSchema { .. })
        ));
        assert!(matches!(
            Schema::new(json!({"type": "object"})),
            Err(Error::InvalidSchema { .. })
        ));
        assert!(matches!(
            Schema::with_model(document(), "Missing"),
            Err(Error::InvalidSchema { .. })
        ));
        // Enum definitions are not models
        assert!(Schema::with_model(document(), "Status").is_err());
    }
}
