//! Target type inference
//!
//! Maps a resolved field definition onto the Terraform type vocabulary:
//! `string`, `number`, `bool`, `list(T)` and `map(T)`, with `any` standing in
//! for element types the schema leaves open.
//!
//! Copyright (c) 2025 Schema Transpose Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

/// Schema type names mapped to `number` under the Terraform profile
const NUMERIC_NAMES: &[&str] = &["int", "float", "integer"];

/// An inferred target-language type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetType {
    String,
    Number,
    Bool,
    /// Untyped placeholder for open container elements
    Any,
    List(Box<TargetType>),
    Map(Box<TargetType>),
    /// A schema type name passed through verbatim
    Named(String),
}

impl TargetType {
    /// Whether this is a `list(...)` or `map(...)` type
    pub fn is_container(&self) -> bool {
        matches!(self, TargetType::List(_) | TargetType::Map(_))
    }

    /// Whether values of this type are written as bare numbers
    pub fn is_numeric(&self) -> bool {
        match self {
            TargetType::Number => true,
            TargetType::Named(name) => NUMERIC_NAMES.contains(&name.as_str()),
            _ => false,
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetType::String => write!(f, "string"),
            TargetType::Number => write!(f, "number"),
            TargetType::Bool => write!(f, "bool"),
            TargetType::Any => write!(f, "any"),
            TargetType::List(inner) => write!(f, "list({})", inner),
            TargetType::Map(inner) => write!(f, "map({})", inner),
            TargetType::Named(name) => write!(f, "{}", name),
        }
    }
}

impl Serialize for TargetType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Which type vocabulary to map into
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeProfile {
    /// Terraform variable types; all numeric schema types become `number`
    #[default]
    Terraform,
    /// Documentation tables; numeric schema type names are shown as written
    Documentation,
}

/// A validator implied by the field's type rather than a constraint keyword
#[derive(Debug, Clone, PartialEq)]
pub enum TypeConstraint {
    /// Value must be one of the listed enum members
    OneOf(Vec<Value>),
}

/// Result of mapping one field definition
#[derive(Debug, Clone, PartialEq)]
pub struct TypeMapping {
    pub target: TargetType,
    pub constraints: Vec<TypeConstraint>,
}

/// Infers target types from resolved field definitions
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeMapper {
    profile: TypeProfile,
}

impl TypeMapper {
    /// Create a mapper for the given profile
    pub fn new(profile: TypeProfile) -> Self {
        Self { profile }
    }

    /// The profile this mapper uses
    pub fn profile(&self) -> TypeProfile {
        self.profile
    }

    /// Map a resolved definition to its target type and type-level constraints.
    ///
    /// An `enum` without a `type` is treated as a string enum. Anything else
    /// lacking a string `type` is an [`Error::UnknownFieldType`].
    pub fn map(&self, field_name: &str, definition: &Map<String, Value>) -> Result<TypeMapping> {
        let mut constraints = Vec::new();
        let mut type_name = definition.get("type").and_then(Value::as_str);

        if let Some(values) = definition.get("enum") {
            if definition.get("type").is_none() {
                type_name = Some("string");
            }
            let values = match values {
                Value::Array(values) => values.clone(),
                single => vec![single.clone()],
            };
            constraints.push(TypeConstraint::OneOf(values));
        }

        let type_name = type_name.ok_or_else(|| Error::unknown_type(field_name))?;
        let target = self.map_name(&type_name.to_lowercase(), definition);

        Ok(TypeMapping {
            target,
            constraints,
        })
    }

    fn map_name(&self, type_name: &str, definition: &Map<String, Value>) -> TargetType {
        match type_name {
            "string" => TargetType::String,
            name if NUMERIC_NAMES.contains(&name) => match self.profile {
                TypeProfile::Terraform => TargetType::Number,
                TypeProfile::Documentation => TargetType::Named(name.to_string()),
            },
            "array" => TargetType::List(Box::new(self.item_type(definition))),
            "dict" | "object" => TargetType::Map(Box::new(value_type(definition))),
            "boolean" => TargetType::Bool,
            _ => TargetType::String,
        }
    }

    /// Element type of an array, recursing into typed `items`
    fn item_type(&self, definition: &Map<String, Value>) -> TargetType {
        definition
            .get("items")
            .and_then(Value::as_object)
            .and_then(|items| {
                let name = items.get("type").and_then(Value::as_str)?;
                Some(self.map_name(&name.to_lowercase(), items))
            })
            .unwrap_or(TargetType::Any)
    }
}

/// Value type of a map: the literal `additionalProperties.type`, not recursed
fn value_type(definition: &Map<String, Value>) -> TargetType {
    definition
        .get("additionalProperties")
        .and_then(|additional| additional.get("type"))
        .and_then(Value::as_str)
        .map(|name| TargetType::Named(name.to_string()))
        .unwrap_or(TargetType::Any)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(definition: Value) -> Result<TypeMapping> {
        TypeMapper::default().map("field", definition.as_object().unwrap())
    }

    fn target(definition: Value) -> String {
        map(definition).unwrap().target.to_string()
    }

    #[test]
    fn test_scalar_mapping() {
        assert_eq!(target(json!({"type": "string"})), "string");
        assert_eq!(target(json!({"type": "integer"})), "number");
        assert_eq!(target(json!({"type": "int"})), "number");
        assert_eq!(target(json!({"type": "float"})), "number");
        assert_eq!(target(json!({"type": "number"})), "string");
        assert_eq!(target(json!({"type": "boolean"})), "bool");
        assert_eq!(target(json!({"type": "Boolean"})), "bool");
        assert_eq!(target(json!({"type": "null"})), "string");
    }

    #[test]
    fn test_container_mapping() {
        assert_eq!(target(json!({"type": "array"})), "list(any)");
        assert_eq!(
            target(json!({"type": "array", "items": {"type": "string"}})),
            "list(string)"
        );
        assert_eq!(
            target(json!({"type": "array", "items": {"type": "array", "items": {"type": "integer"}}})),
            "list(list(number))"
        );
        assert_eq!(
            target(json!({"type": "array", "items": {"$ref": "#/definitions/Thing"}})),
            "list(any)"
        );
        assert_eq!(target(json!({"type": "object"})), "map(any)");
        assert_eq!(target(json!({"type": "dict"})), "map(any)");
        assert_eq!(
            target(json!({"type": "object", "additionalProperties": {"type": "integer"}})),
            "map(integer)"
        );
        assert_eq!(
            target(json!({"type": "object", "additionalProperties": true})),
            "map(any)"
        );
    }

    #[test]
    fn test_enum_defaults_to_string() {
        let mapping = map(json!({"enum": ["UP", "DOWN"]})).unwrap();
        assert_eq!(mapping.target, TargetType::String);
        assert_eq!(
            mapping.constraints,
            vec![TypeConstraint::OneOf(vec![json!("UP"), json!("DOWN")])]
        );

        let mapping = map(json!({"type": "integer", "enum": [1, 2]})).unwrap();
        assert_eq!(mapping.target, TargetType::Number);
        assert_eq!(mapping.constraints.len(), 1);
    }

    #[test]
    fn test_unknown_type() {
        let err = TypeMapper::default()
            .map("mystery", json!({"description": "no type"}).as_object().unwrap())
            .unwrap_err();
        assert!(matches!(err, Error::UnknownFieldType { ref field } if field == "mystery"));
    }

    #[test]
    fn test_documentation_profile() {
        let mapper = TypeMapper::new(TypeProfile::Documentation);
        let definition = json!({"type": "integer"});
        let mapping = mapper.map("count", definition.as_object().unwrap()).unwrap();
        assert_eq!(mapping.target.to_string(), "integer");

        let definition = json!({"type": "array", "items": {"type": "float"}});
        let mapping = mapper.map("ratios", definition.as_object().unwrap()).unwrap();
        assert_eq!(mapping.target.to_string(), "list(float)");
    }

    #[test]
    fn test_serializes_as_string() {
        let value = serde_json::to_value(TargetType::List(Box::new(TargetType::Bool))).unwrap();
        assert_eq!(value, json!("list(bool)"));
        assert!(TargetType::Map(Box::new(TargetType::Any)).is_container());
        assert!(!TargetType::Number.is_container());
        assert!(TargetType::Named("integer".to_string()).is_numeric());
        assert!(!TargetType::Named("string".to_string()).is_numeric());
    }
}
