//! Unit tests for field descriptor construction
//!
//! These tests run whole schemas through reference resolution, type mapping,
//! default serialization and rule synthesis, checking the descriptors that
//! renderers receive.

use serde_json::{json, Value};
use transpose_core::{
    build_descriptors, build_field_descriptor, DescriptorBuilder, Error, FieldDescriptor,
    Schema, TargetType, TypeProfile,
};

fn status_schema() -> Value {
    json!({
        "title": "Service",
        "properties": {
            "count": {"type": "integer", "minimum": 0},
            "tag": {"type": "string", "pattern": "^[a-z]+$"},
            "names": {"type": "array", "items": {"type": "string"}},
            "status": {
                "allOf": [{"$ref": "#/definitions/Status"}],
                "description": "Current status"
            }
        },
        "required": ["count"],
        "definitions": {
            "Status": {
                "title": "Status",
                "type": "string",
                "enum": ["UP", "DOWN"],
                "description": "generic"
            }
        }
    })
}

fn field(name: &str) -> FieldDescriptor {
    let schema = Schema::new(status_schema()).unwrap();
    let raw = schema.properties()[name].clone();
    build_field_descriptor(&schema, name, &raw).unwrap()
}

#[cfg(test)]
mod scenarios {
    use super::*;

    #[test]
    fn test_required_integer_minimum() {
        let descriptor = field("count");

        assert!(descriptor.required);
        assert!(!descriptor.has_default);
        assert_eq!(descriptor.inferred_type, TargetType::Number);
        assert_eq!(descriptor.validation_rules.len(), 1);
        assert_eq!(descriptor.validation_rules[0].condition, "var.count >= 0");
        assert_eq!(
            descriptor.validation_rules[0].message,
            "should be greater than or equal to 0"
        );
    }

    #[test]
    fn test_optional_pattern() {
        let descriptor = field("tag");

        assert!(!descriptor.required);
        assert_eq!(descriptor.validation_rules.len(), 1);
        assert_eq!(
            descriptor.validation_rules[0].condition,
            r#"var.tag == null ? true : length(regexall("^[a-z]+$", var.tag)) > 0"#
        );
        assert_eq!(
            descriptor.validation_rules[0].message,
            "does not match regex pattern ^[a-z]+$"
        );
    }

    #[test]
    fn test_array_without_default() {
        let descriptor = field("names");

        assert_eq!(descriptor.inferred_type.to_string(), "list(string)");
        assert!(!descriptor.required);
        assert!(descriptor.has_default);
        assert_eq!(descriptor.default_literal.as_deref(), Some("[]"));
        assert!(descriptor.validation_rules.is_empty());
    }

    #[test]
    fn test_all_of_enum_keeps_description() {
        let descriptor = field("status");

        assert_eq!(descriptor.description.as_deref(), Some("Current status"));
        assert_eq!(descriptor.inferred_type, TargetType::String);
        assert_eq!(descriptor.validation_rules.len(), 1);

        let rule = &descriptor.validation_rules[0];
        assert_eq!(
            rule.condition,
            r#"var.status == null ? true : contains(["UP", "DOWN"], var.status)"#
        );
        assert_eq!(rule.message, "should be one of: UP, DOWN");
    }

    #[test]
    fn test_number_type_maps_to_string() {
        let schema = Schema::new(json!({
            "properties": {"ratio": {"type": "number", "default": 2.5}}
        }))
        .unwrap();
        let raw = schema.properties()["ratio"].clone();
        let descriptor = build_field_descriptor(&schema, "ratio", &raw).unwrap();

        assert_eq!(descriptor.inferred_type, TargetType::String);
        assert_eq!(descriptor.default_literal.as_deref(), Some(r#""2.5""#));
    }
}

#[cfg(test)]
mod whole_schema {
    use super::*;

    #[test]
    fn test_declared_order_is_kept() {
        let schema = Schema::new(status_schema()).unwrap();
        let names: Vec<_> = build_descriptors(&schema)
            .unwrap()
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, vec!["count", "tag", "names", "status"]);
    }

    #[test]
    fn test_failing_field_aborts_schema() {
        let schema = Schema::new(json!({
            "properties": {
                "fine": {"type": "string"},
                "broken": {"$ref": "#/definitions/Missing"},
                "untyped": {"description": "no type"}
            }
        }))
        .unwrap();

        let err = build_descriptors(&schema).unwrap_err();
        assert!(matches!(err, Error::UnresolvableReference { .. }));
    }

    #[test]
    fn test_unknown_type_names_field() {
        let schema = Schema::new(json!({
            "properties": {"untyped": {"description": "no type"}}
        }))
        .unwrap();

        let err = build_descriptors(&schema).unwrap_err();
        assert_eq!(err.field(), Some("untyped"));
        assert!(err.to_string().contains("untyped"));
    }

    #[test]
    fn test_malformed_pattern_aborts() {
        let schema = Schema::new(json!({
            "properties": {"code": {"type": "string", "pattern": "[a-"}}
        }))
        .unwrap();

        let err = build_descriptors(&schema).unwrap_err();
        assert!(matches!(err, Error::MalformedPattern { .. }));
        assert!(err.to_string().contains("[a-"));
    }

    #[test]
    fn test_cyclic_schema_is_an_error() {
        let schema = Schema::new(json!({
            "properties": {"node": {"$ref": "#/definitions/Node"}},
            "definitions": {
                "Node": {"allOf": [{"$ref": "#/definitions/Node"}]}
            }
        }))
        .unwrap();

        let err = build_descriptors(&schema).unwrap_err();
        assert!(matches!(err, Error::CyclicReference { .. }));
    }
}

#[cfg(test)]
mod models_and_profiles {
    use super::*;

    fn exported() -> Value {
        json!({
            "definitions": {
                "Database": {
                    "title": "Database",
                    "properties": {
                        "port": {"type": "integer", "default": 5432, "maximum": 65535},
                        "engine": {"$ref": "#/definitions/Engine"},
                        "password": {"type": "string", "writeOnly": true}
                    },
                    "required": ["password"]
                },
                "Engine": {"enum": ["postgres", "mysql"], "default": "postgres"}
            }
        })
    }

    #[test]
    fn test_named_model_resolves_against_document() {
        let schema = Schema::with_model(exported(), "Database").unwrap();
        let fields = build_descriptors(&schema).unwrap();

        let engine = &fields[1];
        assert_eq!(engine.inferred_type, TargetType::String);
        assert_eq!(engine.default_literal.as_deref(), Some(r#""postgres""#));
        assert_eq!(engine.validation_rules.len(), 1);

        let password = &fields[2];
        assert!(password.sensitive);
        assert!(password.required);
        assert_eq!(password.default_literal, None);
    }

    #[test]
    fn test_documentation_profile_keeps_type_names() {
        let schema = Schema::with_model(exported(), "Database").unwrap();
        let fields = DescriptorBuilder::new(TypeProfile::Documentation)
            .build_all(&schema)
            .unwrap();

        assert_eq!(fields[0].inferred_type.to_string(), "integer");
        assert_eq!(fields[0].default_literal.as_deref(), Some("5432"));
    }

    #[test]
    fn test_load_from_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.yaml");
        std::fs::write(
            &path,
            "title: Cache\nproperties:\n  ttl:\n    type: integer\n    default: 60\n    exclusiveMinimum: 0\n",
        )
        .unwrap();

        let schema = Schema::from_file(&path, None).unwrap();
        let fields = build_descriptors(&schema).unwrap();

        assert_eq!(schema.title(), Some("Cache"));
        assert_eq!(fields[0].default_literal.as_deref(), Some("60"));
        assert_eq!(
            fields[0].validation_rules[0].condition,
            "var.ttl == null ? true : var.ttl > 0"
        );
    }
}
