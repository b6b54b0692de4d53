//! Unit tests for rendering whole schemas
//!
//! These tests convert a small service schema into every output format and
//! check the exact text produced.

use serde_json::{json, Value};
use transpose_core::Schema;
use transpose_render::{convert, Converter, ModuleOptions, RenderFormat, RenderOptions};

fn service_schema() -> Value {
    json!({
        "title": "Service",
        "properties": {
            "name": {"type": "string", "description": "Service name"},
            "replicas": {"type": "integer", "default": 2, "minimum": 1},
            "tags": {"type": "array", "items": {"type": "string"}, "uniqueItems": true},
            "status": {
                "allOf": [{"$ref": "#/definitions/Status"}],
                "description": "Current status"
            },
            "password": {"type": "string", "writeOnly": true}
        },
        "required": ["name"],
        "definitions": {
            "Status": {"type": "string", "enum": ["UP", "DOWN"], "description": "generic"}
        }
    })
}

fn schema() -> Schema {
    Schema::new(service_schema()).unwrap()
}

#[cfg(test)]
mod hcl {
    use super::*;

    #[test]
    fn test_variable_blocks() {
        let output = convert(&schema(), RenderFormat::Hcl).unwrap();

        let expected_start = r#"variable "name" {
  type        = string
  description = "Service name"
}

variable "replicas" {
  type        = number
  default     = 2

  # Automatically Generated from Rule `minimum` with allow_none set to true
  validation {
    condition     = var.replicas == null ? true : var.replicas >= 1
    error_message = "Field should be greater than or equal to 1"
  }
}"#;
        assert!(output.starts_with(expected_start), "unexpected output:\n{output}");
    }

    #[test]
    fn test_enum_and_sensitive_fields() {
        let output = convert(&schema(), RenderFormat::Hcl).unwrap();

        assert!(output.contains(r#"description = "Current status""#));
        assert!(output.contains(
            r#"condition     = var.status == null ? true : contains(["UP", "DOWN"], var.status)"#
        ));
        assert!(output.contains(r#"error_message = "Field should be one of: UP, DOWN""#));
        assert!(output.contains("  type        = list(string)\n  default     = []\n"));
        assert!(output.contains("  sensitive   = true\n"));
        assert!(output.ends_with('}'));
        assert_eq!(output.matches("variable \"").count(), 5);
    }
}

#[cfg(test)]
mod tfvars_and_module {
    use super::*;

    #[test]
    fn test_tfvars() {
        let output = convert(&schema(), RenderFormat::Tfvars).unwrap();
        assert_eq!(
            output,
            "# name =\nreplicas = 2\ntags = []\nstatus = null\npassword = null"
        );
    }

    #[test]
    fn test_module_block() {
        let options = RenderOptions {
            format: RenderFormat::Module,
            module: ModuleOptions {
                name: "service".to_string(),
                source: "git::https://example.com/modules/service.git".to_string(),
            },
            ..RenderOptions::default()
        };

        let output = Converter::new(options).convert(&schema()).unwrap();
        assert_eq!(
            output,
            r#"module "service" {
  source = "git::https://example.com/modules/service.git"

  name = var.name
  replicas = var.replicas
  tags = var.tags
  status = var.status
  password = var.password
}"#
        );
    }
}

#[cfg(test)]
mod markdown {
    use super::*;

    #[test]
    fn test_documentation_table() {
        let schema = Schema::new(json!({
            "properties": {
                "type": {"type": "string", "default": "service"},
                "port": {"type": "integer", "default": 8080},
                "debug": {"type": "boolean", "default": false},
                "hosts": {"type": "array", "items": {"type": "string"}, "description": "Host names"}
            },
            "required": ["hosts"]
        }))
        .unwrap();

        let output = convert(&schema, RenderFormat::Markdown).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("| Name "));
        assert!(lines[2].starts_with("| `hosts`"));
        assert!(lines[2].contains("array(string)"));
        assert!(lines[2].contains("Host names"));
        assert!(lines[2].trim_end().ends_with("| Yes      |"));
        assert!(lines[3].starts_with("| `debug`"));
        assert!(lines[3].contains("boolean"));
        assert!(lines[3].contains("false"));
        assert!(lines[4].contains("integer"));
        assert!(lines[4].contains("8080"));
        assert!(!output.contains("`type`"));
    }

    #[test]
    fn test_empty_table() {
        let schema = Schema::new(json!({"properties": {"type": {"type": "string"}}})).unwrap();
        assert_eq!(convert(&schema, RenderFormat::Markdown).unwrap(), "");
    }
}

#[cfg(test)]
mod failures {
    use super::*;
    use transpose_render::RenderError;

    #[test]
    fn test_core_errors_propagate() {
        let schema = Schema::new(json!({
            "properties": {"broken": {"$ref": "#/definitions/Missing"}}
        }))
        .unwrap();

        let err = convert(&schema, RenderFormat::Hcl).unwrap_err();
        assert!(matches!(
            err,
            RenderError::Core(transpose_core::Error::UnresolvableReference { .. })
        ));
    }

    #[test]
    fn test_from_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.yml");
        std::fs::write(&path, "properties:\n  debug:\n    type: boolean\n    default: true\n")
            .unwrap();

        let schema = Schema::from_file(&path, None).unwrap();
        assert_eq!(convert(&schema, RenderFormat::Tfvars).unwrap(), "debug = true");
    }
}
