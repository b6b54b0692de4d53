//! Terraform text templates
//!
//! Copyright (c) 2025 Schema Transpose Team
//! Licensed under the Apache-2.0 license

use crate::converter::ModuleOptions;
use transpose_core::literal::{escape, quote};
use transpose_core::FieldDescriptor;

/// Text layouts for the Terraform output formats
pub struct Template;

impl Template {
    /// A `variable` block with one `validation` block per rule
    pub fn variable(field: &FieldDescriptor) -> String {
        let mut block = format!("variable \"{}\" {{\n", field.name);
        block.push_str(&format!("  type        = {}\n", field.inferred_type));

        if let Some(ref description) = field.description {
            block.push_str(&format!("  description = {}\n", quote(description)));
        }

        if let Some(ref default) = field.default_literal {
            block.push_str(&format!("  default     = {}\n", default));
        }

        if field.sensitive {
            block.push_str("  sensitive   = true\n");
        }

        for rule in &field.validation_rules {
            block.push_str(&format!("\n  # {}\n", rule.provenance));
            block.push_str("  validation {\n");
            block.push_str(&format!("    condition     = {}\n", rule.condition));
            block.push_str(&format!(
                "    error_message = \"Field {}\"\n",
                escape(&rule.message)
            ));
            block.push_str("  }\n");
        }

        block.push('}');
        block
    }

    /// A `.tfvars` assignment; required fields without a default are left
    /// commented out for the user to fill in
    pub fn tfvars(field: &FieldDescriptor) -> String {
        match field.default_literal {
            Some(ref default) => format!("{} = {}", field.name, default),
            None => format!("# {} =", field.name),
        }
    }

    /// A module argument passing the variable through
    pub fn module_parameter(field: &FieldDescriptor) -> String {
        format!("  {} = var.{}", field.name, field.name)
    }

    /// Enclose rendered module arguments in a `module` block
    pub fn module_wrapper(module: &ModuleOptions, parameters: &str) -> String {
        let mut block = format!("module \"{}\" {{\n", module.name);
        block.push_str(&format!("  source = {}\n", quote(&module.source)));

        let parameters = parameters.trim_end();
        if !parameters.is_empty() {
            block.push('\n');
            block.push_str(parameters);
            block.push('\n');
        }

        block.push('}');
        block
    }
}
