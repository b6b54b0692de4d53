//! Field descriptors
//!
//! A [`FieldDescriptor`] is everything a renderer needs to know about one
//! property: its resolved type, default literal and validation rules.
//!
//! Copyright (c) 2025 Schema Transpose Team
//! Licensed under the Apache-2.0 license

use crate::defaults::DefaultSerializer;
use crate::error::Result;
use crate::literal::{is_truthy, plain_text};
use crate::resolver::ReferenceResolver;
use crate::rules::{Rule, RuleSynthesizer};
use crate::schema::Schema;
use crate::types::{TargetType, TypeMapper, TypeProfile};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Placeholder logged instead of a sensitive field's default
const REDACTED: &str = "<redacted>";

/// Normalized, renderer-agnostic record for one schema field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub inferred_type: TargetType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub required: bool,
    pub has_default: bool,
    /// Present exactly when `has_default` is set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_literal: Option<String>,
    pub sensitive: bool,
    pub validation_rules: Vec<Rule>,
}

impl FieldDescriptor {
    /// The default literal, masked for sensitive fields
    pub fn display_default(&self) -> Option<&str> {
        match (&self.default_literal, self.sensitive) {
            (Some(_), true) => Some(REDACTED),
            (literal, false) => literal.as_deref(),
            (None, true) => None,
        }
    }
}

/// Builds descriptors for the fields of a schema
#[derive(Debug, Clone, Copy, Default)]
pub struct DescriptorBuilder {
    mapper: TypeMapper,
    serializer: DefaultSerializer,
}

impl DescriptorBuilder {
    /// Create a builder mapping types with the given profile
    pub fn new(profile: TypeProfile) -> Self {
        Self {
            mapper: TypeMapper::new(profile),
            serializer: DefaultSerializer::new(),
        }
    }

    /// Resolve one field definition and assemble its descriptor
    pub fn build(&self, schema: &Schema, name: &str, raw: &Value) -> Result<FieldDescriptor> {
        let resolved = ReferenceResolver::new(schema.document()).resolve(raw)?;
        let required = schema.is_required(name);

        let mapping = self.mapper.map(name, &resolved)?;
        let validation_rules =
            RuleSynthesizer::new(name, !required).synthesize(&resolved, &mapping.constraints)?;

        let has_default = resolved.contains_key("default") || !required;
        let default_literal = has_default
            .then(|| self.serializer.serialize(&mapping.target, resolved.get("default")));

        let descriptor = FieldDescriptor {
            name: name.to_string(),
            inferred_type: mapping.target,
            description: resolved
                .get("description")
                .filter(|d| is_truthy(d))
                .map(plain_text),
            required,
            has_default,
            default_literal,
            sensitive: resolved.get("writeOnly").map(is_truthy).unwrap_or(false),
            validation_rules,
        };

        debug!(
            field = %descriptor.name,
            inferred_type = %descriptor.inferred_type,
            required = descriptor.required,
            default = descriptor.display_default().unwrap_or("-"),
            rules = descriptor.validation_rules.len(),
            "Built field descriptor"
        );

        Ok(descriptor)
    }

    /// Descriptors for every property in declared order; the first failing
    /// field aborts the whole schema
    pub fn build_all(&self, schema: &Schema) -> Result<Vec<FieldDescriptor>> {
        schema
            .properties()
            .iter()
            .map(|(name, raw)| self.build(schema, name, raw))
            .collect()
    }
}

/// Build one field's descriptor with Terraform types
pub fn build_field_descriptor(
    schema: &Schema,
    field_name: &str,
    raw_field_definition: &Value,
) -> Result<FieldDescriptor> {
    DescriptorBuilder::default().build(schema, field_name, raw_field_definition)
}

/// Build descriptors for all of a schema's properties with Terraform types
pub fn build_descriptors(schema: &Schema) -> Result<Vec<FieldDescriptor>> {
    DescriptorBuilder::default().build_all(schema)
}
