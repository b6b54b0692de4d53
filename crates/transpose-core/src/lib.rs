//! Transpose Core - schema resolution and Terraform field mapping
//!
//! This crate turns the properties of a JSON-Schema-shaped model into
//! [`FieldDescriptor`]s, the data every renderer works from:
//! - **References**: same-document `$ref` pointers are followed and `allOf`
//!   parents merged into one flat definition
//! - **Types**: schema types map onto `string`, `number`, `bool`, `list(T)`
//!   and `map(T)`
//! - **Defaults**: schema defaults become HCL literals
//! - **Validation**: constraint keywords (`minimum`, `pattern`, `enum`, ...)
//!   become `validation` conditions with null handling for optional fields
//!
//! ## Quick Start
//!
//! ```rust
//! use transpose_core::{build_descriptors, Schema};
//! use serde_json::json;
//!
//! let schema = Schema::new(json!({
//!     "properties": {
//!         "count": {"type": "integer", "minimum": 0}
//!     },
//!     "required": ["count"]
//! })).unwrap();
//!
//! let fields = build_descriptors(&schema).unwrap();
//! assert_eq!(fields[0].inferred_type.to_string(), "number");
//! assert_eq!(fields[0].validation_rules[0].condition, "var.count >= 0");
//! ```
//!
//! Any unresolvable reference, missing type or invalid pattern fails the
//! whole schema; there is no partial output.
//!
//! Copyright (c) 2025 Schema Transpose Team
//! Licensed under the Apache-2.0 license

pub mod defaults;
pub mod descriptor;
pub mod error;
pub mod literal;
pub mod parser;
pub mod resolver;
pub mod rules;
pub mod schema;
pub mod types;

// Re-export commonly used types for convenience
pub use defaults::DefaultSerializer;
pub use descriptor::{build_descriptors, build_field_descriptor, DescriptorBuilder, FieldDescriptor};
pub use error::{Error, Result};
pub use parser::{Format, SchemaParser};
pub use resolver::{ReferenceResolver, ResolverContext, DEFAULT_MAX_DEPTH};
pub use rules::{Keyword, Rule, RuleSynthesizer};
pub use schema::Schema;
pub use types::{TargetType, TypeConstraint, TypeMapper, TypeMapping, TypeProfile};
