//! Transpose Render - text output for schema field descriptors
//!
//! Renders the descriptors built by `transpose-core` as:
//! - **hcl**: Terraform `variable` blocks with `validation` rules
//! - **tfvars**: default values ready to edit
//! - **module**: a `module` block wiring every variable through
//! - **markdown**: a documentation table
//!
//! ## Quick Start
//!
//! ```rust
//! use transpose_core::Schema;
//! use transpose_render::{convert, RenderFormat};
//! use serde_json::json;
//!
//! let schema = Schema::new(json!({
//!     "properties": {"region": {"type": "string", "default": "eu-west-1"}}
//! })).unwrap();
//!
//! let tfvars = convert(&schema, RenderFormat::Tfvars).unwrap();
//! assert_eq!(tfvars, r#"region = "eu-west-1""#);
//! ```
//!
//! Copyright (c) 2025 Schema Transpose Team
//! Licensed under the Apache-2.0 license

pub mod converter;
pub mod error;
pub mod markdown;
pub mod templates;

pub use converter::{convert, Converter, ModuleOptions, RenderFormat, RenderOptions};
pub use error::{RenderError, Result};
pub use markdown::{display_type, MarkdownTable};
pub use templates::Template;
