//! Schema to text conversion
//!
//! Copyright (c) 2025 Schema Transpose Team
//! Licensed under the Apache-2.0 license

use crate::error::{RenderError, Result};
use crate::markdown::MarkdownTable;
use crate::templates::Template;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::info;
use transpose_core::{DescriptorBuilder, FieldDescriptor, Schema, TypeProfile};

/// Output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderFormat {
    /// Terraform `variable` blocks
    #[default]
    Hcl,
    /// A `.tfvars` file of defaults
    Tfvars,
    /// A `module` block passing every variable through
    Module,
    /// A markdown table for documentation
    Markdown,
}

impl RenderFormat {
    pub const ALL: [RenderFormat; 4] = [
        RenderFormat::Hcl,
        RenderFormat::Tfvars,
        RenderFormat::Module,
        RenderFormat::Markdown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RenderFormat::Hcl => "hcl",
            RenderFormat::Tfvars => "tfvars",
            RenderFormat::Module => "module",
            RenderFormat::Markdown => "markdown",
        }
    }

    /// Separator placed after each rendered field
    pub fn delimiter(&self) -> &'static str {
        match self {
            RenderFormat::Hcl => "\n\n",
            _ => "\n",
        }
    }

    /// Type vocabulary the format is written in
    pub fn profile(&self) -> TypeProfile {
        match self {
            RenderFormat::Markdown => TypeProfile::Documentation,
            _ => TypeProfile::Terraform,
        }
    }
}

impl fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|format| format.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| RenderError::unknown_format(s))
    }
}

/// Name and source of the generated `module` block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleOptions {
    pub name: String,
    pub source: String,
}

impl Default for ModuleOptions {
    fn default() -> Self {
        Self {
            name: "this".to_string(),
            source: ".".to_string(),
        }
    }
}

/// Renderer configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub format: RenderFormat,
    pub module: ModuleOptions,
    /// Fields left out of markdown tables
    pub skip_fields: Vec<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format: RenderFormat::default(),
            module: ModuleOptions::default(),
            skip_fields: vec!["type".to_string()],
        }
    }
}

impl RenderOptions {
    /// Default options for a format
    pub fn for_format(format: RenderFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }
}

/// Converts schemas into one of the output formats
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: RenderOptions,
}

impl Converter {
    /// Create a converter with the given options
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Get the converter options
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Build descriptors for every field and render them
    pub fn convert(&self, schema: &Schema) -> Result<String> {
        let fields = DescriptorBuilder::new(self.options.format.profile()).build_all(schema)?;

        info!(
            format = %self.options.format,
            model = schema.title().unwrap_or("-"),
            fields = fields.len(),
            "Rendering schema"
        );

        Ok(self.render(&fields))
    }

    /// Render already built descriptors, trimmed of surrounding whitespace
    pub fn render(&self, fields: &[FieldDescriptor]) -> String {
        let format = self.options.format;

        let output = match format {
            RenderFormat::Markdown => {
                MarkdownTable::new(self.options.skip_fields.clone()).render(fields)
            }
            RenderFormat::Hcl | RenderFormat::Tfvars | RenderFormat::Module => {
                let mut output = String::new();
                for field in fields {
                    output.push_str(&self.fragment(field));
                    output.push_str(format.delimiter());
                }

                if format == RenderFormat::Module {
                    output = Template::module_wrapper(&self.options.module, &output);
                }
                output
            }
        };

        output.trim().to_string()
    }

    fn fragment(&self, field: &FieldDescriptor) -> String {
        match self.options.format {
            RenderFormat::Hcl => Template::variable(field),
            RenderFormat::Tfvars => Template::tfvars(field),
            RenderFormat::Module => Template::module_parameter(field),
            RenderFormat::Markdown => String::new(),
        }
    }
}

/// Convert a schema with default options for `format`
pub fn convert(schema: &Schema, format: RenderFormat) -> Result<String> {
    Converter::new(RenderOptions::for_format(format)).convert(schema)
}
