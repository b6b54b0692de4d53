//! Schema document parsing for YAML and JSON formats
//!
//! Copyright (c) 2025 Schema Transpose Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use serde_json::Value;
use std::path::Path;

/// Supported file formats for schema documents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// YAML format (.yaml, .yml)
    Yaml,
    /// JSON format (.json)
    Json,
}

impl Format {
    /// Detect format from file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            Some("json") => Ok(Format::Json),
            _ => Err(Error::unsupported_format(path.to_path_buf())),
        }
    }

    /// Get file extensions for this format
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Format::Yaml => &["yaml", "yml"],
            Format::Json => &["json"],
        }
    }
}

/// Parser turning schema files into `serde_json::Value` documents
#[derive(Debug, Default)]
pub struct SchemaParser;

impl SchemaParser {
    /// Create a new schema parser
    pub fn new() -> Self {
        Self
    }

    /// Parse a schema file, detecting format from extension
    pub fn parse_file(&self, path: &Path) -> Result<Value> {
        let format = Format::from_path(path)?;
        let content =
            std::fs::read_to_string(path).map_err(|e| Error::io_error(path.to_path_buf(), e))?;

        self.parse_content(&content, format, path)
    }

    /// Parse schema content with explicit format
    pub fn parse_content(&self, content: &str, format: Format, path: &Path) -> Result<Value> {
        match format {
            Format::Yaml => self.parse_yaml(content, path),
            Format::Json => self.parse_json(content, path),
        }
    }

    /// Parse YAML content
    pub fn parse_yaml(&self, content: &str, path: &Path) -> Result<Value> {
        // Parse as YAML first so YAML-specific errors keep their position info
        let yaml_value: serde_yaml::Value = serde_yaml::from_str(content)
            .map_err(|e| Error::yaml_parse_error(path.to_path_buf(), e))?;

        serde_json::to_value(yaml_value).map_err(|e| Error::json_parse_error(path.to_path_buf(), e))
    }

    /// Parse JSON content
    pub fn parse_json(&self, content: &str, path: &Path) -> Result<Value> {
        serde_json::from_str(content).map_err(|e| Error::json_parse_error(path.to_path_buf(), e))
    }
}
