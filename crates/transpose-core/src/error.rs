//! Error types for schema loading and field resolution
//!
//! Copyright (c) 2025 Schema Transpose Team
//! Licensed under the Apache-2.0 license

use std::path::PathBuf;
use thiserror::Error;

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Every fatal condition the engine can hit while converting a schema.
///
/// None of these are recoverable per field: a conversion either produces a
/// descriptor for every property or fails as a whole.
#[derive(Error, Debug)]
pub enum Error {
    /// A `$ref` segment could not be found in the schema document
    #[error("Failed to resolve reference '{reference}': segment '{segment}' not found")]
    UnresolvableReference { reference: String, segment: String },

    /// A `$ref` / `allOf` chain loops back on itself or nests too deeply
    #[error("Circular reference detected: {chain}")]
    CyclicReference { chain: String },

    /// No `type` keyword remained after enum defaulting
    #[error("Unknown type for field '{field}'")]
    UnknownFieldType { field: String },

    /// A `pattern` keyword that is not a valid regular expression
    #[error("Invalid regex pattern '{pattern}' on field '{field}': {source}")]
    MalformedPattern {
        field: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The document (or the selected model) is not shaped like an object schema
    #[error("Invalid schema: {message}")]
    InvalidSchema { message: String },

    /// File I/O errors
    #[error("Failed to read file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing errors
    #[error("Failed to parse JSON file '{path}': {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// YAML parsing errors
    #[error("Failed to parse YAML file '{path}': {source}")]
    YamlParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Unsupported file format
    #[error("Unsupported file format for '{path}'. Expected .yaml, .yml, or .json")]
    UnsupportedFormat { path: PathBuf },
}

impl Error {
    /// Create an unresolvable reference error
    pub fn unresolvable(reference: impl Into<String>, segment: impl Into<String>) -> Self {
        Self::UnresolvableReference {
            reference: reference.into(),
            segment: segment.into(),
        }
    }

    /// Create a circular reference error from the chain of references followed
    pub fn circular_reference(chain: &[String]) -> Self {
        Self::CyclicReference {
            chain: chain.join(" -> "),
        }
    }

    /// Create an unknown type error
    pub fn unknown_type(field: impl Into<String>) -> Self {
        Self::UnknownFieldType {
            field: field.into(),
        }
    }

    /// Create a malformed pattern error
    pub fn malformed_pattern(
        field: impl Into<String>,
        pattern: impl Into<String>,
        source: regex::Error,
    ) -> Self {
        Self::MalformedPattern {
            field: field.into(),
            pattern: pattern.into(),
            source,
        }
    }

    /// Create an invalid schema error
    pub fn invalid_schema(message: impl Into<String>) -> Self {
        Self::InvalidSchema {
            message: message.into(),
        }
    }

    /// Create an I/O error with path context
    pub fn io_error(path: PathBuf, source: std::io::Error) -> Self {
        Self::Io { path, source }
    }

    /// Create a JSON parsing error with path context
    pub fn json_parse_error(path: PathBuf, source: serde_json::Error) -> Self {
        Self::JsonParse { path, source }
    }

    /// Create a YAML parsing error with path context
    pub fn yaml_parse_error(path: PathBuf, source: serde_yaml::Error) -> Self {
        Self::YamlParse { path, source }
    }

    /// Create an unsupported format error
    pub fn unsupported_format(path: PathBuf) -> Self {
        Self::UnsupportedFormat { path }
    }

    /// Get the file path associated with this error, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } => Some(path),
            Self::JsonParse { path, .. } => Some(path),
            Self::YamlParse { path, .. } => Some(path),
            Self::UnsupportedFormat { path } => Some(path),
            _ => None,
        }
    }

    /// The field this error is about, for errors raised while resolving a field
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::UnknownFieldType { field } => Some(field),
            Self::MalformedPattern { field, .. } => Some(field),
            _ => None,
        }
    }
}
