//! Error types for rendering
//!
//! Copyright (c) 2025 Schema Transpose Team
//! Licensed under the Apache-2.0 license

use thiserror::Error;

/// Result type for render operations
pub type Result<T> = std::result::Result<T, RenderError>;

/// Render error types
#[derive(Error, Debug)]
pub enum RenderError {
    /// Building descriptors failed
    #[error(transparent)]
    Core(#[from] transpose_core::Error),

    /// An output format name that is not one of the known formats
    #[error("Unknown output format '{name}'. Expected one of: hcl, tfvars, module, markdown")]
    UnknownFormat { name: String },
}

impl RenderError {
    /// Create an unknown format error
    pub fn unknown_format(name: impl Into<String>) -> Self {
        Self::UnknownFormat { name: name.into() }
    }
}
