//! Error types and handling for the CLI
//!
//! This module provides error types and utilities for handling
//! various failure modes in the CLI application.

use std::io;
use std::path::PathBuf;
use transpose_render::RenderError;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error from the conversion engine
    #[error("Core error: {0}")]
    Core(#[from] transpose_core::Error),

    /// File not found
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Refusing to overwrite an existing file
    #[error("File already exists: {} (use --force to overwrite)", path.display())]
    AlreadyExists { path: PathBuf },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid argument combination
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl From<RenderError> for Error {
    fn from(error: RenderError) -> Self {
        match error {
            RenderError::Core(core) => Self::Core(core),
            other => Self::InvalidArgs(other.to_string()),
        }
    }
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => 1,
            Self::Core(_) => 2,
            Self::FileNotFound { .. } => 3,
            Self::AlreadyExists { .. } => 4,
            Self::Config(_) => 5,
            Self::InvalidArgs(_) => 6,
            Self::Json(_) => 12,
            Self::Yaml(_) => 13,
            Self::Toml(_) | Self::TomlSerialize(_) => 14,
        }
    }

    /// Check if this error should display usage help
    pub fn should_show_help(&self) -> bool {
        matches!(self, Self::InvalidArgs(_))
    }
}

/// Format an error for display to the user
pub fn format_error(error: &Error, use_color: bool) -> String {
    // Field-level failures already name the field and schema location
    let message = match error {
        Error::Core(core_error) => core_error.to_string(),
        other => other.to_string(),
    };

    if use_color {
        use colored::Colorize;
        format!("{} {}", "Error:".red().bold(), message)
    } else {
        format!("Error: {}", message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let core = Error::from(transpose_core::Error::unknown_type("name"));
        assert_eq!(core.exit_code(), 2);
        assert_eq!(
            Error::FileNotFound {
                path: PathBuf::from("missing.json")
            }
            .exit_code(),
            3
        );
        assert_eq!(Error::config("bad").exit_code(), 5);
    }

    #[test]
    fn test_render_errors_unwrap_core() {
        let render = RenderError::Core(transpose_core::Error::unknown_type("name"));
        assert!(matches!(Error::from(render), Error::Core(_)));

        let render = RenderError::unknown_format("pdf");
        let error = Error::from(render);
        assert!(error.should_show_help());
    }

    #[test]
    fn test_format_error_plain() {
        let error = Error::from(transpose_core::Error::unknown_type("name"));
        assert_eq!(
            format_error(&error, false),
            "Error: Unknown type for field 'name'"
        );
    }
}
