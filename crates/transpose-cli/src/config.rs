//! Configuration management for the CLI
//!
//! This module handles loading configuration from:
//! - Default values
//! - Configuration files (TOML/YAML/JSON)
//! - Command-line arguments (applied by the handlers)

use crate::cli::ConfigFormat;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use transpose_render::{ModuleOptions, RenderFormat, RenderOptions};

/// Base name of configuration files
const CONFIG_NAME: &str = "schema-transpose";

/// Extensions tried for each configuration location, in order
const CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output settings
    pub output: OutputConfig,

    /// Module block settings
    pub module: ModuleOptions,

    /// Markdown table settings
    pub markdown: MarkdownConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default render format for `convert`
    pub format: RenderFormat,

    /// Use colored output by default
    pub color: bool,
}

/// Markdown configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    /// Field names left out of tables
    pub skip_fields: Vec<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level used when no `-v` flag is given (trace, debug, info, warn, error)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    /// Log format (compact, full, json)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: RenderFormat::Hcl,
            color: true,
        }
    }
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            skip_fields: vec!["type".to_string()],
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path)?;

        let config = match extension(path).as_deref() {
            Some("toml") => toml::from_str(&content)?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
            Some("json") => serde_json::from_str(&content)?,
            _ => {
                return Err(Error::config(format!(
                    "unsupported config file '{}': expected .toml, .yaml, .yml or .json",
                    path.display()
                )))
            }
        };

        Ok(config)
    }

    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        for path in Self::default_config_paths() {
            if path.exists() {
                match Self::from_file(&path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        // Return default config if no config file found
        Ok(Self::default())
    }

    /// Load configuration from a specific file or default locations
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        if let Some(path) = file {
            Self::from_file(path)
        } else {
            Self::load()
        }
    }

    /// Project configuration file in the working directory
    pub fn project_config_path() -> PathBuf {
        PathBuf::from(format!(".{}.toml", CONFIG_NAME))
    }

    /// User configuration file under the platform config directory
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_NAME).join("config.toml"))
    }

    /// Get default configuration file paths to check
    fn default_config_paths() -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = CONFIG_EXTENSIONS
            .iter()
            .map(|ext| PathBuf::from(format!(".{}.{}", CONFIG_NAME, ext)))
            .collect();

        if let Some(config_dir) = dirs::config_dir() {
            let dir = config_dir.join(CONFIG_NAME);
            paths.extend(CONFIG_EXTENSIONS.iter().map(|ext| dir.join(format!("config.{}", ext))));
        }

        paths
    }

    /// Render options for a format, taking module and markdown settings from
    /// this configuration
    pub fn render_options(&self, format: RenderFormat) -> RenderOptions {
        RenderOptions {
            format,
            module: self.module.clone(),
            skip_fields: self.markdown.skip_fields.clone(),
        }
    }

    /// Serialize the configuration in the given format
    pub fn to_string_as(&self, format: ConfigFormat) -> Result<String> {
        let content = match format {
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
            ConfigFormat::Yaml => serde_yaml::to_string(self)?,
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
        };
        Ok(content)
    }

    /// Save configuration to a file, choosing the format by extension
    pub fn save(&self, path: &Path) -> Result<()> {
        let format = match extension(path).as_deref() {
            Some("yaml") | Some("yml") => ConfigFormat::Yaml,
            Some("json") => ConfigFormat::Json,
            _ => ConfigFormat::Toml,
        };
        let content = self.to_string_as(format)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}
