//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API,
//! providing a type-safe and well-documented command interface.

use clap::{Parser, Subcommand, ValueEnum};
use is_terminal::IsTerminal;
use std::path::PathBuf;
use transpose_core::TypeProfile;
use transpose_render::RenderFormat;

/// schema-transpose - generate Terraform from JSON Schema models
///
/// Converts the properties of a JSON or YAML schema into Terraform variable
/// declarations, tfvars files, module blocks or markdown documentation.
#[derive(Parser, Debug)]
#[command(
    name = "schema-transpose",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "TRANSPOSE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for results
    #[arg(short, long, value_enum, global = true, default_value = "human")]
    pub output: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a schema into Terraform or markdown
    Convert(ConvertArgs),

    /// Show the resolved field descriptors of a schema
    Inspect(InspectArgs),

    /// Manage configuration files and settings
    Config(ConfigArgs),

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Arguments for the convert command
#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// Path to the schema file (JSON or YAML)
    #[arg(value_name = "SCHEMA")]
    pub schema: PathBuf,

    /// Named model under definitions, $defs or components/schemas
    #[arg(short, long)]
    pub model: Option<String>,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<ConvertFormat>,

    /// Name of the generated module block
    #[arg(long)]
    pub module_name: Option<String>,

    /// Source of the generated module block
    #[arg(long)]
    pub module_source: Option<String>,

    /// Output file path (stdout if not specified)
    #[arg(long = "save-to")]
    pub output_file: Option<PathBuf>,
}

/// Arguments for the inspect command
#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Path to the schema file (JSON or YAML)
    #[arg(value_name = "SCHEMA")]
    pub schema: PathBuf,

    /// Named model under definitions, $defs or components/schemas
    #[arg(short, long)]
    pub model: Option<String>,

    /// Type vocabulary to map field types into
    #[arg(short, long, value_enum, default_value = "terraform")]
    pub profile: Profile,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration management actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write a default configuration file
    Init(ConfigInitArgs),

    /// Show current configuration values
    Show(ConfigShowArgs),
}

/// Arguments for config init
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Write the user config instead of .schema-transpose.toml in the working directory
    #[arg(long)]
    pub user: bool,

    /// Force overwrite existing config files
    #[arg(long)]
    pub force: bool,
}

/// Arguments for config show
#[derive(Parser, Debug)]
pub struct ConfigShowArgs {
    /// Show configuration in specified format
    #[arg(short, long, value_enum, default_value = "toml")]
    pub format: ConfigFormat,
}

/// Configuration file formats
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    /// TOML format
    Toml,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Arguments for generating shell completions
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable formatted output
    Human,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
    /// Pretty-printed JSON output
    JsonPretty,
}

/// Generated text formats
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ConvertFormat {
    /// Terraform variable blocks
    Hcl,
    /// Terraform tfvars assignments
    Tfvars,
    /// Terraform module block
    Module,
    /// Markdown documentation table
    Markdown,
}

/// Type mapping profiles
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Profile {
    /// Terraform types
    Terraform,
    /// Schema type names as shown in documentation
    Documentation,
}

/// Supported shells for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}

impl From<ConvertFormat> for RenderFormat {
    fn from(format: ConvertFormat) -> Self {
        match format {
            ConvertFormat::Hcl => RenderFormat::Hcl,
            ConvertFormat::Tfvars => RenderFormat::Tfvars,
            ConvertFormat::Module => RenderFormat::Module,
            ConvertFormat::Markdown => RenderFormat::Markdown,
        }
    }
}

impl From<Profile> for TypeProfile {
    fn from(profile: Profile) -> Self {
        match profile {
            Profile::Terraform => TypeProfile::Terraform,
            Profile::Documentation => TypeProfile::Documentation,
        }
    }
}

impl Shell {
    /// Convert to clap_complete shell type
    pub fn to_clap_shell(self) -> clap_complete::Shell {
        match self {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}
