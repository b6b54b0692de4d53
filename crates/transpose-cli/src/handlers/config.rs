//! Configuration command handlers

use crate::cli::{ConfigAction, ConfigArgs, ConfigInitArgs, ConfigShowArgs, OutputFormat};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use std::path::Path;

/// Handle the config command
pub fn handle_config(args: ConfigArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    match args.action {
        ConfigAction::Init(init_args) => handle_config_init(init_args, output),
        ConfigAction::Show(show_args) => handle_config_show(show_args, config, output),
    }
}

/// Handle config init subcommand
fn handle_config_init(args: ConfigInitArgs, output: &mut OutputWriter) -> Result<()> {
    let path = if args.user {
        Config::user_config_path()
            .ok_or_else(|| Error::config("Unable to determine user config directory"))?
    } else {
        Config::project_config_path()
    };

    write_default_config(&path, args.force)?;

    output.success(&format!("✓ Created config at {}", path.display()))?;
    output.info("Edit it to customize settings for your environment.")?;
    Ok(())
}

/// Write the default configuration, refusing to replace an existing file
/// unless forced
fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(Error::AlreadyExists {
            path: path.to_path_buf(),
        });
    }
    Config::default().save(path)
}

/// Handle config show subcommand
fn handle_config_show(
    args: ConfigShowArgs,
    config: &Config,
    output: &mut OutputWriter,
) -> Result<()> {
    // Machine-readable output formats take precedence over --format
    if output.format() != OutputFormat::Human {
        return output.data(config);
    }

    let content = config.to_string_as(args.format)?;
    output.writeln(content.trim_end())
}
