//! Convert command handler

use crate::cli::ConvertArgs;
use crate::config::Config;
use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use std::fs;
use tracing::info;
use transpose_core::Schema;
use transpose_render::{Converter, RenderFormat};

/// Handle the convert command
pub fn handle_convert(args: ConvertArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let timer = Timer::with_details("convert", &args.schema.display().to_string());

    let format = args
        .format
        .map(RenderFormat::from)
        .unwrap_or(config.output.format);

    let mut options = config.render_options(format);
    if let Some(name) = args.module_name {
        options.module.name = name;
    }
    if let Some(source) = args.module_source {
        options.module.source = source;
    }

    output.info(&format!(
        "Converting {} to {}",
        args.schema.display(),
        format
    ))?;

    let schema = Schema::from_file(&args.schema, args.model.as_deref())?;
    if schema.properties().is_empty() {
        output.warning("Schema declares no properties; output will be empty")?;
    }
    let rendered = Converter::new(options).convert(&schema)?;

    match args.output_file {
        Some(path) => {
            fs::write(&path, format!("{}\n", rendered))?;
            info!(
                path = %path.display(),
                bytes = rendered.len(),
                elapsed_ms = timer.elapsed().as_millis() as u64,
                "Wrote generated output"
            );
            output.success(&format!("✓ Output saved to {}", path.display()))?;
        }
        None => output.writeln(&rendered)?,
    }

    Ok(())
}
