//! Inspect command handler

use crate::cli::InspectArgs;
use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use transpose_core::{DescriptorBuilder, Schema};

/// Handle the inspect command
pub fn handle_inspect(args: InspectArgs, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::with_details("inspect", &args.schema.display().to_string());

    let schema = Schema::from_file(&args.schema, args.model.as_deref())?;
    let descriptors = DescriptorBuilder::new(args.profile.into()).build_all(&schema)?;

    let heading = schema
        .title()
        .map(str::to_string)
        .unwrap_or_else(|| args.schema.display().to_string());
    output.section(&format!("{} ({} fields)", heading, descriptors.len()))?;
    output.descriptors(&descriptors)
}
