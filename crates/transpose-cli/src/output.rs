//! Output formatting and writing utilities
//!
//! This module provides utilities for formatting and writing output
//! in various formats (JSON, YAML, human-readable), with a summary table
//! for field descriptors.

use crate::cli::OutputFormat;
use crate::error::Result;
use colored::Colorize;
use serde::Serialize;
use std::io::{self, Write};
use tracing::{debug, trace};
use transpose_core::FieldDescriptor;

/// Trait for formatting output with specialized support for descriptors
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;

    /// Format field descriptors; human output is a summary table
    fn format_descriptors(&self, fields: &[FieldDescriptor]) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            OutputFormat::Human => {
                // For human format, use pretty JSON as fallback
                Ok(serde_json::to_string_pretty(value)?)
            }
        }
    }

    fn format_descriptors(&self, fields: &[FieldDescriptor]) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_descriptors_human(fields)),
            other => other.format(&redacted(fields)),
        }
    }
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool) -> Self {
        Self::with_writer(format, use_color, quiet, Box::new(io::stdout()))
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            quiet,
            writer,
        }
    }

    /// Get the output format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write raw output
    pub fn write(&mut self, content: &str) -> Result<()> {
        write!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write an info message
    pub fn info(&mut self, message: &str) -> Result<()> {
        debug!("Output info: {}", message);

        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("{} {}", "ℹ".blue(), message))
        } else {
            self.writeln(&format!("INFO: {}", message))
        }
    }

    /// Write a success message
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.green().to_string())
        } else {
            self.writeln(message)
        }
    }

    /// Write a warning message
    pub fn warning(&mut self, message: &str) -> Result<()> {
        if self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.yellow().to_string())
        } else {
            self.writeln(&format!("WARNING: {}", message))
        }
    }

    /// Write a section header
    pub fn section(&mut self, title: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        self.writeln("")?;
        if self.use_color {
            self.writeln(&format!("═══ {} ═══", title).bright_blue().to_string())
        } else {
            self.writeln(&format!("=== {} ===", title))
        }
    }

    /// Write data in the configured format
    pub fn data<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let formatted = self.format.format(value)?;
        trace!(bytes = formatted.len(), "Outputting data");

        if self.format == OutputFormat::Human {
            self.writeln(&formatted)
        } else {
            // For machine formats, write as-is
            self.write(&formatted)
        }
    }

    /// Write field descriptors with specialized formatting
    pub fn descriptors(&mut self, fields: &[FieldDescriptor]) -> Result<()> {
        let formatted = self.format.format_descriptors(fields)?;
        if self.format == OutputFormat::Human {
            if self.use_color {
                let mut lines = formatted.lines();
                if let Some(header) = lines.next() {
                    self.writeln(&header.bold().to_string())?;
                }
                for line in lines {
                    self.writeln(line)?;
                }
                Ok(())
            } else {
                self.writeln(&formatted)
            }
        } else {
            self.write(&formatted)
        }
    }
}

/// Copies of the descriptors with sensitive defaults masked
fn redacted(fields: &[FieldDescriptor]) -> Vec<FieldDescriptor> {
    fields
        .iter()
        .map(|field| {
            let mut field = field.clone();
            field.default_literal = field.display_default().map(str::to_string);
            field
        })
        .collect()
}

/// Format descriptors as an aligned table followed by their rules
fn format_descriptors_human(fields: &[FieldDescriptor]) -> String {
    let headers = ["Field", "Type", "Required", "Default", "Rules"];
    let rows: Vec<Vec<String>> = fields
        .iter()
        .map(|field| {
            vec![
                field.name.clone(),
                field.inferred_type.to_string(),
                if field.required { "yes" } else { "no" }.to_string(),
                field
                    .display_default()
                    .map(|literal| literal.split_whitespace().collect::<Vec<_>>().join(" "))
                    .unwrap_or_else(|| "-".to_string()),
                field.validation_rules.len().to_string(),
            ]
        })
        .collect();

    // Calculate column widths
    let mut widths = headers.iter().map(|h| h.len()).collect::<Vec<_>>();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let join = |cells: Vec<String>| {
        cells
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:width$}", cell, width = widths[i]))
            .collect::<Vec<_>>()
            .join(" │ ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![join(headers.iter().map(|h| h.to_string()).collect())];
    lines.push(
        widths
            .iter()
            .map(|w| "─".repeat(*w))
            .collect::<Vec<_>>()
            .join("─┼─"),
    );
    lines.extend(rows.into_iter().map(join));

    for field in fields.iter().filter(|f| !f.validation_rules.is_empty()) {
        lines.push(String::new());
        lines.push(format!("{}:", field.name));
        for rule in &field.validation_rules {
            lines.push(format!("  - {}", rule.condition));
            lines.push(format!("    {}", rule.message));
        }
    }

    lines.join("\n")
}
