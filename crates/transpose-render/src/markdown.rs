//! Markdown field tables
//!
//! Copyright (c) 2025 Schema Transpose Team
//! Licensed under the Apache-2.0 license

use transpose_core::{FieldDescriptor, TargetType};

const HEADERS: [&str; 5] = ["Name", "Type", "Description", "Default", "Required"];

/// Renders descriptors as an aligned markdown table
#[derive(Debug, Clone)]
pub struct MarkdownTable {
    skip_fields: Vec<String>,
}

impl Default for MarkdownTable {
    fn default() -> Self {
        Self {
            skip_fields: vec!["type".to_string()],
        }
    }
}

impl MarkdownTable {
    /// Create a table that leaves out the named fields
    pub fn new(skip_fields: Vec<String>) -> Self {
        Self { skip_fields }
    }

    /// Render the table, required fields first and then by name.
    ///
    /// Returns an empty string when no fields are left to show.
    pub fn render(&self, fields: &[FieldDescriptor]) -> String {
        let mut shown: Vec<&FieldDescriptor> = fields
            .iter()
            .filter(|field| !self.skip_fields.contains(&field.name))
            .collect();

        if shown.is_empty() {
            return String::new();
        }

        shown.sort_by(|a, b| b.required.cmp(&a.required).then_with(|| a.name.cmp(&b.name)));

        let rows: Vec<[String; 5]> = shown.into_iter().map(row).collect();

        let mut widths = HEADERS.map(|header| header.len().max(3));
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut lines = Vec::with_capacity(rows.len() + 2);
        lines.push(line(&HEADERS.map(String::from), &widths));
        lines.push(line(&widths.map(|width| "-".repeat(width)), &widths));
        lines.extend(rows.iter().map(|row| line(row, &widths)));
        lines.join("\n")
    }
}

/// Type name as shown to readers: `boolean` rather than `bool`, `array`
/// rather than `list`
pub fn display_type(target: &TargetType) -> String {
    let name = target.to_string();
    if name == "bool" {
        "boolean".to_string()
    } else {
        name.replace("list", "array")
    }
}

fn row(field: &FieldDescriptor) -> [String; 5] {
    [
        format!("`{}`", field.name),
        cell(&display_type(&field.inferred_type)),
        cell(field.description.as_deref().unwrap_or_default()),
        cell(field.display_default().unwrap_or_default()),
        if field.required { "Yes" } else { "No" }.to_string(),
    ]
}

/// Table-safe cell text: one line, pipes escaped
fn cell(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .replace('|', "\\|")
}

fn line(cells: &[String; 5], widths: &[usize; 5]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| {
            let padding = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(padding))
        })
        .collect();
    format!("| {} |", padded.join(" | "))
}
