//! Regex pattern translation
//!
//! Schema patterns are often written in verbose mode, with whitespace and
//! `#` comments for readability. The generated condition needs the compact
//! form, so both are stripped unless escaped or inside a character class.
//!
//! Copyright (c) 2025 Schema Transpose Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use regex::Regex;

/// Strip unescaped whitespace and `#` line comments from a pattern
pub fn normalize(pattern: &str) -> String {
    let mut compact = String::with_capacity(pattern.len());
    let mut chars = pattern.chars().peekable();
    let mut in_class = false;

    while let Some(ch) = chars.next() {
        match ch {
            '\\' => {
                compact.push(ch);
                if let Some(escaped) = chars.next() {
                    compact.push(escaped);
                }
            }
            '[' if !in_class => {
                in_class = true;
                compact.push(ch);
                // A leading `]` (after an optional `^`) is a literal member
                if let Some(&'^') = chars.peek() {
                    compact.push('^');
                    chars.next();
                }
                if let Some(&']') = chars.peek() {
                    compact.push(']');
                    chars.next();
                }
            }
            '[' if in_class && chars.peek() == Some(&':') => {
                // A POSIX class such as `[:alpha:]` ends at its own `:]`
                compact.push(ch);
                let mut previous = ch;
                for member in chars.by_ref() {
                    compact.push(member);
                    if previous == ':' && member == ']' {
                        break;
                    }
                    previous = member;
                }
            }
            ']' if in_class => {
                in_class = false;
                compact.push(ch);
            }
            '#' if !in_class => {
                for skipped in chars.by_ref() {
                    if skipped == '\n' {
                        break;
                    }
                }
            }
            ws if ws.is_whitespace() && !in_class => {}
            other => compact.push(other),
        }
    }

    compact
}

/// Normalize a field's pattern and check that it compiles.
///
/// Errors name the field and the pattern as written in the schema.
pub fn compile(field: &str, pattern: &str) -> Result<String> {
    let compact = normalize(pattern);
    Regex::new(&compact).map_err(|e| Error::malformed_pattern(field, pattern, e))?;
    Ok(compact)
}
