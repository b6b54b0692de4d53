//! Reference resolution and `allOf` composition
//!
//! This module handles:
//! - Same-document `$ref` pointers (`#/definitions/Name`, `#/$defs/Name`, ...)
//! - Merging `allOf` parents into a single flat definition
//! - Circular reference detection
//!
//! Copyright (c) 2025 Schema Transpose Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use crate::literal::is_truthy;
use serde_json::{Map, Value};
use tracing::trace;

/// Default limit on nested reference hops for a single field
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Context for resolution operations
#[derive(Debug, Clone)]
pub struct ResolverContext {
    /// References currently being followed, outermost first
    pub resolution_stack: Vec<String>,
    /// Maximum resolution depth to prevent infinite recursion
    pub max_depth: usize,
}

impl ResolverContext {
    /// Create a new resolver context
    pub fn new(max_depth: usize) -> Self {
        Self {
            resolution_stack: Vec::new(),
            max_depth,
        }
    }

    /// Push a reference onto the resolution stack
    pub fn push_reference(&mut self, reference: &str) -> Result<()> {
        if self.resolution_stack.len() >= self.max_depth
            || self.resolution_stack.iter().any(|r| r == reference)
        {
            let mut chain = self.resolution_stack.clone();
            chain.push(reference.to_string());
            return Err(Error::circular_reference(&chain));
        }

        self.resolution_stack.push(reference.to_string());
        Ok(())
    }

    /// Pop a reference from the resolution stack
    pub fn pop_reference(&mut self) -> Option<String> {
        self.resolution_stack.pop()
    }
}

impl Default for ResolverContext {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

/// Resolves field definitions against the document they came from
#[derive(Debug, Clone, Copy)]
pub struct ReferenceResolver<'a> {
    document: &'a Value,
    max_depth: usize,
}

impl<'a> ReferenceResolver<'a> {
    /// Create a resolver over a schema document
    pub fn new(document: &'a Value) -> Self {
        Self {
            document,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Override the reference depth limit
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Produce a definition with every `$ref` followed and every `allOf` merged.
    ///
    /// The input is never modified; the result is a fresh map.
    pub fn resolve(&self, definition: &Value) -> Result<Map<String, Value>> {
        let mut context = ResolverContext::new(self.max_depth);
        self.resolve_with(definition, &mut context)
    }

    /// Look up a `$ref` path in the document
    pub fn lookup(&self, reference: &str) -> Result<&'a Value> {
        let path = reference.trim_matches(|c| c == '#' || c == '/');
        if path.is_empty() {
            return Ok(self.document);
        }

        path.split('/').try_fold(self.document, |node, segment| {
            let decoded = segment.replace("~1", "/").replace("~0", "~");
            let next = match node {
                Value::Object(obj) => obj.get(&decoded),
                Value::Array(arr) => decoded.parse::<usize>().ok().and_then(|i| arr.get(i)),
                _ => None,
            };
            next.ok_or_else(|| Error::unresolvable(reference, decoded))
        })
    }

    fn resolve_with(
        &self,
        definition: &Value,
        context: &mut ResolverContext,
    ) -> Result<Map<String, Value>> {
        let mut current = match definition {
            Value::Object(obj) => obj.clone(),
            _ => Map::new(),
        };

        // A referencing definition is swapped out for its target
        if let Some(reference) = current.get("$ref").and_then(Value::as_str).map(str::to_owned) {
            context.push_reference(&reference)?;
            trace!(reference = %reference, depth = context.resolution_stack.len(), "Following reference");
            let target = self.lookup(&reference)?;
            current = self.resolve_with(target, context)?;
            context.pop_reference();
        }

        if let Some(parents) = current.get("allOf").cloned() {
            let parents = match parents {
                Value::Array(parents) => parents,
                _ => return Err(Error::invalid_schema("'allOf' must be an array")),
            };
            // Rebuilt rather than removed so the remaining keys keep their order
            current = current
                .into_iter()
                .filter(|(key, _)| key != "allOf")
                .collect();

            for parent in &parents {
                let parent = self.resolve_with(parent, context)?;
                current = merge_parent(current, parent);
            }
        }

        Ok(current)
    }
}

/// Overlay a parent onto a definition, keeping the definition's description
fn merge_parent(base: Map<String, Value>, parent: Map<String, Value>) -> Map<String, Value> {
    let description = base.get("description").filter(|d| is_truthy(d)).cloned();

    let mut merged = base;
    for (key, value) in parent {
        merged.insert(key, value);
    }

    if let Some(description) = description {
        merged.insert("description".to_string(), description);
    }
    merged
}
