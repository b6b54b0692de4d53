//! Validation rule synthesis
//!
//! Constraint keywords on a field become Terraform `validation` conditions.
//! Every condition reads the field as `var.<name>`; optional fields get a null
//! guard so an unset variable always passes.
//!
//! Copyright (c) 2025 Schema Transpose Team
//! Licensed under the Apache-2.0 license

pub mod pattern;

use crate::error::Result;
use crate::literal::{escape, is_truthy, list_literal, plain_text};
use crate::types::TypeConstraint;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

/// A single validation guard for a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    /// Boolean HCL expression over the field's value
    pub condition: String,
    /// Human-readable failure text, unescaped
    pub message: String,
    /// Which generator produced the rule and in which null mode
    pub provenance: String,
}

/// Constraint keywords that produce rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    ExclusiveMinimum,
    Minimum,
    ExclusiveMaximum,
    Maximum,
    MultipleOf,
    MinItems,
    MaxItems,
    MinLength,
    MaxLength,
    UniqueItems,
    Pattern,
}

impl Keyword {
    pub const ALL: [Keyword; 11] = [
        Keyword::ExclusiveMinimum,
        Keyword::Minimum,
        Keyword::ExclusiveMaximum,
        Keyword::Maximum,
        Keyword::MultipleOf,
        Keyword::MinItems,
        Keyword::MaxItems,
        Keyword::MinLength,
        Keyword::MaxLength,
        Keyword::UniqueItems,
        Keyword::Pattern,
    ];

    /// Match a schema key, ignoring case
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|keyword| keyword.as_str().eq_ignore_ascii_case(key))
    }

    /// The keyword as spelled in JSON Schema
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::ExclusiveMinimum => "exclusiveMinimum",
            Keyword::Minimum => "minimum",
            Keyword::ExclusiveMaximum => "exclusiveMaximum",
            Keyword::Maximum => "maximum",
            Keyword::MultipleOf => "multipleOf",
            Keyword::MinItems => "minItems",
            Keyword::MaxItems => "maxItems",
            Keyword::MinLength => "minLength",
            Keyword::MaxLength => "maxLength",
            Keyword::UniqueItems => "uniqueItems",
            Keyword::Pattern => "pattern",
        }
    }
}

/// Generates the rules for one field
#[derive(Debug, Clone, Copy)]
pub struct RuleSynthesizer<'a> {
    field: &'a str,
    allow_none: bool,
}

impl<'a> RuleSynthesizer<'a> {
    /// `allow_none` should be true exactly when the field is optional
    pub fn new(field: &'a str, allow_none: bool) -> Self {
        Self { field, allow_none }
    }

    /// All rules for a resolved definition: keyword rules in key order, then
    /// rules implied by the field's type
    pub fn synthesize(
        &self,
        definition: &Map<String, Value>,
        constraints: &[TypeConstraint],
    ) -> Result<Vec<Rule>> {
        let mut rules = Vec::new();

        for (key, value) in definition {
            let Some(keyword) = Keyword::from_key(key) else {
                continue;
            };
            if let Some(rule) = self.keyword_rule(keyword, value)? {
                rules.push(rule);
            }
        }

        rules.extend(constraints.iter().map(|constraint| self.constraint_rule(constraint)));

        debug!(field = self.field, count = rules.len(), "Synthesized validation rules");
        Ok(rules)
    }

    /// Rule for a single keyword; `uniqueItems: false` yields none
    pub fn keyword_rule(&self, keyword: Keyword, value: &Value) -> Result<Option<Rule>> {
        let var = self.var();
        let k = plain_text(value);

        let (condition, message) = match keyword {
            Keyword::ExclusiveMinimum => (
                format!("{} > {}", var, k),
                format!("should be larger than {}", k),
            ),
            Keyword::Minimum => (
                format!("{} >= {}", var, k),
                format!("should be greater than or equal to {}", k),
            ),
            Keyword::ExclusiveMaximum => (
                format!("{} < {}", var, k),
                format!("should be smaller than {}", k),
            ),
            Keyword::Maximum => (
                format!("{} <= {}", var, k),
                format!("should be less than or equal to {}", k),
            ),
            Keyword::MultipleOf => (
                format!("{} % {} == 0", var, k),
                format!("should be a multiple of {}", k),
            ),
            Keyword::MinItems => (
                format!("length({}) >= {}", var, k),
                format!("should contain at least {} items", k),
            ),
            Keyword::MaxItems => (
                format!("length({}) <= {}", var, k),
                format!("should contain at most {} items", k),
            ),
            Keyword::MinLength => (
                format!("length({}) >= {}", var, k),
                format!("should not be less than {} characters", k),
            ),
            Keyword::MaxLength => (
                format!("length({}) <= {}", var, k),
                format!("should not be larger than {} characters", k),
            ),
            Keyword::UniqueItems => {
                if !is_truthy(value) {
                    return Ok(None);
                }
                (
                    format!("length(distinct({})) == length({})", var, var),
                    "should only contain unique items".to_string(),
                )
            }
            Keyword::Pattern => {
                let compact = pattern::compile(self.field, &k)?;
                (
                    format!("length(regexall(\"{}\", {})) > 0", escape(&compact), var),
                    format!("does not match regex pattern {}", compact),
                )
            }
        };

        Ok(Some(self.finish(keyword.as_str(), condition, message)))
    }

    /// Membership rule over enum values
    pub fn one_of(&self, values: &[Value]) -> Rule {
        let allowed: Vec<String> = values.iter().map(plain_text).collect();
        self.finish(
            "oneof",
            format!("contains({}, {})", list_literal(values), self.var()),
            format!("should be one of: {}", allowed.join(", ")),
        )
    }

    fn constraint_rule(&self, constraint: &TypeConstraint) -> Rule {
        match constraint {
            TypeConstraint::OneOf(values) => self.one_of(values),
        }
    }

    fn finish(&self, generator: &str, condition: String, message: String) -> Rule {
        let condition = if self.allow_none {
            format!("{} == null ? true : {}", self.var(), condition)
        } else {
            condition
        };

        Rule {
            condition,
            message,
            provenance: format!(
                "Automatically Generated from Rule `{}` with allow_none set to {}",
                generator, self.allow_none
            ),
        }
    }

    fn var(&self) -> String {
        format!("var.{}", self.field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn synthesize(field: &str, definition: Value, allow_none: bool) -> Vec<Rule> {
        RuleSynthesizer::new(field, allow_none)
            .synthesize(definition.as_object().unwrap(), &[])
            .unwrap()
    }

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(Keyword::from_key("minimum"), Some(Keyword::Minimum));
        assert_eq!(Keyword::from_key("MINLENGTH"), Some(Keyword::MinLength));
        assert_eq!(Keyword::from_key("uniqueitems"), Some(Keyword::UniqueItems));
        assert_eq!(Keyword::from_key("format"), None);
        assert_eq!(Keyword::from_key("enum"), None);
        for keyword in Keyword::ALL {
            assert_eq!(Keyword::from_key(keyword.as_str()), Some(keyword));
        }
    }

    #[test]
    fn test_numeric_bounds() {
        let rules = synthesize(
            "port",
            json!({
                "type": "integer",
                "exclusiveMinimum": 0,
                "maximum": 65535,
                "multipleOf": 2
            }),
            false,
        );

        let conditions: Vec<_> = rules.iter().map(|r| r.condition.as_str()).collect();
        assert_eq!(
            conditions,
            vec!["var.port > 0", "var.port <= 65535", "var.port % 2 == 0"]
        );
        assert_eq!(rules[0].message, "should be larger than 0");
        assert_eq!(rules[1].message, "should be less than or equal to 65535");
        assert_eq!(rules[2].message, "should be a multiple of 2");
    }

    #[test]
    fn test_length_rules() {
        let rules = synthesize(
            "tags",
            json!({"minItems": 1, "maxItems": 5, "uniqueItems": true}),
            false,
        );
        assert_eq!(rules[0].condition, "length(var.tags) >= 1");
        assert_eq!(rules[0].message, "should contain at least 1 items");
        assert_eq!(rules[1].condition, "length(var.tags) <= 5");
        assert_eq!(rules[1].message, "should contain at most 5 items");
        assert_eq!(
            rules[2].condition,
            "length(distinct(var.tags)) == length(var.tags)"
        );

        let rules = synthesize("name", json!({"minLength": 3, "maxLength": 64}), false);
        assert_eq!(rules[0].message, "should not be less than 3 characters");
        assert_eq!(rules[1].message, "should not be larger than 64 characters");
    }

    #[test]
    fn test_unique_items_false_is_skipped() {
        assert!(synthesize("tags", json!({"uniqueItems": false}), false).is_empty());
    }

    #[test]
    fn test_null_bypass() {
        let rules = synthesize("count", json!({"minimum": 1}), true);
        assert_eq!(rules[0].condition, "var.count == null ? true : var.count >= 1");
        assert_eq!(
            rules[0].provenance,
            "Automatically Generated from Rule `minimum` with allow_none set to true"
        );
    }

    #[test]
    fn test_pattern_rule() {
        let rules = synthesize("code", json!({"pattern": r"^\d+ # digits"}), false);
        assert_eq!(rules[0].condition, r#"length(regexall("^\\d+", var.code)) > 0"#);
        assert_eq!(rules[0].message, r"does not match regex pattern ^\d+");
    }

    #[test]
    fn test_malformed_pattern() {
        let result = RuleSynthesizer::new("code", false)
            .synthesize(json!({"pattern": "(unclosed"}).as_object().unwrap(), &[]);
        assert!(matches!(
            result,
            Err(crate::error::Error::MalformedPattern { .. })
        ));
    }

    #[test]
    fn test_one_of_follows_keyword_rules() {
        let definition = json!({"enum": ["UP", "DOWN"], "minLength": 2});
        let constraints = [TypeConstraint::OneOf(vec![json!("UP"), json!("DOWN")])];
        let rules = RuleSynthesizer::new("status", false)
            .synthesize(definition.as_object().unwrap(), &constraints)
            .unwrap();

        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].condition, "length(var.status) >= 2");
        assert_eq!(rules[1].condition, r#"contains(["UP", "DOWN"], var.status)"#);
        assert_eq!(rules[1].message, "should be one of: UP, DOWN");
        assert!(rules[1].provenance.contains("`oneof`"));
    }

    #[test]
    fn test_one_of_non_string_values() {
        let rule = RuleSynthesizer::new("level", true).one_of(&[json!(1), json!(2), json!(3)]);
        assert_eq!(
            rule.condition,
            "var.level == null ? true : contains([1, 2, 3], var.level)"
        );
        assert_eq!(rule.message, "should be one of: 1, 2, 3");
    }

    #[test]
    fn test_unrecognized_keywords_ignored() {
        let rules = synthesize(
            "name",
            json!({"type": "string", "format": "hostname", "title": "Name"}),
            true,
        );
        assert!(rules.is_empty());
    }
}
