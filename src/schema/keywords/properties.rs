//! Object member rules
//!
//! The joint semantics of `properties`, `patternProperties`,
//! `additionalProperties`, and `required`, compiled into one ordered rule
//! list so validation makes a single pass over the instance members.

use regex::Regex;
use serde_json::Value;

use crate::schema::compiled::CompiledSchema;
use crate::schema::compiler::compile;
use crate::schema::errors::{CompileError, CompileResult, ValidateResult};

/// One entry in the rule list, in compile order.
#[derive(Debug)]
enum PropertyRule {
    /// Matches a member by exact key
    Literal {
        key: String,
        required: bool,
        schema: CompiledSchema,
    },
    /// Matches a member when the regex matches any substring of its key
    Pattern { regex: Regex, schema: CompiledSchema },
}

/// Compiled object member rules.
#[derive(Debug)]
pub struct PropertyRules {
    rules: Vec<PropertyRule>,
    additional: Option<CompiledSchema>,
    required_count: usize,
}

impl PropertyRules {
    pub(crate) fn compile(
        properties: Option<&Value>,
        pattern_properties: Option<&Value>,
        additional: Option<&Value>,
        required: Option<&Value>,
    ) -> CompileResult<Self> {
        let mut rules = Vec::new();
        let mut required_count = 0;

        // Required names first, each starting as an accept-anything rule,
        // so a bare `required` works without a `properties` entry.
        if let Some(required) = required {
            let Value::Array(names) = required else {
                return Err(CompileError::InvalidRequired);
            };
            for name in names {
                let Value::String(name) = name else {
                    return Err(CompileError::InvalidRequired);
                };
                rules.push(PropertyRule::Literal {
                    key: name.clone(),
                    required: true,
                    schema: CompiledSchema::Boolean(true),
                });
                required_count += 1;
            }
        }

        // `properties` entries refine the placeholder schema of a required
        // name, or append as non-required rules.
        if let Some(properties) = properties {
            let Value::Object(map) = properties else {
                return Err(CompileError::InvalidProperties("properties"));
            };
            for (key, sub) in map {
                let schema = compile(sub)?;
                let existing = rules.iter().position(
                    |rule| matches!(rule, PropertyRule::Literal { key: k, .. } if k == key),
                );
                match existing {
                    Some(index) => {
                        if let PropertyRule::Literal { schema: slot, .. } = &mut rules[index] {
                            *slot = schema;
                        }
                    }
                    None => rules.push(PropertyRule::Literal {
                        key: key.clone(),
                        required: false,
                        schema,
                    }),
                }
            }
        }

        if let Some(pattern_properties) = pattern_properties {
            let Value::Object(map) = pattern_properties else {
                return Err(CompileError::InvalidProperties("patternProperties"));
            };
            for (source, sub) in map {
                rules.push(PropertyRule::Pattern {
                    regex: Regex::new(source)?,
                    schema: compile(sub)?,
                });
            }
        }

        let additional = additional.map(compile).transpose()?;

        Ok(Self {
            rules,
            additional,
            required_count,
        })
    }

    /// Walks the instance members once, in insertion order, applying every
    /// matching rule. A member whose matched rule rejects fails the whole
    /// schema; a member no rule matched (or a failed one) must additionally
    /// satisfy the `additionalProperties` schema when one is configured.
    pub(crate) fn validate(&self, instance: &Value) -> ValidateResult<bool> {
        let Value::Object(members) = instance else {
            return Ok(true);
        };

        let mut required_matches = 0;
        for (key, value) in members {
            let mut matched = false;
            let mut rejected = false;
            for rule in &self.rules {
                match rule {
                    PropertyRule::Literal {
                        key: rule_key,
                        required,
                        schema,
                    } => {
                        if rule_key != key {
                            continue;
                        }
                        matched = true;
                        if *required {
                            required_matches += 1;
                        }
                        if !schema.validate(value)? {
                            rejected = true;
                        }
                    }
                    PropertyRule::Pattern { regex, schema } => {
                        if !regex.is_match(key) {
                            continue;
                        }
                        matched = true;
                        if !schema.validate(value)? {
                            rejected = true;
                        }
                    }
                }
            }

            if !matched || rejected {
                if let Some(additional) = &self.additional {
                    if !additional.validate(value)? {
                        return Ok(false);
                    }
                }
            }
            if rejected {
                return Ok(false);
            }
        }

        Ok(required_matches >= self.required_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rules(schema: Value) -> PropertyRules {
        let object = schema.as_object().unwrap();
        PropertyRules::compile(
            object.get("properties"),
            object.get("patternProperties"),
            object.get("additionalProperties"),
            object.get("required"),
        )
        .unwrap()
    }

    #[test]
    fn test_properties_check_member_values() {
        let rules = rules(json!({"properties": {"a": {"type": "integer"}}}));
        assert!(rules.validate(&json!({"a": 1})).unwrap());
        assert!(!rules.validate(&json!({"a": "one"})).unwrap());
        // absent members are not required
        assert!(rules.validate(&json!({})).unwrap());
        // unmatched members pass when no additionalProperties is set
        assert!(rules.validate(&json!({"b": "free"})).unwrap());
    }

    #[test]
    fn test_required_without_properties() {
        let rules = rules(json!({"required": ["a", "b"]}));
        assert!(rules.validate(&json!({"a": 1, "b": null})).unwrap());
        assert!(!rules.validate(&json!({"a": 1})).unwrap());
        assert!(!rules.validate(&json!({})).unwrap());
    }

    #[test]
    fn test_required_combined_with_properties() {
        let rules = rules(json!({
            "properties": {"a": {"type": "integer"}},
            "required": ["a"],
        }));
        assert!(rules.validate(&json!({"a": 1})).unwrap());
        assert!(!rules.validate(&json!({})).unwrap());
        assert!(!rules.validate(&json!({"a": "one"})).unwrap());
    }

    #[test]
    fn test_pattern_properties_match_substrings() {
        let rules = rules(json!({"patternProperties": {"^x": {"type": "integer"}}}));
        assert!(rules.validate(&json!({"x1": 1, "other": "free"})).unwrap());
        assert!(!rules.validate(&json!({"x1": "one"})).unwrap());
    }

    #[test]
    fn test_additional_properties_false_closes_the_object() {
        let rules = rules(json!({
            "patternProperties": {"^x": {"type": "integer"}},
            "additionalProperties": false,
        }));
        assert!(rules.validate(&json!({"x1": 1})).unwrap());
        assert!(!rules.validate(&json!({"x1": 1, "y": 2})).unwrap());
    }

    #[test]
    fn test_additional_properties_schema_applies_to_unmatched() {
        let rules = rules(json!({
            "properties": {"a": true},
            "additionalProperties": {"type": "string"},
        }));
        assert!(rules.validate(&json!({"a": 1, "b": "s"})).unwrap());
        assert!(!rules.validate(&json!({"a": 1, "b": 2})).unwrap());
    }

    #[test]
    fn test_failed_member_rejects_even_when_additional_accepts() {
        let rules = rules(json!({
            "properties": {"a": {"type": "integer"}},
            "additionalProperties": true,
        }));
        assert!(!rules.validate(&json!({"a": "one"})).unwrap());
    }

    #[test]
    fn test_member_matching_literal_and_pattern_must_satisfy_both() {
        let rules = rules(json!({
            "properties": {"ax": {"type": "integer"}},
            "patternProperties": {"^a": {"minimum": 10}},
        }));
        assert!(rules.validate(&json!({"ax": 12})).unwrap());
        assert!(!rules.validate(&json!({"ax": 5})).unwrap());
        assert!(!rules.validate(&json!({"ax": "twelve"})).unwrap());
    }

    #[test]
    fn test_non_object_instances_pass_untouched() {
        let rules = rules(json!({"required": ["a"]}));
        for instance in [json!(null), json!(1), json!("a"), json!([1])] {
            assert!(rules.validate(&instance).unwrap());
        }
    }

    #[test]
    fn test_malformed_keywords_rejected() {
        assert!(matches!(
            PropertyRules::compile(Some(&json!([])), None, None, None),
            Err(CompileError::InvalidProperties("properties"))
        ));
        assert!(matches!(
            PropertyRules::compile(None, Some(&json!("^x")), None, None),
            Err(CompileError::InvalidProperties("patternProperties"))
        ));
        assert!(matches!(
            PropertyRules::compile(None, None, None, Some(&json!({"a": true}))),
            Err(CompileError::InvalidRequired)
        ));
        assert!(matches!(
            PropertyRules::compile(None, None, None, Some(&json!([1]))),
            Err(CompileError::InvalidRequired)
        ));
    }

    #[test]
    fn test_invalid_member_regex_propagates() {
        let result = PropertyRules::compile(None, Some(&json!({"(unclosed": true})), None, None);
        assert!(matches!(result, Err(CompileError::Regex(_))));
    }
}
