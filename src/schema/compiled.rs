//! The compiled schema representation
//!
//! A schema document compiles into this closed tree exactly once. The tree
//! owns all of its resources (child schemas, regex engines, copied enum
//! values), so dropping the root releases everything in one traversal.

use serde_json::Value;

use super::errors::ValidateResult;
use super::keywords::{
    Bounds, Combinator, MultipleOf, Pattern, PropertyRules, Range, TypeSet, ValueSet,
};

/// A compiled, immutable schema.
///
/// Built by [`compile`](super::compile). Validation never mutates the
/// tree, so one compiled schema can serve concurrent read-only use.
#[derive(Debug)]
pub enum CompiledSchema {
    /// `true` accepts every instance, `false` rejects every instance
    Boolean(bool),
    /// All children must accept; the empty conjunction accepts everything
    Conjunction(Vec<CompiledSchema>),
    /// `type`
    Types(TypeSet),
    /// `minItems`/`maxItems` or `minLength`/`maxLength`
    Bounds(Bounds),
    /// `minimum`/`maximum` or their exclusive variants
    Range(Range),
    /// `multipleOf`
    MultipleOf(MultipleOf),
    /// `properties`/`patternProperties`/`additionalProperties`/`required`
    Properties(Box<PropertyRules>),
    /// `allOf`/`anyOf`/`oneOf`
    Combinator(Combinator),
    /// `not`
    Not(Box<CompiledSchema>),
    /// `enum`/`const`
    Enum(ValueSet),
    /// `pattern`
    Pattern(Pattern),
}

impl CompiledSchema {
    /// Validates `instance`, returning the boolean verdict.
    ///
    /// # Errors
    ///
    /// Returns `ValidateError` when the instance contains a number with no
    /// 64-bit representation. Faults are never folded into `false`.
    pub fn validate(&self, instance: &Value) -> ValidateResult<bool> {
        match self {
            CompiledSchema::Boolean(accept) => Ok(*accept),
            CompiledSchema::Conjunction(children) => {
                for child in children {
                    if !child.validate(instance)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            CompiledSchema::Types(types) => types.validate(instance),
            CompiledSchema::Bounds(bounds) => bounds.validate(instance),
            CompiledSchema::Range(range) => range.validate(instance),
            CompiledSchema::MultipleOf(multiple) => multiple.validate(instance),
            CompiledSchema::Properties(rules) => rules.validate(instance),
            CompiledSchema::Combinator(combinator) => combinator.validate(instance),
            CompiledSchema::Not(child) => Ok(!child.validate(instance)?),
            CompiledSchema::Enum(values) => values.validate(instance),
            CompiledSchema::Pattern(pattern) => pattern.validate(instance),
        }
    }
}
