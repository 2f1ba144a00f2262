//! Schema compiler
//!
//! Translates a raw schema document into a [`CompiledSchema`]. Every key
//! of a schema object must be claimed by exactly one keyword group;
//! anything left over aborts compilation. On any failure the partially
//! built conjunction is dropped, so no partial schema ever escapes.

use serde_json::{Map, Value};
use tracing::debug;

use super::compiled::CompiledSchema;
use super::errors::{CompileError, CompileResult};
use super::keywords::{
    Bounds, BoundsKind, Combinator, CombinatorMode, MultipleOf, Pattern, PropertyRules, Range,
    TypeSet, ValueSet,
};
use crate::value::type_name;

/// Every keyword this validator implements.
const RECOGNIZED: [&str; 21] = [
    "type",
    "minItems",
    "maxItems",
    "minLength",
    "maxLength",
    "minimum",
    "maximum",
    "exclusiveMinimum",
    "exclusiveMaximum",
    "multipleOf",
    "properties",
    "patternProperties",
    "additionalProperties",
    "required",
    "allOf",
    "anyOf",
    "oneOf",
    "not",
    "enum",
    "const",
    "pattern",
];

/// Compiles a schema document.
///
/// A boolean schema compiles directly; an object schema compiles to a
/// conjunction with one child per keyword group present. Anything else is
/// rejected.
///
/// # Errors
///
/// Returns `CompileError` for any malformed keyword value, for schema
/// objects containing unrecognized keywords, and for top-level documents
/// that are neither objects nor booleans.
pub fn compile(schema: &Value) -> CompileResult<CompiledSchema> {
    match schema {
        Value::Bool(accept) => Ok(CompiledSchema::Boolean(*accept)),
        Value::Object(object) => compile_object(object),
        _ => Err(CompileError::UnsupportedTopLevel(type_name(schema))),
    }
}

fn compile_object(object: &Map<String, Value>) -> CompileResult<CompiledSchema> {
    let mut children = Vec::new();
    let mut consumed = 0usize;

    if let Some(value) = object.get("type") {
        children.push(CompiledSchema::Types(TypeSet::compile(value)?));
        consumed += 1;
    }

    consumed += bounds_group(object, BoundsKind::Items, "minItems", "maxItems", &mut children)?;
    consumed += bounds_group(object, BoundsKind::Length, "minLength", "maxLength", &mut children)?;
    consumed += range_group(object, false, "minimum", "maximum", &mut children)?;
    consumed += range_group(object, true, "exclusiveMinimum", "exclusiveMaximum", &mut children)?;

    if let Some(value) = object.get("multipleOf") {
        children.push(CompiledSchema::MultipleOf(MultipleOf::compile(value)?));
        consumed += 1;
    }

    let properties = object.get("properties");
    let pattern_properties = object.get("patternProperties");
    let additional = object.get("additionalProperties");
    let required = object.get("required");
    if [properties, pattern_properties, additional, required]
        .iter()
        .any(Option::is_some)
    {
        let rules = PropertyRules::compile(properties, pattern_properties, additional, required)?;
        children.push(CompiledSchema::Properties(Box::new(rules)));
        consumed += [properties, pattern_properties, additional, required]
            .iter()
            .filter(|slot| slot.is_some())
            .count();
    }

    for (keyword, mode) in [
        ("allOf", CombinatorMode::All),
        ("anyOf", CombinatorMode::Any),
        ("oneOf", CombinatorMode::One),
    ] {
        if let Some(value) = object.get(keyword) {
            children.push(CompiledSchema::Combinator(Combinator::compile(
                keyword, mode, value,
            )?));
            consumed += 1;
        }
    }

    if let Some(value) = object.get("not") {
        children.push(CompiledSchema::Not(Box::new(compile(value)?)));
        consumed += 1;
    }

    if let Some(value) = object.get("enum") {
        children.push(CompiledSchema::Enum(ValueSet::compile_enum(value)?));
        consumed += 1;
    }
    if let Some(value) = object.get("const") {
        children.push(CompiledSchema::Enum(ValueSet::compile_const(value)));
        consumed += 1;
    }

    if let Some(value) = object.get("pattern") {
        children.push(CompiledSchema::Pattern(Pattern::compile(value)?));
        consumed += 1;
    }

    // Exhaustiveness: every key must have been claimed by a group above.
    if consumed != object.len() {
        let unsupported = object
            .keys()
            .find(|key| !RECOGNIZED.contains(&key.as_str()))
            .cloned()
            .unwrap_or_default();
        return Err(CompileError::UnsupportedKeyword(unsupported));
    }

    debug!(keywords = consumed, children = children.len(), "schema object compiled");
    Ok(CompiledSchema::Conjunction(children))
}

fn bounds_group(
    object: &Map<String, Value>,
    kind: BoundsKind,
    min_key: &'static str,
    max_key: &'static str,
    children: &mut Vec<CompiledSchema>,
) -> CompileResult<usize> {
    let min = object.get(min_key);
    let max = object.get(max_key);
    if min.is_none() && max.is_none() {
        return Ok(0);
    }
    let bounds = Bounds::compile(kind, min_key, max_key, min, max)?;
    children.push(CompiledSchema::Bounds(bounds));
    Ok(usize::from(min.is_some()) + usize::from(max.is_some()))
}

fn range_group(
    object: &Map<String, Value>,
    exclusive: bool,
    min_key: &'static str,
    max_key: &'static str,
    children: &mut Vec<CompiledSchema>,
) -> CompileResult<usize> {
    let min = object.get(min_key);
    let max = object.get(max_key);
    if min.is_none() && max.is_none() {
        return Ok(0);
    }
    let range = Range::compile(exclusive, min_key, max_key, min, max)?;
    children.push(CompiledSchema::Range(range));
    Ok(usize::from(min.is_some()) + usize::from(max.is_some()))
}
