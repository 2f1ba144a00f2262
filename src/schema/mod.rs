//! Schema compilation and validation subsystem
//!
//! Schemas are compiled once into an immutable tree, then applied to any
//! number of instances.
//!
//! # Design Principles
//!
//! - Compile before validate: every keyword is checked and translated up
//!   front; no schema JSON is consulted during validation
//! - Unrecognized keywords abort compilation, never silently ignored
//! - Validation is deterministic and side-effect free
//! - Errors propagate; they are never collapsed into a `false` verdict

mod compiled;
mod compiler;
mod errors;
mod keywords;

pub use compiled::CompiledSchema;
pub use compiler::compile;
pub use errors::{CompileError, CompileResult, Error, ValidateError, ValidateResult};
pub use keywords::{
    Bounds, BoundsKind, Combinator, CombinatorMode, MultipleOf, Pattern, PropertyRules, Range,
    TypeSet, ValueSet,
};

use serde_json::Value;

/// Compiles `schema` and validates `instance` against it in one call.
///
/// The intermediate compiled schema is dropped before returning. When the
/// same schema will be applied to many instances, prefer [`compile`] once
/// plus [`CompiledSchema::validate`] per instance.
pub fn compile_and_validate(schema: &Value, instance: &Value) -> Result<bool, Error> {
    let compiled = compile(schema)?;
    Ok(compiled.validate(instance)?)
}
