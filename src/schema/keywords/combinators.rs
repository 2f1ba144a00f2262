//! Schema combinators
//!
//! `allOf` is conjunction, `anyOf` disjunction with an early accept,
//! `oneOf` exactly-one with an early reject once a second child accepts.

use serde_json::Value;

use crate::schema::compiled::CompiledSchema;
use crate::schema::compiler::compile;
use crate::schema::errors::{CompileError, CompileResult, ValidateResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombinatorMode {
    All,
    Any,
    One,
}

/// A compiled `allOf`/`anyOf`/`oneOf`. The child list is never empty.
#[derive(Debug)]
pub struct Combinator {
    mode: CombinatorMode,
    schemas: Vec<CompiledSchema>,
}

impl Combinator {
    pub(crate) fn compile(
        keyword: &'static str,
        mode: CombinatorMode,
        value: &Value,
    ) -> CompileResult<Self> {
        let Value::Array(subschemas) = value else {
            return Err(CompileError::InvalidCombinator(keyword));
        };
        if subschemas.is_empty() {
            return Err(CompileError::EmptyCombinator(keyword));
        }
        let schemas = subschemas
            .iter()
            .map(compile)
            .collect::<CompileResult<Vec<_>>>()?;
        Ok(Self { mode, schemas })
    }

    pub(crate) fn validate(&self, instance: &Value) -> ValidateResult<bool> {
        match self.mode {
            CombinatorMode::All => {
                for schema in &self.schemas {
                    if !schema.validate(instance)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            CombinatorMode::Any => {
                for schema in &self.schemas {
                    if schema.validate(instance)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            CombinatorMode::One => {
                let mut accepted = 0;
                for schema in &self.schemas {
                    if schema.validate(instance)? {
                        accepted += 1;
                        if accepted > 1 {
                            return Ok(false);
                        }
                    }
                }
                Ok(accepted == 1)
            }
        }
    }
}
