//! The `pattern` keyword

use regex::Regex;
use serde_json::Value;

use crate::schema::errors::{CompileError, CompileResult, ValidateResult};

/// Compiled `pattern`; matching is an unanchored substring search.
#[derive(Debug)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    pub(crate) fn compile(value: &Value) -> CompileResult<Self> {
        let Value::String(source) = value else {
            return Err(CompileError::InvalidPattern("pattern"));
        };
        Ok(Self {
            regex: Regex::new(source)?,
        })
    }

    pub(crate) fn validate(&self, instance: &Value) -> ValidateResult<bool> {
        match instance {
            Value::String(s) => Ok(self.regex.is_match(s)),
            _ => Ok(true),
        }
    }
}
