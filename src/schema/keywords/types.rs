//! The `type` keyword
//!
//! Compiled to a set over the seven type names, with `integer` and
//! `number` as distinct members: `number` admits both numeric shapes,
//! `integer` admits integers and floats with a zero fractional part.

use serde_json::Value;

use crate::schema::errors::{CompileError, CompileResult, ValidateError, ValidateResult};
use crate::value::{view, Json};

const INTEGER: u8 = 1 << 0;
const NUMBER: u8 = 1 << 1;
const STRING: u8 = 1 << 2;
const OBJECT: u8 = 1 << 3;
const ARRAY: u8 = 1 << 4;
const BOOLEAN: u8 = 1 << 5;
const NULL: u8 = 1 << 6;

/// The compiled `type` constraint.
#[derive(Debug, Clone, Copy)]
pub struct TypeSet {
    members: u8,
}

impl TypeSet {
    /// Accepts a type name or an array of type names.
    pub(crate) fn compile(value: &Value) -> CompileResult<Self> {
        match value {
            Value::String(name) => Ok(Self {
                members: parse_name(name)?,
            }),
            Value::Array(names) => {
                let mut members = 0;
                for name in names {
                    let Value::String(name) = name else {
                        return Err(CompileError::InvalidType);
                    };
                    members |= parse_name(name)?;
                }
                Ok(Self { members })
            }
            _ => Err(CompileError::InvalidType),
        }
    }

    fn contains(self, member: u8) -> bool {
        self.members & member != 0
    }

    pub(crate) fn validate(&self, instance: &Value) -> ValidateResult<bool> {
        let accepted = match view(instance).ok_or(ValidateError::UnsupportedNumber)? {
            Json::Object(_) => self.contains(OBJECT),
            Json::Array(_) => self.contains(ARRAY),
            Json::Str(_) => self.contains(STRING),
            Json::Bool(_) => self.contains(BOOLEAN),
            Json::Null => self.contains(NULL),
            Json::Int(_) => self.contains(INTEGER) || self.contains(NUMBER),
            Json::Float(f) => {
                self.contains(NUMBER) || (self.contains(INTEGER) && f.fract() == 0.0)
            }
        };
        Ok(accepted)
    }
}

fn parse_name(name: &str) -> CompileResult<u8> {
    match name {
        "integer" => Ok(INTEGER),
        "number" => Ok(NUMBER),
        "string" => Ok(STRING),
        "object" => Ok(OBJECT),
        "array" => Ok(ARRAY),
        "boolean" => Ok(BOOLEAN),
        "null" => Ok(NULL),
        _ => Err(CompileError::InvalidType),
    }
}
