//! Item and length bounds
//!
//! `minItems`/`maxItems` apply to arrays; `minLength`/`maxLength` apply to
//! strings, measured in Unicode code points rather than bytes. Instances
//! of any other shape pass untouched.

use serde_json::Value;

use crate::schema::errors::{CompileError, CompileResult, ValidateResult};
use crate::value::{codepoint_len, view, Json};

/// Which shape a [`Bounds`] constrains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundsKind {
    Items,
    Length,
}

/// Compiled `minItems`/`maxItems` or `minLength`/`maxLength`.
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    kind: BoundsKind,
    min: i64,
    max: Option<i64>,
}

impl Bounds {
    /// `min` defaults to 0 and `max` to unbounded when absent.
    pub(crate) fn compile(
        kind: BoundsKind,
        min_key: &'static str,
        max_key: &'static str,
        min: Option<&Value>,
        max: Option<&Value>,
    ) -> CompileResult<Self> {
        Ok(Self {
            kind,
            min: min
                .map(|value| integral(min_key, value))
                .transpose()?
                .unwrap_or(0),
            max: max.map(|value| integral(max_key, value)).transpose()?,
        })
    }

    pub(crate) fn validate(&self, instance: &Value) -> ValidateResult<bool> {
        let len = match (self.kind, instance) {
            (BoundsKind::Items, Value::Array(items)) => items.len() as i64,
            (BoundsKind::Length, Value::String(s)) => codepoint_len(s) as i64,
            _ => return Ok(true),
        };
        Ok(self.min <= len && self.max.map_or(true, |max| len <= max))
    }
}

/// Narrows a bound to `i64`: integers pass through, floats must carry an
/// exact in-range integer value.
fn integral(keyword: &'static str, value: &Value) -> CompileResult<i64> {
    match view(value).ok_or(CompileError::UnsupportedNumber)? {
        Json::Int(i) => Ok(i),
        Json::Float(f) => {
            if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
                Ok(f as i64)
            } else {
                Err(CompileError::NonIntegralBound(keyword))
            }
        }
        _ => Err(CompileError::InvalidBound(keyword)),
    }
}
