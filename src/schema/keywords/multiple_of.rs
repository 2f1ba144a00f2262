//! The `multipleOf` keyword
//!
//! Integer instance against integer divisor is exact divisibility; any
//! float on either side moves the check into float space with tolerance
//! for IEEE rounding. Non-numeric instances pass untouched.

use serde_json::Value;

use crate::schema::errors::{CompileError, CompileResult, ValidateError, ValidateResult};
use crate::value::{view, Json, Num};

/// Compiled `multipleOf`. The divisor is strictly positive.
#[derive(Debug, Clone, Copy)]
pub struct MultipleOf {
    divisor: Num,
}

impl MultipleOf {
    pub(crate) fn compile(value: &Value) -> CompileResult<Self> {
        let divisor = match view(value).ok_or(CompileError::UnsupportedNumber)? {
            Json::Int(i) => Num::Int(i),
            Json::Float(f) => Num::Float(f),
            _ => return Err(CompileError::InvalidMultipleOf),
        };
        if divisor.to_f64() <= 0.0 {
            return Err(CompileError::MultipleOfNotPositive);
        }
        Ok(Self { divisor })
    }

    pub(crate) fn validate(&self, instance: &Value) -> ValidateResult<bool> {
        let number = match view(instance).ok_or(ValidateError::UnsupportedNumber)? {
            Json::Int(i) => Num::Int(i),
            Json::Float(f) => Num::Float(f),
            _ => return Ok(true),
        };
        Ok(match (number, self.divisor) {
            (Num::Int(value), Num::Int(divisor)) => value % divisor == 0,
            (value, divisor) => float_multiple(value.to_f64(), divisor.to_f64()),
        })
    }
}

/// Float divisibility tolerating IEEE rounding: an exactly integral
/// quotient passes outright; otherwise the nearest integral quotient is
/// multiplied back and must land within one unit of least precision of
/// the instance (`1.1` is a multiple of `0.1` even though `1.1 / 0.1`
/// computes to `10.999999999999998`).
fn float_multiple(value: f64, divisor: f64) -> bool {
    let quotient = value / divisor;
    if quotient == quotient.trunc() {
        return true;
    }
    let reconstructed = quotient.round() * divisor;
    (reconstructed - value).abs() <= value.abs() * f64::EPSILON
}
