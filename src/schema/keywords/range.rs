//! Numeric range limits
//!
//! `minimum`/`maximum` compare inclusively, `exclusiveMinimum`/
//! `exclusiveMaximum` strictly. Integer instances compare in integer
//! space (float limits truncate); float instances compare in float space
//! (integer limits widen). Non-numeric instances pass untouched.

use serde_json::Value;

use crate::schema::errors::{CompileError, CompileResult, ValidateError, ValidateResult};
use crate::value::{view, Json, Num};

/// Compiled `minimum`/`maximum` (or the exclusive pair).
#[derive(Debug, Clone, Copy)]
pub struct Range {
    min: Option<Num>,
    max: Option<Num>,
    exclusive: bool,
}

impl Range {
    pub(crate) fn compile(
        exclusive: bool,
        min_key: &'static str,
        max_key: &'static str,
        min: Option<&Value>,
        max: Option<&Value>,
    ) -> CompileResult<Self> {
        Ok(Self {
            min: min.map(|value| numeric(min_key, value)).transpose()?,
            max: max.map(|value| numeric(max_key, value)).transpose()?,
            exclusive,
        })
    }

    pub(crate) fn validate(&self, instance: &Value) -> ValidateResult<bool> {
        let number = match view(instance).ok_or(ValidateError::UnsupportedNumber)? {
            Json::Int(i) => Num::Int(i),
            Json::Float(f) => Num::Float(f),
            _ => return Ok(true),
        };
        let accepted = match number {
            Num::Int(i) => {
                self.min.map_or(true, |min| {
                    let min = min.to_i64();
                    if self.exclusive {
                        i > min
                    } else {
                        i >= min
                    }
                }) && self.max.map_or(true, |max| {
                    let max = max.to_i64();
                    if self.exclusive {
                        i < max
                    } else {
                        i <= max
                    }
                })
            }
            Num::Float(f) => {
                self.min.map_or(true, |min| {
                    let min = min.to_f64();
                    if self.exclusive {
                        f > min
                    } else {
                        f >= min
                    }
                }) && self.max.map_or(true, |max| {
                    let max = max.to_f64();
                    if self.exclusive {
                        f < max
                    } else {
                        f <= max
                    }
                })
            }
        };
        Ok(accepted)
    }
}

fn numeric(keyword: &'static str, value: &Value) -> CompileResult<Num> {
    match view(value).ok_or(CompileError::UnsupportedNumber)? {
        Json::Int(i) => Ok(Num::Int(i)),
        Json::Float(f) => Ok(Num::Float(f)),
        _ => Err(CompileError::InvalidLimit(keyword)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn range(exclusive: bool, min: Option<Value>, max: Option<Value>) -> Range {
        let (min_key, max_key) = if exclusive {
            ("exclusiveMinimum", "exclusiveMaximum")
        } else {
            ("minimum", "maximum")
        };
        Range::compile(exclusive, min_key, max_key, min.as_ref(), max.as_ref()).unwrap()
    }

    #[test]
    fn test_inclusive_limits_admit_their_endpoints() {
        let r = range(false, Some(json!(0)), Some(json!(10)));
        assert!(r.validate(&json!(0)).unwrap());
        assert!(r.validate(&json!(10)).unwrap());
        assert!(r.validate(&json!(5)).unwrap());
        assert!(!r.validate(&json!(-1)).unwrap());
        assert!(!r.validate(&json!(11)).unwrap());
    }

    #[test]
    fn test_exclusive_limits_reject_their_endpoints() {
        let r = range(true, Some(json!(0)), Some(json!(10)));
        assert!(!r.validate(&json!(0)).unwrap());
        assert!(!r.validate(&json!(10)).unwrap());
        assert!(r.validate(&json!(1)).unwrap());
        assert!(r.validate(&json!(9)).unwrap());
    }

    #[test]
    fn test_float_instance_compares_in_float_space() {
        let r = range(false, Some(json!(0)), Some(json!(10)));
        assert!(r.validate(&json!(0.5)).unwrap());
        assert!(r.validate(&json!(10.0)).unwrap());
        assert!(!r.validate(&json!(10.1)).unwrap());
        assert!(!r.validate(&json!(-0.5)).unwrap());
    }

    #[test]
    fn test_integer_instance_truncates_float_limits() {
        // 9.7 truncates to 9 in integer space
        let r = range(false, None, Some(json!(9.7)));
        assert!(r.validate(&json!(9)).unwrap());
        assert!(!r.validate(&json!(10)).unwrap());
        // while a float instance still compares against 9.7 itself
        assert!(r.validate(&json!(9.5)).unwrap());
    }

    #[test]
    fn test_non_numeric_instances_pass_untouched() {
        let r = range(false, Some(json!(100)), None);
        for instance in [json!(null), json!("5"), json!([1]), json!({"n": 1})] {
            assert!(r.validate(&instance).unwrap());
        }
    }

    #[test]
    fn test_non_numeric_limit_rejected() {
        assert!(matches!(
            Range::compile(false, "minimum", "maximum", Some(&json!("0")), None),
            Err(CompileError::InvalidLimit("minimum"))
        ));
    }

    #[test]
    fn test_unrepresentable_instance_number_errors() {
        let r = range(false, Some(json!(0)), None);
        assert!(matches!(
            r.validate(&json!(u64::MAX)),
            Err(ValidateError::UnsupportedNumber)
        ));
    }
}
