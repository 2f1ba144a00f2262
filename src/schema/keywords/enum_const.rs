//! The `enum` and `const` keywords
//!
//! Stores an owned copy of the acceptable values; an instance passes when
//! it is deep-equal to any of them. Numeric comparison crosses the
//! integer/float split: a float equals an integer when its fractional
//! part is zero and its truncation equals the integer.
//!
//! Array equality is set-like (equal lengths, and every stored element
//! has a deep-equal counterpart anywhere in the instance array), not
//! positional.

use serde_json::Value;

use crate::schema::errors::{CompileError, CompileResult, ValidateError, ValidateResult};
use crate::value::{view, Json};

/// Compiled `enum` (or a singleton `const`).
#[derive(Debug)]
pub struct ValueSet {
    values: Vec<Value>,
}

impl ValueSet {
    pub(crate) fn compile_enum(value: &Value) -> CompileResult<Self> {
        let Value::Array(values) = value else {
            return Err(CompileError::InvalidEnum);
        };
        Ok(Self {
            values: values.clone(),
        })
    }

    pub(crate) fn compile_const(value: &Value) -> Self {
        Self {
            values: vec![value.clone()],
        }
    }

    pub(crate) fn validate(&self, instance: &Value) -> ValidateResult<bool> {
        for value in &self.values {
            if deep_equal(value, instance)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

/// Structural equality with the numeric cross-compare rule.
fn deep_equal(stored: &Value, instance: &Value) -> ValidateResult<bool> {
    let left = view(stored).ok_or(ValidateError::UnsupportedNumber)?;
    let right = view(instance).ok_or(ValidateError::UnsupportedNumber)?;
    Ok(match (left, right) {
        (Json::Null, Json::Null) => true,
        (Json::Bool(a), Json::Bool(b)) => a == b,
        (Json::Str(a), Json::Str(b)) => a == b,
        (Json::Int(a), Json::Int(b)) => a == b,
        (Json::Float(a), Json::Float(b)) => a == b,
        (Json::Int(i), Json::Float(f)) | (Json::Float(f), Json::Int(i)) => int_equals_float(i, f),
        (Json::Object(a), Json::Object(b)) => {
            if a.len() != b.len() {
                return Ok(false);
            }
            for (key, left_value) in a {
                let Some(right_value) = b.get(key) else {
                    return Ok(false);
                };
                if !deep_equal(left_value, right_value)? {
                    return Ok(false);
                }
            }
            true
        }
        (Json::Array(a), Json::Array(b)) => {
            if a.len() != b.len() {
                return Ok(false);
            }
            for left_value in a {
                let mut found = false;
                for right_value in b {
                    if deep_equal(left_value, right_value)? {
                        found = true;
                        break;
                    }
                }
                if !found {
                    return Ok(false);
                }
            }
            true
        }
        _ => false,
    })
}

fn int_equals_float(i: i64, f: f64) -> bool {
    f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 && f as i64 == i
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn value_set(value: Value) -> ValueSet {
        ValueSet::compile_enum(&value).unwrap()
    }

    #[test]
    fn test_enum_membership() {
        let set = value_set(json!(["red", "green", 7, null]));
        assert!(set.validate(&json!("red")).unwrap());
        assert!(set.validate(&json!(7)).unwrap());
        assert!(set.validate(&json!(null)).unwrap());
        assert!(!set.validate(&json!("blue")).unwrap());
        assert!(!set.validate(&json!(8)).unwrap());
    }

    #[test]
    fn test_const_is_a_singleton() {
        let set = ValueSet::compile_const(&json!({"a": 1}));
        assert!(set.validate(&json!({"a": 1})).unwrap());
        assert!(!set.validate(&json!({"a": 2})).unwrap());
        assert!(!set.validate(&json!({"a": 1, "b": 2})).unwrap());
    }

    #[test]
    fn test_numeric_cross_compare() {
        let set = value_set(json!([7]));
        assert!(set.validate(&json!(7.0)).unwrap());
        assert!(!set.validate(&json!(7.5)).unwrap());

        let set = value_set(json!([7.0]));
        assert!(set.validate(&json!(7)).unwrap());
    }

    #[test]
    fn test_object_equality_is_key_wise() {
        let set = ValueSet::compile_const(&json!({"a": 1, "b": {"c": true}}));
        assert!(set.validate(&json!({"b": {"c": true}, "a": 1})).unwrap());
        assert!(!set.validate(&json!({"a": 1, "b": {"c": false}})).unwrap());
        assert!(!set.validate(&json!({"a": 1})).unwrap());
    }

    #[test]
    fn test_array_equality_is_set_like() {
        let set = ValueSet::compile_const(&json!({"a": [1, 2]}));
        assert!(set.validate(&json!({"a": [2, 1]})).unwrap());
        assert!(set.validate(&json!({"a": [1, 2]})).unwrap());
        assert!(!set.validate(&json!({"a": [1, 3]})).unwrap());
        assert!(!set.validate(&json!({"a": [1, 2, 3]})).unwrap());
        assert!(!set.validate(&json!({"a": [1]})).unwrap());
    }

    #[test]
    fn test_tag_mismatch_is_unequal() {
        let set = value_set(json!(["1", true, [1]]));
        assert!(!set.validate(&json!(1)).unwrap());
        assert!(!set.validate(&json!(null)).unwrap());
        assert!(!set.validate(&json!({"0": 1})).unwrap());
    }

    #[test]
    fn test_non_array_enum_rejected() {
        assert!(matches!(
            ValueSet::compile_enum(&json!("red")),
            Err(CompileError::InvalidEnum)
        ));
    }

    #[test]
    fn test_unrepresentable_number_errors() {
        let set = value_set(json!([1]));
        assert!(matches!(
            set.validate(&json!(u64::MAX)),
            Err(ValidateError::UnsupportedNumber)
        ));
    }
}
