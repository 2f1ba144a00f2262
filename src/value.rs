//! Read-only adaptor over JSON values
//!
//! Both schemas and instances arrive as `serde_json::Value`. Keyword logic
//! goes through [`view`] rather than matching `Value` directly, so the
//! integer/float split and the refusal of unrepresentable numbers live in
//! one place.

use serde_json::{Map, Value};

/// A borrowed, tag-classified view of a JSON value.
///
/// Numbers are split: anything representable as `i64` is `Int`, everything
/// else carrying a double is `Float`.
#[derive(Debug, Clone, Copy)]
pub enum Json<'a> {
    Object(&'a Map<String, Value>),
    Array(&'a [Value]),
    Str(&'a str),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
}

/// Classifies a value.
///
/// Returns `None` for a number with no 64-bit representation (a `u64`
/// beyond `i64::MAX`, or an arbitrary-precision literal). Callers surface
/// that as their taxonomy's unsupported-number error instead of guessing a
/// coercion.
pub fn view(value: &Value) -> Option<Json<'_>> {
    Some(match value {
        Value::Object(map) => Json::Object(map),
        Value::Array(items) => Json::Array(items),
        Value::String(s) => Json::Str(s),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Json::Int(i)
            } else if n.is_f64() {
                Json::Float(n.as_f64()?)
            } else {
                return None;
            }
        }
        Value::Bool(b) => Json::Bool(*b),
        Value::Null => Json::Null,
    })
}

/// Returns the JSON type name for error messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) => {
            if n.as_i64().is_some() {
                "integer"
            } else {
                "number"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// String length in Unicode code points, not bytes.
pub fn codepoint_len(s: &str) -> usize {
    s.chars().count()
}

/// A numeric keyword parameter narrowed to its representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Num {
    Int(i64),
    Float(f64),
}

impl Num {
    /// Integer-space coercion: floats truncate, saturating at the `i64`
    /// range.
    pub fn to_i64(self) -> i64 {
        match self {
            Num::Int(i) => i,
            Num::Float(f) => f as i64,
        }
    }

    /// Float-space coercion: integers widen.
    pub fn to_f64(self) -> f64 {
        match self {
            Num::Int(i) => i as f64,
            Num::Float(f) => f,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_view_splits_numbers() {
        assert!(matches!(view(&json!(1)), Some(Json::Int(1))));
        assert!(matches!(view(&json!(-3)), Some(Json::Int(-3))));
        assert!(matches!(view(&json!(1.0)), Some(Json::Float(f)) if f == 1.0));
        assert!(matches!(view(&json!(1.5)), Some(Json::Float(f)) if f == 1.5));
    }

    #[test]
    fn test_view_refuses_unrepresentable_numbers() {
        assert!(view(&json!(u64::MAX)).is_none());
        assert!(matches!(view(&json!(i64::MAX)), Some(Json::Int(_))));
    }

    #[test]
    fn test_type_names() {
        assert_eq!(type_name(&json!(null)), "null");
        assert_eq!(type_name(&json!(true)), "boolean");
        assert_eq!(type_name(&json!(1)), "integer");
        assert_eq!(type_name(&json!(1.5)), "number");
        assert_eq!(type_name(&json!("s")), "string");
        assert_eq!(type_name(&json!([])), "array");
        assert_eq!(type_name(&json!({})), "object");
    }

    #[test]
    fn test_codepoint_len_counts_scalars_not_bytes() {
        assert_eq!(codepoint_len(""), 0);
        assert_eq!(codepoint_len("abc"), 3);
        // U+1F600 is four bytes in UTF-8 but one code point
        assert_eq!("😀".len(), 4);
        assert_eq!(codepoint_len("😀"), 1);
    }

    #[test]
    fn test_num_coercions() {
        assert_eq!(Num::Int(7).to_f64(), 7.0);
        assert_eq!(Num::Float(7.9).to_i64(), 7);
        assert_eq!(Num::Float(-7.9).to_i64(), -7);
    }
}
