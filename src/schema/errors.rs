//! Error types for schema compilation and validation
//!
//! Two disjoint taxonomies: [`CompileError`] for malformed schemas (always
//! fatal; no partial compilation is ever returned) and [`ValidateError`]
//! for faults during validation, which are distinct from an ordinary
//! `false` verdict and never folded into one.

use thiserror::Error;

/// Result type for schema compilation
pub type CompileResult<T> = Result<T, CompileError>;

/// Result type for validation
pub type ValidateResult<T> = Result<T, ValidateError>;

/// Errors from compiling a schema document
#[derive(Debug, Error)]
pub enum CompileError {
    /// `type` names an unknown type or has the wrong shape
    #[error("`type` must be one of integer, number, string, object, array, boolean, null, or an array of those")]
    InvalidType,

    /// An item/length bound is not a number
    #[error("`{0}` must be a number")]
    InvalidBound(&'static str),

    /// An item/length bound is a float with no exact integer value
    #[error("`{0}` must be an integer-valued number")]
    NonIntegralBound(&'static str),

    /// A `minimum`/`maximum` family limit is not a number
    #[error("`{0}` must be a number")]
    InvalidLimit(&'static str),

    /// `multipleOf` is not a number
    #[error("`multipleOf` must be a number")]
    InvalidMultipleOf,

    /// `multipleOf` is zero or negative
    #[error("`multipleOf` must be strictly positive")]
    MultipleOfNotPositive,

    /// A pattern-bearing keyword holds a non-string
    #[error("`{0}` must be a string")]
    InvalidPattern(&'static str),

    /// The regex engine rejected a pattern
    #[error("invalid regular expression: {0}")]
    Regex(#[from] regex::Error),

    /// A combinator keyword is not an array
    #[error("`{0}` must be an array of schemas")]
    InvalidCombinator(&'static str),

    /// A combinator keyword is an empty array
    #[error("`{0}` must not be empty")]
    EmptyCombinator(&'static str),

    /// `enum` is not an array
    #[error("`enum` must be an array")]
    InvalidEnum,

    /// `properties`/`patternProperties` is not an object
    #[error("`{0}` must be an object mapping names to schemas")]
    InvalidProperties(&'static str),

    /// `required` is not an array of strings
    #[error("`required` must be an array of strings")]
    InvalidRequired,

    /// The schema object contains a keyword this validator does not support
    #[error("unsupported keyword `{0}`")]
    UnsupportedKeyword(String),

    /// The top-level schema is neither an object nor a boolean
    #[error("schema must be an object or a boolean, got {0}")]
    UnsupportedTopLevel(&'static str),

    /// A numeric keyword parameter has no 64-bit representation
    #[error("number out of supported range")]
    UnsupportedNumber,
}

/// Errors raised while validating an instance
#[derive(Debug, Error)]
pub enum ValidateError {
    /// An instance number has no 64-bit representation
    #[error("number out of supported range")]
    UnsupportedNumber,
}

/// Either side of the compile-then-validate pipeline
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Compile(#[from] CompileError),
    #[error(transparent)]
    Validate(#[from] ValidateError),
}
