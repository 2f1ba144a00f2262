//! jsonguard - A strict, deterministic JSON Schema validator
//!
//! Implements a pragmatic subset of JSON Schema Draft 7. A schema document
//! is compiled once into an immutable, typed representation; the compiled
//! schema then validates any number of instances without re-reading the
//! schema JSON. Unrecognized keywords reject at compile time.

pub mod ffi;
pub mod schema;
pub mod value;

pub use schema::{
    compile, compile_and_validate, CompileError, CompiledSchema, Error, ValidateError,
};
