//! C-compatible FFI surface
//!
//! Exposes compile and validate to non-Rust callers through opaque
//! pointers and NUL-terminated JSON strings. The layer owns its own JSON
//! parses; every parse, compile, or validation error folds into `false`
//! (or a null handle), and null arguments are always safe.

use std::ffi::{c_char, CStr};
use std::ptr;

use crate::schema::{compile, compile_and_validate, CompiledSchema};

fn parse_input(input: *const c_char) -> Option<serde_json::Value> {
    if input.is_null() {
        return None;
    }
    // SAFETY: null was handled above; callers guarantee a NUL-terminated
    // string.
    let text = unsafe { CStr::from_ptr(input) }.to_str().ok()?;
    serde_json::from_str(text).ok()
}

/// Compiles a schema from a NUL-terminated JSON string.
///
/// Returns an owned handle to release with [`jsonguard_free`], or null on
/// a null input, malformed JSON, or a schema that fails to compile.
///
/// # Safety
///
/// `schema` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn jsonguard_compile(schema: *const c_char) -> *mut CompiledSchema {
    let Some(document) = parse_input(schema) else {
        return ptr::null_mut();
    };
    match compile(&document) {
        Ok(compiled) => Box::into_raw(Box::new(compiled)),
        Err(_) => ptr::null_mut(),
    }
}

/// Validates a NUL-terminated JSON instance against a compiled handle.
///
/// Any error, and any null argument, yields `false`.
///
/// # Safety
///
/// `schema` must be null or an unfreed handle from [`jsonguard_compile`];
/// `instance` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn jsonguard_validate(
    schema: *const CompiledSchema,
    instance: *const c_char,
) -> bool {
    if schema.is_null() {
        return false;
    }
    let Some(document) = parse_input(instance) else {
        return false;
    };
    // SAFETY: non-null handles come from `jsonguard_compile` and stay
    // valid until freed.
    let schema = unsafe { &*schema };
    schema.validate(&document).unwrap_or(false)
}

/// One-shot compile and validate over two NUL-terminated JSON strings.
///
/// The intermediate compiled schema is released before returning. Any
/// error, and any null argument, yields `false`.
///
/// # Safety
///
/// `schema` and `instance` must each be null or valid NUL-terminated
/// strings.
#[no_mangle]
pub unsafe extern "C" fn jsonguard_compile_and_validate(
    schema: *const c_char,
    instance: *const c_char,
) -> bool {
    let (Some(schema), Some(instance)) = (parse_input(schema), parse_input(instance)) else {
        return false;
    };
    compile_and_validate(&schema, &instance).unwrap_or(false)
}

/// Releases a handle from [`jsonguard_compile`]. Null is a safe no-op.
///
/// # Safety
///
/// `schema` must be null or a handle from [`jsonguard_compile`] that has
/// not already been freed.
#[no_mangle]
pub unsafe extern "C" fn jsonguard_free(schema: *mut CompiledSchema) {
    if schema.is_null() {
        return;
    }
    // SAFETY: ownership returns to Rust exactly once per handle.
    drop(unsafe { Box::from_raw(schema) });
}
