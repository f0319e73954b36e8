//! C ABI for the three-component vector magnitude.
//!
//! The single-vector call is total and never touches the error state. The
//! batch call validates its buffers and reports failures through a
//! [`Vector3ErrorCode`] plus a per-thread message (see [`vector3_get_last_error`]).

mod error;
mod helpers;

use std::slice;

use vector3_core::{magnitudes_from_flat, BatchConfig, Vector3};

pub use error::{vector3_get_last_error, vector3_get_last_error_code, Vector3ErrorCode};

use crate::error::DefaultFfiError;
use crate::helpers::handle_ffi_result;

/// C-compatible three-component vector.
/// Keep this layout stable for C/C++/C# consumers.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector3C {
    pub i: f32,
    pub j: f32,
    pub k: f32,
}

impl From<Vector3C> for Vector3 {
    fn from(v: Vector3C) -> Self {
        Vector3::new(v.i, v.j, v.k)
    }
}

impl From<Vector3> for Vector3C {
    fn from(v: Vector3) -> Self {
        Self {
            i: v.i(),
            j: v.j(),
            k: v.k(),
        }
    }
}

/// Euclidean magnitude `sqrt(i² + j² + k²)` of a vector.
///
/// Defined for every input: NaN components yield NaN, infinite components
/// yield `+inf`. Does not modify the last-error state.
#[no_mangle]
pub extern "C" fn vector3_magnitude(v: Vector3C) -> f32 {
    Vector3::from(v).magnitude()
}

/// Compute magnitudes for a flat buffer of `(i, j, k)` triples.
///
/// # Parameters
/// - `components`: Pointer to `len` floats laid out as consecutive triples
/// - `len`: Number of floats in `components` (must be a multiple of 3)
/// - `out`: Pointer to a buffer receiving `len / 3` magnitudes
/// - `out_len`: Capacity of `out` in floats
///
/// # Returns
/// - `Ok` (0) on success, with `out[0..len / 3]` written
/// - `NullPointer` (1) if `len > 0` and either pointer is null
/// - `InvalidParameter` (2) if `len` is not a multiple of 3 or `out_len < len / 3`
///
/// # Safety
/// When `len > 0`, `components` must point to `len` readable floats and `out`
/// must point to `out_len` writable floats. The two buffers must not overlap.
#[no_mangle]
pub unsafe extern "C" fn vector3_magnitudes(
    components: *const f32,
    len: usize,
    out: *mut f32,
    out_len: usize,
) -> Vector3ErrorCode {
    handle_ffi_result(|| -> Result<(), DefaultFfiError> {
        if len == 0 {
            return Ok(());
        }
        if components.is_null() {
            return Err(DefaultFfiError::null_pointer("components"));
        }
        if out.is_null() {
            return Err(DefaultFfiError::null_pointer("out"));
        }

        // SAFETY: caller guarantees `components` points to `len` readable floats.
        let input = unsafe { slice::from_raw_parts(components, len) };
        let result = magnitudes_from_flat(input, &BatchConfig::default())?;

        if out_len < result.len() {
            return Err(DefaultFfiError::invalid_parameter(format!(
                "Output buffer holds {out_len} values, {} required",
                result.len()
            )));
        }

        // SAFETY: caller guarantees `out` points to `out_len >= result.len()` writable floats.
        let output = unsafe { slice::from_raw_parts_mut(out, result.len()) };
        output.copy_from_slice(&result);
        Ok(())
    })
}
