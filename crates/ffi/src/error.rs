use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

use vector3_core::Vector3Error;

/// Common interface for errors reported across the FFI boundary.
///
/// - `code()` - Returns the error code to be passed across FFI boundary
/// - `msg()` - Returns the error message for diagnostic purposes
pub(crate) trait FfiError {
    /// Returns the error code to be returned across the FFI boundary.
    fn code(&self) -> Vector3ErrorCode;

    /// Returns the human-readable error message.
    fn msg(&self) -> &str;
}

/// Default implementation of `FfiError` for the failures the C API can report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultFfiError {
    code: Vector3ErrorCode,
    msg: String,
}

impl DefaultFfiError {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"components"`, `"out"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: Vector3ErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }

    /// Create error for invalid parameter.
    pub fn invalid_parameter(message: String) -> Self {
        Self {
            code: Vector3ErrorCode::InvalidParameter,
            msg: message,
        }
    }
}

impl From<Vector3Error> for DefaultFfiError {
    fn from(error: Vector3Error) -> Self {
        Self::invalid_parameter(error.to_string())
    }
}

impl FfiError for DefaultFfiError {
    fn code(&self) -> Vector3ErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// FFI error codes returned by fallible vector functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vector3ErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// Invalid parameter: a buffer length did not match the call contract.
    InvalidParameter = 2,
}

thread_local! {
    /// Thread-local storage for the most recent FFI error (C string, error code).
    /// The `CString` is stored so the pointer handed out by `vector3_get_last_error` stays valid.
    static LAST_ERROR: RefCell<(Option<CString>, Vector3ErrorCode)> = const { RefCell::new((None, Vector3ErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, Vector3ErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, Vector3ErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if an error occurred.
/// - `null` if the last fallible call on this thread succeeded.
///
/// Error state is per-thread. The returned pointer is valid until the next
/// fallible FFI call on this thread.
///
/// **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```c
/// Vector3ErrorCode err = vector3_magnitudes(buf, len, out, out_len);
/// if (err != Ok) {
///     const char* error = vector3_get_last_error();
///     if (error) {
///         printf("magnitude batch failed: %s\n", error);
///     }
/// }
/// ```
#[no_mangle]
pub extern "C" fn vector3_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code (`Ok` if none).
#[no_mangle]
pub extern "C" fn vector3_get_last_error_code() -> Vector3ErrorCode {
    with_last_error(|(_cstring, code)| *code)
}
