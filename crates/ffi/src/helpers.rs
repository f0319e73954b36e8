use crate::error::{with_last_error_mut, FfiError, Vector3ErrorCode};
use std::ffi::CString;
use tracing::debug;

/// Set the thread-local error message and code.
pub(crate) fn set_last_error(error: &impl FfiError) {
    debug!(code = ?error.code(), "FFI call failed: {}", error.msg());
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Track an error by setting it in thread-local storage and returning its code.
#[inline]
pub(crate) fn track_error(error: &impl FfiError) -> Vector3ErrorCode {
    set_last_error(error);
    error.code()
}

/// Clear the thread-local error message and code.
/// Called on successful fallible operations.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = Vector3ErrorCode::Ok;
    });
}

/// Run a fallible FFI body, recording the outcome in thread-local storage.
pub(crate) fn handle_ffi_result<E, F>(f: F) -> Vector3ErrorCode
where
    E: FfiError,
    F: FnOnce() -> Result<(), E>,
{
    match f() {
        Ok(()) => {
            clear_last_error();
            Vector3ErrorCode::Ok
        }
        Err(error) => track_error(&error),
    }
}
