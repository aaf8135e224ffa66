use crate::error::{with_last_error_mut, DefaultFfiError, FfiError, HazardErrorCode};
use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Set the thread-local error message and code.
pub(crate) fn set_last_error(error: &impl FfiError) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Record an error in thread-local storage and return its code.
#[inline]
pub(crate) fn track_error(error: &impl FfiError) -> HazardErrorCode {
    set_last_error(error);
    error.code()
}

/// Record the outcome of an operation: clears the last error on success,
/// stores it on failure.
pub(crate) fn track_result<T>(result: Result<T, DefaultFfiError>) -> Result<T, HazardErrorCode> {
    match result {
        Ok(value) => {
            clear_last_error();
            Ok(value)
        }
        Err(err) => Err(track_error(&err)),
    }
}

/// Clear the thread-local error message and code.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = HazardErrorCode::Ok;
    });
}

/// Borrow a required C string argument as UTF-8.
///
/// # Safety
/// `ptr` must be null or point to a NUL-terminated string that outlives the
/// returned borrow.
pub(crate) unsafe fn required_str<'a>(
    ptr: *const c_char,
    param_name: &str,
) -> Result<&'a str, DefaultFfiError> {
    if ptr.is_null() {
        return Err(DefaultFfiError::null_pointer(param_name));
    }
    // SAFETY: non-null and NUL-terminated per the caller contract
    let raw = unsafe { CStr::from_ptr(ptr) };
    raw.to_str()
        .map_err(|_| DefaultFfiError::invalid_utf8(param_name))
}

/// Like [`required_str`], but a null pointer yields `None`.
///
/// # Safety
/// Same contract as [`required_str`].
pub(crate) unsafe fn optional_str<'a>(
    ptr: *const c_char,
    param_name: &str,
) -> Result<Option<&'a str>, DefaultFfiError> {
    if ptr.is_null() {
        Ok(None)
    } else {
        // SAFETY: forwarded caller contract
        unsafe { required_str(ptr, param_name) }.map(Some)
    }
}
