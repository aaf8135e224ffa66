use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;
use volcano_hazard_core::HazardError;

/// Common interface for errors crossing the FFI boundary.
///
/// - `code()` - Returns the error code passed back to the caller
/// - `msg()` - Returns the message stored for `volcano_hazard_get_last_error`
pub(crate) trait FfiError {
    fn code(&self) -> HazardErrorCode;

    fn msg(&self) -> &str;
}

/// Default `FfiError` for boundary failures and converted pipeline errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultFfiError {
    code: HazardErrorCode,
    msg: String,
}

impl DefaultFfiError {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"status"`, `"out_json"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: HazardErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }

    /// Create error for a C string that is not valid UTF-8.
    pub fn invalid_utf8(param_name: &str) -> Self {
        Self {
            code: HazardErrorCode::InvalidUtf8,
            msg: format!("Parameter '{param_name}' is not valid UTF-8"),
        }
    }

    /// Create error for a panic caught inside the pipeline.
    pub fn panicked(stage: &str) -> Self {
        Self {
            code: HazardErrorCode::ComputationFailed,
            msg: format!("computation failed: panic during {stage}"),
        }
    }

    /// Create error for an output that could not be encoded.
    pub fn encoding(reason: &str) -> Self {
        Self {
            code: HazardErrorCode::ComputationFailed,
            msg: format!("computation failed: could not encode report ({reason})"),
        }
    }
}

impl From<&HazardError> for DefaultFfiError {
    fn from(error: &HazardError) -> Self {
        let code = match error {
            HazardError::InvalidInput { .. } => HazardErrorCode::InvalidInput,
            HazardError::InvalidParameters(_) => HazardErrorCode::InvalidParameters,
            HazardError::ComputationFailed { .. } => HazardErrorCode::ComputationFailed,
        };
        Self {
            code,
            msg: error.to_string(),
        }
    }
}

impl FfiError for DefaultFfiError {
    fn code(&self) -> HazardErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// FFI error codes returned by hazard functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HazardErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// A string argument was not valid UTF-8.
    InvalidUtf8 = 2,

    /// Request rejected by input validation (elevation, status, coordinates).
    InvalidInput = 3,

    /// Model parameters rejected.
    InvalidParameters = 4,

    /// A pipeline stage produced a non-finite value or panicked. No report
    /// was produced.
    ComputationFailed = 5,
}

thread_local! {
    /// Most recent FFI error on this thread (C string, error code).
    /// The `CString` is owned here so the pointer handed out stays valid.
    static LAST_ERROR: RefCell<(Option<CString>, HazardErrorCode)> = const { RefCell::new((None, HazardErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, HazardErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, HazardErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if the last call on this thread failed.
/// - `null` if it succeeded.
///
/// The pointer is valid until the next hazard call on this thread.
/// **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```c
/// char* json = NULL;
/// HazardErrorCode err = volcano_hazard_estimate_json("Etna", 3357.0, "Active", 37.75, 14.99, 0, false, &json);
/// if (err != Ok) {
///     fprintf(stderr, "estimate failed: %s\n", volcano_hazard_get_last_error());
/// }
/// ```
#[no_mangle]
pub extern "C" fn volcano_hazard_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code (`Ok` if the last call succeeded).
#[no_mangle]
pub extern "C" fn volcano_hazard_get_last_error_code() -> HazardErrorCode {
    with_last_error(|(_cstring, code)| *code)
}
