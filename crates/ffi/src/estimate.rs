use std::ffi::CString;
use std::os::raw::c_char;
use std::panic::{self, AssertUnwindSafe};
use volcano_hazard_core::{
    validate_input, HazardError, HazardEstimator, HazardParameters, Location, VolcanoInput,
};

use crate::error::{DefaultFfiError, HazardErrorCode};
use crate::helpers::{optional_str, required_str, track_error, track_result};

/// Raw request fields as received from C.
struct RawRequest {
    name: *const c_char,
    elevation: f64,
    status: *const c_char,
    latitude: f64,
    longitude: f64,
    seed: Option<u64>,
    params_json: *const c_char,
}

/// Estimate hazard metrics and return the report as a JSON C string.
///
/// # Parameters
/// - `name`: Volcano name (informational). May be null, which reads as `"unnamed"`.
/// - `elevation`: Vent elevation in meters; negative for submarine vents.
/// - `status`: Activity label, e.g. `"Active"`, `"Dormant"`, `"Extinct"`. Required.
/// - `latitude`, `longitude`: Decimal degrees.
/// - `seed`, `use_seed`: When `use_seed` is true the estimate is repeatable for
///   the same inputs and seed; otherwise a thread-local generator is used.
/// - `out_json`: Receives an owned, NUL-terminated JSON string on success.
///   Release it with `volcano_hazard_free_string`.
///
/// # Returns
/// - `HazardErrorCode::Ok` on success
/// - `NullPointer` / `InvalidUtf8` for unusable pointer arguments
/// - `InvalidInput` when validation rejects the request
/// - `ComputationFailed` when a stage aborts or panics; no report is returned
///
/// On failure `*out_json` is left untouched and the message is available from
/// `volcano_hazard_get_last_error`.
///
/// # Safety
/// - `name` must be null or a valid NUL-terminated string.
/// - `status` must be a valid NUL-terminated string.
/// - `out_json` must be a valid pointer to writable storage for one `char*`.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn volcano_hazard_estimate_json(
    name: *const c_char,
    elevation: f64,
    status: *const c_char,
    latitude: f64,
    longitude: f64,
    seed: u64,
    use_seed: bool,
    out_json: *mut *mut c_char,
) -> HazardErrorCode {
    let request = RawRequest {
        name,
        elevation,
        status,
        latitude,
        longitude,
        seed: use_seed.then_some(seed),
        params_json: std::ptr::null(),
    };
    // SAFETY: pointer contracts forwarded from this function's caller
    unsafe { estimate_into(&request, out_json) }
}

/// Like `volcano_hazard_estimate_json`, with model parameters overridden by a
/// (possibly partial) JSON object.
///
/// # Returns
/// Additionally `InvalidParameters` when `params_json` does not parse or the
/// resulting parameter set is rejected.
///
/// # Safety
/// Same contract as `volcano_hazard_estimate_json`; `params_json` must be null
/// or a valid NUL-terminated string. Null means default parameters.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn volcano_hazard_estimate_json_with_params(
    name: *const c_char,
    elevation: f64,
    status: *const c_char,
    latitude: f64,
    longitude: f64,
    seed: u64,
    use_seed: bool,
    params_json: *const c_char,
    out_json: *mut *mut c_char,
) -> HazardErrorCode {
    let request = RawRequest {
        name,
        elevation,
        status,
        latitude,
        longitude,
        seed: use_seed.then_some(seed),
        params_json,
    };
    // SAFETY: pointer contracts forwarded from this function's caller
    unsafe { estimate_into(&request, out_json) }
}

/// Free a string returned by `volcano_hazard_estimate_json`.
///
/// # Safety
/// `json` must be null or a pointer previously returned through `out_json`
/// and not yet freed.
#[no_mangle]
pub unsafe extern "C" fn volcano_hazard_free_string(json: *mut c_char) {
    if !json.is_null() {
        // SAFETY: The pointer was created by `CString::into_raw` in `estimate_into`
        drop(unsafe { CString::from_raw(json) });
    }
}

unsafe fn estimate_into(request: &RawRequest, out_json: *mut *mut c_char) -> HazardErrorCode {
    if out_json.is_null() {
        return track_error(&DefaultFfiError::null_pointer("out_json"));
    }

    // SAFETY: pointer contracts forwarded from the exported functions
    let json = match track_result(unsafe { estimate_report_json(request) }) {
        Ok(json) => json,
        Err(code) => return code,
    };

    // SAFETY: `out_json` checked non-null above; writability is the caller's contract
    unsafe { *out_json = json.into_raw() };
    HazardErrorCode::Ok
}

unsafe fn estimate_report_json(request: &RawRequest) -> Result<CString, DefaultFfiError> {
    // SAFETY: caller guarantees each pointer is null or NUL-terminated
    let name = unsafe { optional_str(request.name, "name") }?.unwrap_or("unnamed");
    let status = unsafe { required_str(request.status, "status") }?;
    let params_json = unsafe { optional_str(request.params_json, "params_json") }?;

    let params = match params_json {
        Some(text) => serde_json::from_str::<HazardParameters>(text).map_err(|err| {
            DefaultFfiError::from(&HazardError::InvalidParameters(err.to_string()))
        })?,
        None => HazardParameters::default(),
    };
    let estimator = HazardEstimator::new(params).map_err(|err| DefaultFfiError::from(&err))?;

    let input = VolcanoInput::new(
        name,
        request.elevation,
        status,
        Location::new(request.latitude, request.longitude),
    );
    validate_input(&input).map_err(|err| DefaultFfiError::from(&err))?;

    let seed = request.seed;
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| match seed {
        Some(seed) => estimator.estimate_seeded(&input, seed),
        None => estimator.estimate(&input, &mut rand::rng()),
    }));

    let report = match outcome {
        Ok(result) => result.map_err(|err| DefaultFfiError::from(&err))?,
        Err(_) => {
            tracing::error!("Panic caught during hazard estimate for '{}'", input.name);
            return Err(DefaultFfiError::panicked("hazard estimate"));
        }
    };

    let json = serde_json::to_string(&report)
        .map_err(|err| DefaultFfiError::encoding(&err.to_string()))?;
    CString::new(json).map_err(|err| DefaultFfiError::encoding(&err.to_string()))
}
