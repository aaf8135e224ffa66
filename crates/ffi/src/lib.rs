//! C ABI for the volcano hazard pipeline
//!
//! One call per request: raw fields in, wire JSON out as an owned C string.
//! Failures return a non-zero [`HazardErrorCode`] and leave a message in
//! thread-local storage for `volcano_hazard_get_last_error`.
//!
//! All functions are safe to call concurrently from multiple threads; no
//! state is shared between calls apart from each thread's last error.

mod error;
mod estimate;
mod helpers;

pub use error::{volcano_hazard_get_last_error, volcano_hazard_get_last_error_code, HazardErrorCode};
pub use estimate::{
    volcano_hazard_estimate_json, volcano_hazard_estimate_json_with_params,
    volcano_hazard_free_string,
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::ffi::{CStr, CString};
    use std::os::raw::c_char;
    use std::ptr;

    fn estimate(
        name: Option<&str>,
        elevation: f64,
        status: Option<&str>,
        latitude: f64,
        longitude: f64,
        seed: Option<u64>,
    ) -> (HazardErrorCode, Option<String>) {
        let name = name.map(|n| CString::new(n).unwrap());
        let status = status.map(|s| CString::new(s).unwrap());
        let mut out: *mut c_char = ptr::null_mut();

        let code = unsafe {
            volcano_hazard_estimate_json(
                name.as_ref().map_or(ptr::null(), |n| n.as_ptr()),
                elevation,
                status.as_ref().map_or(ptr::null(), |s| s.as_ptr()),
                latitude,
                longitude,
                seed.unwrap_or(0),
                seed.is_some(),
                &raw mut out,
            )
        };

        let json = (!out.is_null()).then(|| {
            let text = unsafe { CStr::from_ptr(out) }.to_str().unwrap().to_owned();
            unsafe { volcano_hazard_free_string(out) };
            text
        });
        (code, json)
    }

    fn last_error() -> String {
        let ptr = volcano_hazard_get_last_error();
        assert!(!ptr.is_null());
        unsafe { CStr::from_ptr(ptr) }.to_str().unwrap().to_owned()
    }

    #[test]
    fn estimate_returns_wire_json() {
        let (code, json) = estimate(Some("Etna"), 3357.0, Some("Active"), 37.75, 14.99, Some(1));
        assert_eq!(code, HazardErrorCode::Ok);
        assert_eq!(volcano_hazard_get_last_error_code(), HazardErrorCode::Ok);
        assert!(volcano_hazard_get_last_error().is_null());

        let value: Value = serde_json::from_str(&json.unwrap()).unwrap();
        assert_eq!(value["impact_points"].as_array().unwrap().len(), 5);
        assert!(value["final_decision"].is_string());
    }

    #[test]
    fn seeded_calls_repeat() {
        let first = estimate(None, 2000.0, Some("active"), 0.0, 0.0, Some(77)).1;
        let second = estimate(None, 2000.0, Some("active"), 0.0, 0.0, Some(77)).1;
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn unseeded_call_succeeds() {
        let (code, json) = estimate(Some("Kilauea"), 1247.0, Some("Active"), 19.4, -155.3, None);
        assert_eq!(code, HazardErrorCode::Ok);
        assert!(json.is_some());
    }

    #[test]
    fn null_status_is_rejected() {
        let (code, json) = estimate(Some("X"), 1000.0, None, 0.0, 0.0, Some(1));
        assert_eq!(code, HazardErrorCode::NullPointer);
        assert!(json.is_none());
        assert_eq!(last_error(), "Parameter 'status' cannot be null");
    }

    #[test]
    fn invalid_input_is_rejected_before_estimation() {
        let (code, json) = estimate(Some("X"), 1000.0, Some("Active"), 95.0, 0.0, Some(1));
        assert_eq!(code, HazardErrorCode::InvalidInput);
        assert!(json.is_none());
        assert!(last_error().contains("location.latitude"));

        let (code, _) = estimate(Some("X"), f64::NAN, Some("Active"), 0.0, 0.0, Some(1));
        assert_eq!(code, HazardErrorCode::InvalidInput);
        assert_eq!(volcano_hazard_get_last_error_code(), HazardErrorCode::InvalidInput);
    }

    #[test]
    fn null_output_pointer_is_rejected() {
        let status = CString::new("Active").unwrap();
        let code = unsafe {
            volcano_hazard_estimate_json(
                ptr::null(),
                1000.0,
                status.as_ptr(),
                0.0,
                0.0,
                0,
                false,
                ptr::null_mut(),
            )
        };
        assert_eq!(code, HazardErrorCode::NullPointer);
    }

    #[test]
    fn parameter_overrides_are_validated() {
        let status = CString::new("Active").unwrap();
        let params = CString::new(r#"{"risk": {"low": 3.0}}"#).unwrap();
        let mut out: *mut c_char = ptr::null_mut();

        let code = unsafe {
            volcano_hazard_estimate_json_with_params(
                ptr::null(),
                1000.0,
                status.as_ptr(),
                0.0,
                0.0,
                5,
                true,
                params.as_ptr(),
                &raw mut out,
            )
        };
        assert_eq!(code, HazardErrorCode::InvalidParameters);
        assert!(out.is_null());

        let params = CString::new(r#"{"physics": {"particle_count": 50}}"#).unwrap();
        let code = unsafe {
            volcano_hazard_estimate_json_with_params(
                ptr::null(),
                1000.0,
                status.as_ptr(),
                0.0,
                0.0,
                5,
                true,
                params.as_ptr(),
                &raw mut out,
            )
        };
        assert_eq!(code, HazardErrorCode::Ok);
        assert!(!out.is_null());
        unsafe { volcano_hazard_free_string(out) };
    }

    #[test]
    fn freeing_null_is_a_no_op() {
        unsafe { volcano_hazard_free_string(ptr::null_mut()) };
    }
}
