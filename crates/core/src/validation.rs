//! Boundary validation for incoming requests
//!
//! Callers (CLI, FFI) run this before handing a [`VolcanoInput`] to the
//! estimator. The pipeline itself assumes a well-formed input and does not
//! re-check ranges.

use crate::core_types::volcano::VolcanoInput;
use crate::error::{HazardError, HazardResult};

/// Reject malformed requests.
///
/// # Errors
///
/// `HazardError::InvalidInput` naming the first offending field:
/// - `elevation` not finite
/// - `status` empty or whitespace
/// - `location.latitude` outside [-90, 90] or not finite
/// - `location.longitude` outside [-180, 180] or not finite
pub fn validate_input(input: &VolcanoInput) -> HazardResult<()> {
    if !input.elevation.is_finite() {
        return Err(HazardError::invalid_input(
            "elevation",
            format!("must be finite, got {}", input.elevation),
        ));
    }

    if input.status.trim().is_empty() {
        return Err(HazardError::invalid_input("status", "must not be empty"));
    }

    let latitude = input.location.latitude;
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(HazardError::invalid_input(
            "location.latitude",
            format!("must lie in [-90, 90], got {latitude}"),
        ));
    }

    let longitude = input.location.longitude;
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(HazardError::invalid_input(
            "location.longitude",
            format!("must lie in [-180, 180], got {longitude}"),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::volcano::Location;

    fn input(elevation: f64, status: &str, latitude: f64, longitude: f64) -> VolcanoInput {
        VolcanoInput::new("Test", elevation, status, Location::new(latitude, longitude))
    }

    #[test]
    fn accepts_well_formed_input() {
        assert!(validate_input(&input(3000.0, "Active", 0.0, 0.0)).is_ok());
        assert!(validate_input(&input(-150.0, "Dormant", -90.0, 180.0)).is_ok());
    }

    #[test]
    fn rejects_blank_status() {
        let err = validate_input(&input(1000.0, "  ", 0.0, 0.0)).unwrap_err();
        assert!(matches!(err, HazardError::InvalidInput { field: "status", .. }));
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        assert!(validate_input(&input(1000.0, "Active", 90.5, 0.0)).is_err());
        assert!(validate_input(&input(1000.0, "Active", 0.0, -180.1)).is_err());
        // NaN is never inside a range
        assert!(validate_input(&input(1000.0, "Active", f64::NAN, 0.0)).is_err());
    }

    #[test]
    fn rejects_non_finite_elevation() {
        let err = validate_input(&input(f64::INFINITY, "Active", 0.0, 0.0)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid input: elevation must be finite, got inf"
        );
    }
}
