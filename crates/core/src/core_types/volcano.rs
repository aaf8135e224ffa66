//! Request record describing the volcano to assess.

use serde::{Deserialize, Serialize};

/// Geographic position of the vent in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    /// Latitude, expected in [-90, 90]
    pub latitude: f64,
    /// Longitude, expected in [-180, 180]
    pub longitude: f64,
}

impl Location {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// One hazard request.
///
/// Built once per request and never mutated. `name` is informational and does
/// not influence any computed value. `elevation` is a plain scalar in meters;
/// below-sea-level vents may pass a negative value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolcanoInput {
    pub name: String,
    pub elevation: f64,
    pub status: String,
    pub location: Location,
}

impl VolcanoInput {
    pub fn new(
        name: impl Into<String>,
        elevation: f64,
        status: impl Into<String>,
        location: Location,
    ) -> Self {
        Self {
            name: name.into(),
            elevation,
            status: status.into(),
            location,
        }
    }

    /// Input for the elevation-only variant of the model: an active vent on
    /// the equator at the prime meridian.
    pub fn elevation_only(elevation: f64) -> Self {
        Self::new("unnamed", elevation, "active", Location::default())
    }
}
