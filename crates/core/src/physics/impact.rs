//! Energy and temperature at points along the blast radius
//!
//! Points sit at fixed fractions of the blast distance (vent, quarter, half,
//! three-quarters, rim by default). At each point:
//!
//! - Energy decays with the inverse square of distance beyond a reference
//!   radius: `E(d) = E₀ / (1 + (d / d_ref)²)`
//! - Temperature relaxes exponentially from the erupted-mix temperature toward
//!   ambient air: `T(d) = T_amb + (T_peak - T_amb) × exp(-d / λ)` with `λ = ratio × blast`
//!
//! Temperatures never drop below ambient.

use crate::core_types::units::{Celsius, Kelvin, Kilometers, Meters};
use crate::error::{ensure_finite, HazardResult};
use crate::params::PhysicsParameters;
use serde::Serialize;

/// One sampled point on the impact profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactPoint {
    /// Distance from the vent, rounded to 0.01 km
    pub distance_km: Kilometers,
    /// Kinetic/thermal energy delivered, truncated to whole joules
    pub energy_j: u64,
    /// Temperature, truncated to whole degrees Celsius
    pub temp_c: i64,
    pub label: String,
}

/// Energy at a distance from the vent (J).
pub fn energy_at(vent_energy_j: f64, distance: Meters, params: &PhysicsParameters) -> f64 {
    let scaled = (*distance).max(0.0) / params.impact_reference_distance_m;
    vent_energy_j.max(0.0) / (1.0 + scaled * scaled)
}

/// Temperature at a distance from the vent, floored at ambient.
pub fn temperature_at(
    peak: Kelvin,
    ambient: Celsius,
    distance: Meters,
    decay_length: Meters,
) -> Celsius {
    let peak = *peak.to_celsius();
    let ambient = *ambient;
    // decay length is at least a meter so the exponent stays finite
    let decay = (-(*distance).max(0.0) / (*decay_length).max(1.0)).exp();

    Celsius::new((ambient + (peak - ambient) * decay).max(ambient))
}

fn point_label(ratio: f64) -> String {
    let percent = (ratio * 100.0).round() as u32;
    match percent {
        0 => "Vent (0%)".to_string(),
        100 => "Blast rim (100%)".to_string(),
        p => format!("{p}% of blast radius"),
    }
}

/// Evaluate the impact profile.
///
/// # Arguments
/// * `blast` - Blast distance the ratios are taken against
/// * `peak` - Erupted-mix temperature at the vent
/// * `ambient` - Air temperature at the vent
/// * `vent_pressure` - Sampled (noise-scaled) pressure, converted to energy via the reference volume
///
/// # Errors
///
/// `ComputationFailed` if any energy or temperature is non-finite.
pub fn impact_points(
    blast: Meters,
    peak: Kelvin,
    ambient: Celsius,
    vent_pressure: f64,
    params: &PhysicsParameters,
) -> HazardResult<Vec<ImpactPoint>> {
    let vent_energy = vent_pressure * params.impact_reference_volume_m3;
    let decay_length = *blast * params.thermal_decay_ratio;

    params
        .impact_ratios
        .iter()
        .map(|&ratio| {
            let distance = Meters::new(*blast * ratio);
            let energy = ensure_finite(energy_at(vent_energy, distance, params), "impact energy")?;
            let temp = temperature_at(peak, ambient, distance, Meters::new(decay_length));
            let temp = ensure_finite(*temp, "impact temperature")?;

            Ok(ImpactPoint {
                distance_km: distance.to_kilometers().rounded(2),
                energy_j: energy as u64,
                temp_c: temp as i64,
                label: point_label(ratio),
            })
        })
        .collect()
}
