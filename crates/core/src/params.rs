//! Tunable model constants
//!
//! Every constant the pipeline uses lives here, grouped by stage. The values
//! are one self-consistent calibration of a qualitative model, not physical
//! laws (the lapse rate and gravity excepted). Callers can deserialise a
//! partial override from JSON; missing fields fall back to the defaults.
//!
//! # Example
//! ```
//! use volcano_hazard_core::HazardParameters;
//!
//! let params = HazardParameters::default();
//! assert_eq!(params.atmosphere.lapse_rate_c_per_km, 6.5);
//! assert!(params.validate().is_ok());
//! ```

use crate::error::{HazardError, HazardResult};
use serde::{Deserialize, Serialize};

/// Full set of model constants.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HazardParameters {
    pub atmosphere: AtmosphereParameters,
    pub physics: PhysicsParameters,
    pub risk: RiskThresholds,
}

/// Constants for the atmosphere model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtmosphereParameters {
    /// Sea-level temperature at the equator (°C)
    pub equatorial_temp_c: f64,
    /// Sea-level temperature at the poles (°C)
    pub polar_temp_c: f64,
    /// Environmental lapse rate (°C per 1000 m)
    /// Standard atmosphere: 6.5
    pub lapse_rate_c_per_km: f64,
    /// Surface wind with no elevation or latitude contribution (m/s)
    pub base_wind_ms: f64,
    /// Wind gained per 1000 m of vent elevation (m/s)
    pub wind_gain_per_km: f64,
    /// Extra wind inside the mid-latitude westerly belt (m/s)
    pub westerly_bonus_ms: f64,
    /// Westerly belt bounds on |latitude| (degrees, inclusive)
    pub westerly_band: (f64, f64),
    /// Half-width of the uniform wind jitter (m/s)
    pub wind_jitter_ms: f64,
    /// Wind speed at which the plume is fully dragged (drag factor = 1)
    pub drag_saturation_wind_ms: f64,
    /// Below this wind the plume rises vertically (m/s)
    pub inclined_plume_wind_ms: f64,
    /// At or above this wind the plume drifts horizontally (m/s)
    pub horizontal_plume_wind_ms: f64,
}

impl Default for AtmosphereParameters {
    fn default() -> Self {
        Self {
            equatorial_temp_c: 30.0,
            polar_temp_c: -20.0,
            lapse_rate_c_per_km: 6.5,
            base_wind_ms: 5.0,
            wind_gain_per_km: 4.0,
            westerly_bonus_ms: 8.0,
            westerly_band: (30.0, 60.0),
            wind_jitter_ms: 3.0,
            drag_saturation_wind_ms: 40.0,
            inclined_plume_wind_ms: 10.0,
            horizontal_plume_wind_ms: 25.0,
        }
    }
}

/// Constants for the hazard physics stages.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsParameters {
    /// Chamber pressure present at any activity level (Pa)
    pub baseline_pressure_pa: f64,
    /// Pressure gained per meter of elevation at full activity (Pa/m)
    /// `ρ_rock × g ≈ 2600 × 9.81`
    pub lithostatic_gradient_pa_per_m: f64,
    /// Baseline erupted mixture density (kg/m³)
    pub rock_density_kg_m3: f64,
    /// Half-width of the multiplicative noise (0.1 → uniform in [0.9, 1.1])
    pub noise_half_width: f64,
    /// Peak magma temperature for a fully active vent (K)
    pub magma_temperature_k: f64,
    /// Gravitational acceleration (m/s²)
    pub gravity: f64,
    /// Power-law exponent for pressure → blast distance, strictly in (0, 1)
    pub blast_exponent: f64,
    /// Scale applied to pressure^exponent / g (m)
    pub blast_coefficient: f64,
    /// Activity below which blast is suppressed and risk forced to the lowest tier
    pub low_activity_threshold: f64,
    /// Divisor applied to blast distance for low-activity vents
    pub low_activity_blast_divisor: f64,
    /// Safe zone as a multiple of blast distance
    pub safe_zone_factor: f64,
    /// Minimum safe zone reported for low-activity vents (m)
    pub safe_zone_floor_m: f64,
    /// Impact points as fractions of blast distance, ascending
    pub impact_ratios: Vec<f64>,
    /// Volume used to turn sampled pressure into vent energy (m³)
    pub impact_reference_volume_m3: f64,
    /// Distance at which impact energy has halved (m)
    pub impact_reference_distance_m: f64,
    /// Thermal decay length as a fraction of blast distance
    pub thermal_decay_ratio: f64,
    /// Plume height = coefficient × pressure^0.25 × activity (m)
    pub plume_height_coefficient: f64,
    /// Number of ballistic particles sampled for the spread vector
    pub particle_count: usize,
    /// Launch speed spread around the nominal speed (fraction)
    pub particle_speed_spread: f64,
    /// Maximum launch angle from vertical (radians)
    pub particle_max_launch_angle: f64,
    /// Horizontal distance retained after air resistance
    pub air_resistance: f64,
}

impl Default for PhysicsParameters {
    fn default() -> Self {
        Self {
            baseline_pressure_pa: 5.0e6,
            lithostatic_gradient_pa_per_m: 25_506.0,
            rock_density_kg_m3: 2600.0,
            noise_half_width: 0.1,
            magma_temperature_k: 1273.15,
            gravity: 9.81,
            blast_exponent: 0.5,
            blast_coefficient: 20.0,
            low_activity_threshold: 0.1,
            low_activity_blast_divisor: 10.0,
            safe_zone_factor: 1.2,
            safe_zone_floor_m: 1000.0,
            impact_ratios: vec![0.0, 0.25, 0.5, 0.75, 1.0],
            impact_reference_volume_m3: 1.0,
            impact_reference_distance_m: 100.0,
            thermal_decay_ratio: 0.4,
            plume_height_coefficient: 100.0,
            particle_count: 200,
            particle_speed_spread: 0.15,
            particle_max_launch_angle: std::f64::consts::FRAC_PI_3,
            air_resistance: 0.95,
        }
    }
}

/// Intensity thresholds separating the five risk tiers.
///
/// Comparisons are strict: a score equal to a threshold lands in the higher tier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskThresholds {
    pub low: f64,
    pub moderate: f64,
    pub high: f64,
    pub critical: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            low: 1.0,
            moderate: 2.5,
            high: 3.8,
            critical: 4.4,
        }
    }
}

impl HazardParameters {
    /// Reject parameter sets the pipeline cannot evaluate safely.
    ///
    /// # Errors
    ///
    /// Returns `HazardError::InvalidParameters` naming the first offending field.
    pub fn validate(&self) -> HazardResult<()> {
        let a = &self.atmosphere;
        let p = &self.physics;
        let r = &self.risk;

        let finite = [
            ("atmosphere.equatorial_temp_c", a.equatorial_temp_c),
            ("atmosphere.polar_temp_c", a.polar_temp_c),
            ("atmosphere.lapse_rate_c_per_km", a.lapse_rate_c_per_km),
            ("atmosphere.base_wind_ms", a.base_wind_ms),
            ("atmosphere.wind_gain_per_km", a.wind_gain_per_km),
            ("atmosphere.westerly_bonus_ms", a.westerly_bonus_ms),
            ("atmosphere.wind_jitter_ms", a.wind_jitter_ms),
            ("physics.lithostatic_gradient_pa_per_m", p.lithostatic_gradient_pa_per_m),
            ("physics.rock_density_kg_m3", p.rock_density_kg_m3),
            ("physics.magma_temperature_k", p.magma_temperature_k),
            ("physics.blast_coefficient", p.blast_coefficient),
            ("physics.safe_zone_factor", p.safe_zone_factor),
            ("physics.safe_zone_floor_m", p.safe_zone_floor_m),
            ("physics.impact_reference_volume_m3", p.impact_reference_volume_m3),
            ("physics.plume_height_coefficient", p.plume_height_coefficient),
            ("physics.particle_speed_spread", p.particle_speed_spread),
            ("physics.particle_max_launch_angle", p.particle_max_launch_angle),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(HazardError::InvalidParameters(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }

        let positive = [
            ("atmosphere.drag_saturation_wind_ms", a.drag_saturation_wind_ms),
            ("physics.baseline_pressure_pa", p.baseline_pressure_pa),
            ("physics.gravity", p.gravity),
            ("physics.low_activity_blast_divisor", p.low_activity_blast_divisor),
            ("physics.impact_reference_distance_m", p.impact_reference_distance_m),
            ("physics.thermal_decay_ratio", p.thermal_decay_ratio),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(HazardError::InvalidParameters(format!(
                    "{name} must be finite and positive, got {value}"
                )));
            }
        }

        if a.lapse_rate_c_per_km < 0.0 || a.equatorial_temp_c < a.polar_temp_c {
            return Err(HazardError::InvalidParameters(
                "temperature must not rise with elevation or toward the poles".into(),
            ));
        }
        if a.wind_gain_per_km < 0.0 || p.lithostatic_gradient_pa_per_m < 0.0 {
            return Err(HazardError::InvalidParameters(
                "elevation gains for wind and pressure must not be negative".into(),
            ));
        }
        if a.wind_jitter_ms < 0.0 {
            return Err(HazardError::InvalidParameters(
                "atmosphere.wind_jitter_ms must not be negative".into(),
            ));
        }
        if !(a.inclined_plume_wind_ms.is_finite()
            && a.horizontal_plume_wind_ms.is_finite()
            && (0.0..a.horizontal_plume_wind_ms).contains(&a.inclined_plume_wind_ms))
        {
            return Err(HazardError::InvalidParameters(
                "plume wind thresholds must be ascending and non-negative".into(),
            ));
        }
        if !(a.westerly_band.0.is_finite() && a.westerly_band.1.is_finite())
            || a.westerly_band.0 > a.westerly_band.1
        {
            return Err(HazardError::InvalidParameters(
                "atmosphere.westerly_band must be (low, high)".into(),
            ));
        }
        if !(p.blast_exponent > 0.0 && p.blast_exponent < 1.0) {
            return Err(HazardError::InvalidParameters(format!(
                "physics.blast_exponent must lie strictly between 0 and 1, got {}",
                p.blast_exponent
            )));
        }
        if !(0.0..1.0).contains(&p.noise_half_width) {
            return Err(HazardError::InvalidParameters(format!(
                "physics.noise_half_width must lie in [0, 1), got {}",
                p.noise_half_width
            )));
        }
        if !(0.0..=1.0).contains(&p.low_activity_threshold) {
            return Err(HazardError::InvalidParameters(format!(
                "physics.low_activity_threshold must lie in [0, 1], got {}",
                p.low_activity_threshold
            )));
        }
        if p.safe_zone_floor_m <= 0.0 {
            return Err(HazardError::InvalidParameters(
                "physics.safe_zone_floor_m must be positive".into(),
            ));
        }
        if p.impact_ratios.is_empty()
            || p.impact_ratios.iter().any(|r| !(0.0..=1.0).contains(r))
            || p.impact_ratios.windows(2).any(|w| w[0] > w[1])
        {
            return Err(HazardError::InvalidParameters(
                "physics.impact_ratios must be a non-empty ascending list within [0, 1]".into(),
            ));
        }
        if p.particle_count == 0 || p.particle_count > 1000 {
            return Err(HazardError::InvalidParameters(format!(
                "physics.particle_count must be within 1..=1000, got {}",
                p.particle_count
            )));
        }
        if !(0.0..1.0).contains(&p.particle_speed_spread) {
            return Err(HazardError::InvalidParameters(
                "physics.particle_speed_spread must lie in [0, 1)".into(),
            ));
        }
        if !(0.0..=std::f64::consts::FRAC_PI_2).contains(&p.particle_max_launch_angle) {
            return Err(HazardError::InvalidParameters(
                "physics.particle_max_launch_angle must lie in [0, π/2]".into(),
            ));
        }
        if !(0.0..=1.0).contains(&p.air_resistance) {
            return Err(HazardError::InvalidParameters(
                "physics.air_resistance must lie in [0, 1]".into(),
            ));
        }

        let thresholds = [r.low, r.moderate, r.high, r.critical];
        if thresholds.iter().any(|t| !t.is_finite()) || thresholds.windows(2).any(|w| w[0] >= w[1])
        {
            return Err(HazardError::InvalidParameters(
                "risk thresholds must be finite and strictly ascending".into(),
            ));
        }

        Ok(())
    }
}
