//! Blast (crush) radius and the evacuation safe zone
//!
//! # Model Overview
//!
//! Ballistic reach scales sub-linearly with the driving overpressure. The
//! model uses a power law divided by gravity:
//!
//! d = C × P^α / g × noise,   0 < α < 1
//!
//! With α = 0.5 this is the familiar √P scaling of ejection speed. Vents
//! below the low-activity threshold are suppressed by an order of magnitude
//! so an extinct edifice never reports a large radius, however tall it is.

use crate::core_types::units::{Meters, Pascals};
use crate::params::PhysicsParameters;

/// Maximum distance reached by ejected blocks.
///
/// # Arguments
/// * `pressure` - Chamber pressure before noise (floored at 0 before the root)
/// * `noise` - Multiplicative noise draw for this request
/// * `activity` - Activity multiplier in [0, 1]
///
/// # Returns
/// Blast distance in meters
pub fn blast_distance(
    pressure: Pascals,
    noise: f64,
    activity: f64,
    params: &PhysicsParameters,
) -> Meters {
    let pressure = (*pressure).max(0.0);
    let distance = params.blast_coefficient * pressure.powf(params.blast_exponent) / params.gravity;
    let distance = distance * noise;

    if activity < params.low_activity_threshold {
        Meters::new(distance / params.low_activity_blast_divisor)
    } else {
        Meters::new(distance)
    }
}

/// Radius outside which the population is considered safe.
///
/// Active vents (activity above the low-activity threshold) get the blast
/// radius times `safe_zone_factor`. Low-activity vents never report less than
/// `safe_zone_floor_m`, so the safe zone is never zero.
pub fn safe_zone(blast: Meters, activity: f64, params: &PhysicsParameters) -> Meters {
    let scaled = *blast * params.safe_zone_factor;

    if activity > params.low_activity_threshold {
        Meters::new(scaled)
    } else {
        Meters::new(scaled.max(params.safe_zone_floor_m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::magma::magma_pressure;
    use approx::assert_relative_eq;

    #[test]
    fn square_root_scaling() {
        let p = PhysicsParameters::default();
        let d1 = blast_distance(Pascals::new(1.0e6), 1.0, 1.0, &p);
        let d4 = blast_distance(Pascals::new(4.0e6), 1.0, 1.0, &p);
        assert_relative_eq!(*d4 / *d1, 2.0, epsilon = 1e-9);
        // 20 × 1000 / 9.81
        assert_relative_eq!(*d1, 20_000.0 / 9.81, epsilon = 1e-6);
    }

    #[test]
    fn low_activity_is_suppressed() {
        let p = PhysicsParameters::default();
        let pressure = Pascals::new(5.0e7);
        let active = blast_distance(pressure, 1.0, 1.0, &p);
        let extinct = blast_distance(pressure, 1.0, 0.02, &p);
        assert_relative_eq!(*active / *extinct, p.low_activity_blast_divisor);
    }

    #[test]
    fn extinct_below_active_for_any_elevation_and_noise() {
        let p = PhysicsParameters::default();
        for elevation in [-500.0, 0.0, 1000.0, 5000.0, 9000.0] {
            let extinct = blast_distance(magma_pressure(elevation, 0.02, &p), 1.1, 0.02, &p);
            let active = blast_distance(magma_pressure(elevation, 1.0, &p), 0.9, 1.0, &p);
            assert!(extinct < active, "elevation {elevation}");
        }
    }

    #[test]
    fn negative_pressure_does_not_produce_nan() {
        let p = PhysicsParameters::default();
        let d = blast_distance(Pascals::new(-1.0e6), 1.0, 1.0, &p);
        assert_eq!(*d, 0.0);
    }

    #[test]
    fn safe_zone_policy() {
        let p = PhysicsParameters::default();
        assert_relative_eq!(*safe_zone(Meters::new(10_000.0), 1.0, &p), 12_000.0);
        // low activity: floor applies
        assert_eq!(*safe_zone(Meters::new(200.0), 0.02, &p), p.safe_zone_floor_m);
        // low activity with a large blast keeps the scaled radius
        assert_relative_eq!(*safe_zone(Meters::new(2000.0), 0.02, &p), 2400.0);
        // active vents never report zero either, blast is always positive
        assert!(*safe_zone(Meters::new(1.0), 1.0, &p) > 0.0);
    }
}
