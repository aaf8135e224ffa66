//! Magma chamber pressure and the Monte Carlo perturbation of the erupted mix
//!
//! Pressure grows with the height of the edifice above sea level (a taller
//! column of rock over the chamber) scaled by activity, on top of a baseline
//! that keeps even a sea-level, extinct vent above zero.
//!
//! The stochastic triple (density, temperature, pressure) is a small bounded
//! perturbation around these baselines. It is not a rigorous ensemble.

use crate::core_types::units::{Celsius, KgPerCubicMeter, Kelvin, Pascals};
use crate::params::PhysicsParameters;
use rand::Rng;
use serde::Serialize;

/// Optional caller-supplied baselines for the stochastic triple.
///
/// A `Some` value replaces the model baseline before noise is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StochasticPriors {
    pub density: Option<KgPerCubicMeter>,
    pub temperature: Option<Kelvin>,
    pub pressure: Option<Pascals>,
}

/// Perturbed eruption conditions for one request.
///
/// `noise` is the shared multiplicative draw applied to density and pressure;
/// it is reused by the blast and impact stages and is not part of the wire
/// record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonteCarloSample {
    pub density: KgPerCubicMeter,
    pub pressure: Pascals,
    pub temp: Kelvin,
    #[serde(skip_serializing)]
    pub noise: f64,
}

/// Chamber pressure for a vent.
///
/// P = P₀ + activity × max(elevation, 0) × ∇P
///
/// Below-sea-level vents get the baseline only. Monotonic non-decreasing in
/// elevation and in activity.
pub fn magma_pressure(elevation: f64, activity: f64, params: &PhysicsParameters) -> Pascals {
    let activity = activity.clamp(0.0, 1.0);
    let overburden = elevation.max(0.0) * params.lithostatic_gradient_pa_per_m;

    Pascals::new(params.baseline_pressure_pa + activity * overburden)
}

/// Draw one multiplicative noise factor uniform in [1 - w, 1 + w].
///
/// Always consumes exactly one value from `rng`, even when `w` is zero.
pub fn draw_noise(rng: &mut impl Rng, half_width: f64) -> f64 {
    if half_width > 0.0 {
        rng.random_range((1.0 - half_width)..=(1.0 + half_width))
    } else {
        let _: f64 = rng.random();
        1.0
    }
}

/// Baseline eruption temperature: ambient air for a dead vent, full magma
/// temperature for an active one, linear in between.
pub fn baseline_temperature(activity: f64, ambient: Celsius, params: &PhysicsParameters) -> Kelvin {
    let activity = activity.clamp(0.0, 1.0);
    let ambient_k = *ambient.to_kelvin();

    Kelvin::new(ambient_k + (params.magma_temperature_k - ambient_k) * activity)
}

/// Sample the stochastic triple.
///
/// Draws two values: one noise factor shared by density and pressure, and an
/// independent one for temperature. Pressure is floored at zero before noise
/// so later roots stay in their domain.
pub fn sample_conditions(
    pressure: Pascals,
    activity: f64,
    ambient: Celsius,
    priors: &StochasticPriors,
    params: &PhysicsParameters,
    rng: &mut impl Rng,
) -> MonteCarloSample {
    let noise = draw_noise(rng, params.noise_half_width);
    let temp_noise = draw_noise(rng, params.noise_half_width);

    let density = priors
        .density
        .unwrap_or(KgPerCubicMeter::new(params.rock_density_kg_m3));
    let pressure = priors.pressure.unwrap_or(pressure);
    let temp = priors
        .temperature
        .unwrap_or_else(|| baseline_temperature(activity, ambient, params));

    MonteCarloSample {
        density: density * noise,
        pressure: Pascals::new((*pressure).max(0.0)) * noise,
        temp: temp * temp_noise,
        noise,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn pressure_never_zero_at_sea_level() {
        let p = PhysicsParameters::default();
        for activity in [0.0, 0.02, 0.5, 1.0] {
            assert!(*magma_pressure(0.0, activity, &p) > 0.0);
        }
    }

    #[test]
    fn pressure_grows_with_elevation_and_activity() {
        let p = PhysicsParameters::default();
        assert!(magma_pressure(3000.0, 1.0, &p) > magma_pressure(1000.0, 1.0, &p));
        assert!(magma_pressure(3000.0, 1.0, &p) > magma_pressure(3000.0, 0.2, &p));
        assert_relative_eq!(*magma_pressure(1000.0, 1.0, &p), 5.0e6 + 25_506_000.0);
    }

    #[test]
    fn negative_elevation_gets_baseline_only() {
        let p = PhysicsParameters::default();
        assert_eq!(*magma_pressure(-800.0, 1.0, &p), p.baseline_pressure_pa);
    }

    #[test]
    fn noise_stays_in_band() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1000 {
            let n = draw_noise(&mut rng, 0.1);
            assert!((0.9..=1.1).contains(&n));
        }
        assert_eq!(draw_noise(&mut rng, 0.0), 1.0);
    }

    #[test]
    fn triple_within_ten_percent_of_baseline() {
        let p = PhysicsParameters::default();
        let mut rng = StdRng::seed_from_u64(3);
        let pressure = magma_pressure(3000.0, 1.0, &p);
        let ambient = Celsius::new(10.0);

        for _ in 0..200 {
            let s = sample_conditions(pressure, 1.0, ambient, &StochasticPriors::default(), &p, &mut rng);
            assert!((*s.density / 2600.0 - 1.0).abs() <= 0.1 + 1e-12);
            assert!((*s.pressure / *pressure - 1.0).abs() <= 0.1 + 1e-12);
            assert!((*s.temp / p.magma_temperature_k - 1.0).abs() <= 0.1 + 1e-12);
        }
    }

    #[test]
    fn inactive_vent_temperature_tracks_ambient() {
        let p = PhysicsParameters::default();
        let ambient = Celsius::new(15.0);
        assert_relative_eq!(*baseline_temperature(0.0, ambient, &p), 288.15);
        assert_relative_eq!(*baseline_temperature(1.0, ambient, &p), p.magma_temperature_k);
    }

    #[test]
    fn priors_replace_baselines() {
        let p = PhysicsParameters {
            noise_half_width: 0.0,
            ..PhysicsParameters::default()
        };
        let priors = StochasticPriors {
            density: Some(KgPerCubicMeter::new(2400.0)),
            temperature: Some(Kelvin::new(1400.0)),
            pressure: Some(Pascals::new(2.0e7)),
        };
        let mut rng = StdRng::seed_from_u64(0);
        let s = sample_conditions(Pascals::new(9.9e9), 1.0, Celsius::new(0.0), &priors, &p, &mut rng);
        assert_eq!(*s.density, 2400.0);
        assert_eq!(*s.temp, 1400.0);
        assert_eq!(*s.pressure, 2.0e7);
        assert_eq!(s.noise, 1.0);
    }

    #[test]
    fn negative_pressure_prior_is_floored() {
        let p = PhysicsParameters::default();
        let priors = StochasticPriors {
            pressure: Some(Pascals::new(-5.0)),
            ..StochasticPriors::default()
        };
        let mut rng = StdRng::seed_from_u64(0);
        let s = sample_conditions(Pascals::new(1.0), 1.0, Celsius::new(0.0), &priors, &p, &mut rng);
        assert_eq!(*s.pressure, 0.0);
    }
}
