//! Hazard physics
//!
//! Converts an activity multiplier, vent elevation and sampled atmosphere
//! into magma pressure, the stochastic triple, blast and safe-zone radii, an
//! impact profile, the particle-spread envelope, an intensity score and a
//! risk decision. Each stage only reads the outputs of earlier stages.

pub mod blast;
pub mod impact;
pub mod magma;
pub mod particle_spread;
pub mod risk;

pub use blast::{blast_distance, safe_zone};
pub use impact::ImpactPoint;
pub use magma::{magma_pressure, MonteCarloSample, StochasticPriors};
pub use particle_spread::ParticleSpread;
pub use risk::{intensity_score, risk_decision, RiskLevel};

use crate::core_types::units::{Meters, Pascals};
use crate::error::{ensure_finite, HazardResult};
use crate::params::{PhysicsParameters, RiskThresholds};
use crate::weather::AtmosphereState;
use rand::Rng;
use tracing::debug;

/// Everything the physics stages produce for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct HazardAssessment {
    /// Chamber pressure before noise
    pub magma_pressure: Pascals,
    pub monte_carlo: MonteCarloSample,
    pub crush_distance: Meters,
    pub safe_zone: Meters,
    pub impact_points: Vec<ImpactPoint>,
    pub particle_spread: ParticleSpread,
    pub intensity: f64,
    pub final_decision: RiskLevel,
}

/// Physics stages with their parameters bound.
#[derive(Debug, Clone, Default)]
pub struct HazardPhysics {
    params: PhysicsParameters,
    thresholds: RiskThresholds,
}

impl HazardPhysics {
    pub fn new(params: PhysicsParameters, thresholds: RiskThresholds) -> Self {
        Self { params, thresholds }
    }

    /// Run every physics stage in order.
    ///
    /// Random draws, in order: two noise factors, then the particle Monte
    /// Carlo. The count does not depend on the inputs, so a seeded generator
    /// lines up across different requests.
    ///
    /// # Errors
    ///
    /// `ComputationFailed` naming the first stage that produced a non-finite
    /// value.
    pub fn compute(
        &self,
        elevation: f64,
        activity: f64,
        atmosphere: &AtmosphereState,
        priors: &StochasticPriors,
        rng: &mut impl Rng,
    ) -> HazardResult<HazardAssessment> {
        let p = &self.params;

        // 1. Chamber pressure
        let pressure = magma_pressure(elevation, activity, p);
        let pressure = priors.pressure.unwrap_or(pressure);
        ensure_finite(*pressure, "magma pressure")?;

        // 2. Stochastic triple
        let sample = magma::sample_conditions(
            pressure,
            activity,
            atmosphere.temperature,
            priors,
            p,
            rng,
        );
        ensure_finite(*sample.density, "monte carlo density")?;
        ensure_finite(*sample.pressure, "monte carlo pressure")?;
        ensure_finite(*sample.temp, "monte carlo temperature")?;
        debug!(
            "Stochastic triple: density={:.1}, pressure={:.3e} Pa, temp={:.1}, noise={:.4}",
            sample.density, *sample.pressure, sample.temp, sample.noise
        );

        // 3. Blast / crush distance
        let crush_distance = blast_distance(pressure, sample.noise, activity, p);
        ensure_finite(*crush_distance, "blast distance")?;

        // 4. Intensity score
        let intensity = ensure_finite(intensity_score(crush_distance, activity), "intensity")?;

        // 5. Decision
        let final_decision =
            risk_decision(intensity, activity, &self.thresholds, p.low_activity_threshold);
        debug!(
            "Blast={:.1}, intensity={:.3}, decision={}",
            crush_distance, intensity, final_decision
        );

        // 6. Safe zone
        let safe_zone = safe_zone(crush_distance, activity, p);
        ensure_finite(*safe_zone, "safe zone")?;

        // 7. Impact profile
        let impact_points = impact::impact_points(
            crush_distance,
            sample.temp,
            atmosphere.temperature,
            *sample.pressure,
            p,
        )?;

        // 8. Particle spread
        let plume = particle_spread::plume_height(sample.pressure, activity, p);
        let particle_spread = particle_spread::simulate_particle_spread(
            elevation,
            crush_distance,
            plume,
            atmosphere,
            p,
            rng,
        )?;

        Ok(HazardAssessment {
            magma_pressure: pressure,
            monte_carlo: sample,
            crush_distance,
            safe_zone,
            impact_points,
            particle_spread,
            intensity,
            final_decision,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::AtmosphereModel;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn active_tall_vent_is_dangerous() {
        let physics = HazardPhysics::default();
        let atmosphere = AtmosphereModel::default().state_with_jitter(0.0, 3000.0, 0.0);
        let mut rng = StdRng::seed_from_u64(42);

        let result = physics
            .compute(3000.0, 1.0, &atmosphere, &StochasticPriors::default(), &mut rng)
            .unwrap();

        assert!(*result.crush_distance > 10_000.0);
        assert!(result.final_decision >= RiskLevel::Moderate);
        assert!(result.safe_zone > result.crush_distance);
        assert_eq!(result.impact_points.len(), 5);
    }

    #[test]
    fn non_finite_prior_aborts_without_partial_result() {
        let physics = HazardPhysics::default();
        let atmosphere = AtmosphereModel::default().state_with_jitter(0.0, 0.0, 0.0);
        let priors = StochasticPriors {
            pressure: Some(Pascals::new(f64::INFINITY)),
            ..StochasticPriors::default()
        };
        let mut rng = StdRng::seed_from_u64(1);

        let result = physics.compute(0.0, 1.0, &atmosphere, &priors, &mut rng);
        assert!(matches!(
            result,
            Err(crate::HazardError::ComputationFailed { stage: "magma pressure" })
        ));
    }
}
