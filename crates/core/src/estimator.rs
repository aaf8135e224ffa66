//! Hazard estimation pipeline
//!
//! Runs the four components in order for one request:
//! [`activity_factor`] → [`AtmosphereModel`] → [`HazardPhysics`] → [`ReportAssembler`].
//!
//! The estimator holds only the stages built from validated parameters. Every call owns its
//! intermediate values and borrows the caller's generator, so one estimator
//! can serve concurrent requests from different threads.

use crate::activity::activity_factor;
use crate::core_types::volcano::VolcanoInput;
use crate::error::{HazardError, HazardResult};
use crate::params::HazardParameters;
use crate::physics::{HazardPhysics, StochasticPriors};
use crate::report::{HazardReport, ReportAssembler};
use crate::weather::AtmosphereModel;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

/// Configured hazard pipeline.
#[derive(Debug, Clone, Default)]
pub struct HazardEstimator {
    atmosphere: AtmosphereModel,
    physics: HazardPhysics,
}

impl HazardEstimator {
    /// Build an estimator from a parameter set.
    ///
    /// # Errors
    ///
    /// `InvalidParameters` if the set fails [`HazardParameters::validate`].
    pub fn new(params: HazardParameters) -> HazardResult<Self> {
        params.validate()?;

        Ok(Self {
            atmosphere: AtmosphereModel::new(params.atmosphere),
            physics: HazardPhysics::new(params.physics, params.risk),
        })
    }

    /// Estimate hazard metrics for one volcano.
    ///
    /// The input is assumed to have passed
    /// [`validate_input`](crate::validation::validate_input).
    ///
    /// # Errors
    ///
    /// `ComputationFailed` if any stage produces a non-finite value.
    pub fn estimate(&self, input: &VolcanoInput, rng: &mut impl Rng) -> HazardResult<HazardReport> {
        self.estimate_with_priors(input, &StochasticPriors::default(), rng)
    }

    /// Like [`HazardEstimator::estimate`], with caller-supplied baselines for
    /// the stochastic triple.
    ///
    /// # Errors
    ///
    /// `ComputationFailed` if any stage produces a non-finite value.
    pub fn estimate_with_priors(
        &self,
        input: &VolcanoInput,
        priors: &StochasticPriors,
        rng: &mut impl Rng,
    ) -> HazardResult<HazardReport> {
        let activity = activity_factor(&input.status);
        debug!("Activity for '{}' ({}): {}", input.name, input.status, activity);

        let location = input.location;
        let atmosphere = self
            .atmosphere
            .sample(location.latitude, input.elevation, rng);
        debug!(
            "Atmosphere: T={}, wind={}, drag={}, plume={}",
            atmosphere.temperature,
            atmosphere.wind_speed,
            atmosphere.drag_factor,
            atmosphere.plume_behavior
        );

        let assessment = self
            .physics
            .compute(input.elevation, activity, &atmosphere, priors, rng)
            .inspect_err(|err| warn!("Hazard estimate for '{}' aborted: {}", input.name, err))?;

        let report = ReportAssembler::assemble(activity, atmosphere, assessment);
        info!(
            "Hazard estimate for '{}': blast={}, safe_zone={}, intensity={:.3}, decision={}",
            input.name, report.crush_distance, report.safe_zone, report.intensity, report.final_decision
        );

        Ok(report)
    }

    /// Elevation-only variant: an active vent at latitude 0, longitude 0.
    ///
    /// # Errors
    ///
    /// Same as [`HazardEstimator::estimate`].
    pub fn estimate_elevation_only(
        &self,
        elevation: f64,
        rng: &mut impl Rng,
    ) -> HazardResult<HazardReport> {
        self.estimate(&VolcanoInput::elevation_only(elevation), rng)
    }

    /// Deterministic estimate: the same input and seed always produce the
    /// same report.
    ///
    /// # Errors
    ///
    /// Same as [`HazardEstimator::estimate`].
    pub fn estimate_seeded(&self, input: &VolcanoInput, seed: u64) -> HazardResult<HazardReport> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.estimate(input, &mut rng)
    }
}

/// Estimate with default parameters and the thread-local generator.
///
/// # Errors
///
/// Same as [`HazardEstimator::estimate`].
pub fn estimate_hazard(input: &VolcanoInput) -> HazardResult<HazardReport> {
    HazardEstimator::default().estimate(input, &mut rand::rng())
}

impl TryFrom<HazardParameters> for HazardEstimator {
    type Error = HazardError;

    fn try_from(params: HazardParameters) -> HazardResult<Self> {
        Self::new(params)
    }
}
