//! Output record
//!
//! `HazardReport` serialises to the JSON object existing consumers expect:
//!
//! ```text
//! {
//!   "monte_carlo":     { "density", "pressure", "temp" },
//!   "crush_distance":  m,
//!   "impact_points":   [ { "distance_km", "energy_j", "temp_c", "label" }, ... ],
//!   "particle_spread": { "x", "y", "z" },
//!   "intensity":       score,
//!   "safe_zone":       m,
//!   "atmosphere":      { "wind_speed", "drag_factor", "plume_behavior" },
//!   "final_decision":  label
//! }
//! ```
//!
//! Field order and names are part of the wire contract.

use crate::core_types::units::Meters;
use crate::physics::{HazardAssessment, ImpactPoint, MonteCarloSample, ParticleSpread, RiskLevel};
use crate::weather::AtmosphereState;
use serde::Serialize;

/// Complete hazard estimate for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HazardReport {
    pub monte_carlo: MonteCarloSample,
    pub crush_distance: Meters,
    pub impact_points: Vec<ImpactPoint>,
    pub particle_spread: ParticleSpread,
    pub intensity: f64,
    pub safe_zone: Meters,
    pub atmosphere: AtmosphereState,
    pub final_decision: RiskLevel,
    /// Activity multiplier the estimate was computed with (not on the wire)
    #[serde(skip_serializing)]
    pub activity_factor: f64,
}

/// Packages the stage outputs into a report. No computation happens here.
pub struct ReportAssembler;

impl ReportAssembler {
    pub fn assemble(
        activity_factor: f64,
        atmosphere: AtmosphereState,
        assessment: HazardAssessment,
    ) -> HazardReport {
        let HazardAssessment {
            monte_carlo,
            crush_distance,
            safe_zone,
            impact_points,
            particle_spread,
            intensity,
            final_decision,
            ..
        } = assessment;

        HazardReport {
            monte_carlo,
            crush_distance,
            impact_points,
            particle_spread,
            intensity,
            safe_zone,
            atmosphere,
            final_decision,
            activity_factor,
        }
    }
}
