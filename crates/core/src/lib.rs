//! Volcano Hazard Core Library
//!
//! Estimates eruption hazard metrics for a volcano from its elevation,
//! activity status and location: blast (crush) distance, safe-zone radius,
//! energy and temperature at points along the blast radius, the particle
//! spread envelope, an intensity score and a five-tier risk decision.
//!
//! ## Pipeline
//!
//! - Activity: status label → activity multiplier in [0, 1]
//! - Atmosphere: latitude and elevation → temperature, wind, drag, plume band
//! - Physics: magma pressure, stochastic triple, blast, impact profile,
//!   particle spread, intensity and decision
//! - Report: packages everything into the JSON wire record
//!
//! The model is qualitative and stochastic. Pass a seeded generator (or use
//! [`HazardEstimator::estimate_seeded`]) for repeatable results.
//!
//! ```
//! use volcano_hazard_core::{HazardEstimator, Location, VolcanoInput};
//!
//! let input = VolcanoInput::new("Fuji", 3776.0, "Active", Location::new(35.36, 138.73));
//! let report = HazardEstimator::default().estimate_seeded(&input, 7).unwrap();
//! assert_eq!(report.impact_points.len(), 5);
//! ```

// Core types and configuration
pub mod core_types;
pub mod error;
pub mod params;

// Pipeline stages
pub mod activity;
pub mod physics;
pub mod report;
pub mod weather;

// Entry points
pub mod estimator;
pub mod validation;

// Re-export core types
pub use core_types::{
    Celsius, Fraction, Kelvin, KgPerCubicMeter, Kilometers, Location, Meters, MetersPerSecond,
    Pascals, Vec3, VolcanoInput,
};
pub use error::{HazardError, HazardResult};
pub use params::{AtmosphereParameters, HazardParameters, PhysicsParameters, RiskThresholds};

// Re-export pipeline types
pub use activity::activity_factor;
pub use physics::{
    HazardAssessment, HazardPhysics, ImpactPoint, MonteCarloSample, ParticleSpread, RiskLevel,
    StochasticPriors,
};
pub use report::{HazardReport, ReportAssembler};
pub use weather::{AtmosphereModel, AtmosphereState, PlumeBehavior};

pub use estimator::{estimate_hazard, HazardEstimator};
pub use validation::validate_input;
