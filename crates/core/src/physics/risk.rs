//! VEI-like intensity score and the final risk decision
//!
//! The Volcanic Explosivity Index is logarithmic in erupted volume. Here the
//! blast radius stands in for magnitude:
//!
//! I = activity × log₁₀(max(d, 1))
//!
//! with d in meters. The floor of 1 keeps the logarithm in its domain and the
//! score non-negative.

use crate::core_types::units::Meters;
use crate::params::RiskThresholds;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Intensity score for a blast distance, clamped to be non-negative.
pub fn intensity_score(blast: Meters, activity: f64) -> f64 {
    let magnitude = (*blast).max(1.0).log10();
    (activity.clamp(0.0, 1.0) * magnitude).max(0.0)
}

/// Escalating discrete risk tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "VERY LOW")]
    VeryLow,
    #[serde(rename = "LOW")]
    Low,
    #[serde(rename = "MODERATE")]
    Moderate,
    #[serde(rename = "HIGH")]
    High,
    #[serde(rename = "CRITICAL - EVACUATE")]
    CriticalEvacuate,
}

impl RiskLevel {
    /// Bucket a score into a tier.
    ///
    /// Ranges are half-open: `score < low` is `VeryLow`, `low <= score < moderate`
    /// is `Low`, and so on; `score >= critical` is `CriticalEvacuate`.
    pub fn from_score(score: f64, thresholds: &RiskThresholds) -> Self {
        if score < thresholds.low {
            RiskLevel::VeryLow
        } else if score < thresholds.moderate {
            RiskLevel::Low
        } else if score < thresholds.high {
            RiskLevel::Moderate
        } else if score < thresholds.critical {
            RiskLevel::High
        } else {
            RiskLevel::CriticalEvacuate
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::VeryLow => "VERY LOW",
            RiskLevel::Low => "LOW",
            RiskLevel::Moderate => "MODERATE",
            RiskLevel::High => "HIGH",
            RiskLevel::CriticalEvacuate => "CRITICAL - EVACUATE",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Final decision: score bucket, forced to the lowest tier when activity is
/// below `low_activity_threshold`.
pub fn risk_decision(
    score: f64,
    activity: f64,
    thresholds: &RiskThresholds,
    low_activity_threshold: f64,
) -> RiskLevel {
    if activity < low_activity_threshold {
        return RiskLevel::VeryLow;
    }
    RiskLevel::from_score(score, thresholds)
}
