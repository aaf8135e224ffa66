use thiserror::Error;

/// Errors surfaced by the hazard pipeline and its boundary helpers.
///
/// Domain problems inside the pipeline (roots of negative numbers, logs of
/// non-positive numbers) are prevented by clamping before the operation.
/// `ComputationFailed` only appears when a stage still produced a non-finite
/// value; no partial report is returned in that case.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HazardError {
    #[error("invalid input: {field} {reason}")]
    InvalidInput { field: &'static str, reason: String },
    #[error("invalid hazard parameters: {0}")]
    InvalidParameters(String),
    #[error("computation failed during {stage}")]
    ComputationFailed { stage: &'static str },
}

impl HazardError {
    pub(crate) fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

pub type HazardResult<T> = Result<T, HazardError>;

/// Pass a finite value through, or abort the named stage.
pub(crate) fn ensure_finite(value: f64, stage: &'static str) -> HazardResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        tracing::warn!("Non-finite intermediate in {}: {}", stage, value);
        Err(HazardError::ComputationFailed { stage })
    }
}
