pub mod dimensions;
pub mod grades;
pub mod ratings;
pub mod record;
pub mod weights;

pub use dimensions::{Dimension, SubMetric};

/// Lowest admissible rating or dimension total.
pub const SCORE_MIN: f64 = 0.0;
/// Highest admissible rating or dimension total; also the widest possible difference.
pub const SCORE_MAX: f64 = 5.0;
/// Factor between the raw overall score and the 0-100 display score.
pub const DISPLAY_SCALE: f64 = 20.0;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} must be a finite number")]
    NotFinite { field: String },
    #[error("{field} must be between 0 and 5 (got {value})")]
    OutOfRange { field: String, value: f64 },
    #[error("unknown dimension `{0}` (use consistency|aesthetic|physicality)")]
    UnknownDimension(String),
    #[error("unknown sub-metric `{0}`")]
    UnknownSubMetric(String),
    #[error("sub-metric `{sub_metric}` does not belong to dimension `{dimension}`")]
    WrongDimension {
        sub_metric: String,
        dimension: String,
    },
    #[error("malformed assignment `{0}` (expected KEY=VALUE)")]
    MalformedAssignment(String),
    #[error("malformed score vector `{0}` (expected three comma-separated numbers)")]
    MalformedVector(String),
    #[error("nothing to summarize: no scored sequences")]
    EmptyBatch,
}

/// Checks that `value` is a finite score inside [0, 5].
pub fn check_score(field: &str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }
    if !(SCORE_MIN..=SCORE_MAX).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            value,
        });
    }
    Ok(value)
}

/// Round half away from zero to two decimals.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

pub fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
