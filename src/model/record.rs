use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ratings::RatingSet;
use crate::model::{DISPLAY_SCALE, Dimension, round1};

/// Saved assessment. Fields are read-only once built; a re-rating produces a new record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    id: i64,
    #[serde(rename = "videoName")]
    label: String,
    timestamp: String,
    scores: RatingSet,
    total: f64,
}

impl AssessmentRecord {
    /// Snapshots `scores`; `overall` is the raw 0-5 overall score and is stored
    /// on the display scale at one decimal.
    pub fn new(
        id: i64,
        label: impl Into<String>,
        timestamp: DateTime<Utc>,
        scores: RatingSet,
        overall: f64,
    ) -> Self {
        Self {
            id,
            label: label.into(),
            timestamp: timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
            scores,
            total: round1(overall * DISPLAY_SCALE),
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn dimension_total(&self, dimension: Dimension) -> f64 {
        self.scores.total(dimension)
    }

    /// Overall score on the 0-100 display scale.
    pub fn total(&self) -> f64 {
        self.total
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/record.rs"]
mod tests;
