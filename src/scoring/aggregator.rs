use serde::Serialize;

use crate::model::grades::ScoreBand;
use crate::model::ratings::RatingSet;
use crate::model::weights::WeightProfile;
use crate::model::{DISPLAY_SCALE, Dimension, SubMetric, ValidationError, check_score, round2};
use crate::scoring::PartialScores;
use crate::scoring::comparator::ComparisonVector;

/// Emitted after every accepted sub-metric update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreChange {
    pub metric: SubMetric,
    pub dimension: Dimension,
    pub value: f64,
    pub dimension_total: f64,
    pub overall: f64,
}

/// Current ratings of one sequence under a fixed weight profile.
#[derive(Debug, Clone, Default)]
pub struct ScoringSession {
    weights: WeightProfile,
    ratings: RatingSet,
}

impl ScoringSession {
    pub fn new(weights: WeightProfile) -> Self {
        Self {
            weights,
            ratings: RatingSet::default(),
        }
    }

    pub fn weights(&self) -> &WeightProfile {
        &self.weights
    }

    pub fn ratings(&self) -> &RatingSet {
        &self.ratings
    }

    pub fn set(&mut self, metric: SubMetric, value: f64) -> Result<ScoreChange, ValidationError> {
        let value = check_score(metric.key(), value)?;
        let dimension = metric.dimension();

        let mut values = self.ratings.sub_values(dimension);
        values[metric.slot()] = value;
        let total = dimension_total(&self.weights.sub_weights(dimension), &values);
        self.ratings.store(metric, value, total);

        let overall = self.overall_score();
        tracing::debug!(
            metric = metric.key(),
            value,
            dimension_total = total,
            overall,
            "sub-metric updated"
        );
        Ok(ScoreChange {
            metric,
            dimension,
            value,
            dimension_total: total,
            overall,
        })
    }

    /// Name-based update; the sub-metric must belong to `dimension`.
    pub fn set_sub_metric(
        &mut self,
        dimension: &str,
        sub_key: &str,
        value: f64,
    ) -> Result<ScoreChange, ValidationError> {
        let dimension: Dimension = dimension.parse()?;
        let metric: SubMetric = sub_key.parse()?;
        if metric.dimension() != dimension {
            return Err(ValidationError::WrongDimension {
                sub_metric: sub_key.to_string(),
                dimension: dimension.key().to_string(),
            });
        }
        self.set(metric, value)
    }

    /// Update resolved from the sub-metric key alone.
    pub fn set_by_key(
        &mut self,
        sub_key: &str,
        value: f64,
    ) -> Result<ScoreChange, ValidationError> {
        let metric: SubMetric = sub_key.parse()?;
        self.set(metric, value)
    }

    /// Applies every present score. Stops at the first invalid value; earlier
    /// updates stay applied.
    pub fn apply(&mut self, scores: &PartialScores) -> Result<Vec<ScoreChange>, ValidationError> {
        let mut changes = Vec::with_capacity(scores.len());
        for (&metric, &value) in scores {
            changes.push(self.set(metric, value)?);
        }
        Ok(changes)
    }

    pub fn total(&self, dimension: Dimension) -> f64 {
        self.ratings.total(dimension)
    }

    /// Raw overall score in [0, 5].
    pub fn overall_score(&self) -> f64 {
        overall_score(&self.weights.dimension_weights(), &self.ratings.totals())
    }

    /// Overall score on the 0-100 scale.
    pub fn display_score(&self) -> f64 {
        self.overall_score() * DISPLAY_SCALE
    }

    pub fn score_band(&self) -> ScoreBand {
        ScoreBand::from_display(self.display_score())
    }

    pub fn totals_vector(&self) -> ComparisonVector {
        ComparisonVector::from_totals(self.ratings.totals())
    }

    pub fn reset(&mut self) {
        self.ratings = RatingSet::default();
        tracing::debug!("scores reset");
    }
}

/// Weighted sum of one dimension's sub-metrics, rounded to two decimals.
pub fn dimension_total(weights: &[f64; 3], values: &[f64; 3]) -> f64 {
    let sum: f64 = weights.iter().zip(values).map(|(w, v)| w * v).sum();
    round2(sum)
}

pub fn overall_score(weights: &[f64; 3], totals: &[f64; 3]) -> f64 {
    weights.iter().zip(totals).map(|(w, t)| w * t).sum()
}

#[cfg(test)]
#[path = "../../tests/src_inline/scoring/aggregator.rs"]
mod tests;
