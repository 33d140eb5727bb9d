use serde::Serialize;

use crate::model::weights::WeightProfile;
use crate::model::{Dimension, ValidationError, round1, round2};
use crate::scoring::comprehensive::ComprehensiveScores;

const RANKING_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSequence {
    pub index: String,
    pub scores: ComprehensiveScores,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DimensionStats {
    pub mean: f64,
    pub max: f64,
    pub min: f64,
    pub std: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankEntry {
    pub index: String,
    pub score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GradeDistribution {
    pub excellent_sequences: usize,
    pub good_sequences: usize,
    pub fair_sequences: usize,
    pub poor_sequences: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchSummary {
    pub total_sequences: usize,
    pub weight_ratio: String,
    pub average_overall_score: f64,
    pub consistency: DimensionStats,
    pub aesthetic: DimensionStats,
    pub physicality: DimensionStats,
    pub overall: DimensionStats,
    pub top: Vec<RankEntry>,
    pub bottom: Vec<RankEntry>,
    pub distribution: GradeDistribution,
}

pub fn summarize(
    sequences: &[ScoredSequence],
    weights: &WeightProfile,
) -> Result<BatchSummary, ValidationError> {
    if sequences.is_empty() {
        return Err(ValidationError::EmptyBatch);
    }

    let column = |dim: Dimension| -> Vec<f64> {
        sequences
            .iter()
            .map(|s| s.scores.dimension_score(dim))
            .collect()
    };
    let overall: Vec<f64> = sequences.iter().map(|s| s.scores.overall_score).collect();

    let mut ranked: Vec<RankEntry> = sequences
        .iter()
        .map(|s| RankEntry {
            index: s.index.clone(),
            score: s.scores.overall_score,
        })
        .collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    let top = ranked.iter().take(RANKING_SIZE).cloned().collect();
    let bottom = ranked[ranked.len().saturating_sub(RANKING_SIZE)..].to_vec();

    let distribution = GradeDistribution {
        excellent_sequences: overall.iter().filter(|&&s| s >= 4.5).count(),
        good_sequences: overall.iter().filter(|&&s| (3.5..4.5).contains(&s)).count(),
        fair_sequences: overall.iter().filter(|&&s| (3.0..3.5).contains(&s)).count(),
        poor_sequences: overall.iter().filter(|&&s| s < 3.0).count(),
    };

    let summary = BatchSummary {
        total_sequences: sequences.len(),
        weight_ratio: weight_ratio(weights),
        average_overall_score: round2(mean(&overall)),
        consistency: dimension_stats(&column(Dimension::Consistency)),
        aesthetic: dimension_stats(&column(Dimension::Aesthetic)),
        physicality: dimension_stats(&column(Dimension::Physicality)),
        overall: dimension_stats(&overall),
        top,
        bottom,
        distribution,
    };
    tracing::info!(
        sequences = summary.total_sequences,
        average = summary.average_overall_score,
        "batch summary computed"
    );
    Ok(summary)
}

pub fn dimension_stats(values: &[f64]) -> DimensionStats {
    if values.is_empty() {
        return DimensionStats {
            mean: 0.0,
            max: 0.0,
            min: 0.0,
            std: 0.0,
        };
    }
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    DimensionStats {
        mean: round2(mean(values)),
        max: round2(max),
        min: round2(min),
        std: round2(sample_std(values)),
    }
}

/// Standard deviation with the n-1 denominator; 0 for fewer than two values.
pub fn sample_std(values: &[f64]) -> f64 {
    if values.len() <= 1 {
        return 0.0;
    }
    let m = mean(values);
    let var = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / (values.len() - 1) as f64;
    var.sqrt()
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Consistency:Physicality:Aesthetic on a 10-point scale, e.g. `4:4:2`.
fn weight_ratio(weights: &WeightProfile) -> String {
    let part = |d: Dimension| round1(weights.dimension_weight(d) * 10.0);
    format!(
        "Consistency:Physicality:Aesthetic = {}:{}:{}",
        part(Dimension::Consistency),
        part(Dimension::Physicality),
        part(Dimension::Aesthetic)
    )
}

#[cfg(test)]
#[path = "../../tests/src_inline/scoring/summary.rs"]
mod tests;
