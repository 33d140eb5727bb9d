use serde::Serialize;

use crate::model::grades::Grade;
use crate::model::weights::WeightProfile;
use crate::model::{Dimension, round2};
use crate::scoring::PartialScores;
use crate::scoring::aggregator::overall_score;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightInfo {
    pub consistency_weight: f64,
    pub physicality_weight: f64,
    pub aesthetic_weight: f64,
    pub total_weight: f64,
}

/// Full score breakdown of one evaluated sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComprehensiveScores {
    pub individual_scores: PartialScores,
    pub consistency_score: f64,
    pub aesthetic_score: f64,
    pub physicality_score: f64,
    pub overall_score: f64,
    pub weight_info: WeightInfo,
    pub consistency_avg_simple: f64,
    pub aesthetic_avg_simple: f64,
    pub physicality_avg_simple: f64,
    pub overall_avg_simple: f64,
    pub pass_rate_3: f64,
    pub pass_rate_4: f64,
    pub overall_grade: Grade,
    pub consistency_grade: Grade,
    pub aesthetic_grade: Grade,
    pub physicality_grade: Grade,
}

impl ComprehensiveScores {
    pub fn dimension_score(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Consistency => self.consistency_score,
            Dimension::Aesthetic => self.aesthetic_score,
            Dimension::Physicality => self.physicality_score,
        }
    }
}

/// Missing sub-metrics count as 0 in the weighted and per-dimension figures;
/// the overall simple average and pass rates only see the present ones.
pub fn comprehensive_scores(
    scores: &PartialScores,
    weights: &WeightProfile,
) -> ComprehensiveScores {
    let mut weighted = [0.0; 3];
    let mut simple = [0.0; 3];
    for dim in Dimension::ALL {
        let values = dim
            .sub_metrics()
            .map(|m| scores.get(&m).copied().unwrap_or(0.0));
        let sub_weights = weights.sub_weights(dim);
        weighted[dim.index()] = values.iter().zip(&sub_weights).map(|(v, w)| v * w).sum();
        simple[dim.index()] = values.iter().sum::<f64>() / values.len() as f64;
    }
    let overall = overall_score(&weights.dimension_weights(), &weighted);

    let present: Vec<f64> = scores.values().copied().collect();
    let overall_avg_simple = per_item(&present, present.iter().sum());
    let pass_rate_3 = share(&present, |s| s >= 3.0);
    let pass_rate_4 = share(&present, |s| s >= 4.0);

    let dim_weights = weights.dimension_weights();
    ComprehensiveScores {
        individual_scores: scores.clone(),
        consistency_score: round2(weighted[0]),
        aesthetic_score: round2(weighted[1]),
        physicality_score: round2(weighted[2]),
        overall_score: round2(overall),
        weight_info: WeightInfo {
            consistency_weight: dim_weights[Dimension::Consistency.index()],
            physicality_weight: dim_weights[Dimension::Physicality.index()],
            aesthetic_weight: dim_weights[Dimension::Aesthetic.index()],
            total_weight: dim_weights.iter().sum(),
        },
        consistency_avg_simple: round2(simple[0]),
        aesthetic_avg_simple: round2(simple[1]),
        physicality_avg_simple: round2(simple[2]),
        overall_avg_simple: round2(overall_avg_simple),
        pass_rate_3: round2(pass_rate_3),
        pass_rate_4: round2(pass_rate_4),
        overall_grade: Grade::from_score(overall),
        consistency_grade: Grade::from_score(weighted[0]),
        aesthetic_grade: Grade::from_score(weighted[1]),
        physicality_grade: Grade::from_score(weighted[2]),
    }
}

fn share(values: &[f64], predicate: impl Fn(f64) -> bool) -> f64 {
    let hits = values.iter().filter(|&&v| predicate(v)).count() as f64;
    per_item(values, hits)
}

fn per_item(values: &[f64], numerator: f64) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        numerator / values.len() as f64
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/scoring/comprehensive.rs"]
mod tests;
