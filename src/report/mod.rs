use serde::Serialize;

use crate::model::grades::ScoreBand;
use crate::model::{Dimension, SubMetric};
use crate::scoring::aggregator::ScoringSession;

pub mod json;
pub mod text;

#[derive(Debug, Clone, Serialize)]
pub struct SubMetricLine {
    pub metric: SubMetric,
    pub value: f64,
    pub weight: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DimensionLine {
    pub dimension: Dimension,
    pub weight: f64,
    pub total: f64,
    pub sub_metrics: Vec<SubMetricLine>,
}

/// Render-ready snapshot of a scoring session.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentView {
    pub dimensions: Vec<DimensionLine>,
    pub overall: f64,
    pub display: f64,
    pub band: ScoreBand,
}

impl AssessmentView {
    pub fn from_session(session: &ScoringSession) -> Self {
        let weights = session.weights();
        let ratings = session.ratings();
        let dimensions = Dimension::ALL
            .into_iter()
            .map(|dim| DimensionLine {
                dimension: dim,
                weight: weights.dimension_weight(dim),
                total: ratings.total(dim),
                sub_metrics: dim
                    .sub_metrics()
                    .into_iter()
                    .map(|m| SubMetricLine {
                        metric: m,
                        value: ratings.get(m),
                        weight: weights.sub_weight(m),
                    })
                    .collect(),
            })
            .collect();
        Self {
            dimensions,
            overall: session.overall_score(),
            display: session.display_score(),
            band: session.score_band(),
        }
    }
}

pub fn format_f64_2(v: f64) -> String {
    format!("{:.2}", v)
}

pub fn format_f64_3(v: f64) -> String {
    format!("{:.3}", v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
