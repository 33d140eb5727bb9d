use serde::Serialize;

use crate::model::grades::{AgreementLevel, DimensionAgreement};
use crate::model::{Dimension, SCORE_MAX, ValidationError, check_score};

/// Dimension totals in consistency, aesthetic, physicality order, each in [0, 5].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonVector([f64; 3]);

impl ComparisonVector {
    /// Validates externally supplied scores.
    pub fn new(values: [f64; 3]) -> Result<Self, ValidationError> {
        for dim in Dimension::ALL {
            check_score(dim.key(), values[dim.index()])?;
        }
        Ok(Self(values))
    }

    /// Totals kept by the aggregator are in range already.
    pub(crate) fn from_totals(totals: [f64; 3]) -> Self {
        Self(totals)
    }

    /// Parses `C,A,P`, e.g. `3.5,4,2.25`.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(ValidationError::MalformedVector(raw.to_string()));
        }
        let mut values = [0.0; 3];
        for (slot, part) in values.iter_mut().zip(&parts) {
            *slot = part
                .parse::<f64>()
                .map_err(|_| ValidationError::MalformedVector(raw.to_string()))?;
        }
        Self::new(values)
    }

    pub fn get(&self, dimension: Dimension) -> f64 {
        self.0[dimension.index()]
    }

    pub fn values(&self) -> &[f64; 3] {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DimensionComparison {
    pub dimension: Dimension,
    pub human: f64,
    pub ai: f64,
    /// human - ai
    pub difference: f64,
    pub agreement: DimensionAgreement,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    pub human: [f64; 3],
    pub ai: [f64; 3],
    pub pearson: f64,
    pub spearman: f64,
    pub mae: f64,
    pub rmse: f64,
    pub consistency_index: f64,
    pub agreement: AgreementLevel,
    pub dimensions: Vec<DimensionComparison>,
}

pub fn compare(human: &ComparisonVector, ai: &ComparisonVector) -> ComparisonReport {
    let x = human.values();
    let y = ai.values();
    let pearson = pearson(x, y);

    let dimensions = Dimension::ALL
        .into_iter()
        .map(|dim| {
            let h = human.get(dim);
            let a = ai.get(dim);
            DimensionComparison {
                dimension: dim,
                human: h,
                ai: a,
                difference: h - a,
                agreement: DimensionAgreement::from_difference(h - a),
            }
        })
        .collect();

    ComparisonReport {
        human: *x,
        ai: *y,
        pearson,
        spearman: spearman(x, y),
        mae: mean_absolute_error(x, y),
        rmse: root_mean_square_error(x, y),
        consistency_index: consistency_index(x, y),
        agreement: AgreementLevel::from_correlation(pearson),
        dimensions,
    }
}

/// Pearson correlation; 0 when either vector is constant.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len().min(y.len());
    if n == 0 {
        return 0.0;
    }
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xx = 0.0;
    let mut sum_yy = 0.0;
    let mut sum_xy = 0.0;
    for i in 0..n {
        let xi = x[i];
        let yi = y[i];
        sum_x += xi;
        sum_y += yi;
        sum_xx += xi * xi;
        sum_yy += yi * yi;
        sum_xy += xi * yi;
    }
    let nf = n as f64;
    let num = nf * sum_xy - sum_x * sum_y;
    let den = ((nf * sum_xx - sum_x * sum_x) * (nf * sum_yy - sum_y * sum_y)).sqrt();
    if den == 0.0 || !den.is_finite() {
        0.0
    } else {
        num / den
    }
}

/// Pearson over first-match ranks; tied values share the lowest rank.
pub fn spearman(x: &[f64], y: &[f64]) -> f64 {
    pearson(&rank_first_match(x), &rank_first_match(y))
}

/// 1-based position of each value's first occurrence in the ascending-sorted copy.
pub fn rank_first_match(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    values
        .iter()
        .map(|v| {
            sorted
                .iter()
                .position(|s| s == v)
                .map(|p| (p + 1) as f64)
                .unwrap_or(0.0)
        })
        .collect()
}

pub fn mean_absolute_error(x: &[f64], y: &[f64]) -> f64 {
    mean(x.iter().zip(y).map(|(a, b)| (a - b).abs()))
}

pub fn root_mean_square_error(x: &[f64], y: &[f64]) -> f64 {
    mean(x.iter().zip(y).map(|(a, b)| (a - b) * (a - b))).sqrt()
}

/// `1 - mean|x - y| / 5`; 1 means identical vectors.
pub fn consistency_index(x: &[f64], y: &[f64]) -> f64 {
    1.0 - mean_absolute_error(x, y) / SCORE_MAX
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let mut sum = 0.0;
    let mut n = 0usize;
    for v in values {
        sum += v;
        n += 1;
    }
    if n == 0 { 0.0 } else { sum / n as f64 }
}

#[cfg(test)]
#[path = "../../tests/src_inline/scoring/comparator.rs"]
mod tests;
