use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::{Dimension, SubMetric};

const WEIGHT_SUM_EPSILON: f64 = 1e-6;

#[derive(Debug, thiserror::Error)]
pub enum WeightError {
    #[error("failed to read weight profile {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse weight profile: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown key `{0}` in weight profile")]
    UnknownKey(String),
    #[error("missing weight for `{0}`")]
    Missing(String),
    #[error("weight for `{key}` must be within [0, 1] (got {value})")]
    OutOfRange { key: String, value: f64 },
    #[error("weights for {group} do not sum to 1 (sum={sum})")]
    BadSum { group: String, sum: f64 },
}

/// Sub-metric and dimension weights used by the aggregator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WeightProfileFile", into = "WeightProfileFile")]
pub struct WeightProfile {
    sub: [[f64; 3]; 3],
    dimension: [f64; 3],
}

impl WeightProfile {
    /// 0.33/0.33/0.34 inside every dimension; consistency:physicality:aesthetic = 4:4:2.
    pub fn reference() -> Self {
        Self {
            sub: [[0.33, 0.33, 0.34]; 3],
            dimension: [0.4, 0.2, 0.4],
        }
    }

    pub fn new(sub: [[f64; 3]; 3], dimension: [f64; 3]) -> Result<Self, WeightError> {
        let profile = Self { sub, dimension };
        profile.validate()?;
        Ok(profile)
    }

    pub fn load(path: &Path) -> Result<Self, WeightError> {
        let raw = std::fs::read_to_string(path).map_err(|source| WeightError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let profile: WeightProfile = serde_json::from_str(&raw)?;
        tracing::info!(path = %path.display(), "loaded weight profile");
        Ok(profile)
    }

    pub fn sub_weight(&self, metric: SubMetric) -> f64 {
        self.sub[metric.dimension().index()][metric.slot()]
    }

    pub fn sub_weights(&self, dimension: Dimension) -> [f64; 3] {
        self.sub[dimension.index()]
    }

    pub fn dimension_weight(&self, dimension: Dimension) -> f64 {
        self.dimension[dimension.index()]
    }

    pub fn dimension_weights(&self) -> [f64; 3] {
        self.dimension
    }

    fn validate(&self) -> Result<(), WeightError> {
        for dim in Dimension::ALL {
            for metric in dim.sub_metrics() {
                check_weight(metric.key(), self.sub_weight(metric))?;
            }
            check_sum(dim.key(), &self.sub[dim.index()])?;
            check_weight(dim.key(), self.dimension_weight(dim))?;
        }
        check_sum("dimensions", &self.dimension)
    }
}

impl Default for WeightProfile {
    fn default() -> Self {
        Self::reference()
    }
}

fn check_weight(key: &str, value: f64) -> Result<(), WeightError> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(WeightError::OutOfRange {
            key: key.to_string(),
            value,
        });
    }
    Ok(())
}

fn check_sum(group: &str, weights: &[f64; 3]) -> Result<(), WeightError> {
    let sum: f64 = weights.iter().sum();
    if (sum - 1.0).abs() > WEIGHT_SUM_EPSILON {
        return Err(WeightError::BadSum {
            group: group.to_string(),
            sum,
        });
    }
    Ok(())
}

/// On-disk layout of a weight profile, keyed by dimension and sub-metric names.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct WeightProfileFile {
    dimension_weights: BTreeMap<String, f64>,
    sub_weights: BTreeMap<String, BTreeMap<String, f64>>,
}

impl TryFrom<WeightProfileFile> for WeightProfile {
    type Error = WeightError;

    fn try_from(file: WeightProfileFile) -> Result<Self, Self::Error> {
        for key in file.dimension_weights.keys().chain(file.sub_weights.keys()) {
            key.parse::<Dimension>()
                .map_err(|_| WeightError::UnknownKey(key.clone()))?;
        }

        let mut sub = [[0.0; 3]; 3];
        let mut dimension = [0.0; 3];
        for dim in Dimension::ALL {
            dimension[dim.index()] = *file
                .dimension_weights
                .get(dim.key())
                .ok_or_else(|| WeightError::Missing(dim.key().to_string()))?;

            let group = file
                .sub_weights
                .get(dim.key())
                .ok_or_else(|| WeightError::Missing(dim.key().to_string()))?;
            for key in group.keys() {
                match SubMetric::from_key(key) {
                    Some(m) if m.dimension() == dim => {}
                    _ => return Err(WeightError::UnknownKey(format!("{}.{}", dim.key(), key))),
                }
            }
            for metric in dim.sub_metrics() {
                sub[dim.index()][metric.slot()] = *group
                    .get(metric.key())
                    .ok_or_else(|| WeightError::Missing(metric.key().to_string()))?;
            }
        }

        WeightProfile::new(sub, dimension)
    }
}

impl From<WeightProfile> for WeightProfileFile {
    fn from(profile: WeightProfile) -> Self {
        let mut dimension_weights = BTreeMap::new();
        let mut sub_weights = BTreeMap::new();
        for dim in Dimension::ALL {
            dimension_weights.insert(dim.key().to_string(), profile.dimension_weight(dim));
            let group = dim
                .sub_metrics()
                .into_iter()
                .map(|m| (m.key().to_string(), profile.sub_weight(m)))
                .collect::<BTreeMap<_, _>>();
            sub_weights.insert(dim.key().to_string(), group);
        }
        Self {
            dimension_weights,
            sub_weights,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/weights.rs"]
mod tests;
