use serde::{Deserialize, Serialize};

use crate::model::{Dimension, SubMetric, ValidationError, check_score};

/// Nine sub-metric ratings plus the derived per-dimension totals.
///
/// Totals are only written through [`RatingSet::store`], which the aggregator
/// calls after recomputing them; nothing else can set a total directly.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "RatingSetWire", into = "RatingSetWire")]
pub struct RatingSet {
    values: [[f64; 3]; 3],
    totals: [f64; 3],
}

impl RatingSet {
    pub fn get(&self, metric: SubMetric) -> f64 {
        self.values[metric.dimension().index()][metric.slot()]
    }

    pub fn sub_values(&self, dimension: Dimension) -> [f64; 3] {
        self.values[dimension.index()]
    }

    pub fn total(&self, dimension: Dimension) -> f64 {
        self.totals[dimension.index()]
    }

    /// Dimension totals in consistency, aesthetic, physicality order.
    pub fn totals(&self) -> [f64; 3] {
        self.totals
    }

    pub(crate) fn store(&mut self, metric: SubMetric, value: f64, total: f64) {
        let dim = metric.dimension().index();
        self.values[dim][metric.slot()] = value;
        self.totals[dim] = total;
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ConsistencyWire {
    semantic_consistency: f64,
    factual_consistency: f64,
    spatial_temporal_consistency: f64,
    total: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct AestheticWire {
    expressiveness: f64,
    artistic_quality: f64,
    authenticity: f64,
    total: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct PhysicalityWire {
    basic_properties: f64,
    dynamics_interactivity: f64,
    physical_reliability: f64,
    total: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RatingSetWire {
    consistency: ConsistencyWire,
    aesthetic: AestheticWire,
    physicality: PhysicalityWire,
}

impl TryFrom<RatingSetWire> for RatingSet {
    type Error = ValidationError;

    fn try_from(w: RatingSetWire) -> Result<Self, Self::Error> {
        let values = [
            [
                w.consistency.semantic_consistency,
                w.consistency.factual_consistency,
                w.consistency.spatial_temporal_consistency,
            ],
            [
                w.aesthetic.expressiveness,
                w.aesthetic.artistic_quality,
                w.aesthetic.authenticity,
            ],
            [
                w.physicality.basic_properties,
                w.physicality.dynamics_interactivity,
                w.physicality.physical_reliability,
            ],
        ];
        let totals = [w.consistency.total, w.aesthetic.total, w.physicality.total];
        for dim in Dimension::ALL {
            for metric in dim.sub_metrics() {
                check_score(metric.key(), values[dim.index()][metric.slot()])?;
            }
            check_score(dim.key(), totals[dim.index()])?;
        }
        Ok(RatingSet { values, totals })
    }
}

impl From<RatingSet> for RatingSetWire {
    fn from(r: RatingSet) -> Self {
        let [c, a, p] = r.values;
        RatingSetWire {
            consistency: ConsistencyWire {
                semantic_consistency: c[0],
                factual_consistency: c[1],
                spatial_temporal_consistency: c[2],
                total: r.totals[0],
            },
            aesthetic: AestheticWire {
                expressiveness: a[0],
                artistic_quality: a[1],
                authenticity: a[2],
                total: r.totals[1],
            },
            physicality: PhysicalityWire {
                basic_properties: p[0],
                dynamics_interactivity: p[1],
                physical_reliability: p[2],
                total: r.totals[2],
            },
        }
    }
}
