use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Consistency,
    Aesthetic,
    Physicality,
}

impl Dimension {
    /// Canonical order used by comparison vectors and exports.
    pub const ALL: [Dimension; 3] = [
        Dimension::Consistency,
        Dimension::Aesthetic,
        Dimension::Physicality,
    ];

    pub fn index(self) -> usize {
        match self {
            Dimension::Consistency => 0,
            Dimension::Aesthetic => 1,
            Dimension::Physicality => 2,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Dimension::Consistency => "consistency",
            Dimension::Aesthetic => "aesthetic",
            Dimension::Physicality => "physicality",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Dimension::Consistency => "Consistency",
            Dimension::Aesthetic => "Aesthetic",
            Dimension::Physicality => "Physicality",
        }
    }

    pub fn sub_metrics(self) -> [SubMetric; 3] {
        match self {
            Dimension::Consistency => [
                SubMetric::SemanticConsistency,
                SubMetric::FactualConsistency,
                SubMetric::SpatialTemporalConsistency,
            ],
            Dimension::Aesthetic => [
                SubMetric::Expressiveness,
                SubMetric::ArtisticQuality,
                SubMetric::Authenticity,
            ],
            Dimension::Physicality => [
                SubMetric::BasicProperties,
                SubMetric::DynamicsInteractivity,
                SubMetric::PhysicalReliability,
            ],
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Dimension {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Dimension::ALL
            .into_iter()
            .find(|d| d.key() == lower)
            .ok_or_else(|| ValidationError::UnknownDimension(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubMetric {
    SemanticConsistency,
    FactualConsistency,
    SpatialTemporalConsistency,
    Expressiveness,
    ArtisticQuality,
    Authenticity,
    BasicProperties,
    DynamicsInteractivity,
    PhysicalReliability,
}

#[derive(Debug, Clone, Copy)]
pub struct SubMetricDef {
    pub metric: SubMetric,
    pub key: &'static str,
    pub label: &'static str,
    pub dimension: Dimension,
    pub slot: usize,
}

const SUB_METRIC_DEFS: &[SubMetricDef] = &[
    SubMetricDef {
        metric: SubMetric::SemanticConsistency,
        key: "semantic_consistency",
        label: "Semantic Consistency",
        dimension: Dimension::Consistency,
        slot: 0,
    },
    SubMetricDef {
        metric: SubMetric::FactualConsistency,
        key: "factual_consistency",
        label: "Factual Consistency",
        dimension: Dimension::Consistency,
        slot: 1,
    },
    SubMetricDef {
        metric: SubMetric::SpatialTemporalConsistency,
        key: "spatial_temporal_consistency",
        label: "Spatial-Temporal Consistency",
        dimension: Dimension::Consistency,
        slot: 2,
    },
    SubMetricDef {
        metric: SubMetric::Expressiveness,
        key: "expressiveness",
        label: "Expressiveness",
        dimension: Dimension::Aesthetic,
        slot: 0,
    },
    SubMetricDef {
        metric: SubMetric::ArtisticQuality,
        key: "artistic_quality",
        label: "Artistic Quality",
        dimension: Dimension::Aesthetic,
        slot: 1,
    },
    SubMetricDef {
        metric: SubMetric::Authenticity,
        key: "authenticity",
        label: "Authenticity",
        dimension: Dimension::Aesthetic,
        slot: 2,
    },
    SubMetricDef {
        metric: SubMetric::BasicProperties,
        key: "basic_properties",
        label: "Basic Properties",
        dimension: Dimension::Physicality,
        slot: 0,
    },
    SubMetricDef {
        metric: SubMetric::DynamicsInteractivity,
        key: "dynamics_interactivity",
        label: "Dynamics and Interactivity",
        dimension: Dimension::Physicality,
        slot: 1,
    },
    SubMetricDef {
        metric: SubMetric::PhysicalReliability,
        key: "physical_reliability",
        label: "Physical Reliability",
        dimension: Dimension::Physicality,
        slot: 2,
    },
];

impl SubMetric {
    pub const ALL: [SubMetric; 9] = [
        SubMetric::SemanticConsistency,
        SubMetric::FactualConsistency,
        SubMetric::SpatialTemporalConsistency,
        SubMetric::Expressiveness,
        SubMetric::ArtisticQuality,
        SubMetric::Authenticity,
        SubMetric::BasicProperties,
        SubMetric::DynamicsInteractivity,
        SubMetric::PhysicalReliability,
    ];

    pub fn def(self) -> &'static SubMetricDef {
        // Table order matches ALL.
        &SUB_METRIC_DEFS[self as usize]
    }

    pub fn key(self) -> &'static str {
        self.def().key
    }

    pub fn label(self) -> &'static str {
        self.def().label
    }

    pub fn dimension(self) -> Dimension {
        self.def().dimension
    }

    /// Position of the metric inside its dimension (0..3).
    pub fn slot(self) -> usize {
        self.def().slot
    }

    pub fn from_key(key: &str) -> Option<SubMetric> {
        let lower = key.trim().to_ascii_lowercase();
        SUB_METRIC_DEFS
            .iter()
            .find(|d| d.key == lower)
            .map(|d| d.metric)
    }
}

impl fmt::Display for SubMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SubMetric {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SubMetric::from_key(s).ok_or_else(|| ValidationError::UnknownSubMetric(s.to_string()))
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/dimensions.rs"]
mod tests;
