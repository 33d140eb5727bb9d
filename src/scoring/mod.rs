use std::collections::BTreeMap;

use crate::model::SubMetric;

pub mod aggregator;
pub mod comparator;
pub mod comprehensive;
pub mod extract;
pub mod summary;

/// Sub-metric scores where some metrics may be absent.
pub type PartialScores = BTreeMap<SubMetric, f64>;
