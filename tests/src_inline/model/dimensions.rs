use super::{Dimension, SubMetric};
use crate::model::ValidationError;

#[test]
fn test_sub_metric_table_matches_enum_order() {
    for metric in SubMetric::ALL {
        assert_eq!(metric.def().metric, metric);
    }
}

#[test]
fn test_every_dimension_owns_three_slots() {
    for dim in Dimension::ALL {
        let metrics = dim.sub_metrics();
        for (slot, metric) in metrics.iter().enumerate() {
            assert_eq!(metric.dimension(), dim);
            assert_eq!(metric.slot(), slot);
        }
    }
}

#[test]
fn test_dimension_parse_is_case_insensitive() {
    assert_eq!(
        "Physicality".parse::<Dimension>().unwrap(),
        Dimension::Physicality
    );
    assert_eq!(
        " aesthetic ".parse::<Dimension>().unwrap(),
        Dimension::Aesthetic
    );
    assert_eq!(
        "color".parse::<Dimension>(),
        Err(ValidationError::UnknownDimension("color".to_string()))
    );
}

#[test]
fn test_sub_metric_keys_round_trip() {
    for metric in SubMetric::ALL {
        assert_eq!(metric.key().parse::<SubMetric>().unwrap(), metric);
        assert_eq!(metric.to_string(), metric.key());
    }
    assert_eq!(
        SubMetric::from_key("DYNAMICS_INTERACTIVITY"),
        Some(SubMetric::DynamicsInteractivity)
    );
    assert!(matches!(
        "sharpness".parse::<SubMetric>(),
        Err(ValidationError::UnknownSubMetric(_))
    ));
}

#[test]
fn test_serde_uses_snake_case_keys() {
    let json = serde_json::to_string(&SubMetric::SpatialTemporalConsistency).unwrap();
    assert_eq!(json, "\"spatial_temporal_consistency\"");
    let dim: Dimension = serde_json::from_str("\"consistency\"").unwrap();
    assert_eq!(dim, Dimension::Consistency);
}
