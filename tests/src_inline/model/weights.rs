use super::{WeightError, WeightProfile};
use crate::model::{Dimension, SubMetric};

fn reference_json() -> serde_json::Value {
    serde_json::json!({
        "dimension_weights": {"consistency": 0.4, "aesthetic": 0.2, "physicality": 0.4},
        "sub_weights": {
            "consistency": {
                "semantic_consistency": 0.33,
                "factual_consistency": 0.33,
                "spatial_temporal_consistency": 0.34
            },
            "aesthetic": {"expressiveness": 0.33, "artistic_quality": 0.33, "authenticity": 0.34},
            "physicality": {
                "basic_properties": 0.33,
                "dynamics_interactivity": 0.33,
                "physical_reliability": 0.34
            }
        }
    })
}

#[test]
fn test_reference_profile_is_four_four_two() {
    let w = WeightProfile::reference();
    assert_eq!(w.dimension_weight(Dimension::Consistency), 0.4);
    assert_eq!(w.dimension_weight(Dimension::Physicality), 0.4);
    assert_eq!(w.dimension_weight(Dimension::Aesthetic), 0.2);
    assert_eq!(w.sub_weight(SubMetric::PhysicalReliability), 0.34);
    assert_eq!(w.sub_weights(Dimension::Aesthetic), [0.33, 0.33, 0.34]);
    assert_eq!(WeightProfile::default(), w);
}

#[test]
fn test_new_rejects_bad_sum() {
    let err = WeightProfile::new([[0.33, 0.33, 0.34]; 3], [0.5, 0.5, 0.5]).unwrap_err();
    assert!(matches!(err, WeightError::BadSum { ref group, .. } if group == "dimensions"));
}

#[test]
fn test_new_rejects_out_of_range_weight() {
    let err = WeightProfile::new(
        [[1.2, -0.2, 0.0], [0.33, 0.33, 0.34], [0.33, 0.33, 0.34]],
        [0.4, 0.2, 0.4],
    )
    .unwrap_err();
    assert!(matches!(
        err,
        WeightError::OutOfRange { ref key, .. } if key == "semantic_consistency"
    ));
}

#[test]
fn test_profile_file_parses_reference() {
    let profile: WeightProfile = serde_json::from_value(reference_json()).unwrap();
    assert_eq!(profile, WeightProfile::reference());
}

#[test]
fn test_profile_file_rejects_misplaced_sub_metric() {
    let mut raw = reference_json();
    let aesthetic = raw["sub_weights"]["aesthetic"].as_object_mut().unwrap();
    aesthetic.remove("authenticity");
    aesthetic.insert("basic_properties".to_string(), serde_json::json!(0.34));
    let err = serde_json::from_value::<WeightProfile>(raw).unwrap_err();
    assert!(err.to_string().contains("aesthetic.basic_properties"));
}

#[test]
fn test_profile_file_reports_missing_dimension() {
    let mut raw = reference_json();
    raw["dimension_weights"].as_object_mut().unwrap().remove("aesthetic");
    let err = serde_json::from_value::<WeightProfile>(raw).unwrap_err();
    assert!(err.to_string().contains("missing weight for `aesthetic`"));
}

#[test]
fn test_load_reads_custom_profile() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weights.json");
    let mut raw = reference_json();
    raw["dimension_weights"] = serde_json::json!({
        "consistency": 0.5, "aesthetic": 0.25, "physicality": 0.25
    });
    std::fs::write(&path, raw.to_string()).unwrap();

    let profile = WeightProfile::load(&path).unwrap();
    assert_eq!(profile.dimension_weights(), [0.5, 0.25, 0.25]);

    let err = WeightProfile::load(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, WeightError::Io { .. }));
}
