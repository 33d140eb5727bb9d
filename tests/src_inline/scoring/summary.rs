use super::{ScoredSequence, dimension_stats, sample_std, summarize};
use crate::model::weights::WeightProfile;
use crate::model::{SubMetric, ValidationError};
use crate::scoring::PartialScores;
use crate::scoring::comprehensive::comprehensive_scores;

/// Every sub-metric rated `value`, so each dimension and the overall score equal it.
fn uniform(index: &str, value: f64) -> ScoredSequence {
    let scores: PartialScores = SubMetric::ALL.into_iter().map(|m| (m, value)).collect();
    ScoredSequence {
        index: index.to_string(),
        scores: comprehensive_scores(&scores, &WeightProfile::reference()),
    }
}

#[test]
fn test_sample_std_uses_n_minus_one() {
    assert!((sample_std(&[1.0, 2.0, 3.0, 4.0]) - 1.290_994).abs() < 1e-6);
    assert_eq!(sample_std(&[3.0]), 0.0);
    assert_eq!(sample_std(&[]), 0.0);

    let stats = dimension_stats(&[1.0, 2.0, 3.0, 4.0]);
    assert_eq!(stats.mean, 2.5);
    assert_eq!(stats.max, 4.0);
    assert_eq!(stats.min, 1.0);
    assert_eq!(stats.std, 1.29);
}

#[test]
fn test_empty_batch_is_an_error() {
    assert_eq!(
        summarize(&[], &WeightProfile::reference()),
        Err(ValidationError::EmptyBatch)
    );
}

#[test]
fn test_rankings_and_distribution() {
    let batch: Vec<ScoredSequence> = [
        ("a", 1.0),
        ("b", 5.0),
        ("c", 3.2),
        ("d", 4.0),
        ("e", 2.0),
        ("f", 3.2),
        ("g", 4.0),
    ]
    .into_iter()
    .map(|(i, v)| uniform(i, v))
    .collect();

    let summary = summarize(&batch, &WeightProfile::reference()).unwrap();
    assert_eq!(summary.total_sequences, 7);
    assert_eq!(summary.average_overall_score, 3.2);

    let top: Vec<&str> = summary.top.iter().map(|e| e.index.as_str()).collect();
    assert_eq!(top, vec!["b", "d", "g", "c", "f"]);
    let bottom: Vec<&str> = summary.bottom.iter().map(|e| e.index.as_str()).collect();
    assert_eq!(bottom, vec!["g", "c", "f", "e", "a"]);

    assert_eq!(summary.distribution.excellent_sequences, 1);
    assert_eq!(summary.distribution.good_sequences, 2);
    assert_eq!(summary.distribution.fair_sequences, 2);
    assert_eq!(summary.distribution.poor_sequences, 2);

    assert_eq!(summary.overall.max, 5.0);
    assert_eq!(summary.overall.min, 1.0);
    assert_eq!(summary.consistency.mean, 3.2);
}

#[test]
fn test_small_batch_rankings_overlap() {
    let batch = vec![uniform("x", 2.0), uniform("y", 3.0)];
    let summary = summarize(&batch, &WeightProfile::reference()).unwrap();
    assert_eq!(summary.top.len(), 2);
    assert_eq!(summary.bottom.len(), 2);
    assert_eq!(summary.top[0].index, "y");
    assert_eq!(summary.overall.std, 0.71);
}

#[test]
fn test_weight_ratio_label() {
    let summary = summarize(&[uniform("only", 3.0)], &WeightProfile::reference()).unwrap();
    assert_eq!(
        summary.weight_ratio,
        "Consistency:Physicality:Aesthetic = 4:4:2"
    );
}
