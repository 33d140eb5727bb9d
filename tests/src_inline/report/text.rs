use chrono::{TimeZone, Utc};

use super::{
    render_assessment_text, render_comparison_text, render_comprehensive_text,
    render_history_text, render_summary_text,
};
use crate::model::record::AssessmentRecord;
use crate::model::weights::WeightProfile;
use crate::model::SubMetric;
use crate::report::AssessmentView;
use crate::scoring::PartialScores;
use crate::scoring::aggregator::ScoringSession;
use crate::scoring::comparator::{ComparisonVector, compare};
use crate::scoring::comprehensive::comprehensive_scores;
use crate::scoring::summary::{ScoredSequence, summarize};

fn full_session(value: f64) -> ScoringSession {
    let mut session = ScoringSession::default();
    for metric in SubMetric::ALL {
        session.set(metric, value).unwrap();
    }
    session
}

#[test]
fn test_assessment_text() {
    let view = AssessmentView::from_session(&full_session(5.0));
    let text = render_assessment_text(&view);
    assert!(text.starts_with("Sequence Assessment\n"));
    assert!(text.contains("Consistency (weight 0.40): 5.00\n"));
    assert!(text.contains("Dynamics and Interactivity"));
    assert!(text.contains("Overall: 5.00 / 5 (100.0 / 100, excellent)\n"));
}

#[test]
fn test_comparison_text() {
    let human = ComparisonVector::new([4.0, 3.0, 5.0]).unwrap();
    let ai = ComparisonVector::new([3.0, 3.0, 4.0]).unwrap();
    let text = render_comparison_text(&compare(&human, &ai));
    assert!(text.contains("MAE: 0.667\n"));
    assert!(text.contains("RMSE: 0.816\n"));
    assert!(text.contains("Consistency index: 0.867\n"));
    assert!(text.contains("Pearson r: 0.866\n"));
    assert!(text.contains(
        "Agreement: Excellent (Excellent agreement between human and AI assessments)\n"
    ));
}

#[test]
fn test_comprehensive_text_marks_missing_metrics() {
    let mut scores = PartialScores::new();
    scores.insert(SubMetric::Authenticity, 4.0);
    let text =
        render_comprehensive_text(&comprehensive_scores(&scores, &WeightProfile::reference()));
    assert!(text.contains("authenticity=4"));
    assert!(text.contains("expressiveness=-"));
    assert!(text.contains("Overall score: 0.27 (Very Poor)\n"));
}

#[test]
fn test_summary_text() {
    let scores: PartialScores = SubMetric::ALL.into_iter().map(|m| (m, 4.0)).collect();
    let batch = vec![ScoredSequence {
        index: "seq_1".to_string(),
        scores: comprehensive_scores(&scores, &WeightProfile::reference()),
    }];
    let text = render_summary_text(&summarize(&batch, &WeightProfile::reference()).unwrap());
    assert!(text.starts_with("=== EVALUATION SUMMARY ===\n"));
    assert!(text.contains("Total sequences evaluated: 1\n"));
    assert!(text.contains("Weight ratio: Consistency:Physicality:Aesthetic = 4:4:2\n"));
    assert!(text.contains("Good sequences (3.5-4.5): 1\n"));
    assert!(text.contains("Top: seq_1 (4.00)\n"));
}

#[test]
fn test_history_text() {
    assert_eq!(render_history_text(&[]), "No assessment records found\n");

    let session = full_session(3.0);
    let ts = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    let record = AssessmentRecord::new(42, "clip", ts, *session.ratings(), session.overall_score());
    let text = render_history_text(&[record]);
    assert!(text.starts_with("42 [2024-01-02T03:04:05Z] clip  Total: 60.0"));
}
