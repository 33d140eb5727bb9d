use crate::model::Dimension;
use crate::model::record::AssessmentRecord;
use crate::report::{AssessmentView, format_f64_2, format_f64_3};
use crate::scoring::comparator::ComparisonReport;
use crate::scoring::comprehensive::ComprehensiveScores;
use crate::scoring::summary::{BatchSummary, DimensionStats, RankEntry};

pub fn render_assessment_text(view: &AssessmentView) -> String {
    let mut out = String::new();

    out.push_str("Sequence Assessment\n");
    out.push_str("===================\n\n");

    for dim in &view.dimensions {
        out.push_str(&format!(
            "{} (weight {}): {}\n",
            dim.dimension.label(),
            format_f64_2(dim.weight),
            format_f64_2(dim.total)
        ));
        for sub in &dim.sub_metrics {
            out.push_str(&format!(
                "  {:<30} {:>4} x {}\n",
                sub.metric.label(),
                format!("{:.1}", sub.value),
                format_f64_2(sub.weight)
            ));
        }
    }
    out.push('\n');
    out.push_str(&format!(
        "Overall: {} / 5 ({:.1} / 100, {})\n",
        format_f64_2(view.overall),
        view.display,
        view.band.name()
    ));

    out
}

pub fn render_comparison_text(report: &ComparisonReport) -> String {
    let mut out = String::new();

    out.push_str("Human vs AI Comparison\n");
    out.push_str("======================\n\n");

    out.push_str(&format!(
        "{:<12} {:>6} {:>6} {:>6}  {}\n",
        "Dimension", "Human", "AI", "Diff", "Agreement"
    ));
    for row in &report.dimensions {
        out.push_str(&format!(
            "{:<12} {:>6.1} {:>6.1} {:>6.1}  {}\n",
            row.dimension.label(),
            row.human,
            row.ai,
            row.difference,
            row.agreement.name()
        ));
    }
    out.push('\n');

    out.push_str(&format!("Pearson r: {}\n", format_f64_3(report.pearson)));
    out.push_str(&format!(
        "Spearman rho: {}\n",
        format_f64_3(report.spearman)
    ));
    out.push_str(&format!("MAE: {}\n", format_f64_3(report.mae)));
    out.push_str(&format!("RMSE: {}\n", format_f64_3(report.rmse)));
    out.push_str(&format!(
        "Consistency index: {}\n",
        format_f64_3(report.consistency_index)
    ));
    out.push_str(&format!(
        "Agreement: {} ({})\n",
        report.agreement.name(),
        report.agreement.description()
    ));

    out
}

pub fn render_comprehensive_text(scores: &ComprehensiveScores) -> String {
    let mut out = String::new();

    out.push_str("Evaluator Scores\n");
    out.push_str("================\n\n");

    for dim in Dimension::ALL {
        let present: Vec<String> = dim
            .sub_metrics()
            .into_iter()
            .map(|m| match scores.individual_scores.get(&m) {
                Some(v) => format!("{}={}", m.key(), v),
                None => format!("{}=-", m.key()),
            })
            .collect();
        out.push_str(&format!("{}: {}\n", dim.label(), present.join(", ")));
    }
    out.push('\n');

    let grades = [
        (Dimension::Consistency, scores.consistency_grade),
        (Dimension::Aesthetic, scores.aesthetic_grade),
        (Dimension::Physicality, scores.physicality_grade),
    ];
    for (dim, grade) in grades {
        out.push_str(&format!(
            "{} score: {} ({})\n",
            dim.label(),
            format_f64_2(scores.dimension_score(dim)),
            grade.name()
        ));
    }
    out.push_str(&format!(
        "Overall score: {} ({})\n",
        format_f64_2(scores.overall_score),
        scores.overall_grade.name()
    ));
    out.push_str(&format!(
        "Simple averages: consistency={}, aesthetic={}, physicality={}, overall={}\n",
        format_f64_2(scores.consistency_avg_simple),
        format_f64_2(scores.aesthetic_avg_simple),
        format_f64_2(scores.physicality_avg_simple),
        format_f64_2(scores.overall_avg_simple)
    ));
    out.push_str(&format!(
        "Pass rate: >=3 {}, >=4 {}\n",
        format_f64_2(scores.pass_rate_3),
        format_f64_2(scores.pass_rate_4)
    ));

    out
}

pub fn render_summary_text(summary: &BatchSummary) -> String {
    let mut out = String::new();

    out.push_str("=== EVALUATION SUMMARY ===\n");
    out.push_str(&format!(
        "Total sequences evaluated: {}\n",
        summary.total_sequences
    ));
    out.push_str(&format!(
        "Overall average score: {}\n",
        format_f64_2(summary.average_overall_score)
    ));
    out.push_str(&format!("Weight ratio: {}\n\n", summary.weight_ratio));

    out.push_str(&format!(
        "{:<12} {:>6} {:>6} {:>6} {:>6}\n",
        "", "mean", "max", "min", "std"
    ));
    let rows: [(&str, &DimensionStats); 4] = [
        ("Consistency", &summary.consistency),
        ("Aesthetic", &summary.aesthetic),
        ("Physicality", &summary.physicality),
        ("Overall", &summary.overall),
    ];
    for (name, s) in rows {
        out.push_str(&format!(
            "{:<12} {:>6.2} {:>6.2} {:>6.2} {:>6.2}\n",
            name, s.mean, s.max, s.min, s.std
        ));
    }
    out.push('\n');

    let d = &summary.distribution;
    out.push_str(&format!(
        "Excellent sequences (>=4.5): {}\n",
        d.excellent_sequences
    ));
    out.push_str(&format!("Good sequences (3.5-4.5): {}\n", d.good_sequences));
    out.push_str(&format!("Fair sequences (3.0-3.5): {}\n", d.fair_sequences));
    out.push_str(&format!("Poor sequences (<3.0): {}\n", d.poor_sequences));
    out.push('\n');

    out.push_str(&format!("Top: {}\n", ranking(&summary.top)));
    out.push_str(&format!("Bottom: {}\n", ranking(&summary.bottom)));

    out
}

pub fn render_history_text(records: &[AssessmentRecord]) -> String {
    if records.is_empty() {
        return "No assessment records found\n".to_string();
    }
    let mut out = String::new();
    for record in records {
        out.push_str(&format!(
            "{} [{}] {}  Total: {:.1}  Consistency: {}  Aesthetic: {}  Physicality: {}\n",
            record.id(),
            record.timestamp(),
            record.label(),
            record.total(),
            record.dimension_total(Dimension::Consistency),
            record.dimension_total(Dimension::Aesthetic),
            record.dimension_total(Dimension::Physicality)
        ));
    }
    out
}

fn ranking(entries: &[RankEntry]) -> String {
    entries
        .iter()
        .map(|e| format!("{} ({})", e.index, format_f64_2(e.score)))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
