use std::sync::LazyLock;

use regex::Regex;

use crate::model::{SCORE_MAX, SCORE_MIN, SubMetric};
use crate::scoring::PartialScores;

static PATTERNS: LazyLock<Vec<(SubMetric, Regex)>> = LazyLock::new(|| {
    SubMetric::ALL
        .into_iter()
        .map(|metric| (metric, label_pattern(metric.label())))
        .collect()
});

/// `**Label**: 4`, `Label：4`, `label 4`; words may be joined by spaces, `-` or `_`.
fn label_pattern(label: &str) -> Regex {
    let words: Vec<String> = label
        .split(|c: char| c == ' ' || c == '-')
        .map(regex::escape)
        .collect();
    let pattern = format!(
        r"(?i)\*{{0,2}}{}\*{{0,2}}\s*[:：]?\s*(\d)",
        words.join(r"[\s_-]+")
    );
    Regex::new(&pattern).unwrap_or_else(|e| panic!("invalid built-in pattern for {label}: {e}"))
}

/// Pulls the nine sub-metric scores out of an evaluator response.
///
/// Digits outside [0, 5] are skipped; when a label occurs more than once the
/// last valid occurrence wins. Metrics with no match are absent from the result.
pub fn extract_scores(text: &str) -> PartialScores {
    let mut out = PartialScores::new();
    for (metric, re) in PATTERNS.iter() {
        for caps in re.captures_iter(text) {
            let Some(digit) = caps.get(1) else {
                continue;
            };
            let Ok(score) = digit.as_str().parse::<f64>() else {
                continue;
            };
            if (SCORE_MIN..=SCORE_MAX).contains(&score) {
                out.insert(*metric, score);
            } else {
                tracing::debug!(metric = metric.key(), score, "ignoring out-of-range score");
            }
        }
    }
    if out.len() < SubMetric::ALL.len() {
        let missing: Vec<&str> = SubMetric::ALL
            .into_iter()
            .filter(|m| !out.contains_key(m))
            .map(SubMetric::key)
            .collect();
        tracing::warn!(missing = ?missing, "evaluator response is missing sub-metric scores");
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/scoring/extract.rs"]
mod tests;
