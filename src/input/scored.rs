use std::io::BufRead;
use std::path::Path;

use serde_json::Value;

use crate::input::{InputError, open_lines};
use crate::model::weights::WeightProfile;
use crate::model::{SubMetric, check_score};
use crate::scoring::PartialScores;
use crate::scoring::comprehensive::comprehensive_scores;
use crate::scoring::summary::ScoredSequence;

/// Reads one JSON object per line: an `index` plus any of the nine sub-metric
/// keys. Other keys are ignored; invalid scores are skipped with a warning.
pub fn load_scored_jsonl(
    path: &Path,
    weights: &WeightProfile,
) -> Result<Vec<ScoredSequence>, InputError> {
    let reader = open_lines(path)?;
    let mut out = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|source| crate::input::io_error(path, source))?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let value: Value = serde_json::from_str(line)
            .map_err(|e| InputError::Parse(format!("line {line_no}: {e}")))?;
        let Value::Object(obj) = value else {
            return Err(InputError::Parse(format!(
                "line {line_no}: expected a JSON object"
            )));
        };

        let index = match obj.get("index") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => {
                tracing::warn!(
                    line = line_no,
                    "scored line has no index; using line number"
                );
                line_no.to_string()
            }
        };

        let mut scores = PartialScores::new();
        for metric in SubMetric::ALL {
            let Some(raw) = obj.get(metric.key()) else {
                continue;
            };
            match raw.as_f64().map(|v| check_score(metric.key(), v)) {
                Some(Ok(v)) => {
                    scores.insert(metric, v);
                }
                _ => tracing::warn!(
                    line = line_no,
                    metric = metric.key(),
                    "skipping invalid score"
                ),
            }
        }

        out.push(ScoredSequence {
            index,
            scores: comprehensive_scores(&scores, weights),
        });
    }

    tracing::info!(path = %path.display(), sequences = out.len(), "loaded scored sequences");
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/scored.rs"]
mod tests;
