use serde::Serialize;

use crate::model::record::AssessmentRecord;
use crate::report::AssessmentView;
use crate::scoring::comparator::ComparisonReport;
use crate::scoring::comprehensive::ComprehensiveScores;

#[derive(Debug, Serialize)]
pub struct CompareOutput<'a> {
    pub assessment: &'a AssessmentView,
    pub comparison: &'a ComparisonReport,
}

#[derive(Debug, Serialize)]
pub struct ExtractOutput<'a> {
    pub scores: &'a ComprehensiveScores,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<&'a ComparisonReport>,
}

#[derive(Debug, Serialize)]
pub struct SavedOutput<'a> {
    pub assessment: &'a AssessmentView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved: Option<&'a AssessmentRecord>,
}

/// Pretty JSON with a trailing newline.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;
