use crate::model::Dimension;
use crate::model::record::AssessmentRecord;

pub const CSV_HEADER: [&str; 6] = [
    "Video",
    "Timestamp",
    "Consistency",
    "Aesthetic",
    "Physicality",
    "Total Score",
];

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExportError {
    #[error("CSV is empty")]
    Empty,
    #[error("unexpected CSV header on line 1: {0}")]
    BadHeader(String),
    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: `{value}` is not a number")]
    BadNumber { line: usize, value: String },
    #[error("line {line}: unterminated quoted field")]
    UnterminatedQuote { line: usize },
}

/// One exported history row.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvRow {
    pub label: String,
    pub timestamp: String,
    pub totals: [f64; 3],
    pub total: f64,
}

impl From<&AssessmentRecord> for CsvRow {
    fn from(record: &AssessmentRecord) -> Self {
        CsvRow {
            label: record.label().to_string(),
            timestamp: record.timestamp().to_string(),
            totals: Dimension::ALL.map(|d| record.dimension_total(d)),
            total: record.total(),
        }
    }
}

/// Header plus one row per record, in history order, newline-separated.
pub fn render_csv(records: &[AssessmentRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(CSV_HEADER.join(","));
    for record in records {
        let row = CsvRow::from(record);
        let fields = [
            quote_field(&row.label),
            quote_field(&row.timestamp),
            row.totals[0].to_string(),
            row.totals[1].to_string(),
            row.totals[2].to_string(),
            row.total.to_string(),
        ];
        lines.push(fields.join(","));
    }
    lines.join("\n")
}

pub fn parse_csv(text: &str) -> Result<Vec<CsvRow>, ExportError> {
    let records = split_records(text)?;
    let mut iter = records.into_iter();
    let (_, header) = iter.next().ok_or(ExportError::Empty)?;
    if header != CSV_HEADER {
        return Err(ExportError::BadHeader(header.join(",")));
    }

    let mut rows = Vec::new();
    for (line, fields) in iter {
        if fields.len() == 1 && fields[0].is_empty() {
            continue;
        }
        if fields.len() != CSV_HEADER.len() {
            return Err(ExportError::FieldCount {
                line,
                expected: CSV_HEADER.len(),
                found: fields.len(),
            });
        }
        let number = |value: &str| -> Result<f64, ExportError> {
            value
                .trim()
                .parse::<f64>()
                .map_err(|_| ExportError::BadNumber {
                    line,
                    value: value.to_string(),
                })
        };
        rows.push(CsvRow {
            label: fields[0].clone(),
            timestamp: fields[1].clone(),
            totals: [
                number(&fields[2])?,
                number(&fields[3])?,
                number(&fields[4])?,
            ],
            total: number(&fields[5])?,
        });
    }
    Ok(rows)
}

fn quote_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Splits CSV text into records of fields, each tagged with its starting line.
fn split_records(text: &str) -> Result<Vec<(usize, Vec<String>)>, ExportError> {
    let mut records = Vec::new();
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut line = 1usize;
    let mut record_line = 1usize;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push(c);
                }
                _ => field.push(c),
            }
            continue;
        }
        match c {
            '"' if field.is_empty() => in_quotes = true,
            ',' => fields.push(std::mem::take(&mut field)),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                fields.push(std::mem::take(&mut field));
                records.push((record_line, std::mem::take(&mut fields)));
                line += 1;
                record_line = line;
            }
            _ => field.push(c),
        }
    }
    if in_quotes {
        return Err(ExportError::UnterminatedQuote { line: record_line });
    }
    if !field.is_empty() || !fields.is_empty() {
        fields.push(field);
        records.push((record_line, fields));
    }
    Ok(records)
}

#[cfg(test)]
#[path = "../../tests/src_inline/store/export.rs"]
mod tests;
