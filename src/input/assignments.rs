use crate::model::ValidationError;

/// A `--set` argument: `key=value` or `dimension.key=value`.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub dimension: Option<String>,
    pub key: String,
    pub value: f64,
}

pub fn parse_assignment(raw: &str) -> Result<Assignment, ValidationError> {
    let malformed = || ValidationError::MalformedAssignment(raw.to_string());
    let (lhs, rhs) = raw.split_once('=').ok_or_else(malformed)?;
    let lhs = lhs.trim();
    if lhs.is_empty() {
        return Err(malformed());
    }
    let value = rhs.trim().parse::<f64>().map_err(|_| malformed())?;

    let (dimension, key) = match lhs.split_once('.') {
        Some((dim, key)) if !dim.is_empty() && !key.is_empty() => {
            (Some(dim.to_string()), key.to_string())
        }
        Some(_) => return Err(malformed()),
        None => (None, lhs.to_string()),
    };
    Ok(Assignment {
        dimension,
        key,
        value,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/assignments.rs"]
mod tests;
