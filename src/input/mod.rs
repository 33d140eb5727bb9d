use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub mod assignments;
pub mod scored;

pub use assignments::parse_assignment;
pub use scored::load_scored_jsonl;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("parse error: {0}")]
    Parse(String),
}

/// Reads a whole evaluator response.
pub fn load_text(path: &Path) -> Result<String, InputError> {
    std::fs::read_to_string(path).map_err(|source| io_error(path, source))
}

pub(crate) fn open_lines(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    let file = File::open(path).map_err(|source| io_error(path, source))?;
    Ok(Box::new(BufReader::new(file)))
}

pub(crate) fn io_error(path: &Path, source: std::io::Error) -> InputError {
    InputError::Io {
        path: path.display().to_string(),
        source,
    }
}
