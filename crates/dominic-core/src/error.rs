use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DominicError {
    #[error("invalid digit {0}: must be 0-9")]
    InvalidDigit(u32),

    #[error("cannot read table {}", .path.display())]
    TableOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed table line {line}: expected label:name:action, found {fields} field(s)")]
    TableFormat { line: usize, fields: usize },

    #[error("invalid range: {0}")]
    InvalidRange(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, DominicError>;
