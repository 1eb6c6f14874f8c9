//! Error types for `evsim-output`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "artifact")]
    #[error("artifact preamble/sentinel mismatch: expected {expected:?}, found {found:?}")]
    BadPreamble { expected: String, found: String },
}

pub type OutputResult<T> = Result<T, OutputError>;
