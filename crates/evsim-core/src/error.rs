//! Framework error type shared by the lowest layer.
//!
//! Sub-crates define their own error enums scoped to their layer and convert
//! lower-layer errors in via `#[from]` rather than re-wrapping by hand.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("bad argument: {0}")]
    BadArgument(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CoreResult<T> = Result<T, CoreError>;
