use thiserror::Error;

use evsim_core::{ElevatorId, LoadId};
use evsim_model::ModelError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("unknown elevator id {0}")]
    UnknownElevator(ElevatorId),

    #[error("unknown load id {0}")]
    UnknownLoad(LoadId),

    #[error("model error: {0}")]
    Model(#[from] ModelError),

    #[error("algorithm panicked while handling {hook}")]
    AlgorithmPanicked { hook: &'static str },
}

pub type EngineResult<T> = Result<T, EngineError>;
