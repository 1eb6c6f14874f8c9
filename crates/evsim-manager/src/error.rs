use thiserror::Error;

use evsim_algorithm::AlgorithmError;
use evsim_engine::EngineError;

#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("algorithm error: {0}")]
    Algorithm(#[from] AlgorithmError),

    #[error("bad argument: {0}")]
    BadArgument(String),
}

pub type ManagerResult<T> = Result<T, ManagerError>;
