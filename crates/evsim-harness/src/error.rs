use evsim_core::Tick;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("algorithm error: {0}")]
    Algorithm(#[from] evsim_algorithm::AlgorithmError),

    #[error("manager error: {0}")]
    Manager(#[from] evsim_manager::ManagerError),

    #[error("test '{name}' iteration {iteration} stalled: no load movement for 500 ticks (at {tick})")]
    TestTimeout { name: String, iteration: u32, tick: Tick },

    #[error("invalid test configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to build worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Output(#[from] evsim_output::OutputError),
}

pub type HarnessResult<T> = Result<T, HarnessError>;
