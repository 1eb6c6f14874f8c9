use thiserror::Error;

#[derive(Debug, Error)]
pub enum AlgorithmError {
    #[error("algorithm '{0}' is already registered")]
    DuplicateName(String),

    #[error("unknown algorithm '{0}'")]
    UnknownAlgorithm(String),
}

pub type AlgorithmResult<T> = Result<T, AlgorithmError>;
