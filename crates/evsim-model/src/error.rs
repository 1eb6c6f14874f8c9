use thiserror::Error;

use evsim_core::{ElevatorId, LoadId};

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown elevator id {0}")]
    UnknownElevator(ElevatorId),

    #[error("unknown load id {0}")]
    UnknownLoad(LoadId),

    #[error("bad argument: {0}")]
    BadArgument(String),

    #[error("elevator {elevator} would exceed max load ({attempted} > {max})")]
    FullElevator { elevator: ElevatorId, attempted: u32, max: u32 },
}

pub type ModelResult<T> = Result<T, ModelError>;
