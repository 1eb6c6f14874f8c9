//! The simulation's own structured log channel.
//!
//! This is distinct from process-level diagnostics (which use the `log`
//! crate, see crate docs): it models the original system's in-process log
//! stream, observable per tick through `SimObserver`/`ManagerObserver`.

use crate::Tick;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warning,
    Error,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LogOrigin {
    Simulation,
    Test,
    ErrorHandler,
    FileHandler,
}

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogRecord {
    pub level: LogLevel,
    pub origin: LogOrigin,
    pub tick: Tick,
    pub message: String,
}

impl LogRecord {
    pub fn new(level: LogLevel, origin: LogOrigin, tick: Tick, message: impl Into<String>) -> Self {
        Self { level, origin, tick, message: message.into() }
    }
}
