//! Observer trait for the manager's batched, per-tick diff-event stream.

use evsim_core::{LogRecord, Tick};

use crate::diff::DiffEvent;

/// Receives one batch of [`DiffEvent`]s after each tick the manager actually
/// runs (it is never called for a tick skipped while paused).
///
/// Distinct from [`evsim_engine::EngineObserver`]: this is the manager's
/// external, subscriber-facing surface (what `send_event` notified in the
/// original system), not the engine's internal hook set.
pub trait ManagerObserver {
    fn send_event(&mut self, _tick: Tick, _events: &[DiffEvent]) {}

    /// The simulation's own log stream (see [`evsim_core::log`]), independent
    /// of process-level `log` crate diagnostics.
    fn on_log(&mut self, _record: &LogRecord) {}
}

/// A [`ManagerObserver`] that does nothing.
pub struct NoopManagerObserver;

impl ManagerObserver for NoopManagerObserver {}
