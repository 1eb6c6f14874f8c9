//! Engine observer trait for progress reporting and diff-event emission.

use evsim_core::{ElevatorId, LoadId, Tick};

/// Callbacks invoked by [`Engine::step`][crate::Engine::step] at key points
/// in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about. Unlike [`evsim_algorithm::ElevatorAlgorithm`]'s
/// hooks (which shape scheduling decisions), these are pure observation
/// points — an observer cannot veto or alter engine state.
pub trait EngineObserver {
    /// Called once per tick, after the tick counter has advanced.
    fn on_tick_end(&mut self, _tick: Tick) {}

    fn on_load_added(&mut self, _load: LoadId, _tick: Tick) {}
    fn on_load_removed(&mut self, _load: LoadId, _tick: Tick) {}
    fn on_load_load(&mut self, _load: LoadId, _elevator: ElevatorId, _tick: Tick) {}
    fn on_load_unload(&mut self, _load: LoadId, _elevator: ElevatorId, _tick: Tick) {}

    fn on_elevator_added(&mut self, _elevator: ElevatorId, _tick: Tick) {}
    fn on_elevator_removed(&mut self, _elevator: ElevatorId, _tick: Tick) {}
    fn on_elevator_move(&mut self, _elevator: ElevatorId, _tick: Tick) {}
    /// Called whenever an elevator is assigned a new (non-`None`) destination.
    fn on_elevator_destination(&mut self, _elevator: ElevatorId, _tick: Tick) {}
    fn on_floors_changed(&mut self, _floors: u32, _tick: Tick) {}

    /// Called once when the engine's load set becomes empty.
    fn on_simulation_end(&mut self, _tick: Tick) {}
}

/// An [`EngineObserver`] that does nothing.
pub struct NoopObserver;

impl EngineObserver for NoopObserver {}
