//! A serializable snapshot of one engine's state, used by the run-artifact
//! writer and by the round-trip invariant tests.

use evsim_core::Tick;
use evsim_engine::Engine;
use evsim_model::{Elevator, Load};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub floors: u32,
    pub max_load: u32,
    pub tick_count: Tick,
    pub elevators: Vec<Elevator>,
    pub loads: Vec<Load>,
    pub wait_times: Vec<f64>,
    pub time_in_lift: Vec<f64>,
    pub occupancy: Vec<f64>,
}

impl EngineSnapshot {
    /// Copy out everything needed for a round-trip from a live engine's
    /// public fields. Does not capture RNG state or the active algorithm —
    /// a snapshot is a record of what happened, not a resumable checkpoint.
    pub fn capture(engine: &Engine) -> Self {
        Self {
            floors: engine.floors,
            max_load: engine.max_load,
            tick_count: engine.tick_count,
            elevators: engine.elevators.clone(),
            loads: engine.loads.clone(),
            wait_times: engine.wait_times.values().to_vec(),
            time_in_lift: engine.time_in_lift.values().to_vec(),
            occupancy: engine.occupancy.values().to_vec(),
        }
    }
}
