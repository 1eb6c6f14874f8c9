//! Fluent builder for constructing an [`Engine`].

use evsim_algorithm::ElevatorAlgorithm;
use evsim_core::constants::DEFAULT_MAX_LOAD;

use crate::engine::Engine;
use crate::observer::NoopObserver;

/// Fluent builder for [`Engine`].
///
/// # Required inputs
///
/// - `floors` — building height
/// - `algorithm` — the scheduling policy to drive every elevator
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                          |
/// |-------------------|-----------------------------------|
/// | `.max_load(n)`    | [`DEFAULT_MAX_LOAD`] (900 kg)      |
/// | `.seed(n)`        | `0`                                |
/// | `.elevator_at(f)` | none — call once per elevator      |
pub struct EngineBuilder {
    floors: u32,
    algorithm: Box<dyn ElevatorAlgorithm>,
    max_load: Option<u32>,
    seed: Option<u64>,
    elevator_floors: Vec<u32>,
}

impl EngineBuilder {
    pub fn new(floors: u32, algorithm: Box<dyn ElevatorAlgorithm>) -> Self {
        Self { floors, algorithm, max_load: None, seed: None, elevator_floors: Vec::new() }
    }

    pub fn max_load(mut self, max_load: u32) -> Self {
        self.max_load = Some(max_load);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Add one elevator starting at `floor`. Call once per elevator.
    pub fn elevator_at(mut self, floor: u32) -> Self {
        self.elevator_floors.push(floor);
        self
    }

    pub fn elevators_at(mut self, floors: impl IntoIterator<Item = u32>) -> Self {
        self.elevator_floors.extend(floors);
        self
    }

    pub fn build(self) -> Engine {
        let mut engine = Engine::new(self.floors, self.max_load.unwrap_or(DEFAULT_MAX_LOAD), self.seed.unwrap_or(0), self.algorithm);
        let mut observer = NoopObserver;
        for floor in self.elevator_floors {
            engine.create_elevator(floor, &mut observer);
        }
        engine
    }
}
