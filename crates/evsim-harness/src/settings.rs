//! One test's full configuration, plus the optional programmatic hooks that
//! cannot be expressed in the JSON config (see [`crate::config`]).

use std::sync::Arc;

use evsim_algorithm::ElevatorAlgorithm;
use evsim_core::constants::{DEFAULT_MAX_LOAD, SPEED_INFINITE};

/// Called once per job, right after the algorithm is installed and before
/// elevators/passengers are populated.
pub type InitHook = Arc<dyn Fn(&mut dyn ElevatorAlgorithm) + Send + Sync>;

/// Called once per tick, before the manager steps.
pub type TickHook = Arc<dyn Fn(&mut dyn ElevatorAlgorithm) + Send + Sync>;

/// Settings for a single named test. `total_iterations` jobs are expanded
/// from one `TestSettings`, each with a seed derived from `(seed + iteration)
/// mod 2^32`.
#[derive(Clone)]
pub struct TestSettings {
    pub name: String,
    pub algorithm_name: String,
    pub seed: u64,
    pub speed: f64,
    pub floors: u32,
    pub num_elevators: u32,
    pub num_passengers: u32,
    pub max_load: u32,
    pub total_iterations: u32,
    /// Pre-populated `(initial_floor, destination_floor)` pairs, injected
    /// into every job in addition to the `num_passengers` random ones.
    pub loads: Vec<(u32, u32)>,
    pub init_function: Option<InitHook>,
    pub on_tick: Option<TickHook>,
}

impl TestSettings {
    pub fn new(name: impl Into<String>, algorithm_name: impl Into<String>, floors: u32, total_iterations: u32) -> Self {
        Self {
            name: name.into(),
            algorithm_name: algorithm_name.into(),
            seed: 0,
            speed: SPEED_INFINITE,
            floors,
            num_elevators: 1,
            num_passengers: 0,
            max_load: DEFAULT_MAX_LOAD,
            total_iterations,
            loads: Vec::new(),
            init_function: None,
            on_tick: None,
        }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    pub fn num_elevators(mut self, n: u32) -> Self {
        self.num_elevators = n;
        self
    }

    pub fn num_passengers(mut self, n: u32) -> Self {
        self.num_passengers = n;
        self
    }

    pub fn max_load(mut self, max_load: u32) -> Self {
        self.max_load = max_load;
        self
    }

    pub fn loads(mut self, loads: Vec<(u32, u32)>) -> Self {
        self.loads = loads;
        self
    }

    pub fn init_function(mut self, hook: impl Fn(&mut dyn ElevatorAlgorithm) + Send + Sync + 'static) -> Self {
        self.init_function = Some(Arc::new(hook));
        self
    }

    pub fn on_tick(mut self, hook: impl Fn(&mut dyn ElevatorAlgorithm) + Send + Sync + 'static) -> Self {
        self.on_tick = Some(Arc::new(hook));
        self
    }
}
