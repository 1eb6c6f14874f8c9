//! Tunable constants shared across the workspace.

/// Number of floors a fresh building has unless overridden.
pub const DEFAULT_FLOORS: u32 = 10;

/// Default maximum elevator load, in kg (15 people at 60 kg each).
pub const DEFAULT_MAX_LOAD: u32 = 15 * 60;

/// Default weight of one passenger, in kg.
pub const DEFAULT_PASSENGER_WEIGHT: u32 = 60;

/// At most this many door operations (load or unload) occur between two
/// consecutive `ADD_TICK`s in a single `RUN_CYCLE` expansion.
pub const MAX_NUM_LOADS_REMOVED_PER_TICK: usize = 3;

/// Ticks spent traveling between adjacent floors.
pub const TRAVEL_TICKS: usize = 3;

/// Ticks with no load movement before a harness job is declared stalled.
pub const STALL_TICK_LIMIT: u64 = 500;

/// Sentinel meaning "run at maximum rate, no pacing delay".
pub const SPEED_INFINITE: f64 = f64::INFINITY;
