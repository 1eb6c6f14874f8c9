//! `evsim-model` — `Load`, `Elevator`, the per-elevator action queue, and
//! statistics accumulators for the elevator group simulator.
//!
//! # Crate layout
//!
//! | Module     | Contents                                    |
//! |------------|----------------------------------------------|
//! | [`load`]   | `Load`                                       |
//! | [`elevator`] | `Elevator`                                 |
//! | [`action`] | `Action`, `ActionQueue`                     |
//! | [`stats`]  | `GeneratedStats`, `CombinedStats`, `StatSummary` |
//! | [`error`]  | `ModelError`, `ModelResult<T>`              |

pub mod action;
pub mod elevator;
pub mod error;
pub mod load;
pub mod stats;

pub use action::{Action, ActionQueue};
pub use elevator::Elevator;
pub use error::{ModelError, ModelResult};
pub use load::Load;
pub use stats::{CombinedStats, GeneratedStats, StatSummary};
