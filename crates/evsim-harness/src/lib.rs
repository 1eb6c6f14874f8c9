//! `evsim-harness` — the batch test harness.
//!
//! # Crate layout
//!
//! | Module      | Contents                                    |
//! |-------------|-----------------------------------------------|
//! | [`settings`]| `TestSettings`, `InitHook`, `TickHook`         |
//! | [`config`]  | `HarnessConfig`, `ConfigOptions` (JSON loading) |
//! | [`stats`]   | `TestStats` (per-test aggregation)             |
//! | [`job`]     | single-iteration job runner (stall detection)  |
//! | [`suite`]   | `TestSuite`, the worker-pool orchestrator      |
//! | [`error`]   | `HarnessError`, `HarnessResult<T>`             |

mod job;

pub mod config;
pub mod error;
pub mod settings;
pub mod stats;
pub mod suite;

pub use config::{ConfigOptions, HarnessConfig};
pub use error::{HarnessError, HarnessResult};
pub use settings::{InitHook, TestSettings, TickHook};
pub use stats::TestStats;
pub use suite::{SuiteResult, TestSuite};
