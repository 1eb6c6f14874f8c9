//! `evsim-core` — identifiers, time, direction, RNG, and error primitives
//! shared by every crate in the elevator group simulator workspace.
//!
//! # Crate layout
//!
//! | Module        | Contents                                       |
//! |----------------|------------------------------------------------|
//! | [`ids`]        | `LoadId`, `ElevatorId`, engine-owned counters   |
//! | [`time`]       | `Tick`                                         |
//! | [`direction`]  | `Direction`                                    |
//! | [`rng`]        | `SimRng`                                        |
//! | [`log`]        | `LogLevel`, `LogOrigin`, `LogRecord`           |
//! | [`constants`]  | Shared tunables                                 |
//! | [`error`]      | `CoreError`, `CoreResult<T>`                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                        |
//! |---------|------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types. |

pub mod constants;
pub mod direction;
pub mod error;
pub mod ids;
pub mod log;
pub mod rng;
pub mod time;

pub use direction::Direction;
pub use error::{CoreError, CoreResult};
pub use ids::{ElevatorId, ElevatorIdCounter, IdCounter, LoadId};
pub use log::{LogLevel, LogOrigin, LogRecord};
pub use rng::SimRng;
pub use time::Tick;
