//! `evsim-algorithm` — the scheduling-policy trait, its read-only context,
//! and the name-based policy registry.
//!
//! # Crate layout
//!
//! | Module       | Contents                                |
//! |--------------|-------------------------------------------|
//! | [`model`]    | `ElevatorAlgorithm`                        |
//! | [`context`]  | `AlgorithmContext`                         |
//! | [`registry`] | `AlgorithmRegistry`                        |
//! | [`error`]    | `AlgorithmError`, `AlgorithmResult<T>`     |

pub mod context;
pub mod error;
pub mod model;
pub mod registry;

pub use context::AlgorithmContext;
pub use error::{AlgorithmError, AlgorithmResult};
pub use model::{ElevatorAlgorithm, MoveAction};
pub use registry::AlgorithmRegistry;
