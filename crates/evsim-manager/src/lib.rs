//! `evsim-manager` — the control-plane wrapper around `evsim-engine`.
//!
//! # Crate layout
//!
//! | Module       | Contents                         |
//! |--------------|------------------------------------|
//! | [`manager`]  | `Manager`                          |
//! | [`diff`]     | `DiffEvent`                        |
//! | [`observer`] | `ManagerObserver`, `NoopManagerObserver` |
//! | [`error`]    | `ManagerError`, `ManagerResult<T>` |

pub mod diff;
pub mod error;
pub mod manager;
pub mod observer;

pub use diff::DiffEvent;
pub use error::{ManagerError, ManagerResult};
pub use manager::Manager;
pub use observer::{ManagerObserver, NoopManagerObserver};
