//! Strongly typed, monotonic identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony. Both ids are engine-owned counters,
//! never derived from a global generator, so two engines never collide.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID".
            pub const INVALID: $name = $name(<$inner>::MAX);

            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

typed_id! {
    /// Identifier for a [`Load`](crate) (passenger or cargo unit), unique within an engine.
    pub struct LoadId(u64);
}

typed_id! {
    /// Identifier for an elevator, unique within an engine.
    pub struct ElevatorId(u32);
}

/// Monotonic id generator owned by the engine — replaces the source's global
/// `itertools.count()` counter so ids from independent engines never collide.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IdCounter(u64);

impl IdCounter {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn next_load_id(&mut self) -> LoadId {
        let id = self.0;
        self.0 += 1;
        LoadId(id)
    }
}

#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElevatorIdCounter(u32);

impl ElevatorIdCounter {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn next(&mut self) -> ElevatorId {
        let id = self.0;
        self.0 += 1;
        ElevatorId(id)
    }
}
