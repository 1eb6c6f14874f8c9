//! Diff events — the structured per-tick change stream external subscribers
//! observe, batched once per tick after all engine mutation for that tick
//! has completed.

use evsim_core::{ElevatorId, LoadId};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DiffEvent {
    ElevatorMove { elevator: ElevatorId, floor: u32 },
    ElevatorDestination { elevator: ElevatorId, floor: u32 },
    LoadLoad { elevator: ElevatorId, load: LoadId },
    LoadUnload { elevator: ElevatorId, load: LoadId },
}
