//! The `Load` value type — a passenger or generic payload moving through
//! the building.

use evsim_core::{ElevatorId, LoadId, Tick};

/// A passenger or cargo unit with an origin and destination floor.
///
/// Ownership of every `Load` lives with the engine; the `elevator` field is
/// a weak reference (a plain id, resolved by the engine's lookup) rather
/// than a shared pointer, so elevator and load never form a reference cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Load {
    pub id: LoadId,
    pub initial_floor: u32,
    pub destination_floor: u32,
    pub weight: u32,
    pub current_floor: u32,
    pub elevator: Option<ElevatorId>,
    pub tick_created: Tick,
    pub enter_lift_tick: Option<Tick>,
}

impl Load {
    pub fn new(id: LoadId, initial_floor: u32, destination_floor: u32, weight: u32, tick_created: Tick) -> Self {
        Self {
            id,
            initial_floor,
            destination_floor,
            weight,
            current_floor: initial_floor,
            elevator: None,
            tick_created,
            enter_lift_tick: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.elevator.is_none()
    }

    /// Reserve this load for `elevator` ahead of actual boarding, so no
    /// other elevator planning a cycle in the same tick can also claim it.
    /// Does not touch `enter_lift_tick` — call `board` when pickup actually
    /// happens.
    pub fn claim(&mut self, elevator: ElevatorId) {
        self.elevator = Some(elevator);
    }

    /// Mark this load as picked up by `elevator` at `tick`.
    pub fn board(&mut self, elevator: ElevatorId, tick: Tick) {
        self.elevator = Some(elevator);
        self.enter_lift_tick = Some(tick);
    }

    /// Mark this load as dropped off. Returns the tick it boarded, if any.
    pub fn disembark(&mut self) -> Option<Tick> {
        self.elevator = None;
        self.enter_lift_tick.take()
    }
}
