//! The `Elevator` value type and its direction/capacity helpers.

use evsim_core::{Direction, ElevatorId, LoadId};

use crate::action::ActionQueue;
use crate::load::Load;

/// A single elevator cabin.
///
/// `loads` holds only the ids of loads currently on board; the loads
/// themselves remain owned by the engine's load set.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Elevator {
    pub id: ElevatorId,
    pub current_floor: u32,
    pub destination: Option<u32>,
    pub loads: Vec<LoadId>,
    pub enabled: bool,
    pub action_queue: ActionQueue,
}

impl Elevator {
    pub fn new(id: ElevatorId, floor: u32) -> Self {
        Self {
            id,
            current_floor: floor,
            destination: None,
            loads: Vec::new(),
            enabled: true,
            action_queue: ActionQueue::new(),
        }
    }

    /// Direction derived from `current_floor` and `destination`.
    /// `None` when there is no destination or the destination equals the
    /// current floor.
    pub fn direction(&self) -> Option<Direction> {
        self.destination.and_then(|dest| Direction::towards(self.current_floor, dest))
    }

    pub fn total_load(&self, loads: &[Load]) -> u32 {
        self.loads
            .iter()
            .filter_map(|id| loads.iter().find(|l| l.id == *id))
            .map(|l| l.weight)
            .sum()
    }

    pub fn has_load(&self) -> bool {
        !self.loads.is_empty()
    }

    pub fn remove_load(&mut self, load_id: LoadId) {
        self.loads.retain(|id| *id != load_id);
    }
}
