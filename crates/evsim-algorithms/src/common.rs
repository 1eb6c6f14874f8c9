//! Shared "attended-to" bookkeeping: once an elevator claims a pending
//! load, other elevators must not also plan toward it.

use std::collections::HashMap;

use evsim_core::{ElevatorId, LoadId};

#[derive(Default)]
pub struct AttendedTo(HashMap<ElevatorId, LoadId>);

impl AttendedTo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, elevator: ElevatorId, load: LoadId) {
        self.0.insert(elevator, load);
    }

    pub fn clear(&mut self, elevator: ElevatorId) {
        self.0.remove(&elevator);
    }

    pub fn get(&self, elevator: ElevatorId) -> Option<LoadId> {
        self.0.get(&elevator).copied()
    }

    pub fn is_attended(&self, load: LoadId) -> bool {
        self.0.values().any(|l| *l == load)
    }
}
