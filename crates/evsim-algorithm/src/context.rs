//! Read-only simulation state passed to every algorithm callback.

use evsim_core::{ElevatorId, LoadId};
use evsim_model::{Elevator, Load};

/// A read-only snapshot of building state, handed to every
/// [`ElevatorAlgorithm`][crate::ElevatorAlgorithm] callback.
///
/// Built fresh by the engine before each callback; no heap allocation is
/// required on the caller's side — it borrows directly from the engine's
/// owned `Vec<Elevator>` / `Vec<Load>`.
pub struct AlgorithmContext<'a> {
    pub floors: u32,
    pub elevators: &'a [Elevator],
    pub loads: &'a [Load],
}

impl<'a> AlgorithmContext<'a> {
    pub fn new(floors: u32, elevators: &'a [Elevator], loads: &'a [Load]) -> Self {
        Self { floors, elevators, loads }
    }

    pub fn elevator(&self, id: ElevatorId) -> Option<&Elevator> {
        self.elevators.iter().find(|e| e.id == id)
    }

    pub fn load(&self, id: LoadId) -> Option<&Load> {
        self.loads.iter().find(|l| l.id == id)
    }

    /// Loads with no carrying elevator, in stable engine order.
    pub fn pending_loads(&self) -> impl Iterator<Item = &Load> {
        self.loads.iter().filter(|l| l.is_pending())
    }

    pub fn loads_of(&self, elevator: ElevatorId) -> impl Iterator<Item = &Load> {
        self.loads.iter().filter(move |l| l.elevator == Some(elevator))
    }
}
