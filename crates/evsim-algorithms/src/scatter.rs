//! Scatter: idle elevators pick an unattended pending load at random
//! rather than by age or distance. No pickup filter — any elevator may
//! board any pending load at its floor, attended-to or not.

use std::collections::HashMap;

use evsim_algorithm::{AlgorithmContext, ElevatorAlgorithm};
use evsim_core::{ElevatorId, LoadId, SimRng};

#[derive(Default)]
pub struct Scatter {
    attended_to: HashMap<ElevatorId, LoadId>,
}

impl Scatter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ElevatorAlgorithm for Scatter {
    fn get_new_destination(
        &mut self,
        elevator: ElevatorId,
        ctx: &AlgorithmContext<'_>,
        rng: &mut SimRng,
    ) -> Option<u32> {
        let ev = ctx.elevator(elevator)?;
        if ev.has_load() {
            return ctx
                .loads_of(elevator)
                .min_by_key(|l| ((l.destination_floor as i64 - ev.current_floor as i64).abs(), l.id))
                .map(|l| l.destination_floor);
        }

        let attended: std::collections::HashSet<LoadId> = self.attended_to.values().copied().collect();
        let candidates: Vec<_> = ctx.pending_loads().filter(|l| !attended.contains(&l.id)).collect();
        let go_to = rng.choose(&candidates)?;
        self.attended_to.insert(elevator, go_to.id);
        Some(go_to.initial_floor)
    }

    fn on_load_load(&mut self, _load: LoadId, elevator: ElevatorId, _ctx: &AlgorithmContext<'_>) {
        self.attended_to.remove(&elevator);
    }

    fn on_load_removed(&mut self, load: LoadId, _elevator: ElevatorId, _ctx: &AlgorithmContext<'_>) {
        self.attended_to.retain(|_, v| *v != load);
    }
}
