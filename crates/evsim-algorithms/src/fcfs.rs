//! First-Come-First-Served: elevators go straight to the oldest unattended
//! pending load, in strict enqueue order.

use std::collections::HashMap;

use evsim_algorithm::{AlgorithmContext, ElevatorAlgorithm};
use evsim_core::{ElevatorId, LoadId, SimRng};

#[derive(Default)]
pub struct Fcfs {
    attended_to: HashMap<ElevatorId, LoadId>,
}

impl Fcfs {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ElevatorAlgorithm for Fcfs {
    fn get_new_destination(
        &mut self,
        elevator: ElevatorId,
        ctx: &AlgorithmContext<'_>,
        _rng: &mut SimRng,
    ) -> Option<u32> {
        let ev = ctx.elevator(elevator)?;
        if ev.has_load() {
            let carried = ctx.loads_of(elevator);
            return carried
                .min_by_key(|l| ((l.destination_floor as i64 - ev.current_floor as i64).abs(), l.id))
                .map(|l| l.destination_floor);
        }

        let go_to = ctx.pending_loads().min_by_key(|l| (l.tick_created, l.id))?;
        self.attended_to.insert(elevator, go_to.id);
        Some(go_to.initial_floor)
    }

    fn pre_load_check(&mut self, load: LoadId, elevator: ElevatorId, _ctx: &AlgorithmContext<'_>) -> bool {
        self.attended_to.get(&elevator) == Some(&load)
    }

    fn on_load_load(&mut self, _load: LoadId, elevator: ElevatorId, _ctx: &AlgorithmContext<'_>) {
        self.attended_to.remove(&elevator);
    }
}
