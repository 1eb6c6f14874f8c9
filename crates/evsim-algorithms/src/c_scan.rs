//! C-SCAN: always sweeps upward; on reaching the top floor it relocates
//! instantaneously back to the bottom (one tick, no intermediate floor
//! events) and resumes the upward sweep. Pickup filter matches SCAN.

use std::collections::HashMap;

use evsim_algorithm::{AlgorithmContext, ElevatorAlgorithm, MoveAction};
use evsim_core::{Direction, ElevatorId, LoadId, SimRng};

use crate::common::AttendedTo;

#[derive(Default)]
pub struct CScan {
    direction: HashMap<ElevatorId, Direction>,
    attended: AttendedTo,
}

impl CScan {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ElevatorAlgorithm for CScan {
    fn get_new_destination(
        &mut self,
        elevator: ElevatorId,
        ctx: &AlgorithmContext<'_>,
        _rng: &mut SimRng,
    ) -> Option<u32> {
        let ev = ctx.elevator(elevator)?;
        self.direction.entry(elevator).or_insert(Direction::Up);

        if ev.has_load() {
            return ctx
                .loads_of(elevator)
                .min_by_key(|l| ((l.destination_floor as i64 - ev.current_floor as i64).abs(), l.id))
                .map(|l| l.destination_floor);
        }

        let go_to = ctx
            .pending_loads()
            .filter(|l| !self.attended.is_attended(l.id))
            .min_by_key(|l| (l.tick_created, l.id))?;
        self.attended.set(elevator, go_to.id);
        Some(go_to.initial_floor)
    }

    fn pre_load_check(&mut self, load: LoadId, elevator: ElevatorId, ctx: &AlgorithmContext<'_>) -> bool {
        let Some(l) = ctx.load(load) else { return false };
        match self.direction.get(&elevator) {
            None | Some(Direction::Up) => l.initial_floor < l.destination_floor,
            Some(Direction::Down) => l.initial_floor > l.destination_floor,
        }
    }

    fn on_load_load(&mut self, _load: LoadId, elevator: ElevatorId, _ctx: &AlgorithmContext<'_>) {
        self.attended.clear(elevator);
    }

    fn plan_move(&mut self, elevator: ElevatorId, ctx: &AlgorithmContext<'_>) -> MoveAction {
        match ctx.elevator(elevator) {
            Some(ev) if ev.current_floor == ctx.floors => MoveAction::JumpTo(1),
            _ => MoveAction::Step,
        }
    }
}
