//! C-LOOK: C-SCAN's instantaneous wraparound combined with LOOK's habit of
//! reversing (here, relocating) as soon as there is nothing left to serve
//! ahead, rather than always riding out to the physical terminal floor.

use std::collections::HashMap;

use evsim_algorithm::{AlgorithmContext, ElevatorAlgorithm, MoveAction};
use evsim_core::{Direction, ElevatorId, LoadId, SimRng};

use crate::common::AttendedTo;

#[derive(Default)]
pub struct CLook {
    direction: HashMap<ElevatorId, Direction>,
    attended: AttendedTo,
}

impl CLook {
    pub fn new() -> Self {
        Self::default()
    }

    fn has_upward_work(&self, elevator: ElevatorId, ctx: &AlgorithmContext<'_>) -> bool {
        let Some(ev) = ctx.elevator(elevator) else { return false };
        ctx.loads_of(elevator)
            .any(|l| l.destination_floor > ev.current_floor)
            || ctx
                .pending_loads()
                .any(|l| l.initial_floor >= ev.current_floor && l.initial_floor < l.destination_floor)
    }
}

impl ElevatorAlgorithm for CLook {
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
            .min_by_key(|l| ((l.initial_floor as i64 - ev.current_floor as i64).abs(), l.id))?;
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
        let at_top = ctx.elevator(elevator).map_or(false, |e| e.current_floor == ctx.floors);
        if at_top || !self.has_upward_work(elevator, ctx) {
            MoveAction::JumpTo(1)
        } else {
            MoveAction::Step
        }
    }
}
