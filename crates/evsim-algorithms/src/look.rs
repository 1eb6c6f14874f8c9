//! LOOK: like SCAN, but an empty elevator's direction resets rather than
//! being forced to the far terminal, and pending-load selection is by
//! distance rather than age.

use std::collections::HashMap;

use evsim_algorithm::{AlgorithmContext, ElevatorAlgorithm};
use evsim_core::{Direction, ElevatorId, LoadId, SimRng};

use crate::common::AttendedTo;
use crate::zones::calculate_direction;

#[derive(Default)]
pub struct Look {
    direction: HashMap<ElevatorId, Direction>,
    attended: AttendedTo,
}

impl Look {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ElevatorAlgorithm for Look {
    fn get_new_destination(
        &mut self,
        elevator: ElevatorId,
        ctx: &AlgorithmContext<'_>,
        _rng: &mut SimRng,
    ) -> Option<u32> {
        let ev = ctx.elevator(elevator)?;
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
        let dest = go_to.initial_floor;
        self.attended.set(elevator, go_to.id);
        if !self.direction.contains_key(&elevator) {
            if let Some(d) = calculate_direction(ev.current_floor, dest) {
                self.direction.insert(elevator, d);
            }
        }
        Some(dest)
    }

    fn pre_load_check(&mut self, load: LoadId, elevator: ElevatorId, ctx: &AlgorithmContext<'_>) -> bool {
        let Some(l) = ctx.load(load) else { return false };
        match self.direction.get(&elevator) {
            None => true,
            Some(Direction::Up) => l.initial_floor < l.destination_floor,
            Some(Direction::Down) => l.initial_floor > l.destination_floor,
        }
    }

    fn on_load_load(&mut self, _load: LoadId, elevator: ElevatorId, _ctx: &AlgorithmContext<'_>) {
        self.attended.clear(elevator);
    }

    fn on_load_unload(&mut self, _load: LoadId, elevator: ElevatorId, ctx: &AlgorithmContext<'_>) {
        if let Some(ev) = ctx.elevator(elevator) {
            if !ev.has_load() {
                self.direction.remove(&elevator);
            }
        }
    }

    fn on_elevator_move(&mut self, elevator: ElevatorId, ctx: &AlgorithmContext<'_>) {
        let Some(ev) = ctx.elevator(elevator) else { return };
        if ev.current_floor == ctx.floors {
            self.direction.insert(elevator, Direction::Down);
        } else if ev.current_floor == 1 {
            self.direction.insert(elevator, Direction::Up);
        }
    }
}
