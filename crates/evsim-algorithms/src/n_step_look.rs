//! N-Step LOOK: N-Step SCAN's per-elevator zoning, combined with LOOK's
//! nearest-first pickup choice and direction reset once an elevator empties.
//! Zones are recomputed, and every elevator physically relocated to the
//! first floor of its new zone, whenever the elevator or floor count
//! changes.

use std::collections::HashMap;

use evsim_algorithm::{AlgorithmContext, ElevatorAlgorithm};
use evsim_core::{Direction, ElevatorId, LoadId, SimRng};

use crate::common::AttendedTo;
use crate::zones::{calculate_direction, split_floors};

#[derive(Default)]
pub struct NStepLook {
    direction: HashMap<ElevatorId, Direction>,
    attended: AttendedTo,
}

impl NStepLook {
    pub fn new() -> Self {
        Self::default()
    }

    fn zone(&self, elevator: ElevatorId, ctx: &AlgorithmContext<'_>) -> Option<(u32, u32)> {
        let idx = ctx.elevators.iter().position(|e| e.id == elevator)?;
        let zones = split_floors(ctx.floors, ctx.elevators.len());
        let z = zones.get(idx)?;
        Some((*z.first()?, *z.last()?))
    }

    fn relocations(&self, ctx: &AlgorithmContext<'_>) -> Vec<(ElevatorId, u32)> {
        let zones = split_floors(ctx.floors, ctx.elevators.len());
        ctx.elevators.iter().zip(zones.iter()).filter_map(|(ev, zone)| zone.first().map(|&floor| (ev.id, floor))).collect()
    }
}

impl ElevatorAlgorithm for NStepLook {
    fn get_new_destination(
        &mut self,
        elevator: ElevatorId,
        ctx: &AlgorithmContext<'_>,
        _rng: &mut SimRng,
    ) -> Option<u32> {
        let ev = ctx.elevator(elevator)?;
        let (lo, hi) = self.zone(elevator, ctx)?;

        if ev.has_load() {
            return ctx
                .loads_of(elevator)
                .min_by_key(|l| ((l.destination_floor as i64 - ev.current_floor as i64).abs(), l.id))
                .map(|l| l.destination_floor);
        }

        let go_to = ctx
            .pending_loads()
            .filter(|l| l.initial_floor >= lo && l.initial_floor <= hi)
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
        let Some((lo, hi)) = self.zone(elevator, ctx) else { return false };
        if l.initial_floor < lo || l.initial_floor > hi {
            return false;
        }
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
        let Some((lo, hi)) = self.zone(elevator, ctx) else { return };
        let Some(ev) = ctx.elevator(elevator) else { return };
        if ev.current_floor >= hi {
            self.direction.insert(elevator, Direction::Down);
        } else if ev.current_floor <= lo {
            self.direction.insert(elevator, Direction::Up);
        }
    }

    fn on_elevator_added(&mut self, _elevator: ElevatorId, ctx: &AlgorithmContext<'_>) -> Vec<(ElevatorId, u32)> {
        self.relocations(ctx)
    }

    fn on_elevator_removed(&mut self, _elevator: ElevatorId, ctx: &AlgorithmContext<'_>) -> Vec<(ElevatorId, u32)> {
        self.relocations(ctx)
    }

    fn on_floors_changed(&mut self, ctx: &AlgorithmContext<'_>) -> Vec<(ElevatorId, u32)> {
        self.relocations(ctx)
    }
}
