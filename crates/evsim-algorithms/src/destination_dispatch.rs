//! Destination Dispatch: each elevator claims the nearest pending load by
//! initial floor, same as the generic frame. What sets it apart is
//! `pre_load_check`: once attending a load, an elevator also admits any
//! *other* pending load whose destination is within a shrinking
//! `zone_radius` of the attended load's destination — this is what lets one
//! trip batch several passengers headed the same way.
//! `zone_radius = ceil(20 * floors / |loads|)` (all pending and carried
//! loads), unbounded when there are no loads at all.

use std::collections::HashMap;

use evsim_algorithm::{AlgorithmContext, ElevatorAlgorithm};
use evsim_core::{ElevatorId, LoadId, SimRng};

#[derive(Default)]
pub struct DestinationDispatch {
    attended_to: HashMap<ElevatorId, LoadId>,
}

impl DestinationDispatch {
    pub fn new() -> Self {
        Self::default()
    }

    fn zone_radius(floors: u32, load_count: usize) -> f64 {
        if load_count == 0 {
            return f64::INFINITY;
        }
        (20.0 * floors as f64 / load_count as f64).ceil()
    }
}

impl ElevatorAlgorithm for DestinationDispatch {
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

        let attended: std::collections::HashSet<LoadId> = self.attended_to.values().copied().collect();
        let go_to = ctx
            .pending_loads()
            .filter(|l| !attended.contains(&l.id))
            .min_by_key(|l| ((l.initial_floor as i64 - ev.current_floor as i64).abs(), l.tick_created, l.id))?;
        self.attended_to.insert(elevator, go_to.id);
        Some(go_to.initial_floor)
    }

    fn pre_load_check(&mut self, load: LoadId, elevator: ElevatorId, ctx: &AlgorithmContext<'_>) -> bool {
        let Some(attended_id) = self.attended_to.get(&elevator).copied() else { return false };
        if attended_id == load {
            return true;
        }
        let Some(attended) = ctx.load(attended_id) else { return false };
        let Some(candidate) = ctx.load(load) else { return false };
        let radius = Self::zone_radius(ctx.floors, ctx.loads.len());
        (attended.destination_floor as i64 - candidate.destination_floor as i64).unsigned_abs() as f64 <= radius
    }

    fn on_load_load(&mut self, _load: LoadId, elevator: ElevatorId, _ctx: &AlgorithmContext<'_>) {
        self.attended_to.remove(&elevator);
    }

    fn on_elevator_move(&mut self, elevator: ElevatorId, ctx: &AlgorithmContext<'_>) {
        let Some(load) = self.attended_to.get(&elevator).copied() else { return };
        let Some(ev) = ctx.elevator(elevator) else { return };
        if let Some(l) = ctx.load(load) {
            if ev.current_floor == l.initial_floor {
                self.attended_to.remove(&elevator);
            }
        }
    }

    fn on_load_removed(&mut self, load: LoadId, _elevator: ElevatorId, _ctx: &AlgorithmContext<'_>) {
        self.attended_to.retain(|_, v| *v != load);
    }
}

#[cfg(test)]
mod tests {
    use evsim_core::Tick;
    use evsim_model::{Elevator, Load};

    use super::*;

    fn load(id: u64, initial: u32, destination: u32) -> Load {
        Load::new(LoadId(id), initial, destination, 60, Tick::ZERO)
    }

    #[test]
    fn zone_radius_shrinks_as_load_count_grows() {
        assert_eq!(DestinationDispatch::zone_radius(20, 10), 40.0);
        assert_eq!(DestinationDispatch::zone_radius(20, 40), 10.0);
        assert_eq!(DestinationDispatch::zone_radius(20, 0), f64::INFINITY);
    }

    #[test]
    fn admits_other_loads_within_radius_of_the_attended_destination() {
        // floors=20, 10 total loads: zone_radius = ceil(20*20/10) = 40.
        let mut dd = DestinationDispatch::new();
        let elevator = ElevatorId(0);
        dd.attended_to.insert(elevator, LoadId(1));

        let attended = load(1, 1, 50);
        let within_radius = load(2, 5, 85); // destination differs by 35 <= 40
        let outside_radius = load(3, 5, 100); // destination differs by 50 > 40
        let filler: Vec<Load> = (4..=10).map(|id| load(id, 2, 3)).collect();
        let ev = Elevator::new(elevator, 1);
        let mut loads = vec![attended, within_radius, outside_radius];
        loads.extend(filler);
        let elevators = vec![ev];
        let ctx = AlgorithmContext::new(20, &elevators, &loads);
        assert_eq!(ctx.loads.len(), 10);

        assert!(dd.pre_load_check(LoadId(1), elevator, &ctx));
        assert!(dd.pre_load_check(LoadId(2), elevator, &ctx));
        assert!(!dd.pre_load_check(LoadId(3), elevator, &ctx));
    }

    #[test]
    fn rejects_every_load_when_elevator_attends_to_nothing() {
        let mut dd = DestinationDispatch::new();
        let elevator = ElevatorId(0);
        let loads = vec![load(1, 1, 50)];
        let elevators = vec![Elevator::new(elevator, 1)];
        let ctx = AlgorithmContext::new(20, &elevators, &loads);

        assert!(!dd.pre_load_check(LoadId(1), elevator, &ctx));
    }
}
