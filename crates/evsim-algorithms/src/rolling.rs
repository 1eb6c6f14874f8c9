//! Rolling: each elevator shuttles between the two terminal floors,
//! picking an initial direction at random and flipping it every time it
//! reaches one end. Pending loads are never consulted for a destination —
//! only loads travelling the same way the elevator currently is are ever
//! admitted for pickup.

use std::collections::HashMap;

use evsim_algorithm::{AlgorithmContext, ElevatorAlgorithm};
use evsim_core::{Direction, ElevatorId, LoadId, SimRng};

#[derive(Default)]
pub struct Rolling {
    direction: HashMap<ElevatorId, Direction>,
}

impl Rolling {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ElevatorAlgorithm for Rolling {
    fn get_new_destination(&mut self, elevator: ElevatorId, ctx: &AlgorithmContext<'_>, rng: &mut SimRng) -> Option<u32> {
        ctx.elevator(elevator)?;
        let previous = *self.direction.entry(elevator).or_insert_with(|| if rng.gen_bool(0.5) { Direction::Up } else { Direction::Down });
        let (next, terminal) = match previous {
            Direction::Down => (Direction::Up, ctx.floors),
            Direction::Up => (Direction::Down, 1),
        };
        self.direction.insert(elevator, next);
        Some(terminal)
    }

    fn pre_load_check(&mut self, load: LoadId, elevator: ElevatorId, ctx: &AlgorithmContext<'_>) -> bool {
        let Some(l) = ctx.load(load) else { return false };
        match self.direction.get(&elevator) {
            None => true,
            Some(Direction::Up) => l.initial_floor < l.destination_floor,
            Some(Direction::Down) => l.initial_floor > l.destination_floor,
        }
    }
}
