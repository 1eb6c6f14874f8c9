//! The `Engine` struct and its tick loop.

use evsim_algorithm::{AlgorithmContext, ElevatorAlgorithm, MoveAction};
use evsim_core::{
    constants::{DEFAULT_PASSENGER_WEIGHT, MAX_NUM_LOADS_REMOVED_PER_TICK, TRAVEL_TICKS},
    Direction, ElevatorId, ElevatorIdCounter, IdCounter, LoadId, SimRng, Tick,
};
use evsim_model::{Action, Elevator, GeneratedStats, Load, ModelError};

use crate::error::{EngineError, EngineResult};
use crate::observer::EngineObserver;

/// Owns building state — floors, elevators, pending and carried loads,
/// capacity, the tick counter, the deterministic RNG — and drives one tick
/// at a time by delegating to the current [`ElevatorAlgorithm`] and each
/// elevator's action queue.
///
/// Create via [`EngineBuilder`][crate::EngineBuilder], or [`Engine::new`]
/// directly when no initial elevators are needed.
pub struct Engine {
    pub floors: u32,
    pub elevators: Vec<Elevator>,
    pub loads: Vec<Load>,
    pub max_load: u32,
    pub tick_count: Tick,
    pub rng: SimRng,

    pub wait_times: GeneratedStats,
    pub time_in_lift: GeneratedStats,
    pub occupancy: GeneratedStats,

    load_ids: IdCounter,
    elevator_ids: ElevatorIdCounter,
    algorithm: Box<dyn ElevatorAlgorithm>,
}

impl Engine {
    pub fn new(floors: u32, max_load: u32, seed: u64, algorithm: Box<dyn ElevatorAlgorithm>) -> Self {
        Self {
            floors,
            elevators: Vec::new(),
            loads: Vec::new(),
            max_load,
            tick_count: Tick::ZERO,
            rng: SimRng::new(seed),
            wait_times: GeneratedStats::new(),
            time_in_lift: GeneratedStats::new(),
            occupancy: GeneratedStats::new(),
            load_ids: IdCounter::new(),
            elevator_ids: ElevatorIdCounter::new(),
            algorithm,
        }
    }

    // ── Accessors ──────────────────────────────────────────────────────────

    pub fn elevator(&self, id: ElevatorId) -> EngineResult<&Elevator> {
        self.elevators.iter().find(|e| e.id == id).ok_or(EngineError::UnknownElevator(id))
    }

    fn elevator_mut(&mut self, id: ElevatorId) -> EngineResult<&mut Elevator> {
        self.elevators.iter_mut().find(|e| e.id == id).ok_or(EngineError::UnknownElevator(id))
    }

    pub fn load(&self, id: LoadId) -> EngineResult<&Load> {
        self.loads.iter().find(|l| l.id == id).ok_or(EngineError::UnknownLoad(id))
    }

    fn load_mut(&mut self, id: LoadId) -> EngineResult<&mut Load> {
        self.loads.iter_mut().find(|l| l.id == id).ok_or(EngineError::UnknownLoad(id))
    }

    pub fn pending_loads(&self) -> impl Iterator<Item = &Load> {
        self.loads.iter().filter(|l| l.is_pending())
    }

    pub fn simulation_running(&self) -> bool {
        !self.loads.is_empty()
    }

    /// Swap the active scheduling policy without touching elevators, loads,
    /// tick count, or RNG state.
    pub fn set_algorithm(&mut self, algorithm: Box<dyn ElevatorAlgorithm>) {
        self.algorithm = algorithm;
    }

    /// Mutable access to the active policy, for callers that need to seed or
    /// inspect algorithm-local state directly (the harness's per-test
    /// `init_function`/`on_tick` hooks).
    pub fn algorithm_mut(&mut self) -> &mut dyn ElevatorAlgorithm {
        self.algorithm.as_mut()
    }

    // ── Population control ────────────────────────────────────────────────

    pub fn add_load(
        &mut self,
        initial_floor: u32,
        destination_floor: u32,
        weight: u32,
        observer: &mut dyn EngineObserver,
    ) -> LoadId {
        let id = self.load_ids.next_load_id();
        self.loads.push(Load::new(id, initial_floor, destination_floor, weight, self.tick_count));

        let ctx = AlgorithmContext::new(self.floors, &self.elevators, &self.loads);
        self.algorithm.on_load_added(id, &ctx);
        drop(ctx);
        observer.on_load_added(id, self.tick_count);
        id
    }

    pub fn add_passenger(&mut self, initial_floor: u32, destination_floor: u32, observer: &mut dyn EngineObserver) -> LoadId {
        self.add_load(initial_floor, destination_floor, DEFAULT_PASSENGER_WEIGHT, observer)
    }

    pub fn create_elevator(&mut self, floor: u32, observer: &mut dyn EngineObserver) -> ElevatorId {
        let id = self.elevator_ids.next();
        self.elevators.push(Elevator::new(id, floor));

        let ctx = AlgorithmContext::new(self.floors, &self.elevators, &self.loads);
        let relocations = self.algorithm.on_elevator_added(id, &ctx);
        drop(ctx);
        observer.on_elevator_added(id, self.tick_count);
        // Apply any zone-recalculation relocation before picking the initial
        // destination, so the pick is made from the elevator's actual
        // starting floor rather than the pre-relocation one.
        self.apply_relocations(relocations, observer);

        let dest = {
            let ctx = AlgorithmContext::new(self.floors, &self.elevators, &self.loads);
            self.algorithm.get_new_destination(id, &ctx, &mut self.rng)
        };
        if let Ok(ev) = self.elevator_mut(id) {
            ev.destination = dest;
        }
        if dest.is_some() {
            observer.on_elevator_destination(id, self.tick_count);
        }
        id
    }

    pub fn remove_elevator(&mut self, id: ElevatorId, observer: &mut dyn EngineObserver) -> EngineResult<()> {
        let pos = self.elevators.iter().position(|e| e.id == id).ok_or(EngineError::UnknownElevator(id))?;
        self.elevators.remove(pos);

        let ctx = AlgorithmContext::new(self.floors, &self.elevators, &self.loads);
        let relocations = self.algorithm.on_elevator_removed(id, &ctx);
        drop(ctx);
        observer.on_elevator_removed(id, self.tick_count);
        self.apply_relocations(relocations, observer);
        Ok(())
    }

    pub fn set_floors(&mut self, floors: u32, observer: &mut dyn EngineObserver) {
        self.floors = floors;
        for elevator in &mut self.elevators {
            elevator.current_floor = elevator.current_floor.min(floors);
        }

        let ctx = AlgorithmContext::new(self.floors, &self.elevators, &self.loads);
        let relocations = self.algorithm.on_floors_changed(&ctx);
        drop(ctx);
        observer.on_floors_changed(floors, self.tick_count);
        self.apply_relocations(relocations, observer);
    }

    /// Applies `(elevator, floor)` relocations an algorithm hook returned, in
    /// order, via the same path an ordinary in-tick move takes (so onboard
    /// loads follow, `on_elevator_move`/diff events fire) but without
    /// consuming a tick.
    fn apply_relocations(&mut self, relocations: Vec<(ElevatorId, u32)>, observer: &mut dyn EngineObserver) {
        for (id, floor) in relocations {
            let _ = self.relocate(id, floor, observer);
        }
    }

    /// Notify the algorithm and observer that the run has ended. The caller
    /// (manager or harness) decides when "ended" means — usually when
    /// [`Engine::simulation_running`] first goes false.
    pub fn finish(&mut self, observer: &mut dyn EngineObserver) {
        let ctx = AlgorithmContext::new(self.floors, &self.elevators, &self.loads);
        self.algorithm.on_simulation_end(&ctx);
        drop(ctx);
        observer.on_simulation_end(self.tick_count);
    }

    // ── Tick loop ──────────────────────────────────────────────────────────

    /// Advance the simulation by exactly one tick.
    ///
    /// Runs the whole step inside `catch_unwind` so a panic inside a
    /// third-party [`ElevatorAlgorithm`] implementation surfaces as an
    /// [`EngineError`] rather than unwinding through the harness's worker
    /// pool and taking other jobs down with it.
    pub fn step(&mut self, observer: &mut dyn EngineObserver) -> EngineResult<()> {
        std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| self.step_inner(observer)))
            .unwrap_or(Err(EngineError::AlgorithmPanicked { hook: "step" }))
    }

    fn step_inner(&mut self, observer: &mut dyn EngineObserver) -> EngineResult<()> {
        {
            let ctx = AlgorithmContext::new(self.floors, &self.elevators, &self.loads);
            self.algorithm.pre_loop(&ctx);
        }

        let ids: Vec<ElevatorId> = self.elevators.iter().map(|e| e.id).collect();
        for id in ids {
            self.drain_elevator(id, observer)?;
        }

        self.tick_count = self.tick_count.advance();

        {
            let ctx = AlgorithmContext::new(self.floors, &self.elevators, &self.loads);
            self.algorithm.post_loop(&ctx);
        }

        if self.simulation_running() {
            let samples: Vec<f64> = self
                .elevators
                .iter()
                .map(|e| (e.total_load(&self.loads) as f64 / self.max_load as f64) * 100.0)
                .collect();
            for sample in samples {
                self.occupancy.push(sample);
            }
        }

        observer.on_tick_end(self.tick_count);
        Ok(())
    }

    /// Drain one elevator's action queue until an `ADD_TICK` is consumed (or
    /// the elevator is disabled, in which case nothing runs this tick).
    fn drain_elevator(&mut self, id: ElevatorId, observer: &mut dyn EngineObserver) -> EngineResult<()> {
        if !self.elevator(id)?.enabled {
            return Ok(());
        }

        loop {
            let action = self.elevator_mut(id)?.action_queue.pop();
            match action {
                Action::AddTick => return Ok(()),
                Action::RunCycle => self.plan_cycle(id)?,
                Action::MoveElevator => self.move_elevator(id, observer)?,
                Action::JumpElevator(floor) => self.jump_elevator(id, floor, observer)?,
                Action::LoadLoad(load_id) => self.do_load(id, load_id, observer)?,
                Action::UnloadLoad(load_id) => self.do_unload(id, load_id, observer)?,
            }
        }
    }

    /// Plan one elevator's next cycle: unload what can be unloaded here,
    /// board what can be boarded here (in groups of
    /// [`MAX_NUM_LOADS_REMOVED_PER_TICK`]), then queue the travel ticks and
    /// the move for the next destination.
    fn plan_cycle(&mut self, id: ElevatorId) -> EngineResult<()> {
        let current_floor = self.elevator(id)?.current_floor;
        let mut load_change_count: usize = 0;

        let onboard: Vec<LoadId> = self.elevator(id)?.loads.clone();
        for load_id in onboard {
            if self.load(load_id)?.destination_floor != current_floor {
                continue;
            }
            let permitted = {
                let ctx = AlgorithmContext::new(self.floors, &self.elevators, &self.loads);
                self.algorithm.pre_unload_check(load_id, id, &ctx)
            };
            if !permitted {
                continue;
            }

            if load_change_count == 0 {
                self.elevator_mut(id)?.action_queue.open_door();
            }
            self.elevator_mut(id)?.action_queue.push(Action::UnloadLoad(load_id));
            load_change_count += 1;
            if load_change_count % MAX_NUM_LOADS_REMOVED_PER_TICK == 0 {
                self.elevator_mut(id)?.action_queue.tick(1);
            }
        }

        let mut added_weight: u32 = 0;
        let current_total = self.elevator(id)?.total_load(&self.loads);
        if current_total <= self.max_load {
            let candidates: Vec<LoadId> = self
                .loads
                .iter()
                .filter(|l| l.is_pending() && l.initial_floor == current_floor)
                .map(|l| l.id)
                .collect();

            for load_id in candidates {
                let weight = self.load(load_id)?.weight;
                if current_total + added_weight + weight > self.max_load {
                    continue;
                }
                let permitted = {
                    let ctx = AlgorithmContext::new(self.floors, &self.elevators, &self.loads);
                    self.algorithm.pre_load_check(load_id, id, &ctx)
                };
                if !permitted {
                    continue;
                }

                if load_change_count == 0 {
                    self.elevator_mut(id)?.action_queue.open_door();
                }
                // Reserve now, under the algorithm's own bookkeeping, so no
                // other elevator planned later this same tick can claim it.
                self.load_mut(load_id)?.claim(id);
                self.elevator_mut(id)?.action_queue.push(Action::LoadLoad(load_id));
                added_weight += weight;
                load_change_count += 1;
                if load_change_count % MAX_NUM_LOADS_REMOVED_PER_TICK == 0 {
                    self.elevator_mut(id)?.action_queue.tick(1);
                }
            }
        }

        if load_change_count % MAX_NUM_LOADS_REMOVED_PER_TICK != 0 {
            self.elevator_mut(id)?.action_queue.tick(1);
        }
        if load_change_count > 0 {
            self.elevator_mut(id)?.action_queue.close_door();
        }

        self.elevator_mut(id)?.action_queue.tick(TRAVEL_TICKS);

        let move_action = {
            let ctx = AlgorithmContext::new(self.floors, &self.elevators, &self.loads);
            self.algorithm.plan_move(id, &ctx)
        };
        let action = match move_action {
            MoveAction::Step => Action::MoveElevator,
            MoveAction::JumpTo(floor) => Action::JumpElevator(floor),
        };
        self.elevator_mut(id)?.action_queue.push(action);

        Ok(())
    }

    fn move_elevator(&mut self, id: ElevatorId, observer: &mut dyn EngineObserver) -> EngineResult<()> {
        if let Some(direction) = self.elevator(id)?.direction() {
            let delta: i64 = match direction {
                Direction::Up => 1,
                Direction::Down => -1,
            };
            let new_floor = (self.elevator(id)?.current_floor as i64 + delta) as u32;
            self.relocate(id, new_floor, observer)?;
        }
        self.requery_destination_if_arrived(id, observer)?;
        Ok(())
    }

    fn jump_elevator(&mut self, id: ElevatorId, floor: u32, observer: &mut dyn EngineObserver) -> EngineResult<()> {
        self.relocate(id, floor, observer)?;
        self.requery_destination_if_arrived(id, observer)?;
        Ok(())
    }

    fn requery_destination_if_arrived(&mut self, id: ElevatorId, observer: &mut dyn EngineObserver) -> EngineResult<()> {
        let ev = self.elevator(id)?;
        if ev.destination.is_none() || ev.destination == Some(ev.current_floor) {
            let dest = {
                let ctx = AlgorithmContext::new(self.floors, &self.elevators, &self.loads);
                self.algorithm.get_new_destination(id, &ctx, &mut self.rng)
            };
            self.elevator_mut(id)?.destination = dest;
            if dest.is_some() {
                observer.on_elevator_destination(id, self.tick_count);
            }
        }
        Ok(())
    }

    fn relocate(&mut self, id: ElevatorId, new_floor: u32, observer: &mut dyn EngineObserver) -> EngineResult<()> {
        self.elevator_mut(id)?.current_floor = new_floor;

        let onboard = self.elevator(id)?.loads.clone();
        for load_id in onboard {
            self.load_mut(load_id)?.current_floor = new_floor;
        }

        let ctx = AlgorithmContext::new(self.floors, &self.elevators, &self.loads);
        self.algorithm.on_elevator_move(id, &ctx);
        drop(ctx);
        observer.on_elevator_move(id, self.tick_count);
        Ok(())
    }

    fn do_load(&mut self, elevator: ElevatorId, load_id: LoadId, observer: &mut dyn EngineObserver) -> EngineResult<()> {
        let weight = self.load(load_id)?.weight;
        let current_total = self.elevator(elevator)?.total_load(&self.loads);
        if current_total + weight > self.max_load {
            return Err(ModelError::FullElevator { elevator, attempted: current_total + weight, max: self.max_load }.into());
        }

        let tick_created = self.load(load_id)?.tick_created;
        let now = self.tick_count;
        self.load_mut(load_id)?.board(elevator, now);
        self.elevator_mut(elevator)?.loads.push(load_id);
        self.wait_times.push(now.since(tick_created) as f64);

        let ctx = AlgorithmContext::new(self.floors, &self.elevators, &self.loads);
        self.algorithm.on_load_load(load_id, elevator, &ctx);
        drop(ctx);
        observer.on_load_load(load_id, elevator, self.tick_count);
        Ok(())
    }

    fn do_unload(&mut self, elevator: ElevatorId, load_id: LoadId, observer: &mut dyn EngineObserver) -> EngineResult<()> {
        if let Some(enter_tick) = self.load(load_id)?.enter_lift_tick {
            self.time_in_lift.push((self.tick_count.since(enter_tick) + 1) as f64);
        }

        self.load_mut(load_id)?.disembark();
        self.elevator_mut(elevator)?.remove_load(load_id);

        let ctx = AlgorithmContext::new(self.floors, &self.elevators, &self.loads);
        self.algorithm.on_load_unload(load_id, elevator, &ctx);
        drop(ctx);
        observer.on_load_unload(load_id, elevator, self.tick_count);

        self.remove_load(load_id, elevator, observer)?;
        Ok(())
    }

    /// Delivered loads leave the engine's load set entirely.
    fn remove_load(&mut self, load_id: LoadId, elevator: ElevatorId, observer: &mut dyn EngineObserver) -> EngineResult<()> {
        let pos = self.loads.iter().position(|l| l.id == load_id).ok_or(EngineError::UnknownLoad(load_id))?;
        self.loads.remove(pos);

        let ctx = AlgorithmContext::new(self.floors, &self.elevators, &self.loads);
        self.algorithm.on_load_removed(load_id, elevator, &ctx);
        drop(ctx);
        observer.on_load_removed(load_id, self.tick_count);
        Ok(())
    }
}
