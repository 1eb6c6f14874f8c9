//! `Manager` — the control-plane wrapper around [`Engine`].
//!
//! Adds everything a driver (CLI, GUI, test harness worker) needs that the
//! engine itself deliberately stays free of: population control by name,
//! pause/play/speed pacing, and batched diff-event emission.

use std::sync::Arc;
use std::time::Duration;

use evsim_algorithm::AlgorithmRegistry;
use evsim_core::{ElevatorId, LoadId, LogLevel, LogOrigin, LogRecord, Tick};
use evsim_engine::{Engine, EngineObserver, EngineResult};

use crate::diff::DiffEvent;
use crate::error::{ManagerError, ManagerResult};
use crate::observer::ManagerObserver;

enum RawEvent {
    Move(ElevatorId),
    Destination(ElevatorId),
    Load(ElevatorId, LoadId),
    Unload(ElevatorId, LoadId),
}

/// Records engine hook firings, in the order they fire, so they can be
/// resolved into floor-carrying [`DiffEvent`]s once the engine call that
/// produced them has returned (the hooks themselves only carry ids, not the
/// post-mutation state needed to build the event).
#[derive(Default)]
struct DiffCollector {
    events: Vec<RawEvent>,
}

impl EngineObserver for DiffCollector {
    fn on_elevator_move(&mut self, elevator: ElevatorId, _tick: Tick) {
        self.events.push(RawEvent::Move(elevator));
    }

    fn on_elevator_destination(&mut self, elevator: ElevatorId, _tick: Tick) {
        self.events.push(RawEvent::Destination(elevator));
    }

    fn on_load_load(&mut self, load: LoadId, elevator: ElevatorId, _tick: Tick) {
        self.events.push(RawEvent::Load(elevator, load));
    }

    fn on_load_unload(&mut self, load: LoadId, elevator: ElevatorId, _tick: Tick) {
        self.events.push(RawEvent::Unload(elevator, load));
    }
}

/// Wraps an [`Engine`] with the operations a driver needs: population
/// control, algorithm swapping, pause/play/speed pacing, and a batched
/// diff-event stream.
///
/// One [`Manager`] owns exactly one [`Engine`]; a test harness runs many of
/// these concurrently, one per worker, sharing a single
/// [`AlgorithmRegistry`].
pub struct Manager {
    engine: Engine,
    registry: Arc<AlgorithmRegistry>,
    algorithm_name: String,
    seed: u64,
    speed: f64,
    active: bool,
    is_open: bool,
}

impl Manager {
    pub fn new(registry: Arc<AlgorithmRegistry>, algorithm_name: &str, floors: u32, max_load: u32, seed: u64) -> ManagerResult<Self> {
        let algorithm = registry.build(algorithm_name)?;
        Ok(Self {
            engine: Engine::new(floors, max_load, seed, algorithm),
            registry,
            algorithm_name: algorithm_name.to_string(),
            seed,
            speed: 1.0,
            active: true,
            is_open: true,
        })
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Mutable access to the active policy, for driving per-test
    /// `init_function`/`on_tick` hooks.
    pub fn algorithm_mut(&mut self) -> &mut dyn evsim_algorithm::ElevatorAlgorithm {
        self.engine.algorithm_mut()
    }

    pub fn algorithm_name(&self) -> &str {
        &self.algorithm_name
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    fn collect<F, T>(&mut self, f: F) -> (T, Vec<DiffEvent>)
    where
        F: FnOnce(&mut Engine, &mut dyn EngineObserver) -> T,
    {
        let mut collector = DiffCollector::default();
        let result = f(&mut self.engine, &mut collector);
        let events = collector
            .events
            .into_iter()
            .filter_map(|raw| match raw {
                RawEvent::Move(id) => self.engine.elevator(id).ok().map(|e| DiffEvent::ElevatorMove { elevator: id, floor: e.current_floor }),
                RawEvent::Destination(id) => self
                    .engine
                    .elevator(id)
                    .ok()
                    .and_then(|e| e.destination)
                    .map(|floor| DiffEvent::ElevatorDestination { elevator: id, floor }),
                RawEvent::Load(elevator, load) => Some(DiffEvent::LoadLoad { elevator, load }),
                RawEvent::Unload(elevator, load) => Some(DiffEvent::LoadUnload { elevator, load }),
            })
            .collect();
        (result, events)
    }

    /// Emits one record on the simulation's own log stream (distinct from
    /// the `log` crate's process diagnostics), mirroring the control
    /// surface's `WriteToLog` calls on population/algorithm changes.
    fn log(&self, observer: &mut dyn ManagerObserver, level: LogLevel, message: impl Into<String>) {
        observer.on_log(&LogRecord::new(level, LogOrigin::Simulation, self.engine.tick_count, message));
    }

    // ── Tick loop ──────────────────────────────────────────────────────────

    /// Advance one tick, if active and open. A no-op otherwise (mirrors the
    /// source's `loop()` body, which only cycles the algorithm while
    /// `active`).
    pub fn step(&mut self, observer: &mut dyn ManagerObserver) -> ManagerResult<()> {
        if !self.active || !self.is_open {
            return Ok(());
        }
        let (result, events): (EngineResult<()>, _) = self.collect(|engine, obs| engine.step(obs));
        result?;
        observer.send_event(self.engine.tick_count, &events);
        Ok(())
    }

    /// Delay before the next tick under the current speed setting. `None`
    /// when `speed` is infinite or non-positive — run flat out, no pacing.
    pub fn pacing_delay(&self) -> Option<Duration> {
        if !self.speed.is_finite() || self.speed <= 0.0 {
            None
        } else {
            Some(Duration::from_secs_f64(1.0 / self.speed))
        }
    }

    /// Blocking drive loop for a dedicated worker thread: steps (when
    /// active) and paces (always, active or not — matching the source's
    /// unconditional `sleep` so a paused manager doesn't busy-spin) until the
    /// simulation ends or [`Manager::close`] is called.
    pub fn run(&mut self, observer: &mut dyn ManagerObserver) -> ManagerResult<()> {
        while self.engine.simulation_running() && self.is_open {
            self.step(observer)?;
            if let Some(delay) = self.pacing_delay() {
                std::thread::sleep(delay);
            }
        }
        Ok(())
    }

    // ── Population control ────────────────────────────────────────────────

    pub fn add_elevator(&mut self, floor: u32, observer: &mut dyn ManagerObserver) -> ElevatorId {
        let (id, events) = self.collect(|engine, obs| engine.create_elevator(floor, obs));
        observer.send_event(self.engine.tick_count, &events);
        self.log(observer, LogLevel::Info, format!("added elevator on floor {floor}"));
        id
    }

    pub fn remove_elevator(&mut self, id: ElevatorId, observer: &mut dyn ManagerObserver) -> ManagerResult<()> {
        let (result, events): (EngineResult<()>, _) = self.collect(|engine, obs| engine.remove_elevator(id, obs));
        if let Err(err) = &result {
            self.log(observer, LogLevel::Error, err.to_string());
        }
        result?;
        observer.send_event(self.engine.tick_count, &events);
        self.log(observer, LogLevel::Info, format!("removed elevator {id:?}"));
        Ok(())
    }

    pub fn set_floors(&mut self, floors: u32, observer: &mut dyn ManagerObserver) {
        let ((), events) = self.collect(|engine, obs| engine.set_floors(floors, obs));
        observer.send_event(self.engine.tick_count, &events);
        self.log(observer, LogLevel::Info, format!("set floors to {floors}"));
    }

    pub fn set_max_load(&mut self, max_load: u32, observer: &mut dyn ManagerObserver) {
        self.engine.max_load = max_load;
        observer.send_event(self.engine.tick_count, &[]);
        self.log(observer, LogLevel::Info, format!("set max load to {max_load}"));
    }

    pub fn add_passenger(&mut self, initial_floor: u32, destination_floor: u32, observer: &mut dyn ManagerObserver) -> ManagerResult<LoadId> {
        if initial_floor == destination_floor {
            let err = ManagerError::BadArgument("passenger source and destination floors must differ".into());
            self.log(observer, LogLevel::Error, err.to_string());
            return Err(err);
        }
        let (id, events) = self.collect(|engine, obs| engine.add_passenger(initial_floor, destination_floor, obs));
        observer.send_event(self.engine.tick_count, &events);
        self.log(observer, LogLevel::Info, format!("added passenger on floor {initial_floor} to {destination_floor}"));
        Ok(id)
    }

    pub fn add_passengers(&mut self, passengers: &[(u32, u32)], observer: &mut dyn ManagerObserver) -> ManagerResult<Vec<LoadId>> {
        if passengers.iter().any(|&(src, dst)| src == dst) {
            let err = ManagerError::BadArgument("passenger source and destination floors must differ".into());
            self.log(observer, LogLevel::Error, err.to_string());
            return Err(err);
        }
        let (ids, events) = self.collect(|engine, obs| passengers.iter().map(|&(src, dst)| engine.add_passenger(src, dst, obs)).collect::<Vec<_>>());
        observer.send_event(self.engine.tick_count, &events);
        self.log(observer, LogLevel::Info, format!("added {} passengers", passengers.len()));
        Ok(ids)
    }

    // ── Algorithm control ──────────────────────────────────────────────────

    /// Swap the active policy, retaining existing elevators and pending
    /// loads.
    pub fn set_algorithm(&mut self, name: &str, observer: &mut dyn ManagerObserver) -> ManagerResult<()> {
        let algorithm = match self.registry.build(name) {
            Ok(algorithm) => algorithm,
            Err(err) => {
                self.log(observer, LogLevel::Error, format!("algorithm '{name}' not found"));
                return Err(err.into());
            }
        };
        self.engine.set_algorithm(algorithm);
        self.algorithm_name = name.to_string();
        observer.send_event(self.engine.tick_count, &[]);
        self.log(observer, LogLevel::Info, format!("set algorithm to {name}"));
        Ok(())
    }

    /// Re-instantiate the engine at `tick_count = 0` with an empty building
    /// (no elevators, no loads). `name` omitted retains the current policy.
    pub fn reset(&mut self, name: Option<&str>, observer: &mut dyn ManagerObserver) -> ManagerResult<()> {
        let name = name.unwrap_or(self.algorithm_name.as_str()).to_string();
        let algorithm = self.registry.build(&name)?;
        let floors = self.engine.floors;
        let max_load = self.engine.max_load;
        self.engine = Engine::new(floors, max_load, self.seed, algorithm);
        self.algorithm_name = name;
        observer.send_event(self.engine.tick_count, &[]);
        self.log(observer, LogLevel::Info, "reset");
        Ok(())
    }

    // ── Pacing control ─────────────────────────────────────────────────────

    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
    }

    pub fn pause(&mut self, observer: &mut dyn ManagerObserver) {
        self.active = false;
        self.log(observer, LogLevel::Info, "paused");
    }

    pub fn play(&mut self, observer: &mut dyn ManagerObserver) {
        self.active = true;
        self.log(observer, LogLevel::Info, "playing");
    }

    pub fn toggle_active(&mut self, observer: &mut dyn ManagerObserver) {
        self.active = !self.active;
        self.log(observer, LogLevel::Info, if self.active { "playing" } else { "paused" });
    }

    pub fn close(&mut self, observer: &mut dyn ManagerObserver) {
        self.is_open = false;
        self.log(observer, LogLevel::Info, "closed");
    }
}

#[cfg(test)]
mod tests {
    use evsim_algorithms::register_all;

    use super::*;
    use crate::observer::NoopManagerObserver;

    fn registry() -> Arc<AlgorithmRegistry> {
        let mut registry = AlgorithmRegistry::new();
        register_all(&mut registry).unwrap();
        Arc::new(registry)
    }

    /// Records every diff event in arrival order, across every tick.
    #[derive(Default)]
    struct EventLog {
        events: Vec<DiffEvent>,
    }

    impl ManagerObserver for EventLog {
        fn send_event(&mut self, _tick: Tick, events: &[DiffEvent]) {
            self.events.extend_from_slice(events);
        }
    }

    impl EventLog {
        fn position_of(&self, want: impl Fn(&DiffEvent) -> bool) -> usize {
            self.events.iter().position(want).expect("expected event not found in log")
        }
    }

    fn run_to_completion(manager: &mut Manager, observer: &mut EventLog, max_ticks: u32) {
        for _ in 0..max_ticks {
            manager.step(observer).unwrap();
            if !manager.engine().simulation_running() {
                return;
            }
        }
        panic!("simulation did not complete within {max_ticks} ticks");
    }

    #[test]
    fn fcfs_services_the_first_enqueued_passenger_before_the_second() {
        // floors=5, one elevator at floor 1, loads enqueued (3,5) then (2,4).
        // FCFS attends to exactly one load at a time, so the first load's
        // full round trip (pickup through drop-off) completes before the
        // second load is even picked up.
        let mut manager = Manager::new(registry(), "fcfs", 5, 900, 0).unwrap();
        let mut observer = EventLog::default();
        manager.add_elevator(1, &mut observer);
        let first = manager.add_passenger(3, 5, &mut observer).unwrap();
        let second = manager.add_passenger(2, 4, &mut observer).unwrap();

        run_to_completion(&mut manager, &mut observer, 200);

        let first_unload = observer.position_of(|e| matches!(e, DiffEvent::LoadUnload { load, .. } if *load == first));
        let second_load = observer.position_of(|e| matches!(e, DiffEvent::LoadLoad { load, .. } if *load == second));
        assert!(first_unload < second_load, "first-enqueued load should be delivered before the second is picked up");
    }

    #[test]
    fn scan_picks_up_and_delivers_both_passengers_in_enqueue_order() {
        // floors=10, one elevator starting at the top, loads (10,1) then
        // (5,7), enqueued in that order.
        let mut manager = Manager::new(registry(), "scan", 10, 900, 0).unwrap();
        let mut observer = EventLog::default();
        manager.add_elevator(10, &mut observer);
        let first = manager.add_passenger(10, 1, &mut observer).unwrap();
        let second = manager.add_passenger(5, 7, &mut observer).unwrap();

        run_to_completion(&mut manager, &mut observer, 200);

        let first_load = observer.position_of(|e| matches!(e, DiffEvent::LoadLoad { load, .. } if *load == first));
        let first_unload = observer.position_of(|e| matches!(e, DiffEvent::LoadUnload { load, .. } if *load == first));
        let second_load = observer.position_of(|e| matches!(e, DiffEvent::LoadLoad { load, .. } if *load == second));
        let second_unload = observer.position_of(|e| matches!(e, DiffEvent::LoadUnload { load, .. } if *load == second));
        assert!(first_load < first_unload);
        assert!(second_load < second_unload);

        for event in &observer.events {
            if let DiffEvent::ElevatorMove { floor, .. } = event {
                assert!((1..=10).contains(floor), "elevator must stay within the building's floors");
            }
        }
    }

    #[test]
    fn look_ends_the_run_exactly_once_after_its_single_delivery() {
        // floors=4, elevator at floor 2, one load (4,1): the single delivery
        // should both empty the building and fire exactly one unload event.
        let mut manager = Manager::new(registry(), "look", 4, 900, 0).unwrap();
        let mut observer = EventLog::default();
        manager.add_elevator(2, &mut observer);
        manager.add_passenger(4, 1, &mut observer).unwrap();

        run_to_completion(&mut manager, &mut observer, 100);

        assert!(!manager.engine().simulation_running());
        let unloads = observer.events.iter().filter(|e| matches!(e, DiffEvent::LoadUnload { .. })).count();
        assert_eq!(unloads, 1);
    }

    #[test]
    fn rejects_equal_source_and_destination() {
        let mut manager = Manager::new(registry(), "fcfs", 5, 900, 0).unwrap();
        let mut observer = NoopManagerObserver;
        let err = manager.add_passenger(2, 2, &mut observer).unwrap_err();
        assert!(matches!(err, ManagerError::BadArgument(_)));
    }

    #[test]
    fn set_algorithm_retains_elevators_and_loads() {
        let mut manager = Manager::new(registry(), "fcfs", 10, 900, 0).unwrap();
        let mut observer = NoopManagerObserver;
        manager.add_elevator(1, &mut observer);
        manager.add_passenger(1, 5, &mut observer).unwrap();

        manager.set_algorithm("scan", &mut observer).unwrap();

        assert_eq!(manager.algorithm_name(), "scan");
        assert_eq!(manager.engine().elevators.len(), 1);
        assert_eq!(manager.engine().loads.len(), 1);
    }

    #[test]
    fn reset_clears_state_and_retains_current_algorithm_by_default() {
        let mut manager = Manager::new(registry(), "look", 10, 900, 0).unwrap();
        let mut observer = NoopManagerObserver;
        manager.add_elevator(1, &mut observer);
        manager.add_passenger(1, 5, &mut observer).unwrap();

        manager.reset(None, &mut observer).unwrap();

        assert_eq!(manager.algorithm_name(), "look");
        assert!(manager.engine().elevators.is_empty());
        assert!(manager.engine().loads.is_empty());
        assert_eq!(manager.engine().tick_count, Tick::ZERO);
    }

    #[test]
    fn paused_manager_does_not_advance_ticks() {
        let mut manager = Manager::new(registry(), "fcfs", 5, 900, 0).unwrap();
        let mut observer = NoopManagerObserver;
        manager.pause(&mut observer);
        manager.step(&mut observer).unwrap();
        assert_eq!(manager.engine().tick_count, Tick::ZERO);
    }

    #[test]
    fn single_passenger_run_completes() {
        let mut manager = Manager::new(registry(), "fcfs", 10, 900, 0).unwrap();
        let mut observer = NoopManagerObserver;
        manager.add_elevator(1, &mut observer);
        manager.add_passenger(1, 8, &mut observer).unwrap();

        for _ in 0..200 {
            manager.step(&mut observer).unwrap();
            if !manager.engine().simulation_running() {
                break;
            }
        }
        assert!(!manager.engine().simulation_running());
    }
}
