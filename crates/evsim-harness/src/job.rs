//! Runs a single iteration of a `TestSettings` to completion (or timeout).

use std::sync::Arc;

use evsim_algorithm::AlgorithmRegistry;
use evsim_core::constants::STALL_TICK_LIMIT;
use evsim_core::{SimRng, Tick};
use evsim_manager::{DiffEvent, Manager, ManagerObserver};

use crate::error::{HarnessError, HarnessResult};
use crate::settings::TestSettings;
use crate::stats::JobOutcome;

/// Tracks the tick a load was last loaded or unloaded, the same "frozen
/// loads" signal the source watches via `on_load_move`.
#[derive(Default)]
struct StallTracker {
    latest_load_move: Tick,
}

impl ManagerObserver for StallTracker {
    fn send_event(&mut self, tick: Tick, events: &[DiffEvent]) {
        if events.iter().any(|e| matches!(e, DiffEvent::LoadLoad { .. } | DiffEvent::LoadUnload { .. })) {
            self.latest_load_move = tick;
        }
    }
}

/// Runs iteration `iteration` (1-based) of `settings` to completion.
///
/// Seeds a fresh engine via `(settings.seed + iteration) mod 2^32`,
/// instantiates elevators at random floors, injects the pre-populated and
/// random passengers, then steps until the building empties or 500 ticks
/// pass with no load movement.
pub(crate) fn run_job(settings: &TestSettings, iteration: u32, registry: &Arc<AlgorithmRegistry>, export_snapshot: bool) -> HarnessResult<JobOutcome> {
    let seed = SimRng::derive_job_seed(settings.seed, iteration as u64);
    let mut rng = SimRng::new(seed);

    let mut manager = Manager::new(Arc::clone(registry), &settings.algorithm_name, settings.floors, settings.max_load, seed)?;
    manager.set_speed(settings.speed);

    if let Some(init) = &settings.init_function {
        init(manager.algorithm_mut());
    }

    let mut observer = StallTracker::default();

    for _ in 0..settings.num_elevators {
        let floor = rng.gen_range_u32(1, settings.floors);
        manager.add_elevator(floor, &mut observer);
    }

    for &(initial, destination) in &settings.loads {
        manager.add_passenger(initial, destination, &mut observer)?;
    }
    for _ in 0..settings.num_passengers {
        let (initial, destination) = rng.sample_distinct_floors(settings.floors);
        manager.add_passenger(initial, destination, &mut observer)?;
    }

    let initial_snapshot = export_snapshot.then(|| evsim_output::EngineSnapshot::capture(manager.engine()));

    manager.play(&mut observer);

    while manager.engine().simulation_running() {
        if let Some(hook) = &settings.on_tick {
            hook(manager.algorithm_mut());
        }
        manager.step(&mut observer)?;

        let tick = manager.engine().tick_count;
        if tick.since(observer.latest_load_move) > STALL_TICK_LIMIT {
            return Err(HarnessError::TestTimeout { name: settings.name.clone(), iteration, tick });
        }
    }

    let engine = manager.engine();
    Ok(JobOutcome {
        ticks: engine.tick_count.0 as f64,
        wait_time: engine.wait_times.clone(),
        time_in_lift: engine.time_in_lift.clone(),
        occupancy: engine.occupancy.clone(),
        initial_snapshot,
    })
}

#[cfg(test)]
mod tests {
    use evsim_algorithm::{AlgorithmContext, ElevatorAlgorithm};
    use evsim_algorithms::register_all;
    use evsim_core::{ElevatorId, LoadId};

    use super::*;
    use crate::settings::TestSettings;

    fn registry() -> Arc<AlgorithmRegistry> {
        let mut registry = AlgorithmRegistry::new();
        register_all(&mut registry).unwrap();
        Arc::new(registry)
    }

    /// Never picks a destination and never admits a pickup; every job run
    /// against it stalls forever, exercising the harness's own stall timeout
    /// rather than any scheduling policy's.
    struct NeverBoard;

    impl ElevatorAlgorithm for NeverBoard {
        fn get_new_destination(&mut self, _elevator: ElevatorId, _ctx: &AlgorithmContext<'_>, _rng: &mut SimRng) -> Option<u32> {
            None
        }

        fn pre_load_check(&mut self, _load: LoadId, _elevator: ElevatorId, _ctx: &AlgorithmContext<'_>) -> bool {
            false
        }
    }

    #[test]
    fn a_policy_that_never_boards_anyone_times_out_as_a_stall() {
        let mut registry = AlgorithmRegistry::new();
        registry.register("never_board", || Box::new(NeverBoard)).unwrap();
        let registry = Arc::new(registry);

        let settings = TestSettings::new("stalls", "never_board", 5, 1).num_elevators(1).num_passengers(1).seed(1);
        let err = run_job(&settings, 1, &registry, false).unwrap_err();
        match err {
            HarnessError::TestTimeout { name, iteration, tick } => {
                assert_eq!(name, "stalls");
                assert_eq!(iteration, 1);
                assert_eq!(tick.0, STALL_TICK_LIMIT + 1);
            }
            other => panic!("expected TestTimeout, got {other:?}"),
        }
    }

    #[test]
    fn single_iteration_completes_and_reports_ticks() {
        let settings = TestSettings::new("smoke", "fcfs", 10, 1).num_elevators(2).num_passengers(5).seed(42);
        let outcome = run_job(&settings, 1, &registry(), false).unwrap();
        assert!(outcome.ticks > 0.0);
        assert_eq!(outcome.wait_time.len(), 5);
    }

    #[test]
    fn same_settings_and_iteration_are_deterministic() {
        let settings = TestSettings::new("repeat", "scan", 10, 1).num_elevators(2).num_passengers(8).seed(7);
        let a = run_job(&settings, 3, &registry(), false).unwrap();
        let b = run_job(&settings, 3, &registry(), false).unwrap();
        assert_eq!(a.ticks, b.ticks);
    }

    #[test]
    fn init_function_runs_before_population() {
        use std::sync::atomic::{AtomicBool, Ordering};
        let called = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&called);
        let settings = TestSettings::new("hook", "fcfs", 6, 1).num_elevators(1).num_passengers(1).init_function(move |_algo| {
            flag.store(true, Ordering::SeqCst);
        });
        run_job(&settings, 1, &registry(), false).unwrap();
        assert!(called.load(Ordering::SeqCst));
    }
}
