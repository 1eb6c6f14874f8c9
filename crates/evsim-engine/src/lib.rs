//! `evsim-engine` — the deterministic, tick-driven simulation core.
//!
//! # Crate layout
//!
//! | Module       | Contents                      |
//! |--------------|--------------------------------|
//! | [`engine`]   | `Engine`, the tick loop        |
//! | [`builder`]  | `EngineBuilder`                |
//! | [`observer`] | `EngineObserver`, `NoopObserver` |
//! | [`error`]    | `EngineError`, `EngineResult<T>` |

pub mod builder;
pub mod engine;
pub mod error;
pub mod observer;

pub use builder::EngineBuilder;
pub use engine::Engine;
pub use error::{EngineError, EngineResult};
pub use observer::{EngineObserver, NoopObserver};

#[cfg(test)]
mod tests {
    use evsim_algorithms::{Fcfs, NStepLook};

    use super::*;

    #[test]
    fn single_elevator_delivers_a_passenger() {
        let mut engine = EngineBuilder::new(10, Box::new(Fcfs::new())).elevator_at(1).build();
        let mut observer = NoopObserver;

        engine.add_passenger(1, 5, &mut observer);
        assert!(engine.simulation_running());

        for _ in 0..200 {
            engine.step(&mut observer).expect("step should not error");
            if !engine.simulation_running() {
                break;
            }
        }

        assert!(!engine.simulation_running(), "passenger should have been delivered within 200 ticks");
        assert_eq!(engine.wait_times.len(), 1);
        assert_eq!(engine.time_in_lift.len(), 1);
    }

    #[test]
    fn elevator_never_carries_more_than_max_load() {
        let mut engine = EngineBuilder::new(5, Box::new(Fcfs::new())).max_load(120).elevator_at(1).build();
        let mut observer = NoopObserver;

        for _ in 0..5 {
            engine.add_passenger(1, 5, &mut observer);
        }

        for _ in 0..500 {
            engine.step(&mut observer).unwrap();
            for elevator in &engine.elevators {
                assert!(elevator.total_load(&engine.loads) <= 120);
            }
            if !engine.simulation_running() {
                break;
            }
        }
    }

    #[test]
    fn removing_an_elevator_does_not_panic_mid_run() {
        let mut engine = EngineBuilder::new(8, Box::new(Fcfs::new())).elevator_at(1).elevator_at(8).build();
        let mut observer = NoopObserver;
        engine.add_passenger(1, 8, &mut observer);

        let victim = engine.elevators[1].id;
        engine.step(&mut observer).unwrap();
        engine.remove_elevator(victim, &mut observer).unwrap();

        for _ in 0..300 {
            engine.step(&mut observer).unwrap();
            if !engine.simulation_running() {
                break;
            }
        }
        assert!(!engine.simulation_running());
    }

    #[test]
    fn n_step_look_relocates_every_elevator_to_its_zone_on_partition_change() {
        // floors=9, 3 elevators -> zones [1..3], [4..6], [7..9]; every
        // elevator lands on its zone's first floor once all three exist,
        // regardless of where it started.
        let engine = EngineBuilder::new(9, Box::new(NStepLook::new())).elevators_at([5, 5, 5]).build();

        let mut floors: Vec<u32> = engine.elevators.iter().map(|e| e.current_floor).collect();
        floors.sort_unstable();
        assert_eq!(floors, vec![1, 4, 7]);
    }

    #[test]
    fn n_step_look_repartitions_immediately_when_an_elevator_is_removed() {
        let mut engine = EngineBuilder::new(9, Box::new(NStepLook::new())).elevators_at([1, 4, 7]).build();
        let mut observer = NoopObserver;

        let removed = engine.elevators[2].id;
        engine.remove_elevator(removed, &mut observer).unwrap();

        // Down to 2 elevators -> zones [1..4], [5..9]; both remaining
        // elevators are relocated to the new split immediately, not just
        // re-planned around on their next move.
        let mut floors: Vec<u32> = engine.elevators.iter().map(|e| e.current_floor).collect();
        floors.sort_unstable();
        assert_eq!(floors, vec![1, 5]);
    }
}
