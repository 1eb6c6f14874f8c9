//! The `ElevatorAlgorithm` trait — the main extension point for scheduling
//! policies.

use evsim_core::{ElevatorId, LoadId, SimRng};

use crate::context::AlgorithmContext;

/// How the engine should enact the `MOVE_ELEVATOR` step of a cycle plan.
///
/// Every policy but C-SCAN uses `Step`. C-SCAN's wraparound from the top
/// floor back to the bottom is modeled as an instantaneous relocation
/// (one tick, no intermediate floor events) rather than a sequence of
/// ordinary one-floor steps.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum MoveAction {
    Step,
    JumpTo(u32),
}

/// Pluggable elevator scheduling policy.
///
/// Only [`get_new_destination`][Self::get_new_destination] is required. All
/// other hooks have no-op (or permissive, for the `pre_*_check` pair)
/// defaults so a minimal policy needs only a handful of lines.
///
/// Implementations own their private state (direction maps, zone
/// assignments, attended-to sets) directly as struct fields — there is no
/// shared base-class state, unlike the inheritance hierarchy of the
/// original system (see the design notes on algorithm composition).
pub trait ElevatorAlgorithm: Send {
    /// Choose a destination for `elevator`; called when it has none or has
    /// just reached its current one. `None` means "nothing to do yet".
    fn get_new_destination(
        &mut self,
        elevator: ElevatorId,
        ctx: &AlgorithmContext<'_>,
        rng: &mut SimRng,
    ) -> Option<u32>;

    /// Permit `elevator` to pick up `load` right now. Default: always permit.
    fn pre_load_check(
        &mut self,
        _load: LoadId,
        _elevator: ElevatorId,
        _ctx: &AlgorithmContext<'_>,
    ) -> bool {
        true
    }

    /// Permit `elevator` to drop off `load` right now. Default: always permit.
    fn pre_unload_check(
        &mut self,
        _load: LoadId,
        _elevator: ElevatorId,
        _ctx: &AlgorithmContext<'_>,
    ) -> bool {
        true
    }

    fn pre_loop(&mut self, _ctx: &AlgorithmContext<'_>) {}
    fn post_loop(&mut self, _ctx: &AlgorithmContext<'_>) {}

    fn on_load_added(&mut self, _load: LoadId, _ctx: &AlgorithmContext<'_>) {}
    fn on_load_removed(&mut self, _load: LoadId, _elevator: ElevatorId, _ctx: &AlgorithmContext<'_>) {}
    fn on_load_load(&mut self, _load: LoadId, _elevator: ElevatorId, _ctx: &AlgorithmContext<'_>) {}
    fn on_load_unload(&mut self, _load: LoadId, _elevator: ElevatorId, _ctx: &AlgorithmContext<'_>) {}

    /// Topology changed; the algorithm may answer with `(elevator, floor)`
    /// relocations it wants applied immediately (no tick cost, no
    /// intermediate floor events) — e.g. a zoned policy repositioning every
    /// elevator to the first floor of its newly recomputed zone. Default:
    /// no relocations.
    fn on_elevator_added(&mut self, _elevator: ElevatorId, _ctx: &AlgorithmContext<'_>) -> Vec<(ElevatorId, u32)> {
        Vec::new()
    }
    fn on_elevator_removed(&mut self, _elevator: ElevatorId, _ctx: &AlgorithmContext<'_>) -> Vec<(ElevatorId, u32)> {
        Vec::new()
    }
    fn on_elevator_move(&mut self, _elevator: ElevatorId, _ctx: &AlgorithmContext<'_>) {}
    fn on_floors_changed(&mut self, _ctx: &AlgorithmContext<'_>) -> Vec<(ElevatorId, u32)> {
        Vec::new()
    }

    fn on_simulation_end(&mut self, _ctx: &AlgorithmContext<'_>) {}

    /// How to enact this elevator's next `MOVE_ELEVATOR` step. Default: an
    /// ordinary one-floor step toward the current destination.
    fn plan_move(&mut self, _elevator: ElevatorId, _ctx: &AlgorithmContext<'_>) -> MoveAction {
        MoveAction::Step
    }
}
