//! Per-elevator action queue — the deferred work list the tick loop drains.

use std::collections::VecDeque;

use evsim_core::LoadId;

/// One entry in an elevator's action queue.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Yields control back to the engine for one tick ("time passes").
    AddTick,
    /// Re-plan this elevator right now.
    RunCycle,
    /// Advance one floor toward the current destination.
    MoveElevator,
    /// Relocate directly to `floor` within the same tick, with no
    /// intermediate floor events. Used only by C-SCAN's wraparound.
    JumpElevator(u32),
    /// Pick up a specific, already-reserved load.
    LoadLoad(LoadId),
    /// Drop a specific load.
    UnloadLoad(LoadId),
}

/// Ordered, per-elevator sequence of pending [`Action`]s.
///
/// When empty, [`ActionQueue::pop`] synthesizes a `RunCycle` rather than
/// returning `None` — an elevator with nothing queued always has something
/// to do.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionQueue {
    entries: VecDeque<Action>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self { entries: VecDeque::new() }
    }

    pub fn push(&mut self, action: Action) {
        self.entries.push_back(action);
    }

    /// Pop the next action, synthesizing `RunCycle` if the queue is empty.
    pub fn pop(&mut self) -> Action {
        self.entries.pop_front().unwrap_or(Action::RunCycle)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append `n` `AddTick`s.
    pub fn tick(&mut self, n: usize) {
        for _ in 0..n {
            self.push(Action::AddTick);
        }
    }

    /// Append the three-tick door-open sequence.
    pub fn open_door(&mut self) {
        self.tick(3);
    }

    /// Append the three-tick door-close sequence.
    pub fn close_door(&mut self) {
        self.tick(3);
    }

    pub fn copy(&self) -> ActionQueue {
        self.clone()
    }
}
