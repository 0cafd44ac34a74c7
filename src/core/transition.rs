//! Guarded edges between states.

use super::guard::Guard;
use super::state::StateId;

/// A directed edge from `from` (or [`StateId::ANY`]) to `to`, taken when the
/// guard returns `true`.
#[derive(Debug)]
pub struct Transition {
    pub from: StateId,
    pub to: StateId,
    pub guard: Guard,
}

impl Transition {
    pub fn new(from: StateId, to: StateId, guard: Guard) -> Self {
        Self { from, to, guard }
    }

    /// Whether this edge is a candidate while `current` is active.
    pub fn applies_to(&self, current: StateId) -> bool {
        self.from == current || self.from.is_any()
    }

    /// Evaluate the edge for `current`.
    ///
    /// The guard is only called when the source matches; returns the target
    /// when the edge fires.
    pub fn fire(&mut self, current: StateId) -> Option<StateId> {
        if self.applies_to(current) && self.guard.check() {
            Some(self.to)
        } else {
            None
        }
    }
}
