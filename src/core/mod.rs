//! Building blocks of a state machine.
//!
//! - Positional state identifiers via `StateId`
//! - Guard predicates for transitions
//! - Enter/loop/exit callbacks per state
//!
//! The engine that drives these lives in [`crate::machine`].

mod callbacks;
mod guard;
mod state;
mod transition;

pub use callbacks::{Action, StateCallbacks};
pub use guard::Guard;
pub use state::StateId;
pub use transition::Transition;
