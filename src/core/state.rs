//! Positional state identifiers and their reserved sentinels.
//!
//! States are identified purely by the order in which they were registered.
//! The two largest representable values are reserved: one marks "no state",
//! the other is the wildcard source used by transitions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a registered state.
///
/// Values `0..=StateId::MAX_INDEX` are real states. [`StateId::NONE`] is
/// returned when a state could not be registered, and [`StateId::ANY`] is
/// accepted as the source of a transition to match every state.
///
/// # Example
///
/// ```rust
/// use tinystate::core::StateId;
///
/// let idle = StateId::new(0);
/// assert_eq!(idle.index(), Some(0));
/// assert!(StateId::NONE.is_none());
/// assert!(StateId::ANY.is_any());
/// assert_eq!(StateId::ANY.index(), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(u8);

impl StateId {
    /// "No state": rejection value and unreachable marker.
    pub const NONE: StateId = StateId(u8::MAX);

    /// Wildcard transition source matching whichever state is current.
    pub const ANY: StateId = StateId(u8::MAX - 1);

    /// Largest index a registered state can have.
    pub const MAX_INDEX: u8 = u8::MAX - 3;

    /// Wrap a raw index.
    pub const fn new(raw: u8) -> Self {
        StateId(raw)
    }

    /// The raw 8-bit value, sentinels included.
    pub const fn raw(self) -> u8 {
        self.0
    }

    pub const fn is_none(self) -> bool {
        self.0 == Self::NONE.0
    }

    pub const fn is_any(self) -> bool {
        self.0 == Self::ANY.0
    }

    /// The table index for a concrete state, or `None` for either sentinel.
    pub const fn index(self) -> Option<usize> {
        if self.is_none() || self.is_any() {
            None
        } else {
            Some(self.0 as usize)
        }
    }
}

impl From<u8> for StateId {
    fn from(raw: u8) -> Self {
        StateId(raw)
    }
}

impl From<StateId> for u8 {
    fn from(id: StateId) -> Self {
        id.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            f.write_str("NONE")
        } else if self.is_any() {
            f.write_str("ANY")
        } else {
            write!(f, "{}", self.0)
        }
    }
}
