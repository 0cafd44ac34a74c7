//! Capacity configuration for a state machine.

use crate::core::StateId;
use serde::{Deserialize, Serialize};

/// Largest state capacity a machine accepts; larger requests are clamped.
pub const MAX_STATE_CAPACITY: u8 = StateId::ANY.raw() - 1;

/// Fixed capacities chosen at construction.
///
/// Hosts that keep their wiring in a config file can deserialize this
/// directly:
///
/// ```rust
/// use tinystate::machine::MachineConfig;
///
/// let config: MachineConfig =
///     serde_json::from_str(r#"{ "max_states": 5, "max_transitions": 10 }"#).unwrap();
/// assert_eq!(config, MachineConfig::new(5, 10));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MachineConfig {
    pub max_states: u8,
    pub max_transitions: u8,
}

impl MachineConfig {
    /// Build a config, clamping `max_states` below the reserved sentinels.
    pub fn new(max_states: u8, max_transitions: u8) -> Self {
        Self {
            max_states,
            max_transitions,
        }
        .clamped()
    }

    /// The effective capacities. Deserialized configs are clamped when a
    /// machine is built from them.
    pub fn clamped(self) -> Self {
        Self {
            max_states: self.max_states.min(MAX_STATE_CAPACITY),
            max_transitions: self.max_transitions,
        }
    }
}
