//! Registration errors reported by the checked engine API.

use crate::core::StateId;
use thiserror::Error;

/// Why a state, transition, start state or child machine was rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("State capacity ({max_states}) exhausted")]
    StateCapacityExhausted { max_states: u8 },

    #[error("Transition capacity ({max_transitions}) exhausted")]
    TransitionCapacityExhausted { max_transitions: u8 },

    #[error("State {state} is not registered ({num_states} states registered)")]
    UnknownState { state: StateId, num_states: u8 },

    #[error("Transition {from} -> {to} references an unregistered state ({num_states} states registered)")]
    InvalidTransition {
        from: StateId,
        to: StateId,
        num_states: u8,
    },
}
