//! Build errors for the state machine builder.

use crate::machine::RegistrationError;
use thiserror::Error;

/// Errors that can occur when building a state machine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("No states defined. Call .state(..) before .build()")]
    NoStates,

    /// Every registration that was rejected, in declaration order.
    #[error("State machine has {} invalid registration(s)", .0.len())]
    Invalid(Vec<RegistrationError>),
}
