//! The running engine.
//!
//! # Key Concepts
//!
//! - **Registration**: states, transitions, hooks and children are added
//!   during setup, bounded by a fixed [`MachineConfig`]
//! - **Startup**: enters the start state and starts its child
//! - **Tick**: one run-to-completion step of the host's control loop
//!
//! All of this is single-threaded and non-blocking. Callbacks share host
//! state through whatever they capture (typically `Rc<Cell<_>>`).

mod config;
mod engine;
mod error;

pub use config::{MachineConfig, MAX_STATE_CAPACITY};
pub use engine::StateMachine;
pub use error::RegistrationError;
