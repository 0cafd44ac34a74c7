//! Builder API for declaring a whole state machine at once.
//!
//! The engine's own registration methods report one failure at a time.
//! [`StateMachineBuilder`] collects a complete declaration and validates it in
//! one pass, and [`state_ids!`](crate::state_ids) gives states readable names.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
