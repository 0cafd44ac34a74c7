//! Tinystate: a fixed-capacity hierarchical state machine engine
//!
//! Tinystate targets cooperatively scheduled control loops, the
//! `setup()`/`loop()` shape of a microcontroller program. A machine holds a
//! fixed number of states and guarded transitions, decided at construction.
//! Registration never allocates beyond that capacity, and running never
//! allocates at all.
//!
//! # Core Concepts
//!
//! - **State**: a positional [`StateId`] with optional enter/loop/exit callbacks
//! - **Transition**: a guarded edge, evaluated in registration order each tick
//! - **Every-state hooks**: callbacks that run for whichever state is active
//! - **Child machines**: a machine nested in a parent state, ticked while
//!   that state is active
//!
//! # Example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use tinystate::{state_ids, StateMachine};
//!
//! state_ids! {
//!     enum Count {
//!         Ascending,
//!         Descending,
//!     }
//! }
//!
//! let counter = Rc::new(Cell::new(0));
//! let mut machine = StateMachine::new(5, 10);
//!
//! let c = Rc::clone(&counter);
//! machine.add_state_loop(move || c.set(c.get() + 1));
//! let c = Rc::clone(&counter);
//! machine.add_state_loop(move || c.set(c.get() - 1));
//!
//! let c = Rc::clone(&counter);
//! machine.add_transition(Count::Ascending, Count::Descending, move || c.get() >= 10);
//! let c = Rc::clone(&counter);
//! machine.add_transition(Count::Descending, Count::Ascending, move || c.get() <= 0);
//!
//! machine.startup();
//! for _ in 0..10 {
//!     machine.tick();
//! }
//! assert_eq!(counter.get(), 10);
//! assert_eq!(Count::from_id(machine.current_state()), Some(Count::Descending));
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, StateMachineBuilder};
pub use crate::core::{Guard, StateCallbacks, StateId};
pub use machine::{MachineConfig, RegistrationError, StateMachine};
