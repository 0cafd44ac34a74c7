//! Count Example
//!
//! A counter climbs to ten in one state and falls back to zero in another,
//! the classic first program for a microcontroller state machine.
//!
//! Key concepts:
//! - The host owns the machine and drives it from its own loop
//! - Callbacks share the counter through an `Rc<Cell<_>>`
//! - Transitions fire on the tick their guard first passes
//!
//! Run with: RUST_LOG=tinystate=debug cargo run --example count_example

use std::cell::Cell;
use std::rc::Rc;
use tinystate::{state_ids, StateMachine};
use tracing_subscriber::EnvFilter;

state_ids! {
    enum Count {
        Ascending,
        Descending,
    }
}

/// Everything the host would do in `setup()`.
fn setup(counter: &Rc<Cell<i32>>) -> StateMachine {
    // Room for five states and ten transitions.
    let mut machine = StateMachine::new(5, 10);

    let c = Rc::clone(counter);
    machine.add_state_loop(move || {
        println!("counter: {}", c.get());
        c.set(c.get() + 1);
    });

    let c = Rc::clone(counter);
    machine.add_state_loop(move || {
        println!("counter: {}", c.get());
        c.set(c.get() - 1);
    });

    let c = Rc::clone(counter);
    machine.add_transition(Count::Ascending, Count::Descending, move || c.get() >= 10);

    let c = Rc::clone(counter);
    machine.add_transition(Count::Descending, Count::Ascending, move || c.get() <= 0);

    machine.startup();
    machine
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Count Example ===\n");

    let counter = Rc::new(Cell::new(0));
    let mut machine = setup(&counter);

    // Stand-in for the host's endless `loop()`.
    for _ in 0..45 {
        machine.tick();
    }

    let state = Count::from_id(machine.current_state()).map(Count::name);
    println!("\nFinal state: {}", state.unwrap_or("unknown"));

    println!("\n=== Example Complete ===");
}
