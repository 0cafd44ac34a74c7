//! End-to-end behavior of nested machines and the startup/tick lifecycle.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tinystate::{state_ids, BuildError, MachineConfig, StateCallbacks, StateMachine, StateMachineBuilder};

type Log = Rc<RefCell<Vec<String>>>;

fn record(log: &Log, label: impl Into<String>) -> impl FnMut() + 'static {
    let log = Rc::clone(log);
    let label = label.into();
    move || log.borrow_mut().push(label.clone())
}

fn traced(log: &Log, name: &str) -> StateCallbacks {
    StateCallbacks::new()
        .on_enter(record(log, format!("{name}.enter")))
        .on_loop(record(log, format!("{name}.loop")))
        .on_exit(record(log, format!("{name}.exit")))
}

fn take(log: &Log) -> Vec<String> {
    log.borrow_mut().drain(..).collect()
}

state_ids! {
    enum Mode {
        Standby,
        Active,
    }
}

state_ids! {
    enum Blink {
        On,
        Off,
    }
}

/// A child that toggles on every tick, under a parent whose mode is flipped
/// from the outside.
fn blinking_tree(log: &Log, active: &Rc<Cell<bool>>) -> StateMachine {
    let child = StateMachineBuilder::new(2, 2)
        .state(traced(log, "on"))
        .state(traced(log, "off"))
        .transition(Blink::On, Blink::Off, || true)
        .transition(Blink::Off, Blink::On, || true)
        .build()
        .unwrap();

    let to_active = Rc::clone(active);
    let to_standby = Rc::clone(active);
    StateMachineBuilder::new(2, 2)
        .state(traced(log, "standby"))
        .state(traced(log, "active"))
        .transition(Mode::Standby, Mode::Active, move || to_active.get())
        .transition(Mode::Active, Mode::Standby, move || !to_standby.get())
        .child(Mode::Active, child)
        .build()
        .unwrap()
}

#[test]
fn child_on_start_state_starts_with_parent() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let active = Rc::new(Cell::new(true));
    let mut parent = blinking_tree(&log, &active);
    parent.set_start_state(Mode::Active);

    parent.startup();

    assert_eq!(take(&log), vec!["active.enter", "on.enter"]);
}

#[test]
fn child_on_other_state_is_not_started() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let active = Rc::new(Cell::new(false));
    let mut parent = blinking_tree(&log, &active);

    parent.startup();

    assert_eq!(take(&log), vec!["standby.enter"]);
}

#[test]
fn child_ticks_only_while_parent_state_is_active() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let active = Rc::new(Cell::new(false));
    let mut parent = blinking_tree(&log, &active);

    parent.startup();
    parent.tick();
    take(&log);

    active.set(true);
    parent.tick();
    assert_eq!(
        take(&log),
        vec!["standby.loop", "standby.exit", "active.enter"]
    );

    parent.tick();
    assert_eq!(
        take(&log),
        vec!["on.loop", "on.exit", "off.enter", "active.loop"]
    );

    active.set(false);
    parent.tick();
    assert_eq!(
        take(&log),
        vec!["off.loop", "off.exit", "on.enter", "active.loop", "active.exit", "standby.enter"]
    );

    parent.tick();
    assert_eq!(take(&log), vec!["standby.loop"]);
}

#[test]
fn child_keeps_its_position_across_parent_transitions() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let active = Rc::new(Cell::new(true));
    let mut parent = blinking_tree(&log, &active);

    parent.startup();
    parent.tick(); // standby -> active
    parent.tick(); // child on -> off

    active.set(false);
    parent.tick(); // child off -> on, parent active -> standby
    active.set(true);
    parent.tick(); // standby -> active

    let child = parent.child_state_machine(Mode::Active).unwrap();
    assert_eq!(Blink::from_id(child.current_state()), Some(Blink::On));
}

#[test]
fn parent_restart_restarts_child_on_start_state() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let active = Rc::new(Cell::new(true));
    let mut parent = blinking_tree(&log, &active);
    parent.set_start_state(Mode::Active);

    parent.startup();
    parent.tick();
    let child = parent.child_state_machine(Mode::Active).unwrap();
    assert_eq!(Blink::from_id(child.current_state()), Some(Blink::Off));
    take(&log);

    parent.startup();

    assert_eq!(take(&log), vec!["active.enter", "on.enter"]);
    let child = parent.child_state_machine(Mode::Active).unwrap();
    assert_eq!(Blink::from_id(child.current_state()), Some(Blink::On));
}

#[test]
fn three_levels_dispatch_depth_first() {
    let log = Rc::new(RefCell::new(Vec::new()));

    let mut leaf = StateMachine::new(1, 0);
    leaf.add_state(traced(&log, "leaf"));

    let mut middle = StateMachine::new(1, 0);
    let m = middle.add_state(traced(&log, "middle"));
    middle.add_child_state_machine(m, leaf);

    let mut root = StateMachine::new(1, 0);
    let r = root.add_state(traced(&log, "root"));
    root.add_child_state_machine(r, middle);
    root.add_every_state_loop(record(&log, "root.every"));

    root.startup();
    assert_eq!(take(&log), vec!["root.enter", "middle.enter", "leaf.enter"]);

    root.tick();
    assert_eq!(
        take(&log),
        vec!["leaf.loop", "middle.loop", "root.every", "root.loop"]
    );
}

#[test]
fn child_can_be_reached_mutably_for_host_wiring() {
    let mut parent = StateMachine::new(1, 0);
    let only = parent.add_empty_state();
    parent.add_child_state_machine(only, StateMachine::new(2, 0));

    let child = parent.child_state_machine_mut(only).unwrap();
    child.add_empty_state();
    let second = child.add_empty_state();
    assert!(child.set_start_state(second));

    parent.startup();
    assert_eq!(
        parent.child_state_machine(only).map(StateMachine::current_state),
        Some(second)
    );
}

#[test]
fn config_file_capacities_flow_into_the_machine() {
    let config: MachineConfig =
        serde_json::from_str(r#"{ "max_states": 255, "max_transitions": 4 }"#).unwrap();

    let machine = StateMachine::with_config(config);

    assert_eq!(machine.config(), MachineConfig::new(253, 4));
}

#[test]
fn builder_error_reports_violation_count() {
    let err = StateMachineBuilder::new(1, 0)
        .state(StateCallbacks::new())
        .transition(Mode::Standby, Mode::Active, || true)
        .build()
        .unwrap_err();

    assert!(matches!(err, BuildError::Invalid(ref errors) if errors.len() == 1));
    assert_eq!(err.to_string(), "State machine has 1 invalid registration(s)");
}
