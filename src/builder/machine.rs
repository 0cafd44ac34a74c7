//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::{Action, Guard, StateCallbacks, StateId};
use crate::machine::{MachineConfig, RegistrationError, StateMachine};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<RegistrationError>>;

/// Builder for constructing state machines with a fluent API.
///
/// Declarations are only applied in [`build`](Self::build), which reports
/// every rejected registration at once rather than stopping at the first.
/// States are numbered in the order they are declared.
pub struct StateMachineBuilder {
    config: MachineConfig,
    states: Vec<StateCallbacks>,
    start: Option<StateId>,
    transitions: Vec<(StateId, StateId, Guard)>,
    children: Vec<(StateId, StateMachine)>,
    every_enter: Option<Action>,
    every_loop: Option<Action>,
    every_exit: Option<Action>,
}

impl StateMachineBuilder {
    /// Create a builder for a machine with the given capacities.
    pub fn new(max_states: u8, max_transitions: u8) -> Self {
        Self::with_config(MachineConfig::new(max_states, max_transitions))
    }

    pub fn with_config(config: MachineConfig) -> Self {
        Self {
            config,
            states: Vec::new(),
            start: None,
            transitions: Vec::new(),
            children: Vec::new(),
            every_enter: None,
            every_loop: None,
            every_exit: None,
        }
    }

    /// Declare the next state.
    pub fn state(mut self, callbacks: StateCallbacks) -> Self {
        self.states.push(callbacks);
        self
    }

    /// Declare several states at once.
    pub fn states(mut self, callbacks: impl IntoIterator<Item = StateCallbacks>) -> Self {
        self.states.extend(callbacks);
        self
    }

    /// Set the start state (optional, defaults to the first state).
    pub fn start(mut self, state: impl Into<StateId>) -> Self {
        self.start = Some(state.into());
        self
    }

    /// Declare a guarded transition.
    pub fn transition<G>(mut self, from: impl Into<StateId>, to: impl Into<StateId>, guard: G) -> Self
    where
        G: FnMut() -> bool + 'static,
    {
        self.transitions
            .push((from.into(), to.into(), Guard::new(guard)));
        self
    }

    /// Nest a child machine inside `state`.
    pub fn child(mut self, state: impl Into<StateId>, child: StateMachine) -> Self {
        self.children.push((state.into(), child));
        self
    }

    pub fn every_state_enter<E>(mut self, enter: E) -> Self
    where
        E: FnMut() + 'static,
    {
        self.every_enter = Some(Action::new(enter));
        self
    }

    pub fn every_state_loop<L>(mut self, on_loop: L) -> Self
    where
        L: FnMut() + 'static,
    {
        self.every_loop = Some(Action::new(on_loop));
        self
    }

    pub fn every_state_exit<X>(mut self, exit: X) -> Self
    where
        X: FnMut() + 'static,
    {
        self.every_exit = Some(Action::new(exit));
        self
    }

    /// Build the state machine.
    ///
    /// States are registered first, then the start state, transitions and
    /// children, so declaration order between those groups does not matter.
    pub fn build(self) -> Result<StateMachine, BuildError> {
        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let mut machine = StateMachine::with_config(self.config);
        let mut checks: Vec<Check> = Vec::new();

        for callbacks in self.states {
            checks.push(check(machine.try_add_state(callbacks).map(|_| ())));
        }

        if let Some(start) = self.start {
            checks.push(check(machine.try_set_start_state(start)));
        }

        for (from, to, mut guard) in self.transitions {
            checks.push(check(
                machine.try_add_transition(from, to, move || guard.check()),
            ));
        }

        for (state, child) in self.children {
            checks.push(check(machine.try_add_child_state_machine(state, child)));
        }

        if let Some(mut enter) = self.every_enter {
            machine.add_every_state_enter(move || enter.invoke());
        }
        if let Some(mut on_loop) = self.every_loop {
            machine.add_every_state_loop(move || on_loop.invoke());
        }
        if let Some(mut exit) = self.every_exit {
            machine.add_every_state_exit(move || exit.invoke());
        }

        match Validation::all_vec(checks) {
            Validation::Success(_) => Ok(machine),
            Validation::Failure(errors) => Err(BuildError::Invalid(errors.iter().cloned().collect())),
        }
    }
}

fn check(result: Result<(), RegistrationError>) -> Check {
    match result {
        Ok(()) => Validation::success(()),
        Err(err) => Validation::fail(err),
    }
}
