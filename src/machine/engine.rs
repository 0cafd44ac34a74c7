//! The state machine engine: registration, startup and the per-tick dispatch.

use crate::core::{Action, Guard, StateCallbacks, StateId, Transition};
use crate::machine::config::MachineConfig;
use crate::machine::error::RegistrationError;
use tracing::{debug, trace, warn};

/// Per-state storage: callbacks plus an optional owned child machine.
#[derive(Debug)]
struct StateSlot {
    callbacks: StateCallbacks,
    child: Option<Box<StateMachine>>,
}

/// Fixed-capacity hierarchical state machine.
///
/// States and transitions are registered during setup, then the host calls
/// [`startup`](Self::startup) once and [`tick`](Self::tick) on every pass of
/// its control loop. Storage is allocated up front; registration never grows
/// it past the configured capacity.
///
/// Every registration method comes in two forms: a `try_` form returning
/// [`RegistrationError`], and a classic form that reports failure through a
/// `bool` or [`StateId::NONE`] and logs the reason.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use tinystate::StateMachine;
///
/// let counter = Rc::new(Cell::new(0));
/// let mut machine = StateMachine::new(2, 2);
///
/// let up = {
///     let counter = Rc::clone(&counter);
///     machine.add_state_loop(move || counter.set(counter.get() + 1))
/// };
/// let down = {
///     let counter = Rc::clone(&counter);
///     machine.add_state_loop(move || counter.set(counter.get() - 1))
/// };
///
/// let c = Rc::clone(&counter);
/// assert!(machine.add_transition(up, down, move || c.get() >= 3));
/// let c = Rc::clone(&counter);
/// assert!(machine.add_transition(down, up, move || c.get() <= 0));
///
/// machine.startup();
/// for _ in 0..3 {
///     machine.tick();
/// }
/// assert_eq!(counter.get(), 3);
/// assert_eq!(machine.current_state(), down);
/// ```
#[derive(Debug)]
pub struct StateMachine {
    states: Vec<StateSlot>,
    transitions: Vec<Transition>,
    every_state: StateCallbacks,
    config: MachineConfig,
    current: StateId,
    start: StateId,
}

impl StateMachine {
    /// Create a machine holding at most `max_states` states and
    /// `max_transitions` transitions.
    ///
    /// `max_states` is clamped to [`MAX_STATE_CAPACITY`](super::MAX_STATE_CAPACITY)
    /// so indices never collide with the sentinels.
    pub fn new(max_states: u8, max_transitions: u8) -> Self {
        Self::with_config(MachineConfig::new(max_states, max_transitions))
    }

    pub fn with_config(config: MachineConfig) -> Self {
        let config = config.clamped();
        Self {
            states: Vec::with_capacity(usize::from(config.max_states)),
            transitions: Vec::with_capacity(usize::from(config.max_transitions)),
            every_state: StateCallbacks::new(),
            config,
            current: StateId::new(0),
            start: StateId::new(0),
        }
    }

    // ---------------------------------------------------------------------
    // States
    // ---------------------------------------------------------------------

    /// Register a state, returning its index.
    pub fn try_add_state(&mut self, callbacks: StateCallbacks) -> Result<StateId, RegistrationError> {
        if self.states.len() >= usize::from(self.config.max_states) {
            return Err(RegistrationError::StateCapacityExhausted {
                max_states: self.config.max_states,
            });
        }

        let id = StateId::new(self.num_states());
        self.states.push(StateSlot {
            callbacks,
            child: None,
        });
        Ok(id)
    }

    /// Register a state, returning its index or [`StateId::NONE`] when the
    /// machine is full.
    pub fn add_state(&mut self, callbacks: StateCallbacks) -> StateId {
        self.try_add_state(callbacks).unwrap_or_else(|err| {
            warn!(error = %err, "state rejected");
            StateId::NONE
        })
    }

    /// Register a state with no callbacks.
    pub fn add_empty_state(&mut self) -> StateId {
        self.add_state(StateCallbacks::new())
    }

    pub fn add_state_enter<E>(&mut self, enter: E) -> StateId
    where
        E: FnMut() + 'static,
    {
        self.add_state(StateCallbacks::new().on_enter(enter))
    }

    pub fn add_state_loop<L>(&mut self, on_loop: L) -> StateId
    where
        L: FnMut() + 'static,
    {
        self.add_state(StateCallbacks::new().on_loop(on_loop))
    }

    pub fn add_state_exit<X>(&mut self, exit: X) -> StateId
    where
        X: FnMut() + 'static,
    {
        self.add_state(StateCallbacks::new().on_exit(exit))
    }

    pub fn add_state_enter_loop<E, L>(&mut self, enter: E, on_loop: L) -> StateId
    where
        E: FnMut() + 'static,
        L: FnMut() + 'static,
    {
        self.add_state(StateCallbacks::new().on_enter(enter).on_loop(on_loop))
    }

    pub fn add_state_loop_exit<L, X>(&mut self, on_loop: L, exit: X) -> StateId
    where
        L: FnMut() + 'static,
        X: FnMut() + 'static,
    {
        self.add_state(StateCallbacks::new().on_loop(on_loop).on_exit(exit))
    }

    pub fn add_state_enter_exit<E, X>(&mut self, enter: E, exit: X) -> StateId
    where
        E: FnMut() + 'static,
        X: FnMut() + 'static,
    {
        self.add_state(StateCallbacks::new().on_enter(enter).on_exit(exit))
    }

    /// Choose the state [`startup`](Self::startup) enters. The current state
    /// is left alone until then.
    pub fn try_set_start_state(&mut self, state: impl Into<StateId>) -> Result<(), RegistrationError> {
        let state = state.into();
        if !self.is_registered(state) {
            return Err(self.unknown_state(state));
        }
        self.start = state;
        Ok(())
    }

    pub fn set_start_state(&mut self, state: impl Into<StateId>) -> bool {
        self.try_set_start_state(state)
            .map_err(|err| warn!(error = %err, "start state rejected"))
            .is_ok()
    }

    // ---------------------------------------------------------------------
    // Transitions
    // ---------------------------------------------------------------------

    /// Register a guarded transition. `from` may be [`StateId::ANY`]; both
    /// endpoints must otherwise be registered states.
    pub fn try_add_transition<G>(
        &mut self,
        from: impl Into<StateId>,
        to: impl Into<StateId>,
        guard: G,
    ) -> Result<(), RegistrationError>
    where
        G: FnMut() -> bool + 'static,
    {
        let (from, to) = (from.into(), to.into());

        if self.transitions.len() >= usize::from(self.config.max_transitions) {
            return Err(RegistrationError::TransitionCapacityExhausted {
                max_transitions: self.config.max_transitions,
            });
        }

        let source_ok = from.is_any() || self.is_registered(from);
        if !source_ok || !self.is_registered(to) {
            return Err(RegistrationError::InvalidTransition {
                from,
                to,
                num_states: self.num_states(),
            });
        }

        self.transitions.push(Transition::new(from, to, Guard::new(guard)));
        Ok(())
    }

    pub fn add_transition<G>(&mut self, from: impl Into<StateId>, to: impl Into<StateId>, guard: G) -> bool
    where
        G: FnMut() -> bool + 'static,
    {
        self.try_add_transition(from, to, guard)
            .map_err(|err| warn!(error = %err, "transition rejected"))
            .is_ok()
    }

    // ---------------------------------------------------------------------
    // Every-state hooks
    // ---------------------------------------------------------------------

    /// Run `enter` whenever the machine starts up. Replaces any earlier hook.
    ///
    /// Transitions taken during [`tick`](Self::tick) do not run this hook;
    /// only the target's own enter callback runs there.
    pub fn add_every_state_enter<E>(&mut self, enter: E) -> bool
    where
        E: FnMut() + 'static,
    {
        self.every_state.set_enter(Action::new(enter));
        true
    }

    /// Run `on_loop` on every tick, before the active state's own loop.
    pub fn add_every_state_loop<L>(&mut self, on_loop: L) -> bool
    where
        L: FnMut() + 'static,
    {
        self.every_state.set_loop(Action::new(on_loop));
        true
    }

    /// Run `exit` whenever a state is left, before its own exit callback.
    pub fn add_every_state_exit<X>(&mut self, exit: X) -> bool
    where
        X: FnMut() + 'static,
    {
        self.every_state.set_exit(Action::new(exit));
        true
    }

    // ---------------------------------------------------------------------
    // Child machines
    // ---------------------------------------------------------------------

    /// Nest `child` inside `state`. The child starts up with its parent when
    /// `state` is the start state and ticks whenever `state` is active.
    /// Attaching to a state that already has a child replaces it.
    pub fn try_add_child_state_machine(
        &mut self,
        state: impl Into<StateId>,
        child: StateMachine,
    ) -> Result<(), RegistrationError> {
        let state = state.into();
        let num_states = self.num_states();
        let slot = self
            .slot_mut(state)
            .ok_or(RegistrationError::UnknownState { state, num_states })?;

        if slot.child.replace(Box::new(child)).is_some() {
            debug!(%state, "replaced child state machine");
        } else {
            debug!(%state, "attached child state machine");
        }
        Ok(())
    }

    pub fn add_child_state_machine(&mut self, state: impl Into<StateId>, child: StateMachine) -> bool {
        self.try_add_child_state_machine(state, child)
            .map_err(|err| warn!(error = %err, "child state machine rejected"))
            .is_ok()
    }

    pub fn child_state_machine(&self, state: impl Into<StateId>) -> Option<&StateMachine> {
        self.slot(state.into())?.child.as_deref()
    }

    pub fn child_state_machine_mut(&mut self, state: impl Into<StateId>) -> Option<&mut StateMachine> {
        self.slot_mut(state.into())?.child.as_deref_mut()
    }

    // ---------------------------------------------------------------------
    // Running
    // ---------------------------------------------------------------------

    /// Enter the start state.
    ///
    /// Runs the every-state enter hook, then the start state's enter
    /// callback, then starts the child attached to the start state. Calling
    /// this again restarts the machine from its start state.
    pub fn startup(&mut self) {
        self.current = self.start;

        let Some(index) = self.active_index() else {
            warn!(start = %self.start, "startup called before any state was registered");
            return;
        };

        debug!(state = %self.current, "starting state machine");
        self.every_state.run_enter();

        let slot = &mut self.states[index];
        slot.callbacks.run_enter();
        if let Some(child) = slot.child.as_deref_mut() {
            child.startup();
        }
    }

    /// One pass of the host's control loop.
    ///
    /// Ticks the active state's child, runs the every-state loop hook and
    /// the state's own loop callback, then takes the first registered
    /// transition whose source matches and whose guard passes. Guards after
    /// the first passing one are not evaluated.
    pub fn tick(&mut self) {
        let Some(index) = self.active_index() else {
            trace!(state = %self.current, "tick skipped, no active state");
            return;
        };

        if let Some(child) = self.states[index].child.as_deref_mut() {
            child.tick();
        }
        self.every_state.run_loop();
        self.states[index].callbacks.run_loop();

        let current = self.current;
        let fired = self
            .transitions
            .iter_mut()
            .enumerate()
            .find_map(|(position, transition)| transition.fire(current).map(|to| (position, to)));

        let Some((position, target)) = fired else {
            return;
        };

        if target == current {
            trace!(state = %current, transition = position, "self-transition");
            return;
        }

        debug!(from = %current, to = %target, transition = position, "transition fired");
        self.every_state.run_exit();
        self.states[index].callbacks.run_exit();
        self.current = target;
        if let Some(next) = self.slot_mut(target) {
            next.callbacks.run_enter();
        }
    }

    // ---------------------------------------------------------------------
    // Introspection
    // ---------------------------------------------------------------------

    pub fn current_state(&self) -> StateId {
        self.current
    }

    pub fn start_state(&self) -> StateId {
        self.start
    }

    pub fn num_states(&self) -> u8 {
        // Bounded by `max_states`, which is clamped below `u8::MAX`.
        self.states.len() as u8
    }

    pub fn num_transitions(&self) -> u8 {
        self.transitions.len() as u8
    }

    pub fn max_states(&self) -> u8 {
        self.config.max_states
    }

    pub fn max_transitions(&self) -> u8 {
        self.config.max_transitions
    }

    /// Effective capacities after clamping.
    pub fn config(&self) -> MachineConfig {
        self.config
    }

    /// Whether `state` names a registered state. Sentinels never do.
    pub fn is_registered(&self, state: StateId) -> bool {
        state.index().is_some_and(|index| index < self.states.len())
    }

    fn active_index(&self) -> Option<usize> {
        self.current
            .index()
            .filter(|&index| index < self.states.len())
    }

    fn slot(&self, state: StateId) -> Option<&StateSlot> {
        self.states.get(state.index()?)
    }

    fn slot_mut(&mut self, state: StateId) -> Option<&mut StateSlot> {
        self.states.get_mut(state.index()?)
    }

    fn unknown_state(&self, state: StateId) -> RegistrationError {
        RegistrationError::UnknownState {
            state,
            num_states: self.num_states(),
        }
    }
}
