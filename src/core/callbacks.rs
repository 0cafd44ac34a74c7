//! Enter/loop/exit callbacks attached to a state or to every state.

use std::fmt;

/// A side-effecting callback with no arguments and no result.
pub struct Action {
    run: Box<dyn FnMut()>,
}

impl Action {
    pub fn new<F>(run: F) -> Self
    where
        F: FnMut() + 'static,
    {
        Action { run: Box::new(run) }
    }

    pub fn invoke(&mut self) {
        (self.run)()
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Action(..)")
    }
}

/// Up to one callback per phase. An empty slot is a no-op.
///
/// The same shape describes a single state's behavior and the hooks that run
/// for every state.
///
/// # Example
///
/// ```rust
/// use tinystate::core::StateCallbacks;
///
/// let heater = StateCallbacks::new()
///     .on_enter(|| println!("heater on"))
///     .on_exit(|| println!("heater off"));
///
/// assert!(heater.has_enter());
/// assert!(!heater.has_loop());
/// assert!(heater.has_exit());
/// ```
#[derive(Default)]
pub struct StateCallbacks {
    enter: Option<Action>,
    on_loop: Option<Action>,
    exit: Option<Action>,
}

impl StateCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_enter<F>(mut self, enter: F) -> Self
    where
        F: FnMut() + 'static,
    {
        self.enter = Some(Action::new(enter));
        self
    }

    pub fn on_loop<F>(mut self, on_loop: F) -> Self
    where
        F: FnMut() + 'static,
    {
        self.on_loop = Some(Action::new(on_loop));
        self
    }

    pub fn on_exit<F>(mut self, exit: F) -> Self
    where
        F: FnMut() + 'static,
    {
        self.exit = Some(Action::new(exit));
        self
    }

    pub fn has_enter(&self) -> bool {
        self.enter.is_some()
    }

    pub fn has_loop(&self) -> bool {
        self.on_loop.is_some()
    }

    pub fn has_exit(&self) -> bool {
        self.exit.is_some()
    }

    pub(crate) fn set_enter(&mut self, enter: Action) {
        self.enter = Some(enter);
    }

    pub(crate) fn set_loop(&mut self, on_loop: Action) {
        self.on_loop = Some(on_loop);
    }

    pub(crate) fn set_exit(&mut self, exit: Action) {
        self.exit = Some(exit);
    }

    pub(crate) fn run_enter(&mut self) {
        if let Some(enter) = self.enter.as_mut() {
            enter.invoke();
        }
    }

    pub(crate) fn run_loop(&mut self) {
        if let Some(on_loop) = self.on_loop.as_mut() {
            on_loop.invoke();
        }
    }

    pub(crate) fn run_exit(&mut self) {
        if let Some(exit) = self.exit.as_mut() {
            exit.invoke();
        }
    }
}

impl fmt::Debug for StateCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateCallbacks")
            .field("enter", &self.has_enter())
            .field("loop", &self.has_loop())
            .field("exit", &self.has_exit())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Box<dyn FnMut()>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let make = move |label: &'static str| -> Box<dyn FnMut()> {
            let sink = Rc::clone(&sink);
            Box::new(move || sink.borrow_mut().push(label))
        };
        (log, make)
    }

    #[test]
    fn empty_callbacks_are_no_ops() {
        let mut callbacks = StateCallbacks::new();
        callbacks.run_enter();
        callbacks.run_loop();
        callbacks.run_exit();
        assert!(!callbacks.has_enter());
        assert!(!callbacks.has_loop());
        assert!(!callbacks.has_exit());
    }

    #[test]
    fn each_phase_runs_its_own_callback() {
        let (log, make) = recorder();
        let mut callbacks = StateCallbacks::new()
            .on_enter(make("enter"))
            .on_loop(make("loop"))
            .on_exit(make("exit"));

        callbacks.run_loop();
        callbacks.run_exit();
        callbacks.run_enter();

        assert_eq!(*log.borrow(), vec!["loop", "exit", "enter"]);
    }

    #[test]
    fn setting_a_phase_twice_keeps_the_last() {
        let (log, make) = recorder();
        let mut callbacks = StateCallbacks::new();
        callbacks.set_loop(Action::new(make("first")));
        callbacks.set_loop(Action::new(make("second")));

        callbacks.run_loop();

        assert_eq!(*log.borrow(), vec!["second"]);
    }

    #[test]
    fn debug_reports_slot_presence() {
        let callbacks = StateCallbacks::new().on_exit(|| {});
        let rendered = format!("{callbacks:?}");
        assert!(rendered.contains("exit: true"));
        assert!(rendered.contains("enter: false"));
    }
}
