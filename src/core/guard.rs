//! Guard predicates that decide whether a transition fires.
//!
//! A guard is always present on a transition. An unconditional edge is a
//! guard that returns `true`.

use std::fmt;

/// Boolean predicate evaluated once per tick for each candidate transition.
///
/// Guards take no arguments; they observe whatever host state their closure
/// captured. They may be stateful (`FnMut`), but must not block.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use tinystate::core::Guard;
///
/// let counter = Rc::new(Cell::new(0));
/// let watched = Rc::clone(&counter);
/// let mut reached_ten = Guard::new(move || watched.get() >= 10);
///
/// assert!(!reached_ten.check());
/// counter.set(10);
/// assert!(reached_ten.check());
/// ```
pub struct Guard {
    predicate: Box<dyn FnMut() -> bool>,
}

impl Guard {
    pub fn new<F>(predicate: F) -> Self
    where
        F: FnMut() -> bool + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// A guard that always passes.
    pub fn always() -> Self {
        Guard::new(|| true)
    }

    /// Evaluate the predicate.
    pub fn check(&mut self) -> bool {
        (self.predicate)()
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard(..)")
    }
}
