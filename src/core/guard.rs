//! Guard predicates for controlling transitions.
//!
//! A guard is a predicate over the machine's shared context. It is evaluated
//! when an event is dispatched and decides whether the transition it belongs
//! to may fire. Guards never see the event: the event only selects which
//! transitions are candidates.

use std::fmt;
use std::rc::Rc;

/// Predicate over the shared context that enables a transition.
///
/// Guards are cheap to clone; clones share the same predicate. They are
/// not `Send`, so a context may hold `Rc` handles. A transition
/// declared without a guard uses [`Guard::always`].
///
/// # Example
///
/// ```rust
/// use switchyard::core::Guard;
///
/// struct Door {
///     locked: bool,
/// }
///
/// let unlocked = Guard::new(|door: &Door| !door.locked);
///
/// assert!(unlocked.check(&Door { locked: false }));
/// assert!(!unlocked.check(&Door { locked: true }));
/// ```
pub struct Guard<U> {
    predicate: Rc<dyn Fn(&U) -> bool>,
}

impl<U: 'static> Guard<U> {
    /// Create a guard from a predicate over the context.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&U) -> bool + 'static,
    {
        Guard {
            predicate: Rc::new(predicate),
        }
    }

    /// Guard that always passes.
    ///
    /// ```rust
    /// use switchyard::core::Guard;
    ///
    /// assert!(Guard::<()>::always().check(&()));
    /// ```
    pub fn always() -> Self {
        Guard::new(|_| true)
    }

    /// Guard that never passes.
    pub fn never() -> Self {
        Guard::new(|_| false)
    }

    /// Guard passing only when both guards pass. `other` is not evaluated
    /// when `self` fails.
    pub fn and(self, other: Guard<U>) -> Self {
        Guard::new(move |ctx| self.check(ctx) && other.check(ctx))
    }

    /// Guard passing when `self` fails.
    pub fn negate(self) -> Self {
        Guard::new(move |ctx| !self.check(ctx))
    }
}

impl<U> Guard<U> {
    /// Evaluate the predicate against the context.
    pub fn check(&self, context: &U) -> bool {
        (self.predicate)(context)
    }
}

impl<U: 'static> Default for Guard<U> {
    fn default() -> Self {
        Guard::always()
    }
}

impl<U> Clone for Guard<U> {
    fn clone(&self) -> Self {
        Guard {
            predicate: Rc::clone(&self.predicate),
        }
    }
}

impl<U> fmt::Debug for Guard<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Counter {
        value: i32,
    }

    #[test]
    fn guard_reads_context() {
        let positive = Guard::new(|c: &Counter| c.value > 0);

        assert!(positive.check(&Counter { value: 1 }));
        assert!(!positive.check(&Counter { value: 0 }));
    }

    #[test]
    fn default_guard_always_passes() {
        let guard: Guard<Counter> = Guard::default();

        assert!(guard.check(&Counter { value: -5 }));
        assert!(guard.check(&Counter { value: 5 }));
    }

    #[test]
    fn never_guard_blocks() {
        assert!(!Guard::<()>::never().check(&()));
    }

    #[test]
    fn clones_share_predicate() {
        let calls = Rc::new(Cell::new(0));
        let seen = Rc::clone(&calls);
        let guard = Guard::new(move |_: &()| {
            seen.set(seen.get() + 1);
            true
        });
        let cloned = guard.clone();

        guard.check(&());
        cloned.check(&());

        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn guard_sees_shared_handle_updates() {
        let flag = Rc::new(Cell::new(false));
        let guard = Guard::new(|f: &Rc<Cell<bool>>| f.get());

        assert!(!guard.check(&flag));
        flag.set(true);
        assert!(guard.check(&flag));
    }

    #[test]
    fn combinators_compose() {
        let small = Guard::new(|c: &Counter| c.value < 10);
        let positive = Guard::new(|c: &Counter| c.value > 0);
        let in_range = small.and(positive);

        assert!(in_range.check(&Counter { value: 5 }));
        assert!(!in_range.check(&Counter { value: 0 }));
        assert!(!in_range.check(&Counter { value: 10 }));

        let out_of_range = in_range.negate();
        assert!(out_of_range.check(&Counter { value: 12 }));
    }
}
