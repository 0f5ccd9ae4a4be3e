//! Entry, exit and transition hooks.
//!
//! Hooks are user callbacks fired while a transition is applied. They receive
//! the details of the move being made and mutable access to the shared
//! context. A hook reports failure by returning an error; the engine collects
//! it and keeps running the remaining hooks.

use std::fmt;
use std::rc::Rc;
use thiserror::Error;

/// Error type returned by a failing hook.
pub type HookError = Box<dyn std::error::Error + Send + Sync>;

type HookFn<T, U, V> = Rc<dyn Fn(&Firing<'_, T, V>, &mut U) -> Result<(), HookError>>;

/// Details of the transition currently being applied.
#[derive(Debug, PartialEq, Eq)]
pub struct Firing<'a, T, V> {
    /// State being left
    pub from: &'a T,
    /// State being entered
    pub to: &'a T,
    /// Event that triggered the move
    pub event: &'a V,
}

impl<T: PartialEq, V> Firing<'_, T, V> {
    /// True when the transition leaves and re-enters the same state.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

/// Callback fired on entry, exit, or along a transition.
///
/// # Example
///
/// ```rust
/// use switchyard::core::{Firing, Hook};
///
/// let count_visits: Hook<&str, u32, char> = Hook::new(|_firing, visits: &mut u32| {
///     *visits += 1;
///     Ok(())
/// });
///
/// let mut visits = 0;
/// let firing = Firing { from: &"idle", to: &"busy", event: &'x' };
/// count_visits.call(&firing, &mut visits).unwrap();
/// assert_eq!(visits, 1);
/// ```
pub struct Hook<T, U, V> {
    callback: HookFn<T, U, V>,
}

impl<T, U, V> Hook<T, U, V> {
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&Firing<'_, T, V>, &mut U) -> Result<(), HookError> + 'static,
    {
        Hook {
            callback: Rc::new(callback),
        }
    }

    pub fn call(&self, firing: &Firing<'_, T, V>, context: &mut U) -> Result<(), HookError> {
        (self.callback)(firing, context)
    }
}

impl<T, U, V> Clone for Hook<T, U, V> {
    fn clone(&self) -> Self {
        Hook {
            callback: Rc::clone(&self.callback),
        }
    }
}

impl<T, U, V> fmt::Debug for Hook<T, U, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hook").finish_non_exhaustive()
    }
}

/// Point in a transition at which a hook ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookPhase {
    /// Exit hook of the source state
    Exit,
    /// Hook attached to the transition itself
    Transition,
    /// Entry hook of the target state
    Entry,
}

impl fmt::Display for HookPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exit => f.write_str("exit"),
            Self::Transition => f.write_str("transition"),
            Self::Entry => f.write_str("entry"),
        }
    }
}

/// A hook that returned an error, with the state it was attached to.
#[derive(Debug, Error)]
#[error("{phase} hook on state {state} failed: {source}")]
pub struct HookFailure {
    pub phase: HookPhase,
    pub state: String,
    pub source: HookError,
}

/// Run hooks in order, collecting failures instead of stopping at the first.
pub(crate) fn run_all<T, U, V>(
    hooks: &[Hook<T, U, V>],
    phase: HookPhase,
    state: &str,
    firing: &Firing<'_, T, V>,
    context: &mut U,
) -> Vec<HookFailure> {
    hooks
        .iter()
        .filter_map(|hook| hook.call(firing, context).err())
        .map(|source| HookFailure {
            phase,
            state: state.to_string(),
            source,
        })
        .collect()
}
