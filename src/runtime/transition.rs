//! Compiled transitions.

use crate::core::{describe, run_all, Firing, Guard, Hook, HookFailure, HookPhase};
use crate::runtime::state::State;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Outcome of applying a single transition.
#[derive(Debug)]
pub(crate) enum Applied<T> {
    /// Guard blocked the move; no hook ran.
    Held,
    /// Move applied; `failures` lists hooks that returned an error.
    Moved { to: T, failures: Vec<HookFailure> },
}

/// Guarded, event-tagged edge between two states.
///
/// Transitions are produced by compiling builder declarations and are
/// immutable afterwards. Each one belongs to exactly one source state's
/// table.
pub struct Transition<T, U, V> {
    source: T,
    event: V,
    guard: Guard<U>,
    target: T,
    hooks: Vec<Hook<T, U, V>>,
}

impl<T, U, V> Transition<T, U, V> {
    pub(crate) fn new(
        source: T,
        event: V,
        guard: Guard<U>,
        target: T,
        hooks: Vec<Hook<T, U, V>>,
    ) -> Self {
        Self {
            source,
            event,
            guard,
            target,
            hooks,
        }
    }

    pub fn source(&self) -> &T {
        &self.source
    }

    pub fn event(&self) -> &V {
        &self.event
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn guard(&self) -> &Guard<U> {
        &self.guard
    }

    /// Whether the guard currently lets this transition fire.
    pub fn is_enabled(&self, context: &U) -> bool {
        self.guard.check(context)
    }
}

impl<T: Clone + Eq + Hash + Debug, U, V: Eq + Hash> Transition<T, U, V> {
    /// Evaluate the guard and, if it passes, run the hooks of the move.
    ///
    /// Order: every exit hook of the source, then the transition's own
    /// hooks, then every entry hook of the target. The machine itself is not
    /// touched; the caller commits the returned target.
    pub(crate) fn apply(&self, states: &HashMap<T, State<T, U, V>>, context: &mut U) -> Applied<T> {
        if !self.guard.check(context) {
            return Applied::Held;
        }

        let firing = Firing {
            from: &self.source,
            to: &self.target,
            event: &self.event,
        };

        let mut failures = Vec::new();
        if let Some(source) = states.get(&self.source) {
            failures.extend(source.exit(&firing, context));
        }
        failures.extend(run_all(
            &self.hooks,
            HookPhase::Transition,
            &describe(&self.source),
            &firing,
            context,
        ));
        if let Some(target) = states.get(&self.target) {
            failures.extend(target.enter(&firing, context));
        }

        Applied::Moved {
            to: self.target.clone(),
            failures,
        }
    }
}
