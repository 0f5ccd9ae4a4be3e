//! Builder for transition declarations.

use crate::builder::error::{BuildError, DefinitionViolation};
use crate::builder::machine::MachineBuilder;
use crate::builder::validation::{required, Compiled};
use crate::core::{describe, EventId, Firing, Guard, Hook, HookError, StateId};
use crate::runtime::{StateMachine, Transition};

/// A transition as declared, before compilation.
///
/// Any part may still be missing; `build()` reports incomplete declarations.
pub(crate) struct TransitionSpec<T, U, V> {
    pub(crate) event: Option<V>,
    pub(crate) guard: Option<Guard<U>>,
    pub(crate) target: Option<T>,
    pub(crate) hooks: Vec<Hook<T, U, V>>,
}

impl<T, U, V> Default for TransitionSpec<T, U, V> {
    fn default() -> Self {
        Self {
            event: None,
            guard: None,
            target: None,
            hooks: Vec::new(),
        }
    }
}

impl<T: StateId, U: 'static, V: EventId> TransitionSpec<T, U, V> {
    /// Produce the immutable transition leaving `source`.
    ///
    /// A missing guard becomes [`Guard::always`]. A missing event and a
    /// missing target are both reported.
    pub(crate) fn compile(&self, source: &T) -> Compiled<Transition<T, U, V>> {
        let event = required(self.event.clone(), || DefinitionViolation::MissingEvent {
            from: describe(source),
        });
        let target = required(self.target.clone(), || DefinitionViolation::MissingTarget {
            from: describe(source),
        });

        event.and(target).map(|(event, target)| {
            Transition::new(
                source.clone(),
                event,
                self.guard.clone().unwrap_or_default(),
                target,
                self.hooks.clone(),
            )
        })
    }
}

/// Fluent builder for one transition leaving a fixed source state.
///
/// Obtained from [`MachineBuilder::from`]. The declaration is committed to
/// the source state by [`then`](Self::then) or [`and`](Self::and).
pub struct TransitionBuilder<T, U, V> {
    parent: MachineBuilder<T, U, V>,
    source: T,
    spec: TransitionSpec<T, U, V>,
}

impl<T: StateId, U: 'static, V: EventId> TransitionBuilder<T, U, V> {
    pub(crate) fn new(parent: MachineBuilder<T, U, V>, source: T) -> Self {
        Self {
            parent,
            source,
            spec: TransitionSpec::default(),
        }
    }

    /// State this transition leaves.
    pub fn source(&self) -> &T {
        &self.source
    }

    /// Set the event that triggers this transition (required).
    pub fn on_event(mut self, event: V) -> Self {
        self.spec.event = Some(event);
        self
    }

    /// Set the enabling predicate over the context (optional).
    ///
    /// The transition fires only while the predicate returns `true`. Without
    /// one the transition always fires. Calling it again replaces the
    /// previous predicate.
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&U) -> bool + 'static,
    {
        self.spec.guard = Some(Guard::new(predicate));
        self
    }

    /// Set the enabling guard (optional).
    pub fn guard(mut self, guard: Guard<U>) -> Self {
        self.spec.guard = Some(guard);
        self
    }

    /// Set the target state (required), declaring it if needed.
    pub fn go_to(mut self, target: T) -> Self {
        self.parent.declare(target.clone());
        self.spec.target = Some(target);
        self
    }

    /// Add a hook that runs while this transition is applied, after the
    /// source's exit hooks and before the target's entry hooks.
    pub fn on_transition<F>(mut self, hook: F) -> Self
    where
        F: Fn(&Firing<'_, T, V>, &mut U) -> Result<(), HookError> + 'static,
    {
        self.spec.hooks.push(Hook::new(hook));
        self
    }

    /// Commit this declaration and return to the machine builder.
    pub fn then(self) -> MachineBuilder<T, U, V> {
        let Self {
            mut parent,
            source,
            spec,
        } = self;
        parent.declare(source.clone()).push_transition(spec);
        parent
    }

    /// Same as [`then`](Self::then).
    pub fn and(self) -> MachineBuilder<T, U, V> {
        self.then()
    }

    /// Commit this declaration and build the machine.
    pub fn build(self) -> Result<StateMachine<T, U, V>, BuildError>
    where
        U: Clone,
    {
        self.then().build()
    }
}
