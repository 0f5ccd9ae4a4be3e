//! State declarations and the scoped state builder.

use crate::builder::error::BuildError;
use crate::builder::machine::MachineBuilder;
use crate::builder::transition::{TransitionBuilder, TransitionSpec};
use crate::builder::validation::{all, Compiled};
use crate::core::{EventId, Firing, Hook, HookError, StateId};
use crate::runtime::{State, StateMachine, Transition};
use std::collections::HashMap;

/// A state as declared, before compilation.
///
/// Hooks and transition declarations are only ever appended. Compiling reads
/// the declaration without consuming it, so the same declaration can be
/// compiled for any number of machines without duplicating transitions.
pub(crate) struct StateSpec<T, U, V> {
    id: T,
    entry: Vec<Hook<T, U, V>>,
    exit: Vec<Hook<T, U, V>>,
    pending: Vec<TransitionSpec<T, U, V>>,
}

impl<T: StateId, U: 'static, V: EventId> StateSpec<T, U, V> {
    pub(crate) fn new(id: T) -> Self {
        Self {
            id,
            entry: Vec::new(),
            exit: Vec::new(),
            pending: Vec::new(),
        }
    }

    pub(crate) fn id(&self) -> &T {
        &self.id
    }

    pub(crate) fn add_entry_hook(&mut self, hook: Hook<T, U, V>) {
        self.entry.push(hook);
    }

    pub(crate) fn add_exit_hook(&mut self, hook: Hook<T, U, V>) {
        self.exit.push(hook);
    }

    pub(crate) fn push_transition(&mut self, spec: TransitionSpec<T, U, V>) {
        self.pending.push(spec);
    }

    pub(crate) fn pending(&self) -> &[TransitionSpec<T, U, V>] {
        &self.pending
    }

    /// Build the frozen state: hooks plus the event-keyed transition table.
    ///
    /// Every incomplete transition declaration is reported, not just the
    /// first.
    pub(crate) fn compile(&self) -> Compiled<State<T, U, V>> {
        all(self.pending.iter().map(|spec| spec.compile(&self.id))).map(|transitions| {
            let mut table: HashMap<V, Vec<Transition<T, U, V>>> = HashMap::new();
            for transition in transitions {
                table
                    .entry(transition.event().clone())
                    .or_default()
                    .push(transition);
            }

            State::new(
                self.id.clone(),
                self.entry.clone(),
                self.exit.clone(),
                table,
            )
        })
    }
}

/// Fluent builder scoped to one declared state.
///
/// Obtained from [`MachineBuilder::state`] or [`MachineBuilder::initial`].
/// Hooks added here attach to that state only.
pub struct StateBuilder<T, U, V> {
    parent: MachineBuilder<T, U, V>,
    id: T,
}

impl<T: StateId, U: 'static, V: EventId> StateBuilder<T, U, V> {
    pub(crate) fn new(parent: MachineBuilder<T, U, V>, id: T) -> Self {
        Self { parent, id }
    }

    /// State this builder is scoped to.
    pub fn id(&self) -> &T {
        &self.id
    }

    /// Append an entry hook. Earlier hooks are kept and run first.
    pub fn on_entry<F>(mut self, hook: F) -> Self
    where
        F: Fn(&Firing<'_, T, V>, &mut U) -> Result<(), HookError> + 'static,
    {
        self.parent
            .declare(self.id.clone())
            .add_entry_hook(Hook::new(hook));
        self
    }

    /// Append an exit hook. Earlier hooks are kept and run first.
    pub fn on_exit<F>(mut self, hook: F) -> Self
    where
        F: Fn(&Firing<'_, T, V>, &mut U) -> Result<(), HookError> + 'static,
    {
        self.parent
            .declare(self.id.clone())
            .add_exit_hook(Hook::new(hook));
        self
    }

    /// Return to the machine builder.
    pub fn then(self) -> MachineBuilder<T, U, V> {
        self.parent
    }

    /// Same as [`then`](Self::then).
    pub fn and(self) -> MachineBuilder<T, U, V> {
        self.parent
    }

    /// Shortcut for `.then().state(id)`.
    pub fn state(self, id: T) -> StateBuilder<T, U, V> {
        self.parent.state(id)
    }

    /// Shortcut for `.then().from(id)`.
    pub fn from(self, id: T) -> TransitionBuilder<T, U, V> {
        self.parent.from(id)
    }

    /// Shortcut for `.then().build()`.
    pub fn build(self) -> Result<StateMachine<T, U, V>, BuildError>
    where
        U: Clone,
    {
        self.parent.build()
    }
}
