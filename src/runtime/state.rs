//! Compiled states.

use crate::core::{describe, run_all, Firing, Hook, HookFailure, HookPhase};
use crate::runtime::transition::Transition;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// A state after compilation: its hooks and its transition table.
///
/// The table maps each event to the transitions leaving this state on that
/// event, in the order they were declared. It is frozen once compiled.
pub struct State<T, U, V> {
    id: T,
    entry: Vec<Hook<T, U, V>>,
    exit: Vec<Hook<T, U, V>>,
    transitions: HashMap<V, Vec<Transition<T, U, V>>>,
}

impl<T, U, V> State<T, U, V> {
    pub(crate) fn new(
        id: T,
        entry: Vec<Hook<T, U, V>>,
        exit: Vec<Hook<T, U, V>>,
        transitions: HashMap<V, Vec<Transition<T, U, V>>>,
    ) -> Self {
        Self {
            id,
            entry,
            exit,
            transitions,
        }
    }

    pub fn id(&self) -> &T {
        &self.id
    }

    /// Total number of outgoing transitions across all events.
    pub fn transition_count(&self) -> usize {
        self.transitions.values().map(Vec::len).sum()
    }
}

impl<T: Debug, U, V: Eq + Hash> State<T, U, V> {
    /// Transitions registered for `event`, in declaration order.
    ///
    /// Empty when nothing leaves this state on that event.
    pub fn transitions_for(&self, event: &V) -> &[Transition<T, U, V>] {
        self.transitions
            .get(event)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Run every entry hook in order. All hooks run even if some fail.
    pub(crate) fn enter(&self, firing: &Firing<'_, T, V>, context: &mut U) -> Vec<HookFailure> {
        run_all(&self.entry, HookPhase::Entry, &describe(&self.id), firing, context)
    }

    /// Run every exit hook in order. All hooks run even if some fail.
    pub(crate) fn exit(&self, firing: &Firing<'_, T, V>, context: &mut U) -> Vec<HookFailure> {
        run_all(&self.exit, HookPhase::Exit, &describe(&self.id), firing, context)
    }
}
