//! State machine runtime.

use crate::builder::MachineBuilder;
use crate::core::{describe, EventId, StateHistory, StateId, StateTransition};
use crate::runtime::error::DispatchError;
use crate::runtime::state::State;
use crate::runtime::transition::Applied;
use chrono::Utc;
use std::collections::HashMap;
use tracing::{debug, warn};

/// A running state machine.
///
/// Holds the shared context, the current state and the compiled transition
/// tables. The current state only changes through [`trigger`](Self::trigger).
///
/// # Example
///
/// ```rust
/// use switchyard::StateMachine;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum Door { Open, Closed }
///
/// let mut door = StateMachine::create("door")
///     .initial(Door::Closed)
///     .from(Door::Closed).on_event("push").go_to(Door::Open)
///     .then()
///     .from(Door::Open).on_event("pull").go_to(Door::Closed)
///     .build()
///     .unwrap();
///
/// assert_eq!(door.current(), &Door::Closed);
/// assert_eq!(door.trigger("push").unwrap().current(), &Door::Open);
/// assert_eq!(door.trigger("push").unwrap().current(), &Door::Open);
/// ```
pub struct StateMachine<T, U, V> {
    name: String,
    context: U,
    current: T,
    states: HashMap<T, State<T, U, V>>,
    history: StateHistory<T, V>,
}

impl<T: StateId, V: EventId> StateMachine<T, (), V> {
    /// Start declaring a machine without a context.
    pub fn create(name: impl Into<String>) -> MachineBuilder<T, (), V> {
        MachineBuilder::new(name, ())
    }
}

impl<T: StateId, U: 'static, V: EventId> StateMachine<T, U, V> {
    /// Start declaring a machine whose guards and hooks share `context`.
    pub fn create_with(name: impl Into<String>, context: U) -> MachineBuilder<T, U, V> {
        MachineBuilder::new(name, context)
    }

    pub(crate) fn from_parts(
        name: String,
        context: U,
        initial: T,
        states: HashMap<T, State<T, U, V>>,
        history_limit: usize,
    ) -> Self {
        Self {
            name,
            context,
            current: initial,
            states,
            history: StateHistory::with_limit(history_limit),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Identity of the active state.
    pub fn current(&self) -> &T {
        &self.current
    }

    pub fn is_in(&self, state: &T) -> bool {
        self.current == *state
    }

    pub fn context(&self) -> &U {
        &self.context
    }

    /// Mutable access to the shared context between dispatches.
    pub fn context_mut(&mut self) -> &mut U {
        &mut self.context
    }

    /// Most recent moves, oldest first, up to the builder's history limit.
    pub fn history(&self) -> &StateHistory<T, V> {
        &self.history
    }

    /// Forget every recorded move. The current state is unaffected.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Compiled state for `id`, if it was declared.
    pub fn state(&self, id: &T) -> Option<&State<T, U, V>> {
        self.states.get(id)
    }

    /// Whether dispatching `event` now would move the machine.
    pub fn can_trigger(&self, event: &V) -> bool {
        self.states.get(&self.current).is_some_and(|state| {
            state
                .transitions_for(event)
                .iter()
                .any(|t| t.is_enabled(&self.context))
        })
    }

    /// Dispatch `event` against the current state.
    ///
    /// Transitions registered for the event are tried in declaration order;
    /// the first whose guard passes is applied and the rest are ignored. When
    /// none passes, or none is registered, the machine stays where it is and
    /// `Ok` is returned.
    ///
    /// Hook failures do not cancel the move. The machine commits the target
    /// state and reports every failure through [`DispatchError::HookFailed`].
    pub fn trigger(&mut self, event: V) -> Result<&mut Self, DispatchError> {
        let applied = self.states.get(&self.current).and_then(|state| {
            state
                .transitions_for(&event)
                .iter()
                .find_map(|t| match t.apply(&self.states, &mut self.context) {
                    Applied::Held => None,
                    moved => Some(moved),
                })
        });

        let Some(Applied::Moved { to, failures }) = applied else {
            debug!(
                machine = %self.name,
                state = ?self.current,
                event = ?event,
                "No enabled transition, state unchanged"
            );
            return Ok(self);
        };

        let from = std::mem::replace(&mut self.current, to.clone());
        let record = StateTransition {
            from: from.clone(),
            to: to.clone(),
            event: event.clone(),
            timestamp: Utc::now(),
        };
        self.history = std::mem::take(&mut self.history).record(record);

        if failures.is_empty() {
            debug!(
                machine = %self.name,
                from = ?from,
                to = ?to,
                event = ?event,
                "State transition"
            );
            return Ok(self);
        }

        warn!(
            machine = %self.name,
            from = ?from,
            to = ?to,
            event = ?event,
            failed_hooks = failures.len(),
            "State transition completed with hook failures"
        );
        Err(DispatchError::HookFailed {
            machine: self.name.clone(),
            from: describe(&from),
            to: describe(&to),
            event: describe(&event),
            failures,
        })
    }
}
