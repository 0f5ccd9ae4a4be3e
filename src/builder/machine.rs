//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::builder::state::{StateBuilder, StateSpec};
use crate::builder::transition::TransitionBuilder;
use crate::builder::validation::{all, into_violations};
use crate::core::{EventId, StateId, DEFAULT_HISTORY_LIMIT};
use crate::runtime::StateMachine;
use std::collections::HashMap;
use tracing::debug;

/// Builder for declaring a machine's states and transitions.
///
/// Declarations accumulate here; [`build`](Self::build) validates them,
/// compiles every state and returns an independent machine. The builder is
/// left untouched, so building again yields another identical machine.
///
/// # Example
///
/// ```rust
/// use switchyard::StateMachine;
///
/// let builder = StateMachine::create_with("turnstile", 0u32)
///     .initial("locked")
///     .from("locked").on_event("coin").go_to("unlocked")
///     .on_transition(|_, coins: &mut u32| {
///         *coins += 1;
///         Ok(())
///     })
///     .then()
///     .from("unlocked").on_event("push").go_to("locked")
///     .then();
///
/// let mut turnstile = builder.build().unwrap();
/// turnstile.trigger("coin").unwrap();
/// assert_eq!(turnstile.current(), &"unlocked");
/// assert_eq!(turnstile.context(), &1);
///
/// let fresh = builder.build().unwrap();
/// assert_eq!(fresh.current(), &"locked");
/// assert_eq!(fresh.context(), &0);
/// ```
pub struct MachineBuilder<T, U, V> {
    name: String,
    context: U,
    initial: Option<T>,
    states: HashMap<T, StateSpec<T, U, V>>,
    order: Vec<T>,
    history_limit: usize,
}

impl<T: StateId, U: 'static, V: EventId> MachineBuilder<T, U, V> {
    /// Create a new builder for a machine called `name`.
    pub fn new(name: impl Into<String>, context: U) -> Self {
        Self {
            name: name.into(),
            context,
            initial: None,
            states: HashMap::new(),
            order: Vec::new(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Context every built machine starts from.
    pub fn context(&self) -> &U {
        &self.context
    }

    pub fn initial_state(&self) -> Option<&T> {
        self.initial.as_ref()
    }

    pub fn is_declared(&self, id: &T) -> bool {
        self.states.contains_key(id)
    }

    /// Keep at most `limit` moves in each built machine's history, dropping
    /// the oldest first. Zero turns recording off.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Number of transition declarations across all states.
    pub fn transition_count(&self) -> usize {
        self.states.values().map(|s| s.pending().len()).sum()
    }

    /// Declare (or retrieve) `id` and mark it as the starting state.
    pub fn initial(mut self, id: T) -> StateBuilder<T, U, V> {
        self.declare(id.clone());
        self.initial = Some(id.clone());
        StateBuilder::new(self, id)
    }

    /// Declare (or retrieve) `id` to attach hooks to it.
    pub fn state(mut self, id: T) -> StateBuilder<T, U, V> {
        self.declare(id.clone());
        StateBuilder::new(self, id)
    }

    /// Start declaring a transition leaving `id`.
    pub fn from(mut self, id: T) -> TransitionBuilder<T, U, V> {
        self.declare(id.clone());
        TransitionBuilder::new(self, id)
    }

    /// Registry lookup: the first reference to an id registers it, later
    /// references return the same declaration.
    pub(crate) fn declare(&mut self, id: T) -> &mut StateSpec<T, U, V> {
        let order = &mut self.order;
        self.states.entry(id).or_insert_with_key(|id| {
            order.push(id.clone());
            StateSpec::new(id.clone())
        })
    }

    /// Validate and compile every declared state, then start a machine at
    /// the initial state with a clone of the builder's context.
    pub fn build(&self) -> Result<StateMachine<T, U, V>, BuildError>
    where
        U: Clone,
    {
        let initial = self
            .initial
            .clone()
            .ok_or_else(|| BuildError::MissingInitialState {
                machine: self.name.clone(),
            })?;

        let compiled = all(self.declared().map(|spec| {
            spec.compile().map(|state| (spec.id().clone(), state))
        }));
        let states: HashMap<_, _> = into_violations(compiled)
            .map_err(|violations| BuildError::InvalidDefinition {
                machine: self.name.clone(),
                violations,
            })?
            .into_iter()
            .collect();

        debug!(
            machine = %self.name,
            initial = ?initial,
            states = states.len(),
            transitions = self.transition_count(),
            history_limit = self.history_limit,
            "Compiled state machine"
        );

        Ok(StateMachine::from_parts(
            self.name.clone(),
            self.context.clone(),
            initial,
            states,
            self.history_limit,
        ))
    }

    /// Declarations in the order states were first referenced.
    fn declared(&self) -> impl Iterator<Item = &StateSpec<T, U, V>> + '_ {
        self.order.iter().filter_map(|id| self.states.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::error::DefinitionViolation;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum Phase {
        Draft,
        Review,
        Published,
    }

    #[test]
    fn builder_requires_initial_state() {
        let result = MachineBuilder::<Phase, (), &str>::new("doc", ())
            .from(Phase::Draft)
            .on_event("submit")
            .go_to(Phase::Review)
            .build();

        assert!(matches!(
            result,
            Err(BuildError::MissingInitialState { ref machine }) if machine == "doc"
        ));
    }

    #[test]
    fn builder_accumulates_all_violations() {
        let result = MachineBuilder::<Phase, (), &str>::new("doc", ())
            .initial(Phase::Draft)
            .from(Phase::Draft)
            .go_to(Phase::Review)
            .then()
            .from(Phase::Review)
            .on_event("publish")
            .then()
            .build();

        let err = result.err().expect("definition should be rejected");
        assert_eq!(
            err.to_string(),
            "Machine 'doc' has 2 invalid transition declaration(s): \
             transition from Draft has no event. Call .on_event(event); \
             transition from Review has no target state. Call .go_to(state)"
        );
        match err {
            BuildError::InvalidDefinition { violations, .. } => {
                assert_eq!(
                    violations,
                    vec![
                        DefinitionViolation::MissingEvent {
                            from: "Draft".to_string()
                        },
                        DefinitionViolation::MissingTarget {
                            from: "Review".to_string()
                        },
                    ]
                );
            }
            other => panic!("Expected InvalidDefinition, got {:?}", other),
        }
    }

    #[test]
    fn machine_without_transitions_builds() {
        let machine = MachineBuilder::<Phase, (), &str>::new("idle", ())
            .initial(Phase::Draft)
            .build()
            .unwrap();

        assert_eq!(machine.current(), &Phase::Draft);
    }

    #[test]
    fn redeclaring_a_state_reuses_it() {
        let builder = MachineBuilder::<Phase, (), &str>::new("doc", ())
            .state(Phase::Draft)
            .then()
            .state(Phase::Draft)
            .then()
            .from(Phase::Draft)
            .on_event("submit")
            .go_to(Phase::Review)
            .then();

        assert_eq!(builder.order, vec![Phase::Draft, Phase::Review]);
        assert_eq!(builder.states.len(), 2);
        assert!(!builder.is_declared(&Phase::Published));
    }

    #[test]
    fn build_twice_yields_independent_machines() {
        let builder = MachineBuilder::<Phase, u32, &str>::new("doc", 0)
            .initial(Phase::Draft)
            .from(Phase::Draft)
            .on_event("submit")
            .go_to(Phase::Review)
            .on_transition(|_, n: &mut u32| {
                *n += 1;
                Ok(())
            })
            .then();

        let mut first = builder.build().unwrap();
        first.trigger("submit").unwrap();
        let second = builder.build().unwrap();

        assert_eq!(first.current(), &Phase::Review);
        assert_eq!(first.context(), &1);
        assert_eq!(second.current(), &Phase::Draft);
        assert_eq!(second.context(), &0);
        assert_eq!(
            second
                .state(&Phase::Draft)
                .unwrap()
                .transitions_for(&"submit")
                .len(),
            1
        );
    }

    fn toggle(limit: Option<usize>) -> StateMachine<Phase, (), &'static str> {
        let builder = MachineBuilder::new("toggle", ())
            .initial(Phase::Draft)
            .from(Phase::Draft)
            .on_event("flip")
            .go_to(Phase::Review)
            .then()
            .from(Phase::Review)
            .on_event("flip")
            .go_to(Phase::Draft)
            .then();
        match limit {
            Some(limit) => builder.history_limit(limit).build().unwrap(),
            None => builder.build().unwrap(),
        }
    }

    #[test]
    fn history_is_capped_by_default() {
        let mut machine = toggle(None);

        for _ in 0..DEFAULT_HISTORY_LIMIT + 10 {
            machine.trigger("flip").unwrap();
        }

        assert_eq!(machine.history().len(), DEFAULT_HISTORY_LIMIT);
        assert_eq!(machine.history().limit(), Some(DEFAULT_HISTORY_LIMIT));
    }

    #[test]
    fn history_limit_keeps_latest_moves() {
        let mut machine = toggle(Some(3));

        for _ in 0..11 {
            machine.trigger("flip").unwrap();
        }

        assert_eq!(machine.current(), &Phase::Review);
        assert_eq!(machine.history().len(), 3);
        assert_eq!(
            machine.history().last().map(|t| (t.from, t.to)),
            Some((Phase::Draft, Phase::Review))
        );
    }

    #[test]
    fn zero_history_limit_disables_recording() {
        let mut machine = toggle(Some(0));

        machine.trigger("flip").unwrap();

        assert_eq!(machine.current(), &Phase::Review);
        assert!(machine.history().is_empty());
    }

    #[test]
    fn initial_is_recorded() {
        let builder = MachineBuilder::<Phase, (), &str>::new("doc", ())
            .initial(Phase::Review)
            .then();

        assert_eq!(builder.initial_state(), Some(&Phase::Review));
        assert_eq!(builder.name(), "doc");
        assert_eq!(builder.context(), &());
    }
}
