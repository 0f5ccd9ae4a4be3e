//! Transition history tracking.
//!
//! Every move a machine makes is recorded in order, together with the event
//! that caused it and when it happened. Dispatches that leave the machine
//! where it was are not recorded. A history may be capped, in which case the
//! oldest records are dropped first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Records kept by a machine unless its builder sets another limit.
pub const DEFAULT_HISTORY_LIMIT: usize = 1024;

/// Record of a single applied transition.
///
/// # Example
///
/// ```rust
/// use switchyard::core::StateTransition;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: "idle",
///     to: "running",
///     event: "start",
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.to, "running");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition<T, V> {
    /// The state being left
    pub from: T,
    /// The state being entered
    pub to: T,
    /// The event that triggered the move
    pub event: V,
    /// When the move was applied
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of applied transitions.
///
/// # Example
///
/// ```rust
/// use switchyard::core::{StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition { from: 'a', to: 'b', event: 1, timestamp: Utc::now() })
///     .record(StateTransition { from: 'b', to: 'c', event: 2, timestamp: Utc::now() });
///
/// assert_eq!(history.get_path(), vec![&'a', &'b', &'c']);
/// assert_eq!(history.events(), vec![&1, &2]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateHistory<T, V> {
    transitions: VecDeque<StateTransition<T, V>>,
    #[serde(default)]
    limit: Option<usize>,
}

impl<T, V> Default for StateHistory<T, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, V> StateHistory<T, V> {
    /// Create a new empty, unbounded history.
    pub fn new() -> Self {
        Self {
            transitions: VecDeque::new(),
            limit: None,
        }
    }

    /// Create an empty history keeping at most `limit` records.
    ///
    /// A limit of zero records nothing.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            transitions: VecDeque::with_capacity(limit.min(DEFAULT_HISTORY_LIMIT)),
            limit: Some(limit),
        }
    }

    /// Maximum number of records kept, if capped.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Append a transition, returning the extended history. When the cap is
    /// reached the oldest record is dropped.
    pub fn record(mut self, transition: StateTransition<T, V>) -> Self {
        self.transitions.push_back(transition);
        if let Some(limit) = self.limit {
            while self.transitions.len() > limit {
                self.transitions.pop_front();
            }
        }
        self
    }

    /// Drop every record, keeping the limit.
    pub fn clear(&mut self) {
        self.transitions.clear();
    }

    /// States traversed: the oldest kept source, then every target in order.
    pub fn get_path(&self) -> Vec<&T> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Events that caused each recorded move, in order.
    pub fn events(&self) -> Vec<&V> {
        self.transitions.iter().map(|t| &t.event).collect()
    }

    /// Time between the first and last recorded moves.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.front(), self.transitions.back()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    pub fn last(&self) -> Option<&StateTransition<T, V>> {
        self.transitions.back()
    }

    /// Kept records, oldest first.
    pub fn transitions(&self) -> impl DoubleEndedIterator<Item = &StateTransition<T, V>> + '_ {
        self.transitions.iter()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
