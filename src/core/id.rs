//! Identity traits for states and events.
//!
//! States and events are named by application values. The engine only needs
//! to compare, hash, clone and print them, so any type with those capabilities
//! qualifies automatically.

use std::fmt::Debug;
use std::hash::Hash;

/// Value identifying a state in the graph.
///
/// Two states with equal identities are the same state: the builder registry
/// is keyed by value equality, never by reference.
///
/// Blanket-implemented for every owned `Clone + Eq + Hash + Debug` type, so enums,
/// integers and strings all work out of the box.
///
/// # Example
///
/// ```rust
/// use switchyard::core::StateId;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// fn assert_state_id<T: StateId>(_: &T) {}
///
/// assert_state_id(&Door::Open);
/// assert_state_id(&"closed");
/// assert_state_id(&42u32);
/// ```
pub trait StateId: Clone + Eq + Hash + Debug + 'static {}

impl<T> StateId for T where T: Clone + Eq + Hash + Debug + 'static {}

/// Value tagging transitions and dispatch calls.
///
/// Blanket-implemented like [`StateId`].
pub trait EventId: Clone + Eq + Hash + Debug + 'static {}

impl<V> EventId for V where V: Clone + Eq + Hash + Debug + 'static {}

/// Render an identity for logs and error messages.
pub(crate) fn describe<I: Debug>(id: &I) -> String {
    format!("{:?}", id)
}
