//! Core building blocks shared by the builder and the runtime.
//!
//! - Identity traits for states and events
//! - Guard predicates over the shared context
//! - Entry, exit and transition hooks
//! - Transition history

mod guard;
mod history;
mod hook;
mod id;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition, DEFAULT_HISTORY_LIMIT};
pub use hook::{Firing, Hook, HookError, HookFailure, HookPhase};
pub use id::{EventId, StateId};

pub(crate) use hook::run_all;
pub(crate) use id::describe;
