//! Switchyard: a small generic finite state machine engine
//!
//! Machines are declared through a fluent builder: states, guarded
//! event-triggered transitions between them, and hooks fired when states are
//! entered or left. Building compiles the declarations into an immutable
//! transition table per state; the resulting machine dispatches events
//! against it.
//!
//! # Core Concepts
//!
//! - **State and event identities**: any `Clone + Eq + Hash + Debug` value
//! - **Context**: one shared value per machine, read by guards and mutated by hooks
//! - **Guards**: predicates over the context that enable a transition
//! - **Hooks**: entry, exit and transition callbacks, run in declaration order
//! - **Dispatch**: the first transition whose guard passes wins; unmatched
//!   events leave the machine where it is
//!
//! # Example
//!
//! ```rust
//! use switchyard::StateMachine;
//!
//! #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
//! enum Phase {
//!     Idle,
//!     Running,
//!     Done,
//! }
//!
//! #[derive(Clone, Default)]
//! struct Job {
//!     ready: bool,
//!     visits: u32,
//! }
//!
//! let mut machine = StateMachine::create_with("job", Job::default())
//!     .initial(Phase::Idle)
//!     .state(Phase::Running)
//!     .on_entry(|_, job: &mut Job| {
//!         job.visits += 1;
//!         Ok(())
//!     })
//!     .from(Phase::Idle)
//!     .on_event("start")
//!     .when(|job: &Job| job.ready)
//!     .go_to(Phase::Running)
//!     .and()
//!     .from(Phase::Running)
//!     .on_event("finish")
//!     .go_to(Phase::Done)
//!     .build()
//!     .unwrap();
//!
//! machine.trigger("start").unwrap();
//! assert_eq!(machine.current(), &Phase::Idle);
//!
//! machine.context_mut().ready = true;
//! machine.trigger("start").unwrap();
//! assert_eq!(machine.current(), &Phase::Running);
//! assert_eq!(machine.context().visits, 1);
//! ```

pub mod builder;
pub mod core;
pub mod runtime;

// Re-export commonly used types
pub use crate::builder::{BuildError, DefinitionViolation, MachineBuilder, StateBuilder, TransitionBuilder};
pub use crate::core::{
    EventId, Firing, Guard, Hook, HookError, HookFailure, HookPhase, StateHistory, StateId,
    DEFAULT_HISTORY_LIMIT,
};
pub use crate::runtime::{DispatchError, StateMachine};
