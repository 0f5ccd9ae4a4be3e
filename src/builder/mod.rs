//! Builder API for declaring state machines.
//!
//! Declaration is split from execution: builders accumulate state and
//! transition declarations, and `build()` validates and compiles them into
//! an immutable transition table per state.
//!
//! Each declaration call returns a builder scoped to what it declares:
//! - [`MachineBuilder`]: the whole machine
//! - [`StateBuilder`]: one state, for entry and exit hooks
//! - [`TransitionBuilder`]: one transition leaving a fixed source state

pub mod error;
pub mod machine;
pub mod macros;
pub mod state;
pub mod transition;
mod validation;

pub use error::{BuildError, DefinitionViolation};
pub use machine::MachineBuilder;
pub use state::StateBuilder;
pub use transition::TransitionBuilder;
