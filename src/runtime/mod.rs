//! Runtime side of a machine: compiled states and transitions, and dispatch.

mod error;
mod machine;
mod state;
mod transition;

pub use error::DispatchError;
pub use machine::StateMachine;
pub use state::State;
pub use transition::Transition;
