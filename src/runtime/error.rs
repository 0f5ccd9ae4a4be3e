//! Dispatch errors.

use crate::core::HookFailure;
use thiserror::Error;

/// Errors reported by [`StateMachine::trigger`](crate::StateMachine::trigger).
///
/// An unmatched event is not an error. Hook failures never cancel a move:
/// by the time this error is returned the machine is already in the target
/// state.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(
        "Machine '{machine}' moved from {from} to {to} on {event}, but {} hook(s) failed",
        .failures.len()
    )]
    HookFailed {
        machine: String,
        from: String,
        to: String,
        event: String,
        failures: Vec<HookFailure>,
    },
}

impl DispatchError {
    /// Every hook failure collected during the move.
    pub fn failures(&self) -> &[HookFailure] {
        match self {
            Self::HookFailed { failures, .. } => failures,
        }
    }
}
