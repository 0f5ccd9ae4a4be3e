//! Build errors for machine definitions.

use thiserror::Error;

/// Errors that can occur when building a state machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified for machine '{machine}'. Call .initial(state) before .build()")]
    MissingInitialState { machine: String },

    #[error(
        "Machine '{machine}' has {} invalid transition declaration(s): {}",
        .violations.len(),
        summarize(.violations)
    )]
    InvalidDefinition {
        machine: String,
        violations: Vec<DefinitionViolation>,
    },
}

/// A single problem found in a transition declaration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DefinitionViolation {
    #[error("transition from {from} has no event. Call .on_event(event)")]
    MissingEvent { from: String },

    #[error("transition from {from} has no target state. Call .go_to(state)")]
    MissingTarget { from: String },
}

fn summarize(violations: &[DefinitionViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
