//! Accumulating validation for declarations being compiled.
//!
//! Compiling a machine checks every declaration and reports ALL problems
//! together, rather than stopping at the first broken transition.

use crate::builder::error::DefinitionViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of compiling one or more declarations.
pub(crate) type Compiled<X> = Validation<X, NonEmptyVec<DefinitionViolation>>;

/// Succeed with a declared part, or fail with the violation for its absence.
pub(crate) fn required<X, F>(value: Option<X>, missing: F) -> Compiled<X>
where
    F: FnOnce() -> DefinitionViolation,
{
    match value {
        Some(value) => Validation::success(value),
        None => Validation::fail(missing()),
    }
}

/// Combine compiled parts, keeping every violation in declaration order.
pub(crate) fn all<X>(parts: impl IntoIterator<Item = Compiled<X>>) -> Compiled<Vec<X>> {
    Validation::all_vec(parts.into_iter().collect())
}

/// Flatten a result into the violations it carries.
pub(crate) fn into_violations<X>(compiled: Compiled<X>) -> Result<X, Vec<DefinitionViolation>> {
    compiled.into_result().map_err(NonEmptyVec::into_vec)
}
