//! Domain error taxonomy raised by `Todo` entity methods

use thiserror::Error;

/// Errors raised by entity-level business rules.
///
/// Both kinds are recoverable: `Validation` by correcting the input,
/// `RuleViolation` by consulting the matching predicate
/// (`can_be_completed` / `can_be_uncompleted`) before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Caller-supplied data violated a field-level invariant.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The entity's current state forbids the attempted transition.
    #[error("Domain rule violation: {0}")]
    RuleViolation(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
