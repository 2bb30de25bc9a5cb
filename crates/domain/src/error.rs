//! Domain error types.

use event_store::EventStoreError;
use thiserror::Error;

use crate::message::BuildError;
use crate::value_object::ConstraintViolation;

/// Errors that can occur during domain operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A value object or required field failed its validity predicate.
    #[error("Constraint violation: {0}")]
    Constraint(#[from] ConstraintViolation),

    /// A message build was attempted with a required field unset.
    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    /// The store collaborator failed; version conflicts pass through
    /// unchanged inside this variant.
    #[error("Event store error: {0}")]
    Store(#[from] EventStoreError),

    /// A store record was tagged with a different message type than the
    /// one it was decoded into.
    #[error("Unexpected message type: expected '{expected}', found '{actual}'")]
    UnexpectedMessageType {
        expected: &'static str,
        actual: String,
    },
}

impl DomainError {
    /// Returns true when the error is a version conflict raised by the store.
    pub fn is_version_conflict(&self) -> bool {
        matches!(
            self,
            DomainError::Store(EventStoreError::VersionConflict { .. })
        )
    }
}
