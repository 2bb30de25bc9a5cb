use common::AggregateId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::value_object::{ConstraintViolation, SerializationAdapter, ValueObject};

/// Unique identifier of a person aggregate.
///
/// Wraps a UUID; well-formedness is guaranteed by the type. A person keeps
/// the same identifier for its entire lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(Uuid);

impl PersonId {
    /// Creates a new random person ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a person ID from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parses a person ID from its string form, re-validating
    /// well-formedness.
    pub fn parse(value: &str) -> Result<Self, ConstraintViolation> {
        Uuid::parse_str(value)
            .map(Self)
            .map_err(|_| ConstraintViolation::new("PersonId", value))
    }

    /// Verifies that a given string can be converted into the type.
    ///
    /// Total: never fails, absence counts as valid.
    pub fn is_valid(value: Option<&str>) -> bool {
        match value {
            None => true,
            Some(v) => Uuid::parse_str(v).is_ok(),
        }
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for PersonId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for PersonId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<PersonId> for Uuid {
    fn from(id: PersonId) -> Self {
        id.0
    }
}

impl From<PersonId> for AggregateId {
    fn from(id: PersonId) -> Self {
        AggregateId::from_uuid(id.0)
    }
}

impl ValueObject for PersonId {
    type Base = Uuid;

    fn as_base_type(&self) -> Uuid {
        self.0
    }
}

impl SerializationAdapter for PersonId {
    fn from_base(base: Uuid) -> Result<Self, ConstraintViolation> {
        Ok(Self(base))
    }
}
