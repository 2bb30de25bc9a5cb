use serde::{Deserialize, Serialize};

use crate::value_object::{
    ConstraintViolation, FieldConstraints, SerializationAdapter, ValueObject,
};

/// Name of a person.
///
/// Valid for every live instance: construction goes through
/// [`require_valid`], and deserialization re-runs it. The stored value is
/// kept verbatim, including surrounding whitespace; only the length check
/// works on the trimmed form.
///
/// [`require_valid`]: PersonName::require_valid
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PersonName(String);

impl PersonName {
    /// Max length of a person's name, in characters of the trimmed value.
    pub const MAX_LENGTH: usize = 100;

    /// Declarative constraints for external validation frameworks.
    /// The pure `is_valid`/`require_valid` pair stays authoritative.
    pub const CONSTRAINTS: FieldConstraints = FieldConstraints {
        min_length: Some(1),
        max_length: Some(Self::MAX_LENGTH),
        required: true,
    };

    /// Creates a validated person name.
    pub fn new(value: impl Into<String>) -> Result<Self, ConstraintViolation> {
        let value = value.into();
        Self::require_valid("value", &value)?;
        Ok(Self(value))
    }

    /// Verifies that a given value can be converted into the type.
    ///
    /// Total: never fails, absence (`None`) counts as valid. A present
    /// value is invalid when it is empty, trims to empty, or its trimmed
    /// form is longer than [`MAX_LENGTH`](Self::MAX_LENGTH) characters.
    pub fn is_valid(value: Option<&str>) -> bool {
        let Some(value) = value else {
            return true;
        };
        if value.is_empty() {
            return false;
        }
        let trimmed = value.trim();
        !trimmed.is_empty() && trimmed.chars().count() <= Self::MAX_LENGTH
    }

    /// Fails with a [`ConstraintViolation`] naming `field` when `value` is
    /// not a valid person name.
    pub fn require_valid(field: &str, value: &str) -> Result<(), ConstraintViolation> {
        if !Self::is_valid(Some(value)) {
            return Err(ConstraintViolation::new(field, value));
        }
        Ok(())
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PersonName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PersonName {
    type Error = ConstraintViolation;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for PersonName {
    type Error = ConstraintViolation;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PersonName> for String {
    fn from(name: PersonName) -> Self {
        name.0
    }
}

impl ValueObject for PersonName {
    type Base = String;

    fn as_base_type(&self) -> String {
        self.0.clone()
    }
}

impl SerializationAdapter for PersonName {
    fn from_base(base: String) -> Result<Self, ConstraintViolation> {
        Self::new(base)
    }
}
