//! Value object contracts: validity, base-type conversion, and the
//! serialization adapter between a value object and its primitive form.

use thiserror::Error;

/// A value object or required field failed its validity predicate.
///
/// Carries the field name and the offending value for diagnostics.
/// Always recoverable: the caller can supply corrected input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("the argument '{field}' is not valid: '{value}'")]
pub struct ConstraintViolation {
    field: String,
    value: String,
}

impl ConstraintViolation {
    /// Creates a violation for the named field and offending value.
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Name of the field that failed validation.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The offending value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// An immutable type whose identity is its value.
///
/// Every live instance is guaranteed valid; validation happens at
/// construction, never at first use.
pub trait ValueObject {
    /// The primitive representation of this value object.
    type Base;

    /// Returns the wrapped value verbatim.
    fn as_base_type(&self) -> Self::Base;
}

/// Bidirectional mapping between a value object and its base representation.
///
/// Absence is preserved on both directions: `None` in maps to `None` out,
/// never to an empty value object. Decoding re-invokes validated
/// construction, so an invalid serialized value fails with the same
/// [`ConstraintViolation`] as direct construction.
///
/// Round-trip laws: `decode(encode(v)) == v` for every valid `v`, and
/// `encode(decode(s)) == s` for every `s` that passes the validity check.
pub trait SerializationAdapter: ValueObject + Sized {
    /// Validated construction from the base representation.
    fn from_base(base: Self::Base) -> Result<Self, ConstraintViolation>;

    /// Encodes a value object into its base representation.
    fn encode(value: Option<&Self>) -> Option<Self::Base> {
        value.map(Self::as_base_type)
    }

    /// Decodes a base representation back into a value object.
    fn decode(base: Option<Self::Base>) -> Result<Option<Self>, ConstraintViolation> {
        base.map(Self::from_base).transpose()
    }
}

/// Declarative constraints of a message field.
///
/// Consumed by external validation frameworks for diagnostics and form
/// metadata. Never the enforcement path: the pure `is_valid`/`require_valid`
/// functions of each value object stay authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldConstraints {
    /// Minimum length in characters, if bounded below.
    pub min_length: Option<usize>,

    /// Maximum length in characters, if bounded above.
    pub max_length: Option<usize>,

    /// Whether the field must be present on a built message.
    pub required: bool,
}
