//! Person domain events.

use chrono::{DateTime, FixedOffset};
use common::MessageId;
use serde::{Deserialize, Serialize};

use crate::message::{BuildError, DomainMessage, MessageInfo, MessageInfoBuilder};
use crate::value_object::{ConstraintViolation, FieldConstraints};

use super::{PersonId, PersonName};

/// A new person was created in the system.
///
/// Immutable once built; produced only by [`PersonCreatedEventBuilder`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonCreatedEvent {
    #[serde(flatten)]
    info: MessageInfo<PersonId>,
    name: PersonName,
}

impl PersonCreatedEvent {
    /// Creates a builder for this event.
    pub fn builder() -> PersonCreatedEventBuilder {
        PersonCreatedEventBuilder::new()
    }

    /// Name of the created person.
    pub fn name(&self) -> &PersonName {
        &self.name
    }

    /// Declarative constraints of the payload fields, keyed by wire name.
    pub fn field_constraints() -> &'static [(&'static str, FieldConstraints)] {
        &[("name", PersonName::CONSTRAINTS)]
    }
}

impl DomainMessage for PersonCreatedEvent {
    type EntityId = PersonId;

    const TYPE: &'static str = "PersonCreatedEvent";

    fn info(&self) -> &MessageInfo<PersonId> {
        &self.info
    }
}

impl std::fmt::Display for PersonCreatedEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Person '{}' ({}) was created [Event {}]",
            self.name,
            self.entity_id(),
            self.message_id()
        )
    }
}

/// Builds [`PersonCreatedEvent`] instances.
///
/// A successful [`build`](Self::build) moves the staged fields into the
/// returned event and re-arms the builder, so the event is never aliased
/// by later mutation of the builder.
#[derive(Debug, Default)]
pub struct PersonCreatedEventBuilder {
    base: MessageInfoBuilder<PersonId>,
    name: Option<PersonName>,
}

impl PersonCreatedEventBuilder {
    /// Creates a blank builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the id of the created person.
    pub fn id(mut self, id: PersonId) -> Self {
        self.base.entity_id(id);
        self
    }

    /// Sets the person's name.
    pub fn name(mut self, name: PersonName) -> Self {
        self.name = Some(name);
        self
    }

    /// Validates and sets the person's name from its raw form.
    pub fn try_name(self, name: impl Into<String>) -> Result<Self, ConstraintViolation> {
        Ok(self.name(PersonName::new(name)?))
    }

    /// Sets the aggregate version the event applies to.
    pub fn version(mut self, version: u64) -> Self {
        self.base.version(version.into());
        self
    }

    /// Sets an explicit message id. A fresh one is generated when unset.
    pub fn message_id(mut self, id: MessageId) -> Self {
        self.base.message_id(id);
        self
    }

    /// Sets an explicit timestamp. The current time is used when unset.
    pub fn timestamp(mut self, timestamp: DateTime<FixedOffset>) -> Self {
        self.base.timestamp(timestamp);
        self
    }

    /// Validates and freezes the staged event.
    pub fn build(&mut self) -> Result<PersonCreatedEvent, BuildError> {
        self.base.ensure_buildable()?;
        let name = self
            .name
            .take()
            .ok_or(BuildError::MissingField { field: "name" })?;
        let info = self.base.build()?;
        Ok(PersonCreatedEvent { info, name })
    }
}

/// A person was deleted from the system.
///
/// Immutable once built; produced only by [`PersonDeletedEventBuilder`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonDeletedEvent {
    #[serde(flatten)]
    info: MessageInfo<PersonId>,
    name: PersonName,
}

impl PersonDeletedEvent {
    /// Creates a builder for this event.
    pub fn builder() -> PersonDeletedEventBuilder {
        PersonDeletedEventBuilder::new()
    }

    /// Name of the deleted person.
    pub fn name(&self) -> &PersonName {
        &self.name
    }

    /// Declarative constraints of the payload fields, keyed by wire name.
    pub fn field_constraints() -> &'static [(&'static str, FieldConstraints)] {
        &[("name", PersonName::CONSTRAINTS)]
    }
}

impl DomainMessage for PersonDeletedEvent {
    type EntityId = PersonId;

    const TYPE: &'static str = "PersonDeletedEvent";

    fn info(&self) -> &MessageInfo<PersonId> {
        &self.info
    }
}

impl std::fmt::Display for PersonDeletedEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Deleted person '{}' ({}) [Event {}]",
            self.name,
            self.entity_id(),
            self.message_id()
        )
    }
}

/// Builds [`PersonDeletedEvent`] instances. Re-arms itself after each
/// successful build.
#[derive(Debug, Default)]
pub struct PersonDeletedEventBuilder {
    base: MessageInfoBuilder<PersonId>,
    name: Option<PersonName>,
}

impl PersonDeletedEventBuilder {
    /// Creates a blank builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the id of the deleted person.
    pub fn id(mut self, id: PersonId) -> Self {
        self.base.entity_id(id);
        self
    }

    /// Sets the person's name.
    pub fn name(mut self, name: PersonName) -> Self {
        self.name = Some(name);
        self
    }

    /// Validates and sets the person's name from its raw form.
    pub fn try_name(self, name: impl Into<String>) -> Result<Self, ConstraintViolation> {
        Ok(self.name(PersonName::new(name)?))
    }

    /// Sets the aggregate version the event applies to.
    pub fn version(mut self, version: u64) -> Self {
        self.base.version(version.into());
        self
    }

    /// Sets an explicit message id. A fresh one is generated when unset.
    pub fn message_id(mut self, id: MessageId) -> Self {
        self.base.message_id(id);
        self
    }

    /// Sets an explicit timestamp. The current time is used when unset.
    pub fn timestamp(mut self, timestamp: DateTime<FixedOffset>) -> Self {
        self.base.timestamp(timestamp);
        self
    }

    /// Validates and freezes the staged event.
    pub fn build(&mut self) -> Result<PersonDeletedEvent, BuildError> {
        self.base.ensure_buildable()?;
        let name = self
            .name
            .take()
            .ok_or(BuildError::MissingField { field: "name" })?;
        let info = self.base.build()?;
        Ok(PersonDeletedEvent { info, name })
    }
}
