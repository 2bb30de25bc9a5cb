//! Person domain commands.
//!
//! Commands share the wire shape of events: base fields plus the payload,
//! so a stored command replays through the same decode path.

use chrono::{DateTime, FixedOffset};
use common::MessageId;
use serde::{Deserialize, Serialize};

use crate::message::{BuildError, DomainMessage, MessageInfo, MessageInfoBuilder};
use crate::value_object::{ConstraintViolation, FieldConstraints};

use super::{PersonId, PersonName};

/// Request to create a new person in the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePersonCommand {
    #[serde(flatten)]
    info: MessageInfo<PersonId>,
    name: PersonName,
}

impl CreatePersonCommand {
    /// Creates a builder for this command.
    pub fn builder() -> CreatePersonCommandBuilder {
        CreatePersonCommandBuilder::new()
    }

    /// Name the person should be created with.
    pub fn name(&self) -> &PersonName {
        &self.name
    }

    /// Declarative constraints of the payload fields, keyed by wire name.
    pub fn field_constraints() -> &'static [(&'static str, FieldConstraints)] {
        &[("name", PersonName::CONSTRAINTS)]
    }
}

impl DomainMessage for CreatePersonCommand {
    type EntityId = PersonId;

    const TYPE: &'static str = "CreatePersonCommand";

    fn info(&self) -> &MessageInfo<PersonId> {
        &self.info
    }
}

impl std::fmt::Display for CreatePersonCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Create person '{}' ({}) [Command {}]",
            self.name,
            self.entity_id(),
            self.message_id()
        )
    }
}

/// Builds [`CreatePersonCommand`] instances. Re-arms itself after each
/// successful build.
#[derive(Debug, Default)]
pub struct CreatePersonCommandBuilder {
    base: MessageInfoBuilder<PersonId>,
    name: Option<PersonName>,
}

impl CreatePersonCommandBuilder {
    /// Creates a blank builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the id of the person to create.
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

    /// Sets the aggregate version the command targets.
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

    /// Validates and freezes the staged command.
    pub fn build(&mut self) -> Result<CreatePersonCommand, BuildError> {
        self.base.ensure_buildable()?;
        let name = self
            .name
            .take()
            .ok_or(BuildError::MissingField { field: "name" })?;
        let info = self.base.build()?;
        Ok(CreatePersonCommand { info, name })
    }
}

/// Request to delete a person from the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletePersonCommand {
    #[serde(flatten)]
    info: MessageInfo<PersonId>,
    name: PersonName,
}

impl DeletePersonCommand {
    /// Creates a builder for this command.
    pub fn builder() -> DeletePersonCommandBuilder {
        DeletePersonCommandBuilder::new()
    }

    /// Name of the person to delete.
    pub fn name(&self) -> &PersonName {
        &self.name
    }

    /// Declarative constraints of the payload fields, keyed by wire name.
    pub fn field_constraints() -> &'static [(&'static str, FieldConstraints)] {
        &[("name", PersonName::CONSTRAINTS)]
    }
}

impl DomainMessage for DeletePersonCommand {
    type EntityId = PersonId;

    const TYPE: &'static str = "DeletePersonCommand";

    fn info(&self) -> &MessageInfo<PersonId> {
        &self.info
    }
}

impl std::fmt::Display for DeletePersonCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Delete person '{}' ({}) [Command {}]",
            self.name,
            self.entity_id(),
            self.message_id()
        )
    }
}

/// Builds [`DeletePersonCommand`] instances. Re-arms itself after each
/// successful build.
#[derive(Debug, Default)]
pub struct DeletePersonCommandBuilder {
    base: MessageInfoBuilder<PersonId>,
    name: Option<PersonName>,
}

impl DeletePersonCommandBuilder {
    /// Creates a blank builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the id of the person to delete.
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

    /// Sets the aggregate version the command targets.
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

    /// Validates and freezes the staged command.
    pub fn build(&mut self) -> Result<DeletePersonCommand, BuildError> {
        self.base.ensure_buildable()?;
        let name = self
            .name
            .take()
            .ok_or(BuildError::MissingField { field: "name" })?;
        let info = self.base.build()?;
        Ok(DeletePersonCommand { info, name })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERSON_UUID: &str = "84565d62-115e-4502-b7c9-38ad69c64b05";

    fn testee() -> DeletePersonCommand {
        DeletePersonCommand::builder()
            .id(PersonId::parse(PERSON_UUID).unwrap())
            .name(PersonName::new("Peter Parker").unwrap())
            .version(0)
            .build()
            .unwrap()
    }

    #[test]
    fn serde_roundtrip_preserves_structural_equality() {
        let original = testee();
        let json = serde_json::to_string(&original).unwrap();
        let copy: DeletePersonCommand = serde_json::from_str(&json).unwrap();

        assert_eq!(copy, original);
        assert_eq!(copy.entity_id(), original.entity_id());
        assert_eq!(copy.version().as_u64(), 0);
        assert_eq!(copy.name(), original.name());
    }

    #[test]
    fn build_without_name_fails_naming_the_field() {
        let mut builder = DeletePersonCommand::builder()
            .id(PersonId::parse(PERSON_UUID).unwrap())
            .version(0);

        assert_eq!(
            builder.build().unwrap_err(),
            BuildError::MissingField { field: "name" }
        );
    }

    #[test]
    fn create_command_carries_its_wire_name() {
        let command = CreatePersonCommand::builder()
            .id(PersonId::new())
            .name(PersonName::new("Peter Parker").unwrap())
            .version(0)
            .build()
            .unwrap();

        assert_eq!(command.message_type(), "CreatePersonCommand");
    }

    #[test]
    fn display_mentions_name_and_intent() {
        let command = testee();
        let text = command.to_string();
        assert!(text.contains("Delete person 'Peter Parker'"));
        assert!(text.contains(PERSON_UUID));
    }
}
