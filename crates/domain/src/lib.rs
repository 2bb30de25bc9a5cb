//! Self-validating data model for the person domain.
//!
//! This crate provides the core domain contracts:
//! - Value objects (`PersonName`, `PersonId`) that are valid for every
//!   live instance
//! - Immutable domain events and commands produced through validating
//!   builders
//! - Bidirectional serialization between value objects and their base
//!   representations, where decoding re-runs validated construction

pub mod error;
pub mod message;
pub mod person;
pub mod value_object;

pub use error::DomainError;
pub use message::{
    BuildError, DomainMessage, EntityRef, MessageInfo, MessageInfoBuilder, from_record, to_record,
};
pub use person::{
    CreatePersonCommand, CreatePersonCommandBuilder, DeletePersonCommand,
    DeletePersonCommandBuilder, PersonCreatedEvent, PersonCreatedEventBuilder, PersonDeletedEvent,
    PersonDeletedEventBuilder, PersonId, PersonName,
};
pub use value_object::{ConstraintViolation, FieldConstraints, SerializationAdapter, ValueObject};
