//! Person aggregate: value objects, events, and commands.

pub mod commands;
pub mod events;
pub mod id;
pub mod name;

pub use commands::{
    CreatePersonCommand, CreatePersonCommandBuilder, DeletePersonCommand,
    DeletePersonCommandBuilder,
};
pub use events::{
    PersonCreatedEvent, PersonCreatedEventBuilder, PersonDeletedEvent, PersonDeletedEventBuilder,
};
pub use id::PersonId;
pub use name::PersonName;
