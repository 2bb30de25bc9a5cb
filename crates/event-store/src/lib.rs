//! Event/command store collaborator.
//!
//! The domain layer hands serialized messages to an [`EventStore`] and reads
//! them back for replay. Appends use optimistic concurrency: the caller
//! states the version it expects the stream to be at, and the store rejects
//! the append with a version conflict when the expectation does not hold.

pub mod error;
pub mod memory;
pub mod record;
pub mod store;

pub use common::{AggregateId, AggregateVersion};
pub use error::{EventStoreError, Result};
pub use memory::InMemoryEventStore;
pub use record::MessageRecord;
pub use store::EventStore;
