use thiserror::Error;

use crate::{AggregateId, AggregateVersion};

/// Errors that can occur when interacting with the event store.
#[derive(Debug, Error)]
pub enum EventStoreError {
    /// A concurrency conflict occurred when appending messages.
    /// The expected stream version did not match the actual version.
    #[error(
        "Version conflict for stream {stream_id}: expected version {expected}, found {actual}"
    )]
    VersionConflict {
        stream_id: AggregateId,
        expected: AggregateVersion,
        actual: AggregateVersion,
    },

    /// A serialization/deserialization error occurred.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for event store operations.
pub type Result<T> = std::result::Result<T, EventStoreError>;
