use async_trait::async_trait;

use crate::{AggregateId, AggregateVersion, MessageRecord, Result};

/// Core trait for event store implementations.
///
/// A stream holds the ordered message history of one aggregate. The current
/// version of a stream equals the number of records appended so far; an
/// empty stream is at version 0. All implementations must be thread-safe.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Appends records to an aggregate's stream.
    ///
    /// Records are appended atomically. The operation fails with
    /// [`EventStoreError::VersionConflict`](crate::EventStoreError::VersionConflict)
    /// when the stream is not at `expected_version`.
    ///
    /// Returns the stream version after the append.
    async fn append(
        &self,
        stream_id: AggregateId,
        expected_version: AggregateVersion,
        records: Vec<MessageRecord>,
    ) -> Result<AggregateVersion>;

    /// Reads the full message history of a stream, oldest first.
    ///
    /// An unknown stream yields an empty history.
    async fn read_all(&self, stream_id: AggregateId) -> Result<Vec<MessageRecord>>;

    /// Returns the current version of a stream.
    ///
    /// Returns `None` if the stream has never been appended to.
    async fn current_version(&self, stream_id: AggregateId) -> Result<Option<AggregateVersion>>;
}
