use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::{
    AggregateId, AggregateVersion, EventStoreError, MessageRecord, Result, store::EventStore,
};

/// In-memory event store implementation for testing.
///
/// Stores all records in memory and provides the same optimistic
/// concurrency behavior a persistent implementation would.
#[derive(Clone, Default)]
pub struct InMemoryEventStore {
    streams: Arc<RwLock<HashMap<AggregateId, Vec<MessageRecord>>>>,
}

impl InMemoryEventStore {
    /// Creates a new empty in-memory event store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total number of records across all streams.
    pub async fn record_count(&self) -> usize {
        self.streams.read().await.values().map(Vec::len).sum()
    }

    /// Clears all streams.
    pub async fn clear(&self) {
        self.streams.write().await.clear();
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn append(
        &self,
        stream_id: AggregateId,
        expected_version: AggregateVersion,
        records: Vec<MessageRecord>,
    ) -> Result<AggregateVersion> {
        let mut streams = self.streams.write().await;
        let stream = streams.entry(stream_id).or_default();

        let actual = AggregateVersion::new(stream.len() as u64);
        if actual != expected_version {
            return Err(EventStoreError::VersionConflict {
                stream_id,
                expected: expected_version,
                actual,
            });
        }

        debug!(
            stream = %stream_id,
            version = %actual,
            count = records.len(),
            "appending records"
        );
        stream.extend(records);

        Ok(AggregateVersion::new(stream.len() as u64))
    }

    async fn read_all(&self, stream_id: AggregateId) -> Result<Vec<MessageRecord>> {
        let streams = self.streams.read().await;
        Ok(streams.get(&stream_id).cloned().unwrap_or_default())
    }

    async fn current_version(&self, stream_id: AggregateId) -> Result<Option<AggregateVersion>> {
        let streams = self.streams.read().await;
        Ok(streams
            .get(&stream_id)
            .map(|s| AggregateVersion::new(s.len() as u64)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(n: u32) -> MessageRecord {
        MessageRecord::new("TestMessage", serde_json::json!({ "n": n }))
    }

    #[tokio::test]
    async fn append_and_read_roundtrip() {
        let store = InMemoryEventStore::new();
        let stream_id = AggregateId::new();

        let version = store
            .append(stream_id, AggregateVersion::initial(), vec![record(1)])
            .await
            .unwrap();
        assert_eq!(version, AggregateVersion::new(1));

        let history = store.read_all(stream_id).await.unwrap();
        assert_eq!(history, vec![record(1)]);
    }

    #[tokio::test]
    async fn append_with_stale_version_conflicts() {
        let store = InMemoryEventStore::new();
        let stream_id = AggregateId::new();

        store
            .append(stream_id, AggregateVersion::initial(), vec![record(1)])
            .await
            .unwrap();

        // Same expectation again must be rejected.
        let err = store
            .append(stream_id, AggregateVersion::initial(), vec![record(2)])
            .await
            .unwrap_err();

        match err {
            EventStoreError::VersionConflict {
                stream_id: id,
                expected,
                actual,
            } => {
                assert_eq!(id, stream_id);
                assert_eq!(expected, AggregateVersion::initial());
                assert_eq!(actual, AggregateVersion::new(1));
            }
            other => panic!("expected version conflict, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn conflicting_append_leaves_stream_untouched() {
        let store = InMemoryEventStore::new();
        let stream_id = AggregateId::new();

        store
            .append(stream_id, AggregateVersion::initial(), vec![record(1)])
            .await
            .unwrap();
        let _ = store
            .append(stream_id, AggregateVersion::initial(), vec![record(2)])
            .await;

        assert_eq!(store.read_all(stream_id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn read_all_on_unknown_stream_is_empty() {
        let store = InMemoryEventStore::new();
        let history = store.read_all(AggregateId::new()).await.unwrap();
        assert!(history.is_empty());
    }

    #[tokio::test]
    async fn current_version_tracks_appends() {
        let store = InMemoryEventStore::new();
        let stream_id = AggregateId::new();

        assert_eq!(store.current_version(stream_id).await.unwrap(), None);

        store
            .append(stream_id, AggregateVersion::initial(), vec![record(1), record(2)])
            .await
            .unwrap();

        assert_eq!(
            store.current_version(stream_id).await.unwrap(),
            Some(AggregateVersion::new(2))
        );
    }
}
