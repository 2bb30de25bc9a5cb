//! Integration tests for the person domain messages.
//!
//! These tests verify the full path: validating builders, the JSON wire
//! form, and persistence/replay through the event store collaborator.

use chrono::DateTime;
use common::{AggregateVersion, MessageId};
use domain::{
    DeletePersonCommand, DomainError, DomainMessage, PersonCreatedEvent, PersonId, PersonName,
    ValueObject, from_record, to_record,
};
use event_store::{EventStore, EventStoreError, InMemoryEventStore};
use uuid::Uuid;

const PERSON_UUID: &str = "84565d62-115e-4502-b7c9-38ad69c64b05";

fn person_id() -> PersonId {
    PersonId::parse(PERSON_UUID).unwrap()
}

fn peter() -> PersonName {
    PersonName::new("Peter Parker").unwrap()
}

mod wire_form {
    use super::*;

    #[test]
    fn end_to_end_encode_decode_preserves_the_message() {
        let original = PersonCreatedEvent::builder()
            .id(person_id())
            .name(peter())
            .version(0)
            .build()
            .unwrap();

        let record = to_record(&original).unwrap();
        assert_eq!(record.data_type, "PersonCreatedEvent");

        let copy: PersonCreatedEvent = from_record(&record).unwrap();
        assert_eq!(copy, original);
        assert_eq!(copy.entity_id().to_string(), PERSON_UUID);
        assert_eq!(copy.version(), AggregateVersion::initial());
        assert_eq!(copy.name().as_str(), "Peter Parker");
    }

    #[test]
    fn stored_fixture_decodes_to_the_literal_values() {
        let json = r#"{
            "eventId": "109a77b2-1de2-46fc-aee1-97fa7740a552",
            "eventTimestamp": "2019-11-17T10:27:13.183+01:00",
            "entityId": "84565d62-115e-4502-b7c9-38ad69c64b05",
            "entityVersion": 0,
            "name": "Peter Parker"
        }"#;

        let command: DeletePersonCommand = serde_json::from_str(json).unwrap();

        assert_eq!(
            command.message_id(),
            MessageId::from_uuid(Uuid::parse_str("109a77b2-1de2-46fc-aee1-97fa7740a552").unwrap())
        );
        assert_eq!(
            command.timestamp(),
            DateTime::parse_from_rfc3339("2019-11-17T10:27:13.183+01:00").unwrap()
        );
        assert_eq!(*command.entity_id(), person_id());
        assert_eq!(command.version().as_u64(), 0);
        assert_eq!(command.name().as_base_type(), "Peter Parker");
    }

    #[test]
    fn timestamp_equality_compares_the_instant() {
        let berlin = DateTime::parse_from_rfc3339("2019-11-17T10:27:13.183+01:00").unwrap();
        let utc = DateTime::parse_from_rfc3339("2019-11-17T09:27:13.183+00:00").unwrap();

        let a = PersonCreatedEvent::builder()
            .id(person_id())
            .name(peter())
            .version(0)
            .message_id(MessageId::from_uuid(Uuid::nil()))
            .timestamp(berlin)
            .build()
            .unwrap();
        let b = PersonCreatedEvent::builder()
            .id(person_id())
            .name(peter())
            .version(0)
            .message_id(MessageId::from_uuid(Uuid::nil()))
            .timestamp(utc)
            .build()
            .unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn decoding_a_record_with_the_wrong_type_tag_fails() {
        let event = PersonCreatedEvent::builder()
            .id(person_id())
            .name(peter())
            .version(0)
            .build()
            .unwrap();
        let record = to_record(&event).unwrap();

        let result: Result<DeletePersonCommand, _> = from_record(&record);
        match result.unwrap_err() {
            DomainError::UnexpectedMessageType { expected, actual } => {
                assert_eq!(expected, "DeletePersonCommand");
                assert_eq!(actual, "PersonCreatedEvent");
            }
            other => panic!("expected type mismatch, got {other:?}"),
        }
    }
}

mod store_collaboration {
    use super::*;

    #[tokio::test]
    async fn messages_survive_append_and_replay() {
        let store = InMemoryEventStore::new();
        let stream_id = person_id().into();

        let created = PersonCreatedEvent::builder()
            .id(person_id())
            .name(peter())
            .version(0)
            .build()
            .unwrap();

        let version = store
            .append(
                stream_id,
                AggregateVersion::initial(),
                vec![to_record(&created).unwrap()],
            )
            .await
            .unwrap();
        assert_eq!(version, AggregateVersion::new(1));

        let history = store.read_all(stream_id).await.unwrap();
        assert_eq!(history.len(), 1);

        let replayed: PersonCreatedEvent = from_record(&history[0]).unwrap();
        assert_eq!(replayed, created);
    }

    #[tokio::test]
    async fn version_conflicts_propagate_unchanged() {
        let store = InMemoryEventStore::new();
        let stream_id = person_id().into();

        let event = PersonCreatedEvent::builder()
            .id(person_id())
            .name(peter())
            .version(0)
            .build()
            .unwrap();
        let record = to_record(&event).unwrap();

        store
            .append(stream_id, AggregateVersion::initial(), vec![record.clone()])
            .await
            .unwrap();

        let conflict = store
            .append(stream_id, AggregateVersion::initial(), vec![record])
            .await
            .unwrap_err();

        let domain_err = DomainError::from(conflict);
        assert!(domain_err.is_version_conflict());
        match domain_err {
            DomainError::Store(EventStoreError::VersionConflict {
                expected, actual, ..
            }) => {
                assert_eq!(expected, AggregateVersion::initial());
                assert_eq!(actual, AggregateVersion::new(1));
            }
            other => panic!("expected version conflict, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn replayed_payloads_revalidate_on_decode() {
        let store = InMemoryEventStore::new();
        let stream_id = person_id().into();

        // A record whose payload never passed validated construction.
        let tampered = event_store::MessageRecord::new(
            "PersonCreatedEvent",
            serde_json::json!({
                "eventId": Uuid::new_v4().to_string(),
                "eventTimestamp": "2019-11-17T10:27:13.183+01:00",
                "entityId": PERSON_UUID,
                "entityVersion": 0,
                "name": "   "
            }),
        );

        store
            .append(stream_id, AggregateVersion::initial(), vec![tampered])
            .await
            .unwrap();

        let history = store.read_all(stream_id).await.unwrap();
        let result: Result<PersonCreatedEvent, _> = from_record(&history[0]);
        assert!(result.is_err());
    }
}
