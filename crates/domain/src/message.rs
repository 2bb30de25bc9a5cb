//! Shared structure of domain messages (events and commands).
//!
//! Every concrete message embeds a [`MessageInfo`] by value and composes
//! its builder out of a [`MessageInfoBuilder`] plus its own payload fields,
//! so the structural validation lives in one place without an inheritance
//! hierarchy.

use chrono::{DateTime, FixedOffset, Utc};
use common::{AggregateVersion, MessageId};
use event_store::MessageRecord;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;

use crate::error::DomainError;

/// Build attempted before a required field was set.
///
/// A programmer error, surfaced immediately at `build()` and never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// No value was staged for the named required field.
    #[error("no value for required field '{field}'")]
    MissingField { field: &'static str },
}

impl BuildError {
    pub(crate) fn missing(field: &'static str) -> Self {
        BuildError::MissingField { field }
    }
}

/// Reference to an aggregate at a specific version.
///
/// Expresses "this message applies to aggregate X at version V". The
/// version is non-negative by construction; monotonicity across a stream
/// is enforced by the store, not by this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityRef<I> {
    /// The aggregate the message applies to.
    #[serde(rename = "entityId")]
    pub entity_id: I,

    /// The aggregate version the message applies to.
    #[serde(rename = "entityVersion")]
    pub version: AggregateVersion,
}

impl<I> EntityRef<I> {
    /// Creates a reference to the given aggregate at the given version.
    pub fn new(entity_id: I, version: AggregateVersion) -> Self {
        Self { entity_id, version }
    }
}

/// Base fields carried by every domain message.
///
/// Immutable once embedded in a built message. Equality is structural;
/// timestamps compare by instant, independent of the recorded offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageInfo<I> {
    /// Unique identifier of this message.
    #[serde(rename = "eventId")]
    pub message_id: MessageId,

    /// When the message was created, with its original UTC offset.
    #[serde(rename = "eventTimestamp")]
    pub timestamp: DateTime<FixedOffset>,

    /// The aggregate and version the message applies to.
    #[serde(flatten)]
    pub entity_ref: EntityRef<I>,
}

/// An immutable record of something that happened to, or is requested of,
/// an aggregate, tied to a specific entity and version.
///
/// Produced only by a validating builder; safe to share across threads.
pub trait DomainMessage: Serialize + DeserializeOwned + Clone + PartialEq + Send + Sync {
    /// The identifier type naming the target aggregate.
    type EntityId;

    /// Never changing unique wire name of this message type.
    const TYPE: &'static str;

    /// The base fields of this message.
    fn info(&self) -> &MessageInfo<Self::EntityId>;

    /// The wire name of this message type.
    fn message_type(&self) -> &'static str {
        Self::TYPE
    }

    /// Unique identifier of this message.
    fn message_id(&self) -> MessageId {
        self.info().message_id
    }

    /// When the message was created.
    fn timestamp(&self) -> DateTime<FixedOffset> {
        self.info().timestamp
    }

    /// The aggregate the message applies to.
    fn entity_id(&self) -> &Self::EntityId {
        &self.info().entity_ref.entity_id
    }

    /// The aggregate version the message applies to.
    fn version(&self) -> AggregateVersion {
        self.info().entity_ref.version
    }
}

/// Encodes a message into a store record tagged with its wire name.
pub fn to_record<M: DomainMessage>(message: &M) -> Result<MessageRecord, DomainError> {
    Ok(MessageRecord::encode(M::TYPE, message)?)
}

/// Decodes a store record back into a concrete message.
///
/// Fails when the record is tagged with a different wire name, or when the
/// payload does not survive validated construction.
pub fn from_record<M: DomainMessage>(record: &MessageRecord) -> Result<M, DomainError> {
    if record.data_type != M::TYPE {
        return Err(DomainError::UnexpectedMessageType {
            expected: M::TYPE,
            actual: record.data_type.clone(),
        });
    }
    Ok(record.decode()?)
}

/// Staging area for the base fields of a message under construction.
///
/// Embedded by value in each concrete builder. A successful [`build`]
/// moves the staged fields into a frozen [`MessageInfo`] and leaves the
/// staging area blank, so a previously returned message is never aliased.
/// Not thread-safe: one builder per concurrent task.
///
/// [`build`]: MessageInfoBuilder::build
#[derive(Debug)]
pub struct MessageInfoBuilder<I> {
    message_id: Option<MessageId>,
    timestamp: Option<DateTime<FixedOffset>>,
    entity_id: Option<I>,
    version: Option<AggregateVersion>,
}

impl<I> Default for MessageInfoBuilder<I> {
    fn default() -> Self {
        Self {
            message_id: None,
            timestamp: None,
            entity_id: None,
            version: None,
        }
    }
}

impl<I> MessageInfoBuilder<I> {
    /// Creates a blank staging area.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stages an explicit message id. A fresh one is generated when unset.
    pub fn message_id(&mut self, id: MessageId) {
        self.message_id = Some(id);
    }

    /// Stages an explicit timestamp. The current time is used when unset.
    pub fn timestamp(&mut self, timestamp: DateTime<FixedOffset>) {
        self.timestamp = Some(timestamp);
    }

    /// Stages the target aggregate id.
    pub fn entity_id(&mut self, id: I) {
        self.entity_id = Some(id);
    }

    /// Stages the target aggregate version.
    pub fn version(&mut self, version: AggregateVersion) {
        self.version = Some(version);
    }

    /// Checks the structural preconditions without consuming the staged
    /// state, so a failed build leaves the builder intact.
    pub fn ensure_buildable(&self) -> Result<(), BuildError> {
        if self.entity_id.is_none() {
            return Err(BuildError::missing("entityId"));
        }
        if self.version.is_none() {
            return Err(BuildError::missing("entityVersion"));
        }
        Ok(())
    }

    /// Freezes the staged fields into a [`MessageInfo`] and re-arms the
    /// staging area for the next message.
    pub fn build(&mut self) -> Result<MessageInfo<I>, BuildError> {
        self.ensure_buildable()?;
        let entity_id = self.entity_id.take().ok_or(BuildError::missing("entityId"))?;
        let version = self.version.take().ok_or(BuildError::missing("entityVersion"))?;
        let message_id = self.message_id.take().unwrap_or_default();
        let timestamp = self
            .timestamp
            .take()
            .unwrap_or_else(|| Utc::now().fixed_offset());

        Ok(MessageInfo {
            message_id,
            timestamp,
            entity_ref: EntityRef::new(entity_id, version),
        })
    }
}
