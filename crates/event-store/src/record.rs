use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::Result;

/// A serialized domain message as kept by the store.
///
/// The store never interprets the payload; it only tags it with the
/// message's wire type name so readers know what to decode it into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// Stable wire name of the message type (e.g. "PersonCreatedEvent").
    pub data_type: String,

    /// The message payload as JSON.
    pub payload: serde_json::Value,
}

impl MessageRecord {
    /// Creates a record from a raw JSON payload.
    pub fn new(data_type: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            data_type: data_type.into(),
            payload,
        }
    }

    /// Serializes a value into a record tagged with the given type name.
    pub fn encode<T: Serialize>(data_type: impl Into<String>, value: &T) -> Result<Self> {
        Ok(Self {
            data_type: data_type.into(),
            payload: serde_json::to_value(value)?,
        })
    }

    /// Deserializes the payload into a concrete type.
    ///
    /// Validation lives in the target type's deserialization, so an invalid
    /// payload fails here exactly as it would at direct construction.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(self.payload.clone())?)
    }
}
