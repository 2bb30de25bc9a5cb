//! Shared primitives used across the person messaging core.

pub mod types;

pub use types::{AggregateId, AggregateVersion, MessageId};
