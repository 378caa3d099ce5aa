//! Domain event base abstractions.

use crate::{EntityId, KernelError, KernelResult};
use chrono::{DateTime, Utc};
use serde_json::{json, Value};

/// An immutable record of something that happened to an aggregate.
///
/// Events are created by aggregate domain methods, buffered on the
/// aggregate, and consumed by a dispatcher after persistence. They are
/// never mutated.
pub trait DomainEvent: Send + Sync {
    /// Fully qualified event name used for routing, dot-namespaced
    /// (e.g. `iam.user_created`). Stable once published.
    fn event_name(&self) -> &'static str;

    /// Unique identifier of this event instance.
    fn event_id(&self) -> EntityId;

    /// Identifier of the aggregate that produced the event.
    fn aggregate_id(&self) -> String;

    /// When the event occurred.
    fn occurred_on(&self) -> DateTime<Utc>;

    /// Serializes the event payload.
    fn payload_json(&self) -> KernelResult<Value>;

    /// Standard envelope for event serialization.
    fn to_json(&self) -> KernelResult<Value> {
        Ok(json!({
            "eventId": self.event_id().to_string(),
            "aggregateId": self.aggregate_id(),
            "eventName": self.event_name(),
            "occurredOn": self.occurred_on().to_rfc3339(),
            "payload": self.payload_json()?,
        }))
    }
}

/// Identity and timestamp shared by every event instance.
///
/// `new()` generates both; `replay` supplies them explicitly when
/// reconstructing an event from a log or fixing time in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventMeta {
    /// Unique identifier of the event instance.
    pub event_id: EntityId,
    /// When the event occurred.
    pub occurred_on: DateTime<Utc>,
}

impl EventMeta {
    /// Creates fresh metadata: generated id, current timestamp.
    #[must_use]
    pub fn new() -> Self {
        Self {
            event_id: EntityId::new(),
            occurred_on: Utc::now(),
        }
    }

    /// Reconstructs metadata with an explicit id and timestamp.
    #[must_use]
    pub const fn replay(event_id: EntityId, occurred_on: DateTime<Utc>) -> Self {
        Self {
            event_id,
            occurred_on,
        }
    }
}

impl Default for EventMeta {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializes a payload value, mapping failures to a kernel error.
pub fn serialize_payload<P: serde::Serialize>(payload: &P) -> KernelResult<Value> {
    serde_json::to_value(payload).map_err(|e| KernelError::Serialization(e.to_string()))
}
