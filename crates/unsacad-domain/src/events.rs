//! IAM domain events.

use crate::value_objects::{EmailAddress, UserRole, Username};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use unsacad_kernel::{serialize_payload, DomainEvent, EntityId, EventMeta, KernelResult};

/// Payload of [`UserCreated`], carrying the normalized identifiers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreatedPayload {
    pub email: String,
    pub username: String,
    pub role: UserRole,
}

/// Emitted once when a new user account is created.
#[derive(Debug)]
pub struct UserCreated {
    meta: EventMeta,
    user_id: EntityId,
    payload: UserCreatedPayload,
}

impl UserCreated {
    pub(crate) fn new(
        user_id: EntityId,
        email: &EmailAddress,
        username: &Username,
        role: UserRole,
    ) -> Self {
        Self {
            meta: EventMeta::new(),
            user_id,
            payload: UserCreatedPayload {
                email: email.as_str().to_string(),
                username: username.as_str().to_string(),
                role,
            },
        }
    }

    /// The event payload.
    #[must_use]
    pub fn payload(&self) -> &UserCreatedPayload {
        &self.payload
    }
}

impl DomainEvent for UserCreated {
    fn event_name(&self) -> &'static str {
        "iam.user_created"
    }

    fn event_id(&self) -> EntityId {
        self.meta.event_id
    }

    fn aggregate_id(&self) -> String {
        self.user_id.to_string()
    }

    fn occurred_on(&self) -> DateTime<Utc> {
        self.meta.occurred_on
    }

    fn payload_json(&self) -> KernelResult<Value> {
        serialize_payload(&self.payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_shape() {
        let user_id = EntityId::new();
        let event = UserCreated::new(
            user_id,
            &EmailAddress::new("j@example.com").unwrap(),
            &Username::new("jdoe").unwrap(),
            UserRole::Student,
        );

        let json = event.to_json().unwrap();
        assert_eq!(json["eventName"], "iam.user_created");
        assert_eq!(json["aggregateId"], user_id.to_string());
        assert_eq!(json["payload"]["email"], "j@example.com");
        assert_eq!(json["payload"]["username"], "jdoe");
        assert_eq!(json["payload"]["role"], "STUDENT");
    }
}
