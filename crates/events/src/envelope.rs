use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Envelope for a published event: a unique id, the topic it is published on,
/// and the payload.
///
/// The envelope is the unit handed to an [`EventBus`](crate::EventBus); the
/// bus itself stays oblivious to topics and payload shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEnvelope<E> {
    event_id: Uuid,
    topic: String,
    payload: E,
}

impl<E> EventEnvelope<E> {
    pub fn new(event_id: Uuid, topic: impl Into<String>, payload: E) -> Self {
        Self {
            event_id,
            topic: topic.into(),
            payload,
        }
    }

    /// Wrap a payload with a fresh, time-ordered (UUIDv7) event id.
    pub fn wrap(topic: impl Into<String>, payload: E) -> Self {
        Self::new(Uuid::now_v7(), topic, payload)
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn payload(&self) -> &E {
        &self.payload
    }

    pub fn into_payload(self) -> E {
        self.payload
    }
}
