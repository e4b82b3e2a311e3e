use catalog_events::{EventBus, EventEnvelope};
use catalog_items::{CatalogItem, ItemEvent, ItemEventType};

use super::{EventNotifier, NotifyError};

/// Topic item events are published on unless configured otherwise.
pub const DEFAULT_TOPIC: &str = "catalog-item-events";

/// Notifier that publishes [`ItemEvent`]s on an [`EventBus`], one topic
/// envelope per change.
#[derive(Debug)]
pub struct BusNotifier<B> {
    bus: B,
    topic: String,
}

impl<B> BusNotifier<B> {
    pub fn new(bus: B) -> Self {
        Self::with_topic(bus, DEFAULT_TOPIC)
    }

    pub fn with_topic(bus: B, topic: impl Into<String>) -> Self {
        Self {
            bus,
            topic: topic.into(),
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }
}

impl<B> EventNotifier for BusNotifier<B>
where
    B: EventBus<EventEnvelope<ItemEvent>>,
    NotifyError: From<B::Error>,
{
    fn publish(&self, event_type: ItemEventType, item: &CatalogItem) -> Result<(), NotifyError> {
        let envelope = EventEnvelope::wrap(self.topic.clone(), ItemEvent::from_item(event_type, item));
        self.bus.publish(envelope).map_err(NotifyError::from)
    }
}
