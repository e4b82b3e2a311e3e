//! Best-effort change notification.
//!
//! Use cases announce every successful save through an [`EventNotifier`].
//! The announcement is a side channel: a failed publish is logged by the
//! caller and otherwise ignored, and nothing is retried.

pub mod bus;

pub use bus::{BusNotifier, DEFAULT_TOPIC};

use thiserror::Error;

use catalog_events::InMemoryBusError;
use catalog_items::{CatalogItem, ItemEventType};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotifyError {
    #[error("event transport failed: {0}")]
    Transport(String),

    #[error("failed to serialize event: {0}")]
    Serialize(String),
}

impl From<InMemoryBusError> for NotifyError {
    fn from(value: InMemoryBusError) -> Self {
        NotifyError::Transport(value.to_string())
    }
}

/// Publish contract consumed by the mutating use cases.
pub trait EventNotifier: Send + Sync {
    fn publish(&self, event_type: ItemEventType, item: &CatalogItem) -> Result<(), NotifyError>;
}

impl<N> EventNotifier for std::sync::Arc<N>
where
    N: EventNotifier + ?Sized,
{
    fn publish(&self, event_type: ItemEventType, item: &CatalogItem) -> Result<(), NotifyError> {
        (**self).publish(event_type, item)
    }
}

/// Notifier that drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

impl EventNotifier for NoopNotifier {
    fn publish(&self, _event_type: ItemEventType, _item: &CatalogItem) -> Result<(), NotifyError> {
        Ok(())
    }
}

/// Publish and swallow: the outcome is only observable through logs.
pub(crate) fn publish_best_effort(
    notifier: &dyn EventNotifier,
    event_type: ItemEventType,
    item: &CatalogItem,
) {
    match notifier.publish(event_type, item) {
        Ok(()) => {
            tracing::debug!(%event_type, item_id = ?item.id(), code = %item.code(), "item event published");
        }
        Err(err) => {
            tracing::warn!(
                %event_type,
                item_id = ?item.id(),
                code = %item.code(),
                error = %err,
                "failed to publish item event; continuing"
            );
        }
    }
}
