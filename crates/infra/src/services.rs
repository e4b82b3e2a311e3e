//! Service wiring: one store, one notifier, and the three use cases sharing
//! them.

use std::sync::Arc;

use catalog_events::{EventEnvelope, InMemoryEventBus};
use catalog_items::ItemEvent;

use crate::config::{CatalogConfig, NotifierKind};
use crate::notifier::{BusNotifier, NoopNotifier};
use crate::store::InMemoryCatalogStore;
use crate::usecase::{CreateItem, QueryItems, SharedNotifier, SharedStore, UpdateItem};

pub type ItemEventBus = InMemoryEventBus<EventEnvelope<ItemEvent>>;

#[derive(Debug, Clone)]
pub struct CatalogServices {
    pub create: CreateItem,
    pub update: UpdateItem,
    pub query: QueryItems,
    /// Present when events are published in-process; subscribe here.
    pub bus: Option<Arc<ItemEventBus>>,
}

pub fn build_services(config: &CatalogConfig) -> anyhow::Result<CatalogServices> {
    let store: SharedStore = Arc::new(InMemoryCatalogStore::new());

    let (notifier, bus): (SharedNotifier, Option<Arc<ItemEventBus>>) = match config.notifier {
        NotifierKind::InMemory => in_memory_notifier(config),
        NotifierKind::None => {
            tracing::info!("catalog events disabled");
            (Arc::new(NoopNotifier), None)
        }
        NotifierKind::Redis => {
            #[cfg(feature = "redis")]
            {
                redis_notifier(config)?
            }
            #[cfg(not(feature = "redis"))]
            {
                tracing::warn!(
                    "CATALOG_NOTIFIER=redis but redis feature not enabled, falling back to in-memory"
                );
                in_memory_notifier(config)
            }
        }
    };

    Ok(CatalogServices {
        create: CreateItem::new(store.clone(), notifier.clone()),
        update: UpdateItem::new(store.clone(), notifier),
        query: QueryItems::new(store),
        bus,
    })
}

fn in_memory_notifier(config: &CatalogConfig) -> (SharedNotifier, Option<Arc<ItemEventBus>>) {
    let bus = Arc::new(ItemEventBus::new());
    tracing::info!(topic = %config.events_topic, "publishing catalog events in-process");
    let notifier = BusNotifier::with_topic(bus.clone(), config.events_topic.clone());
    (Arc::new(notifier), Some(bus))
}

#[cfg(feature = "redis")]
fn redis_notifier(
    config: &CatalogConfig,
) -> anyhow::Result<(SharedNotifier, Option<Arc<ItemEventBus>>)> {
    use anyhow::Context as _;

    use crate::event_bus::RedisPubSubEventBus;

    let bus = RedisPubSubEventBus::new(&config.redis_url, config.events_topic.clone())
        .context("failed to create Redis pub/sub event bus")?;
    tracing::info!(topic = %config.events_topic, "publishing catalog events to redis");
    Ok((Arc::new(BusNotifier::with_topic(bus, config.events_topic.clone())), None))
}
