use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use catalog_core::ItemId;
use catalog_events::Event;

use crate::item::CatalogItem;

/// Kind of change an [`ItemEvent`] announces.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemEventType {
    ItemCreated,
    ItemFieldsUpdated,
    ItemPriceUpdated,
    ItemActivated,
    ItemDeactivated,
}

impl ItemEventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemEventType::ItemCreated => "ITEM_CREATED",
            ItemEventType::ItemFieldsUpdated => "ITEM_FIELDS_UPDATED",
            ItemEventType::ItemPriceUpdated => "ITEM_PRICE_UPDATED",
            ItemEventType::ItemActivated => "ITEM_ACTIVATED",
            ItemEventType::ItemDeactivated => "ITEM_DEACTIVATED",
        }
    }
}

impl core::fmt::Display for ItemEventType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Broadcast message describing an item right after a change was saved.
///
/// Carries enough state for a consumer to mirror the item without querying
/// back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemEvent {
    pub event_type: ItemEventType,
    pub item_id: Option<ItemId>,
    pub code: String,
    pub name: String,
    pub price: Decimal,
    pub active: bool,
    pub timestamp: DateTime<Utc>,
}

impl ItemEvent {
    pub fn from_item(event_type: ItemEventType, item: &CatalogItem) -> Self {
        Self {
            event_type,
            item_id: item.id(),
            code: item.code().to_string(),
            name: item.name().to_string(),
            price: item.price(),
            active: item.is_active(),
            timestamp: Utc::now(),
        }
    }
}

impl Event for ItemEvent {
    fn event_type(&self) -> &'static str {
        self.event_type.as_str()
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
