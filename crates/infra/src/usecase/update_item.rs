use rust_decimal::Decimal;

use catalog_core::{DomainResult, ItemId};
use catalog_items::{CatalogItem, ItemEventType};

use crate::error::{CatalogError, CatalogResult};
use crate::notifier::publish_best_effort;
use crate::store::CatalogStore;

use super::{SharedNotifier, SharedStore};

/// Mutations on existing items.
///
/// Every operation loads the item by id, applies one named entity mutation,
/// saves, and announces the change with its own event type. None of them
/// can change an item's code.
#[derive(Clone)]
pub struct UpdateItem {
    store: SharedStore,
    notifier: SharedNotifier,
}

impl UpdateItem {
    pub fn new(store: SharedStore, notifier: SharedNotifier) -> Self {
        Self { store, notifier }
    }

    pub fn update_fields(
        &self,
        id: ItemId,
        name: &str,
        description: Option<&str>,
        price: Decimal,
        category: Option<&str>,
    ) -> CatalogResult<CatalogItem> {
        tracing::info!(item_id = %id, "updating catalog item fields");
        self.mutate(id, ItemEventType::ItemFieldsUpdated, |item| {
            item.update_fields(name, description, price, category)
        })
    }

    pub fn update_price(&self, id: ItemId, new_price: Decimal) -> CatalogResult<CatalogItem> {
        tracing::info!(item_id = %id, %new_price, "updating catalog item price");
        self.mutate(id, ItemEventType::ItemPriceUpdated, |item| {
            item.update_price(new_price)
        })
    }

    pub fn activate(&self, id: ItemId) -> CatalogResult<CatalogItem> {
        tracing::info!(item_id = %id, "activating catalog item");
        self.mutate(id, ItemEventType::ItemActivated, |item| {
            item.activate();
            Ok(())
        })
    }

    pub fn deactivate(&self, id: ItemId) -> CatalogResult<CatalogItem> {
        tracing::info!(item_id = %id, "deactivating catalog item");
        self.mutate(id, ItemEventType::ItemDeactivated, |item| {
            item.deactivate();
            Ok(())
        })
    }

    fn mutate(
        &self,
        id: ItemId,
        event_type: ItemEventType,
        change: impl FnOnce(&mut CatalogItem) -> DomainResult<()>,
    ) -> CatalogResult<CatalogItem> {
        let mut item = self
            .store
            .find_by_id(id)?
            .ok_or_else(|| CatalogError::not_found_id(id))?;

        change(&mut item)?;

        let saved = self.store.save(item)?;
        publish_best_effort(&*self.notifier, event_type, &saved);

        tracing::info!(item_id = %id, %event_type, "catalog item updated");
        Ok(saved)
    }
}

impl core::fmt::Debug for UpdateItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("UpdateItem").finish_non_exhaustive()
    }
}
