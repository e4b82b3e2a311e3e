use rust_decimal::Decimal;

use catalog_items::{CatalogItem, ItemCode, ItemEventType};

use crate::error::{CatalogError, CatalogResult};
use crate::notifier::publish_best_effort;
use crate::store::CatalogStore;

use super::{SharedNotifier, SharedStore};

/// Registers new catalog items.
#[derive(Clone)]
pub struct CreateItem {
    store: SharedStore,
    notifier: SharedNotifier,
}

impl CreateItem {
    pub fn new(store: SharedStore, notifier: SharedNotifier) -> Self {
        Self { store, notifier }
    }

    /// Create, persist and announce a new item.
    ///
    /// The code is checked for uniqueness before the item is even built, so
    /// a duplicate never reaches validation or the store. A uniqueness
    /// conflict reported by the store itself (a concurrent create won the
    /// race) is reported the same way.
    pub fn execute(
        &self,
        name: &str,
        code: &str,
        description: Option<&str>,
        price: Decimal,
        category: Option<&str>,
    ) -> CatalogResult<CatalogItem> {
        let normalized = ItemCode::normalize(code);
        tracing::info!(code = %normalized, "creating catalog item");

        if self.store.exists_by_code(&normalized)? {
            tracing::info!(code = %normalized, "rejecting duplicate item code");
            return Err(CatalogError::DuplicateCode(normalized));
        }

        let item = CatalogItem::new(name, &normalized, description, price, category)?;
        let saved = self.store.save(item)?;

        publish_best_effort(&*self.notifier, ItemEventType::ItemCreated, &saved);

        tracing::info!(item_id = ?saved.id(), code = %saved.code(), "catalog item created");
        Ok(saved)
    }
}

impl core::fmt::Debug for CreateItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CreateItem").finish_non_exhaustive()
    }
}
