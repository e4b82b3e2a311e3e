use rust_decimal::Decimal;

use catalog_core::ItemId;
use catalog_items::{CatalogItem, ItemCode};

use crate::error::{CatalogError, CatalogResult};
use crate::store::CatalogStore;

use super::SharedStore;

/// Read-only lookups over the catalog. Never saves, never publishes.
#[derive(Clone)]
pub struct QueryItems {
    store: SharedStore,
}

impl QueryItems {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub fn by_id(&self, id: ItemId) -> CatalogResult<CatalogItem> {
        tracing::debug!(item_id = %id, "querying catalog item by id");
        self.store
            .find_by_id(id)?
            .ok_or_else(|| CatalogError::not_found_id(id))
    }

    /// Accepts the code in any case or padding; it is normalized first.
    pub fn by_code(&self, code: &str) -> CatalogResult<CatalogItem> {
        let code = ItemCode::normalize(code);
        tracing::debug!(%code, "querying catalog item by code");
        self.store
            .find_by_code(&code)?
            .ok_or_else(|| CatalogError::not_found_code(&code))
    }

    pub fn all(&self) -> CatalogResult<Vec<CatalogItem>> {
        Ok(self.store.find_all()?)
    }

    pub fn active(&self) -> CatalogResult<Vec<CatalogItem>> {
        Ok(self.store.find_active()?)
    }

    /// Active items whose category matches, ignoring case.
    pub fn by_category(&self, category: &str) -> CatalogResult<Vec<CatalogItem>> {
        tracing::debug!(category, "querying catalog items by category");
        Ok(self.store.find_by_category(category)?)
    }

    /// Items priced within `[min, max]`. Either bound may be omitted.
    pub fn by_price_range(
        &self,
        min: Option<Decimal>,
        max: Option<Decimal>,
    ) -> CatalogResult<Vec<CatalogItem>> {
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(CatalogError::InvalidRange { min, max });
            }
        }
        tracing::debug!(?min, ?max, "querying catalog items by price range");
        Ok(self.store.find_by_price_range(min, max)?)
    }

    pub fn count_all(&self) -> CatalogResult<u64> {
        Ok(self.store.count_all()?)
    }

    pub fn count_active(&self) -> CatalogResult<u64> {
        Ok(self.store.count_active()?)
    }
}

impl core::fmt::Debug for QueryItems {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QueryItems").finish_non_exhaustive()
    }
}
