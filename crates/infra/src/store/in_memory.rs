use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use rust_decimal::Decimal;

use catalog_core::ItemId;
use catalog_items::CatalogItem;

use super::r#trait::{CatalogStore, RepositoryError};

#[derive(Debug, Default)]
struct Inner {
    items: BTreeMap<ItemId, CatalogItem>,
    last_id: u64,
}

impl Inner {
    fn code_taken_by_other(&self, code: &str, id: Option<ItemId>) -> bool {
        self.items
            .values()
            .any(|existing| existing.code().as_str() == code && existing.id() != id)
    }

    fn select(&self, predicate: impl Fn(&CatalogItem) -> bool) -> Vec<CatalogItem> {
        self.items.values().filter(|i| predicate(*i)).cloned().collect()
    }
}

/// In-memory catalog store.
///
/// Intended for tests/dev. Ids are assigned sequentially from 1 and results
/// come back ordered by id. The unique-code check runs under the write lock,
/// so concurrent saves of the same code cannot both succeed.
#[derive(Debug, Default)]
pub struct InMemoryCatalogStore {
    inner: RwLock<Inner>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self, operation: &'static str) -> Result<RwLockReadGuard<'_, Inner>, RepositoryError> {
        self.inner.read().map_err(|_| {
            tracing::error!(operation, "catalog store lock poisoned");
            RepositoryError::access(operation, anyhow::anyhow!("lock poisoned"))
        })
    }

    fn write(&self, operation: &'static str) -> Result<RwLockWriteGuard<'_, Inner>, RepositoryError> {
        self.inner.write().map_err(|_| {
            tracing::error!(operation, "catalog store lock poisoned");
            RepositoryError::access(operation, anyhow::anyhow!("lock poisoned"))
        })
    }
}

impl CatalogStore for InMemoryCatalogStore {
    fn save(&self, mut item: CatalogItem) -> Result<CatalogItem, RepositoryError> {
        let mut inner = self.write("save item")?;

        if inner.code_taken_by_other(item.code().as_str(), item.id()) {
            return Err(RepositoryError::conflict(item.code().as_str()));
        }

        let id = match item.id() {
            Some(id) => id,
            None => {
                let Some(next) = inner.last_id.checked_add(1) else {
                    tracing::error!(last_id = inner.last_id, "catalog item id space exhausted");
                    return Err(RepositoryError::access(
                        "save item",
                        anyhow::anyhow!("id space exhausted"),
                    ));
                };
                let id = ItemId::new(next);
                item.assign_id(id)
                    .map_err(|e| RepositoryError::access("save item", e))?;
                inner.last_id = id.value();
                id
            }
        };

        inner.last_id = inner.last_id.max(id.value());
        inner.items.insert(id, item.clone());
        tracing::debug!(item_id = %id, code = %item.code(), "catalog item stored");

        Ok(item)
    }

    fn find_by_id(&self, id: ItemId) -> Result<Option<CatalogItem>, RepositoryError> {
        let inner = self.read("find item by id")?;
        Ok(inner.items.get(&id).cloned())
    }

    fn find_by_code(&self, code: &str) -> Result<Option<CatalogItem>, RepositoryError> {
        let inner = self.read("find item by code")?;
        Ok(inner
            .items
            .values()
            .find(|i| i.code().as_str() == code)
            .cloned())
    }

    fn find_all(&self) -> Result<Vec<CatalogItem>, RepositoryError> {
        let inner = self.read("list items")?;
        Ok(inner.items.values().cloned().collect())
    }

    /// Case-insensitive category match, active items only.
    fn find_by_category(&self, category: &str) -> Result<Vec<CatalogItem>, RepositoryError> {
        let inner = self.read("list items by category")?;
        let wanted = category.trim().to_lowercase();
        Ok(inner.select(|i| {
            i.is_active()
                && i
                    .category()
                    .is_some_and(|c| c.to_lowercase() == wanted)
        }))
    }

    fn find_active(&self) -> Result<Vec<CatalogItem>, RepositoryError> {
        let inner = self.read("list active items")?;
        Ok(inner.select(CatalogItem::is_active))
    }

    /// Inclusive on both ends; an absent bound leaves that side open.
    fn find_by_price_range(
        &self,
        min: Option<Decimal>,
        max: Option<Decimal>,
    ) -> Result<Vec<CatalogItem>, RepositoryError> {
        let inner = self.read("list items by price range")?;
        Ok(inner.select(|i| {
            min.is_none_or(|min| i.price() >= min) && max.is_none_or(|max| i.price() <= max)
        }))
    }

    fn exists_by_code(&self, code: &str) -> Result<bool, RepositoryError> {
        let inner = self.read("check item code")?;
        Ok(inner.items.values().any(|i| i.code().as_str() == code))
    }

    fn count_all(&self) -> Result<u64, RepositoryError> {
        let inner = self.read("count items")?;
        Ok(inner.items.len() as u64)
    }

    fn count_active(&self) -> Result<u64, RepositoryError> {
        let inner = self.read("count active items")?;
        Ok(inner.items.values().filter(|i| i.is_active()).count() as u64)
    }

    fn delete(&self, id: ItemId) -> Result<bool, RepositoryError> {
        let mut inner = self.write("delete item")?;
        Ok(inner.items.remove(&id).is_some())
    }
}
