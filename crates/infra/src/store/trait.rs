use std::sync::Arc;

use rust_decimal::Decimal;
use thiserror::Error;

use catalog_core::ItemId;
use catalog_items::CatalogItem;

/// Catalog store operation error.
///
/// These are **infrastructure errors**, kept apart from domain validation.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The store's unique constraint on `code` rejected a write.
    ///
    /// Raised when two writers race past the existence check with the same
    /// code; callers treat it exactly like a duplicate code.
    #[error("code already registered: {code}")]
    Conflict { code: String },

    /// Any other failure reaching the underlying storage.
    #[error("{operation} failed: {source}")]
    Access {
        operation: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl RepositoryError {
    pub fn conflict(code: impl Into<String>) -> Self {
        Self::Conflict { code: code.into() }
    }

    pub fn access(operation: &'static str, source: impl Into<anyhow::Error>) -> Self {
        Self::Access {
            operation,
            source: source.into(),
        }
    }
}

/// Persistence contract for catalog items.
///
/// - `save` inserts when the item has no id (assigning one) and updates
///   otherwise; the returned item is the persisted state.
/// - Codes are compared exactly; callers pass normalized codes.
/// - Either price bound may be absent, leaving that side unbounded.
/// - Every access failure surfaces as [`RepositoryError`].
///
/// Implementations must enforce code uniqueness themselves and report a
/// violation as [`RepositoryError::Conflict`].
pub trait CatalogStore: Send + Sync {
    fn save(&self, item: CatalogItem) -> Result<CatalogItem, RepositoryError>;

    fn find_by_id(&self, id: ItemId) -> Result<Option<CatalogItem>, RepositoryError>;

    fn find_by_code(&self, code: &str) -> Result<Option<CatalogItem>, RepositoryError>;

    fn find_all(&self) -> Result<Vec<CatalogItem>, RepositoryError>;

    fn find_by_category(&self, category: &str) -> Result<Vec<CatalogItem>, RepositoryError>;

    fn find_active(&self) -> Result<Vec<CatalogItem>, RepositoryError>;

    fn find_by_price_range(
        &self,
        min: Option<Decimal>,
        max: Option<Decimal>,
    ) -> Result<Vec<CatalogItem>, RepositoryError>;

    fn exists_by_code(&self, code: &str) -> Result<bool, RepositoryError>;

    fn count_all(&self) -> Result<u64, RepositoryError>;

    fn count_active(&self) -> Result<u64, RepositoryError>;

    /// Remove an item outright. Returns whether anything was removed.
    ///
    /// Store-level housekeeping: bypasses the item lifecycle and publishes
    /// nothing.
    fn delete(&self, id: ItemId) -> Result<bool, RepositoryError>;
}

impl<S> CatalogStore for Arc<S>
where
    S: CatalogStore + ?Sized,
{
    fn save(&self, item: CatalogItem) -> Result<CatalogItem, RepositoryError> {
        (**self).save(item)
    }

    fn find_by_id(&self, id: ItemId) -> Result<Option<CatalogItem>, RepositoryError> {
        (**self).find_by_id(id)
    }

    fn find_by_code(&self, code: &str) -> Result<Option<CatalogItem>, RepositoryError> {
        (**self).find_by_code(code)
    }

    fn find_all(&self) -> Result<Vec<CatalogItem>, RepositoryError> {
        (**self).find_all()
    }

    fn find_by_category(&self, category: &str) -> Result<Vec<CatalogItem>, RepositoryError> {
        (**self).find_by_category(category)
    }

    fn find_active(&self) -> Result<Vec<CatalogItem>, RepositoryError> {
        (**self).find_active()
    }

    fn find_by_price_range(
        &self,
        min: Option<Decimal>,
        max: Option<Decimal>,
    ) -> Result<Vec<CatalogItem>, RepositoryError> {
        (**self).find_by_price_range(min, max)
    }

    fn exists_by_code(&self, code: &str) -> Result<bool, RepositoryError> {
        (**self).exists_by_code(code)
    }

    fn count_all(&self) -> Result<u64, RepositoryError> {
        (**self).count_all()
    }

    fn count_active(&self) -> Result<u64, RepositoryError> {
        (**self).count_active()
    }

    fn delete(&self, id: ItemId) -> Result<bool, RepositoryError> {
        (**self).delete(id)
    }
}
