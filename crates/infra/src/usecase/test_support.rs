//! Test doubles for the use cases.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use rust_decimal::Decimal;

use catalog_core::ItemId;
use catalog_items::{CatalogItem, ItemEventType};

use crate::notifier::{EventNotifier, NotifyError};
use crate::store::{CatalogStore, InMemoryCatalogStore, RepositoryError};

pub fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

/// In-memory store that counts calls and can be told to fail.
#[derive(Debug, Default)]
pub struct RecordingStore {
    inner: InMemoryCatalogStore,
    saves: AtomicUsize,
    queries: AtomicUsize,
    fail_saves: AtomicBool,
    fail_reads: AtomicBool,
    conflict_on_save: AtomicBool,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    pub fn fail_saves(&self) {
        self.fail_saves.store(true, Ordering::SeqCst);
    }

    pub fn fail_reads(&self) {
        self.fail_reads.store(true, Ordering::SeqCst);
    }

    /// Simulate losing a check-then-insert race on the unique code.
    pub fn conflict_on_save(&self) {
        self.conflict_on_save.store(true, Ordering::SeqCst);
    }

    /// Seed an item without counting it as a save.
    pub fn seed(&self, item: CatalogItem) -> CatalogItem {
        self.inner.save(item).unwrap()
    }

    fn read(&self, operation: &'static str) -> Result<(), RepositoryError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(RepositoryError::access(operation, anyhow::anyhow!("database unavailable")));
        }
        Ok(())
    }
}

impl CatalogStore for RecordingStore {
    fn save(&self, item: CatalogItem) -> Result<CatalogItem, RepositoryError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(RepositoryError::access("save item", anyhow::anyhow!("disk full")));
        }
        if self.conflict_on_save.load(Ordering::SeqCst) {
            return Err(RepositoryError::conflict(item.code().as_str()));
        }
        self.inner.save(item)
    }

    fn find_by_id(&self, id: ItemId) -> Result<Option<CatalogItem>, RepositoryError> {
        self.read("find item by id")?;
        self.inner.find_by_id(id)
    }

    fn find_by_code(&self, code: &str) -> Result<Option<CatalogItem>, RepositoryError> {
        self.read("find item by code")?;
        self.inner.find_by_code(code)
    }

    fn find_all(&self) -> Result<Vec<CatalogItem>, RepositoryError> {
        self.read("list items")?;
        self.inner.find_all()
    }

    fn find_by_category(&self, category: &str) -> Result<Vec<CatalogItem>, RepositoryError> {
        self.read("list items by category")?;
        self.inner.find_by_category(category)
    }

    fn find_active(&self) -> Result<Vec<CatalogItem>, RepositoryError> {
        self.read("list active items")?;
        self.inner.find_active()
    }

    fn find_by_price_range(
        &self,
        min: Option<Decimal>,
        max: Option<Decimal>,
    ) -> Result<Vec<CatalogItem>, RepositoryError> {
        self.read("list items by price range")?;
        self.inner.find_by_price_range(min, max)
    }

    fn exists_by_code(&self, code: &str) -> Result<bool, RepositoryError> {
        self.read("check item code")?;
        self.inner.exists_by_code(code)
    }

    fn count_all(&self) -> Result<u64, RepositoryError> {
        self.read("count items")?;
        self.inner.count_all()
    }

    fn count_active(&self) -> Result<u64, RepositoryError> {
        self.read("count active items")?;
        self.inner.count_active()
    }

    fn delete(&self, id: ItemId) -> Result<bool, RepositoryError> {
        self.inner.delete(id)
    }
}

/// Notifier that records what it was asked to publish, optionally failing.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    published: Mutex<Vec<(ItemEventType, CatalogItem)>>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            published: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn published(&self) -> Vec<(ItemEventType, CatalogItem)> {
        self.published.lock().unwrap().clone()
    }

    pub fn event_types(&self) -> Vec<ItemEventType> {
        self.published().into_iter().map(|(t, _)| t).collect()
    }
}

impl EventNotifier for RecordingNotifier {
    fn publish(&self, event_type: ItemEventType, item: &CatalogItem) -> Result<(), NotifyError> {
        self.published.lock().unwrap().push((event_type, item.clone()));
        if self.fail {
            return Err(NotifyError::Transport("broker unreachable".to_string()));
        }
        Ok(())
    }
}
