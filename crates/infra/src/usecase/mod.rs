//! Catalog use cases (application-level orchestration).
//!
//! Each use case composes a [`CatalogStore`] and, for mutations, an
//! [`EventNotifier`]:
//!
//! ```text
//! input → validate/load → mutate entity → save → publish (best effort) → item
//! ```
//!
//! Validation and lookup failures surface before any side effect. Store
//! failures propagate unchanged. Publish failures are logged and dropped.
//! Use cases hold no state of their own and are safe to share across threads.

pub mod create_item;
pub mod query_items;
pub mod update_item;

#[cfg(test)]
pub(crate) mod test_support;

pub use create_item::CreateItem;
pub use query_items::QueryItems;
pub use update_item::UpdateItem;

use std::sync::Arc;

use crate::notifier::EventNotifier;
use crate::store::CatalogStore;

pub type SharedStore = Arc<dyn CatalogStore>;
pub type SharedNotifier = Arc<dyn EventNotifier>;
