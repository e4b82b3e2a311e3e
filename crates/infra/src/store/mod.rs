//! Catalog persistence boundary.
//!
//! Defines the storage contract the use cases consume, without making any
//! assumption about the backing technology, plus an in-memory implementation
//! for tests and development.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryCatalogStore;
pub use r#trait::{CatalogStore, RepositoryError};
