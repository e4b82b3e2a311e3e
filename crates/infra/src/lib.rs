//! Infrastructure layer: stores, notifiers, use cases and their wiring.

pub mod config;
pub mod error;
pub mod event_bus;
pub mod notifier;
pub mod services;
pub mod store;
pub mod usecase;


pub use config::{CatalogConfig, NotifierKind};
pub use error::{CatalogError, CatalogResult};
pub use notifier::{BusNotifier, EventNotifier, NoopNotifier, NotifyError};
pub use services::{CatalogServices, ItemEventBus, build_services};
pub use store::{CatalogStore, InMemoryCatalogStore, RepositoryError};
pub use usecase::{CreateItem, QueryItems, UpdateItem};
