//! Catalog items domain module.
//!
//! This crate contains the business rules for sellable catalog items,
//! implemented as deterministic domain logic (no IO, no HTTP, no storage).

pub mod code;
pub mod event;
pub mod item;
pub mod price;

pub use code::ItemCode;
pub use event::{ItemEvent, ItemEventType};
pub use item::{CatalogItem, ItemRecord};
pub use price::Price;
