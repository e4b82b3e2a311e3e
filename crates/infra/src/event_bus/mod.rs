//! Infrastructure event bus implementations.
//!
//! The bus abstraction lives in `catalog-events` as pure mechanics; this
//! module provides transport-backed implementations (e.g. Redis).

#[cfg(feature = "redis")]
pub mod redis_pubsub;

#[cfg(feature = "redis")]
pub use redis_pubsub::{RedisBusError, RedisPubSubEventBus};
