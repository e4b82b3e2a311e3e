//! Runtime configuration for wiring the catalog services.
//!
//! Read from the process environment:
//!
//! - `CATALOG_EVENTS_TOPIC`: topic stamped on published envelopes
//!   (default `catalog-item-events`)
//! - `CATALOG_NOTIFIER`: `in-memory`, `redis` or `none` (default `in-memory`)
//! - `REDIS_URL`: used when the notifier is `redis`
//!   (default `redis://localhost:6379`)
//!
//! Unrecognized values fall back to the default with a warning.

use core::str::FromStr;

use crate::notifier::DEFAULT_TOPIC;

pub const DEFAULT_REDIS_URL: &str = "redis://localhost:6379";

/// Where item events go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotifierKind {
    /// Process-local bus; subscribers live in the same process.
    #[default]
    InMemory,
    /// Redis pub/sub. Requires the `redis` feature.
    Redis,
    /// Events are dropped.
    None,
}

impl FromStr for NotifierKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "in-memory" | "in_memory" | "memory" => Ok(Self::InMemory),
            "redis" => Ok(Self::Redis),
            "none" | "off" => Ok(Self::None),
            other => Err(format!("unknown notifier kind: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub events_topic: String,
    pub notifier: NotifierKind,
    pub redis_url: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            events_topic: DEFAULT_TOPIC.to_string(),
            notifier: NotifierKind::default(),
            redis_url: DEFAULT_REDIS_URL.to_string(),
        }
    }
}

impl CatalogConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let notifier = match get("CATALOG_NOTIFIER") {
            Some(raw) => raw.parse().unwrap_or_else(|err| {
                tracing::warn!(%err, "invalid CATALOG_NOTIFIER, using in-memory");
                NotifierKind::default()
            }),
            None => defaults.notifier,
        };

        Self {
            events_topic: get("CATALOG_EVENTS_TOPIC")
                .map(|t| t.trim().to_string())
                .unwrap_or(defaults.events_topic),
            notifier,
            redis_url: get("REDIS_URL").unwrap_or(defaults.redis_url),
        }
    }
}
