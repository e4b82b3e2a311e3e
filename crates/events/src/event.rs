use chrono::{DateTime, Utc};

/// A domain-agnostic event.
///
/// Events are immutable facts about something that already happened. They
/// are broadcast after the change is persisted and are never read back by the
/// component that emitted them.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "ITEM_CREATED").
    fn event_type(&self) -> &'static str;

    /// Schema version for this event type.
    fn version(&self) -> u32 {
        1
    }

    /// When the event was produced.
    fn occurred_at(&self) -> DateTime<Utc>;
}
