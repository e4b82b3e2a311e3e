//! Event mechanics shared by the catalog: event trait, topic envelopes and a
//! pub/sub bus abstraction. Nothing in here knows about catalog items.

pub mod bus;
pub mod envelope;
pub mod event;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use envelope::EventEnvelope;
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
