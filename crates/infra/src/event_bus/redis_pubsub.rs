//! Redis pub/sub-backed event bus (optional).
//!
//! Redis pub/sub is not durable: subscribers that are offline miss messages.
//! That matches the catalog's best-effort notification contract.

use std::sync::mpsc;
use std::thread;

use redis::Commands;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use catalog_events::{EventBus, EventEnvelope, Subscription};

use crate::notifier::NotifyError;

#[derive(Debug, Error)]
pub enum RedisBusError {
    #[error("redis: {0}")]
    Redis(String),

    #[error("serialize: {0}")]
    Serialize(String),
}

impl From<RedisBusError> for NotifyError {
    fn from(value: RedisBusError) -> Self {
        match value {
            RedisBusError::Redis(msg) => NotifyError::Transport(msg),
            RedisBusError::Serialize(msg) => NotifyError::Serialize(msg),
        }
    }
}

/// Redis pub/sub bus for JSON event envelopes on a single channel.
#[derive(Debug, Clone)]
pub struct RedisPubSubEventBus {
    client: redis::Client,
    channel: String,
}

impl RedisPubSubEventBus {
    pub fn new(redis_url: impl AsRef<str>, channel: impl Into<String>) -> Result<Self, RedisBusError> {
        let client = redis::Client::open(redis_url.as_ref())
            .map_err(|e| RedisBusError::Redis(e.to_string()))?;
        Ok(Self {
            client,
            channel: channel.into(),
        })
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }
}

impl<E> EventBus<EventEnvelope<E>> for RedisPubSubEventBus
where
    E: Serialize + DeserializeOwned + Send + 'static,
{
    type Error = RedisBusError;

    fn publish(&self, message: EventEnvelope<E>) -> Result<(), Self::Error> {
        let payload = serde_json::to_string(&message)
            .map_err(|e| RedisBusError::Serialize(e.to_string()))?;

        let mut conn = self
            .client
            .get_connection()
            .map_err(|e| RedisBusError::Redis(e.to_string()))?;

        let _: i64 = conn
            .publish(&self.channel, payload)
            .map_err(|e| RedisBusError::Redis(e.to_string()))?;

        Ok(())
    }

    fn subscribe(&self) -> Subscription<EventEnvelope<E>> {
        let (tx, rx) = mpsc::channel();

        let client = self.client.clone();
        let channel = self.channel.clone();

        // Background thread that receives pub/sub messages and forwards them.
        thread::spawn(move || {
            let mut conn = match client.get_connection() {
                Ok(c) => c,
                Err(err) => {
                    tracing::warn!(error = %err, "redis subscription could not connect");
                    return;
                }
            };

            let mut pubsub = conn.as_pubsub();
            if pubsub.subscribe(&channel).is_err() {
                return;
            }

            loop {
                let msg = match pubsub.get_message() {
                    Ok(m) => m,
                    Err(_) => return,
                };

                let payload: String = match msg.get_payload() {
                    Ok(p) => p,
                    Err(_) => continue,
                };

                let envelope: EventEnvelope<E> = match serde_json::from_str(&payload) {
                    Ok(e) => e,
                    Err(err) => {
                        tracing::debug!(error = %err, "skipping undecodable redis message");
                        continue;
                    }
                };

                if tx.send(envelope).is_err() {
                    return;
                }
            }
        });

        Subscription::new(rx)
    }
}
