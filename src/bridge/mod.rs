//! The `bridge` module owns the MQTT side of the mirror: it connects to the
//! broker, subscribes to the full `#` wildcard, and feeds every accepted
//! message into the last-value store.
//!
//! The connection lifecycle is delegated to the client's event loop —
//! polling after an error lets it reconnect with its own backoff, and each
//! connection acknowledgment triggers a fresh subscription. Store failures
//! on this path are logged and swallowed; the next message for the topic
//! repairs the cached value.

use std::time::Duration;

use rumqttc::{AsyncClient, Event, MqttOptions, Packet, QoS};
use tracing::{debug, error, info, warn};

use crate::config::MqttSettings;
use crate::filter::is_interesting;
use crate::store::LastValueStore;

/// Delay before polling again after a connection error.
const RECONNECT_PAUSE: Duration = Duration::from_secs(1);

/// Mirrors accepted bus messages into the last-value store.
pub struct IngestBridge {
    store: LastValueStore,
    ttl_seconds: Option<u64>,
}

impl IngestBridge {
    pub fn new(store: LastValueStore, ttl_seconds: Option<u64>) -> Self {
        Self { store, ttl_seconds }
    }

    /// Connect to the broker and process messages until the task is aborted.
    ///
    /// Subscribes to `#` on every connection acknowledgment, so a reconnect
    /// re-establishes the subscription automatically.
    pub async fn run(&self, mqtt: &MqttSettings) {
        let mut options = MqttOptions::new(mqtt.client_id.clone(), mqtt.host.clone(), mqtt.port);
        options.set_keep_alive(Duration::from_secs(30));

        let (client, mut eventloop) = AsyncClient::new(options, 64);

        loop {
            match eventloop.poll().await {
                Ok(Event::Incoming(Packet::ConnAck(_))) => {
                    info!("connected to {}:{}, subscribing to #", mqtt.host, mqtt.port);
                    if let Err(e) = client.subscribe("#", QoS::AtMostOnce).await {
                        error!("subscribe failed: {e}");
                    }
                }
                Ok(Event::Incoming(Packet::Publish(publish))) => {
                    let payload = String::from_utf8_lossy(&publish.payload);
                    self.handle_message(&publish.topic, &payload);
                }
                Ok(_) => {}
                Err(e) => {
                    warn!("mqtt connection error: {e}, retrying");
                    tokio::time::sleep(RECONNECT_PAUSE).await;
                }
            }
        }
    }

    /// Apply the topic filter and upsert the store for one delivered message.
    ///
    /// Uninteresting topics are dropped before any store access. The prior
    /// value is read for diagnostics only; a failure there never blocks the
    /// write.
    pub fn handle_message(&self, topic: &str, payload: &str) {
        if !is_interesting(topic) {
            return;
        }

        match self.store.get(topic) {
            Ok(Some(previous)) => info!("{topic}: {previous} -> {payload}"),
            Ok(None) => debug!("{topic}: first value {payload}"),
            Err(e) => warn!("prior-value lookup failed for {topic}: {e}"),
        }

        if let Err(e) = self.store.set(topic, payload, self.ttl_seconds) {
            error!("store write failed for {topic}: {e}");
        }
    }
}

#[cfg(test)]
mod tests;
