use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};
use tracing::debug;

use super::events::DocumentChanged;
use crate::store::DocumentKey;

const CHANNEL_CAPACITY: usize = 100;

/// In-process fan-out of document snapshots
///
/// One broadcast channel per document key, created on first use.
#[derive(Debug, Clone, Default)]
pub struct ChangeBus {
    channels: Arc<RwLock<HashMap<DocumentKey, broadcast::Sender<DocumentChanged>>>>,
}

impl ChangeBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes a snapshot to every subscriber of its key
    pub async fn emit(&self, change: DocumentChanged) {
        let channels = self.channels.read().await;

        match channels.get(&change.key) {
            Some(sender) => {
                let key = change.key.clone();
                let version = change.version;
                match sender.send(change) {
                    Ok(receivers) => {
                        debug!(key = %key, version = version, receivers = receivers, "Snapshot emitted");
                    }
                    Err(_) => {
                        debug!(key = %key, "Snapshot emitted with no receivers");
                    }
                }
            }
            None => {
                debug!(key = %change.key, "No subscribers for document");
            }
        }
    }

    /// Subscribes to snapshots of one document
    pub async fn subscribe(&self, key: &DocumentKey) -> broadcast::Receiver<DocumentChanged> {
        let channels = self.channels.read().await;

        if let Some(sender) = channels.get(key) {
            return sender.subscribe();
        }
        drop(channels);

        debug!(key = %key, "Creating new document channel for subscription");
        let mut channels = self.channels.write().await;
        channels
            .entry(key.clone())
            .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0)
            .subscribe()
    }

    /// Keys that currently have at least one live subscriber
    pub async fn subscribed_keys(&self) -> Vec<DocumentKey> {
        self.channels
            .read()
            .await
            .iter()
            .filter(|(_, sender)| sender.receiver_count() > 0)
            .map(|(key, _)| key.clone())
            .collect()
    }

    /// Number of live subscribers for a key
    pub async fn receiver_count(&self, key: &DocumentKey) -> usize {
        self.channels
            .read()
            .await
            .get(key)
            .map(|sender| sender.receiver_count())
            .unwrap_or(0)
    }
}
