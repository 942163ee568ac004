use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::events::DocumentChanged;
use super::handler::{SnapshotHandler, SubscriptionControl};
use crate::store::{DocumentKey, DocumentStore};

/// Routes snapshots of one document to a handler
pub struct DocumentSubscription {
    key: DocumentKey,
    handler: Arc<dyn SnapshotHandler>,
    store: Arc<dyn DocumentStore>,
}

impl DocumentSubscription {
    pub fn new(
        key: DocumentKey,
        handler: Arc<dyn SnapshotHandler>,
        store: Arc<dyn DocumentStore>,
    ) -> Self {
        Self {
            key,
            handler,
            store,
        }
    }

    /// Start the subscription - spawns a background task that first delivers the
    /// current state of the document and then every later snapshot
    pub async fn start(self) -> JoinHandle<()> {
        let key = self.key.clone();
        let handler_name = self.handler.handler_name();

        info!(key = %key, handler = handler_name, "Starting document subscription");

        // Subscribe before reading so no commit can fall between the two
        let mut receiver = self.store.subscribe(&key).await;

        tokio::spawn(async move {
            let initial = match self.store.get(&key).await {
                Ok(Some(document)) => Some(DocumentChanged::updated(key.clone(), &document)),
                Ok(None) => None,
                Err(e) => {
                    warn!(key = %key, handler = handler_name, error = %e, "Failed to read initial snapshot");
                    None
                }
            };

            // Highest version delivered so far; reset by a delete
            let mut seen = 0;

            if let Some(change) = initial {
                seen = change.version;
                if self.deliver(change).await == SubscriptionControl::Stop {
                    return;
                }
            }

            loop {
                match receiver.recv().await {
                    Ok(change) => {
                        if !change.is_deleted() && change.version <= seen {
                            debug!(key = %key, version = change.version, "Skipping stale snapshot");
                            continue;
                        }
                        seen = if change.is_deleted() { 0 } else { change.version };
                        if self.deliver(change).await == SubscriptionControl::Stop {
                            break;
                        }
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        warn!(
                            key = %key,
                            handler = handler_name,
                            skipped = skipped,
                            "Subscription lagged, continuing with newer snapshots"
                        );
                    }
                    Err(RecvError::Closed) => break,
                }
            }

            debug!(key = %key, handler = handler_name, "Document subscription ended");
        })
    }

    async fn deliver(&self, change: DocumentChanged) -> SubscriptionControl {
        let version = change.version;
        match self.handler.on_snapshot(change).await {
            Ok(control) => control,
            Err(e) => {
                warn!(
                    key = %self.key,
                    handler = self.handler.handler_name(),
                    version = version,
                    error = %e,
                    "Snapshot handler failed"
                );
                SubscriptionControl::Continue
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::AppError;
    use crate::store::{CasOutcome, Collection, InMemoryDocumentStore};
    use async_trait::async_trait;
    use serde_json::json;
    use std::time::Duration;
    use tokio::sync::mpsc;

    struct Recorder {
        sender: mpsc::UnboundedSender<DocumentChanged>,
        stop_on_delete: bool,
    }

    #[async_trait]
    impl SnapshotHandler for Recorder {
        async fn on_snapshot(
            &self,
            change: DocumentChanged,
        ) -> Result<SubscriptionControl, AppError> {
            let deleted = change.is_deleted();
            let _ = self.sender.send(change);
            if deleted && self.stop_on_delete {
                Ok(SubscriptionControl::Stop)
            } else {
                Ok(SubscriptionControl::Continue)
            }
        }

        fn handler_name(&self) -> &'static str {
            "recorder"
        }
    }

    #[tokio::test]
    async fn test_delivers_current_state_then_updates() {
        let store: Arc<dyn DocumentStore> = Arc::new(InMemoryDocumentStore::new());
        let key = DocumentKey::new(Collection::Lobbies, "main");
        store
            .compare_and_swap(&key, None, json!({"n": 1}))
            .await
            .unwrap();

        let (sender, mut received) = mpsc::unbounded_channel();
        let handle = DocumentSubscription::new(
            key.clone(),
            Arc::new(Recorder {
                sender,
                stop_on_delete: true,
            }),
            store.clone(),
        )
        .start()
        .await;

        let first = received.recv().await.unwrap();
        assert_eq!(first.version, 1);

        let outcome = store
            .compare_and_swap(&key, Some(1), json!({"n": 2}))
            .await
            .unwrap();
        assert!(matches!(outcome, CasOutcome::Committed(_)));

        let second = received.recv().await.unwrap();
        assert_eq!(second.body, Some(json!({"n": 2})));

        store.delete(&key).await.unwrap();
        let third = received.recv().await.unwrap();
        assert!(third.is_deleted());

        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("subscription should stop after delete")
            .unwrap();
    }
}
