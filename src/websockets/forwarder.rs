use async_trait::async_trait;
use tokio::sync::mpsc;
use tracing::debug;

use super::messages::WebSocketMessage;
use crate::event::{DocumentChanged, SnapshotHandler, SubscriptionControl};
use crate::shared::AppError;

/// Pushes every snapshot of a document to one connection's outbound queue
pub struct SnapshotForwarder {
    outbound: mpsc::UnboundedSender<String>,
}

impl SnapshotForwarder {
    pub fn new(outbound: mpsc::UnboundedSender<String>) -> Self {
        Self { outbound }
    }
}

#[async_trait]
impl SnapshotHandler for SnapshotForwarder {
    async fn on_snapshot(&self, change: DocumentChanged) -> Result<SubscriptionControl, AppError> {
        let message = serde_json::to_string(&WebSocketMessage::snapshot(&change))?;

        if self.outbound.send(message).is_err() {
            debug!(key = %change.key, "Connection gone, ending subscription");
            return Ok(SubscriptionControl::Stop);
        }
        Ok(SubscriptionControl::Continue)
    }

    fn handler_name(&self) -> &'static str {
        "websocket_forwarder"
    }
}
