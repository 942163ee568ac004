use async_trait::async_trait;

use super::events::DocumentChanged;
use crate::shared::AppError;

/// What a subscription should do after a snapshot was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionControl {
    Continue,
    Stop,
}

/// Trait for components that react to document snapshots
#[async_trait]
pub trait SnapshotHandler: Send + Sync {
    /// Handle one snapshot
    ///
    /// Snapshots arrive in commit order but may skip versions when the
    /// handler falls behind; only the latest state is guaranteed.
    async fn on_snapshot(&self, change: DocumentChanged) -> Result<SubscriptionControl, AppError>;

    /// Get a human-readable name for this handler (for logging/debugging)
    fn handler_name(&self) -> &'static str;
}
