use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::broadcast;

use super::models::{CasOutcome, DocumentKey, VersionedDocument};
use super::{DocumentStore, InMemoryDocumentStore};
use crate::event::DocumentChanged;
use crate::shared::AppError;

/// In-memory store that pauses after every read and counts lost CAS races
///
/// The pause lets concurrent transactions read the same version, so the
/// conflict and retry paths actually run.
pub(crate) struct ContendedStore {
    inner: InMemoryDocumentStore,
    read_delay: Duration,
    conflicts: AtomicUsize,
}

impl ContendedStore {
    pub(crate) fn new(read_delay: Duration) -> Self {
        Self {
            inner: InMemoryDocumentStore::new(),
            read_delay,
            conflicts: AtomicUsize::new(0),
        }
    }

    pub(crate) fn conflicts(&self) -> usize {
        self.conflicts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentStore for ContendedStore {
    async fn get(&self, key: &DocumentKey) -> Result<Option<VersionedDocument>, AppError> {
        let document = self.inner.get(key).await?;
        tokio::time::sleep(self.read_delay).await;
        Ok(document)
    }

    async fn compare_and_swap(
        &self,
        key: &DocumentKey,
        expected_version: Option<u64>,
        body: serde_json::Value,
    ) -> Result<CasOutcome, AppError> {
        let outcome = self.inner.compare_and_swap(key, expected_version, body).await?;
        if outcome == CasOutcome::Conflict {
            self.conflicts.fetch_add(1, Ordering::SeqCst);
        }
        Ok(outcome)
    }

    async fn delete(&self, key: &DocumentKey) -> Result<bool, AppError> {
        self.inner.delete(key).await
    }

    async fn subscribe(&self, key: &DocumentKey) -> broadcast::Receiver<DocumentChanged> {
        self.inner.subscribe(key).await
    }
}
