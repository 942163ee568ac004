//! Store wrappers for exercising write races
#![allow(dead_code)] // Test utilities may not all be used in every test

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;

use spyfall::store::{CasOutcome, DocumentKey, VersionedDocument};
use spyfall::{AppError, DocumentChanged, DocumentStore, InMemoryDocumentStore};

/// Delegates to an in-memory store, optionally pausing after each read
///
/// With a pause, concurrent transactions read the same version and race on
/// the compare-and-swap; lost races are counted.
pub struct ContendedStore {
    inner: Arc<InMemoryDocumentStore>,
    read_delay: Duration,
    conflicts: AtomicUsize,
}

impl ContendedStore {
    pub fn new(inner: Arc<InMemoryDocumentStore>, read_delay: Duration) -> Self {
        Self {
            inner,
            read_delay,
            conflicts: AtomicUsize::new(0),
        }
    }

    pub fn conflicts(&self) -> usize {
        self.conflicts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentStore for ContendedStore {
    async fn get(&self, key: &DocumentKey) -> Result<Option<VersionedDocument>, AppError> {
        let document = self.inner.get(key).await?;
        if !self.read_delay.is_zero() {
            tokio::time::sleep(self.read_delay).await;
        }
        Ok(document)
    }

    async fn compare_and_swap(
        &self,
        key: &DocumentKey,
        expected_version: Option<u64>,
        body: serde_json::Value,
    ) -> Result<CasOutcome, AppError> {
        let outcome = self
            .inner
            .compare_and_swap(key, expected_version, body)
            .await?;
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
