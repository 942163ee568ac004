use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tokio::sync::broadcast;
use tracing::{debug, instrument};

use super::models::{CasOutcome, DocumentKey, VersionedDocument};
use super::DocumentStore;
use crate::event::{ChangeBus, DocumentChanged};
use crate::shared::AppError;

/// In-memory implementation of DocumentStore for development and testing
///
/// Data is stored in memory and will be lost when the application restarts.
/// Snapshots are published on the in-process change bus after each commit.
pub struct InMemoryDocumentStore {
    documents: Mutex<HashMap<DocumentKey, VersionedDocument>>,
    bus: ChangeBus,
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryDocumentStore {
    /// Creates a new empty in-memory store
    pub fn new() -> Self {
        Self {
            documents: Mutex::new(HashMap::new()),
            bus: ChangeBus::new(),
        }
    }

    /// Returns the current number of documents in the store
    pub fn document_count(&self) -> usize {
        self.documents
            .lock()
            .map(|documents| documents.len())
            .unwrap_or(0)
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    #[instrument(skip(self), fields(key = %key))]
    async fn get(&self, key: &DocumentKey) -> Result<Option<VersionedDocument>, AppError> {
        let documents = self.documents.lock().map_err(|_| AppError::Internal)?;
        Ok(documents.get(key).cloned())
    }

    #[instrument(skip(self, body), fields(key = %key))]
    async fn compare_and_swap(
        &self,
        key: &DocumentKey,
        expected_version: Option<u64>,
        body: serde_json::Value,
    ) -> Result<CasOutcome, AppError> {
        let committed = {
            let mut documents = self.documents.lock().map_err(|_| AppError::Internal)?;
            let current_version = documents.get(key).map(|doc| doc.version);

            if current_version != expected_version {
                debug!(
                    expected = ?expected_version,
                    current = ?current_version,
                    "Version mismatch, rejecting write"
                );
                return Ok(CasOutcome::Conflict);
            }

            let stored = VersionedDocument {
                version: current_version.unwrap_or(0) + 1,
                body,
            };
            documents.insert(key.clone(), stored.clone());
            stored
        };

        debug!(version = committed.version, "Document committed in memory");
        self.bus
            .emit(DocumentChanged::updated(key.clone(), &committed))
            .await;

        Ok(CasOutcome::Committed(committed))
    }

    #[instrument(skip(self), fields(key = %key))]
    async fn delete(&self, key: &DocumentKey) -> Result<bool, AppError> {
        let removed = {
            let mut documents = self.documents.lock().map_err(|_| AppError::Internal)?;
            documents.remove(key)
        };

        match removed {
            Some(doc) => {
                debug!("Document deleted from memory");
                self.bus
                    .emit(DocumentChanged::deleted(key.clone(), doc.version + 1))
                    .await;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn subscribe(&self, key: &DocumentKey) -> broadcast::Receiver<DocumentChanged> {
        self.bus.subscribe(key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Collection;
    use serde_json::json;

    fn key(id: &str) -> DocumentKey {
        DocumentKey::new(Collection::Games, id)
    }

    #[tokio::test]
    async fn test_create_and_get_document() {
        let store = InMemoryDocumentStore::new();

        let outcome = store
            .compare_and_swap(&key("g1"), None, json!({"status": "in-progress"}))
            .await
            .unwrap();
        assert!(matches!(outcome, CasOutcome::Committed(ref doc) if doc.version == 1));

        let doc = store.get(&key("g1")).await.unwrap().unwrap();
        assert_eq!(doc.version, 1);
        assert_eq!(doc.body["status"], "in-progress");
        assert_eq!(store.document_count(), 1);
    }

    #[tokio::test]
    async fn test_get_nonexistent_document() {
        let store = InMemoryDocumentStore::new();
        assert!(store.get(&key("missing")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_twice_conflicts() {
        let store = InMemoryDocumentStore::new();
        store
            .compare_and_swap(&key("g1"), None, json!({}))
            .await
            .unwrap();

        let second = store
            .compare_and_swap(&key("g1"), None, json!({}))
            .await
            .unwrap();
        assert_eq!(second, CasOutcome::Conflict);
    }

    #[tokio::test]
    async fn test_stale_version_conflicts() {
        let store = InMemoryDocumentStore::new();
        store
            .compare_and_swap(&key("g1"), None, json!({"n": 1}))
            .await
            .unwrap();
        store
            .compare_and_swap(&key("g1"), Some(1), json!({"n": 2}))
            .await
            .unwrap();

        let stale = store
            .compare_and_swap(&key("g1"), Some(1), json!({"n": 3}))
            .await
            .unwrap();
        assert_eq!(stale, CasOutcome::Conflict);

        let doc = store.get(&key("g1")).await.unwrap().unwrap();
        assert_eq!(doc.version, 2);
        assert_eq!(doc.body["n"], 2);
    }

    #[tokio::test]
    async fn test_subscribers_receive_snapshots() {
        let store = InMemoryDocumentStore::new();
        let mut receiver = store.subscribe(&key("g1")).await;

        store
            .compare_and_swap(&key("g1"), None, json!({"n": 1}))
            .await
            .unwrap();
        store.delete(&key("g1")).await.unwrap();

        let first = receiver.recv().await.unwrap();
        assert_eq!(first.version, 1);
        assert_eq!(first.body, Some(json!({"n": 1})));

        let second = receiver.recv().await.unwrap();
        assert!(second.is_deleted());
    }

    #[tokio::test]
    async fn test_delete_missing_document() {
        let store = InMemoryDocumentStore::new();
        assert!(!store.delete(&key("missing")).await.unwrap());
    }
}
