// Shared transactional document store
//
// Every piece of game state lives in a versioned JSON document. Writers use
// compare-and-swap against the version they read, and subscribers receive a
// whole-document snapshot after every committed change.

// Public API - what other modules can use
pub use memory::InMemoryDocumentStore;
pub use models::{CasOutcome, Collection, DocumentKey, VersionedDocument};
pub use postgres::PostgresDocumentStore;
pub use transaction::{run_transaction, RetryPolicy, Transaction};

use async_trait::async_trait;
use tokio::sync::broadcast;

use crate::event::DocumentChanged;
use crate::shared::AppError;

// Internal modules
mod memory;
mod models;
mod postgres;
#[cfg(test)]
pub(crate) mod testing;
mod transaction;

/// Trait for document store operations
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Point read of a single document
    async fn get(&self, key: &DocumentKey) -> Result<Option<VersionedDocument>, AppError>;

    /// Atomically replaces the document if its version still equals `expected_version`
    ///
    /// `None` means the document must not exist yet.
    async fn compare_and_swap(
        &self,
        key: &DocumentKey,
        expected_version: Option<u64>,
        body: serde_json::Value,
    ) -> Result<CasOutcome, AppError>;

    /// Removes a document, returning whether it existed
    async fn delete(&self, key: &DocumentKey) -> Result<bool, AppError>;

    /// Subscribes to whole-document snapshots of one key
    async fn subscribe(&self, key: &DocumentKey) -> broadcast::Receiver<DocumentChanged>;
}
