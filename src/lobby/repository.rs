use std::sync::Arc;
use tracing::instrument;

use super::models::{LobbyModel, LOBBY_ID};
use crate::shared::AppError;
use crate::store::{run_transaction, Collection, DocumentKey, DocumentStore, RetryPolicy, Transaction};

/// Typed access to the lobby document
pub struct LobbyRepository {
    store: Arc<dyn DocumentStore>,
    retry: RetryPolicy,
}

impl LobbyRepository {
    pub fn new(store: Arc<dyn DocumentStore>, retry: RetryPolicy) -> Self {
        Self { store, retry }
    }

    pub fn key() -> DocumentKey {
        DocumentKey::new(Collection::Lobbies, LOBBY_ID)
    }

    /// Reads the lobby; a lobby that was never written reads as empty and waiting
    #[instrument(skip(self))]
    pub async fn get(&self) -> Result<LobbyModel, AppError> {
        match self.store.get(&Self::key()).await? {
            Some(document) => Ok(serde_json::from_value(document.body)?),
            None => Ok(LobbyModel::default()),
        }
    }

    /// Atomic read-modify-write of the lobby, creating it on first write
    pub async fn update<R, F>(&self, mutate: F) -> Result<Transaction<LobbyModel, R>, AppError>
    where
        R: Send,
        F: FnMut(&mut LobbyModel) -> Result<R, AppError> + Send,
    {
        run_transaction(
            self.store.as_ref(),
            &Self::key(),
            &self.retry,
            || Some(LobbyModel::default()),
            mutate,
        )
        .await
    }
}
