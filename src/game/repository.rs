use std::sync::Arc;
use tracing::{debug, instrument};

use super::models::GameModel;
use crate::shared::AppError;
use crate::store::{
    run_transaction, CasOutcome, Collection, DocumentKey, DocumentStore, RetryPolicy, Transaction,
};

/// Typed access to game documents
pub struct GameRepository {
    store: Arc<dyn DocumentStore>,
    retry: RetryPolicy,
}

impl GameRepository {
    pub fn new(store: Arc<dyn DocumentStore>, retry: RetryPolicy) -> Self {
        Self { store, retry }
    }

    pub fn key(game_id: &str) -> DocumentKey {
        DocumentKey::new(Collection::Games, game_id)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, game_id: &str) -> Result<Option<GameModel>, AppError> {
        match self.store.get(&Self::key(game_id)).await? {
            Some(document) => Ok(Some(serde_json::from_value(document.body)?)),
            None => Ok(None),
        }
    }

    /// Persists a new game; fails if the id is already taken
    #[instrument(skip(self, game), fields(game_id = %game.id))]
    pub async fn create(&self, game: &GameModel) -> Result<(), AppError> {
        let body = serde_json::to_value(game)?;
        match self
            .store
            .compare_and_swap(&Self::key(&game.id), None, body)
            .await?
        {
            CasOutcome::Committed(_) => {
                debug!("Game document created");
                Ok(())
            }
            CasOutcome::Conflict => Err(AppError::StoreConflict(Self::key(&game.id).to_string())),
        }
    }

    /// Atomic read-modify-write of an existing game
    pub async fn update<R, F>(
        &self,
        game_id: &str,
        mutate: F,
    ) -> Result<Transaction<GameModel, R>, AppError>
    where
        R: Send,
        F: FnMut(&mut GameModel) -> Result<R, AppError> + Send,
    {
        run_transaction(
            self.store.as_ref(),
            &Self::key(game_id),
            &self.retry,
            || None,
            mutate,
        )
        .await
        .map_err(|e| match e {
            AppError::NotFound(_) => AppError::NotFound(format!("game {}", game_id)),
            other => other,
        })
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, game_id: &str) -> Result<bool, AppError> {
        self.store.delete(&Self::key(game_id)).await
    }
}
