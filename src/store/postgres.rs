use async_trait::async_trait;
use std::time::Duration;
use sqlx::postgres::{PgListener, PgPoolOptions};
use sqlx::{PgPool, Row};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument, warn};

use super::models::{CasOutcome, DocumentKey, VersionedDocument};
use super::transaction::RetryPolicy;
use super::DocumentStore;
use crate::event::{ChangeBus, DocumentChanged};
use crate::shared::AppError;

/// Postgres channel carrying `collection/id` keys of changed documents
const CHANGE_CHANNEL: &str = "spyfall_documents";

/// PostgreSQL implementation of DocumentStore
///
/// Every commit issues a NOTIFY; the listener task started by
/// [`PostgresDocumentStore::spawn_change_listener`] turns those into snapshots,
/// so subscribers on any server instance see each other's writes.
#[derive(Clone)]
pub struct PostgresDocumentStore {
    pool: PgPool,
    bus: ChangeBus,
}

impl PostgresDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            bus: ChangeBus::new(),
        }
    }

    pub async fn connect(database_url: &str) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Creates the documents table when it does not exist yet
    pub async fn ensure_schema(&self) -> Result<(), AppError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS documents (
                collection TEXT NOT NULL,
                id TEXT NOT NULL,
                version BIGINT NOT NULL,
                body JSONB NOT NULL,
                updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
                PRIMARY KEY (collection, id)
            )",
        )
        .execute(&self.pool)
        .await?;

        info!("Document schema ready");
        Ok(())
    }

    /// Starts forwarding database notifications onto the change bus
    ///
    /// The task outlives dropped connections: it backs off, re-LISTENs and then
    /// republishes every subscribed document, since notifications sent while
    /// disconnected are gone.
    pub async fn spawn_change_listener(&self) -> Result<JoinHandle<()>, AppError> {
        let mut listener = PgListener::connect_with(&self.pool).await?;
        listener.listen(CHANGE_CHANNEL).await?;

        let store = self.clone();
        info!(channel = CHANGE_CHANNEL, "Listening for document changes");

        Ok(tokio::spawn(async move {
            let backoff = listener_backoff();
            let mut failures: u32 = 0;
            let mut reconnect = false;

            loop {
                if reconnect {
                    if let Err(e) = relisten(&mut listener).await {
                        let delay = backoff.delay_for(failures);
                        failures = failures.saturating_add(1);
                        warn!(
                            error = %e,
                            failures = failures,
                            delay_ms = delay.as_millis() as u64,
                            "Change listener reconnect failed"
                        );
                        tokio::time::sleep(delay).await;
                        continue;
                    }

                    reconnect = false;
                    failures = 0;
                    let republished = republish_subscribed(&store.bus, &store).await;
                    info!(documents = republished, "Change listener reconnected");
                }

                match listener.try_recv().await {
                    Ok(Some(notification)) => store.forward(notification.payload()).await,
                    Ok(None) => {
                        warn!("Change listener connection lost");
                        reconnect = true;
                    }
                    Err(e) => {
                        let delay = backoff.delay_for(failures);
                        failures = failures.saturating_add(1);
                        error!(error = %e, delay_ms = delay.as_millis() as u64, "Change listener failed");
                        reconnect = true;
                        tokio::time::sleep(delay).await;
                    }
                }
            }
        }))
    }

    /// Turns one `collection/id` notification into a snapshot on the bus
    async fn forward(&self, payload: &str) {
        let key = match DocumentKey::parse(payload) {
            Some(key) => key,
            None => {
                warn!(payload = payload, "Ignoring malformed change notification");
                return;
            }
        };

        match snapshot_of(self, key).await {
            Some(change) => self.bus.emit(change).await,
            None => debug!(payload = payload, "Dropping change notification"),
        }
    }

    async fn fetch(&self, key: &DocumentKey) -> Result<Option<VersionedDocument>, AppError> {
        let row = sqlx::query("SELECT version, body FROM documents WHERE collection = $1 AND id = $2")
            .bind(key.collection.as_ref())
            .bind(&key.id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|row| VersionedDocument {
            version: row.get::<i64, _>("version") as u64,
            body: row.get("body"),
        }))
    }
}

#[async_trait]
impl DocumentStore for PostgresDocumentStore {
    #[instrument(skip(self), fields(key = %key))]
    async fn get(&self, key: &DocumentKey) -> Result<Option<VersionedDocument>, AppError> {
        self.fetch(key).await
    }

    #[instrument(skip(self, body), fields(key = %key))]
    async fn compare_and_swap(
        &self,
        key: &DocumentKey,
        expected_version: Option<u64>,
        body: serde_json::Value,
    ) -> Result<CasOutcome, AppError> {
        let mut tx = self.pool.begin().await?;

        let row = match expected_version {
            None => {
                sqlx::query(
                    "INSERT INTO documents (collection, id, version, body) VALUES ($1, $2, 1, $3)
                     ON CONFLICT (collection, id) DO NOTHING
                     RETURNING version",
                )
                .bind(key.collection.as_ref())
                .bind(&key.id)
                .bind(&body)
                .fetch_optional(&mut *tx)
                .await?
            }
            Some(version) => {
                sqlx::query(
                    "UPDATE documents SET body = $3, version = version + 1, updated_at = now()
                     WHERE collection = $1 AND id = $2 AND version = $4
                     RETURNING version",
                )
                .bind(key.collection.as_ref())
                .bind(&key.id)
                .bind(&body)
                .bind(version as i64)
                .fetch_optional(&mut *tx)
                .await?
            }
        };

        let version = match row {
            Some(row) => row.get::<i64, _>("version") as u64,
            None => {
                debug!(expected = ?expected_version, "Version mismatch, rejecting write");
                tx.rollback().await?;
                return Ok(CasOutcome::Conflict);
            }
        };

        sqlx::query("SELECT pg_notify($1, $2)")
            .bind(CHANGE_CHANNEL)
            .bind(key.to_string())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        debug!(version = version, "Document committed");
        Ok(CasOutcome::Committed(VersionedDocument { version, body }))
    }

    #[instrument(skip(self), fields(key = %key))]
    async fn delete(&self, key: &DocumentKey) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM documents WHERE collection = $1 AND id = $2")
            .bind(key.collection.as_ref())
            .bind(&key.id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        sqlx::query("SELECT pg_notify($1, $2)")
            .bind(CHANGE_CHANNEL)
            .bind(key.to_string())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        debug!("Document deleted");
        Ok(true)
    }

    async fn subscribe(&self, key: &DocumentKey) -> broadcast::Receiver<DocumentChanged> {
        self.bus.subscribe(key).await
    }
}

fn listener_backoff() -> RetryPolicy {
    RetryPolicy {
        max_attempts: u32::MAX,
        base_delay: Duration::from_millis(250),
        max_delay: Duration::from_secs(30),
    }
}

/// Re-establishes the LISTEN after the connection dropped
async fn relisten(listener: &mut PgListener) -> Result<(), sqlx::Error> {
    // Both calls reconnect on demand; the pair leaves exactly one channel registered
    listener.unlisten(CHANGE_CHANNEL).await?;
    listener.listen(CHANGE_CHANNEL).await
}

/// Current snapshot of a document, a deletion marker when it is gone
async fn snapshot_of(store: &dyn DocumentStore, key: DocumentKey) -> Option<DocumentChanged> {
    match store.get(&key).await {
        Ok(Some(document)) => Some(DocumentChanged::updated(key, &document)),
        Ok(None) => Some(DocumentChanged::deleted(key, 0)),
        Err(e) => {
            warn!(key = %key, error = %e, "Failed to load changed document");
            None
        }
    }
}

/// Re-emits the current snapshot of every document someone is subscribed to
///
/// Subscriptions skip versions they already delivered, so the repeat is harmless.
pub(crate) async fn republish_subscribed(bus: &ChangeBus, store: &dyn DocumentStore) -> usize {
    let mut republished = 0;
    for key in bus.subscribed_keys().await {
        if let Some(change) = snapshot_of(store, key).await {
            bus.emit(change).await;
            republished += 1;
        }
    }
    republished
}
