use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use super::models::{CasOutcome, DocumentKey};
use super::DocumentStore;
use crate::shared::AppError;

/// Bounded exponential backoff for conflicting writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 8,
            base_delay: Duration::from_millis(5),
            max_delay: Duration::from_millis(200),
        }
    }
}

impl RetryPolicy {
    /// Delay before retrying after the given (zero-based) failed attempt
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 1u32 << attempt.min(16);
        self.base_delay.saturating_mul(factor).min(self.max_delay)
    }
}

/// The outcome of a read-modify-write transaction
#[derive(Debug, Clone)]
pub struct Transaction<T, R> {
    /// The document as it stands after the transaction
    pub document: T,
    /// Whatever the mutation closure returned
    pub output: R,
    /// False when the mutation left the document unchanged and nothing was written
    pub written: bool,
}

/// Runs a read-modify-write transaction against one document
///
/// The closure sees a fresh copy of the document on every attempt and may run
/// more than once. Returning an error aborts without writing. A document that
/// does not exist is created from `init`, or reported as `NotFound` when
/// `init` yields nothing.
pub async fn run_transaction<T, R, I, F>(
    store: &dyn DocumentStore,
    key: &DocumentKey,
    policy: &RetryPolicy,
    init: I,
    mut mutate: F,
) -> Result<Transaction<T, R>, AppError>
where
    T: Serialize + DeserializeOwned + Send,
    R: Send,
    I: Fn() -> Option<T> + Send,
    F: FnMut(&mut T) -> Result<R, AppError> + Send,
{
    let attempts = policy.max_attempts.max(1);

    for attempt in 0..attempts {
        let (mut document, expected_version) = match store.get(key).await? {
            Some(stored) => (serde_json::from_value::<T>(stored.body)?, Some(stored.version)),
            None => match init() {
                Some(document) => (document, None),
                None => return Err(AppError::NotFound(format!("{} does not exist", key))),
            },
        };

        let before = serde_json::to_value(&document)?;
        let output = mutate(&mut document)?;
        let after = serde_json::to_value(&document)?;

        if before == after {
            debug!(key = %key, "Transaction left document unchanged");
            return Ok(Transaction {
                document,
                output,
                written: false,
            });
        }

        match store.compare_and_swap(key, expected_version, after).await? {
            CasOutcome::Committed(stored) => {
                debug!(key = %key, version = stored.version, attempt = attempt + 1, "Transaction committed");
                return Ok(Transaction {
                    document,
                    output,
                    written: true,
                });
            }
            CasOutcome::Conflict => {
                let delay = policy.delay_for(attempt);
                debug!(
                    key = %key,
                    attempt = attempt + 1,
                    delay_ms = delay.as_millis() as u64,
                    "Write conflict, retrying"
                );
                tokio::time::sleep(delay).await;
            }
        }
    }

    warn!(key = %key, attempts = attempts, "Transaction gave up after repeated conflicts");
    Err(AppError::StoreConflict(key.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::testing::ContendedStore;
    use crate::store::{Collection, InMemoryDocumentStore, VersionedDocument};
    use async_trait::async_trait;
    use serde::Deserialize;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;
    use tokio::sync::broadcast;

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    struct Counter {
        value: u32,
    }

    fn key() -> DocumentKey {
        DocumentKey::new(Collection::Games, "counter")
    }

    fn fast_policy() -> RetryPolicy {
        RetryPolicy {
            max_attempts: 50,
            base_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(2),
        }
    }

    #[tokio::test]
    async fn test_missing_document_without_init_is_not_found() {
        let store = InMemoryDocumentStore::new();

        let result = run_transaction::<Counter, (), _, _>(
            &store,
            &key(),
            &fast_policy(),
            || None,
            |_| Ok(()),
        )
        .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_unchanged_document_is_not_written() {
        let store = InMemoryDocumentStore::new();

        let tx = run_transaction(
            &store,
            &key(),
            &fast_policy(),
            || Some(Counter::default()),
            |_counter: &mut Counter| Ok(()),
        )
        .await
        .unwrap();

        assert!(!tx.written);
        assert_eq!(store.document_count(), 0);
    }

    #[tokio::test]
    async fn test_closure_error_leaves_state_unchanged() {
        let store = InMemoryDocumentStore::new();
        run_transaction(
            &store,
            &key(),
            &fast_policy(),
            || Some(Counter::default()),
            |counter: &mut Counter| {
                counter.value = 1;
                Ok(())
            },
        )
        .await
        .unwrap();

        let result = run_transaction(
            &store,
            &key(),
            &fast_policy(),
            || Some(Counter::default()),
            |counter: &mut Counter| -> Result<(), AppError> {
                counter.value = 99;
                Err(AppError::BadRequest("nope".to_string()))
            },
        )
        .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
        let stored = store.get(&key()).await.unwrap().unwrap();
        assert_eq!(stored.body["value"], 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_increments_are_not_lost() {
        let store = Arc::new(ContendedStore::new(Duration::from_millis(2)));
        let mut handles = Vec::new();

        for _ in 0..20 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                run_transaction(
                    store.as_ref(),
                    &key(),
                    &fast_policy(),
                    || Some(Counter::default()),
                    |counter: &mut Counter| {
                        counter.value += 1;
                        Ok(())
                    },
                )
                .await
                .unwrap()
            }));
        }

        for handle in handles {
            assert!(handle.await.unwrap().written);
        }

        let stored = store.get(&key()).await.unwrap().unwrap();
        assert_eq!(stored.body["value"], 20);
        assert_eq!(stored.version, 20);
        assert!(store.conflicts() > 0, "writers never raced");
    }

    /// Store that rejects every write so the retry budget runs out
    struct AlwaysConflictingStore {
        attempts: AtomicU32,
    }

    #[async_trait]
    impl DocumentStore for AlwaysConflictingStore {
        async fn get(&self, _key: &DocumentKey) -> Result<Option<VersionedDocument>, AppError> {
            Ok(None)
        }

        async fn compare_and_swap(
            &self,
            _key: &DocumentKey,
            _expected_version: Option<u64>,
            _body: serde_json::Value,
        ) -> Result<CasOutcome, AppError> {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            Ok(CasOutcome::Conflict)
        }

        async fn delete(&self, _key: &DocumentKey) -> Result<bool, AppError> {
            Ok(false)
        }

        async fn subscribe(
            &self,
            _key: &DocumentKey,
        ) -> broadcast::Receiver<crate::event::DocumentChanged> {
            broadcast::channel(1).1
        }
    }

    #[tokio::test]
    async fn test_exhausted_retries_surface_store_conflict() {
        let store = AlwaysConflictingStore {
            attempts: AtomicU32::new(0),
        };
        let policy = RetryPolicy {
            max_attempts: 3,
            base_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(1),
        };

        let result = run_transaction(
            &store,
            &key(),
            &policy,
            || Some(Counter::default()),
            |counter: &mut Counter| {
                counter.value += 1;
                Ok(())
            },
        )
        .await;

        assert!(matches!(result, Err(AppError::StoreConflict(_))));
        assert_eq!(store.attempts.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_backoff_is_bounded() {
        let policy = RetryPolicy::default();

        assert_eq!(policy.delay_for(0), Duration::from_millis(5));
        assert_eq!(policy.delay_for(1), Duration::from_millis(10));
        assert_eq!(policy.delay_for(10), Duration::from_millis(200));
        assert_eq!(policy.delay_for(40), Duration::from_millis(200));
    }
}
