use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::{
    models::{GameModel, GameStatus},
    repository::GameRepository,
    service::GameService,
};
use crate::clock::Clock;
use crate::event::{DocumentChanged, DocumentSubscription, SnapshotHandler, SubscriptionControl};
use crate::shared::AppError;
use crate::store::DocumentStore;

/// Tallies a game's accusation vote once its deadline passes
///
/// Runs server side so the round does not depend on the leader's client
/// staying connected. Each distinct deadline is scheduled once; late or
/// duplicate tallies are absorbed by the phase check.
pub struct VoteDeadlineWatcher {
    game_id: String,
    service: Arc<GameService>,
    clock: Arc<dyn Clock>,
    scheduled: Mutex<Option<DateTime<Utc>>>,
}

impl VoteDeadlineWatcher {
    pub fn new(game_id: impl Into<String>, service: Arc<GameService>, clock: Arc<dyn Clock>) -> Self {
        Self {
            game_id: game_id.into(),
            service,
            clock,
            scheduled: Mutex::new(None),
        }
    }

    /// Returns true when `deadline` was not already scheduled
    fn claim(&self, deadline: DateTime<Utc>) -> bool {
        let mut scheduled = self.scheduled.lock().unwrap_or_else(|e| e.into_inner());
        if *scheduled == Some(deadline) {
            return false;
        }
        *scheduled = Some(deadline);
        true
    }

    fn schedule_tally(&self, deadline: DateTime<Utc>) {
        let wait = (deadline - self.clock.now()).to_std().unwrap_or(Duration::ZERO);
        let service = self.service.clone();
        let game_id = self.game_id.clone();

        debug!(game_id = %game_id, wait_ms = wait.as_millis() as u64, "Scheduling vote tally");

        tokio::spawn(async move {
            tokio::time::sleep(wait).await;
            match service.tally_votes(&game_id).await {
                Ok(response) if response.applied => {
                    info!(game_id = %game_id, "Vote tallied at deadline");
                }
                Ok(_) => debug!(game_id = %game_id, "Vote was already tallied"),
                Err(e) => warn!(game_id = %game_id, error = %e, "Deadline tally failed"),
            }
        });
    }
}

#[async_trait]
impl SnapshotHandler for VoteDeadlineWatcher {
    async fn on_snapshot(&self, change: DocumentChanged) -> Result<SubscriptionControl, AppError> {
        let game = match change.decode::<GameModel>()? {
            Some(game) => game,
            None => return Ok(SubscriptionControl::Stop),
        };

        match game.status {
            GameStatus::Finished => Ok(SubscriptionControl::Stop),
            GameStatus::Voting => {
                if let Some(deadline) = game.vote.timer_ends_at {
                    if self.claim(deadline) {
                        self.schedule_tally(deadline);
                    }
                }
                Ok(SubscriptionControl::Continue)
            }
            GameStatus::InProgress | GameStatus::SpyGuessing => Ok(SubscriptionControl::Continue),
        }
    }

    fn handler_name(&self) -> &'static str {
        "vote_deadline_watcher"
    }
}

/// Starts the deadline watcher for one game
pub async fn watch_game(
    service: Arc<GameService>,
    store: Arc<dyn DocumentStore>,
    clock: Arc<dyn Clock>,
    game_id: &str,
) -> JoinHandle<()> {
    let watcher = VoteDeadlineWatcher::new(game_id, service, clock);
    DocumentSubscription::new(GameRepository::key(game_id), Arc::new(watcher), store)
        .start()
        .await
}
