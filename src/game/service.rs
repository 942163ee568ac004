use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::{
    logic::Transition,
    models::{GameModel, GameStatus},
    repository::GameRepository,
    types::{EndGameVoteSummary, GameActionResponse, PlayerView, PublicPlayer, VoteSummary},
};
use crate::clock::Clock;
use crate::config::AppConfig;
use crate::lobby::LobbyService;
use crate::shared::AppError;
use crate::store::DocumentStore;

/// Service exposing the round's protocols as atomic operations
pub struct GameService {
    repository: GameRepository,
    lobby: Arc<LobbyService>,
    clock: Arc<dyn Clock>,
    config: Arc<AppConfig>,
}

impl GameService {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        lobby: Arc<LobbyService>,
        clock: Arc<dyn Clock>,
        config: Arc<AppConfig>,
    ) -> Self {
        Self {
            repository: GameRepository::new(store, config.retry.clone()),
            lobby,
            clock,
            config,
        }
    }

    #[instrument(skip(self))]
    pub async fn get_game(&self, game_id: &str) -> Result<GameModel, AppError> {
        self.repository
            .get(game_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("game {}", game_id)))
    }

    #[instrument(skip(self))]
    pub async fn player_view(&self, game_id: &str, player_id: &str) -> Result<PlayerView, AppError> {
        let game = self.get_game(game_id).await?;
        let me = game.player(player_id).cloned().ok_or_else(|| {
            AppError::NotFound(format!("player {} in game {}", player_id, game_id))
        })?;

        let is_spy = me.player_id == game.spy_id;
        let location_options = match (&game.spy_guessing, is_spy) {
            (Some(guessing), true) => Some(guessing.location_options.clone()),
            _ => None,
        };

        Ok(PlayerView {
            game_id: game.id.clone(),
            status: game.status,
            is_spy,
            is_leader: game.leader().map(|p| p.player_id.as_str()) == Some(player_id),
            players: game
                .players
                .iter()
                .map(|p| PublicPlayer {
                    player_id: p.player_id.clone(),
                    name: p.name.clone(),
                })
                .collect(),
            all_locations: game.all_locations.clone(),
            timer_ends_at: game.timer_ends_at,
            vote: VoteSummary {
                status: game.vote.status,
                requested: game.vote.requesters.len(),
                required: self.config.quorum(game.players.len()),
                timer_ends_at: game.vote.timer_ends_at,
                has_requested: game.vote.requesters.contains(player_id),
                my_vote: game.vote.votes.get(player_id).cloned(),
                ballots: game.vote.votes.len(),
            },
            end_game_vote: EndGameVoteSummary {
                status: game.end_game_vote.status,
                votes: game.end_game_vote.votes.len(),
                required: self.config.quorum(game.end_game_electorate()),
                has_voted: game.end_game_vote.votes.contains(player_id),
            },
            location_options,
            result: game.result.clone(),
            me,
        })
    }

    #[instrument(skip(self))]
    pub async fn request_vote(
        &self,
        game_id: &str,
        player_id: &str,
    ) -> Result<GameActionResponse, AppError> {
        let now = self.clock.now();
        let config = self.config.clone();
        let response = self
            .apply(game_id, "request_vote", |game| {
                game.request_vote(player_id, now, &config)
            })
            .await?;

        if response.applied && response.game.status == GameStatus::Voting {
            info!(game_id = %game_id, "Accusation vote opened");
        }
        Ok(response)
    }

    #[instrument(skip(self))]
    pub async fn cast_vote(
        &self,
        game_id: &str,
        voter_id: &str,
        target_id: &str,
    ) -> Result<GameActionResponse, AppError> {
        self.apply(game_id, "cast_vote", |game| game.cast_vote(voter_id, target_id))
            .await
    }

    /// Safe to call from any client, any number of times
    #[instrument(skip(self))]
    pub async fn tally_votes(&self, game_id: &str) -> Result<GameActionResponse, AppError> {
        let response = self
            .apply(game_id, "tally_votes", |game| game.tally_votes())
            .await?;

        if response.applied {
            info!(
                game_id = %game_id,
                status = %response.game.status,
                "Accusation vote tallied"
            );
        }
        Ok(response)
    }

    #[instrument(skip(self))]
    pub async fn spy_guess_location(
        &self,
        game_id: &str,
        spy_id: &str,
        guess: &str,
    ) -> Result<GameActionResponse, AppError> {
        self.apply(game_id, "spy_guess_location", |game| {
            game.spy_guess_location(spy_id, guess)
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn request_end_game_vote(
        &self,
        game_id: &str,
        player_id: &str,
    ) -> Result<GameActionResponse, AppError> {
        let config = self.config.clone();
        self.apply(game_id, "request_end_game_vote", |game| {
            game.request_end_game_vote(player_id, &config)
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn cast_end_game_vote(
        &self,
        game_id: &str,
        voter_id: &str,
    ) -> Result<GameActionResponse, AppError> {
        let config = self.config.clone();
        self.apply(game_id, "cast_end_game_vote", |game| {
            game.cast_end_game_vote(voter_id, &config)
        })
        .await
    }

    /// Closes the game and recycles the lobby if it still points here
    #[instrument(skip(self))]
    pub async fn end_game(&self, game_id: &str) -> Result<GameActionResponse, AppError> {
        let now = self.clock.now();
        let response = match self
            .apply(game_id, "end_game", |game| Ok(game.close(now)))
            .await
        {
            Ok(response) => response,
            Err(AppError::NotFound(message)) => {
                // Clear a pointer to a game that no longer exists
                self.lobby.reset_if_pointing_to(game_id).await?;
                return Err(AppError::NotFound(message));
            }
            Err(e) => return Err(e),
        };

        self.lobby.reset_if_pointing_to(game_id).await?;
        Ok(response)
    }

    async fn apply<F>(
        &self,
        game_id: &str,
        action: &'static str,
        mutate: F,
    ) -> Result<GameActionResponse, AppError>
    where
        F: FnMut(&mut GameModel) -> Result<Transition, AppError> + Send,
    {
        let tx = match self.repository.update(game_id, mutate).await {
            Ok(tx) => tx,
            Err(e) => {
                warn!(game_id = %game_id, action = action, error = %e, "Game operation rejected");
                return Err(e);
            }
        };

        match tx.output {
            Transition::Applied => {
                debug!(game_id = %game_id, action = action, status = %tx.document.status, "Game operation applied");
            }
            Transition::Ignored(reason) => {
                debug!(game_id = %game_id, action = action, reason = reason, "Game operation ignored");
            }
        }

        Ok(GameActionResponse {
            applied: tx.output.is_applied(),
            game: tx.document,
        })
    }
}
