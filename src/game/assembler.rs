use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::{
    models::{
        EndGameVoteState, GameModel, GameStatus, PlayerAssignment, VoteState, FALLBACK_ROLE,
        GAME_ID_PREFIX, HIDDEN_LOCATION, SPY_ROLE,
    },
    repository::GameRepository,
};
use crate::clock::{deadline_after, Clock};
use crate::config::AppConfig;
use crate::lobby::{LobbyMember, LobbyService};
use crate::rolebook::RoleBook;
use crate::shared::AppError;
use crate::shuffle::Shuffler;
use crate::store::DocumentStore;

pub fn new_game_id() -> String {
    format!("{}{}", GAME_ID_PREFIX, Uuid::new_v4())
}

/// Deals a new round: one location, one spy, one role per remaining player
///
/// The shuffled roster order is kept in `players`; its first entry leads the round.
pub fn assemble_game(
    id: String,
    roster: &[LobbyMember],
    role_book: &RoleBook,
    shuffler: &Shuffler,
    now: DateTime<Utc>,
    config: &AppConfig,
) -> Result<GameModel, AppError> {
    let min_players = config.min_roster();
    if roster.len() < min_players {
        return Err(AppError::InsufficientPlayers(min_players));
    }

    let mut seen = HashSet::new();
    if let Some(duplicate) = roster.iter().find(|m| !seen.insert(m.id.as_str())) {
        return Err(AppError::BadRequest(format!(
            "player {} appears twice in the roster",
            duplicate.id
        )));
    }

    let location = role_book.pick(shuffler).ok_or(AppError::NoLocationData)?;
    let order = shuffler.shuffled(roster);
    let spy_index = shuffler.pick_index(order.len()).ok_or(AppError::Internal)?;
    // Roles are handed out from the back of the shuffled list
    let mut roles = shuffler.shuffled(&location.roles);

    let players: Vec<PlayerAssignment> = order
        .into_iter()
        .enumerate()
        .map(|(index, member)| {
            if index == spy_index {
                PlayerAssignment {
                    player_id: member.id,
                    name: member.name,
                    role: SPY_ROLE.to_string(),
                    location: HIDDEN_LOCATION.to_string(),
                }
            } else {
                PlayerAssignment {
                    player_id: member.id,
                    name: member.name,
                    role: roles.pop().unwrap_or_else(|| FALLBACK_ROLE.to_string()),
                    location: location.name.clone(),
                }
            }
        })
        .collect();

    Ok(GameModel {
        id,
        created_at: now,
        spy_id: players[spy_index].player_id.clone(),
        players,
        location: location.name.clone(),
        all_locations: role_book.location_names(),
        status: GameStatus::InProgress,
        timer_ends_at: deadline_after(now, config.round_duration),
        vote: VoteState::default(),
        end_game_vote: EndGameVoteState::default(),
        spy_guessing: None,
        result: None,
        ended_at: None,
    })
}

/// Builds rounds and hands them over to the lobby
pub struct RoundAssembler {
    games: GameRepository,
    lobby: Arc<LobbyService>,
    role_book: Arc<RoleBook>,
    shuffler: Arc<Shuffler>,
    clock: Arc<dyn Clock>,
    config: Arc<AppConfig>,
}

impl RoundAssembler {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        lobby: Arc<LobbyService>,
        role_book: Arc<RoleBook>,
        shuffler: Arc<Shuffler>,
        clock: Arc<dyn Clock>,
        config: Arc<AppConfig>,
    ) -> Self {
        Self {
            games: GameRepository::new(store, config.retry.clone()),
            lobby,
            role_book,
            shuffler,
            clock,
            config,
        }
    }

    /// Creates a game for the roster and points the lobby at it
    #[instrument(skip(self, roster), fields(players = roster.len()))]
    pub async fn create_game(&self, roster: Vec<LobbyMember>) -> Result<GameModel, AppError> {
        let game = assemble_game(
            new_game_id(),
            &roster,
            &self.role_book,
            &self.shuffler,
            self.clock.now(),
            &self.config,
        )?;

        self.games.create(&game).await?;

        if let Err(e) = self.lobby.set_game_pointer(&game.id).await {
            warn!(game_id = %game.id, error = %e, "Could not hand game to lobby, discarding it");
            if let Err(cleanup) = self.games.delete(&game.id).await {
                warn!(game_id = %game.id, error = %cleanup, "Failed to discard orphaned game");
            }
            return Err(e);
        }

        info!(
            game_id = %game.id,
            players = game.players.len(),
            leader = ?game.leader().map(|p| p.player_id.as_str()),
            "Game created"
        );
        Ok(game)
    }

    /// Starts a round from the lobby's current players
    #[instrument(skip(self))]
    pub async fn start_from_lobby(&self, requester_id: &str) -> Result<GameModel, AppError> {
        let lobby = self.lobby.get_lobby().await?;

        if lobby.game_pointer().is_some() {
            return Err(AppError::GameAlreadyStarted);
        }
        if !lobby.is_player(requester_id) {
            return Err(AppError::NotAuthorized(
                "only lobby players can start a game".to_string(),
            ));
        }

        self.create_game(lobby.players).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rolebook::Location;
    use std::collections::HashSet;

    fn roster(count: usize) -> Vec<LobbyMember> {
        (0..count)
            .map(|i| LobbyMember::new(format!("p{}", i), format!("Player {}", i)))
            .collect()
    }

    fn assemble(count: usize, book: &RoleBook, seed: u64) -> Result<GameModel, AppError> {
        assemble_game(
            new_game_id(),
            &roster(count),
            book,
            &Shuffler::seeded(seed),
            Utc::now(),
            &AppConfig::default(),
        )
    }

    #[test]
    fn test_every_round_has_exactly_one_spy() {
        let book = RoleBook::builtin();

        for seed in 0..50 {
            let game = assemble(3 + (seed as usize % 6), &book, seed).unwrap();

            let spies: Vec<_> = game.players.iter().filter(|p| p.is_spy()).collect();
            assert_eq!(spies.len(), 1);
            assert_eq!(spies[0].player_id, game.spy_id);
            assert_eq!(spies[0].location, HIDDEN_LOCATION);

            let location = book.find(&game.location).unwrap();
            let mut seen_roles = HashSet::new();
            for player in game.players.iter().filter(|p| !p.is_spy()) {
                assert_eq!(player.location, game.location);
                assert!(location.roles.contains(&player.role));
                assert!(seen_roles.insert(player.role.clone()));
            }
        }
    }

    #[test]
    fn test_roster_is_kept_as_a_permutation() {
        let game = assemble(6, &RoleBook::builtin(), 3).unwrap();

        let mut ids: Vec<_> = game.players.iter().map(|p| p.player_id.clone()).collect();
        ids.sort();
        assert_eq!(ids, vec!["p0", "p1", "p2", "p3", "p4", "p5"]);
        assert!(game.id.starts_with(GAME_ID_PREFIX));
        assert_eq!(game.status, GameStatus::InProgress);
        assert_eq!(game.all_locations.len(), 30);
    }

    #[test]
    fn test_too_few_players() {
        assert!(matches!(
            assemble(2, &RoleBook::builtin(), 1),
            Err(AppError::InsufficientPlayers(3))
        ));
    }

    #[test]
    fn test_empty_role_book() {
        assert!(matches!(
            assemble(4, &RoleBook::default(), 1),
            Err(AppError::NoLocationData)
        ));
    }

    #[test]
    fn test_duplicate_roster_entries_are_rejected() {
        let mut members = roster(3);
        members.push(LobbyMember::new("p0", "Impostor"));

        let result = assemble_game(
            new_game_id(),
            &members,
            &RoleBook::builtin(),
            &Shuffler::seeded(1),
            Utc::now(),
            &AppConfig::default(),
        );

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_short_role_lists_fall_back_to_civilians() {
        let book = RoleBook::new(vec![Location {
            name: "Tiny Shed".to_string(),
            roles: vec!["Gardener".to_string()],
            localized_name: None,
        }])
        .unwrap();

        let game = assemble(4, &book, 9).unwrap();

        let roles: Vec<_> = game
            .players
            .iter()
            .filter(|p| !p.is_spy())
            .map(|p| p.role.as_str())
            .collect();
        assert_eq!(roles.iter().filter(|r| **r == "Gardener").count(), 1);
        assert_eq!(roles.iter().filter(|r| **r == FALLBACK_ROLE).count(), 2);
    }
}
