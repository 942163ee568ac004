use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::models::{GameModel, GameResult, GameStatus, PlayerAssignment, VoteStatus};
use crate::lobby::LobbyMember;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameRequest {
    pub players: Vec<LobbyMember>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartGameRequest {
    pub player_id: String,
}

/// Body of the single-actor game operations
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerActionRequest {
    pub player_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CastVoteRequest {
    pub voter_id: String,
    pub target_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpyGuessRequest {
    pub spy_id: String,
    pub guess: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameCreatedResponse {
    pub game_id: String,
    pub game: GameModel,
}

/// Outcome of a game operation; `applied == false` means the request was stale
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameActionResponse {
    pub applied: bool,
    pub game: GameModel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicPlayer {
    pub player_id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteSummary {
    pub status: VoteStatus,
    pub requested: usize,
    pub required: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timer_ends_at: Option<DateTime<Utc>>,
    pub has_requested: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub my_vote: Option<String>,
    pub ballots: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndGameVoteSummary {
    pub status: VoteStatus,
    pub votes: usize,
    pub required: usize,
    pub has_voted: bool,
}

/// What one player is allowed to see of a game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    pub game_id: String,
    pub status: GameStatus,
    pub me: PlayerAssignment,
    pub is_spy: bool,
    pub is_leader: bool,
    pub players: Vec<PublicPlayer>,
    pub all_locations: Vec<String>,
    pub timer_ends_at: DateTime<Utc>,
    pub vote: VoteSummary,
    pub end_game_vote: EndGameVoteSummary,
    /// The guess space, only for the spy while guessing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<GameResult>,
}
