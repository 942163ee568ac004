use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

pub const SPY_ROLE: &str = "Spy";
pub const HIDDEN_LOCATION: &str = "???";
/// Handed out once a location's role list is exhausted
pub const FALLBACK_ROLE: &str = "Civilian";
pub const GAME_ID_PREFIX: &str = "spyfall_";

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum GameStatus {
    InProgress,
    Voting,
    SpyGuessing,
    Finished,
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum VoteStatus {
    #[default]
    #[serde(rename = "none")]
    #[strum(to_string = "none")]
    Idle,
    Active,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Winner {
    Spy,
    Players,
}

/// Which protocol produced the terminal result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum EndedBy {
    WrongAccusation,
    SpyGuess,
    EndGameVote,
}

/// One player's secret card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerAssignment {
    pub player_id: String,
    pub name: String,
    pub role: String,
    /// The real location, or `???` for the spy
    pub location: String,
}

impl PlayerAssignment {
    pub fn is_spy(&self) -> bool {
        self.role == SPY_ROLE
    }
}

/// The accusation vote
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteState {
    pub requesters: BTreeSet<String>,
    /// voter id -> accused id
    pub votes: BTreeMap<String, String>,
    pub status: VoteStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timer_ends_at: Option<DateTime<Utc>>,
}

/// The vote to end the round early; the spy takes no part
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndGameVoteState {
    pub requesters: BTreeSet<String>,
    pub votes: BTreeSet<String>,
    pub status: VoteStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResult {
    pub winner: Winner,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voted_player_name: Option<String>,
    pub spy_name: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spy_guessed_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spy_guessed_correctly: Option<bool>,
    pub ended_by: EndedBy,
}

/// Present only while the unmasked spy gets their guess
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpyGuessing {
    pub spy_id: String,
    pub voted_by_players: bool,
    pub location_options: Vec<String>,
    /// Outcome if the guess never changes it: the spy wins
    pub provisional_result: GameResult,
}

/// The game document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameModel {
    pub id: String,
    pub created_at: DateTime<Utc>,
    /// Fixed once assembled; the first entry is the round leader
    pub players: Vec<PlayerAssignment>,
    pub location: String,
    pub all_locations: Vec<String>,
    pub spy_id: String,
    pub status: GameStatus,
    pub timer_ends_at: DateTime<Utc>,
    #[serde(default)]
    pub vote: VoteState,
    #[serde(default)]
    pub end_game_vote: EndGameVoteState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spy_guessing: Option<SpyGuessing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<GameResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,
}

impl GameModel {
    pub fn player(&self, player_id: &str) -> Option<&PlayerAssignment> {
        self.players.iter().find(|p| p.player_id == player_id)
    }

    pub fn is_player(&self, player_id: &str) -> bool {
        self.player(player_id).is_some()
    }

    pub fn spy(&self) -> Option<&PlayerAssignment> {
        self.player(&self.spy_id)
    }

    pub fn spy_name(&self) -> String {
        self.spy().map(|p| p.name.clone()).unwrap_or_default()
    }

    pub fn leader(&self) -> Option<&PlayerAssignment> {
        self.players.first()
    }

    /// Players allowed to vote on ending the round early
    pub fn end_game_electorate(&self) -> usize {
        self.players.iter().filter(|p| p.player_id != self.spy_id).count()
    }

    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Finished
    }
}
