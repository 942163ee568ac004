use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::AppError;

/// Id of the singleton lobby document
pub const LOBBY_ID: &str = "main";

const GAME_POINTER_PREFIX: &str = "game_";

/// A participant as the lobby knows them; identity is self-assigned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LobbyMember {
    pub id: String,
    pub name: String,
}

impl LobbyMember {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
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
    strum_macros::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LobbyRole {
    #[default]
    Player,
    Observer,
}

/// Either waiting for a round or pointing every client at the running game
///
/// Stored as `"waiting"` or `"game_<gameId>"`; anything unreadable counts as waiting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LobbyStatus {
    #[default]
    Waiting,
    InGame(String),
}

impl From<String> for LobbyStatus {
    fn from(raw: String) -> Self {
        match raw.strip_prefix(GAME_POINTER_PREFIX) {
            Some(game_id) if !game_id.is_empty() => LobbyStatus::InGame(game_id.to_string()),
            _ => LobbyStatus::Waiting,
        }
    }
}

impl From<LobbyStatus> for String {
    fn from(status: LobbyStatus) -> Self {
        status.to_string()
    }
}

impl fmt::Display for LobbyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LobbyStatus::Waiting => write!(f, "waiting"),
            LobbyStatus::InGame(game_id) => write!(f, "{}{}", GAME_POINTER_PREFIX, game_id),
        }
    }
}

/// The lobby document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LobbyModel {
    /// Players in join order
    #[serde(default)]
    pub players: Vec<LobbyMember>,
    #[serde(default)]
    pub observers: Vec<LobbyMember>,
    #[serde(default)]
    pub status: LobbyStatus,
}

impl LobbyModel {
    /// Adds or moves a member into the given role
    ///
    /// A member already present under the same id is renamed in place, or moved
    /// out of the other list when switching role. Only a newcomer to the player
    /// list is subject to the capacity check.
    pub fn add_member(
        &mut self,
        member: LobbyMember,
        role: LobbyRole,
        max_players: usize,
    ) -> Result<(), AppError> {
        let (target, other) = match role {
            LobbyRole::Player => (&mut self.players, &mut self.observers),
            LobbyRole::Observer => (&mut self.observers, &mut self.players),
        };

        if let Some(existing) = target.iter_mut().find(|m| m.id == member.id) {
            existing.name = member.name;
            return Ok(());
        }

        if role == LobbyRole::Player && target.len() >= max_players {
            return Err(AppError::LobbyFull);
        }

        other.retain(|m| m.id != member.id);
        target.push(member);
        Ok(())
    }

    /// Removes a member from whichever list holds them
    pub fn remove_member(&mut self, member_id: &str) -> bool {
        let before = self.players.len() + self.observers.len();
        self.players.retain(|m| m.id != member_id);
        self.observers.retain(|m| m.id != member_id);
        before != self.players.len() + self.observers.len()
    }

    pub fn member_role(&self, member_id: &str) -> Option<LobbyRole> {
        if self.players.iter().any(|m| m.id == member_id) {
            Some(LobbyRole::Player)
        } else if self.observers.iter().any(|m| m.id == member_id) {
            Some(LobbyRole::Observer)
        } else {
            None
        }
    }

    pub fn is_player(&self, member_id: &str) -> bool {
        self.member_role(member_id) == Some(LobbyRole::Player)
    }

    pub fn game_pointer(&self) -> Option<&str> {
        match &self.status {
            LobbyStatus::InGame(game_id) => Some(game_id),
            LobbyStatus::Waiting => None,
        }
    }

    /// Clears both lists and returns to waiting
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
