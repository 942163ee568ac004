use serde::{Deserialize, Serialize};

use super::models::{LobbyMember, LobbyModel, LobbyRole};

/// Request payload for joining the lobby
///
/// Missing id or name are generated by the server.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinLobbyRequest {
    #[serde(default)]
    pub role: LobbyRole,
    pub id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinLobbyResponse {
    pub member: LobbyMember,
    pub role: LobbyRole,
    pub lobby: LobbyModel,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveLobbyRequest {
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveLobbyResponse {
    pub left: bool,
    pub lobby: LobbyModel,
}
