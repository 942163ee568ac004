use axum::{extract::State, Json};
use tracing::{info, instrument};

use super::{
    models::LobbyModel,
    types::{JoinLobbyRequest, JoinLobbyResponse, LeaveLobbyRequest, LeaveLobbyResponse},
};
use crate::shared::{AppError, AppState};

/// HTTP handler for reading the whole lobby
///
/// GET /lobby
#[instrument(name = "get_lobby", skip(state))]
pub async fn get_lobby(State(state): State<AppState>) -> Result<Json<LobbyModel>, AppError> {
    let lobby = state.lobby_service.get_lobby().await?;
    Ok(Json(lobby))
}

/// HTTP handler for joining as player or observer
///
/// POST /lobby/join
#[instrument(name = "join_lobby", skip(state, request))]
pub async fn join_lobby(
    State(state): State<AppState>,
    Json(request): Json<JoinLobbyRequest>,
) -> Result<Json<JoinLobbyResponse>, AppError> {
    let response = state.lobby_service.join(request).await?;

    info!(
        member_id = %response.member.id,
        role = %response.role,
        "Join request handled"
    );

    Ok(Json(response))
}

/// HTTP handler for leaving the lobby
///
/// POST /lobby/leave
#[instrument(name = "leave_lobby", skip(state))]
pub async fn leave_lobby(
    State(state): State<AppState>,
    Json(request): Json<LeaveLobbyRequest>,
) -> Result<Json<LeaveLobbyResponse>, AppError> {
    let response = state.lobby_service.leave(&request.id).await?;
    Ok(Json(response))
}
