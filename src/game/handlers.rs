use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{info, instrument};

use super::{
    deadline::watch_game,
    models::GameModel,
    types::{
        CastVoteRequest, CreateGameRequest, GameActionResponse, GameCreatedResponse,
        PlayerActionRequest, PlayerView, SpyGuessRequest, StartGameRequest,
    },
};
use crate::shared::{AppError, AppState};

async fn launch(state: &AppState, game: GameModel) -> GameCreatedResponse {
    watch_game(
        state.game_service.clone(),
        state.store.clone(),
        state.clock.clone(),
        &game.id,
    )
    .await;

    GameCreatedResponse {
        game_id: game.id.clone(),
        game,
    }
}

/// HTTP handler for creating a game from an explicit roster
///
/// POST /games
#[instrument(name = "create_game", skip(state, request), fields(players = request.players.len()))]
pub async fn create_game(
    State(state): State<AppState>,
    Json(request): Json<CreateGameRequest>,
) -> Result<Json<GameCreatedResponse>, AppError> {
    let game = state.assembler.create_game(request.players).await?;
    Ok(Json(launch(&state, game).await))
}

/// HTTP handler for starting a game with everyone in the lobby
///
/// POST /lobby/start
#[instrument(name = "start_game", skip(state))]
pub async fn start_game(
    State(state): State<AppState>,
    Json(request): Json<StartGameRequest>,
) -> Result<Json<GameCreatedResponse>, AppError> {
    let game = state.assembler.start_from_lobby(&request.player_id).await?;
    info!(game_id = %game.id, started_by = %request.player_id, "Game started from lobby");
    Ok(Json(launch(&state, game).await))
}

/// GET /games/:id
#[instrument(name = "get_game", skip(state))]
pub async fn get_game(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> Result<Json<GameModel>, AppError> {
    Ok(Json(state.game_service.get_game(&game_id).await?))
}

/// GET /games/:id/players/:player_id
#[instrument(name = "player_view", skip(state))]
pub async fn player_view(
    State(state): State<AppState>,
    Path((game_id, player_id)): Path<(String, String)>,
) -> Result<Json<PlayerView>, AppError> {
    Ok(Json(
        state.game_service.player_view(&game_id, &player_id).await?,
    ))
}

/// POST /games/:id/vote/request
#[instrument(name = "request_vote", skip(state))]
pub async fn request_vote(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
    Json(request): Json<PlayerActionRequest>,
) -> Result<Json<GameActionResponse>, AppError> {
    Ok(Json(
        state
            .game_service
            .request_vote(&game_id, &request.player_id)
            .await?,
    ))
}

/// POST /games/:id/vote
#[instrument(name = "cast_vote", skip(state))]
pub async fn cast_vote(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
    Json(request): Json<CastVoteRequest>,
) -> Result<Json<GameActionResponse>, AppError> {
    Ok(Json(
        state
            .game_service
            .cast_vote(&game_id, &request.voter_id, &request.target_id)
            .await?,
    ))
}

/// POST /games/:id/vote/tally
#[instrument(name = "tally_votes", skip(state))]
pub async fn tally_votes(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> Result<Json<GameActionResponse>, AppError> {
    Ok(Json(state.game_service.tally_votes(&game_id).await?))
}

/// POST /games/:id/end-vote/request
#[instrument(name = "request_end_game_vote", skip(state))]
pub async fn request_end_game_vote(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
    Json(request): Json<PlayerActionRequest>,
) -> Result<Json<GameActionResponse>, AppError> {
    Ok(Json(
        state
            .game_service
            .request_end_game_vote(&game_id, &request.player_id)
            .await?,
    ))
}

/// POST /games/:id/end-vote
#[instrument(name = "cast_end_game_vote", skip(state))]
pub async fn cast_end_game_vote(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
    Json(request): Json<PlayerActionRequest>,
) -> Result<Json<GameActionResponse>, AppError> {
    Ok(Json(
        state
            .game_service
            .cast_end_game_vote(&game_id, &request.player_id)
            .await?,
    ))
}

/// POST /games/:id/guess
#[instrument(name = "spy_guess_location", skip(state))]
pub async fn spy_guess_location(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
    Json(request): Json<SpyGuessRequest>,
) -> Result<Json<GameActionResponse>, AppError> {
    Ok(Json(
        state
            .game_service
            .spy_guess_location(&game_id, &request.spy_id, &request.guess)
            .await?,
    ))
}

/// POST /games/:id/end
#[instrument(name = "end_game", skip(state))]
pub async fn end_game(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> Result<Json<GameActionResponse>, AppError> {
    let response = state.game_service.end_game(&game_id).await?;
    info!(game_id = %game_id, "Game ended");
    Ok(Json(response))
}
