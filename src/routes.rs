use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{game, lobby, shared::AppState, websockets};

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Builds the HTTP and WebSocket router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/lobby", get(lobby::get_lobby))
        .route("/lobby/join", post(lobby::join_lobby))
        .route("/lobby/leave", post(lobby::leave_lobby))
        .route("/lobby/start", post(game::start_game))
        .route("/games", post(game::create_game))
        .route("/games/:id", get(game::get_game))
        .route("/games/:id/players/:player_id", get(game::player_view))
        .route("/games/:id/vote/request", post(game::request_vote))
        .route("/games/:id/vote", post(game::cast_vote))
        .route("/games/:id/vote/tally", post(game::tally_votes))
        .route("/games/:id/end-vote/request", post(game::request_end_game_vote))
        .route("/games/:id/end-vote", post(game::cast_end_game_vote))
        .route("/games/:id/guess", post(game::spy_guess_location))
        .route("/games/:id/end", post(game::end_game))
        .route("/ws/lobby", get(websockets::lobby_socket))
        .route("/ws/games/:id", get(websockets::game_socket))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
