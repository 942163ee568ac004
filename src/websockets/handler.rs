use axum::{
    extract::{ws::WebSocket, Path, State, WebSocketUpgrade},
    response::Response,
};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{info, instrument, warn};

use super::{
    forwarder::SnapshotForwarder,
    messages::{MessageType, WebSocketMessage},
    socket::Connection,
};
use crate::event::DocumentSubscription;
use crate::game::GameRepository;
use crate::lobby::{LobbyModel, LobbyRepository};
use crate::shared::{AppError, AppState};
use crate::store::DocumentKey;

/// Lobby snapshot stream
///
/// GET /ws/lobby
#[instrument(name = "lobby_socket", skip(ws, state))]
pub async fn lobby_socket(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    // A lobby nobody has written to yet still gets an initial snapshot
    let initial = match state.store.get(&LobbyRepository::key()).await? {
        Some(_) => None,
        None => Some(WebSocketMessage::new(
            MessageType::LobbySnapshot,
            serde_json::to_value(LobbyModel::default())?,
            Some(0),
        )),
    };

    info!("Lobby stream requested");
    Ok(ws.on_upgrade(move |socket| {
        stream_document(socket, LobbyRepository::key(), initial, state)
    }))
}

/// Game snapshot stream
///
/// GET /ws/games/:id
#[instrument(name = "game_socket", skip(ws, state))]
pub async fn game_socket(
    ws: WebSocketUpgrade,
    Path(game_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let key = GameRepository::key(&game_id);
    if state.store.get(&key).await?.is_none() {
        warn!(game_id = %game_id, "Game not found, rejecting WebSocket connection");
        return Err(AppError::NotFound(format!("game {}", game_id)));
    }

    info!(game_id = %game_id, "Game stream requested");
    Ok(ws.on_upgrade(move |socket| stream_document(socket, key, None, state)))
}

/// Forwards snapshots of one document to the socket until either side ends
async fn stream_document(
    socket: WebSocket,
    key: DocumentKey,
    initial: Option<WebSocketMessage>,
    state: AppState,
) {
    info!(key = %key, "WebSocket connection established");

    let (outbound_sender, outbound_receiver) = mpsc::unbounded_channel::<String>();

    if let Some(message) = initial {
        match serde_json::to_string(&message) {
            Ok(json) => {
                let _ = outbound_sender.send(json);
            }
            Err(e) => warn!(key = %key, error = %e, "Failed to encode initial snapshot"),
        }
    }

    let subscription = DocumentSubscription::new(
        key.clone(),
        Arc::new(SnapshotForwarder::new(outbound_sender)),
        state.store.clone(),
    )
    .start()
    .await;

    let connection = Connection::new(key.to_string(), Box::new(socket), outbound_receiver);
    if let Err(e) = connection.run().await {
        warn!(key = %key, error = %e, "WebSocket connection ended with error");
    }

    subscription.abort();
    info!(key = %key, "WebSocket connection closed");
}
