use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::event::DocumentChanged;
use crate::store::Collection;

/// Message types for WebSocket communication
///
/// The streams are server -> client only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageType {
    LobbySnapshot,
    GameSnapshot,
    DocumentDeleted,
    Error,
}

/// Metadata for WebSocket messages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebSocketMessageMeta {
    pub timestamp: DateTime<Utc>,
    /// Document version the payload reflects, absent for errors
    pub version: Option<u64>,
}

/// Base structure for WebSocket messages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebSocketMessage {
    #[serde(rename = "type")]
    pub message_type: MessageType,
    pub payload: serde_json::Value,
    pub meta: Option<WebSocketMessageMeta>,
}

impl WebSocketMessage {
    pub fn new(
        message_type: MessageType,
        payload: serde_json::Value,
        version: Option<u64>,
    ) -> Self {
        Self {
            message_type,
            payload,
            meta: Some(WebSocketMessageMeta {
                timestamp: Utc::now(),
                version,
            }),
        }
    }

    /// Wraps a document snapshot; deletions carry a null payload
    pub fn snapshot(change: &DocumentChanged) -> Self {
        let message_type = match (&change.body, change.key.collection) {
            (None, _) => MessageType::DocumentDeleted,
            (Some(_), Collection::Lobbies) => MessageType::LobbySnapshot,
            (Some(_), Collection::Games) => MessageType::GameSnapshot,
        };
        let payload = change.body.clone().unwrap_or(serde_json::Value::Null);

        Self::new(message_type, payload, Some(change.version))
    }

    /// Create an ERROR message
    pub fn error(message: impl Into<String>) -> Self {
        let payload = serde_json::json!({ "message": message.into() });
        Self::new(MessageType::Error, payload, None)
    }
}
