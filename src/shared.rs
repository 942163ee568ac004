use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

use crate::clock::{Clock, SystemClock};
use crate::config::AppConfig;
use crate::game::{GameService, RoundAssembler};
use crate::lobby::LobbyService;
use crate::rolebook::RoleBook;
use crate::shuffle::Shuffler;
use crate::store::{DocumentStore, InMemoryDocumentStore};

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<dyn DocumentStore>,
    pub clock: Arc<dyn Clock>,
    pub lobby_service: Arc<LobbyService>,
    pub game_service: Arc<GameService>,
    pub assembler: Arc<RoundAssembler>,
}

impl AppState {
    pub fn new(
        config: Arc<AppConfig>,
        store: Arc<dyn DocumentStore>,
        role_book: Arc<RoleBook>,
        shuffler: Arc<Shuffler>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let lobby_service = Arc::new(LobbyService::new(store.clone(), config.clone()));
        let game_service = Arc::new(GameService::new(
            store.clone(),
            lobby_service.clone(),
            clock.clone(),
            config.clone(),
        ));
        let assembler = Arc::new(RoundAssembler::new(
            store.clone(),
            lobby_service.clone(),
            role_book,
            shuffler,
            clock.clone(),
            config.clone(),
        ));

        Self {
            config,
            store,
            clock,
            lobby_service,
            game_service,
            assembler,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("At least {0} players are required to start a game")]
    InsufficientPlayers(usize),

    #[error("No locations are available")]
    NoLocationData,

    #[error("Operation not valid in the current phase: {0}")]
    PhaseMismatch(String),

    #[error("Not authorized: {0}")]
    NotAuthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Concurrent update conflict on {0}")]
    StoreConflict(String),

    #[error("The player lobby is full.")]
    LobbyFull,

    #[error("A game has already been started from this lobby")]
    GameAlreadyStarted,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal server error")]
    Internal,
}

impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> Self {
        warn!(error = %error, "Database operation failed");
        AppError::DatabaseError(error.to_string())
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InsufficientPlayers(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NoLocationData | AppError::StoreConflict(_) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            AppError::PhaseMismatch(_) | AppError::LobbyFull | AppError::GameAlreadyStarted => {
                StatusCode::CONFLICT
            }
            AppError::NotAuthorized(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) | AppError::Serialization(_) | AppError::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_message = match &self {
            AppError::DatabaseError(_) | AppError::Serialization(_) => {
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}

/// Builder for creating AppState with overrides, defaulting to in-memory collaborators
pub struct AppStateBuilder {
    config: AppConfig,
    store: Option<Arc<dyn DocumentStore>>,
    role_book: Option<RoleBook>,
    shuffler: Option<Shuffler>,
    clock: Option<Arc<dyn Clock>>,
}

impl AppStateBuilder {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            store: None,
            role_book: None,
            shuffler: None,
            clock: None,
        }
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_store(mut self, store: Arc<dyn DocumentStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn with_role_book(mut self, role_book: RoleBook) -> Self {
        self.role_book = Some(role_book);
        self
    }

    pub fn with_shuffler(mut self, shuffler: Shuffler) -> Self {
        self.shuffler = Some(shuffler);
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn build(self) -> AppState {
        AppState::new(
            Arc::new(self.config),
            self.store.unwrap_or_else(|| {
                Arc::new(InMemoryDocumentStore::new()) as Arc<dyn DocumentStore>
            }),
            Arc::new(self.role_book.unwrap_or_else(RoleBook::builtin)),
            Arc::new(self.shuffler.unwrap_or_else(Shuffler::from_entropy)),
            self.clock
                .unwrap_or_else(|| Arc::new(SystemClock) as Arc<dyn Clock>),
        )
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
