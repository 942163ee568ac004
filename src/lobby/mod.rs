// Public API - what other modules can use
pub use handlers::{get_lobby, join_lobby, leave_lobby};
pub use models::{LobbyMember, LobbyModel, LobbyRole, LobbyStatus, LOBBY_ID};
pub use repository::LobbyRepository;
pub use service::{LobbyService, MAX_NAME_LENGTH};
pub use types::{JoinLobbyRequest, JoinLobbyResponse, LeaveLobbyRequest, LeaveLobbyResponse};

// Internal modules
mod generators;
mod handlers;
mod models;
mod repository;
mod service;
mod types;
