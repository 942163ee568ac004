// Library crate for the spyfall game server
// This file exposes the public API for integration tests

pub mod clock;
pub mod config;
pub mod event;
pub mod game;
pub mod lobby;
pub mod rolebook;
pub mod routes;
pub mod shared;
pub mod shuffle;
pub mod store;
pub mod websockets;

// Re-export commonly used types for easier access in tests
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::AppConfig;
pub use event::{ChangeBus, DocumentChanged, DocumentSubscription};
pub use game::{GameModel, GameService, GameStatus, RoundAssembler, Winner};
pub use lobby::{LobbyMember, LobbyModel, LobbyRole, LobbyService, LobbyStatus};
pub use rolebook::{Language, Location, RoleBook};
pub use routes::app;
pub use shared::{AppError, AppState, AppStateBuilder};
pub use shuffle::Shuffler;
pub use store::{DocumentStore, InMemoryDocumentStore, PostgresDocumentStore};
