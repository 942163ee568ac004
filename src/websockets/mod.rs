// Public API - what other modules can use
pub use handler::{game_socket, lobby_socket};
pub use messages::{MessageType, WebSocketMessage, WebSocketMessageMeta};
pub use socket::{Connection, SocketError, SocketWrapper};

// Internal modules
mod forwarder;
mod handler;
mod messages;
mod socket;
