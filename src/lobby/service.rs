use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::{
    generators::{IdentityGenerator, NicknameGenerator, PetNameGenerator, UuidIdentityGenerator},
    models::{LobbyMember, LobbyModel, LobbyStatus},
    repository::LobbyRepository,
    types::{JoinLobbyRequest, JoinLobbyResponse, LeaveLobbyResponse},
};
use crate::config::AppConfig;
use crate::shared::AppError;
use crate::store::DocumentStore;

pub const MAX_NAME_LENGTH: usize = 20;

/// Service for the singleton pre-game lobby
pub struct LobbyService {
    repository: LobbyRepository,
    config: Arc<AppConfig>,
    nicknames: Arc<dyn NicknameGenerator>,
    identities: Arc<dyn IdentityGenerator>,
}

impl LobbyService {
    pub fn new(store: Arc<dyn DocumentStore>, config: Arc<AppConfig>) -> Self {
        Self {
            repository: LobbyRepository::new(store, config.retry.clone()),
            config,
            nicknames: Arc::new(PetNameGenerator),
            identities: Arc::new(UuidIdentityGenerator),
        }
    }

    /// Adds a player or observer, or moves an existing member between the two
    #[instrument(skip(self, request), fields(role = %request.role))]
    pub async fn join(&self, request: JoinLobbyRequest) -> Result<JoinLobbyResponse, AppError> {
        let member = self.resolve_member(request.id, request.name);
        let role = request.role;
        let max_players = self.config.max_players;

        let tx = {
            let member = member.clone();
            self.repository
                .update(move |lobby| lobby.add_member(member.clone(), role, max_players))
                .await
        };

        let tx = match tx {
            Ok(tx) => tx,
            Err(AppError::LobbyFull) => {
                warn!(member_id = %member.id, max_players = max_players, "Lobby is full");
                return Err(AppError::LobbyFull);
            }
            Err(e) => return Err(e),
        };

        info!(
            member_id = %member.id,
            name = %member.name,
            players = tx.document.players.len(),
            observers = tx.document.observers.len(),
            "Member joined lobby"
        );

        Ok(JoinLobbyResponse {
            member,
            role,
            lobby: tx.document,
        })
    }

    #[instrument(skip(self))]
    pub async fn leave(&self, member_id: &str) -> Result<LeaveLobbyResponse, AppError> {
        let tx = self
            .repository
            .update(|lobby| Ok(lobby.remove_member(member_id)))
            .await?;

        if tx.output {
            info!(member_id = %member_id, "Member left lobby");
        } else {
            debug!(member_id = %member_id, "Member was not in the lobby");
        }

        Ok(LeaveLobbyResponse {
            left: tx.output,
            lobby: tx.document,
        })
    }

    pub async fn get_lobby(&self) -> Result<LobbyModel, AppError> {
        self.repository.get().await
    }

    pub async fn peek_status(&self) -> Result<LobbyStatus, AppError> {
        Ok(self.repository.get().await?.status)
    }

    /// Points the lobby at a freshly created game
    ///
    /// Setting the pointer the lobby already holds is a no-op; replacing a
    /// different pointer is refused.
    #[instrument(skip(self))]
    pub async fn set_game_pointer(&self, game_id: &str) -> Result<LobbyModel, AppError> {
        let tx = self
            .repository
            .update(|lobby| match lobby.game_pointer() {
                Some(current) if current == game_id => Ok(()),
                Some(_) => Err(AppError::GameAlreadyStarted),
                None => {
                    lobby.status = LobbyStatus::InGame(game_id.to_string());
                    Ok(())
                }
            })
            .await?;

        info!(game_id = %game_id, "Lobby now points at game");
        Ok(tx.document)
    }

    /// Clears the lobby back to an empty waiting room
    #[instrument(skip(self))]
    pub async fn reset(&self) -> Result<LobbyModel, AppError> {
        let tx = self
            .repository
            .update(|lobby| {
                lobby.reset();
                Ok(())
            })
            .await?;

        info!("Lobby reset");
        Ok(tx.document)
    }

    /// Resets the lobby only while it still points at `game_id`
    #[instrument(skip(self))]
    pub async fn reset_if_pointing_to(&self, game_id: &str) -> Result<bool, AppError> {
        let tx = self
            .repository
            .update(|lobby| {
                if lobby.game_pointer() == Some(game_id) {
                    lobby.reset();
                    Ok(true)
                } else {
                    Ok(false)
                }
            })
            .await?;

        if tx.output {
            info!(game_id = %game_id, "Lobby recycled after game ended");
        } else {
            debug!(game_id = %game_id, "Lobby no longer points at this game, left untouched");
        }
        Ok(tx.output)
    }

    fn resolve_member(&self, id: Option<String>, name: Option<String>) -> LobbyMember {
        let id = id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| self.identities.generate());

        let name: String = name
            .unwrap_or_default()
            .trim()
            .chars()
            .take(MAX_NAME_LENGTH)
            .collect();
        let name = match name.trim_end() {
            "" => self.nicknames.generate(),
            trimmed => trimmed.to_string(),
        };

        LobbyMember { id, name }
    }
}
