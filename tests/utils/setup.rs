//! Test setup - a lobby full of players on an in-memory store
#![allow(dead_code)] // Test utilities may not all be used in every test

use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;
use std::time::Duration;

use super::mocks::ContendedStore;
use spyfall::{
    lobby::JoinLobbyRequest, AppConfig, AppState, AppStateBuilder, Clock, GameModel,
    InMemoryDocumentStore, LobbyMember, LobbyRole, ManualClock, RoleBook, Shuffler,
};

pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 18, 0, 0).unwrap()
}

pub struct TestSetup {
    pub state: AppState,
    pub store: Arc<InMemoryDocumentStore>,
    /// The store the services actually talk to
    pub contended: Arc<ContendedStore>,
    pub clock: Arc<ManualClock>,
    pub players: Vec<LobbyMember>,
}

pub struct TestSetupBuilder {
    player_count: usize,
    config: AppConfig,
    seed: u64,
    role_book: Option<RoleBook>,
    read_delay: Duration,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            player_count: 0,
            config: AppConfig::default(),
            seed: 42,
            role_book: None,
            read_delay: Duration::ZERO,
        }
    }

    pub fn with_players(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_role_book(mut self, role_book: RoleBook) -> Self {
        self.role_book = Some(role_book);
        self
    }

    /// Pause every store read so concurrent requests race on the same version
    pub fn with_read_delay(mut self, delay: Duration) -> Self {
        self.read_delay = delay;
        self
    }

    pub async fn build(self) -> TestSetup {
        let store = Arc::new(InMemoryDocumentStore::new());
        let contended = Arc::new(ContendedStore::new(store.clone(), self.read_delay));
        let clock = Arc::new(ManualClock::new(start_time()));

        let mut builder = AppStateBuilder::new()
            .with_config(self.config)
            .with_store(contended.clone())
            .with_clock(clock.clone() as Arc<dyn Clock>)
            .with_shuffler(Shuffler::seeded(self.seed));
        if let Some(role_book) = self.role_book {
            builder = builder.with_role_book(role_book);
        }
        let state = builder.build();

        let mut players = Vec::new();
        for i in 1..=self.player_count {
            let response = state
                .lobby_service
                .join(JoinLobbyRequest {
                    role: LobbyRole::Player,
                    id: Some(format!("p{}", i)),
                    name: Some(format!("Player {}", i)),
                })
                .await
                .unwrap();
            players.push(response.member);
        }

        TestSetup {
            state,
            store,
            contended,
            clock,
            players,
        }
    }
}

impl TestSetup {
    /// Starts a round from the lobby on behalf of the first player
    pub async fn start_game(&self) -> GameModel {
        let starter = &self.players[0].id;
        self.state
            .assembler
            .start_from_lobby(starter)
            .await
            .unwrap()
    }

    pub async fn game(&self, game_id: &str) -> GameModel {
        self.state.game_service.get_game(game_id).await.unwrap()
    }
}
