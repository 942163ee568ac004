//! Multi-player actions that drive a round forward
#![allow(dead_code)] // Test utilities may not all be used in every test

use spyfall::game::GameActionResponse;
use spyfall::GameModel;

use super::setup::TestSetup;

impl TestSetup {
    pub async fn request_vote(&self, game: &GameModel, player_id: &str) -> GameActionResponse {
        self.state
            .game_service
            .request_vote(&game.id, player_id)
            .await
            .unwrap()
    }

    /// Every player asks for a vote, in turn order
    pub async fn open_vote(&self, game: &GameModel) {
        for player in &game.players {
            self.request_vote(game, &player.player_id).await;
        }
    }

    /// Everyone votes for `target`; the target votes for somebody else
    pub async fn accuse(&self, game: &GameModel, target: &str) {
        let scapegoat = game
            .players
            .iter()
            .find(|p| p.player_id != target)
            .map(|p| p.player_id.clone())
            .unwrap();

        for player in &game.players {
            let choice = if player.player_id == target {
                scapegoat.as_str()
            } else {
                target
            };
            self.state
                .game_service
                .cast_vote(&game.id, &player.player_id, choice)
                .await
                .unwrap();
        }
    }

    pub async fn tally(&self, game: &GameModel) -> GameActionResponse {
        self.state.game_service.tally_votes(&game.id).await.unwrap()
    }

    /// Any player that is not the spy
    pub fn civilian(&self, game: &GameModel) -> String {
        game.players
            .iter()
            .find(|p| p.player_id != game.spy_id)
            .map(|p| p.player_id.clone())
            .unwrap()
    }
}
