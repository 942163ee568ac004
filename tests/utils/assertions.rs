//! Test assertion helpers - fluent API for verifying round outcomes
#![allow(dead_code)] // Test utilities may not all be used in every test

use spyfall::game::{EndedBy, SPY_ROLE, HIDDEN_LOCATION};
use spyfall::{GameModel, GameStatus, RoleBook, Winner};
use std::collections::HashSet;

pub struct GameAssertion<'a> {
    game: &'a GameModel,
}

impl<'a> GameAssertion<'a> {
    pub fn of(game: &'a GameModel) -> Self {
        Self { game }
    }

    pub fn has_status(self, expected: GameStatus) -> Self {
        assert_eq!(self.game.status, expected, "unexpected game status");
        self
    }

    pub fn is_won_by(self, winner: Winner) -> Self {
        let result = self.game.result.as_ref().expect("game should have a result");
        assert_eq!(self.game.status, GameStatus::Finished);
        assert_eq!(result.winner, winner);
        if let Some(guess) = &result.spy_guessed_location {
            assert_eq!(
                result.spy_guessed_correctly,
                Some(guess == &self.game.location)
            );
        }
        self
    }

    pub fn ended_by(self, expected: EndedBy) -> Self {
        let result = self.game.result.as_ref().expect("game should have a result");
        assert_eq!(result.ended_by, expected);
        self
    }

    pub fn has_no_result(self) -> Self {
        assert!(self.game.result.is_none(), "game should not have a result yet");
        self
    }

    /// One spy, everyone else holds a distinct role of the chosen location
    pub fn has_complete_roles(self, role_book: &RoleBook) -> Self {
        let spies: Vec<_> = self
            .game
            .players
            .iter()
            .filter(|p| p.role == SPY_ROLE)
            .collect();
        assert_eq!(spies.len(), 1, "exactly one spy expected");
        assert_eq!(spies[0].player_id, self.game.spy_id);
        assert_eq!(spies[0].location, HIDDEN_LOCATION);

        let location = role_book
            .find(&self.game.location)
            .expect("location should come from the role book");
        let mut roles = HashSet::new();
        for player in self.game.players.iter().filter(|p| p.role != SPY_ROLE) {
            assert_eq!(player.location, self.game.location);
            assert!(location.roles.contains(&player.role));
            assert!(roles.insert(player.role.clone()), "duplicate role handed out");
        }
        self
    }
}
