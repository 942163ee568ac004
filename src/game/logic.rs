// State transitions of a single round
//
// Every method here runs inside a document transaction: it inspects the
// freshly read game, mutates it in place and reports whether anything
// happened. Stale requests come back as `Transition::Ignored` so concurrent
// clients can race on the same transition without surfacing errors.

use chrono::{DateTime, Utc};
use std::collections::HashMap;

use super::models::{
    EndedBy, GameModel, GameResult, GameStatus, SpyGuessing, VoteStatus, Winner,
};
use crate::clock::deadline_after;
use crate::config::AppConfig;
use crate::shared::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Applied,
    /// Nothing to do in the current phase, with the reason for the logs
    Ignored(&'static str),
}

impl Transition {
    pub fn is_applied(&self) -> bool {
        matches!(self, Transition::Applied)
    }
}

impl GameModel {
    fn require_player(&self, player_id: &str) -> Result<(), AppError> {
        if self.is_player(player_id) {
            Ok(())
        } else {
            Err(AppError::NotAuthorized(format!(
                "{} is not playing in this game",
                player_id
            )))
        }
    }

    fn require_non_spy(&self, player_id: &str) -> Result<(), AppError> {
        self.require_player(player_id)?;
        if player_id == self.spy_id {
            return Err(AppError::NotAuthorized(
                "the spy cannot vote to end the game".to_string(),
            ));
        }
        Ok(())
    }

    /// Asks for an accusation vote, opening it once enough players asked
    pub fn request_vote(
        &mut self,
        player_id: &str,
        now: DateTime<Utc>,
        config: &AppConfig,
    ) -> Result<Transition, AppError> {
        self.require_player(player_id)?;

        if self.status != GameStatus::InProgress {
            return Ok(Transition::Ignored("game is not in progress"));
        }
        if !self.vote.requesters.insert(player_id.to_string()) {
            return Ok(Transition::Ignored("vote already requested by this player"));
        }

        if self.vote.requesters.len() >= config.quorum(self.players.len()) {
            self.status = GameStatus::Voting;
            self.vote.status = VoteStatus::Active;
            self.vote.timer_ends_at = Some(deadline_after(now, config.vote_duration));
        }

        Ok(Transition::Applied)
    }

    /// Records or changes a ballot; last write wins
    pub fn cast_vote(&mut self, voter_id: &str, target_id: &str) -> Result<Transition, AppError> {
        self.require_player(voter_id)?;

        if self.status != GameStatus::Voting || self.vote.status != VoteStatus::Active {
            return Err(AppError::PhaseMismatch(
                "no accusation vote is open".to_string(),
            ));
        }
        if !self.is_player(target_id) {
            return Err(AppError::BadRequest(format!(
                "{} is not playing in this game",
                target_id
            )));
        }
        if voter_id == target_id {
            return Err(AppError::BadRequest(
                "players cannot vote for themselves".to_string(),
            ));
        }

        if self.vote.votes.get(voter_id).map(String::as_str) == Some(target_id) {
            return Ok(Transition::Ignored("vote unchanged"));
        }
        self.vote
            .votes
            .insert(voter_id.to_string(), target_id.to_string());
        Ok(Transition::Applied)
    }

    /// The player with the most votes, ties going to the earliest in turn order
    pub fn accused(&self) -> Option<&str> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for target in self.vote.votes.values() {
            *counts.entry(target.as_str()).or_default() += 1;
        }

        let mut best: Option<(&str, usize)> = None;
        for player in &self.players {
            let count = counts.get(player.player_id.as_str()).copied().unwrap_or(0);
            if count > 0 && best.map_or(true, |(_, top)| count > top) {
                best = Some((player.player_id.as_str(), count));
            }
        }
        best.map(|(player_id, _)| player_id)
    }

    /// Closes the accusation vote and resolves it
    pub fn tally_votes(&mut self) -> Result<Transition, AppError> {
        if self.status != GameStatus::Voting {
            return Ok(Transition::Ignored("no vote to tally"));
        }

        let accused = self.accused().map(str::to_string);
        let accused_name = accused
            .as_deref()
            .and_then(|id| self.player(id))
            .map(|p| p.name.clone());

        self.vote.status = VoteStatus::Finished;

        if accused.as_deref() == Some(self.spy_id.as_str()) {
            let provisional_result = GameResult {
                winner: Winner::Spy,
                voted_player_name: accused_name,
                spy_name: self.spy_name(),
                location: self.location.clone(),
                spy_guessed_location: None,
                spy_guessed_correctly: None,
                ended_by: EndedBy::SpyGuess,
            };
            self.spy_guessing = Some(SpyGuessing {
                spy_id: self.spy_id.clone(),
                voted_by_players: true,
                location_options: self.all_locations.clone(),
                provisional_result,
            });
            self.status = GameStatus::SpyGuessing;
        } else {
            self.result = Some(GameResult {
                winner: Winner::Spy,
                voted_player_name: accused_name,
                spy_name: self.spy_name(),
                location: self.location.clone(),
                spy_guessed_location: None,
                spy_guessed_correctly: None,
                ended_by: EndedBy::WrongAccusation,
            });
            self.status = GameStatus::Finished;
        }

        Ok(Transition::Applied)
    }

    /// The unmasked spy's last chance
    pub fn spy_guess_location(&mut self, spy_id: &str, guess: &str) -> Result<Transition, AppError> {
        let guessing = match (&self.status, &self.spy_guessing) {
            (GameStatus::SpyGuessing, Some(guessing)) => guessing,
            _ => {
                return Err(AppError::PhaseMismatch(
                    "the spy is not guessing right now".to_string(),
                ))
            }
        };
        if guessing.spy_id != spy_id {
            return Err(AppError::NotAuthorized(
                "only the spy may guess the location".to_string(),
            ));
        }
        if !guessing.location_options.iter().any(|l| l == guess) {
            return Err(AppError::BadRequest(format!("unknown location: {}", guess)));
        }

        let correct = guess == self.location;
        let mut result = guessing.provisional_result.clone();
        result.winner = if correct { Winner::Spy } else { Winner::Players };
        result.spy_guessed_location = Some(guess.to_string());
        result.spy_guessed_correctly = Some(correct);

        self.result = Some(result);
        self.spy_guessing = None;
        self.status = GameStatus::Finished;
        Ok(Transition::Applied)
    }

    /// Opens the end-game vote; asking counts as voting
    pub fn request_end_game_vote(
        &mut self,
        player_id: &str,
        config: &AppConfig,
    ) -> Result<Transition, AppError> {
        self.require_non_spy(player_id)?;

        if self.status != GameStatus::InProgress {
            return Ok(Transition::Ignored("game is not in progress"));
        }

        let asked = self.end_game_vote.requesters.insert(player_id.to_string());
        let voted = self.end_game_vote.votes.insert(player_id.to_string());
        if !asked && !voted {
            return Ok(Transition::Ignored("end-game vote already requested by this player"));
        }
        if self.end_game_vote.status == VoteStatus::Idle {
            self.end_game_vote.status = VoteStatus::Active;
        }

        self.finish_if_end_game_quorum(config);
        Ok(Transition::Applied)
    }

    pub fn cast_end_game_vote(
        &mut self,
        voter_id: &str,
        config: &AppConfig,
    ) -> Result<Transition, AppError> {
        self.require_non_spy(voter_id)?;

        if self.status != GameStatus::InProgress {
            return Ok(Transition::Ignored("game is not in progress"));
        }
        if self.end_game_vote.status != VoteStatus::Active {
            return Ok(Transition::Ignored("no end-game vote is open"));
        }
        if !self.end_game_vote.votes.insert(voter_id.to_string()) {
            return Ok(Transition::Ignored("already voted to end the game"));
        }

        self.finish_if_end_game_quorum(config);
        Ok(Transition::Applied)
    }

    fn finish_if_end_game_quorum(&mut self, config: &AppConfig) {
        if self.end_game_vote.votes.len() < config.quorum(self.end_game_electorate()) {
            return;
        }

        self.end_game_vote.status = VoteStatus::Finished;
        self.result = Some(GameResult {
            winner: Winner::Players,
            voted_player_name: None,
            spy_name: self.spy_name(),
            location: self.location.clone(),
            spy_guessed_location: None,
            spy_guessed_correctly: None,
            ended_by: EndedBy::EndGameVote,
        });
        self.status = GameStatus::Finished;
    }

    /// Marks the round as over for good
    pub fn close(&mut self, now: DateTime<Utc>) -> Transition {
        if self.is_finished() && self.ended_at.is_some() {
            return Transition::Ignored("game already closed");
        }

        self.status = GameStatus::Finished;
        self.spy_guessing = None;
        if self.ended_at.is_none() {
            self.ended_at = Some(now);
        }
        Transition::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::models::{EndGameVoteState, PlayerAssignment, VoteState};
    use chrono::TimeZone;
    use rstest::rstest;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    }

    /// A game of `count` players where `spy_index` is the spy
    fn game(count: usize, spy_index: usize) -> GameModel {
        let players: Vec<PlayerAssignment> = (0..count)
            .map(|i| PlayerAssignment {
                player_id: format!("p{}", i),
                name: format!("Player {}", i),
                role: if i == spy_index { "Spy" } else { "Teller" }.to_string(),
                location: if i == spy_index { "???" } else { "Bank" }.to_string(),
            })
            .collect();

        GameModel {
            id: "spyfall_test".to_string(),
            created_at: now(),
            spy_id: players[spy_index].player_id.clone(),
            players,
            location: "Bank".to_string(),
            all_locations: vec!["Bank".to_string(), "Beach".to_string(), "Casino".to_string()],
            status: GameStatus::InProgress,
            timer_ends_at: now(),
            vote: VoteState::default(),
            end_game_vote: EndGameVoteState::default(),
            spy_guessing: None,
            result: None,
            ended_at: None,
        }
    }

    fn open_vote(game: &mut GameModel, config: &AppConfig) {
        let ids: Vec<String> = game.players.iter().map(|p| p.player_id.clone()).collect();
        for id in ids {
            game.request_vote(&id, now(), config).unwrap();
        }
        assert_eq!(game.status, GameStatus::Voting);
    }

    #[rstest]
    #[case(3, 3)]
    #[case(5, 4)]
    #[case(8, 6)]
    fn test_vote_opens_exactly_at_quorum(#[case] players: usize, #[case] quorum: usize) {
        let config = AppConfig::default();
        let mut game = game(players, 0);

        for i in 0..quorum - 1 {
            game.request_vote(&format!("p{}", i), now(), &config).unwrap();
            assert_eq!(game.status, GameStatus::InProgress);
        }
        game.request_vote(&format!("p{}", quorum - 1), now(), &config)
            .unwrap();

        assert_eq!(game.status, GameStatus::Voting);
        assert_eq!(game.vote.status, VoteStatus::Active);
        assert_eq!(
            game.vote.timer_ends_at,
            Some(now() + chrono::Duration::seconds(20))
        );
    }

    #[test]
    fn test_repeated_vote_request_is_ignored() {
        let config = AppConfig::default();
        let mut game = game(5, 0);

        assert!(game.request_vote("p1", now(), &config).unwrap().is_applied());
        assert_eq!(
            game.request_vote("p1", now(), &config).unwrap(),
            Transition::Ignored("vote already requested by this player")
        );
        assert_eq!(game.vote.requesters.len(), 1);
    }

    #[test]
    fn test_outsiders_cannot_request_votes() {
        let config = AppConfig::default();
        let mut game = game(3, 0);

        assert!(matches!(
            game.request_vote("stranger", now(), &config),
            Err(AppError::NotAuthorized(_))
        ));
    }

    #[test]
    fn test_cast_vote_validations() {
        let config = AppConfig::default();
        let mut game = game(4, 0);

        assert!(matches!(
            game.cast_vote("p1", "p0"),
            Err(AppError::PhaseMismatch(_))
        ));

        open_vote(&mut game, &config);
        assert!(matches!(game.cast_vote("p1", "p1"), Err(AppError::BadRequest(_))));
        assert!(matches!(game.cast_vote("p1", "ghost"), Err(AppError::BadRequest(_))));

        assert!(game.cast_vote("p1", "p2").unwrap().is_applied());
        assert!(!game.cast_vote("p1", "p2").unwrap().is_applied());
        assert!(game.cast_vote("p1", "p0").unwrap().is_applied());
        assert_eq!(game.vote.votes.get("p1").map(String::as_str), Some("p0"));
    }

    #[test]
    fn test_tie_goes_to_earliest_player() {
        let config = AppConfig::default();
        let mut game = game(4, 3);
        open_vote(&mut game, &config);

        game.cast_vote("p0", "p2").unwrap();
        game.cast_vote("p2", "p1").unwrap();

        assert_eq!(game.accused(), Some("p1"));
    }

    #[test]
    fn test_accusing_the_spy_starts_guessing() {
        let config = AppConfig::default();
        let mut game = game(4, 2);
        open_vote(&mut game, &config);
        game.cast_vote("p0", "p2").unwrap();
        game.cast_vote("p1", "p2").unwrap();
        game.cast_vote("p2", "p0").unwrap();

        assert!(game.tally_votes().unwrap().is_applied());

        assert_eq!(game.status, GameStatus::SpyGuessing);
        assert!(game.result.is_none());
        let guessing = game.spy_guessing.as_ref().unwrap();
        assert_eq!(guessing.spy_id, "p2");
        assert!(guessing.voted_by_players);
        assert_eq!(guessing.location_options, game.all_locations);
        assert_eq!(guessing.provisional_result.winner, Winner::Spy);
    }

    #[test]
    fn test_wrong_accusation_ends_with_spy_win() {
        let config = AppConfig::default();
        let mut game = game(4, 2);
        open_vote(&mut game, &config);
        game.cast_vote("p0", "p1").unwrap();
        game.cast_vote("p2", "p1").unwrap();

        game.tally_votes().unwrap();

        assert_eq!(game.status, GameStatus::Finished);
        assert!(game.spy_guessing.is_none());
        let result = game.result.as_ref().unwrap();
        assert_eq!(result.winner, Winner::Spy);
        assert_eq!(result.voted_player_name.as_deref(), Some("Player 1"));
        assert_eq!(result.ended_by, EndedBy::WrongAccusation);
    }

    #[test]
    fn test_empty_ballot_lets_the_spy_escape() {
        let config = AppConfig::default();
        let mut game = game(3, 0);
        open_vote(&mut game, &config);

        game.tally_votes().unwrap();

        let result = game.result.as_ref().unwrap();
        assert_eq!(result.winner, Winner::Spy);
        assert!(result.voted_player_name.is_none());
    }

    #[test]
    fn test_second_tally_is_a_no_op() {
        let config = AppConfig::default();
        let mut game = game(3, 1);
        open_vote(&mut game, &config);
        game.cast_vote("p0", "p2").unwrap();
        game.tally_votes().unwrap();
        let after_first = game.clone();

        assert!(!game.tally_votes().unwrap().is_applied());
        assert_eq!(game, after_first);
    }

    #[rstest]
    #[case("Bank", Winner::Spy)]
    #[case("Casino", Winner::Players)]
    fn test_spy_guess_decides_winner(#[case] guess: &str, #[case] winner: Winner) {
        let config = AppConfig::default();
        let mut game = game(3, 0);
        open_vote(&mut game, &config);
        game.cast_vote("p1", "p0").unwrap();
        game.tally_votes().unwrap();

        game.spy_guess_location("p0", guess).unwrap();

        assert_eq!(game.status, GameStatus::Finished);
        assert!(game.spy_guessing.is_none());
        let result = game.result.as_ref().unwrap();
        assert_eq!(result.winner, winner);
        assert_eq!(result.spy_guessed_location.as_deref(), Some(guess));
        assert_eq!(result.spy_guessed_correctly, Some(guess == game.location));
    }

    #[test]
    fn test_only_the_spy_guesses_in_the_guess_phase() {
        let config = AppConfig::default();
        let mut game = game(3, 0);

        assert!(matches!(
            game.spy_guess_location("p0", "Bank"),
            Err(AppError::PhaseMismatch(_))
        ));

        open_vote(&mut game, &config);
        game.cast_vote("p1", "p0").unwrap();
        game.tally_votes().unwrap();

        assert!(matches!(
            game.spy_guess_location("p1", "Bank"),
            Err(AppError::NotAuthorized(_))
        ));
        assert!(matches!(
            game.spy_guess_location("p0", "Atlantis"),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn test_end_game_vote_excludes_the_spy() {
        let config = AppConfig::default();
        // 5 players, 4 eligible, quorum ceil(2.8) = 3
        let mut game = game(5, 4);

        assert!(matches!(
            game.request_end_game_vote("p4", &config),
            Err(AppError::NotAuthorized(_))
        ));

        game.request_end_game_vote("p0", &config).unwrap();
        assert_eq!(game.end_game_vote.status, VoteStatus::Active);
        game.cast_end_game_vote("p1", &config).unwrap();
        assert_eq!(game.status, GameStatus::InProgress);

        assert!(matches!(
            game.cast_end_game_vote("p4", &config),
            Err(AppError::NotAuthorized(_))
        ));

        game.cast_end_game_vote("p2", &config).unwrap();

        assert_eq!(game.status, GameStatus::Finished);
        assert_eq!(game.end_game_vote.status, VoteStatus::Finished);
        let result = game.result.as_ref().unwrap();
        assert_eq!(result.winner, Winner::Players);
        assert_eq!(result.ended_by, EndedBy::EndGameVote);
        assert_eq!(result.spy_name, "Player 4");
    }

    #[test]
    fn test_end_game_vote_needs_to_be_opened() {
        let config = AppConfig::default();
        let mut game = game(4, 0);

        assert_eq!(
            game.cast_end_game_vote("p1", &config).unwrap(),
            Transition::Ignored("no end-game vote is open")
        );
    }

    #[test]
    fn test_end_game_vote_ignored_once_voting() {
        let config = AppConfig::default();
        let mut game = game(3, 0);
        open_vote(&mut game, &config);

        assert!(!game.request_end_game_vote("p1", &config).unwrap().is_applied());
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut game = game(3, 0);

        assert!(game.close(now()).is_applied());
        assert_eq!(game.status, GameStatus::Finished);
        assert_eq!(game.ended_at, Some(now()));
        assert!(!game.close(now() + chrono::Duration::seconds(5)).is_applied());
        assert_eq!(game.ended_at, Some(now()));
    }
}
