// Public API - what other modules can use
pub use assembler::{assemble_game, new_game_id, RoundAssembler};
pub use deadline::{watch_game, VoteDeadlineWatcher};
pub use handlers::{
    cast_end_game_vote, cast_vote, create_game, end_game, get_game, player_view,
    request_end_game_vote, request_vote, spy_guess_location, start_game, tally_votes,
};
pub use logic::Transition;
pub use models::{
    EndGameVoteState, EndedBy, GameModel, GameResult, GameStatus, PlayerAssignment,
    SpyGuessing, VoteState, VoteStatus, Winner, FALLBACK_ROLE, GAME_ID_PREFIX, HIDDEN_LOCATION,
    SPY_ROLE,
};
pub use repository::GameRepository;
pub use service::GameService;
pub use types::{
    CastVoteRequest, CreateGameRequest, EndGameVoteSummary, GameActionResponse,
    GameCreatedResponse, PlayerActionRequest, PlayerView, PublicPlayer, SpyGuessRequest,
    StartGameRequest, VoteSummary,
};

// Internal modules
mod assembler;
mod deadline;
mod handlers;
mod logic;
mod models;
mod repository;
mod service;
mod types;
