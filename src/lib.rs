//! Soccer guessing game: library with models, game logic, and the upstream client.

pub mod logic;
pub mod models;
pub mod upstream;

pub use logic::{
    apply_resolution, begin_selection, pick_matching_player, reset_round, submit_guess,
    PlayerResolver, Resolution, ResolutionTicket,
};
pub use models::{
    Game, GameError, GameId, GridConfig, GuessOutcome, Round, RoundPhase, RoundView, SquadMember,
    Team, MAX_GUESSES,
};
pub use upstream::{Endpoint, FootballDataClient, ResolveError};
