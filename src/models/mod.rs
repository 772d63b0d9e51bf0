//! Data structures for the guessing game: grid, squads, rounds, sessions.

mod game;
mod round;
mod squad;
mod team;

pub use game::{Game, GameId};
pub use round::{GameError, GuessOutcome, Round, RoundPhase, RoundView, MAX_GUESSES};
pub use squad::SquadMember;
pub use team::{GridConfig, Team};
