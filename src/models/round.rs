//! Round state: the lifecycle of one play cycle and its guess bookkeeping.

use crate::models::team::Team;
use serde::{Deserialize, Serialize};

/// Guesses allowed per round before the name is disclosed.
pub const MAX_GUESSES: u32 = 3;

/// Errors that can occur during game operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GameError {
    /// Team or country index outside the configured grid (caller error).
    InvalidSelection,
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::InvalidSelection => write!(f, "Invalid selection"),
        }
    }
}

/// Where the current round is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundPhase {
    /// No cell selected.
    #[default]
    Idle,
    /// A cell was selected; the player resolution is in flight.
    Resolving,
    /// A player is resolved; guessing is allowed.
    Ready,
    /// Resolution found no matching player; inert until a new cell.
    Exhausted,
    /// Terminal: correct guess or all attempts used. Name is disclosed.
    Revealed,
}

/// Result of evaluating one submitted guess.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GuessOutcome {
    /// Guess matched; round revealed.
    Correct,
    /// Guess missed; attempts remain.
    Incorrect { attempts_left: u32 },
    /// Guess missed and used the last attempt; round revealed.
    OutOfGuesses,
    /// Round was not accepting guesses (nothing resolved, or already revealed).
    Ignored,
}

/// One play cycle: the selected cell, the hidden player, and guess state.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Round {
    /// Which selection this round belongs to (0 = idle round). Stale
    /// resolutions are discarded by comparing against this.
    pub round_no: u64,
    pub team: Option<Team>,
    pub country: Option<String>,
    /// The answer. Private so it cannot leak before `revealed`.
    pub(crate) resolved_player: Option<String>,
    pub guess_count: u32,
    pub revealed: bool,
    pub phase: RoundPhase,
    pub status_message: String,
}

impl Round {
    /// The resolved player's name, only once the round is revealed.
    pub fn resolved_player(&self) -> Option<&str> {
        if self.revealed {
            self.resolved_player.as_deref()
        } else {
            None
        }
    }

    /// Attempts left before the name is disclosed.
    pub fn attempts_left(&self) -> u32 {
        MAX_GUESSES.saturating_sub(self.guess_count)
    }
}

/// Serializable view of a round (for API responses). Carries the player
/// name only once revealed.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundView {
    pub phase: RoundPhase,
    pub team: Option<String>,
    pub country: Option<String>,
    pub guess_count: u32,
    pub attempts_left: u32,
    pub revealed: bool,
    pub status_message: String,
    pub player: Option<String>,
}

impl RoundView {
    pub fn from_round(r: &Round) -> Self {
        Self {
            phase: r.phase,
            team: r.team.as_ref().map(|t| t.name.clone()),
            country: r.country.clone(),
            guess_count: r.guess_count,
            attempts_left: r.attempts_left(),
            revealed: r.revealed,
            status_message: r.status_message.clone(),
            player: r.resolved_player().map(str::to_string),
        }
    }
}
