//! Game session: one live round played over the configured grid.

use crate::models::round::Round;
use crate::models::team::GridConfig;
use uuid::Uuid;

/// Unique identifier for a game session.
pub type GameId = Uuid;

/// One UI session's game: the grid it plays on and its single live round.
/// Rounds are played strictly one at a time; a new selection supersedes
/// whatever the previous round was doing.
#[derive(Clone, Debug)]
pub struct Game {
    pub id: GameId,
    pub grid: GridConfig,
    /// Selections ever begun in this session; backs the monotonic round
    /// token, so it survives resets.
    pub rounds_started: u64,
    pub round: Round,
}

impl Game {
    /// Create a game in Idle with the given grid.
    pub fn new(grid: GridConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            grid,
            rounds_started: 0,
            round: Round::default(),
        }
    }
}
