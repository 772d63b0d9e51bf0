//! Starting a round: grid cell selection and applying the resolution result.

use crate::models::{Game, GameError, Round, RoundPhase, Team};

/// What the resolution attempt for a selection came back with.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Resolution {
    /// A player matching the cell was picked; carries their name.
    Found(String),
    /// No matching player, or the upstream data was unavailable.
    NotFound,
}

/// Handed out by [`begin_selection`]; identifies which round a later
/// [`apply_resolution`] call belongs to.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolutionTicket {
    pub round_no: u64,
    pub team: Team,
    pub country: String,
}

/// Start a new round on the cell at (team_index, country_index).
///
/// Supersedes whatever the previous round was doing and puts the game in
/// Resolving. Returns the ticket the caller must present when the player
/// lookup finishes.
///
/// Out-of-grid indices are a caller bug and panic in debug builds; release
/// builds report them as an invalid selection.
pub fn begin_selection(
    game: &mut Game,
    team_index: usize,
    country_index: usize,
) -> Result<ResolutionTicket, GameError> {
    debug_assert!(
        game.grid.team(team_index).is_some() && game.grid.country(country_index).is_some(),
        "selection ({team_index}, {country_index}) outside the configured grid"
    );
    let Some(team) = game.grid.team(team_index) else {
        return Err(GameError::InvalidSelection);
    };
    let Some(country) = game.grid.country(country_index) else {
        return Err(GameError::InvalidSelection);
    };
    let team = team.clone();
    let country = country.to_string();

    game.rounds_started += 1;
    game.round = Round {
        round_no: game.rounds_started,
        team: Some(team.clone()),
        country: Some(country.clone()),
        resolved_player: None,
        guess_count: 0,
        revealed: false,
        phase: RoundPhase::Resolving,
        status_message: "Fetching a random player...".to_string(),
    };

    Ok(ResolutionTicket {
        round_no: game.rounds_started,
        team,
        country,
    })
}

/// Apply a finished player lookup to the game.
///
/// Returns false (and changes nothing) when the result is stale: the round
/// it was started for is no longer the one resolving, because a newer
/// selection or a reset superseded it.
pub fn apply_resolution(game: &mut Game, ticket: &ResolutionTicket, resolution: Resolution) -> bool {
    let round = &mut game.round;
    if round.phase != RoundPhase::Resolving || round.round_no != ticket.round_no {
        return false;
    }
    match resolution {
        Resolution::Found(player) => {
            round.resolved_player = Some(player);
            round.guess_count = 0;
            round.phase = RoundPhase::Ready;
            round.status_message = format!(
                "A player from {} who is from {} has been chosen. Good luck!",
                ticket.team.name, ticket.country
            );
        }
        Resolution::NotFound => {
            round.phase = RoundPhase::Exhausted;
            round.status_message = format!(
                "No players found for {} / {}, or data unavailable.",
                ticket.team.name, ticket.country
            );
        }
    }
    true
}
