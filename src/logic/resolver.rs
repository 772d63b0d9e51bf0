//! Picking a player for a grid cell from upstream squad data.

use crate::models::{SquadMember, Team};
use crate::upstream::{FootballDataClient, ResolveError};
use rand::seq::SliceRandom;
use rand::Rng;

/// Pick one squad member of the given nationality uniformly at random.
///
/// Returns None when nobody in the squad matches. Takes the RNG as an
/// argument so tests can seed it.
pub fn pick_matching_player<'a, R: Rng + ?Sized>(
    squad: &'a [SquadMember],
    country: &str,
    rng: &mut R,
) -> Option<&'a SquadMember> {
    let matching: Vec<&SquadMember> = squad
        .iter()
        .filter(|member| member.has_nationality(country))
        .collect();
    matching.choose(rng).copied()
}

/// Resolves grid cells to player names via the football-data API.
pub struct PlayerResolver {
    client: FootballDataClient,
}

impl PlayerResolver {
    pub fn new(client: FootballDataClient) -> Self {
        Self { client }
    }

    /// Resolve a grid cell: fetch the team's squad by its known id and pick
    /// a random player of the cell's nationality.
    pub async fn resolve(&self, team: &Team, country: &str) -> Result<String, ResolveError> {
        let squad = self.client.fetch_squad(team.external_id).await?;
        let mut rng = rand::thread_rng();
        let member = pick_matching_player(&squad, country, &mut rng).ok_or_else(|| {
            ResolveError::NoMatch {
                team: team.name.clone(),
                country: country.to_string(),
            }
        })?;
        Ok(member.name.clone())
    }

    /// Resolve for a free-form team name: look the team up by name first,
    /// then fetch its squad and pick. Returns the full member record.
    pub async fn resolve_by_name(
        &self,
        team_name: &str,
        country: &str,
    ) -> Result<SquadMember, ResolveError> {
        let team_id = self.client.search_team_id(team_name).await?;
        let squad = self.client.fetch_squad(team_id).await?;
        let mut rng = rand::thread_rng();
        pick_matching_player(&squad, country, &mut rng)
            .cloned()
            .ok_or_else(|| ResolveError::NoMatch {
                team: team_name.to_string(),
                country: country.to_string(),
            })
    }
}
