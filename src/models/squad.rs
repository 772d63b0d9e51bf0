//! Squad members as served by the upstream football-data provider.

use serde::{Deserialize, Serialize};

/// One member of a team's squad. Fetched per resolution, never persisted.
/// Only `name` is required: members with no recorded nationality simply
/// never match a grid country, instead of failing the whole payload.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SquadMember {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default, rename = "dateOfBirth")]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
}

impl SquadMember {
    /// Case-insensitive nationality comparison (Unicode lowercase on both
    /// sides, so accented country names compare correctly).
    pub fn has_nationality(&self, country: &str) -> bool {
        self.nationality
            .as_deref()
            .is_some_and(|n| n.to_lowercase() == country.to_lowercase())
    }
}
