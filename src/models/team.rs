//! The fixed team/country grid the game is played on.

use serde::{Deserialize, Serialize};

/// A team row in the grid, tied to its upstream football-data id.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    /// Upstream provider id (football-data.org team id).
    pub external_id: u32,
}

impl Team {
    pub fn new(name: impl Into<String>, external_id: u32) -> Self {
        Self {
            name: name.into(),
            external_id,
        }
    }
}

/// The grid axes: teams (rows) and countries (columns). Fixed at startup; a
/// cell is addressed by (team index, country index).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub teams: Vec<Team>,
    pub countries: Vec<String>,
}

impl GridConfig {
    pub fn new(teams: Vec<Team>, countries: Vec<String>) -> Self {
        Self { teams, countries }
    }

    /// Team at a row index, if inside the grid.
    pub fn team(&self, index: usize) -> Option<&Team> {
        self.teams.get(index)
    }

    /// Country at a column index, if inside the grid.
    pub fn country(&self, index: usize) -> Option<&str> {
        self.countries.get(index).map(String::as_str)
    }
}

impl Default for GridConfig {
    /// The stock 3×3 grid: three clubs against three nationalities.
    fn default() -> Self {
        Self {
            teams: vec![
                Team::new("Manchester United", 66),
                Team::new("Real Madrid", 86),
                Team::new("Bayern Munich", 5),
            ],
            countries: vec![
                "England".to_string(),
                "Spain".to_string(),
                "Germany".to_string(),
            ],
        }
    }
}
