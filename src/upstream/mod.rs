//! HTTP client for the football-data API.
//!
//! Every call is a single attempt with a bounded timeout; callers decide
//! what a failure means for the round in progress.

use crate::models::SquadMember;
use serde::Deserialize;
use std::fmt;
use std::time::Duration;

/// Production API root; override with FOOTBALL_DATA_BASE_URL.
pub const DEFAULT_BASE_URL: &str = "https://api.football-data.org/v4";

const AUTH_HEADER: &str = "X-Auth-Token";
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Which upstream call a failure came from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Endpoint {
    TeamSearch,
    Squad,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::TeamSearch => write!(f, "team search"),
            Endpoint::Squad => write!(f, "team squad"),
        }
    }
}

/// Why a player could not be resolved for a cell.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ResolveError {
    /// The team search returned no team for the given name.
    UnknownTeam(String),
    /// The request failed outright: transport error, timeout, or a
    /// non-success status.
    UpstreamUnavailable { endpoint: Endpoint, detail: String },
    /// The response arrived but could not be understood.
    MalformedResponse { endpoint: Endpoint, detail: String },
    /// The squad was fetched fine but holds nobody of the wanted nationality.
    NoMatch { team: String, country: String },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::UnknownTeam(name) => {
                write!(f, "no upstream team matches '{name}'")
            }
            ResolveError::UpstreamUnavailable { endpoint, detail } => {
                write!(f, "upstream {endpoint} request failed: {detail}")
            }
            ResolveError::MalformedResponse { endpoint, detail } => {
                write!(f, "upstream {endpoint} payload malformed: {detail}")
            }
            ResolveError::NoMatch { team, country } => {
                write!(f, "no {country} players in {team}'s squad")
            }
        }
    }
}

impl std::error::Error for ResolveError {}

#[derive(Debug, Deserialize)]
struct TeamDetailResponse {
    squad: Option<Vec<SquadMember>>,
}

#[derive(Debug, Deserialize)]
struct TeamSearchResponse {
    teams: Option<Vec<TeamRef>>,
}

#[derive(Debug, Deserialize)]
struct TeamRef {
    id: u32,
}

/// Parse a team detail response body into its squad list.
pub fn parse_squad_response(raw: &str) -> Result<Vec<SquadMember>, ResolveError> {
    let raw = raw.trim();
    if raw.is_empty() || raw == "null" {
        return Err(ResolveError::MalformedResponse {
            endpoint: Endpoint::Squad,
            detail: "empty response body".to_string(),
        });
    }
    let detail: TeamDetailResponse =
        serde_json::from_str(raw).map_err(|e| ResolveError::MalformedResponse {
            endpoint: Endpoint::Squad,
            detail: e.to_string(),
        })?;
    detail.squad.ok_or_else(|| ResolveError::MalformedResponse {
        endpoint: Endpoint::Squad,
        detail: "payload has no squad field".to_string(),
    })
}

/// Parse a team search response body into the first matching team's id.
pub fn parse_team_search_response(raw: &str, team_name: &str) -> Result<u32, ResolveError> {
    let raw = raw.trim();
    if raw.is_empty() || raw == "null" {
        return Err(ResolveError::MalformedResponse {
            endpoint: Endpoint::TeamSearch,
            detail: "empty response body".to_string(),
        });
    }
    let search: TeamSearchResponse =
        serde_json::from_str(raw).map_err(|e| ResolveError::MalformedResponse {
            endpoint: Endpoint::TeamSearch,
            detail: e.to_string(),
        })?;
    search
        .teams
        .unwrap_or_default()
        .first()
        .map(|team| team.id)
        .ok_or_else(|| ResolveError::UnknownTeam(team_name.to_string()))
}

/// Thin client over the football-data REST API.
pub struct FootballDataClient {
    http: reqwest::Client,
    base_url: String,
    api_token: String,
}

impl FootballDataClient {
    pub fn new(
        base_url: impl Into<String>,
        api_token: impl Into<String>,
    ) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            http,
            base_url,
            api_token: api_token.into(),
        })
    }

    /// Build a client from FOOTBALL_DATA_BASE_URL and FOOTBALL_DATA_API_TOKEN.
    pub fn from_env() -> Result<Self, reqwest::Error> {
        let base_url = std::env::var("FOOTBALL_DATA_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let api_token = std::env::var("FOOTBALL_DATA_API_TOKEN").unwrap_or_default();
        if api_token.is_empty() {
            log::warn!("FOOTBALL_DATA_API_TOKEN is not set; upstream requests will be unauthenticated");
        }
        Self::new(base_url, api_token)
    }

    async fn fetch_body(
        &self,
        endpoint: Endpoint,
        request: reqwest::RequestBuilder,
    ) -> Result<String, ResolveError> {
        let response = request
            .header(AUTH_HEADER, self.api_token.as_str())
            .send()
            .await
            .map_err(|e| ResolveError::UpstreamUnavailable {
                endpoint,
                detail: e.to_string(),
            })?;
        let status = response.status();
        if !status.is_success() {
            return Err(ResolveError::UpstreamUnavailable {
                endpoint,
                detail: format!("status {status}"),
            });
        }
        response
            .text()
            .await
            .map_err(|e| ResolveError::UpstreamUnavailable {
                endpoint,
                detail: e.to_string(),
            })
    }

    /// Look a team up by name; yields the id of the first match.
    pub async fn search_team_id(&self, team_name: &str) -> Result<u32, ResolveError> {
        let url = format!("{}/teams", self.base_url);
        let request = self.http.get(url).query(&[("name", team_name)]);
        let body = self.fetch_body(Endpoint::TeamSearch, request).await?;
        parse_team_search_response(&body, team_name)
    }

    /// Fetch a team's current squad by team id.
    pub async fn fetch_squad(&self, team_id: u32) -> Result<Vec<SquadMember>, ResolveError> {
        let url = format!("{}/teams/{team_id}", self.base_url);
        let request = self.http.get(url);
        let body = self.fetch_body(Endpoint::Squad, request).await?;
        parse_squad_response(&body)
    }
}
