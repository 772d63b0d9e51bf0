//! Single binary web server: guessing-game REST API plus the player proxy.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default; the browser frontend is served separately,
//! so CORS is left open. Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).
//! Upstream auth comes from FOOTBALL_DATA_API_TOKEN (a .env file is honored).

use actix_cors::Cors;
use actix_web::{
    get, post,
    web::{Data, Json, Path},
    App, HttpResponse, HttpResponseBuilder, HttpServer, Responder,
};
use serde::Deserialize;
use soccer_guess_web::{
    apply_resolution, begin_selection, reset_round, submit_guess, Endpoint, FootballDataClient,
    Game, GameId, GridConfig, PlayerResolver, Resolution, ResolveError, RoundView,
};
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Per-game entry: game data + last activity time (for auto-cleanup).
struct GameEntry {
    game: Game,
    last_activity: Instant,
}

/// In-memory state: many games by ID (sessioned). Entries are removed after 2h inactivity.
type AppState = Data<RwLock<HashMap<GameId, GameEntry>>>;

/// Inactivity threshold: games not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(2 * 3600);

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// What clients see of a game; the hidden player stays hidden until revealed.
#[derive(serde::Serialize)]
struct GameView {
    id: GameId,
    round: RoundView,
}

impl GameView {
    fn from_game(game: &Game) -> Self {
        Self {
            id: game.id,
            round: RoundView::from_round(&game.round),
        }
    }
}

#[derive(Deserialize)]
struct SelectCellBody {
    team_index: usize,
    country_index: usize,
}

#[derive(Deserialize)]
struct GuessBody {
    guess: String,
}

#[derive(Default, Deserialize)]
struct GetPlayerBody {
    #[serde(default)]
    team: String,
    #[serde(default)]
    country: String,
}

/// Path segment: game id (e.g. /api/games/{id})
#[derive(Deserialize)]
struct GamePath {
    id: GameId,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "soccer-guess-web",
    })
}

/// The grid clients render: team rows and country columns.
#[get("/api/grid")]
async fn api_grid(grid: Data<GridConfig>) -> HttpResponse {
    HttpResponse::Ok().json(grid.get_ref())
}

/// Create a new game (returns it with id; client stores id for subsequent requests).
#[post("/api/games")]
async fn api_create_game(state: AppState, grid: Data<GridConfig>) -> HttpResponse {
    let game = Game::new(grid.get_ref().clone());
    let view = GameView::from_game(&game);
    let id = game.id;
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.insert(
        id,
        GameEntry {
            game,
            last_activity: Instant::now(),
        },
    );
    HttpResponse::Ok().json(view)
}

/// Get a game by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/games/{id}")]
async fn api_get_game(state: AppState, path: Path<GamePath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(GameView::from_game(&entry.game))
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No game" })),
    }
}

/// Select a grid cell: starts a round and resolves its player upstream.
/// The lock is not held across the upstream call; if a newer selection or a
/// reset lands in the meantime, this resolution is dropped as stale.
#[post("/api/games/{id}/select")]
async fn api_select_cell(
    state: AppState,
    resolver: Data<PlayerResolver>,
    path: Path<GamePath>,
    body: Json<SelectCellBody>,
) -> HttpResponse {
    let ticket = {
        let mut g = match state.write() {
            Ok(guard) => guard,
            Err(_) => return HttpResponse::InternalServerError().body("lock error"),
        };
        let entry = match g.get_mut(&path.id) {
            Some(e) => e,
            None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No game" })),
        };
        entry.last_activity = Instant::now();
        match begin_selection(&mut entry.game, body.team_index, body.country_index) {
            Ok(ticket) => ticket,
            Err(e) => {
                return HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
            }
        }
    };

    let resolution = match resolver.resolve(&ticket.team, &ticket.country).await {
        Ok(player) => Resolution::Found(player),
        Err(err) => {
            log::warn!(
                "resolution failed for {} / {}: {err}",
                ticket.team.name,
                ticket.country
            );
            Resolution::NotFound
        }
    };

    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No game" })),
    };
    entry.last_activity = Instant::now();
    if !apply_resolution(&mut entry.game, &ticket, resolution) {
        log::debug!("discarded stale resolution for round {}", ticket.round_no);
    }
    HttpResponse::Ok().json(GameView::from_game(&entry.game))
}

/// Submit a guess for the current round.
#[post("/api/games/{id}/guess")]
async fn api_submit_guess(
    state: AppState,
    path: Path<GamePath>,
    body: Json<GuessBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No game" })),
    };
    entry.last_activity = Instant::now();
    let outcome = submit_guess(&mut entry.game, &body.guess);
    log::debug!("guess on game {}: {:?}", path.id, outcome);
    HttpResponse::Ok().json(GameView::from_game(&entry.game))
}

/// Abandon the current round and go back to the grid.
#[post("/api/games/{id}/reset")]
async fn api_reset_round(state: AppState, path: Path<GamePath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No game" })),
    };
    entry.last_activity = Instant::now();
    reset_round(&mut entry.game);
    HttpResponse::Ok().json(GameView::from_game(&entry.game))
}

/// Map a resolution failure to the proxy's public status and message.
fn proxy_error_response(err: &ResolveError) -> (HttpResponseBuilder, String) {
    match err {
        ResolveError::UnknownTeam(_) => (HttpResponse::NotFound(), "Team not found.".to_string()),
        ResolveError::NoMatch { team, country } => (
            HttpResponse::NotFound(),
            format!("No players from {country} found in team {team}."),
        ),
        ResolveError::MalformedResponse {
            endpoint: Endpoint::Squad,
            ..
        } => (
            HttpResponse::NotFound(),
            "No players found for this team.".to_string(),
        ),
        ResolveError::MalformedResponse {
            endpoint: Endpoint::TeamSearch,
            ..
        } => (
            HttpResponse::InternalServerError(),
            "Internal server error.".to_string(),
        ),
        ResolveError::UpstreamUnavailable {
            endpoint: Endpoint::TeamSearch,
            ..
        } => (
            HttpResponse::InternalServerError(),
            "Failed to fetch team details.".to_string(),
        ),
        ResolveError::UpstreamUnavailable {
            endpoint: Endpoint::Squad,
            ..
        } => (
            HttpResponse::InternalServerError(),
            "Failed to fetch squad data.".to_string(),
        ),
    }
}

/// Stateless proxy: look a team up by free-form name, pick a random player of
/// the given nationality from its squad, and return the full member record.
#[post("/api/get-player")]
async fn api_get_player(
    resolver: Data<PlayerResolver>,
    body: Option<Json<GetPlayerBody>>,
) -> HttpResponse {
    let body = body.map(|b| b.into_inner()).unwrap_or_default();
    let team = body.team.trim();
    let country = body.country.trim();
    if team.is_empty() || country.is_empty() {
        return HttpResponse::BadRequest()
            .json(serde_json::json!({ "error": "Country and team are required." }));
    }
    match resolver.resolve_by_name(team, country).await {
        Ok(member) => HttpResponse::Ok().json(serde_json::json!({ "player": member })),
        Err(err) => {
            log::warn!("get-player failed for {team} / {country}: {err}");
            let (mut builder, message) = proxy_error_response(&err);
            builder.json(serde_json::json!({ "error": message }))
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // A .env file is a dev convenience; deployments set the environment directly.
    let _ = dotenvy::dotenv();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let client = FootballDataClient::from_env().map_err(std::io::Error::other)?;
    let resolver = Data::new(PlayerResolver::new(client));
    let grid = Data::new(GridConfig::default());
    let state = Data::new(RwLock::new(HashMap::<GameId, GameEntry>::new()));

    // Background task: every 30 minutes, remove games inactive for 2+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive game(s) (no activity for 2h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(state.clone())
            .app_data(resolver.clone())
            .app_data(grid.clone())
            .service(api_health)
            .service(api_grid)
            .service(api_create_game)
            .service(api_get_game)
            .service(api_select_cell)
            .service(api_submit_guess)
            .service(api_reset_round)
            .service(api_get_player)
    })
    .bind(bind)?
    .run()
    .await
}
