// 🌐 HTTP API - read-only JSON over the catalog
//
// Backs the administrative view (validation reports) and the asset preloader.
// Everything served here is computed from the in-memory catalog; there is no
// write path.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::catalog::{Catalog, LeagueCatalog};
use crate::league::League;
use crate::resolver::GameNumber;
use crate::temporal::{When, MAX_YEAR, MIN_YEAR};
use crate::validator::MappingValidator;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        AppState {
            catalog: Arc::new(catalog),
        }
    }
}

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn ok(data: T) -> Response {
        (
            StatusCode::OK,
            Json(ApiResponse {
                success: true,
                data: Some(data),
                error: None,
            }),
        )
            .into_response()
    }
}

fn bad_request(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<()> {
            success: false,
            data: None,
            error: Some(message.into()),
        }),
    )
        .into_response()
}

fn league_catalog<'a>(state: &'a AppState, league: &str) -> Result<&'a LeagueCatalog, Response> {
    league
        .parse::<League>()
        .map(|league| state.catalog.league(league))
        .map_err(|e| bad_request(e.to_string()))
}

#[derive(Deserialize)]
struct DateQuery {
    date: Option<String>,
}

#[derive(Deserialize)]
struct BoxscoreQuery {
    date: Option<String>,
    game: Option<u8>,
}

#[derive(Deserialize)]
struct ValidateQuery {
    year: Option<i32>,
    from: Option<i32>,
    to: Option<i32>,
}

#[derive(Deserialize)]
struct PreloadQuery {
    year: Option<i32>,
}

#[derive(Serialize)]
struct BoxscoreResponse {
    team: String,
    reference_site_code: String,
    date: String,
    game_number: u8,
    url: String,
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> Response {
    ApiResponse::ok("OK")
}

/// GET /api/:league/teams/:team?date=
async fn get_team(
    State(state): State<AppState>,
    Path((league, team)): Path<(String, String)>,
    Query(query): Query<DateQuery>,
) -> Response {
    let catalog = match league_catalog(&state, &league) {
        Ok(catalog) => catalog,
        Err(response) => return response,
    };

    let when = When::from_option(query.date.as_deref());
    ApiResponse::ok(catalog.team_view(&team, when))
}

/// GET /api/:league/boxscore/:team?date=&game=
async fn get_boxscore(
    State(state): State<AppState>,
    Path((league, team)): Path<(String, String)>,
    Query(query): Query<BoxscoreQuery>,
) -> Response {
    let catalog = match league_catalog(&state, &league) {
        Ok(catalog) => catalog,
        Err(response) => return response,
    };

    let game = match GameNumber::from_digit(query.game.unwrap_or(0)) {
        Some(game) => game,
        None => return bad_request("game must be 0, 1 or 2"),
    };

    let date = When::from_option(query.date.as_deref()).date(catalog.league());
    let resolver = catalog.resolver();
    let reference_site_code = resolver.resolve_season(&team, catalog.league().season_of(date));
    let url = resolver.boxscore_url(&reference_site_code, date, game);

    ApiResponse::ok(BoxscoreResponse {
        team,
        reference_site_code,
        date: date.format("%Y-%m-%d").to_string(),
        game_number: game.digit(),
        url,
    })
}

/// GET /api/:league/validate?year= | ?from=&to= | (sampled)
async fn get_validation(
    State(state): State<AppState>,
    Path(league): Path<String>,
    Query(query): Query<ValidateQuery>,
) -> Response {
    let catalog = match league_catalog(&state, &league) {
        Ok(catalog) => catalog,
        Err(response) => return response,
    };
    let validator = MappingValidator::new(catalog);

    let window = MIN_YEAR..=MAX_YEAR;
    if [query.year, query.from, query.to].into_iter().flatten().any(|y| !window.contains(&y)) {
        return bad_request(format!("years must be between {} and {}", MIN_YEAR, MAX_YEAR));
    }

    let report = match (query.year, query.from, query.to) {
        (Some(year), _, _) => validator.validate_year(year),
        (None, Some(from), Some(to)) if from <= to => validator.validate_range(from, to),
        (None, Some(_), Some(_)) => return bad_request("from must not be after to"),
        (None, None, None) => validator.validate_sampled(),
        _ => return bad_request("give year, or both from and to"),
    };

    ApiResponse::ok(report)
}

/// GET /api/:league/preload?year=
async fn get_preload(
    State(state): State<AppState>,
    Path(league): Path<String>,
    Query(query): Query<PreloadQuery>,
) -> Response {
    match league_catalog(&state, &league) {
        Ok(catalog) => ApiResponse::ok(catalog.preload_manifest(query.year)),
        Err(response) => response,
    }
}

pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/:league/teams/:team", get(get_team))
        .route("/:league/boxscore/:team", get(get_boxscore))
        .route("/:league/validate", get(get_validation))
        .route("/:league/preload", get(get_preload))
        .with_state(state);

    Router::new()
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let app = router(AppState::new(Catalog::builtin()));
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json("/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], "OK");
    }

    #[tokio::test]
    async fn test_team_view() {
        let (status, body) = get_json("/api/mlb/teams/Marlins?date=2011-09-28").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["canonical_code"], "FLA");
        assert_eq!(body["data"]["reference_site_code"], "FLO");
        assert_eq!(body["data"]["matched"]["via"], "rule");
    }

    #[tokio::test]
    async fn test_unknown_league_is_bad_request() {
        let (status, body) = get_json("/api/nhl/teams/Bruins").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("nhl"));
    }

    #[tokio::test]
    async fn test_boxscore() {
        let (status, body) = get_json("/api/mlb/boxscore/Angels?date=2003-06-15&game=2").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["url"], "https://www.baseball-reference.com/boxes/ANA/ANA200306152.shtml");

        let (status, _) = get_json("/api/mlb/boxscore/Angels?date=2003-06-15&game=5").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_validate_year() {
        let (status, body) = get_json("/api/nba/validate?year=2013").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["league"], "nba");
        assert_eq!(body["data"]["summary"]["error_count"], 0);
        assert_eq!(body["data"]["years"][0]["year"], 2013);

        let (status, _) = get_json("/api/nba/validate?from=2013").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_validate_rejects_years_outside_the_window() {
        let (status, body) = get_json("/api/mlb/validate?from=-2000000000&to=2000000000").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("1850"));

        let (status, _) = get_json("/api/mlb/validate?year=9999").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = get_json("/api/mlb/validate?from=2019&to=2020").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["years"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_preload() {
        let (status, body) = get_json("/api/mlb/preload?year=2012").await;

        assert_eq!(status, StatusCode::OK);
        let urls = body["data"].as_array().unwrap();
        assert!(urls.iter().any(|u| u.as_str().unwrap().ends_with("/mlb/mia_2012.svg")));
    }
}
