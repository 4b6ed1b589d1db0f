//! REST API endpoint handlers for the hero API.
//!
//! All handlers work against the in-memory [`HeroTable`](crate::state::HeroTable)
//! in the shared [`AppState`].
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Minimal HTML status page |
//! | `GET` | `/api/heroes` | List heroes (`?name=` filters) |
//! | `GET` | `/api/heroes/{id}` | Get one hero |
//! | `PUT` | `/api/heroes` | Replace a hero |
//! | `POST` | `/api/heroes` | Create a hero |
//! | `DELETE` | `/api/heroes/{id}` | Delete a hero |

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use heroes_types::{Hero, HeroId, HeroName, NewHero};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request bodies and query parameters
// ---------------------------------------------------------------------------

/// Query parameters for `GET /api/heroes`.
#[derive(Debug, serde::Deserialize)]
pub struct HeroesQuery {
    /// Case-insensitive name fragment to filter by.
    pub name: Option<String>,
}

/// Body of `POST /api/heroes`.
///
/// The name is validated by the handler rather than during extraction so a
/// blank name is a 400 with a JSON error body.
#[derive(Debug, serde::Deserialize)]
pub struct CreateHeroBody {
    /// Requested name.
    pub name: String,
}

// ---------------------------------------------------------------------------
// GET / -- minimal HTML status page
// ---------------------------------------------------------------------------

/// Serve a minimal HTML page with the hero count and API links.
pub async fn index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let count = state.heroes.read().await.len();

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Tour of Heroes API</title>
</head>
<body>
    <h1>Tour of Heroes API</h1>
    <p>Heroes: {count}</p>
    <ul>
        <li><a href="/api/heroes">GET /api/heroes</a> -- List heroes (?name=term to search)</li>
        <li>GET /api/heroes/:id -- Single hero</li>
        <li>POST /api/heroes -- Create hero</li>
        <li>PUT /api/heroes -- Update hero</li>
        <li>DELETE /api/heroes/:id -- Delete hero</li>
    </ul>
</body>
</html>"#
    ))
}

// ---------------------------------------------------------------------------
// GET /api/heroes -- list or search
// ---------------------------------------------------------------------------

/// List all heroes in id order, or those matching `?name=`.
pub async fn list_heroes(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HeroesQuery>,
) -> Json<Vec<Hero>> {
    let table = state.heroes.read().await;

    let heroes = match params.name.as_deref().map(str::trim) {
        Some(term) if !term.is_empty() => table.search(term),
        _ => table.list(),
    };
    debug!(count = heroes.len(), term = ?params.name, "listed heroes");

    Json(heroes)
}

// ---------------------------------------------------------------------------
// GET /api/heroes/{id} -- single hero
// ---------------------------------------------------------------------------

/// Return one hero, or 404.
pub async fn get_hero(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
) -> Result<Json<Hero>, ApiError> {
    let id = parse_id(&id_str)?;
    let table = state.heroes.read().await;

    table
        .get(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("hero {id}")))
}

// ---------------------------------------------------------------------------
// PUT /api/heroes -- update
// ---------------------------------------------------------------------------

/// Replace an existing hero with the full record in the body.
///
/// Returns 204 on success and 404 if no hero has that id.
pub async fn update_hero(
    State(state): State<Arc<AppState>>,
    Json(hero): Json<Hero>,
) -> Result<StatusCode, ApiError> {
    let name = validate_name(&hero.name)?;
    let id = hero.id;
    let mut table = state.heroes.write().await;

    if !table.update(Hero::new(id, name)) {
        return Err(ApiError::NotFound(format!("hero {id}")));
    }
    info!(%id, "hero updated");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// POST /api/heroes -- create
// ---------------------------------------------------------------------------

/// Create a hero with a server-assigned id; 201 with the new record.
pub async fn add_hero(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateHeroBody>,
) -> Result<impl IntoResponse, ApiError> {
    let name = HeroName::parse(&body.name).map_err(|e| ApiError::InvalidHero(e.to_string()))?;
    let mut table = state.heroes.write().await;

    let hero = table.insert(NewHero::new(name))?;
    info!(id = %hero.id, name = %hero.name, "hero created");

    Ok((StatusCode::CREATED, Json(hero)))
}

// ---------------------------------------------------------------------------
// DELETE /api/heroes/{id} -- delete
// ---------------------------------------------------------------------------

/// Delete a hero and return the removed record, or 404.
pub async fn delete_hero(
    State(state): State<Arc<AppState>>,
    Path(id_str): Path<String>,
) -> Result<Json<Hero>, ApiError> {
    let id = parse_id(&id_str)?;
    let mut table = state.heroes.write().await;

    let removed = table
        .remove(id)
        .ok_or_else(|| ApiError::NotFound(format!("hero {id}")))?;
    info!(%id, "hero deleted");

    Ok(Json(removed))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse an integer hero id from a path segment.
fn parse_id(s: &str) -> Result<HeroId, ApiError> {
    s.trim()
        .parse::<i64>()
        .map(HeroId::new)
        .map_err(|e| ApiError::InvalidId(format!("{s:?}: {e}")))
}

/// Trim a submitted name and reject it if blank.
fn validate_name(raw: &str) -> Result<String, ApiError> {
    HeroName::parse(raw)
        .map(String::from)
        .map_err(|e| ApiError::InvalidHero(e.to_string()))
}
