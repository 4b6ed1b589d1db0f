//! Axum router construction for the hero API.
//!
//! Assembles all routes into a single [`Router`] with CORS enabled so a
//! browser front end served from another origin can call it.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the hero API.
///
/// The router includes:
/// - `GET /` -- minimal HTML status page
/// - `GET|PUT|POST /api/heroes` -- list/search, update, create
/// - `GET /api/heroes/` -- same listing, for `?name=` searches
/// - `GET|DELETE /api/heroes/{id}` -- single hero, delete
///
/// CORS allows any origin; this is a development server.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Status page
        .route("/", get(handlers::index))
        // REST API
        .route(
            "/api/heroes",
            get(handlers::list_heroes)
                .put(handlers::update_hero)
                .post(handlers::add_hero),
        )
        .route("/api/heroes/", get(handlers::list_heroes))
        .route(
            "/api/heroes/{id}",
            get(handlers::get_hero).delete(handlers::delete_hero),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
