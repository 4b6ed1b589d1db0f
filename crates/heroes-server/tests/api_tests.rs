//! Integration tests for the hero API endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server. This validates handler logic and routing
//! without needing a live network connection.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use heroes_server::router::build_router;
use heroes_server::state::{AppState, HeroTable};
use heroes_types::{Hero, HeroId};
use serde_json::Value;
use tower::ServiceExt;

fn seeded() -> (Arc<AppState>, Router) {
    let state = Arc::new(AppState::new());
    let router = build_router(Arc::clone(&state));
    (state, router)
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =========================================================================
// Tests
// =========================================================================

#[tokio::test]
async fn test_index_returns_html() {
    let (_, router) = seeded();

    let response = router
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.contains("text/html"));
}

#[tokio::test]
async fn test_list_heroes_seeded() {
    let (_, router) = seeded();

    let response = router
        .oneshot(Request::get("/api/heroes").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json.as_array().unwrap().len(), 9);
    assert_eq!(json[0], serde_json::json!({"id": 12, "name": "Dr. Nice"}));
}

#[tokio::test]
async fn test_list_heroes_empty() {
    let router = build_router(Arc::new(AppState::empty()));

    let response = router
        .oneshot(Request::get("/api/heroes").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json, serde_json::json!([]));
}

#[tokio::test]
async fn test_search_with_trailing_slash() {
    let (_, router) = seeded();

    let response = router
        .oneshot(
            Request::get("/api/heroes/?name=dr")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Dr. Nice", "Dr. IQ"]);
}

#[tokio::test]
async fn test_get_hero_by_id() {
    let (_, router) = seeded();

    let response = router
        .oneshot(Request::get("/api/heroes/16").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["name"], "RubberMan");
}

#[tokio::test]
async fn test_get_hero_not_found() {
    let (_, router) = seeded();

    let response = router
        .oneshot(
            Request::get("/api/heroes/9999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], 404);
    assert_eq!(json["error"], "hero 9999 not found");
}

#[tokio::test]
async fn test_get_hero_invalid_id() {
    let (_, router) = seeded();

    let response = router
        .oneshot(
            Request::get("/api/heroes/not-a-number")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_add_hero_assigns_next_id() {
    let (state, router) = seeded();

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/heroes",
            &serde_json::json!({"name": "  Mr. Tutorial "}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json, serde_json::json!({"id": 21, "name": "Mr. Tutorial"}));
    assert_eq!(state.heroes.read().await.len(), 10);
}

#[tokio::test]
async fn test_add_hero_into_empty_table_starts_at_eleven() {
    let router = build_router(Arc::new(AppState::empty()));

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/heroes",
            &serde_json::json!({"name": "RubberMan"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["id"], 11);
}

#[tokio::test]
async fn test_add_hero_blank_name_rejected() {
    let (state, router) = seeded();

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/heroes",
            &serde_json::json!({"name": "   "}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(state.heroes.read().await.len(), 9);
}

#[tokio::test]
async fn test_update_hero() {
    let (state, router) = seeded();

    let response = router
        .oneshot(json_request(
            "PUT",
            "/api/heroes",
            &serde_json::json!({"id": 13, "name": "Bombasto the Bold"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let table = state.heroes.read().await;
    assert_eq!(
        table.get(HeroId::new(13)).map(|h| h.name.as_str()),
        Some("Bombasto the Bold")
    );
}

#[tokio::test]
async fn test_update_missing_hero_not_found() {
    let (state, router) = seeded();

    let response = router
        .oneshot(json_request(
            "PUT",
            "/api/heroes",
            &serde_json::json!({"id": 404, "name": "Nobody"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(state.heroes.read().await.get(HeroId::new(404)).is_none());
}

#[tokio::test]
async fn test_update_blank_name_rejected() {
    let (_, router) = seeded();

    let response = router
        .oneshot(json_request(
            "PUT",
            "/api/heroes",
            &serde_json::json!({"id": 13, "name": " "}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_hero_returns_record() {
    let (state, router) = seeded();

    let response = router
        .oneshot(
            Request::delete("/api/heroes/20")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json, serde_json::json!({"id": 20, "name": "Tornado"}));
    assert!(state.heroes.read().await.get(HeroId::new(20)).is_none());
}

#[tokio::test]
async fn test_delete_missing_hero_not_found() {
    let state = Arc::new(AppState::with_table(HeroTable::from_heroes([Hero::new(
        HeroId::new(1),
        "Solo",
    )])));
    let router = build_router(state);

    let response = router
        .oneshot(Request::delete("/api/heroes/2").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
