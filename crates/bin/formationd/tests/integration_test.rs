//! End-to-end smoke tests for the full formationd stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real repo,
//! real service, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use formation_adapter_http_axum::cors::CorsPolicy;
use formation_adapter_http_axum::router;
use formation_adapter_http_axum::state::AppState;
use formation_adapter_storage_sqlite_sqlx::{Config, SqliteReservationRepository};
use formation_app::services::reservation_manager::ReservationManager;
use tower::ServiceExt;

/// Build a fully-wired router backed by an in-memory `SQLite` database.
async fn app() -> axum::Router {
    let db = Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .expect("in-memory database should initialise");

    let repo = SqliteReservationRepository::new(db.pool().clone());
    let state = AppState::new(ReservationManager::new(repo));

    router::build(state, &CorsPolicy::AllowAny)
}

async fn send(app: &axum::Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let resp = app.clone().oneshot(request).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_reservation(participant: i64, formation: i64) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/reservations")
        .header("content-type", "application/json")
        .body(Body::from(format!(
            r#"{{"participantId":{participant},"formationId":{formation}}}"#
        )))
        .unwrap()
}

fn ids(body: &serde_json::Value) -> Vec<i64> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect()
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = app().await.oneshot(get("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Reservations
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_empty_list_when_no_reservations() {
    let app = app().await;
    let (status, body) = send(&app, get("/api/reservations")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn should_create_reservation_with_assigned_id_and_timestamp() {
    let app = app().await;
    let (status, body) = send(&app, post_reservation(7, 4)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    assert_eq!(body["participantId"], 7);
    assert_eq!(body["formationId"], 4);
    assert!(body["reservedAt"].is_string());
}

#[tokio::test]
async fn should_keep_caller_supplied_id() {
    let app = app().await;
    let request = Request::builder()
        .method("POST")
        .uri("/api/reservations")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"id":40,"participantId":7,"formationId":4}"#))
        .unwrap();

    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 40);
}

#[tokio::test]
async fn should_list_reservations_per_participant() {
    let app = app().await;
    for (participant, formation) in [(7, 1), (7, 2), (9, 1)] {
        let (status, _) = send(&app, post_reservation(participant, formation)).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(&app, get("/api/reservations")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![1, 2, 3]);

    let (status, body) = send(&app, get("/api/reservations/participant/7")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![1, 2]);

    let (status, body) = send(&app, get("/api/reservations/participant/9")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![3]);

    let (status, body) = send(&app, get("/api/reservations/participant/5")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn should_reject_non_integer_participant_id() {
    let app = app().await;
    let (status, _) = send(&app, get("/api/reservations/participant/seven")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_map_duplicate_id_to_internal_error() {
    let app = app().await;
    let body = r#"{"id":1,"participantId":7,"formationId":4}"#;
    let request = || {
        Request::builder()
            .method("POST")
            .uri("/api/reservations")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    };

    let (status, _) = send(&app, request()).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, request()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "internal server error");
}
