//! Shared harness for HTTP integration tests: builds an isolated router
//! over an in-memory SQLite store and drives it without a socket.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use confsched_api::bootstrap::app_context::{AppContext, AppServices};
use confsched_api::bootstrap::config::Config;
use confsched_api::infrastructure::db;
use confsched_api::infrastructure::db::repositories::session_repository_sqlx::SqlxSessionRepository;
use confsched_api::infrastructure::db::repositories::speaker_repository_sqlx::SqlxSpeakerRepository;
use confsched_api::infrastructure::db::repositories::sub_session_repository_sqlx::SqlxSubSessionRepository;
use confsched_api::infrastructure::db::repositories::track_repository_sqlx::SqlxTrackRepository;
use confsched_api::presentation::http::app_router;

pub async fn test_app() -> Router {
    // A single connection keeps every query on the same in-memory
    // database.
    let pool = db::connect_pool_with("sqlite::memory:", 1)
        .await
        .expect("in-memory pool");
    db::migrate(&pool).await.expect("migrations");

    let services = AppServices::new(
        Arc::new(SqlxTrackRepository::new(pool.clone())),
        Arc::new(SqlxSpeakerRepository::new(pool.clone())),
        Arc::new(SqlxSessionRepository::new(pool.clone())),
        Arc::new(SqlxSubSessionRepository::new(pool.clone())),
    );
    let cfg = Config {
        port: 0,
        database_url: "sqlite::memory:".into(),
    };
    app_router(AppContext::new(cfg, services), pool)
}

pub async fn request(
    app: &Router,
    method: Method,
    path: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(path);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let request = match body {
        Some(json) => builder.body(Body::from(json.to_string())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

pub async fn post(app: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    request(app, Method::POST, path, Some(body)).await
}

pub async fn get(app: &Router, path: &str) -> (StatusCode, Value) {
    request(app, Method::GET, path, None).await
}
