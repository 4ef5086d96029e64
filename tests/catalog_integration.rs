//! Track and speaker endpoints over an in-memory store.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::{get, post, test_app};

#[tokio::test]
async fn created_track_appears_in_listing_with_assigned_id() {
    let app = test_app().await;

    let (status, created) = post(&app, "/tracks", json!({"name": "AI"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["name"], "AI");
    let id = created["id"].as_i64().expect("assigned id");
    assert!(id > 0);

    let (status, listed) = get(&app, "/tracks").await;
    assert_eq!(status, StatusCode::OK);
    let tracks = listed.as_array().unwrap();
    assert!(tracks.iter().any(|t| t["id"] == id && t["name"] == "AI"));
}

#[tokio::test]
async fn tracks_listing_starts_empty() {
    let app = test_app().await;
    let (status, listed) = get(&app, "/tracks").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn created_speaker_appears_in_listing() {
    let app = test_app().await;

    let (status, created) = post(&app, "/speakers", json!({"name": "Ada Lovelace"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["name"], "Ada Lovelace");

    let (status, listed) = get(&app, "/speakers").await;
    assert_eq!(status, StatusCode::OK);
    let speakers = listed.as_array().unwrap();
    assert_eq!(speakers.len(), 1);
    assert_eq!(speakers[0]["name"], "Ada Lovelace");
}

#[tokio::test]
async fn health_reports_ok_against_live_store() {
    let app = test_app().await;
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
