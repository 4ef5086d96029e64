//! Sub-session creation against a parent session, speaker wiring, and
//! parent-scoped listing.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::{get, post, test_app};

async fn seed_session(app: &axum::Router, name: &str) -> i64 {
    let (status, body) = post(
        app,
        "/sessions",
        json!({
            "name": name,
            "start_time": "2024-01-01T09:00:00Z",
            "end_time": "2024-01-01T10:00:00Z",
            "date": "2024-01-01"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["id"].as_i64().unwrap()
}

#[tokio::test]
async fn create_sub_session_under_valid_parent_with_speaker() {
    let app = test_app().await;
    let parent = seed_session(&app, "Workshop day").await;
    let (_, speaker) = post(&app, "/speakers", json!({"name": "Ada"})).await;
    let speaker_id = speaker["id"].as_i64().unwrap();

    let (status, created) = post(
        &app,
        "/sub_sessions",
        json!({
            "parent_session_id": parent,
            "name": "Hands-on lab",
            "description": "Bring a laptop",
            "speakerIds": [speaker_id]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["parent_session_id"], parent);
    assert_eq!(created["name"], "Hands-on lab");
    let speakers = created["speakers"].as_array().unwrap();
    assert_eq!(speakers.len(), 1);
    assert_eq!(speakers[0]["id"], speaker_id);
}

#[tokio::test]
async fn create_sub_session_with_nonexistent_parent_fails() {
    let app = test_app().await;
    let (status, err) = post(
        &app,
        "/sub_sessions",
        json!({"parent_session_id": 42, "name": "Orphan"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["error"], "Failed to create sub-session");
    assert!(err["details"].is_string());
}

#[tokio::test]
async fn listing_filters_by_parent_session_id() {
    let app = test_app().await;
    let first = seed_session(&app, "Day one").await;
    let second = seed_session(&app, "Day two").await;
    post(
        &app,
        "/sub_sessions",
        json!({"parent_session_id": first, "name": "Morning lab"}),
    )
    .await;
    post(
        &app,
        "/sub_sessions",
        json!({"parent_session_id": second, "name": "Evening lab"}),
    )
    .await;

    let (status, all) = get(&app, "/sub_sessions").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 2);

    let (status, scoped) = get(&app, &format!("/sub_sessions?parent_session_id={first}")).await;
    assert_eq!(status, StatusCode::OK);
    let subs = scoped.as_array().unwrap();
    assert_eq!(subs.len(), 1);
    assert_eq!(subs[0]["name"], "Morning lab");
}

#[tokio::test]
async fn sub_sessions_appear_expanded_on_the_parent_create_response_shape() {
    let app = test_app().await;
    let parent = seed_session(&app, "Main session").await;
    post(
        &app,
        "/sub_sessions",
        json!({"parent_session_id": parent, "name": "Segment"}),
    )
    .await;

    // The list endpoint keeps payloads small, so sub-sessions stay on
    // their own resource.
    let (status, listed) = get(&app, "/sessions").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!listed[0].as_object().unwrap().contains_key("subSessions"));
}

#[tokio::test]
async fn empty_parent_filter_lists_all_sub_sessions() {
    let app = test_app().await;
    let parent = seed_session(&app, "Day one").await;
    post(
        &app,
        "/sub_sessions",
        json!({"parent_session_id": parent, "name": "Morning lab"}),
    )
    .await;

    let (status, listed) = get(&app, "/sub_sessions?parent_session_id=").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn non_numeric_parent_filter_is_a_client_error() {
    let app = test_app().await;
    let (status, err) = get(&app, "/sub_sessions?parent_session_id=xyz").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["error"], "Invalid sub-session filter");
}
