use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::use_cases::sessions::create_session::CreateSession;
use crate::application::use_cases::sessions::list_sessions::ListSessions;
use crate::bootstrap::app_context::AppContext;
use crate::domain::schedule::filter::build_session_filters;
use crate::domain::schedule::model::{NewSession, Session, SessionSummary};
use crate::presentation::http::ApiError;
use crate::presentation::http::speakers::SpeakerItem;
use crate::presentation::http::sub_sessions::SubSessionItem;
use crate::presentation::http::tracks::TrackItem;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateSessionRequest {
    pub name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub date: NaiveDate,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// External/legacy identifier, distinct from the store-assigned id.
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub is_virtual: bool,
    #[serde(default)]
    pub event_name: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub session_type: Option<String>,
    #[serde(default, rename = "trackIds")]
    pub track_ids: Vec<i64>,
    #[serde(default, rename = "speakerIds")]
    pub speaker_ids: Vec<i64>,
}

/// Fully expanded session, returned by create.
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionDetail {
    pub id: i64,
    pub name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub date: NaiveDate,
    pub location: Option<String>,
    pub description: Option<String>,
    pub session_id: Option<String>,
    pub is_virtual: bool,
    pub event_name: Option<String>,
    pub timezone: Option<String>,
    pub session_type: Option<String>,
    pub tracks: Vec<TrackItem>,
    pub speakers: Vec<SpeakerItem>,
    #[serde(rename = "subSessions")]
    pub sub_sessions: Vec<SubSessionItem>,
}

impl From<Session> for SessionDetail {
    fn from(s: Session) -> Self {
        SessionDetail {
            id: s.id,
            name: s.name,
            start_time: s.start_time,
            end_time: s.end_time,
            date: s.date,
            location: s.location,
            description: s.description,
            session_id: s.external_id,
            is_virtual: s.is_virtual,
            event_name: s.event_name,
            timezone: s.timezone,
            session_type: s.session_type,
            tracks: s.tracks.into_iter().map(Into::into).collect(),
            speakers: s.speakers.into_iter().map(Into::into).collect(),
            sub_sessions: s.sub_sessions.into_iter().map(Into::into).collect(),
        }
    }
}

/// Reduced list projection: no description, is_virtual, event_name or
/// sub-sessions.
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionListItem {
    pub id: i64,
    pub name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub date: NaiveDate,
    pub location: Option<String>,
    pub session_id: Option<String>,
    pub timezone: Option<String>,
    pub session_type: Option<String>,
    pub tracks: Vec<TrackItem>,
    pub speakers: Vec<SpeakerItem>,
}

impl From<SessionSummary> for SessionListItem {
    fn from(s: SessionSummary) -> Self {
        SessionListItem {
            id: s.id,
            name: s.name,
            start_time: s.start_time,
            end_time: s.end_time,
            date: s.date,
            location: s.location,
            session_id: s.external_id,
            timezone: s.timezone,
            session_type: s.session_type,
            tracks: s.tracks.into_iter().map(Into::into).collect(),
            speakers: s.speakers.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListSessionsQuery {
    pub event_name: Option<String>,
    pub date: Option<String>,
    pub track_id: Option<String>,
    pub speaker_id: Option<String>,
    pub search: Option<String>,
}

#[utoipa::path(post, path = "/sessions", tag = "Sessions",
    request_body = CreateSessionRequest,
    responses((status = 200, body = SessionDetail), (status = 400, body = crate::presentation::http::ErrorBody)))]
pub async fn create_session(
    State(ctx): State<AppContext>,
    Json(req): Json<CreateSessionRequest>,
) -> Result<Json<SessionDetail>, ApiError> {
    let new = NewSession {
        name: req.name,
        start_time: req.start_time,
        end_time: req.end_time,
        date: req.date,
        location: req.location,
        description: req.description,
        external_id: req.session_id,
        is_virtual: req.is_virtual,
        event_name: req.event_name,
        timezone: req.timezone,
        session_type: req.session_type,
        track_ids: req.track_ids,
        speaker_ids: req.speaker_ids,
    };
    let repo = ctx.session_repo();
    let uc = CreateSession {
        repo: repo.as_ref(),
    };
    let session = uc
        .execute(&new)
        .await
        .map_err(|e| ApiError::bad_request("Failed to create session", e))?;
    Ok(Json(session.into()))
}

#[utoipa::path(get, path = "/sessions", tag = "Sessions",
    params(
        ("event_name" = Option<String>, Query, description = "Exact event name"),
        ("date" = Option<String>, Query, description = "Session date, YYYY-MM-DD"),
        ("track_id" = Option<String>, Query, description = "Sessions tagged with this track id"),
        ("speaker_id" = Option<String>, Query, description = "Sessions featuring this speaker id"),
        ("search" = Option<String>, Query, description = "Case-insensitive name/description search")
    ),
    responses((status = 200, body = [SessionListItem]),
        (status = 400, body = crate::presentation::http::ErrorBody),
        (status = 500, body = crate::presentation::http::ErrorBody)))]
pub async fn list_sessions(
    State(ctx): State<AppContext>,
    Query(q): Query<ListSessionsQuery>,
) -> Result<Json<Vec<SessionListItem>>, ApiError> {
    let filters = build_session_filters(
        q.event_name,
        q.date.as_deref(),
        q.track_id.as_deref(),
        q.speaker_id.as_deref(),
        q.search,
    )
    .map_err(|e| ApiError::bad_request("Invalid session filter", e))?;

    let repo = ctx.session_repo();
    let uc = ListSessions {
        repo: repo.as_ref(),
    };
    let sessions = uc
        .execute(&filters)
        .await
        .map_err(|e| ApiError::internal("Failed to fetch sessions", e))?;
    Ok(Json(sessions.into_iter().map(Into::into).collect()))
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/sessions", get(list_sessions).post(create_session))
        .with_state(ctx)
}
