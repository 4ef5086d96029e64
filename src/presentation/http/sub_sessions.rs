use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::use_cases::sub_sessions::create_sub_session::CreateSubSession;
use crate::application::use_cases::sub_sessions::list_sub_sessions::ListSubSessions;
use crate::bootstrap::app_context::AppContext;
use crate::domain::schedule::filter::parse_id;
use crate::domain::schedule::model::{NewSubSession, SubSession};
use crate::presentation::http::ApiError;
use crate::presentation::http::speakers::SpeakerItem;

#[derive(Debug, Serialize, ToSchema)]
pub struct SubSessionItem {
    pub id: i64,
    pub parent_session_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub speakers: Vec<SpeakerItem>,
}

impl From<SubSession> for SubSessionItem {
    fn from(s: SubSession) -> Self {
        SubSessionItem {
            id: s.id,
            parent_session_id: s.parent_session_id,
            name: s.name,
            description: s.description,
            speakers: s.speakers.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateSubSessionRequest {
    pub parent_session_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "speakerIds")]
    pub speaker_ids: Vec<i64>,
}

#[derive(Debug, Deserialize)]
pub struct ListSubSessionsQuery {
    pub parent_session_id: Option<String>,
}

#[utoipa::path(post, path = "/sub_sessions", tag = "SubSessions",
    request_body = CreateSubSessionRequest,
    responses((status = 200, body = SubSessionItem), (status = 400, body = crate::presentation::http::ErrorBody)))]
pub async fn create_sub_session(
    State(ctx): State<AppContext>,
    Json(req): Json<CreateSubSessionRequest>,
) -> Result<Json<SubSessionItem>, ApiError> {
    let new = NewSubSession {
        parent_session_id: req.parent_session_id,
        name: req.name,
        description: req.description,
        speaker_ids: req.speaker_ids,
    };
    let repo = ctx.sub_session_repo();
    let uc = CreateSubSession {
        repo: repo.as_ref(),
    };
    let sub = uc
        .execute(&new)
        .await
        .map_err(|e| ApiError::bad_request("Failed to create sub-session", e))?;
    Ok(Json(sub.into()))
}

#[utoipa::path(get, path = "/sub_sessions", tag = "SubSessions",
    params(("parent_session_id" = Option<String>, Query, description = "Owning session id")),
    responses((status = 200, body = [SubSessionItem]),
        (status = 400, body = crate::presentation::http::ErrorBody),
        (status = 500, body = crate::presentation::http::ErrorBody)))]
pub async fn list_sub_sessions(
    State(ctx): State<AppContext>,
    Query(q): Query<ListSubSessionsQuery>,
) -> Result<Json<Vec<SubSessionItem>>, ApiError> {
    let parent = q
        .parent_session_id
        .as_deref()
        .filter(|raw| !raw.trim().is_empty())
        .map(|raw| parse_id("parent_session_id", raw))
        .transpose()
        .map_err(|e| ApiError::bad_request("Invalid sub-session filter", e))?;

    let repo = ctx.sub_session_repo();
    let uc = ListSubSessions {
        repo: repo.as_ref(),
    };
    let subs = uc
        .execute(parent)
        .await
        .map_err(|e| ApiError::internal("Failed to fetch sub-sessions", e))?;
    Ok(Json(subs.into_iter().map(Into::into).collect()))
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route(
            "/sub_sessions",
            get(list_sub_sessions).post(create_sub_session),
        )
        .with_state(ctx)
}
