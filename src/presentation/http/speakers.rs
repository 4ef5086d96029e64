use axum::{
    Json, Router,
    extract::State,
    routing::get,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::use_cases::speakers::create_speaker::CreateSpeaker;
use crate::application::use_cases::speakers::list_speakers::ListSpeakers;
use crate::bootstrap::app_context::AppContext;
use crate::domain::schedule::model::Speaker;
use crate::presentation::http::ApiError;

#[derive(Debug, Serialize, ToSchema)]
pub struct SpeakerItem {
    pub id: i64,
    pub name: String,
}

impl From<Speaker> for SpeakerItem {
    fn from(s: Speaker) -> Self {
        SpeakerItem {
            id: s.id,
            name: s.name,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateSpeakerRequest {
    pub name: String,
}

#[utoipa::path(post, path = "/speakers", tag = "Speakers",
    request_body = CreateSpeakerRequest,
    responses((status = 200, body = SpeakerItem), (status = 400, body = crate::presentation::http::ErrorBody)))]
pub async fn create_speaker(
    State(ctx): State<AppContext>,
    Json(req): Json<CreateSpeakerRequest>,
) -> Result<Json<SpeakerItem>, ApiError> {
    let repo = ctx.speaker_repo();
    let uc = CreateSpeaker {
        repo: repo.as_ref(),
    };
    let speaker = uc
        .execute(&req.name)
        .await
        .map_err(|e| ApiError::bad_request("Failed to create speaker", e))?;
    Ok(Json(speaker.into()))
}

#[utoipa::path(get, path = "/speakers", tag = "Speakers",
    responses((status = 200, body = [SpeakerItem])))]
pub async fn list_speakers(
    State(ctx): State<AppContext>,
) -> Result<Json<Vec<SpeakerItem>>, ApiError> {
    let repo = ctx.speaker_repo();
    let uc = ListSpeakers {
        repo: repo.as_ref(),
    };
    let speakers = uc
        .execute()
        .await
        .map_err(|e| ApiError::internal("Failed to fetch speakers", e))?;
    Ok(Json(speakers.into_iter().map(Into::into).collect()))
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/speakers", get(list_speakers).post(create_speaker))
        .with_state(ctx)
}
