use axum::{
    Json, Router,
    extract::State,
    routing::get,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::use_cases::tracks::create_track::CreateTrack;
use crate::application::use_cases::tracks::list_tracks::ListTracks;
use crate::bootstrap::app_context::AppContext;
use crate::domain::schedule::model::Track;
use crate::presentation::http::ApiError;

#[derive(Debug, Serialize, ToSchema)]
pub struct TrackItem {
    pub id: i64,
    pub name: String,
}

impl From<Track> for TrackItem {
    fn from(t: Track) -> Self {
        TrackItem {
            id: t.id,
            name: t.name,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTrackRequest {
    pub name: String,
}

#[utoipa::path(post, path = "/tracks", tag = "Tracks",
    request_body = CreateTrackRequest,
    responses((status = 200, body = TrackItem), (status = 400, body = crate::presentation::http::ErrorBody)))]
pub async fn create_track(
    State(ctx): State<AppContext>,
    Json(req): Json<CreateTrackRequest>,
) -> Result<Json<TrackItem>, ApiError> {
    let repo = ctx.track_repo();
    let uc = CreateTrack {
        repo: repo.as_ref(),
    };
    let track = uc
        .execute(&req.name)
        .await
        .map_err(|e| ApiError::bad_request("Failed to create track", e))?;
    Ok(Json(track.into()))
}

#[utoipa::path(get, path = "/tracks", tag = "Tracks",
    responses((status = 200, body = [TrackItem])))]
pub async fn list_tracks(State(ctx): State<AppContext>) -> Result<Json<Vec<TrackItem>>, ApiError> {
    let repo = ctx.track_repo();
    let uc = ListTracks {
        repo: repo.as_ref(),
    };
    let tracks = uc
        .execute()
        .await
        .map_err(|e| ApiError::internal("Failed to fetch tracks", e))?;
    Ok(Json(tracks.into_iter().map(Into::into).collect()))
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/tracks", get(list_tracks).post(create_track))
        .with_state(ctx)
}
