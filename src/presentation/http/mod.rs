use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::bootstrap::app_context::AppContext;
use crate::infrastructure::db::DbPool;

pub mod health;
pub mod sessions;
pub mod speakers;
pub mod sub_sessions;
pub mod tracks;

/// JSON error body returned by every failing endpoint:
/// `{error: <context>, details: <underlying message>}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    pub fn bad_request(context: &str, err: impl std::fmt::Display) -> Self {
        let details = err.to_string();
        error!(error = %details, "{context}");
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorBody {
                error: context.to_string(),
                details: Some(details),
            },
        }
    }

    pub fn internal(context: &str, err: impl std::fmt::Display) -> Self {
        let details = err.to_string();
        error!(error = %details, "{context}");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: ErrorBody {
                error: context.to_string(),
                details: Some(details),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Builds the full application router against explicit store handles.
/// Tests construct isolated instances the same way `main` does.
pub fn app_router(ctx: AppContext, pool: DbPool) -> Router {
    Router::new()
        .merge(health::routes(pool))
        .merge(tracks::routes(ctx.clone()))
        .merge(speakers::routes(ctx.clone()))
        .merge(sessions::routes(ctx.clone()))
        .merge(sub_sessions::routes(ctx))
}
