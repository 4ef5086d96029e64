use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::MatchedPath;
use dotenvy::dotenv;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use confsched_api::bootstrap::app_context::{AppContext, AppServices};
use confsched_api::bootstrap::config::Config;
use confsched_api::infrastructure::db;
use confsched_api::infrastructure::db::repositories::session_repository_sqlx::SqlxSessionRepository;
use confsched_api::infrastructure::db::repositories::speaker_repository_sqlx::SqlxSpeakerRepository;
use confsched_api::infrastructure::db::repositories::sub_session_repository_sqlx::SqlxSubSessionRepository;
use confsched_api::infrastructure::db::repositories::track_repository_sqlx::SqlxTrackRepository;
use confsched_api::presentation::http::app_router;

#[derive(OpenApi)]
#[openapi(
    paths(
        confsched_api::presentation::http::tracks::create_track,
        confsched_api::presentation::http::tracks::list_tracks,
        confsched_api::presentation::http::speakers::create_speaker,
        confsched_api::presentation::http::speakers::list_speakers,
        confsched_api::presentation::http::sessions::create_session,
        confsched_api::presentation::http::sessions::list_sessions,
        confsched_api::presentation::http::sub_sessions::create_sub_session,
        confsched_api::presentation::http::sub_sessions::list_sub_sessions,
        confsched_api::presentation::http::health::health,
    ),
    components(schemas(
        confsched_api::presentation::http::ErrorBody,
        confsched_api::presentation::http::tracks::TrackItem,
        confsched_api::presentation::http::tracks::CreateTrackRequest,
        confsched_api::presentation::http::speakers::SpeakerItem,
        confsched_api::presentation::http::speakers::CreateSpeakerRequest,
        confsched_api::presentation::http::sessions::SessionDetail,
        confsched_api::presentation::http::sessions::SessionListItem,
        confsched_api::presentation::http::sessions::CreateSessionRequest,
        confsched_api::presentation::http::sub_sessions::SubSessionItem,
        confsched_api::presentation::http::sub_sessions::CreateSubSessionRequest,
        confsched_api::presentation::http::health::HealthResp,
    )),
    tags(
        (name = "Tracks", description = "Topical categories sessions can be tagged with"),
        (name = "Speakers", description = "Presenters"),
        (name = "Sessions", description = "Scheduled conference sessions"),
        (name = "SubSessions", description = "Child segments of a session"),
        (name = "Health", description = "System health checks")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "confsched_api=debug,axum=info,tower_http=info".into()),
        )
        .init();

    let cfg = Config::from_env()?;
    info!(?cfg, "Starting conference schedule API");

    // Database
    let pool = db::connect_pool(&cfg.database_url).await?;
    db::migrate(&pool).await?;

    let services = AppServices::new(
        Arc::new(SqlxTrackRepository::new(pool.clone())),
        Arc::new(SqlxSpeakerRepository::new(pool.clone())),
        Arc::new(SqlxSessionRepository::new(pool.clone())),
        Arc::new(SqlxSubSessionRepository::new(pool.clone())),
    );
    let ctx = AppContext::new(cfg.clone(), services);

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([http::Method::GET, http::Method::POST, http::Method::OPTIONS])
        .allow_headers([http::header::CONTENT_TYPE]);

    let app = app_router(ctx, pool.clone())
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &http::Request<_>| {
                let method = req.method().clone();
                let uri = req.uri().clone();
                let matched = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                tracing::info_span!("http", %method, %uri, matched_path = %matched)
            }),
        );

    let addr = SocketAddr::from(([0, 0, 0, 0], cfg.port));
    info!(%addr, "HTTP API listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
