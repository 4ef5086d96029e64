use std::sync::Arc;

use crate::application::ports::session_repository::SessionRepository;
use crate::application::ports::speaker_repository::SpeakerRepository;
use crate::application::ports::sub_session_repository::SubSessionRepository;
use crate::application::ports::track_repository::TrackRepository;
use crate::bootstrap::config::Config;

#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

#[derive(Clone)]
pub struct AppServices {
    track_repo: Arc<dyn TrackRepository>,
    speaker_repo: Arc<dyn SpeakerRepository>,
    session_repo: Arc<dyn SessionRepository>,
    sub_session_repo: Arc<dyn SubSessionRepository>,
}

impl AppServices {
    pub fn new(
        track_repo: Arc<dyn TrackRepository>,
        speaker_repo: Arc<dyn SpeakerRepository>,
        session_repo: Arc<dyn SessionRepository>,
        sub_session_repo: Arc<dyn SubSessionRepository>,
    ) -> Self {
        Self {
            track_repo,
            speaker_repo,
            session_repo,
            sub_session_repo,
        }
    }
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        Self {
            cfg,
            services: Arc::new(services),
        }
    }

    pub fn track_repo(&self) -> Arc<dyn TrackRepository> {
        self.services.track_repo.clone()
    }

    pub fn speaker_repo(&self) -> Arc<dyn SpeakerRepository> {
        self.services.speaker_repo.clone()
    }

    pub fn session_repo(&self) -> Arc<dyn SessionRepository> {
        self.services.session_repo.clone()
    }

    pub fn sub_session_repo(&self) -> Arc<dyn SubSessionRepository> {
        self.services.sub_session_repo.clone()
    }
}
