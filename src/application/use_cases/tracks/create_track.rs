use crate::application::ports::track_repository::TrackRepository;
use crate::domain::schedule::model::Track;

pub struct CreateTrack<'a, R: TrackRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: TrackRepository + ?Sized> CreateTrack<'a, R> {
    pub async fn execute(&self, name: &str) -> anyhow::Result<Track> {
        self.repo.create(name).await
    }
}
