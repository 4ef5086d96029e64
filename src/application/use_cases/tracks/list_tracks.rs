use crate::application::ports::track_repository::TrackRepository;
use crate::domain::schedule::model::Track;

pub struct ListTracks<'a, R: TrackRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: TrackRepository + ?Sized> ListTracks<'a, R> {
    pub async fn execute(&self) -> anyhow::Result<Vec<Track>> {
        self.repo.list().await
    }
}
