use crate::application::ports::speaker_repository::SpeakerRepository;
use crate::domain::schedule::model::Speaker;

pub struct ListSpeakers<'a, R: SpeakerRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: SpeakerRepository + ?Sized> ListSpeakers<'a, R> {
    pub async fn execute(&self) -> anyhow::Result<Vec<Speaker>> {
        self.repo.list().await
    }
}
