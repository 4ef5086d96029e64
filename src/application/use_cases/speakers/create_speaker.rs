use crate::application::ports::speaker_repository::SpeakerRepository;
use crate::domain::schedule::model::Speaker;

pub struct CreateSpeaker<'a, R: SpeakerRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: SpeakerRepository + ?Sized> CreateSpeaker<'a, R> {
    pub async fn execute(&self, name: &str) -> anyhow::Result<Speaker> {
        self.repo.create(name).await
    }
}
