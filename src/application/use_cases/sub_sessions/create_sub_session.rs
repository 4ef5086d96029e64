use crate::application::ports::sub_session_repository::SubSessionRepository;
use crate::domain::schedule::model::{NewSubSession, SubSession};

pub struct CreateSubSession<'a, R: SubSessionRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: SubSessionRepository + ?Sized> CreateSubSession<'a, R> {
    pub async fn execute(&self, new: &NewSubSession) -> anyhow::Result<SubSession> {
        self.repo.create(new).await
    }
}
