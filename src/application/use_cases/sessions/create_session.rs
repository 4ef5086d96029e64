use crate::application::ports::session_repository::SessionRepository;
use crate::domain::schedule::model::{NewSession, Session};

pub struct CreateSession<'a, R: SessionRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: SessionRepository + ?Sized> CreateSession<'a, R> {
    pub async fn execute(&self, new: &NewSession) -> anyhow::Result<Session> {
        self.repo.create(new).await
    }
}
