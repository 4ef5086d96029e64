use crate::application::ports::session_repository::SessionRepository;
use crate::domain::schedule::filter::SessionFilter;
use crate::domain::schedule::model::SessionSummary;

pub struct ListSessions<'a, R: SessionRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: SessionRepository + ?Sized> ListSessions<'a, R> {
    pub async fn execute(
        &self,
        filters: &[SessionFilter],
    ) -> anyhow::Result<Vec<SessionSummary>> {
        self.repo.list(filters).await
    }
}
