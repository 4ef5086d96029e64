use crate::application::ports::sub_session_repository::SubSessionRepository;
use crate::domain::schedule::model::SubSession;

pub struct ListSubSessions<'a, R: SubSessionRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: SubSessionRepository + ?Sized> ListSubSessions<'a, R> {
    pub async fn execute(
        &self,
        parent_session_id: Option<i64>,
    ) -> anyhow::Result<Vec<SubSession>> {
        self.repo.list(parent_session_id).await
    }
}
