use async_trait::async_trait;

use crate::domain::schedule::model::{NewSubSession, SubSession};

#[async_trait]
pub trait SubSessionRepository: Send + Sync {
    /// Creates the sub-session and its speaker join rows atomically.
    /// The parent session and every speaker id must exist.
    async fn create(&self, new: &NewSubSession) -> anyhow::Result<SubSession>;

    async fn list(&self, parent_session_id: Option<i64>) -> anyhow::Result<Vec<SubSession>>;
}
