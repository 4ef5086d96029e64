use async_trait::async_trait;

use crate::domain::schedule::filter::SessionFilter;
use crate::domain::schedule::model::{NewSession, Session, SessionSummary};

#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Creates the session and its track/speaker join rows atomically.
    /// A dangling foreign id fails the whole create.
    async fn create(&self, new: &NewSession) -> anyhow::Result<Session>;

    /// Lists sessions matching every filter clause, in the reduced
    /// list projection.
    async fn list(&self, filters: &[SessionFilter]) -> anyhow::Result<Vec<SessionSummary>>;
}
