use async_trait::async_trait;

use crate::domain::schedule::model::Track;

#[async_trait]
pub trait TrackRepository: Send + Sync {
    async fn create(&self, name: &str) -> anyhow::Result<Track>;
    async fn list(&self) -> anyhow::Result<Vec<Track>>;
}
