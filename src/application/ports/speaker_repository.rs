use async_trait::async_trait;

use crate::domain::schedule::model::Speaker;

#[async_trait]
pub trait SpeakerRepository: Send + Sync {
    async fn create(&self, name: &str) -> anyhow::Result<Speaker>;
    async fn list(&self) -> anyhow::Result<Vec<Speaker>>;
}
