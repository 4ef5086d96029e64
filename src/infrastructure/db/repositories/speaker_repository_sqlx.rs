use async_trait::async_trait;
use sqlx::Row;

use crate::application::ports::speaker_repository::SpeakerRepository;
use crate::domain::schedule::model::Speaker;
use crate::infrastructure::db::DbPool;

pub struct SqlxSpeakerRepository {
    pub pool: DbPool,
}

impl SqlxSpeakerRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SpeakerRepository for SqlxSpeakerRepository {
    async fn create(&self, name: &str) -> anyhow::Result<Speaker> {
        let row = sqlx::query("INSERT INTO speakers (name) VALUES (?) RETURNING id, name")
            .bind(name)
            .fetch_one(&self.pool)
            .await?;
        Ok(Speaker {
            id: row.get("id"),
            name: row.get("name"),
        })
    }

    async fn list(&self) -> anyhow::Result<Vec<Speaker>> {
        let rows = sqlx::query("SELECT id, name FROM speakers ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows
            .into_iter()
            .map(|r| Speaker {
                id: r.get("id"),
                name: r.get("name"),
            })
            .collect())
    }
}
