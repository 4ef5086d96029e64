use async_trait::async_trait;
use sqlx::Row;

use crate::application::ports::track_repository::TrackRepository;
use crate::domain::schedule::model::Track;
use crate::infrastructure::db::DbPool;

pub struct SqlxTrackRepository {
    pub pool: DbPool,
}

impl SqlxTrackRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TrackRepository for SqlxTrackRepository {
    async fn create(&self, name: &str) -> anyhow::Result<Track> {
        let row = sqlx::query("INSERT INTO tracks (name) VALUES (?) RETURNING id, name")
            .bind(name)
            .fetch_one(&self.pool)
            .await?;
        Ok(Track {
            id: row.get("id"),
            name: row.get("name"),
        })
    }

    async fn list(&self) -> anyhow::Result<Vec<Track>> {
        let rows = sqlx::query("SELECT id, name FROM tracks ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows
            .into_iter()
            .map(|r| Track {
                id: r.get("id"),
                name: r.get("name"),
            })
            .collect())
    }
}
