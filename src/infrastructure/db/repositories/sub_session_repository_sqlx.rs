use async_trait::async_trait;
use sqlx::Row;

use crate::application::ports::sub_session_repository::SubSessionRepository;
use crate::domain::schedule::model::{NewSubSession, Speaker, SubSession};
use crate::infrastructure::db::DbPool;

pub struct SqlxSubSessionRepository {
    pub pool: DbPool,
}

impl SqlxSubSessionRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn speakers_of(&self, sub_session_id: i64) -> anyhow::Result<Vec<Speaker>> {
        let rows = sqlx::query(
            r#"SELECT sp.id, sp.name
               FROM sub_session_speakers sss
               JOIN speakers sp ON sp.id = sss.speaker_id
               WHERE sss.sub_session_id = ?
               ORDER BY sp.id"#,
        )
        .bind(sub_session_id)
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

#[async_trait]
impl SubSessionRepository for SqlxSubSessionRepository {
    async fn create(&self, new: &NewSubSession) -> anyhow::Result<SubSession> {
        let mut tx = self.pool.begin().await?;
        // The parent FK is checked here; a nonexistent parent session
        // fails the insert before any join rows exist.
        let result = sqlx::query(
            "INSERT INTO sub_sessions (parent_session_id, name, description) VALUES (?, ?, ?)",
        )
        .bind(new.parent_session_id)
        .bind(&new.name)
        .bind(&new.description)
        .execute(&mut *tx)
        .await?;
        let id = result.last_insert_rowid();

        for speaker_id in &new.speaker_ids {
            sqlx::query(
                "INSERT INTO sub_session_speakers (sub_session_id, speaker_id) VALUES (?, ?)",
            )
            .bind(id)
            .bind(speaker_id)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;

        Ok(SubSession {
            id,
            parent_session_id: new.parent_session_id,
            name: new.name.clone(),
            description: new.description.clone(),
            speakers: self.speakers_of(id).await?,
        })
    }

    async fn list(&self, parent_session_id: Option<i64>) -> anyhow::Result<Vec<SubSession>> {
        let rows = if let Some(parent) = parent_session_id {
            sqlx::query(
                r#"SELECT id, parent_session_id, name, description
                   FROM sub_sessions WHERE parent_session_id = ? ORDER BY id"#,
            )
            .bind(parent)
            .fetch_all(&self.pool)
            .await?
        } else {
            sqlx::query(
                r#"SELECT id, parent_session_id, name, description
                   FROM sub_sessions ORDER BY id"#,
            )
            .fetch_all(&self.pool)
            .await?
        };

        let mut subs = Vec::with_capacity(rows.len());
        for r in rows {
            let id: i64 = r.get("id");
            subs.push(SubSession {
                id,
                parent_session_id: r.get("parent_session_id"),
                name: r.get("name"),
                description: r.get("description"),
                speakers: self.speakers_of(id).await?,
            });
        }
        Ok(subs)
    }
}
