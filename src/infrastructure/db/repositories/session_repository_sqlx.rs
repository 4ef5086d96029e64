use async_trait::async_trait;
use sqlx::{QueryBuilder, Row, Sqlite};

use crate::application::ports::session_repository::SessionRepository;
use crate::domain::schedule::filter::SessionFilter;
use crate::domain::schedule::model::{
    NewSession, Session, SessionSummary, Speaker, SubSession, Track,
};
use crate::infrastructure::db::DbPool;

pub struct SqlxSessionRepository {
    pub pool: DbPool,
}

impl SqlxSessionRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn tracks_of(&self, session_id: i64) -> anyhow::Result<Vec<Track>> {
        let rows = sqlx::query(
            r#"SELECT t.id, t.name
               FROM session_tracks st
               JOIN tracks t ON t.id = st.track_id
               WHERE st.session_id = ?
               ORDER BY t.id"#,
        )
        .bind(session_id)
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

    async fn speakers_of(&self, session_id: i64) -> anyhow::Result<Vec<Speaker>> {
        let rows = sqlx::query(
            r#"SELECT sp.id, sp.name
               FROM session_speakers ss
               JOIN speakers sp ON sp.id = ss.speaker_id
               WHERE ss.session_id = ?
               ORDER BY sp.id"#,
        )
        .bind(session_id)
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

    async fn sub_sessions_of(&self, session_id: i64) -> anyhow::Result<Vec<SubSession>> {
        let rows = sqlx::query(
            r#"SELECT id, parent_session_id, name, description
               FROM sub_sessions WHERE parent_session_id = ? ORDER BY id"#,
        )
        .bind(session_id)
        .fetch_all(&self.pool)
        .await?;
        let mut subs = Vec::with_capacity(rows.len());
        for r in rows {
            let id: i64 = r.get("id");
            let speakers = self.sub_session_speakers_of(id).await?;
            subs.push(SubSession {
                id,
                parent_session_id: r.get("parent_session_id"),
                name: r.get("name"),
                description: r.get("description"),
                speakers,
            });
        }
        Ok(subs)
    }

    async fn sub_session_speakers_of(&self, sub_session_id: i64) -> anyhow::Result<Vec<Speaker>> {
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

    async fn fetch_detail(&self, id: i64) -> anyhow::Result<Session> {
        let row = sqlx::query(
            r#"SELECT id, name, start_time, end_time, date, location, description,
                      session_id, is_virtual, event_name, timezone, session_type
               FROM sessions WHERE id = ?"#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(Session {
            id,
            name: row.get("name"),
            start_time: row.get("start_time"),
            end_time: row.get("end_time"),
            date: row.get("date"),
            location: row.get("location"),
            description: row.get("description"),
            external_id: row.get("session_id"),
            is_virtual: row.get("is_virtual"),
            event_name: row.get("event_name"),
            timezone: row.get("timezone"),
            session_type: row.get("session_type"),
            tracks: self.tracks_of(id).await?,
            speakers: self.speakers_of(id).await?,
            sub_sessions: self.sub_sessions_of(id).await?,
        })
    }
}

/// Appends `filters` as an AND-combined WHERE clause. Relation filters
/// become EXISTS probes against the join tables; `Search` lowercases both
/// sides so containment is case-insensitive regardless of collation.
fn push_filters(qb: &mut QueryBuilder<'_, Sqlite>, filters: &[SessionFilter]) {
    for (i, filter) in filters.iter().enumerate() {
        qb.push(if i == 0 { " WHERE " } else { " AND " });
        match filter {
            SessionFilter::EventName(name) => {
                qb.push("event_name = ");
                qb.push_bind(name.clone());
            }
            SessionFilter::OnDate(date) => {
                qb.push("date = ");
                qb.push_bind(*date);
            }
            SessionFilter::HasTrack(id) => {
                qb.push(
                    "EXISTS (SELECT 1 FROM session_tracks st \
                     WHERE st.session_id = sessions.id AND st.track_id = ",
                );
                qb.push_bind(*id);
                qb.push(")");
            }
            SessionFilter::HasSpeaker(id) => {
                qb.push(
                    "EXISTS (SELECT 1 FROM session_speakers ss \
                     WHERE ss.session_id = sessions.id AND ss.speaker_id = ",
                );
                qb.push_bind(*id);
                qb.push(")");
            }
            SessionFilter::Search(text) => {
                let like = format!("%{}%", text.to_lowercase());
                qb.push("(LOWER(name) LIKE ");
                qb.push_bind(like.clone());
                qb.push(" OR LOWER(COALESCE(description, '')) LIKE ");
                qb.push_bind(like);
                qb.push(")");
            }
        }
    }
}

#[async_trait]
impl SessionRepository for SqlxSessionRepository {
    async fn create(&self, new: &NewSession) -> anyhow::Result<Session> {
        let mut tx = self.pool.begin().await?;
        let result = sqlx::query(
            r#"INSERT INTO sessions
               (name, start_time, end_time, date, location, description,
                session_id, is_virtual, event_name, timezone, session_type)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(&new.name)
        .bind(new.start_time)
        .bind(new.end_time)
        .bind(new.date)
        .bind(&new.location)
        .bind(&new.description)
        .bind(&new.external_id)
        .bind(new.is_virtual)
        .bind(&new.event_name)
        .bind(&new.timezone)
        .bind(&new.session_type)
        .execute(&mut *tx)
        .await?;
        let id = result.last_insert_rowid();

        // One join row per supplied id. A dangling id trips the FK
        // constraint and rolls the whole create back.
        for track_id in &new.track_ids {
            sqlx::query("INSERT INTO session_tracks (session_id, track_id) VALUES (?, ?)")
                .bind(id)
                .bind(track_id)
                .execute(&mut *tx)
                .await?;
        }
        for speaker_id in &new.speaker_ids {
            sqlx::query("INSERT INTO session_speakers (session_id, speaker_id) VALUES (?, ?)")
                .bind(id)
                .bind(speaker_id)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;

        self.fetch_detail(id).await
    }

    async fn list(&self, filters: &[SessionFilter]) -> anyhow::Result<Vec<SessionSummary>> {
        // Reduced column set: no description, is_virtual or event_name.
        let mut qb = QueryBuilder::new(
            "SELECT id, name, start_time, end_time, date, location, \
             session_id, timezone, session_type FROM sessions",
        );
        push_filters(&mut qb, filters);
        qb.push(" ORDER BY id");
        let rows = qb.build().fetch_all(&self.pool).await?;

        let mut sessions = Vec::with_capacity(rows.len());
        for r in rows {
            let id: i64 = r.get("id");
            sessions.push(SessionSummary {
                id,
                name: r.get("name"),
                start_time: r.get("start_time"),
                end_time: r.get("end_time"),
                date: r.get("date"),
                location: r.get("location"),
                external_id: r.get("session_id"),
                timezone: r.get("timezone"),
                session_type: r.get("session_type"),
                tracks: self.tracks_of(id).await?,
                speakers: self.speakers_of(id).await?,
            });
        }
        Ok(sessions)
    }
}
