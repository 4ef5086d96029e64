use chrono::{DateTime, NaiveDate, Utc};

#[derive(Debug, Clone)]
pub struct Track {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct Speaker {
    pub id: i64,
    pub name: String,
}

/// Fully expanded session as returned by create/detail paths.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: i64,
    pub name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub date: NaiveDate,
    pub location: Option<String>,
    pub description: Option<String>,
    /// External/legacy identifier from the source system, not the row id.
    pub external_id: Option<String>,
    pub is_virtual: bool,
    pub event_name: Option<String>,
    pub timezone: Option<String>,
    pub session_type: Option<String>,
    pub tracks: Vec<Track>,
    pub speakers: Vec<Speaker>,
    pub sub_sessions: Vec<SubSession>,
}

/// Reduced projection used by the session list endpoint. Omits
/// `description`, `is_virtual`, `event_name` and sub-sessions to keep
/// list payloads small.
#[derive(Debug, Clone)]
pub struct SessionSummary {
    pub id: i64,
    pub name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub date: NaiveDate,
    pub location: Option<String>,
    pub external_id: Option<String>,
    pub timezone: Option<String>,
    pub session_type: Option<String>,
    pub tracks: Vec<Track>,
    pub speakers: Vec<Speaker>,
}

#[derive(Debug, Clone)]
pub struct SubSession {
    pub id: i64,
    pub parent_session_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub speakers: Vec<Speaker>,
}

/// Write model for session creation. The id arrays carry the join
/// relations to wire; an absent array on the request becomes empty and
/// produces no join rows. Duplicates are not collapsed here; the join
/// tables' composite keys reject them.
#[derive(Debug, Clone)]
pub struct NewSession {
    pub name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub date: NaiveDate,
    pub location: Option<String>,
    pub description: Option<String>,
    pub external_id: Option<String>,
    pub is_virtual: bool,
    pub event_name: Option<String>,
    pub timezone: Option<String>,
    pub session_type: Option<String>,
    pub track_ids: Vec<i64>,
    pub speaker_ids: Vec<i64>,
}

#[derive(Debug, Clone)]
pub struct NewSubSession {
    pub parent_session_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub speaker_ids: Vec<i64>,
}
