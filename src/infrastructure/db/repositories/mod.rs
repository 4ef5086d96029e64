pub mod session_repository_sqlx;
pub mod speaker_repository_sqlx;
pub mod sub_session_repository_sqlx;
pub mod track_repository_sqlx;
