pub mod create_session;
pub mod list_sessions;
