pub mod create_sub_session;
pub mod list_sub_sessions;
