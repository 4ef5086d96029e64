pub mod sessions;
pub mod speakers;
pub mod sub_sessions;
pub mod tracks;
