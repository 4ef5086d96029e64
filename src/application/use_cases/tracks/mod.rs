pub mod create_track;
pub mod list_tracks;
