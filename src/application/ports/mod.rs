pub mod session_repository;
pub mod speaker_repository;
pub mod sub_session_repository;
pub mod track_repository;
