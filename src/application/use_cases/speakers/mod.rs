pub mod create_speaker;
pub mod list_speakers;
