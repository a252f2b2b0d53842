pub mod transcriber;
pub mod transcription_map;
