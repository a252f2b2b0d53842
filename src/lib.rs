pub mod config;
pub mod core;
pub mod error;
pub mod index;
pub mod loader;
pub mod search;

pub use crate::core::transcriber::transcribe;
pub use crate::core::transcription_map::TranscriptionMap;
pub use error::{LoadError, TranscriptionError};
pub use index::{DuplicatePolicy, FrequencyTable, WordEntry, WordIndex};
pub use loader::{init, init_with_report};
pub use search::SearchEngine;
