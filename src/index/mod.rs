//! 단어 색인과 빈도 테이블

mod frequency;
mod word_index;

pub use frequency::{DuplicatePolicy, FrequencyTable};
pub use word_index::{PartialIndex, WordEntry, WordIndex, WordIndexBuilder};
