//! 전사 키 검색 엔진
//!
//! 로마자 입력으로 태국어 후보를 찾고 사용 빈도로 정렬합니다.
//!
//! # 검색 순서
//!
//! 1. **정확 일치**: 키가 입력과 같은 엔트리의 단어
//! 2. **접두사 일치**: 키가 입력으로 시작하는 엔트리의 단어 (등장 순서)
//! 3. 두 그룹을 이어 붙이고 빈도 내림차순 안정 정렬
//! 4. 중복 제거 (처음 나온 것 유지)
//!
//! # 사용 예시
//!
//! ```
//! use thai_ime::{FrequencyTable, SearchEngine, TranscriptionMap, WordIndex};
//!
//! let map = TranscriptionMap::thai().clone();
//! let index = WordIndex::from_words(&map, ["กา", "กาน"]);
//! let freq = FrequencyTable::from_pairs([("กา", 5), ("กาน", 10)]);
//! let engine = SearchEngine::new(map, index, freq);
//!
//! assert_eq!(engine.search("ka"), vec!["กาน", "กา"]);
//! ```

use std::collections::HashSet;

use crate::core::transcription_map::TranscriptionMap;
use crate::index::{FrequencyTable, WordIndex};

/// 로드가 끝난 색인 + 빈도 테이블
///
/// 완전히 로드된 구성 요소로만 생성되므로 검색 시점에 반쯤 로드된 상태는 없습니다.
/// 생성 후에는 불변이라 여러 스레드에서 `&SearchEngine`으로 동시에 검색해도 됩니다.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    map: TranscriptionMap,
    index: WordIndex,
    frequencies: FrequencyTable,
}

impl SearchEngine {
    /// `index`는 `map`으로 만든 색인이어야 함
    pub fn new(map: TranscriptionMap, index: WordIndex, frequencies: FrequencyTable) -> Self {
        Self {
            map,
            index,
            frequencies,
        }
    }

    /// 로마자 입력으로 태국어 후보 검색
    ///
    /// 빈 입력은 모든 키와 접두사 일치하므로 전체 단어를 빈도순으로 반환합니다.
    /// 일치하는 키가 없으면 빈 목록.
    pub fn search(&self, term: &str) -> Vec<String> {
        let exact = self
            .index
            .get(term)
            .map(|entry| entry.words.as_slice())
            .unwrap_or_default();

        let prefix = self.index.prefix_entries(term);

        let mut candidates: Vec<&str> = exact
            .iter()
            .chain(prefix.iter().flat_map(|entry| entry.words.iter()))
            .map(String::as_str)
            .collect();

        // sort_by_key는 안정 정렬: 같은 빈도면 정확 일치 -> 접두사 순서 유지
        candidates.sort_by_key(|word| std::cmp::Reverse(self.frequencies.get(word)));

        let mut seen = HashSet::with_capacity(candidates.len());
        candidates
            .into_iter()
            .filter(|word| seen.insert(*word))
            .map(str::to_string)
            .collect()
    }

    /// 상위 `limit`개만 반환
    pub fn search_limited(&self, term: &str, limit: usize) -> Vec<String> {
        let mut results = self.search(term);
        results.truncate(limit);
        results
    }

    /// 단어 빈도 (없으면 0)
    pub fn frequency(&self, word: &str) -> u64 {
        self.frequencies.get(word)
    }

    /// 이 엔진의 전사 테이블로 전사
    pub fn transcribe(&self, thai: &str) -> String {
        self.map.transcribe(thai)
    }

    pub fn index(&self) -> &WordIndex {
        &self.index
    }

    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    pub fn transcription_map(&self) -> &TranscriptionMap {
        &self.map
    }
}
