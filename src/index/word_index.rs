//! 전사 키 -> 태국어 단어 색인
//!
//! 단어 목록의 각 단어를 전사하고 같은 키를 가진 단어끼리 묶습니다.
//! 엔트리 순서는 키가 처음 등장한 순서를 따릅니다.

use std::collections::BTreeMap;
use std::io;
use std::ops::Bound;

use crate::core::transcription_map::TranscriptionMap;
use crate::error::LoadError;

/// 같은 전사 키를 가진 단어 묶음
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub key: String,
    /// 삽입 순서 유지, 중복 단어도 그대로 보존
    pub words: Vec<String>,
}

/// 전사 키 색인
#[derive(Debug, Clone, Default)]
pub struct WordIndex {
    /// 키 최초 등장 순서
    entries: Vec<WordEntry>,
    /// 키 -> entries 위치 (중복 키 검사, 접두사 범위 조회용)
    positions: BTreeMap<String, usize>,
}

/// 읽기 도중 실패한 색인 생성 결과
///
/// 실패 전까지 처리된 줄은 모두 `index`에 들어 있습니다.
#[derive(Debug)]
pub struct PartialIndex {
    pub index: WordIndex,
    pub error: LoadError,
}

impl WordIndex {
    /// 줄 단위 입력에서 색인 생성
    ///
    /// 읽기 에러가 나면 그 시점까지의 색인과 에러를 함께 반환합니다.
    pub fn build<I>(map: &TranscriptionMap, lines: I) -> Result<Self, PartialIndex>
    where
        I: IntoIterator<Item = io::Result<String>>,
    {
        let mut builder = WordIndexBuilder::new(map);

        for line in lines {
            match line {
                Ok(word) => builder.push(word),
                Err(e) => {
                    return Err(PartialIndex {
                        index: builder.finish(),
                        error: LoadError::read_failed(e),
                    })
                }
            }
        }

        Ok(builder.finish())
    }

    /// 메모리상의 단어 목록으로 색인 생성
    pub fn from_words<I, S>(map: &TranscriptionMap, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut builder = WordIndexBuilder::new(map);
        for word in words {
            builder.push(word);
        }
        builder.finish()
    }

    /// 키 개수
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 전체 단어 수 (중복 포함)
    pub fn word_count(&self) -> usize {
        self.entries.iter().map(|e| e.words.len()).sum()
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    /// 키가 정확히 일치하는 엔트리
    pub fn get(&self, key: &str) -> Option<&WordEntry> {
        self.positions.get(key).map(|&pos| &self.entries[pos])
    }

    /// 키가 `prefix`로 시작하는 엔트리들 (최초 등장 순서)
    ///
    /// 정확히 일치하는 엔트리도 포함됩니다.
    pub fn prefix_entries(&self, prefix: &str) -> Vec<&WordEntry> {
        let mut positions: Vec<usize> = self
            .positions
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(_, &pos)| pos)
            .collect();

        // 사전순 -> 등장 순서
        positions.sort_unstable();

        positions.into_iter().map(|pos| &self.entries[pos]).collect()
    }
}

/// 단어를 하나씩 받아 색인을 쌓는 빌더
pub struct WordIndexBuilder<'a> {
    map: &'a TranscriptionMap,
    index: WordIndex,
}

impl<'a> WordIndexBuilder<'a> {
    pub fn new(map: &'a TranscriptionMap) -> Self {
        Self {
            map,
            index: WordIndex::default(),
        }
    }

    /// 단어 추가
    /// 같은 키가 있으면 그 엔트리 뒤에 붙이고, 없으면 새 엔트리 생성
    pub fn push(&mut self, word: impl Into<String>) {
        let word = word.into();
        let key = self.map.transcribe(&word);

        if let Some(&pos) = self.index.positions.get(&key) {
            self.index.entries[pos].words.push(word);
            return;
        }

        let pos = self.index.entries.len();
        self.index.positions.insert(key.clone(), pos);
        self.index.entries.push(WordEntry {
            key,
            words: vec![word],
        });
    }

    pub fn finish(self) -> WordIndex {
        self.index
    }
}
