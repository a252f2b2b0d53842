//! 단어 사용 빈도 테이블
//!
//! 빈도 목록 형식: 한 줄에 `<단어>\t<빈도>`
//! 세 번째 이후 탭 필드는 무시합니다.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::io;

use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// 빈도 목록에 같은 단어가 다시 나왔을 때의 처리 방식
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// 로드 전체 중단
    #[default]
    Abort,
    /// 나중 값으로 덮어씀
    Overwrite,
}

/// 태국어 단어 -> 사용 빈도
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
}

impl FrequencyTable {
    /// 줄 단위 입력에서 빈도 테이블 로드
    ///
    /// 형식 오류, 읽기 실패, (Abort 정책에서) 중복 단어가 하나라도 있으면
    /// 그때까지 읽은 내용을 버리고 에러를 반환합니다.
    pub fn load<I>(lines: I, policy: DuplicatePolicy) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = io::Result<String>>,
    {
        let mut counts = HashMap::new();

        for (i, line) in lines.into_iter().enumerate() {
            let line = line.map_err(LoadError::read_failed)?;
            let line_no = i + 1;
            let (word, count) = parse_line(&line, line_no)?;

            match counts.entry(word) {
                Entry::Vacant(slot) => {
                    slot.insert(count);
                }
                Entry::Occupied(mut slot) => match policy {
                    DuplicatePolicy::Overwrite => {
                        log::debug!("빈도 중복 단어 덮어씀 (line {}): {}", line_no, slot.key());
                        slot.insert(count);
                    }
                    DuplicatePolicy::Abort => {
                        return Err(LoadError::DuplicateFrequencyWord {
                            line: line_no,
                            word: slot.key().clone(),
                        });
                    }
                },
            }
        }

        Ok(Self { counts })
    }

    /// (단어, 빈도) 쌍으로 생성 (중복 시 나중 값)
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        Self {
            counts: pairs.into_iter().map(|(w, c)| (w.into(), c)).collect(),
        }
    }

    /// 단어 빈도 조회 (없으면 0)
    pub fn get(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(w, &c)| (w.as_str(), c))
    }
}

/// `<단어>\t<빈도>[\t...]` 한 줄 파싱
fn parse_line(line: &str, line_no: usize) -> Result<(String, u64), LoadError> {
    let malformed = |reason: &str| LoadError::MalformedFrequencyLine {
        line: line_no,
        content: line.to_string(),
        reason: reason.to_string(),
    };

    let mut fields = line.split('\t');
    let word = fields.next().unwrap_or_default();
    let count = fields.next().ok_or_else(|| malformed("missing tab-separated count"))?;

    let count = count
        .trim()
        .parse::<u64>()
        .map_err(|e| malformed(&format!("invalid count {:?}: {}", count, e)))?;

    Ok((word.to_string(), count))
}
