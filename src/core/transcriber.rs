//! 태국어 -> 라틴 전사기

use crate::core::transcription_map::TranscriptionMap;

impl TranscriptionMap {
    /// 태국어 문자열을 라틴 전사 문자열로 변환
    /// 매핑에 없는 문자(성조 부호, 구두점 등)는 건너뜀
    pub fn transcribe(&self, thai: &str) -> String {
        let mut result = String::with_capacity(thai.len());

        for c in thai.chars() {
            if let Some(latin) = self.get(c) {
                result.push_str(latin);
            }
        }

        result
    }
}

/// 기본 태국어 테이블로 전사
pub fn transcribe(thai: &str) -> String {
    TranscriptionMap::thai().transcribe(thai)
}
