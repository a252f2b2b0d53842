//! 로드/전사 에러 정의

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// 단어 목록/빈도 목록 로드 에러
#[derive(Debug, Error)]
pub enum LoadError {
    /// 파일 열기/읽기 실패
    #[error("source unavailable: {path}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 빈도 목록 줄 형식 오류 (탭 필드 부족, 정수가 아닌 빈도)
    #[error("malformed frequency line {line} ({reason}): {content:?}")]
    MalformedFrequencyLine {
        line: usize,
        content: String,
        reason: String,
    },

    /// 빈도 목록에 같은 단어가 두 번 등장 (DuplicatePolicy::Abort)
    #[error("duplicate frequency word on line {line}: {word}")]
    DuplicateFrequencyWord { line: usize, word: String },
}

impl LoadError {
    /// 경로 정보 없는 I/O 에러 (줄 단위 입력에서 발생)
    pub(crate) fn read_failed(source: io::Error) -> Self {
        LoadError::SourceUnavailable {
            path: PathBuf::new(),
            source,
        }
    }

    /// 경로를 채워 넣음 (이미 경로가 있으면 유지)
    pub(crate) fn with_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            LoadError::SourceUnavailable { path: p, source } if p.as_os_str().is_empty() => {
                LoadError::SourceUnavailable {
                    path: path.into(),
                    source,
                }
            }
            other => other,
        }
    }
}

/// 전사 테이블 생성 에러
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TranscriptionError {
    #[error("transcription key must be exactly one character: {0:?}")]
    NotSingleChar(String),
}
