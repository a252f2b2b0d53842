//! 단어 목록/빈도 목록 파일 로드 및 초기화
//!
//! 두 파일은 서로 독립적이므로 각각 별도 스레드에서 읽고,
//! 둘 다 끝난 뒤에야 `SearchEngine`을 돌려줍니다.
//! 로드 실패는 치명적이지 않습니다: 에러를 기록하고 빈(또는 일부만 채워진) 구조로 계속 진행합니다.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::thread;

use crate::config::ImeConfig;
use crate::core::transcription_map::TranscriptionMap;
use crate::error::LoadError;
use crate::index::{DuplicatePolicy, FrequencyTable, WordIndex};
use crate::search::SearchEngine;

/// 단어 목록 파일로 색인 생성
///
/// 열기 실패 시 빈 색인, 읽는 도중 실패 시 그때까지의 색인과 에러를 반환합니다.
pub fn load_word_index(map: &TranscriptionMap, path: &Path) -> (WordIndex, Option<LoadError>) {
    log::info!("단어 목록 로드: {}", path.display());

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            return (
                WordIndex::default(),
                Some(LoadError::SourceUnavailable {
                    path: path.to_path_buf(),
                    source: e,
                }),
            )
        }
    };

    match WordIndex::build(map, BufReader::new(file).lines()) {
        Ok(index) => {
            log::info!("단어 목록 로드 완료: 키 {}개, 단어 {}개", index.len(), index.word_count());
            (index, None)
        }
        Err(partial) => (partial.index, Some(partial.error.with_path(path))),
    }
}

/// 빈도 목록 파일 로드
///
/// 실패하면 읽은 내용을 모두 버리고 에러만 반환합니다.
pub fn load_frequency_table(path: &Path, policy: DuplicatePolicy) -> Result<FrequencyTable, LoadError> {
    log::info!("빈도 목록 로드: {}", path.display());

    let file = File::open(path).map_err(|e| LoadError::SourceUnavailable {
        path: path.to_path_buf(),
        source: e,
    })?;

    let table = FrequencyTable::load(BufReader::new(file).lines(), policy).map_err(|e| e.with_path(path))?;
    log::info!("빈도 목록 로드 완료: {}개", table.len());
    Ok(table)
}

/// 기본 태국어 테이블로 엔진 초기화 (로드 에러는 로그로만 남김)
pub fn init(config: &ImeConfig) -> SearchEngine {
    init_with_map(TranscriptionMap::thai().clone(), config).0
}

/// 엔진 초기화 + 발생한 로드 에러 목록
pub fn init_with_report(config: &ImeConfig) -> (SearchEngine, Vec<LoadError>) {
    init_with_map(TranscriptionMap::thai().clone(), config)
}

/// 지정한 전사 테이블로 엔진 초기화
///
/// 두 로드가 모두 끝날 때까지 블록합니다.
pub fn init_with_map(map: TranscriptionMap, config: &ImeConfig) -> (SearchEngine, Vec<LoadError>) {
    let (index_result, freq_result) = thread::scope(|s| {
        let index_handle = s.spawn(|| load_word_index(&map, &config.wordlist_path));
        let freq_handle =
            s.spawn(|| load_frequency_table(&config.frequency_path, config.duplicate_policy));

        (join_or_resume(index_handle), join_or_resume(freq_handle))
    });

    let mut errors = Vec::new();

    let (index, index_error) = index_result;
    if let Some(e) = index_error {
        log::error!("단어 목록 로드 실패 (키 {}개까지 사용): {}", index.len(), e);
        errors.push(e);
    }

    let frequencies = freq_result.unwrap_or_else(|e| {
        log::error!("빈도 목록 로드 실패 (빈 테이블 사용): {}", e);
        errors.push(e);
        FrequencyTable::default()
    });

    (SearchEngine::new(map, index, frequencies), errors)
}

/// 로더 스레드의 패닉은 호출 스레드로 그대로 전파
fn join_or_resume<T>(handle: thread::ScopedJoinHandle<'_, T>) -> T {
    match handle.join() {
        Ok(value) => value,
        Err(payload) => std::panic::resume_unwind(payload),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_word_index_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let (index, err) = load_word_index(TranscriptionMap::thai(), &dir.path().join("missing.txt"));
        assert!(index.is_empty());
        assert!(matches!(err, Some(LoadError::SourceUnavailable { .. })));
    }

    #[test]
    fn test_load_word_index_crlf() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "words.txt", "กา\r\nกาน\r\n");
        let (index, err) = load_word_index(TranscriptionMap::thai(), &path);
        assert!(err.is_none());
        assert_eq!(index.get("ka").unwrap().words, vec!["กา"]);
        assert_eq!(index.get("kan").unwrap().words, vec!["กาน"]);
    }

    #[test]
    fn test_load_word_index_partial_on_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        let mut bytes = "กา\nนา\n".as_bytes().to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe, b'\n']);
        bytes.extend_from_slice("กาน\n".as_bytes());
        fs::write(&path, bytes).unwrap();

        let (index, err) = load_word_index(TranscriptionMap::thai(), &path);
        assert_eq!(index.word_count(), 2);
        match err {
            Some(LoadError::SourceUnavailable { path: p, .. }) => assert_eq!(p, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_load_frequency_table_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_frequency_table(&dir.path().join("missing.txt"), DuplicatePolicy::Abort);
        assert!(matches!(result, Err(LoadError::SourceUnavailable { .. })));
    }

    #[test]
    fn test_init_loads_both() {
        let dir = tempfile::tempdir().unwrap();
        let config = ImeConfig {
            wordlist_path: write(dir.path(), "words.txt", "กา\nกาน\n"),
            frequency_path: write(dir.path(), "freq.txt", "กา\t5\nกาน\t10\n"),
            ..ImeConfig::default()
        };

        let (engine, errors) = init_with_report(&config);
        assert!(errors.is_empty());
        assert_eq!(engine.search("ka"), vec!["กาน", "กา"]);
    }

    #[test]
    fn test_init_degrades_on_malformed_frequency() {
        let dir = tempfile::tempdir().unwrap();
        let config = ImeConfig {
            wordlist_path: write(dir.path(), "words.txt", "กา\nกาน\n"),
            frequency_path: write(dir.path(), "freq.txt", "กาน\t10\nกา\tnotanumber\n"),
            ..ImeConfig::default()
        };

        let (engine, errors) = init_with_report(&config);
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], LoadError::MalformedFrequencyLine { line: 2, .. }));
        assert!(engine.frequencies().is_empty());
        // 빈도 없으면 등장 순서
        assert_eq!(engine.search("ka"), vec!["กา", "กาน"]);
    }

    #[test]
    fn test_init_without_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = ImeConfig {
            wordlist_path: dir.path().join("a.txt"),
            frequency_path: dir.path().join("b.txt"),
            ..ImeConfig::default()
        };

        let (engine, errors) = init_with_report(&config);
        assert_eq!(errors.len(), 2);
        assert!(engine.search("anything").is_empty());
    }
}
