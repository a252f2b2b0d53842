//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::index::DuplicatePolicy;

/// thai-ime 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ImeConfig {
    /// 단어 목록 파일 (한 줄에 단어 하나)
    #[serde(default = "default_wordlist_path")]
    pub wordlist_path: PathBuf,
    /// 빈도 목록 파일 (`<단어>\t<빈도>`)
    #[serde(default = "default_frequency_path")]
    pub frequency_path: PathBuf,
    /// 한 번에 보여줄 후보 수
    #[serde(default = "default_max_candidates")]
    pub max_candidates: usize,
    /// 빈도 목록 중복 단어 처리
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicy,
}

fn default_wordlist_path() -> PathBuf {
    PathBuf::from("thai_wordlist.txt")
}

fn default_frequency_path() -> PathBuf {
    PathBuf::from("frequency_list.txt")
}

fn default_max_candidates() -> usize {
    10
}

impl Default for ImeConfig {
    fn default() -> Self {
        Self {
            wordlist_path: default_wordlist_path(),
            frequency_path: default_frequency_path(),
            max_candidates: default_max_candidates(),
            duplicate_policy: DuplicatePolicy::default(),
        }
    }
}

/// 설정 파일 경로: ~/.config/thai-ime/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("thai-ime").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> ImeConfig {
    load_config_from(&config_path())
}

/// 지정 경로에서 설정 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config_from(path: &Path) -> ImeConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파싱 실패, 기본값 사용 ({}): {}", path.display(), e);
            ImeConfig::default()
        }),
        Err(_) => ImeConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &ImeConfig) -> Result<(), String> {
    save_config_to(config, &config_path())
}

/// 지정 경로에 설정 저장
pub fn save_config_to(config: &ImeConfig, path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ImeConfig::default();
        assert_eq!(config.wordlist_path, PathBuf::from("thai_wordlist.txt"));
        assert_eq!(config.frequency_path, PathBuf::from("frequency_list.txt"));
        assert_eq!(config.max_candidates, 10);
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Abort);
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = ImeConfig {
            wordlist_path: PathBuf::from("/data/words.txt"),
            frequency_path: PathBuf::from("/data/freq.txt"),
            max_candidates: 5,
            duplicate_policy: DuplicatePolicy::Overwrite,
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ImeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_backward_compat_missing_field() {
        let json = r#"{"max_candidates": 3}"#;
        let config: ImeConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.max_candidates, 3);
        assert_eq!(config.wordlist_path, PathBuf::from("thai_wordlist.txt"));
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Abort);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = ImeConfig {
            max_candidates: 7,
            ..ImeConfig::default()
        };
        save_config_to(&config, &path).unwrap();
        assert_eq!(load_config_from(&path), config);
    }

    #[test]
    fn test_load_invalid_json_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_config_from(&path), ImeConfig::default());
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_config_from(&dir.path().join("nope.json")), ImeConfig::default());
    }
}
