//! 태국 문자 -> 라틴 전사 매핑 테이블

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::error::TranscriptionError;

/// 기본 태국어 전사 테이블 (자음, 모음 기호, 숫자, 공백)
///
/// 성조 부호, 일부 모음 기호(ิ ี ึ ื ุ ู ั 등)는 테이블에 없으므로 전사 시 생략됩니다.
const THAI_TABLE: &[(char, &str)] = &[
    // 자음
    ('ก', "k"),
    ('ข', "kh"),
    ('ฃ', "kh"),
    ('ค', "kh"),
    ('ฅ', "kh"),
    ('ฆ', "kh"),
    ('ง', "ng"),
    ('จ', "c"),
    ('ฉ', "ch"),
    ('ช', "ch"),
    ('ซ', "s"),
    ('ฌ', "ch"),
    ('ญ', "y"),
    ('ฎ', "d"),
    ('ฏ', "t"),
    ('ฐ', "th"),
    ('ฑ', "th"),
    ('ฒ', "th"),
    ('ณ', "n"),
    ('ด', "d"),
    ('ต', "t"),
    ('ถ', "th"),
    ('ท', "th"),
    ('ธ', "th"),
    ('น', "n"),
    ('บ', "b"),
    ('ป', "p"),
    ('ผ', "ph"),
    ('ฝ', "f"),
    ('พ', "ph"),
    ('ฟ', "f"),
    ('ภ', "ph"),
    ('ม', "m"),
    ('ย', "y"),
    ('ร', "r"),
    ('ฤ', "r"),
    ('ล', "l"),
    ('ฦ', "l"),
    ('ว', "w"),
    ('ศ', "s"),
    ('ษ', "s"),
    ('ส', "s"),
    ('ห', "h"),
    ('ฬ', "l"),
    ('อ', "o"),
    ('ฮ', "h"),
    // 모음
    ('ะ', "a"),
    ('า', "a"),
    ('ำ', "am"),
    ('เ', "e"),
    ('แ', "ae"),
    ('โ', "o"),
    ('ใ', "ai"),
    ('ไ', "ai"),
    ('ๅ', "a"),
    ('ๆ', "q"), // 반복 기호
    // 숫자
    ('๐', "0"),
    ('๑', "1"),
    ('๒', "2"),
    ('๓', "3"),
    ('๔', "4"),
    ('๕', "5"),
    ('๖', "6"),
    ('๗', "7"),
    ('๘', "8"),
    ('๙', "9"),
    (' ', " "),
];

lazy_static! {
    static ref THAI_MAP: TranscriptionMap = TranscriptionMap {
        table: THAI_TABLE.iter().map(|&(c, latin)| (c, latin.to_string())).collect(),
    };
}

/// 문자 하나 -> 라틴 문자열 매핑
///
/// 생성 후에는 변경되지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptionMap {
    table: HashMap<char, String>,
}

impl TranscriptionMap {
    /// 기본 태국어 테이블 (프로세스 전체에서 한 번만 생성)
    pub fn thai() -> &'static TranscriptionMap {
        &THAI_MAP
    }

    /// (문자열, 라틴) 쌍으로 매핑 생성
    ///
    /// 키는 정확히 한 글자여야 합니다.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, TranscriptionError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut table = HashMap::new();
        for (key, latin) in pairs {
            let key = key.as_ref();
            let mut chars = key.chars();
            let c = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => return Err(TranscriptionError::NotSingleChar(key.to_string())),
            };
            table.insert(c, latin.into());
        }
        Ok(Self { table })
    }

    /// 문자의 라틴 전사 조회 (매핑 없으면 None)
    pub fn get(&self, c: char) -> Option<&str> {
        self.table.get(&c).map(String::as_str)
    }

    pub fn contains(&self, c: char) -> bool {
        self.table.contains_key(&c)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Default for TranscriptionMap {
    fn default() -> Self {
        Self::thai().clone()
    }
}
