//! バリデーション上限値の設定 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// バリデーション上限値
///
/// 既定値は元のフォーム定義と同じ (ユーザー名10文字、タイトル20文字、
/// コメント100文字、ファイル1MB)。
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Limits {
    /// ユーザー名: 最大文字数
    #[serde(default = "default_name_max")]
    pub name_max: usize,
    /// タイトル: 最大文字数
    #[serde(default = "default_title_max")]
    pub title_max: usize,
    /// コメント: 最大文字数
    #[serde(default = "default_comment_max")]
    pub comment_max: usize,
    /// アップロードファイル: 最大バイト数
    #[serde(default = "default_file_max_bytes")]
    pub file_max_bytes: u64,
}

fn default_name_max() -> usize {
    10
}

fn default_title_max() -> usize {
    20
}

fn default_comment_max() -> usize {
    100
}

fn default_file_max_bytes() -> u64 {
    // 1 * 1024 * 1024 (1MB)
    1_048_576
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            name_max: default_name_max(),
            title_max: default_title_max(),
            comment_max: default_comment_max(),
            file_max_bytes: default_file_max_bytes(),
        }
    }
}

/// 設定ファイル読込 (ファイルなしまたはパース失敗時は既定値)
pub fn load_limits(path: impl AsRef<Path>) -> Limits {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("設定ファイルのパースに失敗、既定値を使用: {}", e);
            Limits::default()
        }),
        Err(_) => Limits::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = Limits::default();
        assert_eq!(limits.name_max, 10);
        assert_eq!(limits.title_max, 20);
        assert_eq!(limits.comment_max, 100);
        assert_eq!(limits.file_max_bytes, 1_048_576);
    }

    #[test]
    fn test_serialize_deserialize() {
        let limits = Limits {
            name_max: 20,
            title_max: 40,
            comment_max: 200,
            file_max_bytes: 2_097_152,
        };
        let json = serde_json::to_string(&limits).unwrap();
        let parsed: Limits = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, limits);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        // 一部項目のみ指定された設定ファイルの場合、残りは既定値
        let json = r#"{"title_max": 50}"#;
        let limits: Limits = serde_json::from_str(json).unwrap();
        assert_eq!(limits.title_max, 50);
        assert_eq!(limits.name_max, 10);
        assert_eq!(limits.comment_max, 100);
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let limits = load_limits("/nonexistent/zensan/limits.json");
        assert_eq!(limits, Limits::default());
    }
}
