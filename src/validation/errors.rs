//! バリデーションエラーの収集と変換

use std::collections::HashMap;

use serde::Serialize;

/// 項目単位のバリデーションエラー
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// 項目名 (フロントのフィールド名と一致させる)
    pub field: &'static str,
    /// 表示用メッセージ
    pub message: String,
}

/// バリデーションエラー一覧 (検出順を保持)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// エラー追加
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    /// 項目名 -> 最初のメッセージのマップに変換 (フロント表示用)
    /// 同一項目に複数エラーがある場合、先に検出されたものを採用する
    pub fn into_map(self) -> HashMap<&'static str, String> {
        let mut map = HashMap::new();
        for e in self.0 {
            map.entry(e.field).or_insert(e.message);
        }
        map
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", e.field, e.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
