//! コンテンツ登録・更新フォームの入力チェック

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::Limits;
use crate::core::normalize;
use crate::messages;
use crate::validation::errors::ValidationErrors;

/// コンテンツタイプ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Text,
    Image,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Text => "text",
            ContentType::Image => "image",
        }
    }
}

impl FromStr for ContentType {
    type Err = &'static str;

    /// "text"または"image"以外はエラーメッセージ返却
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(ContentType::Text),
            "image" => Ok(ContentType::Image),
            _ => Err(messages::NO_VALUE_CONTENT_TYPE),
        }
    }
}

/// コンテンツフォーム入力値 (画面から受領したままの値)
#[derive(Debug, Clone)]
pub struct ContentForm {
    /// タイトル
    pub title: String,
    /// コンテンツタイプ ("text"または"image")
    pub content_type: String,
    /// コメント
    pub comment: String,
}

/// バリデーション済みコンテンツ (trim適用後)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedContent {
    pub title: String,
    pub content_type: ContentType,
    pub comment: String,
}

impl ContentForm {
    /// 入力チェック (既定の上限値)
    pub fn validate(&self) -> Result<ValidatedContent, ValidationErrors> {
        self.validate_with(&Limits::default())
    }

    /// 入力チェック
    /// 各項目trim後、必須・最大文字数・コンテンツタイプを宣言順に検査する
    pub fn validate_with(&self, limits: &Limits) -> Result<ValidatedContent, ValidationErrors> {
        let title = self.title.trim();
        let comment = self.comment.trim();

        let mut errors = ValidationErrors::new();

        if title.is_empty() {
            errors.push("title", messages::REQUIRED);
        }
        if title.chars().count() > limits.title_max {
            errors.push("title", messages::max_length(limits.title_max));
        }

        let content_type = match ContentType::from_str(self.content_type.trim()) {
            Ok(ct) => Some(ct),
            Err(message) => {
                errors.push("contentType", message);
                None
            }
        };

        if comment.is_empty() {
            errors.push("comment", messages::REQUIRED);
        }
        if comment.chars().count() > limits.comment_max {
            errors.push("comment", messages::max_length(limits.comment_max));
        }

        match (errors.is_empty(), content_type) {
            (true, Some(content_type)) => Ok(ValidatedContent {
                title: title.to_string(),
                content_type,
                comment: comment.to_string(),
            }),
            _ => Err(errors),
        }
    }
}

impl ValidatedContent {
    /// 登録時と同様にタイトルとコメントの半角記号を全角へ変換する
    pub fn sanitize(self) -> Self {
        Self {
            title: normalize(&self.title),
            content_type: self.content_type,
            comment: normalize(&self.comment),
        }
    }
}
