//! ユーザー向けエラーメッセージ定義 (日本語)

/// 必須項目未入力
pub const REQUIRED: &str = "必須です。";

/// パスワード形式エラー
pub const PASS_REGEX_MESSAGE: &str =
    "英字,数字,記号(._!+^&)を組み合わせた12~16文字で入力してください。";
/// パスワードに小文字英字なし
pub const PASS_REGEX_NO_SMALL_ALF: &str = "パスワードに小文字英字が使用されていません。";
/// パスワードに大文字英字なし
pub const PASS_REGEX_NO_BIG_ALF: &str = "パスワードに大文字英字が使用されていません。";
/// パスワードに半角数字なし
pub const PASS_REGEX_NO_NUM: &str = "パスワードに半角数字が使用されていません。";
/// パスワードに記号なし
pub const PASS_REGEX_NO_SYMBOL: &str = "パスワードに記号が使用されていません。";
/// パスワード不一致
pub const PASS_MISMATCH: &str = "パスワードと一致しません。";

/// コンテンツタイプ不正値
pub const NO_VALUE_CONTENT_TYPE: &str =
    "コンテンツタイプに登録できない値が選択されています。";

/// アップロード形式エラー
pub const FAIL_UPLOAD_MINE_TYPE: &str = "PNG, JPG, JPEG形式のみアップロード可能です。";
/// アップロードサイズ超過
pub const FAIL_UPLOAD_SIZE_OVER: &str = "ファイルサイズは1MBまでです。";

/// 最大文字数エラーメッセージフォーマット
pub fn max_length(max: usize) -> String {
    format!("最大{}文字までです。", max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_length_format() {
        assert_eq!(max_length(10), "最大10文字までです。");
        assert_eq!(max_length(100), "最大100文字までです。");
    }

    #[test]
    fn test_pass_mismatch_wording() {
        // 元のフォーム定義と同一文言 (「〜と一致しません」)
        assert_eq!(PASS_MISMATCH, "パスワードと一致しません。");
    }
}
