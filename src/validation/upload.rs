//! アップロードファイルのメタデータチェック
//!
//! ファイル本体は扱わず、ファイル名・MIMEタイプ・サイズのみ検査します。
//! 本体の受領や保存は呼び出し側 (Webレイヤ) の責務です。

use crate::config::Limits;
use crate::messages;

/// 許可する拡張子
const ALLOWED_EXTENSIONS: [&str; 3] = [".png", ".jpg", ".jpeg"];
/// 許可するMIMEタイプ
const ALLOWED_MIME_TYPES: [&str; 2] = ["image/png", "image/jpeg"];

/// アップロードファイル情報
#[derive(Debug, Clone)]
pub struct UploadFile {
    /// 元ファイル名
    pub file_name: String,
    /// MIMEタイプ
    pub mime_type: String,
    /// ファイルサイズ (バイト)
    pub size: u64,
}

/// アップロードチェックエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    /// 拡張子またはMIMEタイプが許可外
    UnsupportedType,
    /// サイズ超過
    SizeOver,
}

impl std::fmt::Display for UploadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UploadError::UnsupportedType => write!(f, "{}", messages::FAIL_UPLOAD_MINE_TYPE),
            UploadError::SizeOver => write!(f, "{}", messages::FAIL_UPLOAD_SIZE_OVER),
        }
    }
}

impl std::error::Error for UploadError {}

/// ファイル名から拡張子を取得 (ドット含む、なければ空文字)
fn extension_of(file_name: &str) -> &str {
    match file_name.rfind('.') {
        // 先頭ドットは隠しファイル扱いで拡張子なし
        Some(0) | None => "",
        Some(pos) => &file_name[pos..],
    }
}

/// アップロードファイルのチェック
/// 拡張子・MIMEタイプ・サイズを検査し、違反があればエラー返却
pub fn validate_upload(file: &UploadFile, limits: &Limits) -> Result<(), UploadError> {
    let extension = extension_of(&file.file_name);

    // 拡張子とMIMEタイプのチェック
    if !ALLOWED_EXTENSIONS.contains(&extension)
        || !ALLOWED_MIME_TYPES.contains(&file.mime_type.as_str())
    {
        return Err(UploadError::UnsupportedType);
    }

    // サイズチェック
    if limits.file_max_bytes < file.size {
        return Err(UploadError::SizeOver);
    }

    Ok(())
}
