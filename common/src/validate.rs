//! アップロード前のクライアント側バリデーション
//!
//! バックエンドに送る前に、選択されたファイルのMIMEタイプとサイズを
//! 検査する。拒否時は状態を一切変更しない。

use thiserror::Error;

/// アップロード上限: 5 MiB
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// バリデーションエラー
///
/// Display実装がそのままユーザー向けメッセージになる
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please upload JPG, PNG, or HEIC images only")]
    NotAnImage,

    #[error("Please upload an image smaller than 5MB")]
    TooLarge,
}

impl ValidationError {
    /// 通知のタイトル行
    pub fn title(&self) -> &'static str {
        match self {
            ValidationError::NotAnImage => "Invalid file type",
            ValidationError::TooLarge => "File too large",
        }
    }
}

/// 選択ファイルを検査する
///
/// # Arguments
/// * `mime_type` - ファイルの宣言MIMEタイプ（例: "image/jpeg"）
/// * `size` - バイトサイズ
///
/// # Returns
/// * `Ok(())` - `image/*` かつ 5 MiB 以下
/// * `Err(ValidationError)` - 拒否理由
pub fn validate_upload(mime_type: &str, size: u64) -> Result<(), ValidationError> {
    if !mime_type.starts_with("image/") {
        return Err(ValidationError::NotAnImage);
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(ValidationError::TooLarge);
    }
    Ok(())
}
