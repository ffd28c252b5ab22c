//! 履歴書ファイルの受付判定
//!
//! ネットワーク呼び出し前に、ファイル名の拡張子または宣言MIMEタイプで
//! 受付可否を判定する（どちらかに一致すれば受付）。

use crate::error::{Error, Result};

/// 受付する拡張子
pub const ALLOWED_EXTENSIONS: &[&str] = &[".pdf", ".txt", ".md"];

/// 受付する宣言MIMEタイプ
///
/// text/markdown はここには含めない（拡張子 .md でのみ受付）
pub const ALLOWED_MIME_TYPES: &[&str] = &["application/pdf", "text/plain"];

/// ユーザーが選択した履歴書ファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    pub name: String,
    /// 宣言MIMEタイプ（不明な場合は空文字）
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ResumeFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    pub fn declared_type(&self) -> Option<&str> {
        if self.mime_type.is_empty() {
            None
        } else {
            Some(&self.mime_type)
        }
    }
}

/// ファイル名が受付拡張子で終わるか（大文字小文字を区別しない）
pub fn has_allowed_extension(file_name: &str) -> bool {
    let lower = file_name.to_lowercase();
    ALLOWED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// 宣言MIMEタイプが受付対象か
pub fn has_allowed_mime_type(mime_type: &str) -> bool {
    ALLOWED_MIME_TYPES.contains(&mime_type)
}

/// 受付判定
pub fn validate(file_name: &str, mime_type: &str) -> Result<()> {
    if has_allowed_extension(file_name) || has_allowed_mime_type(mime_type) {
        return Ok(());
    }

    log::warn!("rejected resume upload: {} ({})", file_name, mime_type);
    Err(Error::InvalidFileType {
        file_name: file_name.to_string(),
    })
}
