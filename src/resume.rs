//! ディスク上の履歴書読み込み

use crate::error::{FolioError, Result};
use folio_common::ResumeFile;
use std::path::Path;

/// ファイルを読み込んで ResumeFile にする
///
/// ネイティブでは宣言MIMEタイプが無いため空文字にし、
/// ゲートウェイ側で拡張子から推定させる
pub fn load_resume(path: &Path) -> Result<ResumeFile> {
    if !path.is_file() {
        return Err(FolioError::FileNotFound(path.display().to_string()));
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let bytes = std::fs::read(path)?;

    Ok(ResumeFile::new(name, "", bytes))
}
