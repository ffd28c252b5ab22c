//! Folio（ネイティブ版）
//!
//! 履歴書ファイルをGeminiで解析し、ポートフォリオデータを生成する

pub mod client;
pub mod config;
pub mod error;
pub mod resume;

pub use client::GeminiClient;
pub use config::Config;
pub use error::{FolioError, Result};
pub use resume::load_resume;

use folio_common::{generate_portfolio, intake, PortfolioData, Transport};
use std::path::Path;

/// ファイルパスから1回だけ生成を実行
pub async fn generate_from_path<T: Transport>(transport: &T, path: &Path) -> Result<PortfolioData> {
    let file = load_resume(path)?;
    intake::validate(&file.name, &file.mime_type)?;

    let data = generate_portfolio(transport, &file).await?;
    Ok(data)
}
