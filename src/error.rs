use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("APIキーが設定されていません。環境変数 GEMINI_API_KEY を設定してください")]
    MissingApiKey,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("HTTPクライアント初期化エラー: {0}")]
    HttpClient(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] folio_common::Error),
}

pub type Result<T> = std::result::Result<T, FolioError>;
