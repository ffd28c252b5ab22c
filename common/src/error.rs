//! エラー型定義

use thiserror::Error;

/// サービス側がMIMEタイプを拒否したときのメッセージ断片
const SERVICE_UNSUPPORTED_MIME: &str = "Unsupported MIME type";

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid file type: {file_name}")]
    InvalidFileType { file_name: String },

    #[error("The file type \"{0}\" is not directly supported by the AI parser. Please upload a PDF or Text file.")]
    UnsupportedFormat(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Failed to parse resume content")]
    EmptyResponse,

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Failed to read file: {0}")]
    FileRead(String),

    #[error("Generation already in progress")]
    GenerationInProgress,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// エラー分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidFileType,
    UnsupportedFormat,
    TransportFailure,
    EmptyResponse,
    MalformedResponse,
    ReadFailure,
    Busy,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidFileType { .. } => ErrorKind::InvalidFileType,
            Error::UnsupportedFormat(_) => ErrorKind::UnsupportedFormat,
            Error::Transport(_) => ErrorKind::TransportFailure,
            Error::EmptyResponse => ErrorKind::EmptyResponse,
            Error::MalformedResponse(_) | Error::Json(_) => ErrorKind::MalformedResponse,
            Error::FileRead(_) => ErrorKind::ReadFailure,
            Error::GenerationInProgress => ErrorKind::Busy,
        }
    }

    /// 画面に表示するメッセージ
    ///
    /// サービス側のMIME拒否はローカル判定（UnsupportedFormat）とは別の文言にする
    pub fn user_message(&self) -> String {
        match self {
            Error::InvalidFileType { .. } => {
                "Please upload a PDF or Plain Text file. Word documents (.doc/.docx) are not supported by the AI parser yet."
                    .to_string()
            }
            Error::Transport(message) if message.contains(SERVICE_UNSUPPORTED_MIME) => {
                "Unsupported file format. Please use PDF or Text (.txt).".to_string()
            }
            Error::Transport(message) if message.trim().is_empty() => {
                "Failed to parse resume.".to_string()
            }
            Error::Transport(message) => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_file_type_message() {
        let error = Error::InvalidFileType { file_name: "resume.docx".into() };
        let message = error.user_message();
        assert!(message.contains("PDF or Plain Text"));
        assert!(message.contains(".docx"));
        assert_eq!(error.kind(), ErrorKind::InvalidFileType);
    }

    #[test]
    fn test_unsupported_format_names_type() {
        let error = Error::UnsupportedFormat("application/zip".into());
        assert!(error.user_message().contains("\"application/zip\""));
        assert_eq!(error.kind(), ErrorKind::UnsupportedFormat);
    }

    #[test]
    fn test_service_mime_rejection_has_distinct_message() {
        let local = Error::UnsupportedFormat("image/heic".into());
        let remote = Error::Transport("Unsupported MIME type: image/heic".into());
        assert_eq!(
            remote.user_message(),
            "Unsupported file format. Please use PDF or Text (.txt)."
        );
        assert_ne!(local.user_message(), remote.user_message());
        assert_eq!(remote.kind(), ErrorKind::TransportFailure);
    }

    #[test]
    fn test_transport_message_passthrough() {
        let error = Error::Transport("API error: 503".into());
        assert_eq!(error.user_message(), "API error: 503");
    }

    #[test]
    fn test_transport_blank_message_fallback() {
        let error = Error::Transport("  ".into());
        assert_eq!(error.user_message(), "Failed to parse resume.");
    }

    #[test]
    fn test_empty_response_message() {
        let error = Error::EmptyResponse;
        assert_eq!(error.user_message(), "Failed to parse resume content");
        assert_eq!(error.kind(), ErrorKind::EmptyResponse);
    }

    #[test]
    fn test_file_read_message() {
        let error = Error::FileRead("NotReadableError".into());
        assert_eq!(error.user_message(), "Failed to read file: NotReadableError");
        assert_eq!(error.kind(), ErrorKind::ReadFailure);
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
        assert_eq!(error.kind(), ErrorKind::MalformedResponse);
    }

    #[test]
    fn test_error_debug() {
        let error = Error::MalformedResponse("missing field `name`".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("MalformedResponse"));
        assert!(debug.contains("name"));
    }
}
