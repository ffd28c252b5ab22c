//! 生成ゲートウェイ
//!
//! 受付済みの履歴書をGeminiへ1回だけ送信し、PortfolioDataを返す。
//! 通信自体は Transport 実装（Web: fetch / ネイティブ: reqwest）に委譲する。
//! キャッシュ・リトライ・部分結果は持たない。

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::{Error, Result};
use crate::gemini::{Content, GeminiRequest, GeminiResponse, GenerationConfig, InlineData, Part};
use crate::intake::ResumeFile;
use crate::parser::parse_portfolio;
use crate::prompts::{portfolio_schema, EXTRACTION_PROMPT};
use crate::types::PortfolioData;

/// AIサービスが受け付けるMIMEタイプ
pub const SUPPORTED_MIME_TYPES: &[&str] = &["application/pdf", "text/plain", "text/markdown"];

/// Gemini API への1往復
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// リクエストを1回送信する。通信・ステータス・タイムアウトの失敗は
    /// `Error::Transport` で返す。
    async fn send(&self, request: &GeminiRequest) -> Result<GeminiResponse>;
}

/// 実効MIMEタイプを決定
///
/// 宣言タイプを優先し、無ければ拡張子から推定する
pub fn resolve_mime_type(file: &ResumeFile) -> Option<String> {
    if let Some(declared) = file.declared_type() {
        return Some(declared.to_string());
    }

    let lower = file.name.to_lowercase();
    let inferred = if lower.ends_with(".pdf") {
        "application/pdf"
    } else if lower.ends_with(".txt") {
        "text/plain"
    } else if lower.ends_with(".md") {
        "text/markdown"
    } else {
        return None;
    };
    Some(inferred.to_string())
}

/// リクエストを組み立てる（ネットワーク呼び出しなし）
pub fn prepare_request(file: &ResumeFile) -> Result<GeminiRequest> {
    let mime_type = resolve_mime_type(file)
        .filter(|mime| SUPPORTED_MIME_TYPES.contains(&mime.as_str()))
        .ok_or_else(|| {
            Error::UnsupportedFormat(
                file.declared_type()
                    .map(str::to_string)
                    .unwrap_or_else(|| "unknown".to_string()),
            )
        })?;

    log::debug!(
        "preparing generation request: {} ({}, {} bytes)",
        file.name,
        mime_type,
        file.bytes.len()
    );

    Ok(GeminiRequest {
        contents: vec![Content {
            parts: vec![
                Part::InlineData {
                    inline_data: InlineData {
                        mime_type,
                        data: STANDARD.encode(&file.bytes),
                    },
                },
                Part::Text {
                    text: EXTRACTION_PROMPT.to_string(),
                },
            ],
        }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json".to_string(),
            response_schema: portfolio_schema(),
        },
    })
}

/// 履歴書からポートフォリオを生成
pub async fn generate_portfolio<T: Transport>(transport: &T, file: &ResumeFile) -> Result<PortfolioData> {
    let request = prepare_request(file)?;
    let response = transport.send(&request).await?;

    let text = response.text().ok_or(Error::EmptyResponse)?;
    log::debug!("received {} chars from generation service", text.len());

    parse_portfolio(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    const FIXTURE: &str = r#"{
        "name": "Jane Doe", "title": "Engineer", "tagline": "Hi 👋", "about": "About ✨",
        "skills": ["Rust"], "experiences": [], "education": [], "projects": [],
        "contact": {"email": "jane@example.com", "location": "Berlin", "socials": []}
    }"#;

    /// 固定レスポンスを返すテスト用トランスポート
    struct FakeTransport {
        reply: std::result::Result<Option<String>, String>,
        calls: Cell<usize>,
        last_request: RefCell<Option<String>>,
    }

    impl FakeTransport {
        fn replying(text: Option<&str>) -> Self {
            Self {
                reply: Ok(text.map(str::to_string)),
                calls: Cell::new(0),
                last_request: RefCell::new(None),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                reply: Err(message.to_string()),
                calls: Cell::new(0),
                last_request: RefCell::new(None),
            }
        }
    }

    impl Transport for FakeTransport {
        async fn send(&self, request: &GeminiRequest) -> Result<GeminiResponse> {
            self.calls.set(self.calls.get() + 1);
            *self.last_request.borrow_mut() = Some(serde_json::to_string(request)?);
            match &self.reply {
                Ok(Some(text)) => Ok(serde_json::from_value(serde_json::json!({
                    "candidates": [{ "content": { "parts": [{ "text": text }] } }]
                }))?),
                Ok(None) => Ok(GeminiResponse::default()),
                Err(message) => Err(Error::Transport(message.clone())),
            }
        }
    }

    // =============================================
    // MIMEタイプ解決
    // =============================================

    #[test]
    fn test_resolve_prefers_declared_type() {
        let file = ResumeFile::new("resume.txt", "application/pdf", vec![]);
        assert_eq!(resolve_mime_type(&file).as_deref(), Some("application/pdf"));
    }

    #[test]
    fn test_resolve_infers_from_extension() {
        let cases = [
            ("a.pdf", "application/pdf"),
            ("a.txt", "text/plain"),
            ("a.md", "text/markdown"),
            ("A.PDF", "application/pdf"),
        ];
        for (name, expected) in cases {
            let file = ResumeFile::new(name, "", vec![]);
            assert_eq!(resolve_mime_type(&file).as_deref(), Some(expected), "{}", name);
        }
        assert_eq!(resolve_mime_type(&ResumeFile::new("a.rtf", "", vec![])), None);
    }

    // =============================================
    // リクエスト組み立て
    // =============================================

    #[test]
    fn test_prepare_request_encodes_base64() {
        let file = ResumeFile::new("resume.txt", "text/plain", b"Jane Doe".to_vec());
        let request = prepare_request(&file).unwrap();
        let json = serde_json::to_value(&request).unwrap();

        let parts = &json["contents"][0]["parts"];
        assert_eq!(parts[0]["inlineData"]["mimeType"], "text/plain");
        assert_eq!(parts[0]["inlineData"]["data"], "SmFuZSBEb2U=");
        assert_eq!(parts[1]["text"], EXTRACTION_PROMPT);
        assert_eq!(json["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(json["generationConfig"]["responseSchema"], portfolio_schema());
    }

    #[test]
    fn test_prepare_request_accepts_markdown_type() {
        let file = ResumeFile::new("notes.md", "text/markdown", b"# Jane".to_vec());
        assert!(prepare_request(&file).is_ok());
    }

    #[test]
    fn test_prepare_request_rejects_unsupported_declared_type() {
        // 拡張子で受付済みでも宣言タイプが非対応なら送信しない
        let file = ResumeFile::new("resume.pdf", "application/octet-stream", vec![1, 2, 3]);
        let err = prepare_request(&file).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(ref t) if t == "application/octet-stream"));
    }

    #[test]
    fn test_prepare_request_unknown_type() {
        let file = ResumeFile::new("resume", "", vec![]);
        let err = prepare_request(&file).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(ref t) if t == "unknown"));
    }

    // =============================================
    // 生成（往復）
    // =============================================

    #[test]
    fn test_generate_success() {
        let transport = FakeTransport::replying(Some(FIXTURE));
        let file = ResumeFile::new("resume.pdf", "application/pdf", b"%PDF-1.4".to_vec());

        let data = block_on(generate_portfolio(&transport, &file)).unwrap();
        let expected: PortfolioData = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(data, expected);
        assert_eq!(transport.calls.get(), 1);

        let sent = transport.last_request.borrow().clone().unwrap();
        assert!(sent.contains("JVBERi0xLjQ="));
    }

    #[test]
    fn test_generate_unsupported_skips_network() {
        let transport = FakeTransport::replying(Some(FIXTURE));
        let file = ResumeFile::new("photo.heic", "image/heic", vec![0]);

        let err = block_on(generate_portfolio(&transport, &file)).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
        assert_eq!(transport.calls.get(), 0);
    }

    #[test]
    fn test_generate_empty_response() {
        let transport = FakeTransport::replying(None);
        let file = ResumeFile::new("resume.txt", "", b"x".to_vec());

        let err = block_on(generate_portfolio(&transport, &file)).unwrap_err();
        assert!(matches!(err, Error::EmptyResponse));
    }

    #[test]
    fn test_generate_malformed_response() {
        let transport = FakeTransport::replying(Some(r#"{"name": "Jane"}"#));
        let file = ResumeFile::new("resume.txt", "", b"x".to_vec());

        let err = block_on(generate_portfolio(&transport, &file)).unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }

    #[test]
    fn test_generate_transport_failure_single_attempt() {
        let transport = FakeTransport::failing("API error: 500");
        let file = ResumeFile::new("resume.txt", "", b"x".to_vec());

        let err = block_on(generate_portfolio(&transport, &file)).unwrap_err();
        assert!(matches!(err, Error::Transport(_)));
        assert_eq!(transport.calls.get(), 1);
    }
}
