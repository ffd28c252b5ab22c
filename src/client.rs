//! Gemini API クライアント（ネイティブ版）
//!
//! folio_common::Transport の reqwest 実装。1リクエスト1往復で、
//! タイムアウトはクライアント全体に設定する。

use crate::config::Config;
use crate::error::{FolioError, Result};
use folio_common::gemini::{api_error_message, endpoint_url, GeminiRequest, GeminiResponse};
use folio_common::{Error, Transport};
use reqwest::Client;
use std::time::Duration;

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    url: String,
    timeout_seconds: u64,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config.get_api_key()?;
        Self::with_api_key(config, api_key)
    }

    pub fn with_api_key(config: &Config, api_key: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| FolioError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            api_key,
            url: endpoint_url(&config.api_base, &config.model),
            timeout_seconds: config.timeout_seconds,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn transport_error(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Transport(format!("request timed out after {}s", self.timeout_seconds))
        } else {
            Error::Transport(err.to_string())
        }
    }
}

impl Transport for GeminiClient {
    async fn send(&self, request: &GeminiRequest) -> folio_common::Result<GeminiResponse> {
        let response = self
            .client
            .post(&self.url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            let message = api_error_message(status.as_u16(), &body);
            log::warn!("gemini api returned {}: {}", status, message);
            return Err(Error::Transport(message));
        }

        log::debug!("gemini api responded with {} bytes", body.len());
        serde_json::from_str(&body)
            .map_err(|e| Error::Transport(format!("invalid API response: {}", e)))
    }
}
