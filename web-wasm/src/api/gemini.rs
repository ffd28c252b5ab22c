//! Gemini API連携（fetch版）
//!
//! folio_common::Transport の実装。1回の生成につき1リクエストのみ送信し、
//! タイマーと競わせて上限時間を超えたら TransportFailure にする。

use futures::future::{select, Either};
use gloo::timers::future::TimeoutFuture;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use folio_common::gemini::{
    api_error_message, endpoint_url, GeminiRequest, GeminiResponse, DEFAULT_MODEL, GEMINI_API_BASE,
};
use folio_common::{Error, Result, Transport};

const DEFAULT_TIMEOUT_MS: u32 = 120_000;

/// 接続設定
#[derive(Clone, Copy, Debug)]
pub struct GeminiSettings {
    pub api_key: &'static str,
    pub model: &'static str,
    pub timeout_ms: u32,
}

impl GeminiSettings {
    /// ビルド時の GEMINI_API_KEY から生成
    pub fn from_build_env() -> Self {
        Self {
            api_key: option_env!("GEMINI_API_KEY").unwrap_or(""),
            model: DEFAULT_MODEL,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn request_url(&self) -> String {
        format!("{}?key={}", endpoint_url(GEMINI_API_BASE, self.model), self.api_key)
    }
}

/// fetch API によるトランスポート
#[derive(Clone, Copy, Debug)]
pub struct FetchTransport {
    settings: GeminiSettings,
}

impl FetchTransport {
    pub fn new(settings: GeminiSettings) -> Self {
        Self { settings }
    }

    async fn post(&self, body: &str) -> Result<GeminiResponse> {
        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&JsValue::from_str(body));

        let request = Request::new_with_str_and_init(&self.settings.request_url(), &opts)
            .map_err(js_error)?;
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(js_error)?;

        let window = web_sys::window()
            .ok_or_else(|| Error::Transport("window is not available".into()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error)?;
        let resp: Response = resp_value.dyn_into().map_err(js_error)?;

        if !resp.ok() {
            let body = match resp.text() {
                Ok(promise) => JsFuture::from(promise)
                    .await
                    .ok()
                    .and_then(|v| v.as_string())
                    .unwrap_or_default(),
                Err(_) => String::new(),
            };
            return Err(Error::Transport(api_error_message(resp.status(), &body)));
        }

        let json = JsFuture::from(resp.json().map_err(js_error)?)
            .await
            .map_err(js_error)?;
        serde_wasm_bindgen::from_value(json)
            .map_err(|e| Error::Transport(format!("invalid API response: {}", e)))
    }
}

impl Transport for FetchTransport {
    async fn send(&self, request: &GeminiRequest) -> Result<GeminiResponse> {
        if self.settings.api_key.is_empty() {
            return Err(Error::Transport(
                "Gemini API key is not configured (GEMINI_API_KEY)".into(),
            ));
        }

        let body = serde_json::to_string(request)?;
        with_deadline(self.post(&body), self.settings.timeout_ms).await
    }
}

/// タイマーと競わせ、先に時間切れになれば TransportFailure
async fn with_deadline<F>(fut: F, timeout_ms: u32) -> Result<GeminiResponse>
where
    F: std::future::Future<Output = Result<GeminiResponse>>,
{
    let fut = Box::pin(fut);
    let timeout = Box::pin(TimeoutFuture::new(timeout_ms));

    match select(fut, timeout).await {
        Either::Left((result, _)) => result,
        Either::Right((_, _)) => Err(Error::Transport(timeout_message(timeout_ms))),
    }
}

fn timeout_message(timeout_ms: u32) -> String {
    format!("request timed out after {}s", timeout_ms / 1000)
}

fn js_error(value: JsValue) -> Error {
    let message = match value.dyn_ref::<js_sys::Error>() {
        Some(err) => String::from(err.message()),
        None => value.as_string().unwrap_or_else(|| format!("{:?}", value)),
    };
    Error::Transport(message)
}
