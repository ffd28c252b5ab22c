//! JavaScript Bridge バインディング
//!
//! Rust WASM から JavaScript 関数を呼び出すためのバインディング定義。
//! PDF描画は html2pdf に委譲する。

use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "/js/portfolio-export.js")]
extern "C" {
    /// 要素をPDF化して保存
    ///
    /// # Arguments
    /// * `element_id` - PDF化する要素のID
    /// * `options_json` - html2pdf 設定のJSON文字列
    ///
    /// # Returns
    /// 要素が見つかった場合 true
    #[wasm_bindgen(js_name = "exportPortfolioPdf", catch)]
    pub async fn export_portfolio_pdf_js(
        element_id: &str,
        options_json: &str,
    ) -> Result<JsValue, JsValue>;
}
