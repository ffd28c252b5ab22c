//! PDF生成（WASM版）
//!
//! JavaScript Bridge経由で html2pdf を使用してPDF保存

use crate::export::js_bindings::export_portfolio_pdf_js;
use folio_common::export::PORTFOLIO_ELEMENT_ID;
use folio_common::PdfExportOptions;

/// 表示中のポートフォリオをPDFとして保存
///
/// 要素が描画されていなければ何もしない
pub async fn download_portfolio_pdf(options: &PdfExportOptions) -> Result<(), String> {
    let options_json = options
        .to_json()
        .map_err(|e| format!("Options serialization failed: {}", e))?;

    let result = export_portfolio_pdf_js(PORTFOLIO_ELEMENT_ID, &options_json)
        .await
        .map_err(|e| format!("PDF export failed: {:?}", e))?;

    if result.as_bool() == Some(false) {
        web_sys::console::warn_1(&"portfolio element not found; export skipped".into());
    }
    Ok(())
}
