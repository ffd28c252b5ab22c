//! PDF export core utilities shared by CLI/WASM.
//!
//! 描画自体はブラウザ側の html2pdf に委譲し、ここでは渡す設定だけを組み立てる

use serde::Serialize;

use crate::types::PortfolioData;

/// PDF化する要素のID
pub const PORTFOLIO_ELEMENT_ID: &str = "portfolio-content";

const FILE_SUFFIX: &str = "_Portfolio";

/// 出力ファイル名（拡張子なし）
///
/// 連続する空白は1つの `_` にまとめる（"Jane  Doe" → "Jane_Doe_Portfolio"）
pub fn export_file_stem(name: &str) -> String {
    let mut stem = String::with_capacity(name.len() + FILE_SUFFIX.len());
    let mut in_space = false;

    for c in name.chars() {
        if c.is_whitespace() {
            if !in_space {
                stem.push('_');
            }
            in_space = true;
        } else {
            stem.push(c);
            in_space = false;
        }
    }

    stem.push_str(FILE_SUFFIX);
    stem
}

pub fn export_file_name(name: &str) -> String {
    format!("{}.pdf", export_file_stem(name))
}

/// html2pdf に渡す設定
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PdfExportOptions {
    pub margin: f32,
    pub filename: String,
    pub image: ImageOptions,
    pub html2canvas: Html2CanvasOptions,
    #[serde(rename = "jsPDF")]
    pub js_pdf: JsPdfOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageOptions {
    #[serde(rename = "type")]
    pub image_type: String,
    pub quality: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Html2CanvasOptions {
    pub scale: u8,
    #[serde(rename = "useCORS")]
    pub use_cors: bool,
    pub letter_rendering: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsPdfOptions {
    pub unit: String,
    pub format: String,
    pub orientation: String,
}

impl PdfExportOptions {
    /// 余白0・JPEG品質0.98・2倍スケール・レター縦
    pub fn for_portfolio(data: &PortfolioData) -> Self {
        Self {
            margin: 0.0,
            filename: export_file_name(&data.name),
            image: ImageOptions {
                image_type: "jpeg".to_string(),
                quality: 0.98,
            },
            html2canvas: Html2CanvasOptions {
                scale: 2,
                use_cors: true,
                letter_rendering: true,
            },
            js_pdf: JsPdfOptions {
                unit: "in".to_string(),
                format: "letter".to_string(),
                orientation: "portrait".to_string(),
            },
        }
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
