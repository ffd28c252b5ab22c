//! Export core modules shared across CLI and WASM wrappers.

pub mod pdf_core;

pub use pdf_core::{
    export_file_name, export_file_stem, Html2CanvasOptions, ImageOptions, JsPdfOptions,
    PdfExportOptions, PORTFOLIO_ELEMENT_ID,
};
