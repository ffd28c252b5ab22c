pub mod js_bindings;
pub mod pdf_wasm;
