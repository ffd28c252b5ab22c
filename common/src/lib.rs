//! Folio Common Library
//!
//! ネイティブとWeb(WASM)で共有される型・状態遷移・Gemini連携の契約

pub mod types;
pub mod error;
pub mod intake;
pub mod prompts;
pub mod gemini;
pub mod parser;
pub mod gateway;
pub mod session;
pub mod view;
pub mod export;

pub use types::{Contact, Education, Experience, PortfolioData, Project, SocialLink, Theme};
pub use error::{Error, ErrorKind, Result};
pub use intake::ResumeFile;
pub use gemini::{GeminiRequest, GeminiResponse};
pub use parser::{extract_json, parse_portfolio};
pub use gateway::{generate_portfolio, prepare_request, Transport};
pub use session::{Phase, Session};
pub use view::{render, Screen};
pub use export::{export_file_name, export_file_stem, PdfExportOptions};
