pub mod gemini;

pub use gemini::{FetchTransport, GeminiSettings};
