pub mod error_banner;
pub mod generate_button;
pub mod header;
pub mod portfolio_preview;
pub mod preview_controls;
pub mod theme_picker;
pub mod upload_area;
