//! Document input: format detection, byte-stream text extraction and a
//! caching file reader

pub mod file_detector;
pub mod manager;
pub mod text_extractor;

pub use file_detector::DocumentFormat;
pub use manager::InputManager;
pub use text_extractor::extract_text;
