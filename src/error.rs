//! Error handling for the cv-insight engine

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CvInsightError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Document extraction error: {0}")]
    DocumentExtraction(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

/// Failures of the remote generative text service.
///
/// These never escape the assistant: every call site substitutes its
/// fallback content instead.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("generation timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("service returned empty content")]
    EmptyResponse,

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("service unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, CvInsightError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for CvInsightError {
    fn from(err: anyhow::Error) -> Self {
        CvInsightError::Processing(err.to_string())
    }
}

impl From<toml::de::Error> for CvInsightError {
    fn from(err: toml::de::Error) -> Self {
        CvInsightError::Configuration(err.to_string())
    }
}
