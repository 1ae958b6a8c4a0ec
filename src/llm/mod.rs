//! Generative text service: trait seam, HTTP client and prompt templates

pub mod client;
pub mod prompts;

pub use client::HuggingFaceClient;

use crate::error::GenerationError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>, max_tokens: u32, temperature: f32) -> Self {
        Self {
            prompt: prompt.into(),
            max_tokens,
            temperature,
        }
    }
}

/// A remote text generator. Calls may fail or hang; callers are expected to
/// bound them with a timeout and substitute a fallback.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError>;

    /// Short identifier used in logs
    fn name(&self) -> &str;
}
