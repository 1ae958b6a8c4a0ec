//! CV insight library
//!
//! Rule-based text intelligence for CVs and candidate profiles: skill
//! extraction, extractive summaries, quality and job-fit scoring,
//! personality questionnaires, profile completion and template-driven
//! writing help backed by an optional text generation service.

pub mod catalog;
pub mod cli;
pub mod completion;
pub mod compose;
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod llm;
pub mod output;
pub mod personality;
pub mod processing;

pub use config::Config;
pub use engine::{InsightEngine, TextAnalysis};
pub use error::{CvInsightError, GenerationError, Result};
