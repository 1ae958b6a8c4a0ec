//! Tokenization and entity-recognition interface consumed by the engine

use serde::{Deserialize, Serialize};

/// A token as produced by the language analyzer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub is_stopword: bool,
    pub is_punct: bool,
}

/// A sentence with its byte span in the analyzed text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceSpan {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub category: EntityCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityCategory {
    Product,
    Organization,
    Language,
    Person,
    Location,
    Other,
}

impl EntityCategory {
    /// Categories whose entities are reported as skills
    pub fn is_skill_bearing(self) -> bool {
        matches!(
            self,
            EntityCategory::Product | EntityCategory::Organization | EntityCategory::Language
        )
    }
}

/// Tokenization, sentence segmentation and named-entity recognition.
///
/// Implementations are expensive to build and cheap to share: construct one
/// at startup and hand it to the engine behind an `Arc`.
pub trait LanguageAnalyzer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<Token>;

    /// Sentences in document order
    fn sentences(&self, text: &str) -> Vec<SentenceSpan>;

    fn entities(&self, text: &str) -> Vec<Entity>;
}
