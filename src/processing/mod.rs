//! Text processing and analysis primitives

pub mod entities;
pub mod insights;
pub mod language;
pub mod scorer;
pub mod skill_extractor;
pub mod summarizer;
pub mod text_processor;

pub use insights::{CvImprovements, CvReviewer, Language};
pub use language::{Entity, EntityCategory, LanguageAnalyzer, SentenceSpan, Token};
pub use scorer::{CvEvaluation, JobMatch, JobRelevance, Scorer};
pub use skill_extractor::{SkillExtractor, SkillTerm};
pub use summarizer::Summarizer;
pub use text_processor::TextProcessor;
