//! Guided content: cover letters and the CV assistant

pub mod assistant;
pub mod cover_letter;

pub use assistant::{AssistantReply, CvAssistant, GuideStep};
pub use cover_letter::{CoverLetterRequest, Tone};
