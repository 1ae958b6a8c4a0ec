//! Rule-based tokenization, sentence segmentation and entity recognition

use crate::catalog::SkillCatalog;
use crate::error::Result;
use crate::processing::entities::GazetteerRecognizer;
use crate::processing::language::{Entity, LanguageAnalyzer, SentenceSpan, Token};
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Default [`LanguageAnalyzer`] built on Unicode segmentation rules and a
/// gazetteer of known names.
pub struct TextProcessor {
    stop_words: HashSet<String>,
    recognizer: Option<GazetteerRecognizer>,
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextProcessor {
    /// Processor without entity recognition
    pub fn new() -> Self {
        Self {
            stop_words: Self::create_stop_words(),
            recognizer: None,
        }
    }

    /// Processor recognizing the entities listed in the catalog gazetteer
    pub fn from_catalog(catalog: &SkillCatalog) -> Result<Self> {
        let recognizer = GazetteerRecognizer::new(&catalog.entities)?;
        Ok(Self {
            stop_words: Self::create_stop_words(),
            recognizer: Some(recognizer),
        })
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(&word.to_lowercase())
    }

    /// Number of word tokens (punctuation excluded) in a text
    pub fn word_count(&self, text: &str) -> usize {
        self.tokenize(text).iter().filter(|t| !t.is_punct).count()
    }

    /// Collapse runs of whitespace into single spaces
    pub fn normalize_whitespace(text: &str) -> String {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Common French and English stop words
    fn create_stop_words() -> HashSet<String> {
        let stop_words = [
            // French
            "a", "à", "au", "aux", "avec", "ce", "ces", "cet", "cette", "d", "dans", "de", "des",
            "du", "elle", "elles", "en", "est", "et", "été", "être", "eu", "il", "ils", "j", "je",
            "l", "la", "le", "les", "leur", "leurs", "lui", "m", "ma", "mais", "me", "mes", "mon",
            "n", "ne", "nos", "notre", "nous", "on", "ont", "ou", "où", "par", "pas", "pour",
            "qu", "que", "qui", "s", "sa", "se", "ses", "son", "sont", "sur", "ta", "te", "tes",
            "ton", "tu", "un", "une", "vos", "votre", "vous", "y", "c", "ai", "as", "avons",
            "avez", "était", "étais", "très", "plus", "comme", "tout", "tous", "toute", "toutes",
            // English
            "an", "and", "are", "as", "at", "be", "been", "but", "by", "for", "from", "had",
            "has", "have", "he", "her", "his", "i", "if", "in", "into", "is", "it", "its", "me",
            "my", "no", "not", "of", "on", "or", "our", "she", "so", "than", "that", "the",
            "their", "them", "then", "there", "these", "they", "this", "those", "to", "too",
            "up", "us", "very", "was", "we", "were", "what", "when", "where", "which", "while",
            "who", "will", "with", "would", "you", "your", "also", "about", "all", "any", "can",
            "do", "does", "did",
        ];

        stop_words.iter().map(|&s| s.to_string()).collect()
    }
}

impl LanguageAnalyzer for TextProcessor {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        text.split_word_bounds()
            .filter(|segment| !segment.chars().all(char::is_whitespace))
            .map(|segment| {
                let is_punct = !segment.chars().any(char::is_alphanumeric);
                Token {
                    text: segment.to_string(),
                    is_stopword: !is_punct && self.is_stop_word(segment),
                    is_punct,
                }
            })
            .collect()
    }

    fn sentences(&self, text: &str) -> Vec<SentenceSpan> {
        text.split_sentence_bound_indices()
            .filter_map(|(offset, raw)| {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return None;
                }
                let lead = raw.len() - raw.trim_start().len();
                let start = offset + lead;
                Some(SentenceSpan {
                    start,
                    end: start + trimmed.len(),
                    text: trimmed.to_string(),
                })
            })
            .collect()
    }

    fn entities(&self, text: &str) -> Vec<Entity> {
        match &self.recognizer {
            Some(recognizer) => recognizer.recognize(text),
            None => Vec::new(),
        }
    }
}
