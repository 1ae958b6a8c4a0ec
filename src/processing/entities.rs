//! Gazetteer-based named-entity recognition

use crate::catalog::GazetteerEntry;
use crate::error::{CvInsightError, Result};
use crate::processing::language::{Entity, EntityCategory};
use aho_corasick::{AhoCorasick, MatchKind};

/// Recognizes known names (products, organizations, languages, places)
/// at word boundaries. Matching is case-sensitive: capitalization is the
/// only signal separating "Orange" the company from the colour.
#[derive(Debug, Clone)]
pub struct GazetteerRecognizer {
    matcher: AhoCorasick,
    categories: Vec<EntityCategory>,
}

impl GazetteerRecognizer {
    pub fn new(entries: &[GazetteerEntry]) -> Result<Self> {
        let patterns: Vec<&str> = entries.iter().map(|e| e.term.as_str()).collect();
        let matcher = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&patterns)
            .map_err(|e| CvInsightError::Processing(format!("Failed to build entity matcher: {}", e)))?;

        Ok(Self {
            matcher,
            categories: entries.iter().map(|e| e.category).collect(),
        })
    }

    pub fn recognize(&self, text: &str) -> Vec<Entity> {
        self.matcher
            .find_iter(text)
            .filter(|m| is_word_boundary(text, m.start(), m.end()))
            .map(|m| Entity {
                text: text[m.start()..m.end()].to_string(),
                category: self.categories[m.pattern().as_usize()],
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

fn is_word_boundary(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.map_or(false, char::is_alphanumeric) && !after.map_or(false, char::is_alphanumeric)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(term: &str, category: EntityCategory) -> GazetteerEntry {
        GazetteerEntry {
            term: term.to_string(),
            category,
        }
    }

    #[test]
    fn test_recognizes_entities_at_word_boundaries() {
        let recognizer = GazetteerRecognizer::new(&[
            entry("Rust", EntityCategory::Language),
            entry("Google", EntityCategory::Organization),
            entry("Power BI", EntityCategory::Product),
        ])
        .unwrap();

        let entities = recognizer.recognize("Worked at Google on Rust services and Power BI dashboards.");
        let names: Vec<&str> = entities.iter().map(|e| e.text.as_str()).collect();

        assert_eq!(names, vec!["Google", "Rust", "Power BI"]);
        assert_eq!(entities[0].category, EntityCategory::Organization);
    }

    #[test]
    fn test_ignores_partial_words_and_lowercase() {
        let recognizer = GazetteerRecognizer::new(&[entry("Rust", EntityCategory::Language)]).unwrap();

        assert!(recognizer.recognize("Rusty pipes").is_empty());
        assert!(recognizer.recognize("rust on the car").is_empty());
    }
}
