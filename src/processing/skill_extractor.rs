//! Skill extraction: catalog whole-word matching plus entity recognition

use crate::catalog::SkillCatalog;
use crate::error::{CvInsightError, Result};
use crate::processing::language::LanguageAnalyzer;
use crate::processing::text_processor::TextProcessor;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// A normalized skill name: trimmed, single-spaced and lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct SkillTerm(String);

impl SkillTerm {
    pub fn new(raw: &str) -> Self {
        Self(TextProcessor::normalize_whitespace(raw).to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for SkillTerm {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl From<&str> for SkillTerm {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<SkillTerm> for String {
    fn from(term: SkillTerm) -> Self {
        term.0
    }
}

impl AsRef<str> for SkillTerm {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for SkillTerm {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SkillTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extracts skills from free text.
///
/// Each catalog term is compiled once into a word-anchored pattern, so
/// "java" never fires inside "javascript".
pub struct SkillExtractor {
    patterns: Vec<(String, Regex)>,
    analyzer: Arc<dyn LanguageAnalyzer>,
}

impl SkillExtractor {
    pub fn new(catalog: &SkillCatalog, analyzer: Arc<dyn LanguageAnalyzer>) -> Result<Self> {
        let patterns = catalog
            .common_skills
            .iter()
            .map(|skill| Ok((skill.clone(), Self::word_pattern(skill)?)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns, analyzer })
    }

    /// Union of whole-word catalog hits and skill-bearing entities
    pub fn extract_skills(&self, text: &str) -> BTreeSet<SkillTerm> {
        if text.trim().is_empty() {
            return BTreeSet::new();
        }

        let lowered = text.to_lowercase();
        let mut skills: BTreeSet<SkillTerm> = self
            .patterns
            .iter()
            .filter(|(_, pattern)| pattern.is_match(&lowered))
            .map(|(skill, _)| SkillTerm::new(skill))
            .collect();
        let catalog_hits = skills.len();

        skills.extend(
            self.analyzer
                .entities(text)
                .into_iter()
                .filter(|entity| entity.category.is_skill_bearing())
                .map(|entity| SkillTerm::new(&entity.text))
                .filter(|term| !term.is_empty()),
        );

        debug!(
            "Extracted {} skills ({} from catalog, {} from entities)",
            skills.len(),
            catalog_hits,
            skills.len() - catalog_hits
        );
        skills
    }

    /// Lines mentioning professional experience
    pub fn extract_experiences(text: &str) -> Vec<String> {
        text.lines()
            .filter(|line| {
                let lower = line.to_lowercase();
                lower.contains("experience") || lower.contains("worked at")
            })
            .map(str::to_string)
            .collect()
    }

    /// Anchors the escaped term with `\b` on each side that starts or ends
    /// with a word character; symbols such as "c++" keep an open edge.
    fn word_pattern(term: &str) -> Result<Regex> {
        let is_word = |c: Option<char>| c.map_or(false, |c| c.is_alphanumeric() || c == '_');
        let mut pattern = String::new();
        if is_word(term.chars().next()) {
            pattern.push_str(r"\b");
        }
        pattern.push_str(&regex::escape(term));
        if is_word(term.chars().next_back()) {
            pattern.push_str(r"\b");
        }

        Regex::new(&pattern)
            .map_err(|e| CvInsightError::Processing(format!("Invalid skill pattern '{}': {}", term, e)))
    }
}
