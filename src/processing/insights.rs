//! Document-level heuristics: language guess, degree lines and CV review

use crate::error::{CvInsightError, Result};
use crate::processing::language::LanguageAnalyzer;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Sentences with more tokens than this are flagged as too long
const MAX_SENTENCE_TOKENS: usize = 30;
const QUOTED_CHARS: usize = 50;

const DEGREE_TERMS: &[&str] = &[
    "master", "licence", "bachelor", "doctorat", "phd", "bac", "bts", "dut", "ingénieur",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Fr,
    En,
    Unknown,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Language::Fr => "fr",
            Language::En => "en",
            Language::Unknown => "unknown",
        };
        f.write_str(code)
    }
}

/// Review of a CV: writing tips, missing content and overly long sentences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CvImprovements {
    pub style: Vec<String>,
    pub content: Vec<String>,
    pub grammar: Vec<String>,
    pub improved_sections: BTreeMap<String, String>,
}

pub struct CvReviewer {
    analyzer: Arc<dyn LanguageAnalyzer>,
    french_markers: Regex,
    english_markers: Regex,
    year: Regex,
    quantified_result: Regex,
    contact: Regex,
}

impl CvReviewer {
    pub fn new(analyzer: Arc<dyn LanguageAnalyzer>) -> Result<Self> {
        let compile = |pattern: &str| {
            Regex::new(pattern)
                .map_err(|e| CvInsightError::Processing(format!("Invalid review pattern: {}", e)))
        };

        Ok(Self {
            analyzer,
            french_markers: compile(r"\b(le|la|et|est|vous|nous|je|de)\b")?,
            english_markers: compile(r"\b(the|and|is|you|we|i|of)\b")?,
            year: compile(r"\b(19|20)\d{2}\b")?,
            quantified_result: compile(r"\b\d+%|\b\d+\s*(euros|€|k€|k)\b")?,
            contact: compile(r"(email|e-mail|mail|courriel|tél|tel|téléphone|telephone|portable|contact)")?,
        })
    }

    /// Function-word heuristic. French wins whenever one of its markers is
    /// present, even in mostly English text.
    pub fn detect_language(&self, text: &str) -> Language {
        let lowered = text.to_lowercase();
        if self.french_markers.is_match(&lowered) {
            Language::Fr
        } else if self.english_markers.is_match(&lowered) {
            Language::En
        } else {
            Language::Unknown
        }
    }

    /// Lines naming a diploma
    pub fn extract_degrees(text: &str) -> Vec<String> {
        text.lines()
            .filter(|line| {
                let lower = line.to_lowercase();
                DEGREE_TERMS.iter().any(|term| lower.contains(term))
            })
            .map(str::to_string)
            .collect()
    }

    pub fn suggest_improvements(&self, text: &str) -> CvImprovements {
        let style = vec![
            "Utilisez des verbes d'action pour décrire vos expériences".to_string(),
            "Évitez les phrases à la première personne (je, mon, ma)".to_string(),
            "Soyez concis et précis dans vos descriptions".to_string(),
        ];

        let mut content = Vec::new();
        if !self.year.is_match(text) {
            content.push("Ajoutez des dates précises pour vos expériences et formations".to_string());
        }
        if !self.quantified_result.is_match(text) {
            content.push("Quantifiez vos résultats avec des chiffres précis".to_string());
        }
        if !self.contact.is_match(&text.to_lowercase()) {
            content.push("Ajoutez vos coordonnées complètes (email, téléphone)".to_string());
        }

        let grammar = self
            .analyzer
            .sentences(text)
            .into_iter()
            .filter(|sentence| self.analyzer.tokenize(&sentence.text).len() > MAX_SENTENCE_TOKENS)
            .map(|sentence| {
                let quoted: String = sentence.text.chars().take(QUOTED_CHARS).collect();
                format!("Phrase trop longue: '{}...'", quoted)
            })
            .collect();

        CvImprovements {
            style,
            content,
            grammar,
            improved_sections: example_sections(),
        }
    }
}

impl Default for CvReviewer {
    fn default() -> Self {
        let analyzer = Arc::new(crate::processing::text_processor::TextProcessor::new());
        Self::new(analyzer).expect("Failed to compile CV review patterns")
    }
}

fn example_sections() -> BTreeMap<String, String> {
    let mut sections = BTreeMap::new();
    sections.insert(
        "expérience".to_string(),
        "Développeur Web chez XYZ (2019-2021)\n\
         - Développement de 3 applications web générant 25% de revenus supplémentaires\n\
         - Optimisation des performances, réduisant les temps de chargement de 40%\n\
         - Collaboration avec une équipe de 5 développeurs sur des projets agiles"
            .to_string(),
    );
    sections.insert(
        "compétences".to_string(),
        "Compétences techniques: JavaScript (React, Node.js), Python, SQL, Git\n\
         Compétences personnelles: Communication, Résolution de problèmes, Travail d'équipe"
            .to_string(),
    );
    sections
}
