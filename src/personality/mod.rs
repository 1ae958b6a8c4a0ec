//! Personality questionnaire analysis
//!
//! Two independent scoring strategies share one profile shape: the
//! four-axis type model and the five-trait model. Unknown test kinds
//! produce an unresolved profile rather than an error.

pub mod answers;
pub mod axis;
pub mod trait_model;

pub use answers::PersonalityAnswerSet;

use crate::config::PersonalityConfig;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestKind {
    Axis,
    Trait,
}

impl TestKind {
    pub fn from_id(id: u32) -> Option<Self> {
        match id {
            1 => Some(TestKind::Axis),
            2 => Some(TestKind::Trait),
            _ => None,
        }
    }

    /// Resolves a numeric test id or a test name
    pub fn resolve(name_or_id: &str) -> Option<Self> {
        let key = name_or_id.trim().to_lowercase();
        if let Ok(id) = key.parse::<u32>() {
            return Self::from_id(id);
        }
        match key.as_str() {
            "axis" | "mbti" => Some(TestKind::Axis),
            "trait" | "big-five" | "bigfive" | "big5" => Some(TestKind::Trait),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    Axis,
    Trait,
    Unresolved,
}

impl From<TestKind> for ProfileKind {
    fn from(kind: TestKind) -> Self {
        match kind {
            TestKind::Axis => ProfileKind::Axis,
            TestKind::Trait => ProfileKind::Trait,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalityProfile {
    pub kind: ProfileKind,
    pub label: String,
    pub description: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub career_suggestions: Vec<String>,
    /// Raw dimension scores: axis sums or normalized trait scores
    pub scores: BTreeMap<String, f64>,
}

impl PersonalityProfile {
    pub fn unresolved() -> Self {
        Self {
            kind: ProfileKind::Unresolved,
            label: "Indéterminé".to_string(),
            description: "Type de test non reconnu".to_string(),
            strengths: Vec::new(),
            weaknesses: Vec::new(),
            career_suggestions: Vec::new(),
            scores: BTreeMap::new(),
        }
    }
}

pub struct PersonalityAnalyzer {
    config: PersonalityConfig,
}

impl PersonalityAnalyzer {
    pub fn new(config: PersonalityConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PersonalityConfig {
        &self.config
    }

    pub fn analyze(&self, kind: Option<TestKind>, answers: &PersonalityAnswerSet) -> PersonalityProfile {
        let Some(kind) = kind else {
            warn!("Unrecognized personality test, returning an unresolved profile");
            return PersonalityProfile::unresolved();
        };

        debug!("Analyzing {} answers with the {:?} model", answers.len(), kind);
        match kind {
            TestKind::Axis => axis::analyze(answers, self.config.axis_midpoint),
            TestKind::Trait => trait_model::analyze(answers),
        }
    }
}

impl Default for PersonalityAnalyzer {
    fn default() -> Self {
        Self::new(PersonalityConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_test_kind() {
        assert_eq!(TestKind::resolve("1"), Some(TestKind::Axis));
        assert_eq!(TestKind::resolve("2"), Some(TestKind::Trait));
        assert_eq!(TestKind::resolve("MBTI"), Some(TestKind::Axis));
        assert_eq!(TestKind::resolve("big-five"), Some(TestKind::Trait));
        assert_eq!(TestKind::resolve("3"), None);
        assert_eq!(TestKind::resolve("horoscope"), None);
    }

    #[test]
    fn test_unknown_kind_is_unresolved() {
        let profile = PersonalityAnalyzer::default().analyze(None, &PersonalityAnswerSet::default());

        assert_eq!(profile.kind, ProfileKind::Unresolved);
        assert_eq!(profile.label, "Indéterminé");
        assert!(profile.strengths.is_empty());
        assert!(profile.career_suggestions.is_empty());
        assert!(profile.scores.is_empty());
    }

    #[test]
    fn test_configured_midpoint_is_used() {
        let config = PersonalityConfig {
            likert_min: 1,
            likert_max: 7,
            axis_midpoint: 4,
        };
        let answers = PersonalityAnswerSet::new([(1, 4), (2, 4)].into_iter().collect(), &config).unwrap();
        let profile = PersonalityAnalyzer::new(config).analyze(Some(TestKind::Axis), &answers);

        assert!(profile.label.starts_with('E'));
        assert_eq!(profile.scores["E-I"], -2.0);
    }

    #[test]
    fn test_profile_serializes_kind_tag() {
        let profile = PersonalityProfile::unresolved();
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["kind"], "unresolved");
    }
}
