//! Insight engine: one entry point over every text, scoring and profile
//! operation

use crate::catalog::SkillCatalog;
use crate::completion::{self, ProfileCompletionInputs};
use crate::compose::cover_letter::{self, CoverLetterRequest};
use crate::compose::CvAssistant;
use crate::config::Config;
use crate::error::{CvInsightError, Result};
use crate::llm::TextGenerator;
use crate::personality::{PersonalityAnalyzer, PersonalityAnswerSet, PersonalityProfile, TestKind};
use crate::processing::{
    CvEvaluation, CvImprovements, CvReviewer, JobMatch, JobRelevance, Language, LanguageAnalyzer,
    Scorer, SkillExtractor, SkillTerm, Summarizer, TextProcessor,
};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Combined analysis of one document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextAnalysis {
    pub language: Language,
    pub skills: BTreeSet<SkillTerm>,
    pub summary: String,
    pub evaluation: CvEvaluation,
    pub experiences: Vec<String>,
    pub degrees: Vec<String>,
}

pub struct InsightEngine {
    catalog: Arc<SkillCatalog>,
    extractor: SkillExtractor,
    summarizer: Summarizer,
    scorer: Scorer,
    reviewer: CvReviewer,
    personality: PersonalityAnalyzer,
    config: Config,
}

impl InsightEngine {
    /// Builds the engine around an already constructed language analyzer.
    /// The analyzer is shared by every component and never rebuilt.
    pub fn new(analyzer: Arc<dyn LanguageAnalyzer>, catalog: Arc<SkillCatalog>, config: Config) -> Result<Self> {
        let extractor = SkillExtractor::new(&catalog, analyzer.clone())?;
        let summarizer = Summarizer::new(analyzer.clone());
        let scorer = Scorer::new(catalog.clone(), config.scoring.clone());
        let reviewer = CvReviewer::new(analyzer)?;
        let personality = PersonalityAnalyzer::new(config.personality.clone());

        info!(
            "Insight engine ready: {} catalog skills, {} gazetteer entries",
            catalog.skill_count(),
            catalog.entities.len()
        );

        Ok(Self {
            catalog,
            extractor,
            summarizer,
            scorer,
            reviewer,
            personality,
            config,
        })
    }

    /// Loads the configured catalog (or the embedded one) and the default
    /// rule-based analyzer.
    pub fn from_config(config: &Config) -> Result<Self> {
        let catalog = match &config.catalog.path {
            Some(path) => {
                debug!("Loading skill catalog from {}", path.display());
                SkillCatalog::from_path(path)?
            }
            None => SkillCatalog::builtin()?,
        };
        let analyzer = TextProcessor::from_catalog(&catalog)?;

        Self::new(Arc::new(analyzer), Arc::new(catalog), config.clone())
    }

    pub fn catalog(&self) -> &Arc<SkillCatalog> {
        &self.catalog
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn extract_skills(&self, text: &str) -> BTreeSet<SkillTerm> {
        self.extractor.extract_skills(text)
    }

    pub fn summarize(&self, text: &str) -> String {
        self.summarizer.summarize(text)
    }

    pub fn evaluate_cv(&self, text: &str) -> CvEvaluation {
        self.scorer.evaluate(&self.extract_skills(text))
    }

    pub fn compare_with_job_offers<S: AsRef<str>>(&self, skills: &[S], job_title: &str) -> JobMatch {
        self.scorer.compare_with_job_offers(skills, job_title)
    }

    pub fn calculate_job_relevance(&self, text: &str) -> Vec<JobRelevance> {
        self.rank_jobs(&self.extract_skills(text))
    }

    /// Relevance ranking over skills that were already extracted
    pub fn rank_jobs(&self, skills: &BTreeSet<SkillTerm>) -> Vec<JobRelevance> {
        self.scorer.job_relevance(skills)
    }

    /// Validates raw answers against the configured Likert range
    pub fn parse_answers<'a, I>(&self, raw: I) -> Result<PersonalityAnswerSet>
    where
        I: IntoIterator<Item = (&'a String, &'a Value)>,
    {
        PersonalityAnswerSet::from_raw(raw, self.personality.config())
    }

    pub fn analyze_personality(&self, kind: Option<TestKind>, answers: &PersonalityAnswerSet) -> PersonalityProfile {
        self.personality.analyze(kind, answers)
    }

    pub fn profile_completion(&self, inputs: &ProfileCompletionInputs) -> f64 {
        completion::completion(inputs)
    }

    pub fn detect_language(&self, text: &str) -> Language {
        self.reviewer.detect_language(text)
    }

    pub fn extract_experiences(&self, text: &str) -> Vec<String> {
        SkillExtractor::extract_experiences(text)
    }

    pub fn extract_degrees(&self, text: &str) -> Vec<String> {
        CvReviewer::extract_degrees(text)
    }

    pub fn suggest_improvements(&self, text: &str) -> CvImprovements {
        self.reviewer.suggest_improvements(text)
    }

    pub fn analyze_text(&self, text: &str) -> Result<TextAnalysis> {
        if text.trim().is_empty() {
            return Err(CvInsightError::InvalidInput("text to analyze is empty".to_string()));
        }

        let skills = self.extract_skills(text);
        let evaluation = self.scorer.evaluate(&skills);

        Ok(TextAnalysis {
            language: self.detect_language(text),
            summary: self.summarize(text),
            experiences: self.extract_experiences(text),
            degrees: self.extract_degrees(text),
            skills,
            evaluation,
        })
    }

    pub fn cover_letter(&self, cv_text: &str, request: &CoverLetterRequest) -> String {
        let skills = self.extract_skills(cv_text);
        let experiences = self.extract_experiences(cv_text);
        let job_skills = self.catalog.profile_skills_for(&request.job_title);

        cover_letter::compose(request, &skills, &experiences, job_skills)
    }

    /// Assistant sharing this engine's catalog and generation timeout
    pub fn assistant(&self, generator: Arc<dyn TextGenerator>) -> CvAssistant {
        CvAssistant::new(generator, self.catalog.clone(), self.config.generation.timeout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::Tone;

    fn engine() -> InsightEngine {
        InsightEngine::from_config(&Config::default()).unwrap()
    }

    #[test]
    fn test_evaluate_cv_counts_extracted_skills() {
        let evaluation = engine().evaluate_cv("Python, SQL and Docker on AWS");
        assert_eq!(evaluation.skill_count, 4);
        assert!((evaluation.score - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_analyze_text_rejects_empty_input() {
        assert!(matches!(engine().analyze_text("  \n"), Err(CvInsightError::InvalidInput(_))));
    }

    #[test]
    fn test_analyze_text_combines_every_analysis() {
        let text = "Je suis développeur Python.\nMaster informatique 2018\nExperience: 3 ans chez Capgemini";
        let analysis = engine().analyze_text(text).unwrap();

        assert_eq!(analysis.language, Language::Fr);
        assert!(analysis.skills.contains("python"));
        assert!(analysis.skills.contains("capgemini"));
        assert_eq!(analysis.degrees, vec!["Master informatique 2018"]);
        assert_eq!(analysis.experiences, vec!["Experience: 3 ans chez Capgemini"]);
        assert_eq!(analysis.evaluation.skill_count, analysis.skills.len());
    }

    #[test]
    fn test_cover_letter_uses_profile_skills() {
        let request = CoverLetterRequest {
            job_title: "Data Scientist".to_string(),
            company: "Lab".to_string(),
            tone: Tone::Professional,
        };
        let letter = engine().cover_letter("Python and SQL, some Photoshop", &request);
        assert!(letter.contains("compétences en python, sql."));
    }

    #[test]
    fn test_parse_answers_uses_configured_range() {
        let mut config = Config::default();
        config.personality.likert_max = 7;
        let engine = InsightEngine::from_config(&config).unwrap();

        let raw: serde_json::Map<String, Value> = serde_json::from_str(r#"{"1": 7}"#).unwrap();
        assert!(engine.parse_answers(&raw).is_ok());
        assert!(InsightEngine::from_config(&Config::default()).unwrap().parse_answers(&raw).is_err());
    }
}
