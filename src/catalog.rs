//! Skill catalog: reference tables for skill matching and job lookups
//!
//! The catalog is plain configuration data. The built-in copy is embedded
//! from `data/catalog.toml`; deployments can point `catalog.path` at their
//! own file to extend it without touching the scoring code.

use crate::error::{CvInsightError, Result};
use crate::processing::language::EntityCategory;
use serde::{Deserialize, Serialize};
use std::path::Path;

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.toml");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCatalog {
    #[serde(default)]
    pub version: u32,
    /// Terms matched as whole words against lower-cased text
    pub common_skills: Vec<String>,
    /// Expected skills per job, used for the job match score
    pub job_market: Vec<JobSkillEntry>,
    /// Job-specific skills, used for relevance ranking and suggestions
    pub job_profiles: Vec<JobSkillEntry>,
    pub relevance_jobs: Vec<String>,
    pub suggestion_fallback: Vec<String>,
    pub market_fallback: Vec<String>,
    pub profile_fallback: Vec<String>,
    #[serde(default)]
    pub entities: Vec<GazetteerEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSkillEntry {
    pub key: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GazetteerEntry {
    pub term: String,
    pub category: EntityCategory,
}

impl SkillCatalog {
    /// The catalog shipped with the crate
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| {
            CvInsightError::Configuration(format!("Invalid catalog {}: {}", path.display(), e))
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut catalog: SkillCatalog = toml::from_str(content)?;
        catalog.normalize();
        catalog.validate()?;
        Ok(catalog)
    }

    /// Lower-case every matching key so lookups never depend on how the
    /// file was written.
    fn normalize(&mut self) {
        for skill in &mut self.common_skills {
            *skill = skill.trim().to_lowercase();
        }
        self.common_skills.retain(|s| !s.is_empty());
        self.common_skills.dedup();

        for entry in self.job_market.iter_mut().chain(self.job_profiles.iter_mut()) {
            entry.key = entry.key.trim().to_lowercase();
        }
        for job in &mut self.relevance_jobs {
            *job = job.trim().to_lowercase();
        }
    }

    fn validate(&self) -> Result<()> {
        if self.common_skills.is_empty() {
            return Err(CvInsightError::Configuration(
                "catalog must declare at least one common skill".to_string(),
            ));
        }
        if let Some(entry) = self
            .job_market
            .iter()
            .chain(self.job_profiles.iter())
            .find(|e| e.key.is_empty())
        {
            return Err(CvInsightError::Configuration(format!(
                "catalog job entry with skills {:?} has an empty key",
                entry.skills
            )));
        }
        Ok(())
    }

    /// First `job_market` entry whose key is contained in the title
    pub fn find_market_entry(&self, job_title: &str) -> Option<&JobSkillEntry> {
        first_match(&self.job_market, job_title)
    }

    /// Expected skills for a job title, or the generic market list
    pub fn market_skills_for(&self, job_title: &str) -> &[String] {
        self.find_market_entry(job_title)
            .map(|e| e.skills.as_slice())
            .unwrap_or(&self.market_fallback)
    }

    pub fn find_profile_entry(&self, job_title: &str) -> Option<&JobSkillEntry> {
        first_match(&self.job_profiles, job_title)
    }

    /// Job-specific skills for a title, or the generic profile list
    pub fn profile_skills_for(&self, job_title: &str) -> &[String] {
        self.find_profile_entry(job_title)
            .map(|e| e.skills.as_slice())
            .unwrap_or(&self.profile_fallback)
    }

    pub fn skill_count(&self) -> usize {
        self.common_skills.len()
    }
}

impl Default for SkillCatalog {
    fn default() -> Self {
        Self::builtin().expect("Embedded skill catalog is invalid")
    }
}

fn first_match<'a>(entries: &'a [JobSkillEntry], job_title: &str) -> Option<&'a JobSkillEntry> {
    let title = job_title.to_lowercase();
    entries.iter().find(|entry| title.contains(&entry.key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = SkillCatalog::builtin().unwrap();
        assert!(catalog.skill_count() > 40);
        assert_eq!(catalog.relevance_jobs.len(), 6);
        assert!(catalog.common_skills.contains(&"node.js".to_string()));
        assert!(!catalog.entities.is_empty());
    }

    #[test]
    fn test_web_developer_wins_over_developer() {
        let catalog = SkillCatalog::default();
        let skills = catalog.market_skills_for("Développeur Web");
        assert_eq!(skills[0], "HTML");
        assert!(skills.contains(&"GraphQL".to_string()));

        let skills = catalog.market_skills_for("Développeur backend");
        assert_eq!(skills[0], "Python");
    }

    #[test]
    fn test_unknown_title_uses_fallbacks() {
        let catalog = SkillCatalog::default();
        assert_eq!(catalog.market_skills_for("Boulanger"), catalog.market_fallback.as_slice());
        assert_eq!(catalog.profile_skills_for("Boulanger"), catalog.profile_fallback.as_slice());
        assert!(catalog.find_profile_entry("Boulanger").is_none());
    }

    #[test]
    fn test_custom_catalog_keys_are_normalized() {
        let catalog = SkillCatalog::from_toml_str(
            r#"
            common_skills = ["Rust", " Tokio "]
            relevance_jobs = ["Backend"]
            suggestion_fallback = []
            market_fallback = []
            profile_fallback = []

            [[job_market]]
            key = "Backend"
            skills = ["Rust"]

            [[job_profiles]]
            key = "BACKEND"
            skills = ["Tokio"]
            "#,
        )
        .unwrap();

        assert_eq!(catalog.common_skills, vec!["rust", "tokio"]);
        assert_eq!(catalog.market_skills_for("Senior backend engineer"), ["Rust".to_string()]);
        assert_eq!(catalog.profile_skills_for("backend"), ["Tokio".to_string()]);
    }

    #[test]
    fn test_empty_skill_list_is_rejected() {
        let result = SkillCatalog::from_toml_str(
            r#"
            common_skills = []
            job_market = []
            job_profiles = []
            relevance_jobs = []
            suggestion_fallback = []
            market_fallback = []
            profile_fallback = []
            "#,
        );
        assert!(matches!(result, Err(CvInsightError::Configuration(_))));
    }
}
