//! CV quality, job match and multi-job relevance scoring

use crate::catalog::SkillCatalog;
use crate::config::ScoringConfig;
use crate::processing::skill_extractor::SkillTerm;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

/// Number of missing skills recommended after a job comparison
const RECOMMENDED_SKILLS: usize = 3;

/// Heuristic CV quality indicator.
///
/// The score is a saturating function of the number of detected skills,
/// not a learned model: it only says "more recognizable skills".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CvEvaluation {
    pub score: f64,
    pub skill_count: usize,
}

/// Comparison of a skill list against the expected skills of one job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobMatch {
    pub match_score: f64,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub recommended_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRelevance {
    pub job: String,
    pub score: f64,
}

pub struct Scorer {
    catalog: Arc<SkillCatalog>,
    config: ScoringConfig,
}

impl Scorer {
    pub fn new(catalog: Arc<SkillCatalog>, config: ScoringConfig) -> Self {
        Self { catalog, config }
    }

    pub fn evaluate(&self, skills: &BTreeSet<SkillTerm>) -> CvEvaluation {
        let raw = self.config.quality_base + self.config.quality_step * skills.len() as f64;
        CvEvaluation {
            score: raw.min(1.0),
            skill_count: skills.len(),
        }
    }

    /// Exact (case-insensitive) comparison against the job market table
    pub fn compare_with_job_offers<S: AsRef<str>>(&self, skills: &[S], job_title: &str) -> JobMatch {
        let target = self.catalog.market_skills_for(job_title);
        let target_lower: HashSet<String> = target.iter().map(|s| s.to_lowercase()).collect();

        let mut seen = HashSet::new();
        let matching_skills: Vec<String> = skills
            .iter()
            .map(|skill| skill.as_ref())
            .filter(|skill| target_lower.contains(&skill.to_lowercase()))
            .filter(|skill| seen.insert(skill.to_lowercase()))
            .map(str::to_string)
            .collect();

        let provided: HashSet<String> = skills.iter().map(|s| s.as_ref().to_lowercase()).collect();
        let missing_skills: Vec<String> = target
            .iter()
            .filter(|skill| !provided.contains(&skill.to_lowercase()))
            .cloned()
            .collect();

        let match_score = if target.is_empty() {
            0.0
        } else {
            matching_skills.len() as f64 / target.len() as f64
        };

        JobMatch {
            match_score,
            recommended_skills: missing_skills.iter().take(RECOMMENDED_SKILLS).cloned().collect(),
            matching_skills,
            missing_skills,
        }
    }

    /// Ranks the configured jobs by how many of their skills appear inside
    /// the extracted skills.
    ///
    /// This is deliberately looser than [`Scorer::compare_with_job_offers`]:
    /// a job skill counts when it is a substring of any extracted skill.
    pub fn job_relevance(&self, skills: &BTreeSet<SkillTerm>) -> Vec<JobRelevance> {
        let mut ranking: Vec<JobRelevance> = self
            .catalog
            .relevance_jobs
            .iter()
            .map(|job| {
                let target = self.catalog.profile_skills_for(job);
                let matched = target
                    .iter()
                    .filter(|job_skill| {
                        let needle = job_skill.to_lowercase();
                        skills.iter().any(|skill| skill.as_str().contains(&needle))
                    })
                    .count();

                let score = (matched as f64 / target.len().max(1) as f64).clamp(0.0, 1.0);
                JobRelevance {
                    job: job.clone(),
                    score: round2(score),
                }
            })
            .collect();

        ranking.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranking
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
