//! Report structure gathering every analysis of one CV

use crate::engine::{InsightEngine, TextAnalysis};
use crate::error::Result;
use crate::processing::{CvImprovements, JobMatch, JobRelevance};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Instant;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightReport {
    pub analysis: TextAnalysis,

    /// Relevance of the CV for each configured job, best first
    pub job_relevance: Vec<JobRelevance>,

    pub improvements: CvImprovements,

    /// Comparison against a target job, when one was given
    pub job_match: Option<TargetJobMatch>,

    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetJobMatch {
    pub job_title: String,
    #[serde(flatten)]
    pub result: JobMatch,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub engine_version: String,
    pub source_file: String,
    pub processing_time_ms: u64,
    pub catalog_skills: usize,
}

impl InsightReport {
    pub fn build(
        engine: &InsightEngine,
        text: &str,
        source_file: &str,
        target_job: Option<&str>,
    ) -> Result<Self> {
        let start = Instant::now();

        let analysis = engine.analyze_text(text)?;
        let job_relevance = engine.rank_jobs(&analysis.skills);
        let improvements = engine.suggest_improvements(text);
        let job_match = target_job.map(|job_title| {
            let skills: Vec<&str> = analysis.skills.iter().map(|s| s.as_str()).collect();
            TargetJobMatch {
                job_title: job_title.to_string(),
                result: engine.compare_with_job_offers(&skills, job_title),
            }
        });

        Ok(Self {
            analysis,
            job_relevance,
            improvements,
            job_match,
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                source_file: source_file.to_string(),
                processing_time_ms: start.elapsed().as_millis() as u64,
                catalog_skills: engine.catalog().skill_count(),
            },
        })
    }

    /// Quality score as a whole percentage
    pub fn quality_percentage(&self) -> u8 {
        (self.analysis.evaluation.score * 100.0).round().clamp(0.0, 100.0) as u8
    }
}
