//! CLI interface for cv-insight

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cv-insight")]
#[command(about = "Skill extraction, scoring and guidance for CVs and profiles")]
#[command(long_about = "Extract skills, summaries and quality indicators from CV documents, \
rank job relevance, analyze personality questionnaires and draft cover letters")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Full report for a CV document
    Analyze {
        /// CV file (PDF, DOCX, TXT, MD)
        file: PathBuf,

        /// Also compare the CV against this job title
        #[arg(short, long)]
        job: Option<String>,

        /// Include experience, degree and style details
        #[arg(short, long)]
        detailed: bool,

        /// Output format: console, json, markdown (defaults to the configured one)
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// List the skills found in a CV
    Skills { file: PathBuf },

    /// Three-sentence extractive summary of a CV
    Summary { file: PathBuf },

    /// Rank the configured jobs by relevance for a CV
    Relevance { file: PathBuf },

    /// Compare a skill list with the expected skills of a job
    Compare {
        /// Comma-separated skills
        #[arg(short, long, value_delimiter = ',', required = true)]
        skills: Vec<String>,

        /// Target job title
        #[arg(short, long)]
        job: String,
    },

    /// Analyze personality questionnaire answers
    Personality {
        /// Test id (1 axis, 2 trait) or name (axis, mbti, trait, big-five)
        #[arg(short, long)]
        test: String,

        /// JSON file mapping question ids to answers
        answers: PathBuf,
    },

    /// Profile completion percentage
    Completion {
        /// The profile has a full name
        #[arg(long)]
        name: bool,

        /// The profile has an email address
        #[arg(long)]
        email: bool,

        #[arg(long, default_value_t = 0)]
        cvs: usize,

        #[arg(long, default_value_t = 0)]
        projects: usize,

        /// Number of personality test results
        #[arg(long, default_value_t = 0)]
        personality: usize,
    },

    /// Draft a cover letter from a CV
    CoverLetter {
        file: PathBuf,

        #[arg(short, long)]
        job: String,

        #[arg(long)]
        company: String,

        /// professional, friendly or enthusiastic
        #[arg(short, long, default_value = "professional")]
        tone: String,

        /// Save the letter to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Suggest skills for a job title
    SuggestSkills {
        #[arg(default_value = "")]
        job: String,
    },

    /// Ask the CV assistant a question
    Chat {
        query: String,

        #[arg(short, long)]
        job: Option<String>,
    },

    /// Step-by-step CV writing guide
    Guide {
        /// personal_info, education, experience, skills or summary
        #[arg(default_value = "")]
        step: String,

        #[arg(short, long, default_value = "")]
        job: String,
    },

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_splits_skills() {
        let cli = Cli::try_parse_from(["cv-insight", "compare", "--skills", "Python,SQL", "--job", "Développeur Web"])
            .unwrap();
        match cli.command {
            Commands::Compare { skills, job } => {
                assert_eq!(skills, vec!["Python", "SQL"]);
                assert_eq!(job, "Développeur Web");
            }
            _ => panic!("expected compare"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["cv-insight", "skills", "cv.pdf", "--verbose"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Skills { .. }));
    }

    #[test]
    fn test_guide_defaults_to_welcome() {
        let cli = Cli::try_parse_from(["cv-insight", "guide"]).unwrap();
        match cli.command {
            Commands::Guide { step, job } => {
                assert!(step.is_empty());
                assert!(job.is_empty());
            }
            _ => panic!("expected guide"),
        }
    }

    #[test]
    fn test_config_action_is_optional() {
        let cli = Cli::try_parse_from(["cv-insight", "config"]).unwrap();
        assert!(matches!(cli.command, Commands::Config { action: None }));
    }
}
