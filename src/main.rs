//! cv-insight: skill extraction, scoring and guidance for CVs

use anyhow::Context;
use clap::Parser;
use cv_insight::cli::{Cli, Commands, ConfigAction};
use cv_insight::completion::ProfileCompletionInputs;
use cv_insight::compose::{AssistantReply, CoverLetterRequest, Tone};
use cv_insight::config::{Config, OutputFormat};
use cv_insight::input::InputManager;
use cv_insight::llm::HuggingFaceClient;
use cv_insight::output::formatter::{save_report_to_file, suggest_filename};
use cv_insight::output::{InsightReport, ReportGenerator};
use cv_insight::personality::TestKind;
use cv_insight::InsightEngine;
use log::{error, info, warn};
use std::process;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match &cli.config {
        Some(path) => Config::from_path(path),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> anyhow::Result<()> {
    // Configuration commands must work even when the catalog is broken
    if let Commands::Config { action } = command {
        return run_config(action, &config);
    }

    let engine = InsightEngine::from_config(&config).context("Failed to build the insight engine")?;
    let mut input_manager = InputManager::new();

    match command {
        Commands::Analyze {
            file,
            job,
            detailed,
            output,
            save,
        } => {
            let format = output
                .as_deref()
                .map(OutputFormat::parse)
                .unwrap_or(config.output.format);
            info!("Analyzing {} ({})", file.display(), format.as_str());

            let text = input_manager.extract_text(&file).await?;
            let report = InsightReport::build(&engine, &text, &file.to_string_lossy(), job.as_deref())?;

            let use_colors = config.output.color_output && save.is_none();
            let generator = ReportGenerator::with_options(use_colors, detailed, true, true);
            let rendered = generator.generate_report(&report, format)?;

            match save {
                Some(path) => {
                    let path = if path.is_dir() {
                        path.join(suggest_filename(format, &file.to_string_lossy()))
                    } else {
                        path
                    };
                    save_report_to_file(&rendered, &path)?;
                    println!("Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Skills { file } => {
            let text = input_manager.extract_text(&file).await?;
            let skills = engine.extract_skills(&text);
            if config.output.format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&skills)?);
            } else {
                println!("{} skills found", skills.len());
                for skill in &skills {
                    println!("  • {}", skill);
                }
            }
        }

        Commands::Summary { file } => {
            let text = input_manager.extract_text(&file).await?;
            println!("{}", engine.summarize(&text));
        }

        Commands::Relevance { file } => {
            let text = input_manager.extract_text(&file).await?;
            let ranking = engine.calculate_job_relevance(&text);
            if config.output.format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&ranking)?);
            } else {
                for relevance in &ranking {
                    println!("{:<16} {:>3.0}%", relevance.job, relevance.score * 100.0);
                }
            }
        }

        Commands::Compare { skills, job } => {
            let result = engine.compare_with_job_offers(&skills, &job);
            if config.output.format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("Match score: {:.0}%", result.match_score * 100.0);
                println!("Matching: {}", result.matching_skills.join(", "));
                println!("Missing: {}", result.missing_skills.join(", "));
                println!("Learn next: {}", result.recommended_skills.join(", "));
            }
        }

        Commands::Personality { test, answers } => {
            let content = tokio::fs::read_to_string(&answers)
                .await
                .with_context(|| format!("Failed to read answers from {}", answers.display()))?;
            let raw: serde_json::Map<String, serde_json::Value> =
                serde_json::from_str(&content).context("Answers must be a JSON object")?;

            let kind = TestKind::resolve(&test);
            if kind.is_none() {
                warn!("Unknown personality test '{}'", test);
            }
            let answer_set = engine.parse_answers(&raw)?;
            let profile = engine.analyze_personality(kind, &answer_set);

            if config.output.format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&profile)?);
            } else {
                println!("{} - {}", profile.label, profile.description);
                println!("Strengths: {}", profile.strengths.join(", "));
                println!("Weaknesses: {}", profile.weaknesses.join(", "));
                println!("Careers: {}", profile.career_suggestions.join(", "));
                for (dimension, score) in &profile.scores {
                    println!("  {:<18} {}", dimension, score);
                }
            }
        }

        Commands::Completion {
            name,
            email,
            cvs,
            projects,
            personality,
        } => {
            let inputs = ProfileCompletionInputs {
                has_full_name: name,
                has_email: email,
                cv_count: cvs,
                project_count: projects,
                personality_count: personality,
            };
            println!("{:.1}%", engine.profile_completion(&inputs));
        }

        Commands::CoverLetter {
            file,
            job,
            company,
            tone,
            save,
        } => {
            let text = input_manager.extract_text(&file).await?;
            let request = CoverLetterRequest {
                job_title: job,
                company,
                tone: Tone::parse(&tone),
            };
            let letter = engine.cover_letter(&text, &request);

            match save {
                Some(path) => {
                    save_report_to_file(&letter, &path)?;
                    println!("Cover letter saved to {}", path.display());
                }
                None => println!("{}", letter),
            }
        }

        Commands::SuggestSkills { job } => {
            let assistant = engine.assistant(generator(&config)?);
            for skill in assistant.suggest_skills(&job).await {
                println!("  • {}", skill);
            }
        }

        Commands::Chat { query, job } => {
            let assistant = engine.assistant(generator(&config)?);
            let reply = assistant.chatbot_reply(&query, job.as_deref()).await;
            print_reply(&reply, config.output.format)?;
        }

        Commands::Guide { step, job } => {
            let assistant = engine.assistant(generator(&config)?);
            let reply = assistant.guide(&step, &job).await;
            print_reply(&reply, config.output.format)?;
        }

        Commands::Config { .. } => unreachable!("handled above"),
    }

    Ok(())
}

fn run_config(action: Option<ConfigAction>, config: &Config) -> anyhow::Result<()> {
    match action {
        Some(ConfigAction::Show) | None => {
            println!("Configuration file: {}", Config::config_path().display());
            println!("{}", toml::to_string_pretty(config).context("Failed to render configuration")?);
        }
        Some(ConfigAction::Reset) => {
            Config::default().save()?;
            println!("Configuration reset to defaults at {}", Config::config_path().display());
        }
    }
    Ok(())
}

fn generator(config: &Config) -> anyhow::Result<Arc<HuggingFaceClient>> {
    if config.generation.api_key().is_none() {
        warn!(
            "{} is not set; generated answers will use fallback content",
            config.generation.api_key_env
        );
    }
    let client = HuggingFaceClient::from_config(&config.generation)
        .context("Failed to build the generation client")?;
    Ok(Arc::new(client))
}

fn print_reply(reply: &AssistantReply, format: OutputFormat) -> anyhow::Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(reply)?);
        return Ok(());
    }

    println!("{}", reply.message);
    for suggestion in &reply.suggestions {
        println!("  • {}", suggestion);
    }
    if let Some(step) = reply.next_step {
        println!("Next step: {}", step.as_str());
    }
    Ok(())
}

