//! Output formatters: console, JSON and markdown renderings of a report

use crate::config::OutputFormat;
use crate::error::{CvInsightError, Result};
use crate::output::report::InsightReport;
use colored::{Color, Colorize};
use std::path::Path;

/// Number of job relevance rows shown in text renderings
const TOP_JOBS: usize = 3;

pub trait OutputFormatter {
    fn format_report(&self, report: &InsightReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Picks the formatter matching the requested format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let (prefix, color) = match level {
            1 => ("█", Color::Blue),
            2 => ("▓", Color::Green),
            _ => ("▒", Color::Yellow),
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, percentage: u8) -> String {
        let (badge, color) = match percentage {
            90..=100 => ("EXCELLENT", Color::Green),
            75..=89 => ("GOOD", Color::BrightGreen),
            60..=74 => ("FAIR", Color::Yellow),
            _ => ("SPARSE", Color::Red),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_list(&self, items: &[String], empty: &str) -> String {
        if items.is_empty() {
            return format!("  {}\n", self.colorize(empty, Color::BrightBlack));
        }
        items.iter().map(|item| format!("  • {}\n", item)).collect()
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &InsightReport) -> Result<String> {
        let analysis = &report.analysis;
        let mut output = String::new();

        output.push_str(&self.format_header("CV INSIGHT REPORT", 1));
        output.push_str(&format!(
            "Source: {} | Generated: {} | {}ms\n",
            report.metadata.source_file,
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.processing_time_ms
        ));

        output.push_str(&self.format_header("Overview", 2));
        output.push_str(&format!(
            "Quality score: {}% {}\n",
            report.quality_percentage(),
            self.format_score_badge(report.quality_percentage())
        ));
        output.push_str(&format!("Language: {}\n", analysis.language));
        output.push_str(&format!(
            "Skills ({}): {}\n",
            analysis.skills.len(),
            self.colorize(
                &analysis.skills.iter().map(|s| s.as_str()).collect::<Vec<_>>().join(", "),
                Color::Cyan
            )
        ));

        output.push_str(&self.format_header("Summary", 2));
        output.push_str(&format!("{}\n", analysis.summary));

        output.push_str(&self.format_header("Job Relevance", 2));
        let shown = if self.detailed { report.job_relevance.len() } else { TOP_JOBS };
        for relevance in report.job_relevance.iter().take(shown) {
            output.push_str(&format!("  {:<16} {:>3.0}%\n", relevance.job, relevance.score * 100.0));
        }

        if let Some(target) = &report.job_match {
            output.push_str(&self.format_header(&format!("Match: {}", target.job_title), 2));
            output.push_str(&format!("Match score: {:.0}%\n", target.result.match_score * 100.0));
            output.push_str(&format!(
                "Matching: {}\n",
                self.colorize(&target.result.matching_skills.join(", "), Color::Green)
            ));
            output.push_str(&format!(
                "Missing: {}\n",
                self.colorize(&target.result.missing_skills.join(", "), Color::Red)
            ));
            output.push_str(&format!("Learn next: {}\n", target.result.recommended_skills.join(", ")));
        }

        if self.detailed {
            output.push_str(&self.format_header("Experience", 3));
            output.push_str(&self.format_list(&analysis.experiences, "none detected"));
            output.push_str(&self.format_header("Degrees", 3));
            output.push_str(&self.format_list(&analysis.degrees, "none detected"));
        }

        output.push_str(&self.format_header("Improvements", 2));
        output.push_str(&self.format_list(&report.improvements.content, "content looks complete"));
        output.push_str(&self.format_list(&report.improvements.grammar, "no overly long sentences"));
        if self.detailed {
            output.push_str(&self.format_list(&report.improvements.style, "no style notes"));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &InsightReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn bullet_list(items: &[String]) -> String {
        if items.is_empty() {
            return "_None_\n\n".to_string();
        }
        let mut list: String = items.iter().map(|item| format!("- {}\n", item)).collect();
        list.push('\n');
        list
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &InsightReport) -> Result<String> {
        let analysis = &report.analysis;
        let mut output = String::new();

        output.push_str("# CV Insight Report\n\n");

        if self.include_metadata {
            let source = Path::new(&report.metadata.source_file)
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| report.metadata.source_file.clone());
            output.push_str(&format!(
                "**Generated:** {} | **Source:** `{}` | **Version:** {}\n\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                source,
                report.metadata.engine_version
            ));
        }

        output.push_str("## Overview\n\n");
        output.push_str(&format!("**Quality score:** {}%\n\n", report.quality_percentage()));
        output.push_str(&format!("**Language:** {}\n\n", analysis.language));
        let skills: Vec<String> = analysis.skills.iter().map(|s| format!("`{}`", s)).collect();
        output.push_str(&format!("**Skills ({}):** {}\n\n", skills.len(), skills.join(", ")));

        output.push_str("## Summary\n\n");
        output.push_str(&format!("> {}\n\n", analysis.summary));

        output.push_str("## Job Relevance\n\n");
        output.push_str("| Job | Score |\n");
        output.push_str("|-----|-------|\n");
        for relevance in &report.job_relevance {
            output.push_str(&format!("| {} | {:.0}% |\n", relevance.job, relevance.score * 100.0));
        }
        output.push('\n');

        if let Some(target) = &report.job_match {
            output.push_str(&format!("## Match: {}\n\n", target.job_title));
            output.push_str(&format!("**Match score:** {:.0}%\n\n", target.result.match_score * 100.0));
            output.push_str("**Missing skills**\n\n");
            output.push_str(&Self::bullet_list(&target.result.missing_skills));
        }

        output.push_str("## Experience\n\n");
        output.push_str(&Self::bullet_list(&analysis.experiences));
        output.push_str("## Degrees\n\n");
        output.push_str(&Self::bullet_list(&analysis.degrees));

        output.push_str("## Improvements\n\n");
        output.push_str(&Self::bullet_list(&report.improvements.style));
        output.push_str(&Self::bullet_list(&report.improvements.content));
        output.push_str(&Self::bullet_list(&report.improvements.grammar));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true, true)
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate_report(&self, report: &InsightReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content).map_err(|e| {
        CvInsightError::OutputFormatting(format!("Failed to write {}: {}", file_path.display(), e))
    })
}

pub fn suggest_filename(format: OutputFormat, source_name: &str) -> String {
    let base_name = Path::new(source_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
    };
    format!("{}_insight.{}", base_name, extension)
}
