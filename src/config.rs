//! Configuration management for cv-insight

use crate::error::{CvInsightError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub scoring: ScoringConfig,
    pub personality: PersonalityConfig,
    pub generation: GenerationConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// External catalog file; the embedded catalog is used when unset
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub quality_base: f64,
    pub quality_step: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalityConfig {
    pub likert_min: u8,
    pub likert_max: u8,
    /// Answers strictly above this value push an axis to its positive pole
    pub axis_midpoint: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub endpoint: String,
    pub model: String,
    /// Name of the environment variable holding the API token
    pub api_key_env: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
}

/// Report rendering format; unknown names fall back to the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl OutputFormat {
    pub fn parse(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Console,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Console => "console",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }
}

impl From<String> for OutputFormat {
    fn from(name: String) -> Self {
        Self::parse(&name)
    }
}

impl From<OutputFormat> for String {
    fn from(format: OutputFormat) -> Self {
        format.as_str().to_string()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            scoring: ScoringConfig::default(),
            personality: PersonalityConfig::default(),
            generation: GenerationConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api-inference.huggingface.co".to_string(),
            model: "mistralai/Mistral-7B-Instruct-v0.2".to_string(),
            api_key_env: "HUGGINGFACE_API_KEY".to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            color_output: true,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            quality_base: 0.5,
            quality_step: 0.05,
        }
    }
}

impl Default for PersonalityConfig {
    fn default() -> Self {
        Self {
            likert_min: 1,
            likert_max: 5,
            axis_midpoint: 3,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::from_path(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CvInsightError::Configuration(format!("Failed to parse config {}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| CvInsightError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("cv-insight")
            .join("config.toml")
    }

    fn validate(&self) -> Result<()> {
        let p = &self.personality;
        if p.likert_min > p.likert_max {
            return Err(CvInsightError::Configuration(format!(
                "likert_min ({}) is greater than likert_max ({})",
                p.likert_min, p.likert_max
            )));
        }
        if p.axis_midpoint < p.likert_min || p.axis_midpoint > p.likert_max {
            return Err(CvInsightError::Configuration(format!(
                "axis_midpoint {} lies outside the likert range {}..={}",
                p.axis_midpoint, p.likert_min, p.likert_max
            )));
        }
        let s = &self.scoring;
        if !(0.0..=1.0).contains(&s.quality_base) {
            return Err(CvInsightError::Configuration(format!(
                "scoring.quality_base {} lies outside 0.0..=1.0",
                s.quality_base
            )));
        }
        if s.quality_step.is_nan() || s.quality_step < 0.0 {
            return Err(CvInsightError::Configuration(format!(
                "scoring.quality_step {} must not be negative",
                s.quality_step
            )));
        }
        if self.generation.timeout_secs == 0 {
            return Err(CvInsightError::Configuration(
                "generation.timeout_secs must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl GenerationConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Reads the API token from the configured environment variable
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env).ok().filter(|k| !k.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_round_trips_through_toml() {
        let config = Config::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();

        assert_eq!(parsed.personality.axis_midpoint, 3);
        assert_eq!(parsed.output.format, OutputFormat::Console);
        assert!(parsed.catalog.path.is_none());
    }

    #[test]
    fn test_from_path_rejects_inverted_likert_range() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.personality.likert_min = 6;
        config.save_to(&path).unwrap();

        let result = Config::from_path(&path);
        assert!(matches!(result, Err(CvInsightError::Configuration(_))));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.scoring.quality_step = 0.1;
        config.save_to(&path).unwrap();

        let loaded = Config::from_path(&path).unwrap();
        assert_eq!(loaded.scoring.quality_step, 0.1);
    }

    #[test]
    fn test_unknown_output_format_falls_back_to_console() {
        let config: Config = toml::from_str("[output]\nformat = \"html\"\ncolor_output = false\n").unwrap();
        assert_eq!(config.output.format, OutputFormat::Console);

        let config: Config = toml::from_str("[output]\nformat = \"JSON\"\ncolor_output = true\n").unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_from_path_rejects_negative_quality_step() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.scoring.quality_step = -0.1;
        config.save_to(&path).unwrap();

        assert!(matches!(Config::from_path(&path), Err(CvInsightError::Configuration(_))));
    }

    #[test]
    fn test_from_path_rejects_quality_base_out_of_range() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        for base in [-0.2, 1.5] {
            let mut config = Config::default();
            config.scoring.quality_base = base;
            config.save_to(&path).unwrap();

            assert!(matches!(Config::from_path(&path), Err(CvInsightError::Configuration(_))));
        }
    }

    #[test]
    fn test_partial_sections_keep_field_defaults() {
        let config: Config = toml::from_str("[personality]\naxis_midpoint = 4\n").unwrap();
        assert_eq!(config.personality.axis_midpoint, 4);
        assert_eq!(config.personality.likert_min, 1);
        assert_eq!(config.personality.likert_max, 5);

        let config: Config = toml::from_str("[generation]\ntimeout_secs = 5\n").unwrap();
        assert_eq!(config.generation.timeout_secs, 5);
        assert_eq!(config.generation.endpoint, Config::default().generation.endpoint);

        let config: Config = toml::from_str("[scoring]\nquality_step = 0.1\n").unwrap();
        assert_eq!(config.scoring.quality_base, 0.5);

        let config: Config = toml::from_str("[output]\ncolor_output = false\n").unwrap();
        assert_eq!(config.output.format, OutputFormat::Console);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = toml::from_str("[scoring]\nquality_base = 0.4\nquality_step = 0.1\n").unwrap();
        assert_eq!(config.generation.timeout_secs, 30);
        assert_eq!(config.personality.likert_max, 5);
    }
}
