use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{
    DEFAULT_CLEANED_PATH, DEFAULT_INPUT_PATH, DEFAULT_REPORT_PATH, MIN_CONTENT_LENGTH,
};
use crate::error::{PipelineError, Result};

/// Pipeline configuration, loaded from `config.toml` when present.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub rules: RulesConfig,
}

/// File locations for the batch input and the two output artifacts.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub input: PathBuf,
    pub cleaned: PathBuf,
    pub report: PathBuf,
}

/// Thresholds for the validation rules.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub min_content_length: usize,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            cleaned: PathBuf::from(DEFAULT_CLEANED_PATH),
            report: PathBuf::from(DEFAULT_REPORT_PATH),
        }
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            min_content_length: MIN_CONTENT_LENGTH,
        }
    }
}

impl Config {
    /// Load configuration from `config.toml` in the working directory,
    /// falling back to compiled defaults when the file does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("config.toml"))
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(config_path).map_err(|e| {
            PipelineError::Config(format!(
                "Failed to read config file '{}': {}",
                config_path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&config_content)?;
        Ok(config)
    }
}
