use anyhow::{anyhow, Context, Result};
use log::{debug, warn, LevelFilter};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::render::{self, DEFAULT_INDENT};
use crate::validation::ValidatorConfig;

/// Library configuration module
/// Settings that tools embedding the model share: log verbosity, the
/// indent of diagnostic dumps and the validation checks to run.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Indent width of diagnostic dumps
    #[serde(default = "default_render_indent")]
    pub render_indent: usize,

    /// Validation settings
    #[serde(default)]
    pub validation: ValidatorConfig,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching filter for the log facade
    pub fn to_level_filter(&self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

// Implement FromStr trait for LogLevel
impl std::str::FromStr for LogLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(anyhow!("Invalid log level: {}", s)),
        }
    }
}

/// Widest indent accepted for diagnostic dumps
const MAX_RENDER_INDENT: usize = 16;

fn default_render_indent() -> usize {
    DEFAULT_INDENT
}

impl Config {
    /// Load a configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()
            .context("Configuration validation failed")?;

        Ok(config)
    }

    /// Write the configuration as pretty-printed JSON
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write config to file: {}", path.display()))?;

        Ok(())
    }

    /// Load the configuration at `path`, creating it with defaults when missing
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::from_file(path);
        }

        warn!("Config file not found at '{}', creating default config.", path.display());
        let config = Config::default();
        config.save_to_file(path)?;
        Ok(config)
    }

    /// Apply the configured log level to the log facade
    pub fn apply_log_level(&self) {
        let level = self.log_level.to_level_filter();
        log::set_max_level(level);
        debug!("Log level set to {}", level);
    }

    /// Render a diagnostic dump of `value` with the configured indent
    pub fn render<T: Serialize + ?Sized>(&self, value: &T) -> String {
        render::to_pretty_string(value, self.render_indent)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.render_indent == 0 || self.render_indent > MAX_RENDER_INDENT {
            return Err(anyhow!(
                "render_indent must be between 1 and {}, got {}",
                MAX_RENDER_INDENT,
                self.render_indent
            ));
        }

        if !(self.validation.tolerance >= 0.0) {
            return Err(anyhow!(
                "validation tolerance must be a non-negative number, got {}",
                self.validation.tolerance
            ));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: LogLevel::default(),
            render_indent: default_render_indent(),
            validation: ValidatorConfig::default(),
        }
    }
}
