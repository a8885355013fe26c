use quip_plugin::Locale;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::numbers::NumberSymbols;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Configuration for the answer engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Locale used when the request's locale has no number data.
    pub default_locale: Locale,
    pub answerers: AnswerersConfig,
    pub dice: DiceConfig,
    /// Extra or overriding number symbols, keyed by locale tag.
    pub number_formats: HashMap<String, NumberSymbols>,
    pub logging: LoggingConfig,
}

/// Which built-in answerer families get registered.
///
/// **Note**: A disabled family is never registered, so its keywords fall
/// through to normal search.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct AnswerersConfig {
    /// `random string|int|float|port|sha256|uuid|color`
    pub random: bool,
    /// `min|max|avg|sum|prod|dice`
    pub statistics: bool,
    /// `base <from> <number> [to]`
    pub base: bool,
}

impl Default for AnswerersConfig {
    fn default() -> Self {
        Self {
            random: true,
            statistics: true,
            base: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct DiceConfig {
    /// Upper bound on the number of rolls in a single answer.
    ///
    /// Unlike plain `XdY` expansion, a token that would go past this budget
    /// is skipped, so with the default `dice 1001d6` has no answer. Raise it
    /// for larger rolls.
    pub max_rolls: usize,
}

impl Default for DiceConfig {
    fn default() -> Self {
        Self { max_rolls: 1000 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_locale: Locale::default(),
            answerers: AnswerersConfig::default(),
            dice: DiceConfig::default(),
            number_formats: HashMap::new(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;

        Ok(config)
    }

    /// Load configuration from `quip.yaml` if it exists, otherwise use defaults.
    pub fn load_or_default() -> Self {
        Self::load("quip.yaml").unwrap_or_default()
    }

    /// Create a new Config with default values and builder-style configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fallback locale.
    pub fn with_default_locale(mut self, locale: Locale) -> Self {
        self.default_locale = locale;
        self
    }

    /// Enable or disable answerer families.
    pub fn with_answerers(mut self, answerers: AnswerersConfig) -> Self {
        self.answerers = answerers;
        self
    }

    /// Set the per-answer dice roll budget.
    pub fn with_max_dice_rolls(mut self, max_rolls: usize) -> Self {
        self.dice.max_rolls = max_rolls;
        self
    }

    /// Add or override number symbols for a locale tag.
    pub fn with_number_format(mut self, tag: impl Into<String>, symbols: NumberSymbols) -> Self {
        self.number_formats.insert(tag.into(), symbols);
        self
    }

    /// Set the default log filter.
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.logging.level = level.into();
        self
    }
}
