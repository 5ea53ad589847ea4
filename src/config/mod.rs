//! YAML configuration. Every field has a default, so a missing file or an
//! empty one is a valid configuration.

mod error;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub(crate) use error::ConfigError;

use crate::interpret::{default_filler_words, InterpreterConfig};

/// Where the ledger lives.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub(crate) struct DataConfig {
    /// Ledger CSV path; defaults to `transactions.csv` in the data directory
    #[serde(default)]
    pub(crate) ledger_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct DisplayConfig {
    #[serde(default = "default_currency_symbol")]
    pub(crate) currency_symbol: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
        }
    }
}

fn default_currency_symbol() -> String {
    "₹".to_string()
}

/// Chat assistant tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct AssistantConfig {
    /// Partial-ratio score (0-100) a phrase must exceed to match
    #[serde(default = "default_fuzzy_threshold")]
    pub(crate) fuzzy_threshold: f64,
    #[serde(default = "default_tax_rate_percent")]
    pub(crate) tax_rate_percent: Decimal,
    /// Words skipped when picking the category of a spoken expense
    #[serde(default = "default_filler_words")]
    pub(crate) filler_words: Vec<String>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: default_fuzzy_threshold(),
            tax_rate_percent: default_tax_rate_percent(),
            filler_words: default_filler_words(),
        }
    }
}

fn default_fuzzy_threshold() -> f64 {
    70.0
}

fn default_tax_rate_percent() -> Decimal {
    Decimal::from(5)
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub(crate) struct IncomeConfig {
    /// Starting monthly income for each session
    #[serde(default)]
    pub(crate) monthly: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error. `RUST_LOG` wins if set.
    #[serde(default = "default_log_level")]
    pub(crate) level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) data: DataConfig,
    #[serde(default)]
    pub(crate) display: DisplayConfig,
    #[serde(default)]
    pub(crate) assistant: AssistantConfig,
    #[serde(default)]
    pub(crate) income: IncomeConfig,
    #[serde(default)]
    pub(crate) logging: LoggingConfig,
}

impl Config {
    /// Load from `path`, falling back to defaults when the file does not exist.
    pub(crate) fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&content).map_err(|e| match e {
            ConfigError::InvalidYaml { source, .. } => ConfigError::InvalidYaml {
                path: path.display().to_string(),
                source,
            },
            other => other,
        })
    }

    pub(crate) fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not to a mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config =
            serde_yaml::from_str(content).map_err(|source| ConfigError::InvalidYaml {
                path: "<inline>".to_string(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.assistant.fuzzy_threshold;
        if !(0.0..=100.0).contains(&threshold) {
            return Err(ConfigError::InvalidValue {
                field: "assistant.fuzzy_threshold".to_string(),
                reason: format!("must be between 0 and 100, got {threshold}"),
            });
        }

        if self.assistant.tax_rate_percent.is_sign_negative() {
            return Err(ConfigError::InvalidValue {
                field: "assistant.tax_rate_percent".to_string(),
                reason: "must not be negative".to_string(),
            });
        }

        if self.income.monthly.is_sign_negative() {
            return Err(ConfigError::InvalidValue {
                field: "income.monthly".to_string(),
                reason: "must not be negative".to_string(),
            });
        }

        if self.display.currency_symbol.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "display.currency_symbol".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Ledger path, resolved against the data directory when not configured.
    pub(crate) fn ledger_path(&self, data_dir: &Path) -> PathBuf {
        self.data
            .ledger_file
            .clone()
            .unwrap_or_else(|| data_dir.join("transactions.csv"))
    }

    pub(crate) fn interpreter(&self) -> InterpreterConfig {
        InterpreterConfig {
            fuzzy_threshold: self.assistant.fuzzy_threshold,
            tax_rate_percent: self.assistant.tax_rate_percent,
            currency_symbol: self.display.currency_symbol.clone(),
            filler_words: self.assistant.filler_words.clone(),
        }
    }
}

#[cfg(test)]
mod tests;
