//! Application configuration.
//!
//! Layered the usual way: built-in defaults, then an optional TOML file,
//! then `TROLLEY_*` environment variables, then programmatic overrides,
//! then validation.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::suggest::{
    RankingOptions, ScoringWeights, DEFAULT_CACHE_CAPACITY, DEFAULT_DEBOUNCE_MS,
    DEFAULT_MIN_QUERY_LEN, DEFAULT_WEIGHTS,
};

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub pricing: PricingConfig,
    pub suggest: SuggestConfig,
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug)]
pub struct PricingConfig {
    /// Display currency code used in price summaries.
    pub currency: String,
}

#[derive(Clone, Debug)]
pub struct SuggestConfig {
    pub debounce_ms: u64,
    pub min_query_len: usize,
    pub cache_capacity: usize,
    pub frequency_weight: i64,
    pub recency_weight: i64,
    pub learning_weight: i64,
}

#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Validation(format!(
                "unsupported log format `{other}` (expected compact|pretty|json)"
            ))),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub currency: Option<String>,
    pub debounce_ms: Option<u64>,
    pub log_level: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub config_path: Option<PathBuf>,
    pub require_file: bool,
    pub overrides: ConfigOverrides,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse config file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },
    #[error("required config file was not found: `{0}`")]
    MissingConfigFile(PathBuf),
    #[error("invalid environment override for `{key}`: `{value}`")]
    InvalidEnvOverride { key: String, value: String },
    #[error("configuration validation failed: {0}")]
    Validation(String),
}

#[derive(Debug, Default, Deserialize)]
struct ConfigPatch {
    pricing: Option<PricingPatch>,
    suggest: Option<SuggestPatch>,
    logging: Option<LoggingPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct PricingPatch {
    currency: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct SuggestPatch {
    debounce_ms: Option<u64>,
    min_query_len: Option<usize>,
    cache_capacity: Option<usize>,
    frequency_weight: Option<i64>,
    recency_weight: Option<i64>,
    learning_weight: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
struct LoggingPatch {
    level: Option<String>,
    format: Option<LogFormat>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            pricing: PricingConfig { currency: "EUR".to_string() },
            suggest: SuggestConfig {
                debounce_ms: DEFAULT_DEBOUNCE_MS,
                min_query_len: DEFAULT_MIN_QUERY_LEN,
                cache_capacity: DEFAULT_CACHE_CAPACITY,
                frequency_weight: DEFAULT_WEIGHTS.frequency,
                recency_weight: DEFAULT_WEIGHTS.recency,
                learning_weight: DEFAULT_WEIGHTS.learning,
            },
            logging: LoggingConfig { level: "info".to_string(), format: LogFormat::Compact },
        }
    }
}

impl AppConfig {
    pub fn load(options: LoadOptions) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let maybe_path = resolve_config_path(options.config_path.as_deref());

        if let Some(path) = maybe_path {
            let patch = read_patch(&path)?;
            config.apply_patch(patch);
        } else if options.require_file {
            let expected = options.config_path.unwrap_or_else(|| PathBuf::from("trolley.toml"));
            return Err(ConfigError::MissingConfigFile(expected));
        }

        config.apply_env_overrides()?;
        config.apply_overrides(options.overrides);
        config.validate()?;

        Ok(config)
    }

    /// Ranking-engine tunables derived from the `[suggest]` and `[pricing]`
    /// sections.
    pub fn ranking_options(&self) -> RankingOptions {
        RankingOptions {
            debounce: Duration::from_millis(self.suggest.debounce_ms),
            min_query_len: self.suggest.min_query_len,
            cache_capacity: self.suggest.cache_capacity,
            weights: ScoringWeights {
                frequency: self.suggest.frequency_weight,
                recency: self.suggest.recency_weight,
                learning: self.suggest.learning_weight,
            },
            currency: self.pricing.currency.clone(),
        }
    }

    fn apply_patch(&mut self, patch: ConfigPatch) {
        if let Some(pricing) = patch.pricing {
            if let Some(currency) = pricing.currency {
                self.pricing.currency = currency;
            }
        }

        if let Some(suggest) = patch.suggest {
            if let Some(debounce_ms) = suggest.debounce_ms {
                self.suggest.debounce_ms = debounce_ms;
            }
            if let Some(min_query_len) = suggest.min_query_len {
                self.suggest.min_query_len = min_query_len;
            }
            if let Some(cache_capacity) = suggest.cache_capacity {
                self.suggest.cache_capacity = cache_capacity;
            }
            if let Some(frequency_weight) = suggest.frequency_weight {
                self.suggest.frequency_weight = frequency_weight;
            }
            if let Some(recency_weight) = suggest.recency_weight {
                self.suggest.recency_weight = recency_weight;
            }
            if let Some(learning_weight) = suggest.learning_weight {
                self.suggest.learning_weight = learning_weight;
            }
        }

        if let Some(logging) = patch.logging {
            if let Some(level) = logging.level {
                self.logging.level = level;
            }
            if let Some(format) = logging.format {
                self.logging.format = format;
            }
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Some(currency) = read_env("TROLLEY_CURRENCY") {
            self.pricing.currency = currency;
        }
        if let Some(value) = read_env("TROLLEY_SUGGEST_DEBOUNCE_MS") {
            self.suggest.debounce_ms = parse_env("TROLLEY_SUGGEST_DEBOUNCE_MS", &value)?;
        }
        if let Some(value) = read_env("TROLLEY_SUGGEST_MIN_QUERY_LEN") {
            self.suggest.min_query_len = parse_env("TROLLEY_SUGGEST_MIN_QUERY_LEN", &value)?;
        }
        if let Some(value) = read_env("TROLLEY_SUGGEST_CACHE_CAPACITY") {
            self.suggest.cache_capacity = parse_env("TROLLEY_SUGGEST_CACHE_CAPACITY", &value)?;
        }
        if let Some(level) = read_env("TROLLEY_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(value) = read_env("TROLLEY_LOG_FORMAT") {
            self.logging.format = value.parse()?;
        }
        Ok(())
    }

    fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(currency) = overrides.currency {
            self.pricing.currency = currency;
        }
        if let Some(debounce_ms) = overrides.debounce_ms {
            self.suggest.debounce_ms = debounce_ms;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.pricing.currency.trim().is_empty() {
            return Err(ConfigError::Validation("pricing.currency must not be empty".into()));
        }
        if self.suggest.cache_capacity == 0 {
            return Err(ConfigError::Validation("suggest.cache_capacity must be at least 1".into()));
        }
        if self.suggest.frequency_weight < 0
            || self.suggest.recency_weight < 0
            || self.suggest.learning_weight < 0
        {
            return Err(ConfigError::Validation("suggest score weights must be non-negative".into()));
        }
        Ok(())
    }
}

fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return path.exists().then(|| path.to_path_buf());
    }
    let default = PathBuf::from("trolley.toml");
    default.exists().then_some(default)
}

fn read_patch(path: &Path) -> Result<ConfigPatch, ConfigError> {
    let contents = fs::read_to_string(path)
        .map_err(|source| ConfigError::ReadFile { path: path.to_path_buf(), source })?;
    toml::from_str(&contents)
        .map_err(|source| ConfigError::ParseFile { path: path.to_path_buf(), source })
}

fn read_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}
